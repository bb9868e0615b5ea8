//! Golden pixel tests for projection parity.
//!
//! Reference pixels were produced by an independent float64 model of the
//! projection on a 16x8 source where every pixel is distinct. The pole
//! faces put several samples right on rounding boundaries, so they pin
//! the exact longitude wrap as well as the samplers.

use pano_core::Raster;
use pano_ops::{Face, FaceOptions, Interpolation, render_face, render_fisheye};

/// 16x8 source, pixel `(x, y)` = `[16x, 32y, (7x + 13y) mod 256, 255]`.
fn reference_source() -> Raster {
    let mut image = Raster::new(16, 8).expect("valid size");
    for y in 0..8u32 {
        for x in 0..16u32 {
            image.set_pixel(x, y, [(x * 16) as u8, (y * 32) as u8, ((x * 7 + y * 13) % 256) as u8, 255]);
        }
    }
    image
}

fn assert_face(face: Face, mode: Interpolation, expected: &[[u8; 3]; 16]) {
    let options = FaceOptions::default().with_interpolation(mode);
    let out = render_face(&reference_source(), face, &options).expect("render face");
    assert_eq!(out.dimensions(), (4, 4));

    for (i, want) in expected.iter().enumerate() {
        let (x, y) = ((i % 4) as u32, (i / 4) as u32);
        let [r, g, b, a] = out.pixel(x, y);
        assert_eq!([r, g, b], *want, "{face} {mode} pixel ({x}, {y})");
        assert_eq!(a, 255);
    }
}

const POS_Z_NEAREST: [[u8; 3]; 16] = [
    [224, 64, 124], [240, 64, 131], [0, 64, 26], [16, 64, 33],
    [224, 96, 137], [240, 96, 144], [0, 96, 39], [16, 96, 46],
    [224, 128, 150], [240, 128, 157], [0, 128, 52], [16, 128, 59],
    [224, 160, 163], [240, 160, 170], [0, 160, 65], [16, 160, 72],
];

const POS_Z_LINEAR: [[u8; 3]; 16] = [
    [222, 68, 125], [239, 61, 129], [2, 61, 26], [19, 68, 36],
    [222, 96, 136], [239, 93, 142], [2, 93, 39], [19, 96, 47],
    [222, 129, 150], [239, 132, 158], [2, 132, 55], [19, 129, 61],
    [222, 157, 161], [239, 164, 171], [2, 164, 68], [19, 157, 72],
];

const POS_Z_CUBIC: [[u8; 3]; 16] = [
    [222, 68, 125], [239, 61, 129], [1, 61, 25], [18, 68, 36],
    [222, 96, 136], [239, 93, 142], [1, 93, 38], [18, 96, 47],
    [222, 128, 149], [239, 131, 158], [1, 131, 54], [18, 128, 60],
    [222, 156, 160], [239, 163, 171], [1, 163, 67], [18, 156, 71],
];

const POS_Z_LANCZOS: [[u8; 3]; 16] = [
    [221, 67, 124], [239, 61, 129], [1, 61, 25], [18, 67, 35],
    [221, 96, 136], [239, 93, 142], [1, 93, 38], [18, 96, 47],
    [221, 128, 149], [239, 131, 158], [1, 131, 54], [18, 128, 60],
    [221, 156, 160], [239, 163, 171], [1, 163, 67], [18, 156, 72],
];

const NEG_X_NEAREST: [[u8; 3]; 16] = [
    [160, 64, 96], [176, 64, 103], [192, 64, 110], [208, 64, 117],
    [160, 96, 109], [176, 96, 116], [192, 96, 123], [208, 96, 130],
    [160, 128, 122], [176, 128, 129], [192, 128, 136], [208, 128, 143],
    [160, 160, 135], [176, 160, 142], [192, 160, 149], [208, 160, 156],
];

const NEG_X_LINEAR: [[u8; 3]; 16] = [
    [158, 68, 97], [175, 61, 101], [194, 61, 110], [211, 68, 120],
    [158, 96, 108], [175, 93, 114], [194, 93, 123], [211, 96, 131],
    [158, 129, 122], [175, 132, 130], [194, 132, 139], [211, 129, 145],
    [158, 157, 133], [175, 164, 143], [194, 164, 152], [211, 157, 156],
];

const NEG_X_CUBIC: [[u8; 3]; 16] = [
    [158, 68, 97], [174, 61, 101], [194, 61, 110], [210, 68, 120],
    [158, 96, 108], [174, 93, 114], [194, 93, 122], [210, 96, 131],
    [158, 128, 121], [174, 131, 130], [194, 131, 138], [210, 128, 144],
    [158, 156, 132], [174, 163, 142], [194, 163, 151], [210, 156, 155],
];

const NEG_X_LANCZOS: [[u8; 3]; 16] = [
    [158, 67, 96], [174, 61, 101], [194, 61, 110], [210, 67, 119],
    [158, 96, 108], [174, 93, 114], [194, 93, 122], [210, 96, 131],
    [158, 128, 121], [174, 131, 129], [194, 131, 138], [210, 128, 144],
    [158, 156, 133], [174, 163, 142], [194, 163, 151], [210, 156, 155],
];

const POS_Y_NEAREST: [[u8; 3]; 16] = [
    [160, 64, 96], [128, 32, 69], [112, 32, 62], [80, 64, 61],
    [176, 32, 90], [160, 0, 70], [80, 0, 35], [64, 32, 41],
    [192, 32, 97], [208, 0, 91], [32, 0, 14], [48, 32, 34],
    [208, 64, 117], [240, 32, 118], [0, 32, 13], [32, 64, 40],
];

const POS_Y_LINEAR: [[u8; 3]; 16] = [
    [153, 51, 87], [134, 39, 74], [107, 39, 63], [88, 51, 59],
    [171, 39, 91], [153, 12, 72], [88, 12, 44], [70, 39, 46],
    [198, 39, 102], [216, 12, 100], [24, 12, 16], [43, 39, 35],
    [216, 51, 115], [235, 39, 119], [6, 39, 18], [24, 51, 31],
];

const POS_Y_CUBIC: [[u8; 3]; 16] = [
    [152, 50, 87], [133, 39, 74], [107, 39, 62], [88, 50, 59],
    [171, 39, 90], [152, 9, 70], [88, 9, 42], [69, 39, 46],
    [197, 39, 102], [216, 9, 98], [24, 9, 14], [43, 39, 34],
    [216, 50, 115], [236, 39, 119], [4, 39, 17], [24, 50, 31],
];

const POS_Y_LANCZOS: [[u8; 3]; 16] = [
    [152, 51, 87], [133, 39, 74], [107, 39, 63], [88, 51, 59],
    [171, 39, 91], [152, 9, 70], [88, 9, 42], [69, 39, 46],
    [197, 39, 102], [215, 9, 97], [25, 9, 14], [43, 39, 35],
    [215, 51, 115], [236, 39, 119], [4, 39, 17], [25, 51, 32],
];

const NEG_Y_NEAREST: [[u8; 3]; 16] = [
    [208, 160, 156], [240, 192, 183], [0, 192, 78], [32, 160, 79],
    [192, 192, 162], [208, 224, 182], [32, 224, 105], [48, 192, 99],
    [176, 192, 155], [160, 224, 161], [80, 224, 126], [64, 192, 106],
    [160, 160, 135], [128, 192, 134], [112, 192, 127], [80, 160, 100],
];

const NEG_Y_LINEAR: [[u8; 3]; 16] = [
    [216, 174, 166], [235, 186, 179], [6, 186, 78], [24, 174, 82],
    [198, 186, 162], [216, 213, 181], [24, 213, 97], [43, 186, 95],
    [171, 186, 151], [153, 213, 153], [88, 213, 125], [70, 186, 106],
    [153, 174, 138], [134, 186, 134], [107, 186, 123], [88, 174, 110],
];

const NEG_Y_CUBIC: [[u8; 3]; 16] = [
    [216, 174, 165], [236, 185, 179], [4, 185, 77], [24, 174, 81],
    [197, 185, 162], [216, 215, 182], [24, 215, 98], [43, 185, 94],
    [171, 185, 150], [152, 215, 154], [88, 215, 126], [69, 185, 106],
    [152, 174, 137], [133, 185, 134], [107, 185, 122], [88, 174, 109],
];

const NEG_Y_LANCZOS: [[u8; 3]; 16] = [
    [215, 172, 164], [236, 185, 178], [4, 185, 77], [25, 172, 81],
    [197, 185, 161], [215, 215, 181], [25, 215, 98], [43, 185, 94],
    [171, 185, 150], [152, 215, 154], [88, 215, 126], [69, 185, 105],
    [152, 172, 136], [133, 185, 133], [107, 185, 122], [88, 172, 108],
];

/// 8x4 source for the fisheye, pixel `(x, y)` = `[30x, 60y, 9, 255]`.
fn fisheye_source() -> Raster {
    let mut image = Raster::new(8, 4).expect("valid size");
    for y in 0..4u32 {
        for x in 0..8u32 {
            image.set_pixel(x, y, [(x * 30) as u8, (y * 60) as u8, 9, 255]);
        }
    }
    image
}

const T: [u8; 4] = [0, 0, 0, 0];

const FISHEYE_4: [[[u8; 4]; 4]; 4] = [
    [T, T, [60, 120, 9, 255], T],
    [T, [30, 120, 9, 255], [60, 180, 9, 255], [90, 120, 9, 255]],
    [[0, 120, 9, 255], [0, 180, 9, 255], [120, 180, 9, 255], [120, 180, 9, 255]],
    [T, [210, 120, 9, 255], [180, 180, 9, 255], [150, 120, 9, 255]],
];

#[test]
fn golden_pos_z() {
    assert_face(Face::PosZ, Interpolation::Nearest, &POS_Z_NEAREST);
    assert_face(Face::PosZ, Interpolation::Linear, &POS_Z_LINEAR);
    assert_face(Face::PosZ, Interpolation::Cubic, &POS_Z_CUBIC);
    assert_face(Face::PosZ, Interpolation::Lanczos, &POS_Z_LANCZOS);
}

#[test]
fn golden_neg_x() {
    assert_face(Face::NegX, Interpolation::Nearest, &NEG_X_NEAREST);
    assert_face(Face::NegX, Interpolation::Linear, &NEG_X_LINEAR);
    assert_face(Face::NegX, Interpolation::Cubic, &NEG_X_CUBIC);
    assert_face(Face::NegX, Interpolation::Lanczos, &NEG_X_LANCZOS);
}

#[test]
fn golden_pos_y() {
    assert_face(Face::PosY, Interpolation::Nearest, &POS_Y_NEAREST);
    assert_face(Face::PosY, Interpolation::Linear, &POS_Y_LINEAR);
    assert_face(Face::PosY, Interpolation::Cubic, &POS_Y_CUBIC);
    assert_face(Face::PosY, Interpolation::Lanczos, &POS_Y_LANCZOS);
}

#[test]
fn golden_neg_y() {
    assert_face(Face::NegY, Interpolation::Nearest, &NEG_Y_NEAREST);
    assert_face(Face::NegY, Interpolation::Linear, &NEG_Y_LINEAR);
    assert_face(Face::NegY, Interpolation::Cubic, &NEG_Y_CUBIC);
    assert_face(Face::NegY, Interpolation::Lanczos, &NEG_Y_LANCZOS);
}

#[test]
fn golden_fisheye_size_4() {
    // 8x4 source is already 2·size x size, so the resize is a copy
    let out = render_fisheye(&fisheye_source(), 4).expect("render fisheye");
    for (y, row) in FISHEYE_4.iter().enumerate() {
        for (x, want) in row.iter().enumerate() {
            assert_eq!(out.pixel(x as u32, y as u32), *want, "pixel ({x}, {y})");
        }
    }
}

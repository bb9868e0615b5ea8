//! Benchmarks for panorama projection.
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use pano_core::Raster;
use pano_io::resize::{Filter, resize};
use pano_ops::{Face, FaceOptions, Interpolation, Sampler, render_cubemap, render_face, render_fisheye};

/// Synthetic equirectangular source with smooth gradients.
fn panorama(width: u32, height: u32) -> Raster {
    let mut image = Raster::new(width, height).expect("valid size");
    for y in 0..height {
        for x in 0..width {
            image.set_pixel(
                x,
                y,
                [
                    (x * 255 / width) as u8,
                    (y * 255 / height) as u8,
                    ((x + y) % 256) as u8,
                    255,
                ],
            );
        }
    }
    image
}

/// Benchmark single-point sampling per interpolation mode.
fn bench_sampler(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");
    let source = panorama(512, 256);
    let coords: Vec<(f64, f64)> = (0..10000)
        .map(|i| ((i % 509) as f64 + 0.37, (i % 251) as f64 + 0.61))
        .collect();
    group.throughput(Throughput::Elements(coords.len() as u64));

    for mode in Interpolation::ALL {
        let sampler = Sampler::new(&source, mode);
        group.bench_function(mode.name(), |b| {
            let mut px = [0u8; 4];
            b.iter(|| {
                for &(x, y) in &coords {
                    sampler.sample(black_box(x), black_box(y), &mut px);
                }
                px
            })
        });
    }

    group.finish();
}

/// Benchmark one cube face per interpolation mode.
fn bench_face(c: &mut Criterion) {
    let mut group = c.benchmark_group("face");
    let source = panorama(1024, 512);
    group.throughput(Throughput::Elements(256 * 256));

    for mode in Interpolation::ALL {
        let options = FaceOptions::default().with_interpolation(mode);
        group.bench_with_input(BenchmarkId::new("pz", mode), &options, |b, options| {
            b.iter(|| render_face(black_box(&source), Face::PosZ, options))
        });
    }

    group.finish();
}

/// Benchmark full cubemaps.
fn bench_cubemap(c: &mut Criterion) {
    let mut group = c.benchmark_group("cubemap");
    group.sample_size(20);

    for width in [512u32, 1024] {
        let source = panorama(width, width / 2);
        let options = FaceOptions::default().with_interpolation(Interpolation::Linear);
        group.bench_with_input(BenchmarkId::new("linear", width), &source, |b, src| {
            b.iter(|| render_cubemap(black_box(src), &options))
        });
    }

    group.finish();
}

/// Benchmark fisheye rendering and its pre-resize.
fn bench_fisheye(c: &mut Criterion) {
    let mut group = c.benchmark_group("fisheye");
    group.sample_size(20);
    let source = panorama(1024, 512);

    for size in [128u32, 256] {
        group.bench_with_input(BenchmarkId::new("render", size), &size, |b, &size| {
            b.iter(|| render_fisheye(black_box(&source), size))
        });
        group.bench_with_input(BenchmarkId::new("resize_lanczos3", size), &size, |b, &size| {
            b.iter(|| resize(black_box(&source), size * 2, size, Filter::Lanczos3))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sampler, bench_face, bench_cubemap, bench_fisheye);
criterion_main!(benches);

//! Cube face identifiers and their orientation.
//!
//! The cube is centered at the origin with half-extent 1. Each face maps
//! face-local `(u, v) ∈ [-1, 1]²` (u to the right, v down) to a direction
//! on its plane.

use std::fmt;
use std::str::FromStr;

use glam::DVec3;

use crate::OpsError;

/// One of the six cube faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    /// `+x`, alias `px`.
    PosX,
    /// `-x`, alias `nx`.
    NegX,
    /// `+y`, alias `py`.
    PosY,
    /// `-y`, alias `ny`.
    NegY,
    /// `+z`, alias `pz`.
    PosZ,
    /// `-z`, alias `nz`.
    NegZ,
}

impl Face {
    /// All faces in cubemap order.
    pub const ALL: [Face; 6] = [
        Face::PosX,
        Face::NegX,
        Face::PosY,
        Face::NegY,
        Face::PosZ,
        Face::NegZ,
    ];

    /// Position in [`Face::ALL`].
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Signed axis name (`+x`, `-y`, ...).
    pub fn name(&self) -> &'static str {
        match self {
            Face::PosX => "+x",
            Face::NegX => "-x",
            Face::PosY => "+y",
            Face::NegY => "-y",
            Face::PosZ => "+z",
            Face::NegZ => "-z",
        }
    }

    /// Short alias, also used as the file stem for cubemap output.
    pub fn alias(&self) -> &'static str {
        match self {
            Face::PosX => "px",
            Face::NegX => "nx",
            Face::PosY => "py",
            Face::NegY => "ny",
            Face::PosZ => "pz",
            Face::NegZ => "nz",
        }
    }

    /// Maps face-local `(u, v)` to a point on the cube surface.
    #[inline]
    pub fn direction(&self, u: f64, v: f64) -> DVec3 {
        match self {
            Face::PosZ => DVec3::new(-1.0, -u, -v),
            Face::NegZ => DVec3::new(1.0, u, -v),
            Face::PosX => DVec3::new(u, -1.0, -v),
            Face::NegX => DVec3::new(-u, 1.0, -v),
            Face::PosY => DVec3::new(-v, -u, 1.0),
            Face::NegY => DVec3::new(v, -u, -1.0),
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Face {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "+x" | "px" => Ok(Face::PosX),
            "-x" | "nx" => Ok(Face::NegX),
            "+y" | "py" => Ok(Face::PosY),
            "-y" | "ny" => Ok(Face::NegY),
            "+z" | "pz" => Ok(Face::PosZ),
            "-z" | "nz" => Ok(Face::NegZ),
            _ => Err(OpsError::InvalidFaceName(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_aliases() {
        for face in Face::ALL {
            assert_eq!(face.name().parse::<Face>().unwrap(), face);
            assert_eq!(face.alias().parse::<Face>().unwrap(), face);
            assert_eq!(face.alias().to_uppercase().parse::<Face>().unwrap(), face);
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        for bad in ["", "x", "+w", "front", "pxx"] {
            assert!(matches!(bad.parse::<Face>(), Err(OpsError::InvalidFaceName(_))));
        }
    }

    #[test]
    fn test_directions_lie_on_cube() {
        for face in Face::ALL {
            for (u, v) in [(0.0, 0.0), (-1.0, 1.0), (0.3, -0.7)] {
                let d = face.direction(u, v);
                assert_eq!(d.abs().max_element(), 1.0, "{face} ({u}, {v})");
            }
        }
    }

    #[test]
    fn test_face_centers_are_axes() {
        assert_eq!(Face::PosZ.direction(0.0, 0.0).x, -1.0);
        assert_eq!(Face::NegZ.direction(0.0, 0.0).x, 1.0);
        assert_eq!(Face::PosX.direction(0.0, 0.0).y, -1.0);
        assert_eq!(Face::NegX.direction(0.0, 0.0).y, 1.0);
        assert_eq!(Face::PosY.direction(0.0, 0.0).z, 1.0);
        assert_eq!(Face::NegY.direction(0.0, 0.0).z, -1.0);
    }

    #[test]
    fn test_display_and_order() {
        let names: Vec<String> = Face::ALL.iter().map(|f| f.to_string()).collect();
        assert_eq!(names, ["+x", "-x", "+y", "-y", "+z", "-z"]);
        for (i, face) in Face::ALL.iter().enumerate() {
            assert_eq!(face.index(), i);
        }
    }
}

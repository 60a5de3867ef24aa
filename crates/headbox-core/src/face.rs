//! The six cube faces and their fixed camera orientations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HeadboxError;
use crate::matrix::Matrix4;

/// One face of the capture cube map.
///
/// The set is closed and the order of [`CubeFace::ALL`] is a wire contract:
/// manifest views, emitted image paths and the external render loop all
/// enumerate faces as front, back, left, right, bottom, top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CubeFace {
    /// Looking along -Y (the viewer's forward direction).
    Front,
    /// Looking along +Y.
    Back,
    /// Looking along +X.
    Left,
    /// Looking along -X.
    Right,
    /// Looking along -Z.
    Bottom,
    /// Looking along +Z.
    Top,
}

impl CubeFace {
    /// All faces, in the fixed enumeration order.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::Front,
        CubeFace::Back,
        CubeFace::Left,
        CubeFace::Right,
        CubeFace::Bottom,
        CubeFace::Top,
    ];

    /// Returns the lowercase wire name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            CubeFace::Front => "front",
            CubeFace::Back => "back",
            CubeFace::Left => "left",
            CubeFace::Right => "right",
            CubeFace::Bottom => "bottom",
            CubeFace::Top => "top",
        }
    }

    /// Returns the world-from-eye orientation for a camera looking outward
    /// through this face, in a right-handed Y-up world.
    ///
    /// The translation column is zero; [`Matrix4::with_translation`] patches
    /// in the camera position. These six matrices are an external contract
    /// with the bake tool and must not change.
    #[must_use]
    pub fn world_from_eye(self) -> Matrix4 {
        #[rustfmt::skip]
        let values = match self {
            CubeFace::Front => [
                1.0, 0.0, 0.0, 0.0,
                0.0, 0.0, -1.0, 0.0,
                0.0, 1.0, 0.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
            CubeFace::Back => [
                -1.0, 0.0, 0.0, 0.0,
                0.0, 0.0, 1.0, 0.0,
                0.0, 1.0, 0.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
            CubeFace::Left => [
                0.0, 0.0, 1.0, 0.0,
                1.0, 0.0, 0.0, 0.0,
                0.0, 1.0, 0.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
            CubeFace::Right => [
                0.0, 0.0, -1.0, 0.0,
                -1.0, 0.0, 0.0, 0.0,
                0.0, 1.0, 0.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
            CubeFace::Bottom => [
                1.0, 0.0, 0.0, 0.0,
                0.0, 1.0, 0.0, 0.0,
                0.0, 0.0, 1.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
            CubeFace::Top => [
                1.0, 0.0, 0.0, 0.0,
                0.0, -1.0, 0.0, 0.0,
                0.0, 0.0, -1.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        };
        Matrix4::from_row_major(values)
    }
}

impl fmt::Display for CubeFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CubeFace {
    type Err = HeadboxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "front" => Ok(CubeFace::Front),
            "back" => Ok(CubeFace::Back),
            "left" => Ok(CubeFace::Left),
            "right" => Ok(CubeFace::Right),
            "bottom" => Ok(CubeFace::Bottom),
            "top" => Ok(CubeFace::Top),
            other => Err(HeadboxError::UnknownFace(other.to_string())),
        }
    }
}

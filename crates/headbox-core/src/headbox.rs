//! The headbox: the axis-aligned volume camera viewpoints are placed in.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// An axis-aligned box describing the viewer's reachable head positions.
///
/// Bounds are taken as given: `new` does not reorder or reject them, so a box
/// with `min > max` on some axis keeps the inverted ("flipped") affine
/// mapping in [`Headbox::point_at`]. Use [`Headbox::from_corners`] to build a
/// normalized box from two arbitrary opposite corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Headbox {
    /// Lower bounds of the box.
    pub min: DVec3,
    /// Upper bounds of the box.
    pub max: DVec3,
}

impl Headbox {
    /// Creates a headbox from explicit lower and upper bounds.
    #[must_use]
    pub const fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Creates a headbox from two opposite corners, sorting the bounds
    /// componentwise.
    #[must_use]
    pub fn from_corners(a: DVec3, b: DVec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Returns the componentwise extent `max - min`.
    #[must_use]
    pub fn extent(&self) -> DVec3 {
        self.max - self.min
    }

    /// Returns the box center.
    #[must_use]
    pub fn center(&self) -> DVec3 {
        self.point_at(DVec3::splat(0.5))
    }

    /// Maps a relative sample in `[0, 1]^3` to an absolute position via
    /// `min + (max - min) * sample`, componentwise.
    #[must_use]
    pub fn point_at(&self, sample: DVec3) -> DVec3 {
        self.min + self.extent() * sample
    }

    /// Returns whether a point lies within the bounds (inclusive).
    ///
    /// Assumes `min <= max` componentwise.
    #[must_use]
    pub fn contains(&self, point: DVec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

//! Low-discrepancy camera placement inside a headbox.
//!
//! Camera positions are drawn from a 3D Hammersley point set
//! `(i/n, radical_inverse(i, 2), radical_inverse(i, 3))`, rescaled so the
//! set's bounding box is exactly the unit cube, mapped into the headbox,
//! sorted by distance to the box center, and finally anchored by replacing
//! the center-closest sample with the exact center (the reference camera
//! viewpoint).

#![allow(clippy::cast_precision_loss)]

use glam::DVec3;

use crate::error::{HeadboxError, Result};
use crate::headbox::Headbox;

/// Computes the radical inverse of `a` in base `base`: the base-`base`
/// digits of `a` mirrored around the radix point.
///
/// # Arguments
/// * `a` - The integer index whose digits are reversed.
/// * `base` - The numeric base, at least 2.
///
/// # Returns
/// The radical inverse as a float in `[0.0, 1.0)`; `radical_inverse(0, b)`
/// is `0.0` for every base.
///
/// # Panics
/// Panics if `base < 2`.
#[must_use]
pub fn radical_inverse(mut a: u64, base: u64) -> f64 {
    assert!(base >= 2, "radical inverse base must be at least 2");

    let inv_base = 1.0 / base as f64;
    let mut digit = inv_base;
    let mut inverse = 0.0;
    while a > 0 {
        inverse += digit * (a % base) as f64;
        digit *= inv_base;
        a /= base;
    }
    inverse
}

/// Generates `count` camera positions distributed inside a headbox.
///
/// The positions are a 3D Hammersley point set stretched to fill the box
/// exactly and sorted ascending by Euclidean distance to the box center;
/// ties keep generation order. The closest position is replaced by the exact
/// center so one camera always matches the reference viewpoint. The result
/// is a pure function of `(headbox, count)`.
///
/// # Arguments
/// * `headbox` - The box to fill. Bounds are used as given (see [`Headbox`]).
/// * `count` - The number of cameras to generate. Works best as a power of
///   two, which keeps the Hammersley set well distributed.
///
/// # Errors
/// Returns [`HeadboxError::InvalidSampleCount`] when `count` is zero.
pub fn generate_camera_positions(headbox: &Headbox, count: usize) -> Result<Vec<DVec3>> {
    if count == 0 {
        return Err(HeadboxError::InvalidSampleCount);
    }

    let center = headbox.center();
    if count == 1 {
        // A single camera is the reference view from the center.
        return Ok(vec![center]);
    }

    let mut samples = Vec::with_capacity(count);
    let mut max_sample = DVec3::ZERO;
    for i in 0..count {
        let sample = DVec3::new(
            i as f64 / count as f64,
            radical_inverse(i as u64, 2),
            radical_inverse(i as u64, 3),
        );
        max_sample = max_sample.max(sample);
        samples.push(sample);
    }
    log::debug!("generated {count} Hammersley samples, componentwise max {max_sample}");

    // Stretch the set so its bounding box is the unit cube, then map it into
    // the headbox. Every component of max_sample is positive for count >= 2.
    let mut positions: Vec<DVec3> = samples
        .iter()
        .map(|sample| headbox.point_at(*sample / max_sample))
        .collect();

    // Stable sort keeps generation order for equidistant positions.
    positions.sort_by(|a, b| a.distance(center).total_cmp(&b.distance(center)));
    positions[0] = center;
    Ok(positions)
}

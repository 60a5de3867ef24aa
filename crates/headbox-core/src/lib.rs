//! Core geometry for headbox capture.
//!
//! This crate provides the deterministic pieces of the capture pipeline:
//! - [`Headbox`] - the axis-aligned volume camera viewpoints are placed in
//! - [`sampling`] - low-discrepancy camera placement inside the headbox
//! - [`CubeFace`] - the six cube-map faces and their fixed orientations
//! - [`projection`] - the shared 90° cube-face projection matrix
//! - [`manifest`] - the view-group manifest model and its builder
//!
//! Everything here is pure and synchronous; writing the manifest to disk and
//! driving the external bake tool live in the `headbox` facade crate.

// Error conditions are documented on the error enum variants
#![allow(clippy::missing_errors_doc)]

pub mod error;
pub mod face;
pub mod headbox;
pub mod manifest;
pub mod matrix;
pub mod projection;
pub mod sampling;

pub use error::{HeadboxError, Result};
pub use face::CubeFace;
pub use headbox::Headbox;
pub use manifest::{
    build_view_groups, ColorImageFile, DepthImageChannel, DepthImageFile, DepthType,
    ImagePathPattern, Manifest, ProjectiveCamera, View, ViewGroup, ViewGroupConfig,
    DEFAULT_COLOR_PATTERN, DEFAULT_DEPTH_PATTERN,
};
pub use matrix::Matrix4;
pub use projection::cube_face_projection;
pub use sampling::{generate_camera_positions, radical_inverse};

// Re-export the math type used throughout the API
pub use glam::DVec3;

//! headbox: camera placement and view-group manifest generation for
//! light-field capture.
//!
//! A capture run places cameras inside a "headbox" (the axis-aligned volume
//! of reachable viewer head positions), renders six cube-map faces per
//! camera with an external renderer, and hands a JSON manifest describing
//! every view to an external bake tool. This crate owns the deterministic
//! parts: camera placement, the per-face camera matrices, the manifest, and
//! the bake-tool command line.
//!
//! # Quick Start
//!
//! ```no_run
//! use headbox::*;
//!
//! fn main() -> Result<()> {
//!     let headbox = Headbox::new(DVec3::splat(-1.0), DVec3::splat(1.0));
//!     let plan = CapturePlan::new(headbox, 16, ViewGroupConfig::default())?;
//!
//!     // Hand each job to your renderer, in this exact order.
//!     for job in plan.render_jobs() {
//!         println!("render {} at {}", job.color_path, job.position);
//!     }
//!
//!     let manifest_path = plan.write_manifest("CaptureOutput".as_ref())?;
//!     println!("manifest at {}", manifest_path.display());
//!     Ok(())
//! }
//! ```
//!
//! The render loop must follow [`CapturePlan::render_jobs`] order (view
//! groups outer, faces inner, faces in front/back/left/right/bottom/top
//! order) because the bake tool matches files to views positionally.

#![allow(clippy::missing_errors_doc)]

pub mod options;
pub mod pipeline;
pub mod plan;
pub mod writer;

pub use options::CaptureOptions;
pub use pipeline::{bake_command, BakeCommand, BAKE_OUTPUT_PREFIX};
pub use plan::{CapturePlan, RenderJob};
pub use writer::{manifest_to_json, write_manifest, MANIFEST_FILE_NAME};

// Re-export the core surface
pub use headbox_core::{
    build_view_groups, cube_face_projection, generate_camera_positions, radical_inverse,
    CubeFace, DVec3, Headbox, HeadboxError, ImagePathPattern, Manifest, Matrix4,
    ProjectiveCamera, Result, View, ViewGroup, ViewGroupConfig,
};

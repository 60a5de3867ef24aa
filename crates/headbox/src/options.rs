//! Configuration options for a capture run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use headbox_core::manifest::{ViewGroupConfig, DEFAULT_COLOR_PATTERN, DEFAULT_DEPTH_PATTERN};
use headbox_core::{ImagePathPattern, Result};

/// Options for one capture run.
///
/// Immutable once built and serde round-trippable, so a config file can
/// drive the CLI. Defaults match the upstream capture pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureOptions {
    /// Number of camera positions (view groups) to generate. Powers of two
    /// keep the low-discrepancy set well distributed.
    pub view_group_count: usize,

    /// Width and height of each rendered image in pixels.
    pub image_resolution: u32,

    /// Near clip distance of the capture cameras, in world units.
    pub near_clip: f64,

    /// Far clip distance of the capture cameras, in world units.
    pub far_clip: f64,

    /// Directory the manifest and rendered images are written to.
    pub capture_output_dir: PathBuf,

    /// Directory the baked mesh is written to.
    pub mesh_output_dir: PathBuf,

    /// Extra flags passed through to the bake executable.
    pub bake_flags: String,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            view_group_count: 16,
            image_resolution: 1024,
            near_clip: 0.01,
            far_clip: 1000.0,
            capture_output_dir: PathBuf::from("CaptureOutput"),
            mesh_output_dir: PathBuf::from("MeshOutput"),
            bake_flags: "-texture_width 8192 -texture_height 8192 \
                         -pixels_per_degree 20 -triangle_count 180000"
                .to_string(),
        }
    }
}

impl CaptureOptions {
    /// Returns the per-view parameters for the manifest builder, using the
    /// default path patterns.
    ///
    /// # Errors
    /// Never fails for the built-in patterns; the `Result` mirrors pattern
    /// validation for callers that swap them out.
    pub fn view_group_config(&self) -> Result<ViewGroupConfig> {
        Ok(ViewGroupConfig {
            image_size: self.image_resolution,
            near_clip: self.near_clip,
            far_clip: self.far_clip,
            depth_channel: "R".to_string(),
            color_pattern: ImagePathPattern::new(DEFAULT_COLOR_PATTERN)?,
            depth_pattern: ImagePathPattern::new(DEFAULT_DEPTH_PATTERN)?,
        })
    }
}

//! The view-group manifest: the data model handed to the bake tool, and the
//! builder that assembles it from camera positions.
//!
//! Field names and nesting mirror the manifest JSON exactly; the structs
//! serialize as-is with `serde_json`. The manifest is built once per capture
//! and never mutated afterwards.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{HeadboxError, Result};
use crate::face::CubeFace;
use crate::matrix::Matrix4;
use crate::projection::cube_face_projection;

/// Default pattern for color image paths.
pub const DEFAULT_COLOR_PATTERN: &str = "{face}_color.{index}.exr";

/// Default pattern for depth image paths.
pub const DEFAULT_DEPTH_PATTERN: &str = "{face}_depth.{index}.exr";

/// How depth values in the depth images are encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DepthType {
    /// Depth is the eye-space Z distance.
    #[default]
    #[serde(rename = "EYE_Z")]
    EyeZ,
}

/// Camera parameters for a single rendered view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectiveCamera {
    /// Rendered image width in pixels.
    pub image_width: u32,
    /// Rendered image height in pixels.
    pub image_height: u32,
    /// Eye-space to clip-space projection, row-major.
    pub clip_from_eye_matrix: Matrix4,
    /// Eye-space to world-space transform, row-major; the translation column
    /// holds the camera position relative to the headbox center.
    pub world_from_eye_matrix: Matrix4,
    /// Depth encoding of the paired depth image.
    pub depth_type: DepthType,
}

/// A color image reference with its fixed RGBA channel mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorImageFile {
    /// Path of the color image, relative to the manifest.
    pub path: String,
    pub channel_0: String,
    pub channel_1: String,
    pub channel_2: String,
    pub channel_alpha: String,
}

impl ColorImageFile {
    /// Creates a reference with the standard `R,G,B,A` channel mapping.
    #[must_use]
    pub fn new(path: String) -> Self {
        Self {
            path,
            channel_0: "R".to_string(),
            channel_1: "G".to_string(),
            channel_2: "B".to_string(),
            channel_alpha: "A".to_string(),
        }
    }
}

/// A depth image reference; depth lives in a single channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthImageChannel {
    /// Path of the depth image, relative to the manifest.
    pub path: String,
    pub channel_0: String,
}

/// The color/depth image pair backing one view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthImageFile {
    pub color: ColorImageFile,
    pub depth: DepthImageChannel,
}

/// One rendered cube-face view: camera parameters plus its image files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct View {
    pub projective_camera: ProjectiveCamera,
    pub depth_image_file: DepthImageFile,
}

/// The six views of one camera position, in the fixed face order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewGroup {
    pub views: Vec<View>,
}

/// The complete capture description consumed by the bake tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub view_groups: Vec<ViewGroup>,
}

impl Manifest {
    /// Total number of views across all groups.
    #[must_use]
    pub fn view_count(&self) -> usize {
        self.view_groups.iter().map(|g| g.views.len()).sum()
    }
}

/// A path template with `{face}` and `{index}` substitution slots.
///
/// `{face}` expands to the lowercase face name, `{index}` to the view-group
/// index zero-padded to four digits. Both slots are required: a pattern
/// missing either would make distinct views collide on the same path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImagePathPattern(String);

impl ImagePathPattern {
    const FACE_SLOT: &'static str = "{face}";
    const INDEX_SLOT: &'static str = "{index}";

    /// Validates and wraps a pattern string.
    ///
    /// # Errors
    /// Returns [`HeadboxError::InvalidPathPattern`] when `{face}` or
    /// `{index}` is absent.
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        for slot in [Self::FACE_SLOT, Self::INDEX_SLOT] {
            if !pattern.contains(slot) {
                return Err(HeadboxError::InvalidPathPattern {
                    pattern,
                    missing: slot,
                });
            }
        }
        Ok(Self(pattern))
    }

    /// Expands the pattern for one (face, view group) pair.
    #[must_use]
    pub fn format(&self, face: CubeFace, index: usize) -> String {
        self.0
            .replace(Self::FACE_SLOT, face.name())
            .replace(Self::INDEX_SLOT, &format!("{index:04}"))
    }

    /// Returns the raw pattern string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ImagePathPattern {
    type Error = HeadboxError;

    fn try_from(pattern: String) -> Result<Self> {
        Self::new(pattern)
    }
}

impl From<ImagePathPattern> for String {
    fn from(pattern: ImagePathPattern) -> Self {
        pattern.0
    }
}

/// Parameters shared by every view the builder emits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewGroupConfig {
    /// Width and height of each rendered image in pixels.
    pub image_size: u32,
    /// Near clip distance, in world units.
    pub near_clip: f64,
    /// Far clip distance, in world units.
    pub far_clip: f64,
    /// Channel of the depth images that holds depth.
    pub depth_channel: String,
    /// Path pattern for color images.
    pub color_pattern: ImagePathPattern,
    /// Path pattern for depth images.
    pub depth_pattern: ImagePathPattern,
}

impl Default for ViewGroupConfig {
    fn default() -> Self {
        Self {
            image_size: 1024,
            near_clip: 0.01,
            far_clip: 1000.0,
            depth_channel: "R".to_string(),
            color_pattern: ImagePathPattern(DEFAULT_COLOR_PATTERN.to_string()),
            depth_pattern: ImagePathPattern(DEFAULT_DEPTH_PATTERN.to_string()),
        }
    }
}

/// Assembles the manifest for a set of camera positions.
///
/// Each position becomes one view group of six views in the fixed face
/// order. All views share one projection matrix; each view's world-from-eye
/// matrix is the face orientation with the camera position relative to
/// `headbox_center` patched into the translation column. Pure and
/// deterministic, no I/O.
///
/// # Errors
/// Returns [`HeadboxError::InvalidClipPlanes`] when the config's clip pair
/// violates `0 < near < far`.
pub fn build_view_groups(
    headbox_center: DVec3,
    positions: &[DVec3],
    config: &ViewGroupConfig,
) -> Result<Manifest> {
    let clip_from_eye = cube_face_projection(config.near_clip, config.far_clip)?;

    let mut view_groups = Vec::with_capacity(positions.len());
    for (group_index, position) in positions.iter().enumerate() {
        let relative_position = *position - headbox_center;
        let mut views = Vec::with_capacity(CubeFace::ALL.len());
        for face in CubeFace::ALL {
            let world_from_eye = face.world_from_eye().with_translation(relative_position);
            views.push(View {
                projective_camera: ProjectiveCamera {
                    image_width: config.image_size,
                    image_height: config.image_size,
                    clip_from_eye_matrix: clip_from_eye,
                    world_from_eye_matrix: world_from_eye,
                    depth_type: DepthType::EyeZ,
                },
                depth_image_file: DepthImageFile {
                    color: ColorImageFile::new(config.color_pattern.format(face, group_index)),
                    depth: DepthImageChannel {
                        path: config.depth_pattern.format(face, group_index),
                        channel_0: config.depth_channel.clone(),
                    },
                },
            });
        }
        view_groups.push(ViewGroup { views });
    }
    Ok(Manifest { view_groups })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_requires_both_slots() {
        assert!(ImagePathPattern::new("{face}_color.{index}.exr").is_ok());

        let err = ImagePathPattern::new("color.{index}.exr").unwrap_err();
        assert!(
            matches!(err, HeadboxError::InvalidPathPattern { missing, .. } if missing == "{face}")
        );
        let err = ImagePathPattern::new("{face}_color.exr").unwrap_err();
        assert!(
            matches!(err, HeadboxError::InvalidPathPattern { missing, .. } if missing == "{index}")
        );
    }

    #[test]
    fn test_pattern_formats_zero_padded() {
        let pattern = ImagePathPattern::new(DEFAULT_COLOR_PATTERN).unwrap();
        assert_eq!(pattern.format(CubeFace::Front, 0), "front_color.0000.exr");
        assert_eq!(pattern.format(CubeFace::Top, 12), "top_color.0012.exr");
        assert_eq!(
            pattern.format(CubeFace::Bottom, 12345),
            "bottom_color.12345.exr"
        );
    }

    #[test]
    fn test_pattern_serde_validates() {
        let json = "\"{face}_depth.{index}.exr\"";
        let pattern: ImagePathPattern = serde_json::from_str(json).unwrap();
        assert_eq!(pattern.as_str(), "{face}_depth.{index}.exr");
        assert!(serde_json::from_str::<ImagePathPattern>("\"plain.exr\"").is_err());
    }

    #[test]
    fn test_bad_clip_planes_propagate() {
        let config = ViewGroupConfig {
            near_clip: -1.0,
            ..ViewGroupConfig::default()
        };
        let err = build_view_groups(DVec3::ZERO, &[DVec3::ZERO], &config).unwrap_err();
        assert!(matches!(err, HeadboxError::InvalidClipPlanes { .. }));
    }

    #[test]
    fn test_groups_follow_position_order_and_face_order() {
        let center = DVec3::new(1.0, 2.0, 3.0);
        let positions = [
            DVec3::new(1.0, 2.0, 3.0),
            DVec3::new(2.0, 2.0, 3.0),
            DVec3::new(1.0, 0.0, 3.0),
            DVec3::new(1.0, 2.0, 7.0),
        ];
        let manifest =
            build_view_groups(center, &positions, &ViewGroupConfig::default()).unwrap();

        assert_eq!(manifest.view_groups.len(), 4);
        assert_eq!(manifest.view_count(), 24);
        for (g, group) in manifest.view_groups.iter().enumerate() {
            assert_eq!(group.views.len(), 6);
            for (view, face) in group.views.iter().zip(CubeFace::ALL) {
                let camera = &view.projective_camera;
                assert_eq!(
                    camera.world_from_eye_matrix.translation(),
                    positions[g] - center,
                    "group {g} face {face}"
                );
                assert_eq!(
                    camera.world_from_eye_matrix.with_translation(DVec3::ZERO),
                    face.world_from_eye()
                );
                assert!(view.depth_image_file.color.path.starts_with(face.name()));
            }
        }
    }

    #[test]
    fn test_projection_shared_across_views() {
        let positions = [DVec3::ZERO, DVec3::ONE];
        let manifest =
            build_view_groups(DVec3::ZERO, &positions, &ViewGroupConfig::default()).unwrap();
        let first = manifest.view_groups[0].views[0]
            .projective_camera
            .clip_from_eye_matrix;
        for group in &manifest.view_groups {
            for view in &group.views {
                assert_eq!(view.projective_camera.clip_from_eye_matrix, first);
            }
        }
    }

    #[test]
    fn test_view_serializes_to_wire_format() {
        let config = ViewGroupConfig {
            image_size: 256,
            near_clip: 1.0,
            far_clip: 2.0,
            ..ViewGroupConfig::default()
        };
        let manifest = build_view_groups(DVec3::ZERO, &[DVec3::ZERO], &config).unwrap();
        let value = serde_json::to_value(&manifest).unwrap();

        let expected = serde_json::json!({
            "view_groups": [{
                "views": [
                    {
                        "projective_camera": {
                            "image_width": 256,
                            "image_height": 256,
                            "clip_from_eye_matrix": [
                                1.0, 0.0, 0.0, 0.0,
                                0.0, 1.0, 0.0, 0.0,
                                0.0, 0.0, -3.0, -4.0,
                                0.0, 0.0, -1.0, 0.0
                            ],
                            "world_from_eye_matrix": [
                                1.0, 0.0, 0.0, 0.0,
                                0.0, 0.0, -1.0, 0.0,
                                0.0, 1.0, 0.0, 0.0,
                                0.0, 0.0, 0.0, 1.0
                            ],
                            "depth_type": "EYE_Z"
                        },
                        "depth_image_file": {
                            "color": {
                                "path": "front_color.0000.exr",
                                "channel_0": "R",
                                "channel_1": "G",
                                "channel_2": "B",
                                "channel_alpha": "A"
                            },
                            "depth": {
                                "path": "front_depth.0000.exr",
                                "channel_0": "R"
                            }
                        }
                    }
                ]
            }]
        });
        // Compare the first view literally; the remaining five differ only
        // in the face name and orientation block.
        assert_eq!(
            value["view_groups"][0]["views"][0],
            expected["view_groups"][0]["views"][0]
        );
    }
}

//! The capture plan: positions, render jobs and the manifest for one run.

use std::path::{Path, PathBuf};

use glam::DVec3;

use headbox_core::manifest::ViewGroupConfig;
use headbox_core::{build_view_groups, CubeFace, Headbox, Manifest, Result};

use crate::writer;

/// One image the external renderer must produce: a (view group, face) pair
/// with the camera position and the file names the manifest promises.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderJob {
    /// Index of the view group this job belongs to.
    pub group_index: usize,
    /// The cube face to render.
    pub face: CubeFace,
    /// Absolute camera position in world space.
    pub position: DVec3,
    /// File name the color render must end up under.
    pub color_path: String,
    /// File name the depth render must end up under.
    pub depth_path: String,
}

/// A validated capture run: the generated camera positions plus everything
/// needed to emit the manifest and enumerate the render work.
///
/// [`CapturePlan::render_jobs`] and [`CapturePlan::build_manifest`] walk the
/// same (group, face) order, which is what lets the external render loop and
/// the bake tool agree on which file belongs to which view.
#[derive(Debug, Clone)]
pub struct CapturePlan {
    headbox: Headbox,
    positions: Vec<DVec3>,
    config: ViewGroupConfig,
}

impl CapturePlan {
    /// Generates the camera positions for a headbox and fixes the per-view
    /// parameters.
    ///
    /// # Errors
    /// Returns [`headbox_core::HeadboxError::InvalidSampleCount`] when
    /// `count` is zero and [`headbox_core::HeadboxError::InvalidClipPlanes`]
    /// when the config's clip pair is degenerate.
    pub fn new(headbox: Headbox, count: usize, config: ViewGroupConfig) -> Result<Self> {
        // Validate the clip planes up front so a bad plan never gets as far
        // as rendering.
        headbox_core::cube_face_projection(config.near_clip, config.far_clip)?;
        let positions = headbox_core::generate_camera_positions(&headbox, count)?;
        log::info!(
            "capture plan: {} view groups, {} render jobs",
            positions.len(),
            positions.len() * CubeFace::ALL.len()
        );
        Ok(Self {
            headbox,
            positions,
            config,
        })
    }

    /// The headbox this plan captures.
    #[must_use]
    pub fn headbox(&self) -> &Headbox {
        &self.headbox
    }

    /// The generated camera positions, center first.
    #[must_use]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// The headbox center, which is also the first camera position.
    #[must_use]
    pub fn center(&self) -> DVec3 {
        self.headbox.center()
    }

    /// The per-view parameters the manifest is built with.
    #[must_use]
    pub fn config(&self) -> &ViewGroupConfig {
        &self.config
    }

    /// Enumerates every image to render, in manifest order: view groups
    /// outer, faces inner.
    pub fn render_jobs(&self) -> impl Iterator<Item = RenderJob> + '_ {
        self.positions
            .iter()
            .enumerate()
            .flat_map(move |(group_index, position)| {
                CubeFace::ALL.into_iter().map(move |face| RenderJob {
                    group_index,
                    face,
                    position: *position,
                    color_path: self.config.color_pattern.format(face, group_index),
                    depth_path: self.config.depth_pattern.format(face, group_index),
                })
            })
    }

    /// Builds the manifest for this plan.
    ///
    /// # Errors
    /// Cannot fail after construction validated the clip planes; the
    /// `Result` is kept so the builder's contract stays in one place.
    pub fn build_manifest(&self) -> Result<Manifest> {
        build_view_groups(self.center(), &self.positions, &self.config)
    }

    /// Builds the manifest and writes it to `<dir>/manifest.json`.
    ///
    /// # Errors
    /// Propagates manifest construction, serialization and I/O failures.
    pub fn write_manifest(&self, dir: &Path) -> Result<PathBuf> {
        let manifest = self.build_manifest()?;
        writer::write_manifest(&manifest, dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use headbox_core::HeadboxError;

    fn unit_plan(count: usize) -> CapturePlan {
        let headbox = Headbox::new(DVec3::splat(-1.0), DVec3::splat(1.0));
        CapturePlan::new(headbox, count, ViewGroupConfig::default()).unwrap()
    }

    #[test]
    fn test_rejects_zero_view_groups() {
        let headbox = Headbox::new(DVec3::splat(-1.0), DVec3::splat(1.0));
        let err = CapturePlan::new(headbox, 0, ViewGroupConfig::default()).unwrap_err();
        assert!(matches!(err, HeadboxError::InvalidSampleCount));
    }

    #[test]
    fn test_rejects_bad_clip_planes_up_front() {
        let headbox = Headbox::new(DVec3::splat(-1.0), DVec3::splat(1.0));
        let config = ViewGroupConfig {
            far_clip: 0.001,
            ..ViewGroupConfig::default()
        };
        let err = CapturePlan::new(headbox, 4, config).unwrap_err();
        assert!(matches!(err, HeadboxError::InvalidClipPlanes { .. }));
    }

    #[test]
    fn test_first_position_is_center() {
        let plan = unit_plan(8);
        assert_eq!(plan.positions().len(), 8);
        assert_eq!(plan.positions()[0], plan.center());
    }

    #[test]
    fn test_render_jobs_match_manifest_order() {
        let plan = unit_plan(4);
        let manifest = plan.build_manifest().unwrap();

        let jobs: Vec<RenderJob> = plan.render_jobs().collect();
        assert_eq!(jobs.len(), manifest.view_count());

        let mut jobs = jobs.into_iter();
        for (g, group) in manifest.view_groups.iter().enumerate() {
            for (view, face) in group.views.iter().zip(CubeFace::ALL) {
                let job = jobs.next().unwrap();
                assert_eq!(job.group_index, g);
                assert_eq!(job.face, face);
                assert_eq!(job.color_path, view.depth_image_file.color.path);
                assert_eq!(job.depth_path, view.depth_image_file.depth.path);
                assert_eq!(
                    job.position - plan.center(),
                    view.projective_camera.world_from_eye_matrix.translation()
                );
            }
        }
        assert!(jobs.next().is_none());
    }
}

//! Driving the external bake executable.
//!
//! The bake tool turns a capture (manifest plus rendered images) into a
//! textured mesh. Its contract is a command line of the shape
//! `<exe> -input_path <manifest> -output_path <dir>/output <flags>`; this
//! module assembles that invocation and can spawn it.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use headbox_core::{HeadboxError, Result};

/// Base name of the files the bake tool writes into its output directory.
pub const BAKE_OUTPUT_PREFIX: &str = "output";

/// One invocation of the bake executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BakeCommand {
    /// Path of the bake executable.
    pub executable: PathBuf,
    /// Path of the capture manifest.
    pub manifest: PathBuf,
    /// Directory the baked mesh is written to.
    pub output_dir: PathBuf,
    /// Extra flags appended verbatim, whitespace-separated.
    pub extra_flags: String,
}

impl BakeCommand {
    /// The output path prefix handed to the tool: `<output_dir>/output`.
    #[must_use]
    pub fn output_file_prefix(&self) -> PathBuf {
        self.output_dir.join(BAKE_OUTPUT_PREFIX)
    }

    /// Renders the full command line, for logging and dry runs.
    #[must_use]
    pub fn command_line(&self) -> String {
        let mut line = format!(
            "{} -input_path {} -output_path {}",
            self.executable.display(),
            self.manifest.display(),
            self.output_file_prefix().display()
        );
        if !self.extra_flags.is_empty() {
            line.push(' ');
            line.push_str(&self.extra_flags);
        }
        line
    }

    /// Creates the output directory and runs the bake executable to
    /// completion.
    ///
    /// # Errors
    /// Returns [`HeadboxError::Io`] when the directory cannot be created or
    /// the process cannot be spawned, and [`HeadboxError::BakeFailed`] when
    /// it exits unsuccessfully.
    pub fn run(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir)?;
        log::info!("running bake pipeline: {}", self.command_line());

        let mut command = Command::new(&self.executable);
        command
            .arg("-input_path")
            .arg(&self.manifest)
            .arg("-output_path")
            .arg(self.output_file_prefix());
        command.args(self.extra_flags.split_whitespace());

        let status = command.status()?;
        if !status.success() {
            return Err(HeadboxError::BakeFailed(status));
        }
        log::info!("bake pipeline finished");
        Ok(())
    }
}

/// Convenience constructor for the common case: bake the manifest inside a
/// capture directory.
#[must_use]
pub fn bake_command(
    executable: impl Into<PathBuf>,
    capture_dir: &Path,
    output_dir: impl Into<PathBuf>,
    extra_flags: impl Into<String>,
) -> BakeCommand {
    BakeCommand {
        executable: executable.into(),
        manifest: capture_dir.join(crate::writer::MANIFEST_FILE_NAME),
        output_dir: output_dir.into(),
        extra_flags: extra_flags.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_shape() {
        let command = BakeCommand {
            executable: PathBuf::from("seurat-pipeline.exe"),
            manifest: PathBuf::from("CaptureOutput/manifest.json"),
            output_dir: PathBuf::from("MeshOutput"),
            extra_flags: "-triangle_count 180000".to_string(),
        };
        assert_eq!(
            command.command_line(),
            format!(
                "seurat-pipeline.exe -input_path {} -output_path {} -triangle_count 180000",
                Path::new("CaptureOutput").join("manifest.json").display(),
                Path::new("MeshOutput").join("output").display()
            )
        );
    }

    #[test]
    fn test_no_trailing_space_without_flags() {
        let command = BakeCommand {
            executable: PathBuf::from("bake"),
            manifest: PathBuf::from("manifest.json"),
            output_dir: PathBuf::from("out"),
            extra_flags: String::new(),
        };
        assert!(!command.command_line().ends_with(' '));
    }

    #[test]
    fn test_bake_command_points_at_manifest() {
        let command = bake_command(
            "bake",
            Path::new("CaptureOutput"),
            "MeshOutput",
            "-fast",
        );
        assert_eq!(
            command.manifest,
            Path::new("CaptureOutput").join("manifest.json")
        );
        assert_eq!(command.output_file_prefix(), Path::new("MeshOutput").join("output"));
    }

    #[test]
    fn test_run_missing_executable_is_io_error() {
        let dir = std::env::temp_dir().join("headbox_pipeline_test");
        let command = BakeCommand {
            executable: PathBuf::from("headbox-nonexistent-bake-tool"),
            manifest: dir.join("manifest.json"),
            output_dir: dir.clone(),
            extra_flags: String::new(),
        };
        let err = command.run().unwrap_err();
        assert!(matches!(err, HeadboxError::Io(_)));
        let _ = fs::remove_dir_all(&dir);
    }
}

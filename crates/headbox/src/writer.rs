//! Manifest persistence.

use std::fs;
use std::path::{Path, PathBuf};

use headbox_core::{Manifest, Result};

/// File name of the manifest within the capture output directory. The bake
/// tool is pointed at this file.
pub const MANIFEST_FILE_NAME: &str = "manifest.json";

/// Serializes a manifest to pretty-printed JSON.
///
/// # Errors
/// Propagates `serde_json` failures.
pub fn manifest_to_json(manifest: &Manifest) -> Result<String> {
    Ok(serde_json::to_string_pretty(manifest)?)
}

/// Writes a manifest to `<dir>/manifest.json`, creating the directory if
/// needed, and returns the written path.
///
/// # Errors
/// Propagates serialization and I/O failures.
pub fn write_manifest(manifest: &Manifest, dir: &Path) -> Result<PathBuf> {
    let json = manifest_to_json(manifest)?;
    fs::create_dir_all(dir)?;
    let path = dir.join(MANIFEST_FILE_NAME);
    fs::write(&path, json)?;
    log::info!(
        "wrote manifest with {} view groups ({} views) to {}",
        manifest.view_groups.len(),
        manifest.view_count(),
        path.display()
    );
    Ok(path)
}

//! Recursive scan of the Ignition script resource tree

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{DiscoveryError, Result};
use crate::module::RESOURCE_FILE;

/// Enumerate every sentinel file under the script resource root.
///
/// The Ignition root itself must exist; a project without a
/// `ignition/script-python` subdirectory simply has no modules.
///
/// # Errors
///
/// Returns a [`DiscoveryError`] if the Ignition root is missing, not a
/// directory, or traversal fails.
pub fn scan(ignition_root: &Path, scripts_root: &Path) -> Result<Vec<PathBuf>> {
    if !ignition_root.exists() {
        return Err(DiscoveryError::RootMissing(ignition_root.to_path_buf()).into());
    }
    if !ignition_root.is_dir() {
        return Err(DiscoveryError::NotADirectory(ignition_root.to_path_buf()).into());
    }
    if !scripts_root.exists() {
        return Ok(Vec::new());
    }

    let mut sentinels = Vec::new();
    for entry in WalkDir::new(scripts_root).follow_links(false) {
        let entry = entry.map_err(|err| DiscoveryError::Unreadable {
            path: err
                .path()
                .map_or_else(|| scripts_root.to_path_buf(), Path::to_path_buf),
            source: err,
        })?;

        if entry.file_type().is_file() && entry.file_name() == RESOURCE_FILE {
            sentinels.push(entry.into_path());
        }
    }

    Ok(sentinels)
}

//! Recursive scan of the flat Python source tree

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{DiscoveryError, Result};
use crate::module::PYTHON_EXTENSION;

/// Enumerate every `*.py` file under the Python root.
///
/// # Errors
///
/// Returns a [`DiscoveryError`] if the root is missing, not a directory,
/// or traversal fails. Root-level failures produce no partial results.
pub fn scan(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(DiscoveryError::RootMissing(root.to_path_buf()).into());
    }
    if !root.is_dir() {
        return Err(DiscoveryError::NotADirectory(root.to_path_buf()).into());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(|err| DiscoveryError::Unreadable {
            path: err
                .path()
                .map_or_else(|| root.to_path_buf(), Path::to_path_buf),
            source: err,
        })?;

        if entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .is_some_and(|ext| ext == PYTHON_EXTENSION)
        {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_scan_recursive() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("top.py"), "").unwrap();
        let nested = tmp.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("deep.py"), "").unwrap();
        fs::write(nested.join("readme.md"), "").unwrap();

        let files = scan(tmp.path()).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|p| p.ends_with("top.py")));
        assert!(files.iter().any(|p| p.ends_with("a/b/deep.py")));
    }

    #[test]
    fn test_scan_empty_tree() {
        let tmp = TempDir::new().unwrap();
        assert!(scan(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_scan_missing_root() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("gone");

        let err = scan(&missing).unwrap_err();
        assert!(err.downcast_ref::<DiscoveryError>().is_some());
    }

    #[test]
    fn test_scan_root_is_a_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("file.py");
        fs::write(&file, "").unwrap();

        let err = scan(&file).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DiscoveryError>(),
            Some(DiscoveryError::NotADirectory(_))
        ));
    }
}

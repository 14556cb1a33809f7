//! Module identity and the path mapping between tree conventions
//!
//! A module is identified by its path relative to the Python project root,
//! native extension included (e.g. `pkg/util.py`). The same identity maps
//! to a resource directory in the Ignition tree
//! (`ignition/script-python/pkg/util/`) holding a fixed-name code file and
//! a fixed-name sentinel file. Both mapping directions are pure path
//! arithmetic with no I/O.

use std::path::{Path, PathBuf};

use crate::error::MappingError;

/// Fixed subdirectory of an Ignition project holding script resources
pub const IGNITION_SCRIPTS_DIR: &str = "ignition/script-python";

/// Fixed file name holding a module's code inside its resource directory
pub const CODE_FILE: &str = "code.py";

/// Marker file whose presence designates a directory as a module resource
pub const RESOURCE_FILE: &str = "resource.json";

/// Native extension of Python source modules
pub const PYTHON_EXTENSION: &str = "py";

/// Resolved absolute project roots shared by every core operation.
///
/// Roots are environment, not identity: two [`Module`] values scanned under
/// different roots still compare equal when their relative paths match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRoots {
    /// Absolute root of the flat Python source tree
    pub python_root: PathBuf,
    /// Absolute root of the Ignition project
    pub ignition_root: PathBuf,
}

impl ProjectRoots {
    /// Create a pair of resolved roots
    pub fn new(python_root: impl Into<PathBuf>, ignition_root: impl Into<PathBuf>) -> Self {
        Self {
            python_root: python_root.into(),
            ignition_root: ignition_root.into(),
        }
    }

    /// Root of the Ignition script resource tree
    #[must_use]
    pub fn scripts_root(&self) -> PathBuf {
        self.ignition_root.join(IGNITION_SCRIPTS_DIR)
    }
}

/// A single source module, identified by its Python-root-relative path.
///
/// Equality, ordering, and hashing derive solely from the relative path;
/// modules are immutable value objects constructed fresh on every scan.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Module {
    rel_path: PathBuf,
}

impl Module {
    /// Create a module from its canonical relative path (extension included)
    pub fn new(rel_path: impl Into<PathBuf>) -> Self {
        Self {
            rel_path: rel_path.into(),
        }
    }

    /// Canonical relative path, e.g. `pkg/util.py`
    #[must_use]
    pub fn rel_path(&self) -> &Path {
        &self.rel_path
    }

    /// Absolute location of the module in the Python tree
    #[must_use]
    pub fn python_path(&self, roots: &ProjectRoots) -> PathBuf {
        roots.python_root.join(&self.rel_path)
    }

    /// Absolute resource directory of the module in the Ignition tree
    #[must_use]
    pub fn ignition_dir(&self, roots: &ProjectRoots) -> PathBuf {
        roots.scripts_root().join(self.rel_path.with_extension(""))
    }

    /// Absolute location of the module's code file in the Ignition tree
    #[must_use]
    pub fn code_path(&self, roots: &ProjectRoots) -> PathBuf {
        self.ignition_dir(roots).join(CODE_FILE)
    }

    /// Absolute location of the module's sentinel file in the Ignition tree
    #[must_use]
    pub fn resource_path(&self, roots: &ProjectRoots) -> PathBuf {
        self.ignition_dir(roots).join(RESOURCE_FILE)
    }

    /// Inverse mapping: recover a module identity from a discovered
    /// sentinel file.
    ///
    /// The identity is the sentinel's parent directory, relative to the
    /// scripts root, with the native extension appended to the leaf. The
    /// append keeps the mapping an exact inverse of
    /// [`Module::ignition_dir`] even for dotted stems (`pkg/v1.2` maps
    /// back to `pkg/v1.2.py`, which forward-maps to `pkg/v1.2` again).
    ///
    /// # Errors
    ///
    /// Returns a [`MappingError`] if the sentinel does not sit inside a
    /// module directory below the scripts root, or the directory name is
    /// not valid UTF-8. Callers must exclude and report such entries.
    pub fn from_resource_file(sentinel: &Path, scripts_root: &Path) -> Result<Self, MappingError> {
        let dir = sentinel
            .parent()
            .ok_or_else(|| MappingError::NoParent(sentinel.to_path_buf()))?;

        let rel = dir
            .strip_prefix(scripts_root)
            .map_err(|_| MappingError::OutsideScriptsRoot(dir.to_path_buf()))?;

        let Some(leaf) = rel.file_name() else {
            return Err(MappingError::EmptyIdentity(sentinel.to_path_buf()));
        };
        let leaf = leaf
            .to_str()
            .ok_or_else(|| MappingError::NonUtf8Name(dir.to_path_buf()))?;

        let mut rel_path = rel.to_path_buf();
        rel_path.set_file_name(format!("{leaf}.{PYTHON_EXTENSION}"));

        Ok(Self { rel_path })
    }
}

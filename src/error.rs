//! Error types for the ignsync library

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using `anyhow::Error`
pub type Result<T> = anyhow::Result<T>;

/// A per-module failure collected during deep comparison or propagation.
///
/// Per-module failures never abort sibling operations; they are aggregated
/// and reported alongside the success counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleFailure {
    /// Identity of the module that failed
    pub module: crate::module::Module,
    /// Rendered cause
    pub error: String,
}

/// A project root could not be scanned at all.
///
/// Root-level failures are fatal to the whole scan: no partial module set
/// is ever produced from an unreadable tree.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The root directory does not exist
    #[error("project root does not exist: {0}")]
    RootMissing(PathBuf),

    /// The root path exists but is not a directory
    #[error("project root is not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Directory traversal failed below the root
    #[error("failed to read {path}")]
    Unreadable {
        /// Path at which traversal failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: walkdir::Error,
    },
}

/// A discovered sentinel file does not map back to a module identity.
///
/// Mapping failures are per-module: the offending entry is excluded from
/// the scan and reported, never silently mis-mapped.
#[derive(Debug, Error)]
pub enum MappingError {
    /// The sentinel file has no parent directory
    #[error("sentinel file has no parent directory: {0}")]
    NoParent(PathBuf),

    /// The sentinel's directory is outside the scripts root
    #[error("module directory is outside the script resource root: {0}")]
    OutsideScriptsRoot(PathBuf),

    /// The sentinel sits directly in the scripts root, leaving an empty identity
    #[error("sentinel file sits directly in the script resource root: {0}")]
    EmptyIdentity(PathBuf),

    /// The module directory name is not valid UTF-8
    #[error("module directory name is not valid UTF-8: {0}")]
    NonUtf8Name(PathBuf),
}

//! Configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Subdirectory of an Ignition install holding gateway projects
pub(crate) const IGNITION_PROJECTS_DIR: &str = "data/projects";

#[cfg(windows)]
const DEFAULT_IGNITION_INSTALL_DIR: &str = "C:/Program Files/Inductive Automation/Ignition";
#[cfg(not(windows))]
const DEFAULT_IGNITION_INSTALL_DIR: &str = "/usr/local/ignition";

fn default_install_dir() -> PathBuf {
    PathBuf::from(DEFAULT_IGNITION_INSTALL_DIR)
}

/// On-disk configuration (`ignsync.yaml`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Sync settings
    pub sync: SyncConfig,
}

/// Settings for one Python-to-Ignition project pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Ignition install directory, used to locate named projects
    #[serde(default = "default_install_dir")]
    pub ignition_install_dir: PathBuf,

    /// Ignition project: a path, or a name under the install's `data/projects`
    pub ignition_project: String,

    /// Path to the Python project root
    pub python_project: PathBuf,

    /// Gitignore-style patterns excluded from the Python scan
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Cap on concurrent per-module workers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workers: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sync: SyncConfig {
                ignition_install_dir: default_install_dir(),
                ignition_project: "path/to/ignition/project".to_string(),
                python_project: PathBuf::from("path/to/python/project"),
                ignore: vec![
                    "**/.venv/**".to_string(),
                    "**/__pycache__/**".to_string(),
                ],
                workers: None,
            },
        }
    }
}

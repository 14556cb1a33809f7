//! Configuration file discovery

use std::path::{Path, PathBuf};

/// Name of the project-level config file
pub const CONFIG_FILE_NAME: &str = "ignsync.yaml";

/// Config file discovery
pub struct ConfigDiscovery;

impl ConfigDiscovery {
    /// Locate the config file to use.
    ///
    /// Precedence: an explicit CLI path, then `ignsync.yaml` in the current
    /// directory or any parent, then `<config dir>/ignsync/config.yaml`.
    #[must_use]
    pub fn discover(cli_path: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = cli_path {
            return path.is_file().then(|| path.to_path_buf());
        }

        Self::find_in_ancestors(CONFIG_FILE_NAME).or_else(Self::find_global_config)
    }

    /// Find a file in the current directory or any parent directory
    fn find_in_ancestors(name: &str) -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;

        loop {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Fallback config in the user's config directory
    fn find_global_config() -> Option<PathBuf> {
        let candidate = dirs::config_dir()?.join("ignsync").join("config.yaml");
        candidate.is_file().then_some(candidate)
    }
}

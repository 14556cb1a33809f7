//! Configuration file parsing and project root resolution
//!
//! The core never reads configuration itself: this layer discovers and
//! parses `ignsync.yaml`, validates it, and hands the core a fully
//! resolved [`ProjectRoots`] pair (plus scan excludes and the worker cap).

mod discovery;
mod patterns;
mod types;

use std::fs;
use std::path::Path;

use anyhow::{Context, bail};

pub use discovery::{CONFIG_FILE_NAME, ConfigDiscovery};
pub use patterns::PatternMatcher;
pub use types::{Config, SyncConfig};

use crate::error::Result;
use crate::module::ProjectRoots;

/// Configuration with both project roots resolved to absolute paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Absolute, validated project roots
    pub roots: ProjectRoots,
    /// Gitignore-style excludes applied to the Python scan
    pub ignore: Vec<String>,
    /// Worker cap for concurrent comparison and propagation
    pub workers: Option<usize>,
}

/// Coordinates config discovery, parsing, and resolution
pub struct ConfigManager;

impl ConfigManager {
    /// Discover, parse, and resolve the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if no config file is found, the file is invalid,
    /// or either resolved project root does not exist.
    pub fn load(cli_config_path: Option<&Path>) -> Result<ResolvedConfig> {
        let Some(path) = ConfigDiscovery::discover(cli_config_path) else {
            bail!("No {CONFIG_FILE_NAME} found; run `ignsync config init` to create one");
        };
        let config = Self::parse(&path)?;

        // Relative project paths are anchored at the config file's directory
        let base = path
            .parent()
            .map_or_else(|| Path::new(".").to_path_buf(), Path::to_path_buf);
        Self::resolve(&config, &base)
    }

    /// Parse a config file without resolving it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid YAML.
    pub fn parse(path: &Path) -> Result<Config> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = serde_yml::from_str(&raw)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    /// Resolve a parsed config into absolute, validated roots.
    ///
    /// `ignition_project` that exists as a path (absolute or relative to
    /// `base`) is used directly; otherwise it names a project under
    /// `<install dir>/data/projects`.
    ///
    /// # Errors
    ///
    /// Returns an error if either resolved root does not exist.
    pub fn resolve(config: &Config, base: &Path) -> Result<ResolvedConfig> {
        let sync = &config.sync;

        let project_as_path = base.join(&sync.ignition_project);
        let ignition_path = if project_as_path.is_dir() {
            project_as_path
        } else {
            sync.ignition_install_dir
                .join(types::IGNITION_PROJECTS_DIR)
                .join(&sync.ignition_project)
        };
        if !ignition_path.is_dir() {
            bail!("Ignition project not found: {}", ignition_path.display());
        }

        let python_path = base.join(&sync.python_project);
        if !python_path.is_dir() {
            bail!("Python project not found: {}", python_path.display());
        }

        let ignition_root = fs::canonicalize(&ignition_path)
            .with_context(|| format!("Failed to resolve {}", ignition_path.display()))?;
        let python_root = fs::canonicalize(&python_path)
            .with_context(|| format!("Failed to resolve {}", python_path.display()))?;

        Ok(ResolvedConfig {
            roots: ProjectRoots::new(python_root, ignition_root),
            ignore: sync.ignore.clone(),
            workers: sync.workers,
        })
    }

    /// Write a starter config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file already exists or cannot be written.
    pub fn write_default(path: &Path) -> Result<()> {
        if path.exists() {
            bail!("Config file already exists: {}", path.display());
        }
        let rendered = serde_yml::to_string(&Config::default())
            .context("Failed to render default config")?;
        fs::write(path, rendered)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }
}

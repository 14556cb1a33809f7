//! CLI command implementations

mod compare;
mod config;
mod list;
mod sync;

pub use compare::Compare;
pub use config::ConfigCmd;
pub use list::{ListIgnition, ListPython};
pub use sync::Sync;

use std::fs;

use anyhow::Context;

use ignsync::config::{ConfigManager, PatternMatcher, ResolvedConfig};
use ignsync::error::Result;
use ignsync::module::ProjectRoots;
use ignsync::scanner::Scanner;

use crate::cli::Cli;

/// Shared, fully resolved state every command runs against
pub struct CommandContext {
    /// Resolved configuration (roots, excludes, worker cap)
    pub resolved: ResolvedConfig,
    pub verbose: bool,
    pub dry_run: bool,
}

impl CommandContext {
    /// Resolve roots from CLI overrides or the discovered config file
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut resolved = match (&cli.python_root, &cli.ignition_root) {
            (Some(python), Some(ignition)) => ResolvedConfig {
                roots: ProjectRoots::new(
                    fs::canonicalize(python).with_context(|| {
                        format!("Python root does not exist: {}", python.display())
                    })?,
                    fs::canonicalize(ignition).with_context(|| {
                        format!("Ignition root does not exist: {}", ignition.display())
                    })?,
                ),
                ignore: Vec::new(),
                workers: None,
            },
            _ => ConfigManager::load(cli.config.as_deref())?,
        };

        if cli.workers.is_some() {
            resolved.workers = cli.workers;
        }

        Ok(Self {
            resolved,
            verbose: cli.verbose,
            dry_run: cli.dry_run,
        })
    }

    /// Scanner configured with this run's exclude patterns
    pub fn scanner(&self) -> Result<Scanner> {
        Ok(Scanner::new(PatternMatcher::with_patterns(
            &self.resolved.ignore,
        )?))
    }

    /// Print scan warnings to stderr
    pub fn report_warnings(warnings: &[String]) {
        for warning in warnings {
            eprintln!("Warning: {warning}");
        }
    }
}

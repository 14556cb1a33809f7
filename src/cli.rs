use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Python to Ignition Module Sync Tool
///
/// Sync a flat Python source tree into an Ignition project's script-python resources
#[derive(Parser, Debug)]
#[command(name = "ignsync")]
#[command(long_about = None, version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Preview changes without executing (dry-run)
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Use specific config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the Python project root (bypasses config discovery)
    #[arg(long, global = true, value_name = "PATH", requires = "ignition_root")]
    pub python_root: Option<PathBuf>,

    /// Override the Ignition project root (bypasses config discovery)
    #[arg(long, global = true, value_name = "PATH", requires = "python_root")]
    pub ignition_root: Option<PathBuf>,

    /// Cap on concurrent per-module workers
    #[arg(long, global = true, value_name = "N")]
    pub workers: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List modules in the Python tree
    ListPython {
        /// Print absolute paths instead of relative ones
        #[arg(long)]
        abs_path: bool,
    },

    /// List modules in the Ignition tree
    ListIgnition {
        /// Print absolute paths instead of relative ones
        #[arg(long)]
        abs_path: bool,
    },

    /// Compare the two trees without making changes
    Compare {
        /// Show unified diffs for modules whose content drifted
        #[arg(long)]
        diff: bool,
    },

    /// Materialize missing and drifted modules in the Ignition tree
    Sync,

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate the discovered config file and resolved roots
    Check,
    /// Write a starter ignsync.yaml in the current directory
    Init,
}

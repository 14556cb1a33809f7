mod cli;
mod commands;

use anyhow::Context;
use clap::Parser;

use cli::{Cli, Commands};
use commands::CommandContext;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        println!("Verbose mode enabled");
        println!("Dry run: {}", cli.dry_run);
    }

    match &cli.command {
        Commands::ListPython { abs_path } => {
            let ctx = CommandContext::resolve(&cli)?;
            commands::ListPython::execute(&ctx, *abs_path)
                .context("Failed to execute list-python command")?;
        }
        Commands::ListIgnition { abs_path } => {
            let ctx = CommandContext::resolve(&cli)?;
            commands::ListIgnition::execute(&ctx, *abs_path)
                .context("Failed to execute list-ignition command")?;
        }
        Commands::Compare { diff } => {
            let ctx = CommandContext::resolve(&cli)?;
            commands::Compare::execute(&ctx, *diff)
                .context("Failed to execute compare command")?;
        }
        Commands::Sync => {
            let ctx = CommandContext::resolve(&cli)?;
            commands::Sync::execute(&ctx).context("Failed to execute sync command")?;
        }
        Commands::Config { action } => {
            commands::ConfigCmd::execute(action, cli.config.as_deref())
                .context("Failed to execute config command")?;
        }
    }

    Ok(())
}

use anyhow::bail;

use ignsync::comparison::{self, ContentComparator};
use ignsync::error::Result;
use ignsync::sync::{SyncReporter, Synchronizer};

use super::CommandContext;

/// `sync`: materialize missing and drifted modules in the Ignition tree
pub struct Sync;

impl Sync {
    pub fn execute(ctx: &CommandContext) -> Result<()> {
        let roots = &ctx.resolved.roots;

        let scanner = ctx.scanner()?;
        let python = scanner.scan_python(roots)?;
        let ignition = scanner.scan_ignition(roots)?;
        CommandContext::report_warnings(&python.warnings);
        CommandContext::report_warnings(&ignition.warnings);

        let partition = comparison::partition(&python.modules, &ignition.modules);
        let compare = ContentComparator::new(ctx.resolved.workers)
            .compare_all(&partition.in_both, roots)?;

        // Propagation set: missing in Ignition plus drifted content
        let mut to_copy = partition.only_in_python.clone();
        to_copy.extend(compare.differing.iter().cloned());

        print!("{}", SyncReporter::comparison_summary(&partition, &compare));

        if to_copy.is_empty() {
            println!("Nothing to synchronize");
            return Ok(());
        }

        println!("Synchronizing {} module(s)", to_copy.len());
        if ctx.verbose {
            for module in &to_copy {
                println!("- {}", module.rel_path().display());
            }
        }

        let report = Synchronizer::new(ctx.dry_run, ctx.resolved.workers)
            .synchronize(&to_copy, roots)?;
        print!("{}", SyncReporter::sync_summary(&report));

        if !report.is_success() {
            bail!("{} module(s) failed to synchronize", report.failures.len());
        }
        Ok(())
    }
}

use std::collections::BTreeSet;

use ignsync::comparison::{self, ContentComparator, DiffGenerator};
use ignsync::error::Result;
use ignsync::module::Module;
use ignsync::sync::SyncReporter;

use super::CommandContext;

/// `compare`: report the three-way partition and drifted content
pub struct Compare;

impl Compare {
    pub fn execute(ctx: &CommandContext, show_diff: bool) -> Result<()> {
        let roots = &ctx.resolved.roots;
        println!("Comparing Python and Ignition modules");

        let scanner = ctx.scanner()?;
        let python = scanner.scan_python(roots)?;
        let ignition = scanner.scan_ignition(roots)?;
        CommandContext::report_warnings(&python.warnings);
        CommandContext::report_warnings(&ignition.warnings);

        let partition = comparison::partition(&python.modules, &ignition.modules);
        let compare = ContentComparator::new(ctx.resolved.workers)
            .compare_all(&partition.in_both, roots)?;

        if partition.identities_match() && compare.differing.is_empty() {
            println!("All modules match");
            print!("{}", SyncReporter::comparison_summary(&partition, &compare));
            return Ok(());
        }

        Self::print_section("Missing in Ignition", &partition.only_in_python);
        Self::print_section("Missing in Python", &partition.only_in_ignition);
        Self::print_section("Matching but different content", &compare.differing);

        if show_diff {
            for module in &compare.differing {
                print!("{}", DiffGenerator::generate(module, roots)?);
            }
        }

        print!("{}", SyncReporter::comparison_summary(&partition, &compare));
        Ok(())
    }

    fn print_section(title: &str, modules: &BTreeSet<Module>) {
        if modules.is_empty() {
            return;
        }
        println!("{title}:");
        for module in modules {
            println!("- {}", module.rel_path().display());
        }
    }
}

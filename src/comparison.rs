//! Identity partitioning and byte-exact content comparison
//!
//! Comparison happens in two stages. [`partition`] splits the two scanned
//! identity sets into "only in Python", "only in Ignition", and "in both"
//! by relative-path equality alone. [`ContentComparator`] then checks the
//! shared modules byte-for-byte, concurrently, and returns the subset
//! whose content drifted. A read failure for one module is recorded and
//! skipped; it never aborts the rest of the comparison.

mod content;
mod diff;

use std::collections::BTreeSet;

use rayon::prelude::*;

pub use diff::DiffGenerator;

use crate::error::{ModuleFailure, Result};
use crate::module::{Module, ProjectRoots};
use crate::workers;

/// Decomposition of two module identity sets.
///
/// The three sets are pairwise disjoint and their union equals the union
/// of the inputs.
#[derive(Debug, Clone, Default)]
pub struct Partition {
    /// Modules present only in the Python tree
    pub only_in_python: BTreeSet<Module>,
    /// Modules present only in the Ignition tree
    pub only_in_ignition: BTreeSet<Module>,
    /// Modules present in both trees
    pub in_both: BTreeSet<Module>,
}

impl Partition {
    /// Whether the two trees hold exactly the same identities
    #[must_use]
    pub fn identities_match(&self) -> bool {
        self.only_in_python.is_empty() && self.only_in_ignition.is_empty()
    }
}

/// Partition two scanned module sets by identity equality
#[must_use]
pub fn partition(python: &[Module], ignition: &[Module]) -> Partition {
    let python: BTreeSet<Module> = python.iter().cloned().collect();
    let ignition: BTreeSet<Module> = ignition.iter().cloned().collect();

    Partition {
        only_in_python: python.difference(&ignition).cloned().collect(),
        only_in_ignition: ignition.difference(&python).cloned().collect(),
        in_both: python.intersection(&ignition).cloned().collect(),
    }
}

/// Outcome of deep-comparing the shared modules
#[derive(Debug, Clone, Default)]
pub struct DeepCompareReport {
    /// Modules present in both trees whose content differs
    pub differing: BTreeSet<Module>,
    /// Modules that could not be compared, excluded from `differing`
    pub failures: Vec<ModuleFailure>,
}

/// Concurrent byte-exact comparator for modules present in both trees
pub struct ContentComparator {
    workers: Option<usize>,
}

impl ContentComparator {
    /// Create a comparator with an optional worker cap
    #[must_use]
    pub const fn new(workers: Option<usize>) -> Self {
        Self { workers }
    }

    /// Compare every module's Python source against its Ignition code file.
    ///
    /// Modules whose files cannot be read are dropped from consideration
    /// and recorded in the report's failures.
    ///
    /// # Errors
    ///
    /// Returns an error only if the worker pool cannot be built; per-module
    /// I/O failures are aggregated in the report instead.
    pub fn compare_all(
        &self,
        modules: &BTreeSet<Module>,
        roots: &ProjectRoots,
    ) -> Result<DeepCompareReport> {
        let pool = workers::build_pool(self.workers)?;

        let results: Vec<(Module, std::io::Result<bool>)> = pool.install(|| {
            modules
                .par_iter()
                .map(|module| {
                    let identical = content::files_identical(
                        &module.python_path(roots),
                        &module.code_path(roots),
                    );
                    (module.clone(), identical)
                })
                .collect()
        });

        let mut report = DeepCompareReport::default();
        for (module, outcome) in results {
            match outcome {
                Ok(true) => {}
                Ok(false) => {
                    report.differing.insert(module);
                }
                Err(err) => report.failures.push(ModuleFailure {
                    module,
                    error: err.to_string(),
                }),
            }
        }
        report.failures.sort_by(|a, b| a.module.cmp(&b.module));

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn modules(rels: &[&str]) -> Vec<Module> {
        rels.iter().copied().map(Module::new).collect()
    }

    #[test]
    fn test_partition_three_ways() {
        let python = modules(&["a.py", "b.py", "c.py"]);
        let ignition = modules(&["b.py", "c.py", "d.py"]);

        let partition = partition(&python, &ignition);

        assert_eq!(partition.only_in_python, modules(&["a.py"]).into_iter().collect());
        assert_eq!(
            partition.only_in_ignition,
            modules(&["d.py"]).into_iter().collect()
        );
        assert_eq!(
            partition.in_both,
            modules(&["b.py", "c.py"]).into_iter().collect()
        );
    }

    #[test]
    fn test_partition_is_complete_and_disjoint() {
        let python = modules(&["a.py", "shared.py"]);
        let ignition = modules(&["shared.py", "z.py"]);

        let partition = partition(&python, &ignition);

        let mut union: BTreeSet<Module> = BTreeSet::new();
        union.extend(partition.only_in_python.iter().cloned());
        union.extend(partition.only_in_ignition.iter().cloned());
        union.extend(partition.in_both.iter().cloned());

        let expected: BTreeSet<Module> =
            python.iter().chain(ignition.iter()).cloned().collect();
        assert_eq!(union, expected);

        assert!(partition.only_in_python.is_disjoint(&partition.only_in_ignition));
        assert!(partition.only_in_python.is_disjoint(&partition.in_both));
        assert!(partition.only_in_ignition.is_disjoint(&partition.in_both));
    }

    #[test]
    fn test_partition_empty_inputs() {
        let partition = partition(&[], &[]);
        assert!(partition.identities_match());
        assert!(partition.in_both.is_empty());
    }

    fn write_module_pair(roots: &ProjectRoots, rel: &str, python: &str, ignition: &str) -> Module {
        let module = Module::new(rel);
        let src = module.python_path(roots);
        fs::create_dir_all(src.parent().unwrap()).unwrap();
        fs::write(src, python).unwrap();

        let dir = module.ignition_dir(roots);
        fs::create_dir_all(&dir).unwrap();
        fs::write(module.code_path(roots), ignition).unwrap();
        fs::write(module.resource_path(roots), "").unwrap();
        module
    }

    #[test]
    fn test_deep_compare_reports_drifted_content() {
        let python = TempDir::new().unwrap();
        let ignition = TempDir::new().unwrap();
        let roots = ProjectRoots::new(python.path(), ignition.path());

        let same = write_module_pair(&roots, "same.py", "x = 1", "x = 1");
        let drifted = write_module_pair(&roots, "drifted.py", "x = 1", "x = 2");

        let shared: BTreeSet<Module> = [same, drifted.clone()].into_iter().collect();
        let report = ContentComparator::new(Some(2))
            .compare_all(&shared, &roots)
            .unwrap();

        assert_eq!(report.differing, [drifted].into_iter().collect());
        assert!(report.failures.is_empty());
    }

    #[test]
    fn test_deep_compare_missing_file_is_per_module_failure() {
        let python = TempDir::new().unwrap();
        let ignition = TempDir::new().unwrap();
        let roots = ProjectRoots::new(python.path(), ignition.path());

        let ok = write_module_pair(&roots, "ok.py", "x", "x");
        // Identity exists in both scans but its code file vanished
        let broken = Module::new("broken.py");
        fs::write(broken.python_path(&roots), "x").unwrap();

        let shared: BTreeSet<Module> = [ok, broken.clone()].into_iter().collect();
        let report = ContentComparator::new(None)
            .compare_all(&shared, &roots)
            .unwrap();

        assert!(report.differing.is_empty());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].module, broken);
    }
}

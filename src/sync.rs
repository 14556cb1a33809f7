//! One-way propagation engine
//!
//! Materializes a set of modules from the Python tree into the Ignition
//! tree, one concurrent task per module on a bounded pool. Tasks never
//! block each other: every module runs to completion and failures are
//! aggregated into the report rather than aborting siblings. There is no
//! rollback of partial writes; a re-run repairs them because an incomplete
//! module either misses its sentinel (and is re-copied) or deep-compares
//! as drifted.

mod executor;
mod reporting;

use std::collections::BTreeSet;

use rayon::prelude::*;

pub use executor::ModuleWriter;
pub use reporting::SyncReporter;

use crate::error::{ModuleFailure, Result};
use crate::module::{Module, ProjectRoots};
use crate::workers;

/// Outcome of a propagation run
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    /// Modules materialized in the Ignition tree, sorted by identity
    pub written: Vec<Module>,
    /// Modules that failed, with their rendered causes
    pub failures: Vec<ModuleFailure>,
}

impl SyncReport {
    /// Whether every module propagated cleanly
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Concurrent one-way synchronizer
pub struct Synchronizer {
    writer: ModuleWriter,
    workers: Option<usize>,
}

impl Synchronizer {
    /// Create a synchronizer with an optional worker cap
    #[must_use]
    pub const fn new(dry_run: bool, workers: Option<usize>) -> Self {
        Self {
            writer: ModuleWriter::new(dry_run),
            workers,
        }
    }

    /// Materialize every module of the propagation set in the Ignition tree.
    ///
    /// # Errors
    ///
    /// Returns an error only if the worker pool cannot be built; per-module
    /// write failures are aggregated in the report instead.
    pub fn synchronize(
        &self,
        modules: &BTreeSet<Module>,
        roots: &ProjectRoots,
    ) -> Result<SyncReport> {
        let pool = workers::build_pool(self.workers)?;

        let results: Vec<(Module, Result<()>)> = pool.install(|| {
            modules
                .par_iter()
                .map(|module| (module.clone(), self.writer.write(module, roots)))
                .collect()
        });

        let mut report = SyncReport::default();
        for (module, outcome) in results {
            match outcome {
                Ok(()) => report.written.push(module),
                Err(err) => report.failures.push(ModuleFailure {
                    module,
                    error: format!("{err:#}"),
                }),
            }
        }
        report.written.sort();
        report.failures.sort_by(|a, b| a.module.cmp(&b.module));

        Ok(report)
    }
}

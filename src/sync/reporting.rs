//! Run summaries for compare and sync operations

use super::SyncReport;
use crate::comparison::{DeepCompareReport, Partition};

/// Renders the per-run summaries every invocation must report
pub struct SyncReporter;

impl SyncReporter {
    /// Summary of the three-way partition and the deep comparison
    #[must_use]
    pub fn comparison_summary(partition: &Partition, compare: &DeepCompareReport) -> String {
        let mut output = String::new();

        output.push_str("\n=== Comparison Summary ===\n");
        output.push_str(&format!(
            "Missing in Ignition: {}\n",
            partition.only_in_python.len()
        ));
        output.push_str(&format!(
            "Missing in Python:   {}\n",
            partition.only_in_ignition.len()
        ));
        output.push_str(&format!(
            "Differing content:   {}\n",
            compare.differing.len()
        ));

        if !compare.failures.is_empty() {
            output.push_str(&format!(
                "\nComparison failures ({}):\n",
                compare.failures.len()
            ));
            for failure in &compare.failures {
                output.push_str(&format!(
                    "  - {}: {}\n",
                    failure.module.rel_path().display(),
                    failure.error
                ));
            }
        }

        output
    }

    /// Summary of a propagation run
    #[must_use]
    pub fn sync_summary(report: &SyncReport) -> String {
        let mut output = String::new();

        output.push_str("\n=== Sync Summary ===\n");
        output.push_str(&format!("Synchronized: {}\n", report.written.len()));
        output.push_str(&format!("Failed:       {}\n", report.failures.len()));

        if !report.failures.is_empty() {
            output.push_str(&format!("\nErrors ({}):\n", report.failures.len()));
            for failure in &report.failures {
                output.push_str(&format!(
                    "  - {}: {}\n",
                    failure.module.rel_path().display(),
                    failure.error
                ));
            }
        }

        if report.is_success() {
            output.push_str("Status: ✓ Success\n");
        } else {
            output.push_str("Status: ✗ Completed with errors\n");
        }

        output
    }
}

//! Tree scanning for the two module layout conventions
//!
//! Two read-only scan strategies produce the module sets the comparator
//! works on:
//! - Python: every `*.py` file anywhere under the Python root
//! - Ignition: every `resource.json` sentinel under the script resource
//!   root, inverse-mapped back to a module identity
//!
//! Root-level failures abort the scan; per-entry mapping failures are
//! excluded and reported as warnings.

mod ignition;
mod python;

use crate::config::PatternMatcher;
use crate::error::Result;
use crate::module::{Module, ProjectRoots};

/// Result of a scan with non-fatal per-entry warnings
#[derive(Debug, Clone)]
pub struct ScanResult {
    /// Discovered modules, sorted by identity
    pub modules: Vec<Module>,
    /// Excluded malformed entries, one message each
    pub warnings: Vec<String>,
}

/// Scanner over both tree conventions
pub struct Scanner {
    matcher: PatternMatcher,
}

impl Scanner {
    /// Create a scanner with the given exclude patterns
    #[must_use]
    pub const fn new(matcher: PatternMatcher) -> Self {
        Self { matcher }
    }

    /// Scan the Python tree for source modules.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::DiscoveryError`] if the Python root is
    /// missing or unreadable.
    pub fn scan_python(&self, roots: &ProjectRoots) -> Result<ScanResult> {
        let files = python::scan(&roots.python_root)?;

        let mut modules = Vec::new();
        for path in files {
            // Paths come from a walk of the root, so the prefix always strips
            let Ok(rel) = path.strip_prefix(&roots.python_root) else {
                continue;
            };
            if self.matcher.should_include(rel) {
                modules.push(Module::new(rel));
            }
        }
        modules.sort();

        Ok(ScanResult {
            modules,
            warnings: Vec::new(),
        })
    }

    /// Scan the Ignition tree for module resource directories.
    ///
    /// A missing `ignition/script-python` subdirectory under an existing
    /// Ignition root is an empty (valid) module set.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::DiscoveryError`] if the Ignition root is
    /// missing or unreadable.
    pub fn scan_ignition(&self, roots: &ProjectRoots) -> Result<ScanResult> {
        let sentinels = ignition::scan(&roots.ignition_root, &roots.scripts_root())?;
        let scripts_root = roots.scripts_root();

        let mut modules = Vec::new();
        let mut warnings = Vec::new();
        for sentinel in sentinels {
            match Module::from_resource_file(&sentinel, &scripts_root) {
                Ok(module) => modules.push(module),
                Err(err) => {
                    warnings.push(format!("Skipping malformed module resource: {err}"));
                }
            }
        }
        modules.sort();

        Ok(ScanResult { modules, warnings })
    }
}

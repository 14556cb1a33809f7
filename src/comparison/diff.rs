//! Unified diff rendering for drifted modules

use std::fs;

use anyhow::Context;
use similar::TextDiff;

use crate::error::Result;
use crate::module::{Module, ProjectRoots};

const DIFF_CONTEXT_LINES: usize = 3;

/// Renders unified diffs between a module's two materializations
pub struct DiffGenerator;

impl DiffGenerator {
    /// Generate a unified diff from the Ignition code file to the Python
    /// source, i.e. the change a sync would apply.
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be read as text.
    pub fn generate(module: &Module, roots: &ProjectRoots) -> Result<String> {
        let python_path = module.python_path(roots);
        let code_path = module.code_path(roots);

        let python_content = fs::read_to_string(&python_path)
            .with_context(|| format!("Failed to read {}", python_path.display()))?;
        let ignition_content = fs::read_to_string(&code_path)
            .with_context(|| format!("Failed to read {}", code_path.display()))?;

        Ok(Self::generate_from_content(
            &ignition_content,
            &python_content,
            module,
        ))
    }

    /// Generate a unified diff from string contents
    #[must_use]
    pub fn generate_from_content(
        ignition_content: &str,
        python_content: &str,
        module: &Module,
    ) -> String {
        let rel = module.rel_path().display().to_string();
        TextDiff::from_lines(ignition_content, python_content)
            .unified_diff()
            .context_radius(DIFF_CONTEXT_LINES)
            .header(&format!("ignition/{rel}"), &format!("python/{rel}"))
            .to_string()
    }
}

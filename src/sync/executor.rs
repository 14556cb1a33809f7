//! Per-module write sequence

use std::fs;

use anyhow::Context;

use crate::error::Result;
use crate::module::{Module, ProjectRoots};

/// Writes one module's materialization in the Ignition tree
pub struct ModuleWriter {
    dry_run: bool,
}

impl ModuleWriter {
    /// Create a writer
    #[must_use]
    pub const fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Materialize a single module: resource directory, code file, then
    /// sentinel. The sentinel is written last because its presence is the
    /// externally observable signal that the module is complete.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the directory-create, read, or write
    /// steps fails.
    pub fn write(&self, module: &Module, roots: &ProjectRoots) -> Result<()> {
        let dir = module.ignition_dir(roots);

        if self.dry_run {
            println!("[DRY RUN] Would write: {}", dir.display());
            return Ok(());
        }

        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

        let source = module.python_path(roots);
        let code = fs::read(&source)
            .with_context(|| format!("Failed to read source module: {}", source.display()))?;

        let code_path = module.code_path(roots);
        fs::write(&code_path, code)
            .with_context(|| format!("Failed to write code file: {}", code_path.display()))?;

        let sentinel = module.resource_path(roots);
        fs::write(&sentinel, "")
            .with_context(|| format!("Failed to write sentinel file: {}", sentinel.display()))?;

        Ok(())
    }
}

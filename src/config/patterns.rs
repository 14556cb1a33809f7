//! Gitignore-style exclude patterns for the Python scan

use std::path::Path;

use anyhow::Context;
use ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::error::Result;

/// Matcher deciding which scanned files become modules
pub struct PatternMatcher {
    gitignore: Option<Gitignore>,
}

impl PatternMatcher {
    /// Create a matcher that includes everything
    #[must_use]
    pub const fn new() -> Self {
        Self { gitignore: None }
    }

    /// Build a matcher from exclude patterns.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern is invalid.
    pub fn with_patterns(ignore_patterns: &[String]) -> Result<Self> {
        if ignore_patterns.is_empty() {
            return Ok(Self::new());
        }

        let mut builder = GitignoreBuilder::new("");
        for pattern in ignore_patterns {
            builder
                .add_line(None, pattern)
                .with_context(|| format!("Invalid ignore pattern: '{pattern}'"))?;
        }

        Ok(Self {
            gitignore: Some(builder.build()?),
        })
    }

    /// Whether a root-relative path should be scanned as a module
    #[must_use]
    pub fn should_include(&self, rel_path: &Path) -> bool {
        self.gitignore
            .as_ref()
            .is_none_or(|gi| !gi.matched_path_or_any_parents(rel_path, false).is_ignore())
    }
}

impl Default for PatternMatcher {
    fn default() -> Self {
        Self::new()
    }
}

use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{DocGuardError, Result};

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Filter selecting the source files subject to the leading-comment check.
///
/// A path is included if its file name carries the configured extension, is
/// not the package-doc file itself, and matches no exclude pattern.
#[derive(Debug)]
pub struct SourceFileFilter {
    suffix: String,
    package_doc_file: String,
    exclude_patterns: GlobSet,
}

impl SourceFileFilter {
    /// Create a new filter for the given extension and exclude patterns.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(
        extension: &str,
        package_doc_file: &str,
        exclude_patterns: &[String],
    ) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| DocGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| DocGuardError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self {
            suffix: format!(".{}", extension.trim_start_matches('.')),
            package_doc_file: package_doc_file.to_string(),
            exclude_patterns,
        })
    }

    fn is_source_file(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(&self.suffix) && name != self.package_doc_file)
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(path)
    }
}

impl FileFilter for SourceFileFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.is_source_file(path) && !self.is_excluded(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;

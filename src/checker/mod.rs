mod predicates;
mod violation;

pub use predicates::{file_has_content, file_has_leading_comment};
pub use violation::{Violation, ViolationKind};

use std::path::{Path, PathBuf};

use crate::config::{Config, DocsConfig, LayoutConfig};
use crate::error::Result;
use crate::report::Reporter;
use crate::scanner::{DirectoryScanner, FileScanner, SourceFileFilter, list_subdirectories};

/// Repository layout profile selecting which folders are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    MonoRepo,
    App,
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monorepo" => Ok(Self::MonoRepo),
            "app" => Ok(Self::App),
            _ => Err(format!("Unknown mode: {s} (expected 'monorepo' or 'app')")),
        }
    }
}

/// Walks a repository and reports documentation-hygiene violations.
///
/// The checker owns the repository root path and borrows a [`Reporter`];
/// violations flow into the reporter while structural failures (a missing
/// required root folder, an unreadable entry) abort the run as errors.
pub struct Checker<'r> {
    repo_path: PathBuf,
    docs: DocsConfig,
    layout: LayoutConfig,
    scanner: DirectoryScanner<SourceFileFilter>,
    reporter: &'r mut dyn Reporter,
}

impl<'r> Checker<'r> {
    /// Create a checker for the repository at `repo_path`.
    ///
    /// # Errors
    /// Returns an error if the configured exclude patterns are invalid.
    pub fn new(
        repo_path: impl Into<PathBuf>,
        config: &Config,
        reporter: &'r mut dyn Reporter,
    ) -> Result<Self> {
        let filter = SourceFileFilter::new(
            &config.docs.source_extension,
            &config.docs.package_doc_file,
            &config.scanner.exclude,
        )?;

        Ok(Self {
            repo_path: repo_path.into(),
            docs: config.docs.clone(),
            layout: config.layout.clone(),
            scanner: DirectoryScanner::new(filter),
            reporter,
        })
    }

    /// Run the checks for the given layout mode.
    ///
    /// # Errors
    /// Returns an error on a structural failure; violations never abort the
    /// run.
    pub fn run(&mut self, mode: Mode) -> Result<()> {
        match mode {
            Mode::MonoRepo => self.check_mono_repo(),
            Mode::App => self.check_app(),
        }
    }

    fn check_mono_repo(&mut self) -> Result<()> {
        self.check_readme(Path::new(""))?;

        // App subprojects carry a README rather than a package doc.
        for folder in self.layout.monorepo.readme_dirs.clone() {
            self.check_readme_subfolders(&folder)?;
        }

        for folder in self.layout.monorepo.package_dirs.clone() {
            self.check_package_doc_subfolders(&folder)?;
        }

        for folder in self.layout.monorepo.package_dirs.clone() {
            self.check_source_file_docs(&folder)?;
        }

        Ok(())
    }

    fn check_app(&mut self) -> Result<()> {
        self.check_readme(Path::new(""))?;

        for folder in self.layout.app.package_dirs.clone() {
            self.check_package_doc_subfolders(&folder)?;
        }

        for folder in self.layout.app.package_dirs.clone() {
            self.check_source_file_docs(&folder)?;
        }

        Ok(())
    }

    fn check_readme(&mut self, folder: &Path) -> Result<()> {
        let path = self.readme(folder);
        if let Some(kind) = predicates::file_has_content(&path)? {
            self.reporter.report(Violation::new(kind, path));
        }
        Ok(())
    }

    fn check_package_doc(&mut self, folder: &Path) -> Result<()> {
        let path = self.package_doc(folder);
        if let Some(kind) = predicates::file_has_content(&path)? {
            self.reporter.report(Violation::new(kind, path));
        }
        Ok(())
    }

    fn check_readme_subfolders(&mut self, folder: &str) -> Result<()> {
        for name in list_subdirectories(&self.repo_path.join(folder))? {
            self.check_readme(&Path::new(folder).join(name))?;
        }
        Ok(())
    }

    fn check_package_doc_subfolders(&mut self, folder: &str) -> Result<()> {
        for name in list_subdirectories(&self.repo_path.join(folder))? {
            self.check_package_doc(&Path::new(folder).join(name))?;
        }
        Ok(())
    }

    fn check_source_file_docs(&mut self, folder: &str) -> Result<()> {
        let root = self.repo_path.join(folder);
        for file in self.scanner.scan(&root)? {
            if let Some(kind) =
                predicates::file_has_leading_comment(&file, &self.docs.comment_marker)?
            {
                self.reporter.report(Violation::new(kind, file));
            }
        }
        Ok(())
    }

    fn readme(&self, folder: &Path) -> PathBuf {
        self.repo_path.join(folder).join(&self.docs.readme_file)
    }

    fn package_doc(&self, folder: &Path) -> PathBuf {
        self.repo_path.join(folder).join(&self.docs.package_doc_file)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the doc-guard binary.
#[macro_export]
macro_rules! doc_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("doc-guard"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a doc-guard config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".doc-guard.toml", content);
    }

    /// Creates a source file that passes the leading-comment check.
    pub fn create_commented_source(&self, relative_path: &str) {
        self.create_file(
            relative_path,
            "// File comment line one.\n// File comment line two.\npackage p\n",
        );
    }

    /// Creates a source file that fails the leading-comment check.
    pub fn create_uncommented_source(&self, relative_path: &str) {
        self.create_file(relative_path, "package p\n\nvar x = 1\n");
    }

    /// Lays out a monorepo tree with all documentation in place.
    pub fn create_clean_monorepo(&self) {
        self.create_file("README.md", "# repo\n");
        self.create_file("apps/app1/README.md", "# app1\n");
        self.create_file("pkg/pkg1/doc.go", "// Package pkg1.\npackage pkg1\n");
        self.create_commented_source("pkg/pkg1/handler.go");
        self.create_file(
            "services/service1/doc.go",
            "// Package service1.\npackage service1\n",
        );
        self.create_commented_source("services/service1/server.go");
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

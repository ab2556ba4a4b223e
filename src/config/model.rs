use serde::{Deserialize, Serialize};

use crate::error::{DocGuardError, Result};

/// Supported config version. Current version is "1".
pub const CONFIG_VERSION: &str = "1";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Config format version; unset means current.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub docs: DocsConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub scanner: ScannerConfig,
}

impl Config {
    /// Validate field values after deserialization.
    ///
    /// # Errors
    /// Returns an error for an unsupported version or an empty filename,
    /// extension, or comment marker.
    pub fn validate(&self) -> Result<()> {
        if let Some(version) = &self.version
            && version != CONFIG_VERSION
        {
            return Err(DocGuardError::Config(format!(
                "Unsupported config version '{version}'. Only version '{CONFIG_VERSION}' is supported."
            )));
        }

        if self.docs.readme_file.is_empty() {
            return Err(DocGuardError::Config(
                "docs.readme_file must not be empty".to_string(),
            ));
        }
        if self.docs.package_doc_file.is_empty() {
            return Err(DocGuardError::Config(
                "docs.package_doc_file must not be empty".to_string(),
            ));
        }
        if self.docs.source_extension.trim_start_matches('.').is_empty() {
            return Err(DocGuardError::Config(
                "docs.source_extension must not be empty".to_string(),
            ));
        }
        if self.docs.comment_marker.is_empty() {
            return Err(DocGuardError::Config(
                "docs.comment_marker must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Documentation artifact names and the comment marker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocsConfig {
    /// README filename expected per folder.
    #[serde(default = "default_readme_file")]
    pub readme_file: String,

    /// Package-doc filename expected per package subdirectory.
    /// Always exempt from the leading-comment check.
    #[serde(default = "default_package_doc_file")]
    pub package_doc_file: String,

    /// Extension of source files subject to the leading-comment check.
    #[serde(default = "default_source_extension")]
    pub source_extension: String,

    /// Line-comment marker required on the first two lines of a source file.
    #[serde(default = "default_comment_marker")]
    pub comment_marker: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            readme_file: default_readme_file(),
            package_doc_file: default_package_doc_file(),
            source_extension: default_source_extension(),
            comment_marker: default_comment_marker(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LayoutConfig {
    #[serde(default)]
    pub monorepo: MonoRepoLayout,

    #[serde(default)]
    pub app: AppLayout,
}

/// Folder sets scanned in `monorepo` mode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonoRepoLayout {
    /// Folders whose immediate subdirectories must each carry a README.
    #[serde(default = "default_readme_dirs")]
    pub readme_dirs: Vec<String>,

    /// Folders whose immediate subdirectories must each carry a package doc;
    /// their file trees are walked for leading-comment checks.
    #[serde(default = "default_package_dirs")]
    pub package_dirs: Vec<String>,
}

impl Default for MonoRepoLayout {
    fn default() -> Self {
        Self {
            readme_dirs: default_readme_dirs(),
            package_dirs: default_package_dirs(),
        }
    }
}

/// Folder set scanned in `app` mode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppLayout {
    /// Folders whose immediate subdirectories must each carry a package doc;
    /// their file trees are walked for leading-comment checks.
    #[serde(default = "default_app_dirs")]
    pub package_dirs: Vec<String>,
}

impl Default for AppLayout {
    fn default() -> Self {
        Self {
            package_dirs: default_app_dirs(),
        }
    }
}

/// Scanner configuration for the recursive walk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Glob patterns skipped by the recursive walk.
    #[serde(default)]
    pub exclude: Vec<String>,
}

fn default_readme_file() -> String {
    "README.md".to_string()
}

fn default_package_doc_file() -> String {
    "doc.go".to_string()
}

fn default_source_extension() -> String {
    "go".to_string()
}

fn default_comment_marker() -> String {
    "//".to_string()
}

fn default_readme_dirs() -> Vec<String> {
    vec!["apps".to_string()]
}

fn default_package_dirs() -> Vec<String> {
    vec!["pkg".to_string(), "services".to_string()]
}

fn default_app_dirs() -> Vec<String> {
    vec!["app".to_string()]
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;

mod directory;
mod filter;

pub use directory::DirectoryScanner;
pub use filter::{FileFilter, SourceFileFilter};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{DocGuardError, Result};

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory tree and return all matching file paths.
    ///
    /// # Errors
    /// Returns an error if the root does not exist or the tree cannot be
    /// walked.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// List the names of the immediate subdirectories of `path`, sorted.
///
/// Every immediate subdirectory appears exactly once; files are skipped.
///
/// # Errors
/// Returns [`DocGuardError::RootFolderMissing`] if `path` does not exist and
/// [`DocGuardError::DirList`] if it cannot be listed.
pub fn list_subdirectories(path: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            DocGuardError::RootFolderMissing {
                path: path.to_path_buf(),
            }
        } else {
            DocGuardError::DirList {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| DocGuardError::DirList {
            path: path.to_path_buf(),
            source,
        })?;
        let file_type = entry.file_type().map_err(|source| DocGuardError::DirList {
            path: path.to_path_buf(),
            source,
        })?;
        if file_type.is_dir() {
            names.push(PathBuf::from(entry.file_name()));
        }
    }
    names.sort();
    Ok(names)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

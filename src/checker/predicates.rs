use std::fs;
use std::path::Path;

use crate::error::{DocGuardError, Result};

use super::ViolationKind;

/// Number of leading lines that must carry the comment marker.
const LEADING_COMMENT_LINES: usize = 2;

/// Check that a file exists and is non-empty.
///
/// Returns the violation kind if the file is missing or empty, `None` if the
/// check passes.
///
/// # Errors
/// Returns an error if the file exists but cannot be read.
pub fn file_has_content(path: &Path) -> Result<Option<ViolationKind>> {
    if !path.exists() {
        return Ok(Some(ViolationKind::Missing));
    }

    let data = fs::read(path).map_err(|source| DocGuardError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    if data.is_empty() {
        return Ok(Some(ViolationKind::Empty));
    }

    Ok(None)
}

/// Check that a source file starts with a leading comment block.
///
/// The first two lines must both begin with `marker`. A file shorter than the
/// comment block counts as missing it.
///
/// # Errors
/// Returns an error if the file cannot be read as text.
pub fn file_has_leading_comment(path: &Path, marker: &str) -> Result<Option<ViolationKind>> {
    let text = fs::read_to_string(path).map_err(|source| DocGuardError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut lines = text.lines();
    for _ in 0..LEADING_COMMENT_LINES {
        match lines.next() {
            Some(line) if line.starts_with(marker) => {}
            _ => return Ok(Some(ViolationKind::MissingFileComment)),
        }
    }

    Ok(None)
}

#[cfg(test)]
#[path = "predicates_tests.rs"]
mod tests;

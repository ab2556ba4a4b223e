use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Kind of documentation-hygiene failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// The expected file does not exist.
    Missing,
    /// The file exists but has no content.
    Empty,
    /// The source file does not start with a leading comment block.
    MissingFileComment,
}

/// A single documentation-hygiene violation.
///
/// Violations are recorded via a [`Reporter`](crate::report::Reporter) and
/// never abort a run; the offending path is always included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub kind: ViolationKind,
    pub path: PathBuf,
}

impl Violation {
    #[must_use]
    pub const fn new(kind: ViolationKind, path: PathBuf) -> Self {
        Self { kind, path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ViolationKind::Missing => write!(f, "{} does not exist!", self.path.display()),
            ViolationKind::Empty => {
                write!(f, "{} exists, but has no content!", self.path.display())
            }
            ViolationKind::MissingFileComment => {
                write!(f, "{} does not contain a file comment!", self.path.display())
            }
        }
    }
}

#[cfg(test)]
#[path = "violation_tests.rs"]
mod tests;

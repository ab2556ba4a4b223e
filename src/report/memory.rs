use crate::checker::Violation;

use super::Reporter;

/// Reporter that buffers violations in memory.
///
/// Backs the JSON and file output paths, and serves as the test collaborator
/// for asserting on recorded violations.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    violations: Vec<Violation>,
}

impl MemoryReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded violations, in recording order.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Rendered message lines, in recording order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }
}

impl Reporter for MemoryReporter {
    fn report(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    fn found_issues(&self) -> usize {
        self.violations.len()
    }
}

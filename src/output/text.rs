use std::fmt::Write;

use crate::checker::Violation;
use crate::error::Result;

use super::OutputFormatter;

/// Plain-text report: one violation per line plus a trailing summary.
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn format(&self, violations: &[Violation]) -> Result<String> {
        let mut output = String::new();

        for violation in violations {
            writeln!(output, "{violation}").ok();
        }

        if !violations.is_empty() {
            writeln!(
                output,
                "Found {} issues, please check the output",
                violations.len()
            )
            .ok();
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;

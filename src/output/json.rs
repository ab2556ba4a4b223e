use serde::Serialize;

use crate::checker::{Violation, ViolationKind};
use crate::error::Result;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    summary: Summary,
    violations: Vec<JsonViolation>,
}

#[derive(Serialize)]
struct Summary {
    total_violations: usize,
}

#[derive(Serialize)]
struct JsonViolation {
    path: String,
    kind: ViolationKind,
    message: String,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, violations: &[Violation]) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                total_violations: violations.len(),
            },
            violations: violations.iter().map(convert_violation).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_violation(violation: &Violation) -> JsonViolation {
    JsonViolation {
        path: violation.path.display().to_string(),
        kind: violation.kind,
        message: violation.to_string(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;

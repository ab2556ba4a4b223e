use std::path::PathBuf;

use super::*;
use crate::checker::ViolationKind;

fn violation(path: &str) -> Violation {
    Violation::new(ViolationKind::Missing, PathBuf::from(path))
}

#[test]
fn memory_reporter_starts_empty() {
    let reporter = MemoryReporter::new();
    assert_eq!(reporter.found_issues(), 0);
    assert!(reporter.violations().is_empty());
}

#[test]
fn memory_reporter_preserves_recording_order() {
    let mut reporter = MemoryReporter::new();
    reporter.report(violation("b/README.md"));
    reporter.report(violation("a/README.md"));

    assert_eq!(
        reporter.messages(),
        vec![
            "b/README.md does not exist!".to_string(),
            "a/README.md does not exist!".to_string()
        ]
    );
}

#[test]
fn memory_reporter_count_matches_recorded() {
    let mut reporter = MemoryReporter::new();
    for i in 0..5 {
        reporter.report(violation(&format!("pkg/p{i}/doc.go")));
    }
    assert_eq!(reporter.found_issues(), 5);
    assert_eq!(reporter.violations().len(), 5);
}

#[test]
fn console_reporter_counts_reported_violations() {
    let mut reporter = ConsoleReporter::new(ColorMode::Never);
    assert_eq!(reporter.found_issues(), 0);

    reporter.report(violation("README.md"));
    reporter.report(violation("pkg/p1/doc.go"));

    assert_eq!(reporter.found_issues(), 2);
}

#[test]
fn reporters_are_usable_as_trait_objects() {
    let mut memory = MemoryReporter::new();
    {
        let reporter: &mut dyn Reporter = &mut memory;
        reporter.report(violation("README.md"));
    }
    assert_eq!(memory.found_issues(), 1);
}

// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Test suite result extraction
//!
//! The `make installcheck` section ends with a summary block:
//!
//! ```text
//! NEST Testsuite Summary
//!   NEST Executable: /home/travis/build/nest/nest-simulator/result/bin/nest
//!   Total number of tests: 42
//!      Passed: 42
//!      Failed: 0 (0 PyNEST)
//! ```

use tracing::debug;

use crate::error::ScanError;
use crate::markers::{FAILED_TESTS_LABEL, TESTSUITE_SUMMARY_BANNER, TOTAL_TESTS_LABEL};
use crate::section::{SectionStatus, is_message};

/// Outcome of the test suite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestSuiteResult {
    /// Passed if the section completed with zero failures
    pub status: SectionStatus,
    /// Total number of tests, if reported
    pub total: Option<u64>,
    /// Number of failed tests, if reported
    pub failed: Option<u64>,
}

impl TestSuiteResult {
    /// Result for a test suite that never ran
    #[must_use]
    pub fn skipped() -> Self {
        Self {
            status: SectionStatus::Unstarted,
            total: None,
            failed: None,
        }
    }
}

/// Parse the trailing token of a line as a count
fn trailing_count(line: &str, line_number: usize) -> Result<u64, ScanError> {
    line.split_whitespace()
        .next_back()
        .and_then(|token| token.parse().ok())
        .ok_or_else(|| ScanError::MalformedCount {
            field: "total number of tests",
            line_number,
            line: line.to_string(),
        })
}

/// Parse the first all-digit token of a line as a count
fn first_count(line: &str, line_number: usize) -> Result<u64, ScanError> {
    line.split_whitespace()
        .find(|token| token.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|token| token.parse().ok())
        .ok_or_else(|| ScanError::MalformedCount {
            field: "number of failed tests",
            line_number,
            line: line.to_string(),
        })
}

/// Extract the test suite outcome from the section between `start` and `end`
///
/// Test counts are read from the summary block inside the section. The
/// suite passed only if the section completed and reported zero failures.
///
/// # Errors
///
/// Returns `ScanError::MalformedCount` if a summary line that must carry a
/// count does not.
pub fn testsuite_results<'a>(
    lines: impl IntoIterator<Item = &'a str>,
    start: &str,
    end: &str,
) -> Result<TestSuiteResult, ScanError> {
    let mut in_section = false;
    let mut in_summary = false;
    let mut completed = false;
    let mut total = None;
    let mut failed = None;

    for (idx, line) in lines.into_iter().enumerate() {
        if !in_section {
            if !is_message(line, start) {
                continue;
            }
            in_section = true;
        }

        if line.trim() == TESTSUITE_SUMMARY_BANNER {
            in_summary = true;
        }
        if in_summary {
            if line.contains(TOTAL_TESTS_LABEL) {
                total = Some(trailing_count(line, idx + 1)?);
            }
            if line.contains(FAILED_TESTS_LABEL) {
                failed = Some(first_count(line, idx + 1)?);
            }
        }
        if is_message(line, end) {
            completed = true;
            break;
        }
    }

    if !in_section {
        debug!(start, "test suite section not found");
        return Ok(TestSuiteResult::skipped());
    }

    let status = SectionStatus::from_success(completed && failed == Some(0));
    debug!(?status, ?total, ?failed, "scanned test suite section");

    Ok(TestSuiteResult {
        status,
        total,
        failed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    const PASSING: &str = "\
MSGBLD0290: Running make installcheck.
  running some tests
NEST Testsuite Summary
  Total number of tests: 42
  Failed 0 of 42
MSGBLD0300: make installcheck done.";

    fn scan(log: &str) -> Result<TestSuiteResult, ScanError> {
        testsuite_results(log.lines(), "MSGBLD0290", "MSGBLD0300")
    }

    #[test]
    fn test_passing_suite() {
        let result = scan(PASSING).expect("Should parse");
        assert_eq!(
            result,
            TestSuiteResult {
                status: SectionStatus::Passed,
                total: Some(42),
                failed: Some(0),
            }
        );
    }

    #[test]
    fn test_failing_suite() {
        let log = "\
MSGBLD0290
NEST Testsuite Summary
  Total number of tests: 1021
     Passed: 1019
     Failed: 2 (1 PyNEST)
MSGBLD0300";
        let result = scan(log).expect("Should parse");
        assert_eq!(result.status, SectionStatus::Failed);
        assert_eq!(result.total, Some(1021));
        assert_eq!(result.failed, Some(2));
    }

    #[test]
    fn test_suite_not_run() {
        let log = "NEST Testsuite Summary\n  Total number of tests: 3\n  Failed 0 of 3";
        let result = scan(log).expect("Should parse");
        assert_eq!(result, TestSuiteResult::skipped());
    }

    #[test]
    fn test_counts_outside_summary_block_are_ignored() {
        let log = "\
MSGBLD0290
Failed tests are listed below
MSGBLD0300";
        let result = scan(log).expect("Should parse");
        assert_eq!(result.status, SectionStatus::Failed);
        assert_eq!(result.total, None);
        assert_eq!(result.failed, None);
    }

    #[test]
    fn test_suite_without_end_is_failed() {
        let log = "MSGBLD0290\nNEST Testsuite Summary\n  Failed 0 of 7";
        let result = scan(log).expect("Should parse");
        assert_eq!(result.status, SectionStatus::Failed);
        assert_eq!(result.failed, Some(0));
    }

    #[test]
    fn test_banner_must_match_whole_line() {
        let log = "MSGBLD0290\nsee NEST Testsuite Summary below\n  Failed 0 of 7\nMSGBLD0300";
        let result = scan(log).expect("Should parse");
        assert_eq!(result.failed, None);
        assert_eq!(result.status, SectionStatus::Failed);
    }

    #[test]
    fn test_malformed_total() {
        let log = "MSGBLD0290\nNEST Testsuite Summary\n  Total number of tests: many\nMSGBLD0300";
        let err = scan(log).unwrap_err();
        match err {
            ScanError::MalformedCount {
                field, line_number, ..
            } => {
                assert_eq!(field, "total number of tests");
                assert_eq!(line_number, 3);
            }
            other => panic!("expected MalformedCount, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_failed_count() {
        let log = "MSGBLD0290\nNEST Testsuite Summary\n  Failed: none\nMSGBLD0300";
        let result = scan(log);
        assert!(matches!(
            result,
            Err(ScanError::MalformedCount { line_number: 3, .. })
        ));
    }
}

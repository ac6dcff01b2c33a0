// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Compiler error and warning extraction from the `make` section

use std::collections::BTreeMap;

use tracing::debug;

use crate::section::{SectionStatus, is_message};

/// Compiler diagnostics are recognized by these substrings
const ERROR_TAG: &str = ": error:";
const WARNING_TAG: &str = ": warning:";

/// Number of diagnostics per source file
pub type FileCounts = BTreeMap<String, usize>;

/// Errors and warnings reported while building
///
/// Counts and tables are `None` when the build section never started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildMessages {
    /// Passed if the section completed without errors
    pub status: SectionStatus,
    /// Total number of error lines
    pub error_count: Option<usize>,
    /// Error lines per file
    pub errors: Option<FileCounts>,
    /// Total number of warning lines
    pub warning_count: Option<usize>,
    /// Warning lines per file
    pub warnings: Option<FileCounts>,
}

impl BuildMessages {
    /// Result for a build that never ran
    #[must_use]
    pub fn skipped() -> Self {
        Self {
            status: SectionStatus::Unstarted,
            error_count: None,
            errors: None,
            warning_count: None,
            warnings: None,
        }
    }

    /// Number of errors, treating a skipped build as error-free
    #[must_use]
    pub fn errors_or_zero(&self) -> usize {
        self.error_count.unwrap_or(0)
    }

    /// Number of warnings, treating a skipped build as warning-free
    #[must_use]
    pub fn warnings_or_zero(&self) -> usize {
        self.warning_count.unwrap_or(0)
    }
}

/// The file a compiler diagnostic refers to: everything before the first colon
fn diagnostic_file(line: &str) -> &str {
    line.split(':').next().unwrap_or(line)
}

/// Count compiler errors and warnings per file in the build section
///
/// Counting starts at the `start` line itself and stops at the first `end`
/// line after it. A build whose `end` marker never appears is `Failed`.
pub fn build_messages<'a>(
    lines: impl IntoIterator<Item = &'a str>,
    start: &str,
    end: &str,
) -> BuildMessages {
    let mut in_section = false;
    let mut completed = false;
    let mut errors = FileCounts::new();
    let mut warnings = FileCounts::new();
    let mut error_count = 0;
    let mut warning_count = 0;

    for line in lines {
        if !in_section {
            if !is_message(line, start) {
                continue;
            }
            in_section = true;
        }

        if line.contains(ERROR_TAG) {
            *errors.entry(diagnostic_file(line).to_string()).or_insert(0) += 1;
            error_count += 1;
        }
        if line.contains(WARNING_TAG) {
            *warnings
                .entry(diagnostic_file(line).to_string())
                .or_insert(0) += 1;
            warning_count += 1;
        }
        if is_message(line, end) {
            completed = true;
            break;
        }
    }

    if !in_section {
        debug!(start, "build section not found");
        return BuildMessages::skipped();
    }

    let status = SectionStatus::from_success(completed && error_count == 0);
    debug!(?status, error_count, warning_count, "scanned build section");

    BuildMessages {
        status,
        error_count: Some(error_count),
        errors: Some(errors),
        warning_count: Some(warning_count),
        warnings: Some(warnings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_build_with_error() {
        let log = "MSGBLD0250\nfoo.cpp: error: bad\nMSGBLD0260";
        let build = build_messages(log.lines(), "MSGBLD0250", "MSGBLD0260");

        assert_eq!(build.status, SectionStatus::Failed);
        assert_eq!(build.error_count, Some(1));
        assert_eq!(
            build.errors,
            Some(FileCounts::from([("foo.cpp".to_string(), 1)]))
        );
        assert_eq!(build.warning_count, Some(0));
        assert_eq!(build.warnings, Some(FileCounts::new()));
    }

    #[test]
    fn test_build_clean() {
        let log = "MSGBLD0250 make\n[ 50%] Building CXX object\nMSGBLD0260 done";
        let build = build_messages(log.lines(), "MSGBLD0250", "MSGBLD0260");
        assert_eq!(build.status, SectionStatus::Passed);
        assert_eq!(build.errors_or_zero(), 0);
    }

    #[test]
    fn test_build_warnings_per_file() {
        let log = "\
MSGBLD0250
nestkernel/a.cpp:10:5: warning: unused variable 'x'
nestkernel/a.cpp:12:5: warning: unused variable 'y'
models/b.h:3:1: warning: extra ';'
MSGBLD0260";
        let build = build_messages(log.lines(), "MSGBLD0250", "MSGBLD0260");

        assert_eq!(build.status, SectionStatus::Passed);
        assert_eq!(build.warning_count, Some(3));
        let warnings = build.warnings.expect("Should have warnings table");
        assert_eq!(warnings.get("nestkernel/a.cpp"), Some(&2));
        assert_eq!(warnings.get("models/b.h"), Some(&1));
    }

    #[test]
    fn test_build_not_run() {
        let log = "MSGBLD0230\nfoo.cpp: error: bad\nMSGBLD0240";
        let build = build_messages(log.lines(), "MSGBLD0250", "MSGBLD0260");
        assert_eq!(build, BuildMessages::skipped());
    }

    #[test]
    fn test_build_ignores_diagnostics_before_start_and_after_end() {
        let log = "\
early.cpp: error: before
MSGBLD0260 end before start is ignored
MSGBLD0250
MSGBLD0260
late.cpp: error: after";
        let build = build_messages(log.lines(), "MSGBLD0250", "MSGBLD0260");
        assert_eq!(build.status, SectionStatus::Passed);
        assert_eq!(build.error_count, Some(0));
    }

    #[test]
    fn test_build_without_end_is_failed() {
        let log = "MSGBLD0250\na.cpp:1: warning: w";
        let build = build_messages(log.lines(), "MSGBLD0250", "MSGBLD0260");
        assert_eq!(build.status, SectionStatus::Failed);
        assert_eq!(build.warning_count, Some(1));
        assert_eq!(build.error_count, Some(0));
    }
}

// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Build log summarization
//!
//! Runs every scanner over a loaded log, assembles the [`BuildReport`] and
//! renders it together with the exit code.

use std::path::Path;

use logsift_report::{BuildReport, GatePolicy, ReportError, TableRenderer, compute_exit_code};
use logsift_scan::analysis::{CLANG_FORMAT, CPPCHECK, PEP8, VERA};
use logsift_scan::markers;
use logsift_scan::{
    BuildLog, ScanError, build_messages, changed_files, contains_marker, extract_messages,
    find_pair, testsuite_results,
};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while summarizing a build log
#[derive(Debug, Error)]
pub enum SummaryError {
    /// Reading or scanning the log failed
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// Rendering the report failed
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// A rendered summary and the build's verdict
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// The printable report
    pub text: String,
    /// `0` if the build passed every gate, `1` otherwise
    pub exit_code: u8,
}

/// Scan a build log into a [`BuildReport`]
///
/// # Errors
///
/// Returns `ScanError::MalformedCount` if the test suite summary carries a
/// malformed count.
pub fn collect(log: &BuildLog) -> Result<BuildReport, ScanError> {
    let report = BuildReport {
        changed_files: changed_files(
            log.lines(),
            markers::CHANGED_FILES_START,
            markers::CHANGED_FILES_END,
            markers::CHANGED_FILE,
        ),
        vera_init: find_pair(log.lines(), markers::VERA_INIT_START, markers::VERA_INIT_END),
        cppcheck_init: find_pair(
            log.lines(),
            markers::CPPCHECK_INIT_START,
            markers::CPPCHECK_INIT_END,
        ),
        format_init: find_pair(log.lines(), markers::FORMAT_INIT_START, markers::FORMAT_INIT_END),
        vera: extract_messages(log.lines(), &VERA),
        cppcheck: extract_messages(log.lines(), &CPPCHECK),
        format: extract_messages(log.lines(), &CLANG_FORMAT),
        pep8: extract_messages(log.lines(), &PEP8),
        cmake_configure: find_pair(
            log.lines(),
            markers::CMAKE_CONFIGURE_START,
            markers::CMAKE_CONFIGURE_END,
        ),
        build: build_messages(log.lines(), markers::MAKE_START, markers::MAKE_END),
        make_install: find_pair(
            log.lines(),
            markers::MAKE_INSTALL_START,
            markers::MAKE_INSTALL_END,
        ),
        tests: testsuite_results(
            log.lines(),
            markers::MAKE_INSTALLCHECK_START,
            markers::MAKE_INSTALLCHECK_END,
        )?,
        s3_upload: !contains_marker(log.lines(), markers::S3_UPLOAD_SKIPPED),
    };

    debug!(
        changed_files = report.changed_files.len(),
        build = ?report.build.status,
        tests = ?report.tests.status,
        s3_upload = report.s3_upload,
        "collected build report"
    );
    Ok(report)
}

/// Scan and render a loaded log
///
/// # Errors
///
/// Returns an error if scanning or rendering fails; no partial report is
/// produced.
pub fn summarize(
    log: &BuildLog,
    policy: &GatePolicy,
    renderer: &dyn TableRenderer,
) -> Result<Summary, SummaryError> {
    let report = collect(log)?;
    let text = logsift_report::render_report(&report, policy, renderer)?;
    let exit_code = compute_exit_code(&report, policy);
    Ok(Summary { text, exit_code })
}

/// Load, scan and render the log at `path`
///
/// # Errors
///
/// Returns `ScanError::Io` if the log cannot be read, or any error of
/// [`summarize`].
pub fn summarize_file(
    path: impl AsRef<Path>,
    policy: &GatePolicy,
    renderer: &dyn TableRenderer,
) -> Result<Summary, SummaryError> {
    let path = path.as_ref();
    let log = BuildLog::from_path(path)?;
    info!(path = %path.display(), lines = log.line_count(), "summarizing build log");
    summarize(&log, policy, renderer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use logsift_report::AsciiTable;
    use logsift_scan::SectionStatus;
    use similar_asserts::assert_eq;

    #[test]
    fn test_collect_empty_log() {
        let report = collect(&BuildLog::from_text("")).expect("Should collect");
        let expected = BuildReport {
            s3_upload: true,
            ..BuildReport::empty()
        };
        assert_eq!(report, expected);
    }

    #[test]
    fn test_collect_scenarios() {
        let log = BuildLog::from_text(
            "MSGBLD0230: Running CMake.\n\
             MSGBLD0240: CMake configure completed.\n\
             MSGBLD0250: Running make.\n\
             foo.cpp: error: bad\n\
             MSGBLD0260: Make completed.\n\
             MSGBLD0330: Skipping upload to Amazon S3.\n",
        );
        let report = collect(&log).expect("Should collect");

        assert_eq!(report.cmake_configure, SectionStatus::Passed);
        assert_eq!(report.build.status, SectionStatus::Failed);
        assert_eq!(report.build.error_count, Some(1));
        assert_eq!(
            report.build.errors.as_ref().and_then(|errors| errors.get("foo.cpp")),
            Some(&1)
        );
        assert_eq!(report.cppcheck_init, SectionStatus::Unstarted);
        assert!(!report.s3_upload);
    }

    #[test]
    fn test_summarize_malformed_count() {
        let log = BuildLog::from_text(
            "MSGBLD0290: Running make installcheck.\n\
             NEST Testsuite Summary\n\
             Total number of tests: many\n",
        );
        let result = summarize(&log, &GatePolicy::default(), &AsciiTable::default());
        assert!(matches!(
            result,
            Err(SummaryError::Scan(ScanError::MalformedCount { .. }))
        ));
    }

    #[test]
    fn test_summarize_missing_file() {
        let result = summarize_file(
            "/nonexistent/path/12345/build.sh.log",
            &GatePolicy::default(),
            &AsciiTable::default(),
        );
        assert!(matches!(result, Err(SummaryError::Scan(ScanError::Io { .. }))));
    }
}

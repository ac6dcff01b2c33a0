// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! The scanned state of one CI build and its pass/fail verdict

use logsift_scan::{BuildMessages, MessageTable, SectionStatus, TestSuiteResult};
use tracing::debug;

use crate::status::count_messages;

/// Everything the summary reports about one build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Files changed by the commit under test
    pub changed_files: Vec<String>,
    /// VERA++ initialization
    pub vera_init: SectionStatus,
    /// Cppcheck installation
    pub cppcheck_init: SectionStatus,
    /// clang-format installation
    pub format_init: SectionStatus,
    /// VERA++ messages per file
    pub vera: Option<MessageTable>,
    /// Cppcheck messages per file
    pub cppcheck: Option<MessageTable>,
    /// clang-format diff lines per file
    pub format: Option<MessageTable>,
    /// PEP8 messages per file
    pub pep8: Option<MessageTable>,
    /// CMake configure
    pub cmake_configure: SectionStatus,
    /// `make`, with its errors and warnings
    pub build: BuildMessages,
    /// `make install`
    pub make_install: SectionStatus,
    /// `make installcheck`
    pub tests: TestSuiteResult,
    /// Whether artifacts were uploaded to Amazon S3
    pub s3_upload: bool,
}

impl BuildReport {
    /// A report for a log in which nothing ran
    #[must_use]
    pub fn empty() -> Self {
        Self {
            changed_files: Vec::new(),
            vera_init: SectionStatus::Unstarted,
            cppcheck_init: SectionStatus::Unstarted,
            format_init: SectionStatus::Unstarted,
            vera: None,
            cppcheck: None,
            format: None,
            pep8: None,
            cmake_configure: SectionStatus::Unstarted,
            build: BuildMessages::skipped(),
            make_install: SectionStatus::Unstarted,
            tests: TestSuiteResult::skipped(),
            s3_upload: false,
        }
    }

    /// The message tables of all analysis tools, in report order
    #[must_use]
    pub fn analysis_tables(&self) -> [Option<&MessageTable>; 4] {
        [
            self.vera.as_ref(),
            self.cppcheck.as_ref(),
            self.format.as_ref(),
            self.pep8.as_ref(),
        ]
    }

    /// Check if any analysis tool reported at least one message
    #[must_use]
    pub fn has_analysis_messages(&self) -> bool {
        self.analysis_tables()
            .into_iter()
            .any(|table| count_messages(table) > 0)
    }
}

/// Which findings decide whether the build passes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GatePolicy {
    /// Let Cppcheck's initialization and messages fail the build
    ///
    /// Off by default: Cppcheck still runs and its findings are reported, but
    /// it produces too many false positives to gate on.
    pub include_cppcheck: bool,
}

/// Exit code of the build: `0` if every gate passed, `1` otherwise
///
/// Tool initializations may be skipped. Configure, build, install and the
/// test suite must have passed, and no gated analysis tool may have reported
/// a message.
#[must_use]
pub fn compute_exit_code(report: &BuildReport, policy: &GatePolicy) -> u8 {
    let tools_initialized = report.vera_init.passed_or_skipped()
        && report.format_init.passed_or_skipped()
        && (!policy.include_cppcheck || report.cppcheck_init.passed_or_skipped());

    let phases_passed = report.cmake_configure.passed()
        && report.build.status.passed()
        && report.make_install.passed()
        && report.tests.status.passed();

    let analysis_clean = count_messages(report.vera.as_ref()) == 0
        && count_messages(report.format.as_ref()) == 0
        && count_messages(report.pep8.as_ref()) == 0
        && (!policy.include_cppcheck || count_messages(report.cppcheck.as_ref()) == 0);

    let exit_code = if tools_initialized && phases_passed && analysis_clean {
        0
    } else {
        1
    };
    debug!(
        tools_initialized,
        phases_passed, analysis_clean, exit_code, "computed exit code"
    );
    exit_code
}

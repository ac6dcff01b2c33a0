// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for logsift-report

use thiserror::Error;

/// Errors that can occur while rendering a build report
#[derive(Debug, Error)]
pub enum ReportError {
    /// The C++ analysis tools ran on different sets of files
    ///
    /// The build script runs VERA++, Cppcheck and clang-format on the same
    /// changed files, so this points at a broken build script.
    #[error(
        "{first} and {second} analyzed different files (only in one of them: {})",
        .files.join(", ")
    )]
    InconsistentAnalysisFiles {
        /// Tool whose file set was used as reference
        first: &'static str,
        /// Tool whose file set differs
        second: &'static str,
        /// Files reported by exactly one of the two tools
        files: Vec<String>,
    },
}

// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for logsift-scan

use thiserror::Error;

/// Errors that can occur while reading or scanning a build log
#[derive(Debug, Error)]
pub enum ScanError {
    /// Error reading the log file
    #[error("Failed to read build log {path}: {source}")]
    Io {
        /// Path of the log that could not be read
        path: String,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// A count the log promises at a fixed place is missing or not a number
    #[error("Malformed {field} on line {line_number}: {line:?}")]
    MalformedCount {
        /// Which count was being parsed
        field: &'static str,
        /// One-based line number in the log
        line_number: usize,
        /// The offending line
        line: String,
    },
}

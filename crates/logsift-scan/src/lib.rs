// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! logsift-scan: Marker-driven scanners for CI build logs
//!
//! This library crate reads a CI build log (the `build.sh.log` written by the
//! NEST Travis CI build) and extracts the state of each marker-delimited
//! section: tool initialization, changed files, static code analysis, the
//! build itself and the test suite.
//!
//! Every extractor is a pure function over the log's lines, so the same
//! [`BuildLog`] can be scanned by all of them independently.
//!
//! # Example
//!
//! ```no_run
//! use logsift_scan::{BuildLog, markers, section};
//!
//! let log = BuildLog::from_path("build.sh.log").expect("read log");
//! let configure = section::find_pair(
//!     log.lines(),
//!     markers::CMAKE_CONFIGURE_START,
//!     markers::CMAKE_CONFIGURE_END,
//! );
//! println!("CMake configure: {configure:?}");
//! ```

#![warn(missing_docs)]

pub mod analysis;
pub mod build;
pub mod error;
pub mod log;
pub mod markers;
pub mod section;
pub mod testsuite;

pub use analysis::{AnalysisTool, MessageTable, extract_messages};
pub use build::{BuildMessages, FileCounts, build_messages};
pub use error::ScanError;
pub use log::BuildLog;
pub use section::{SectionStatus, changed_files, contains_marker, find_pair};
pub use testsuite::{TestSuiteResult, testsuite_results};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::analysis::{AnalysisTool, MessageTable};
    pub use crate::build::BuildMessages;
    pub use crate::error::ScanError;
    pub use crate::log::BuildLog;
    pub use crate::section::SectionStatus;
    pub use crate::testsuite::TestSuiteResult;
}

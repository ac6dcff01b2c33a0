// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! logsift-report: Build summary reporting for logsift
//!
//! This library crate turns the results scanned from a CI build log into the
//! printable build summary and the pass/fail exit code of the build.
//!
//! # Example
//!
//! ```no_run
//! use logsift_report::{AsciiTable, BuildReport, GatePolicy, compute_exit_code, render_report};
//!
//! # fn report() -> BuildReport { unimplemented!() }
//! let report: BuildReport = report();
//! let policy = GatePolicy::default();
//! let text = render_report(&report, &policy, &AsciiTable::new(80)).expect("render");
//! println!("{text}");
//! std::process::exit(i32::from(compute_exit_code(&report, &policy)));
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod render;
pub mod report;
pub mod status;
pub mod table;

pub use error::ReportError;
pub use render::render_report;
pub use report::{BuildReport, GatePolicy, compute_exit_code};
pub use status::{count_messages, status_string, table_status, table_status_string, yes_no_string};
pub use table::{AsciiTable, Row, TableRenderer};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::ReportError;
    pub use crate::report::{BuildReport, GatePolicy};
    pub use crate::table::{AsciiTable, TableRenderer};
}

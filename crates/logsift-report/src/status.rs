// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Status conversions used by the report

use logsift_scan::{MessageTable, SectionStatus};

/// Total number of messages in an optional table (0 if the tool did not run)
#[must_use]
pub fn count_messages(table: Option<&MessageTable>) -> usize {
    table.map_or(0, MessageTable::total)
}

/// Human-readable section status
#[must_use]
pub fn status_string(status: SectionStatus) -> &'static str {
    match status {
        SectionStatus::Passed => "Passed successfully",
        SectionStatus::Unstarted => "Skipped",
        SectionStatus::Failed => "Failed",
    }
}

/// `Yes` or `No`
#[must_use]
pub fn yes_no_string(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

/// Status of a static analysis run: skipped, clean or with findings
#[must_use]
pub fn table_status(table: Option<&MessageTable>) -> SectionStatus {
    match table {
        None => SectionStatus::Unstarted,
        Some(table) => SectionStatus::from_success(table.total() == 0),
    }
}

/// Human-readable status of a static analysis run
#[must_use]
pub fn table_status_string(table: Option<&MessageTable>) -> &'static str {
    status_string(table_status(table))
}

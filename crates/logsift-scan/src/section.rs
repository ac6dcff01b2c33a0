// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Section-pair scanning
//!
//! A section is the stretch of log between a start marker and an end marker.
//! Whether both markers showed up, only the first, or neither tells us if a
//! build phase passed, failed or never ran.

use tracing::debug;

/// State of a marker-delimited section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionStatus {
    /// Start marker never seen: the phase did not run
    Unstarted,
    /// Start marker seen without a matching end marker, or the phase
    /// completed with failures
    Failed,
    /// Start and end markers seen in order
    Passed,
}

impl SectionStatus {
    /// Check if the section completed
    #[must_use]
    pub fn passed(self) -> bool {
        self == Self::Passed
    }

    /// Passed or never run; a skipped optional phase is not a failure
    #[must_use]
    pub fn passed_or_skipped(self) -> bool {
        matches!(self, Self::Passed | Self::Unstarted)
    }

    /// Status for a phase that ran and either did or did not succeed
    #[must_use]
    pub fn from_success(success: bool) -> Self {
        if success { Self::Passed } else { Self::Failed }
    }
}

/// Check whether `line` carries `marker`
#[must_use]
pub fn is_message(line: &str, marker: &str) -> bool {
    line.contains(marker)
}

/// Scan for a start/end marker pair
///
/// Returns `Unstarted` if `start` never occurs, `Failed` if only `start`
/// occurs, and `Passed` once `end` occurs after `start`. An `end` marker seen
/// before any `start` marker is ignored.
pub fn find_pair<'a>(
    lines: impl IntoIterator<Item = &'a str>,
    start: &str,
    end: &str,
) -> SectionStatus {
    let mut status = SectionStatus::Unstarted;

    for line in lines {
        if status == SectionStatus::Unstarted && is_message(line, start) {
            status = SectionStatus::Failed;
        }
        if status == SectionStatus::Failed && is_message(line, end) {
            status = SectionStatus::Passed;
            break;
        }
    }

    debug!(start, end, ?status, "scanned section pair");
    status
}

/// Check whether any line of the log carries `marker`
pub fn contains_marker<'a>(lines: impl IntoIterator<Item = &'a str>, marker: &str) -> bool {
    lines.into_iter().any(|line| is_message(line, marker))
}

/// Last whitespace-delimited token of a line
///
/// The build script prints file names as the final word of a message.
#[must_use]
pub fn last_token(line: &str) -> &str {
    line.split_whitespace().next_back().unwrap_or("")
}

/// List the changed files reported between `start` and `end`
///
/// Each line carrying `item` contributes its last token. The list is empty
/// unless the section completed.
pub fn changed_files<'a, I>(lines: I, start: &str, end: &str, item: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
    I::IntoIter: Clone,
{
    let lines = lines.into_iter();
    if !find_pair(lines.clone(), start, end).passed() {
        return Vec::new();
    }

    let mut files = Vec::new();
    let mut in_section = false;

    for line in lines {
        if !in_section {
            in_section = is_message(line, start);
            continue;
        }
        if is_message(line, item) {
            files.push(last_token(line).to_string());
            continue;
        }
        if is_message(line, end) {
            break;
        }
    }

    debug!(count = files.len(), "collected changed files");
    files
}

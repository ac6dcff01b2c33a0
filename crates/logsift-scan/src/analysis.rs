// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Static code analysis message extraction
//!
//! The build script runs each analysis tool once per changed file and wraps
//! every run in its own section:
//!
//! ```text
//! MSGBLD0130: Running VERA++ for nestkernel/node.cpp
//! MSGBLD0135: [VERA++] nestkernel/node.cpp:12: trailing whitespace
//! MSGBLD0140: VERA++ for nestkernel/node.cpp done.
//! ```
//!
//! All tools share one scanner, [`extract_messages`]. What differs between
//! them (their markers, where the message text sits in a line and which lines
//! are noise) is captured by an [`AnalysisTool`] value.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::markers;
use crate::section::{is_message, last_token};

// ============================================================================
// Message Table
// ============================================================================

/// Per-file counts of analysis messages
///
/// Maps file name to message text to number of occurrences. A file that was
/// analyzed without findings is present with an empty message map, which is
/// different from a file that was never analyzed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageTable {
    files: BTreeMap<String, BTreeMap<String, usize>>,
}

impl MessageTable {
    /// Create an empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the message map for a file
    pub fn open_file(&mut self, file: &str) {
        self.files.insert(file.to_string(), BTreeMap::new());
    }

    /// Count one occurrence of `message` for `file`
    pub fn record(&mut self, file: &str, message: &str) {
        *self
            .files
            .entry(file.to_string())
            .or_default()
            .entry(message.to_string())
            .or_insert(0) += 1;
    }

    /// Total number of messages across all files
    #[must_use]
    pub fn total(&self) -> usize {
        self.files.values().flat_map(BTreeMap::values).sum()
    }

    /// Number of messages for one file (0 if the file is unknown)
    #[must_use]
    pub fn file_total(&self, file: &str) -> usize {
        self.files
            .get(file)
            .map(|messages| messages.values().sum::<usize>())
            .unwrap_or(0)
    }

    /// Occurrences of one message for one file
    #[must_use]
    pub fn count(&self, file: &str, message: &str) -> usize {
        self.files
            .get(file)
            .and_then(|messages| messages.get(message))
            .copied()
            .unwrap_or(0)
    }

    /// Analyzed file names, sorted
    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    /// Messages and their counts for one file, sorted by message text
    pub fn messages(&self, file: &str) -> impl Iterator<Item = (&str, usize)> {
        self.files
            .get(file)
            .into_iter()
            .flat_map(|messages| messages.iter().map(|(m, c)| (m.as_str(), *c)))
    }

    /// Check if a file was analyzed
    #[must_use]
    pub fn contains_file(&self, file: &str) -> bool {
        self.files.contains_key(file)
    }

    /// Number of analyzed files
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

// ============================================================================
// Tool Descriptions
// ============================================================================

/// Where a tool puts the message text in its output lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageText {
    /// Everything after the last colon
    AfterLastColon,
    /// Everything from the first opening parenthesis on
    FromFirstParen,
}

impl MessageText {
    /// Pull the message text out of a line
    #[must_use]
    pub fn extract(self, line: &str) -> &str {
        match self {
            Self::AfterLastColon => line.rsplit(':').next().unwrap_or(line).trim(),
            // Lines without a parenthesis keep their full text.
            Self::FromFirstParen => line.find('(').map_or(line, |idx| &line[idx..]).trim(),
        }
    }
}

/// A static analysis tool as it appears in the build log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisTool {
    /// Display name
    pub name: &'static str,
    /// Marker opening the section for one file
    pub section_start: &'static str,
    /// Marker closing the section for one file
    pub section_end: &'static str,
    /// Marker carried by every message line
    pub item: &'static str,
    /// Message text rule
    pub text: MessageText,
    /// Substrings that make a whole line progress noise
    pub skip_lines_containing: &'static [&'static str],
    /// Substrings that make an extracted message irrelevant
    pub skip_messages_containing: &'static [&'static str],
}

impl AnalysisTool {
    /// Extract the message from an item line, or `None` if it is filtered out
    #[must_use]
    pub fn message<'l>(&self, line: &'l str) -> Option<&'l str> {
        if self.skip_lines_containing.iter().any(|s| line.contains(s)) {
            return None;
        }
        let message = self.text.extract(line);
        if self
            .skip_messages_containing
            .iter()
            .any(|s| message.contains(s))
        {
            return None;
        }
        Some(message)
    }

    /// All tools run by the build, in report order
    #[must_use]
    pub fn all() -> [AnalysisTool; 4] {
        [VERA, CPPCHECK, CLANG_FORMAT, PEP8]
    }
}

/// VERA++ style and brace-convention checker
pub const VERA: AnalysisTool = AnalysisTool {
    name: "VERA++",
    section_start: markers::VERA_SECTION_START,
    section_end: markers::VERA_SECTION_END,
    item: markers::VERA_MESSAGE,
    text: MessageText::AfterLastColon,
    skip_lines_containing: &[],
    skip_messages_containing: &[],
};

/// Cppcheck static analyzer
///
/// `Checking ...` lines are progress output. Unused-function reports are
/// known false positives for a library, and informational messages carry no
/// finding.
pub const CPPCHECK: AnalysisTool = AnalysisTool {
    name: "Cppcheck",
    section_start: markers::CPPCHECK_SECTION_START,
    section_end: markers::CPPCHECK_SECTION_END,
    item: markers::CPPCHECK_MESSAGE,
    text: MessageText::FromFirstParen,
    skip_lines_containing: &["Checking"],
    skip_messages_containing: &["is never used", "(information)"],
};

/// clang-format, reporting one message per diff line
pub const CLANG_FORMAT: AnalysisTool = AnalysisTool {
    name: "clang-format",
    section_start: markers::FORMAT_SECTION_START,
    section_end: markers::FORMAT_SECTION_END,
    item: markers::FORMAT_MESSAGE,
    text: MessageText::AfterLastColon,
    skip_lines_containing: &[],
    skip_messages_containing: &[],
};

/// PEP8 checker for the Python sources
pub const PEP8: AnalysisTool = AnalysisTool {
    name: "PEP8",
    section_start: markers::PEP8_SECTION_START,
    section_end: markers::PEP8_SECTION_END,
    item: markers::PEP8_MESSAGE,
    text: MessageText::AfterLastColon,
    skip_lines_containing: &[],
    skip_messages_containing: &[],
};

// ============================================================================
// Extraction
// ============================================================================

/// Collect a tool's messages per file
///
/// Returns `None` if the tool never ran. Otherwise every file section seen
/// has an entry, even if it produced no messages.
pub fn extract_messages<'a>(
    lines: impl IntoIterator<Item = &'a str>,
    tool: &AnalysisTool,
) -> Option<MessageTable> {
    let mut table: Option<MessageTable> = None;
    let mut current_file: Option<&'a str> = None;

    for line in lines {
        let Some(file) = current_file else {
            if is_message(line, tool.section_start) {
                let file = last_token(line);
                trace!(tool = tool.name, file, "entered analysis section");
                table.get_or_insert_with(MessageTable::new).open_file(file);
                current_file = Some(file);
            }
            continue;
        };

        if is_message(line, tool.item) {
            if let (Some(message), Some(table)) = (tool.message(line), table.as_mut()) {
                table.record(file, message);
            }
            continue;
        }
        if is_message(line, tool.section_end) {
            current_file = None;
        }
    }

    match &table {
        Some(table) => debug!(
            tool = tool.name,
            files = table.file_count(),
            messages = table.total(),
            "collected analysis messages"
        ),
        None => debug!(tool = tool.name, "tool did not run"),
    }
    table
}

// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Build log loading

use std::path::Path;

use tracing::{debug, warn};

use crate::error::ScanError;

/// An in-memory CI build log
///
/// The log is read once and then handed to each extractor as a fresh line
/// iterator; extractors never mutate it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildLog {
    content: String,
}

impl BuildLog {
    /// Read a build log from disk
    ///
    /// Invalid UTF-8 sequences are replaced rather than rejected; CI logs
    /// regularly contain raw compiler or terminal output.
    ///
    /// # Errors
    ///
    /// Returns `ScanError::Io` if the file cannot be read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ScanError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| ScanError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(err) => {
                warn!(path = %path.display(), "build log is not valid UTF-8, decoding lossily");
                String::from_utf8_lossy(err.as_bytes()).into_owned()
            }
        };

        let log = Self { content };
        debug!(path = %path.display(), lines = log.line_count(), "loaded build log");
        Ok(log)
    }

    /// Wrap log text that is already in memory
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            content: text.into(),
        }
    }

    /// Iterate over the log's lines, without line terminators
    pub fn lines(&self) -> std::str::Lines<'_> {
        self.content.lines()
    }

    /// Number of lines in the log
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;
    use std::io::Write;

    #[test]
    fn test_from_text_lines() {
        let log = BuildLog::from_text("first\r\nsecond\nthird");
        let lines: Vec<&str> = log.lines().collect();
        assert_eq!(lines, vec!["first", "second", "third"]);
        assert_eq!(log.line_count(), 3);
    }

    #[test]
    fn test_from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        writeln!(file, "MSGBLD0230").expect("write");
        writeln!(file, "MSGBLD0240").expect("write");

        let log = BuildLog::from_path(file.path()).expect("Should read");
        assert_eq!(log.line_count(), 2);
        let lines: Vec<&str> = log.lines().collect();
        assert_eq!(lines, vec!["MSGBLD0230", "MSGBLD0240"]);
    }

    #[test]
    fn test_from_path_invalid_utf8_is_lossy() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(b"MSGBLD0250\n\xff\xfe garbage\nMSGBLD0260\n")
            .expect("write");

        let log = BuildLog::from_path(file.path()).expect("Should decode lossily");
        assert_eq!(log.line_count(), 3);
        assert!(log.lines().any(|line| line.contains('\u{FFFD}')));
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = BuildLog::from_path("/nonexistent/path/build.sh.log");
        match result {
            Err(ScanError::Io { path, .. }) => assert!(path.ends_with("build.sh.log")),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}

// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Message numbers written by the CI build script
//!
//! The build script prefixes every line that matters to the summary with a
//! `MSGBLDnnnn` message number. Parsing relies only on these numbers, never on
//! the surrounding message text (apart from file names).

// ============================================================================
// Tool initialization
// ============================================================================

/// VERA++ initialization started
pub const VERA_INIT_START: &str = "MSGBLD0010";
/// VERA++ initialization finished
pub const VERA_INIT_END: &str = "MSGBLD0020";
/// Cppcheck initialization started
pub const CPPCHECK_INIT_START: &str = "MSGBLD0030";
/// Cppcheck initialization finished
pub const CPPCHECK_INIT_END: &str = "MSGBLD0040";
/// clang-format initialization started
pub const FORMAT_INIT_START: &str = "MSGBLD0050";
/// clang-format initialization finished
pub const FORMAT_INIT_END: &str = "MSGBLD0060";

// ============================================================================
// Changed files
// ============================================================================

/// Changed-files section started
pub const CHANGED_FILES_START: &str = "MSGBLD0070";
/// One changed file; the file name is the line's last token
pub const CHANGED_FILE: &str = "MSGBLD0095";
/// Changed-files section finished
pub const CHANGED_FILES_END: &str = "MSGBLD0100";

// ============================================================================
// Static code analysis (one section per analyzed file)
// ============================================================================

/// VERA++ section for one file started
pub const VERA_SECTION_START: &str = "MSGBLD0130";
/// One VERA++ message
pub const VERA_MESSAGE: &str = "MSGBLD0135";
/// VERA++ section for one file finished
pub const VERA_SECTION_END: &str = "MSGBLD0140";
/// Cppcheck section for one file started
pub const CPPCHECK_SECTION_START: &str = "MSGBLD0150";
/// One Cppcheck message
pub const CPPCHECK_MESSAGE: &str = "MSGBLD0155";
/// Cppcheck section for one file finished
pub const CPPCHECK_SECTION_END: &str = "MSGBLD0160";
/// clang-format section for one file started
pub const FORMAT_SECTION_START: &str = "MSGBLD0170";
/// One clang-format diff line
pub const FORMAT_MESSAGE: &str = "MSGBLD0175";
/// clang-format section for one file finished
pub const FORMAT_SECTION_END: &str = "MSGBLD0180";
/// PEP8 section for one file started
pub const PEP8_SECTION_START: &str = "MSGBLD0190";
/// One PEP8 message
pub const PEP8_MESSAGE: &str = "MSGBLD0195";
/// PEP8 section for one file finished
pub const PEP8_SECTION_END: &str = "MSGBLD0200";

// ============================================================================
// Build, install, tests, artifacts
// ============================================================================

/// CMake configure started
pub const CMAKE_CONFIGURE_START: &str = "MSGBLD0230";
/// CMake configure finished
pub const CMAKE_CONFIGURE_END: &str = "MSGBLD0240";
/// `make` started
pub const MAKE_START: &str = "MSGBLD0250";
/// `make` finished
pub const MAKE_END: &str = "MSGBLD0260";
/// `make install` started
pub const MAKE_INSTALL_START: &str = "MSGBLD0270";
/// `make install` finished
pub const MAKE_INSTALL_END: &str = "MSGBLD0280";
/// `make installcheck` (the test suite) started
pub const MAKE_INSTALLCHECK_START: &str = "MSGBLD0290";
/// `make installcheck` finished
pub const MAKE_INSTALLCHECK_END: &str = "MSGBLD0300";
/// Artifact upload to Amazon S3 was skipped
pub const S3_UPLOAD_SKIPPED: &str = "MSGBLD0330";

// ============================================================================
// Test suite summary text
// ============================================================================

/// Heading line that opens the test suite summary
pub const TESTSUITE_SUMMARY_BANNER: &str = "NEST Testsuite Summary";
/// Label of the line carrying the total number of tests
pub const TOTAL_TESTS_LABEL: &str = "Total number of tests:";
/// Word identifying the line carrying the number of failed tests
pub const FAILED_TESTS_LABEL: &str = "Failed";

// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for the build log extractors
//!
//! Arbitrary text is fed to every extractor. None of them may panic.

#![no_main]

use libfuzzer_sys::fuzz_target;

use logsift_scan::{
    AnalysisTool, build_messages, changed_files, extract_messages, find_pair, markers,
    testsuite_results,
};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let _ = find_pair(input.lines(), markers::MAKE_START, markers::MAKE_END);
        let _ = changed_files(
            input.lines(),
            markers::CHANGED_FILES_START,
            markers::CHANGED_FILES_END,
            markers::CHANGED_FILE,
        );
        for tool in AnalysisTool::all() {
            if let Some(table) = extract_messages(input.lines(), &tool) {
                assert!(table.total() >= table.file_total(table.files().next().unwrap_or("")));
            }
        }
        let _ = build_messages(input.lines(), markers::MAKE_START, markers::MAKE_END);
        let _ = testsuite_results(
            input.lines(),
            markers::MAKE_INSTALLCHECK_START,
            markers::MAKE_INSTALLCHECK_END,
        );
    }
});

// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! logsift library
//!
//! This module exports the CLI configuration and the summarization pipeline
//! of the `logsift` binary for use in integration tests and as a library.

pub mod config;
pub mod summary;

pub use config::{Config, ConfigError};
pub use summary::{Summary, SummaryError, collect, summarize, summarize_file};

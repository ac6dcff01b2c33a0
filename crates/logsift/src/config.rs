// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Command line configuration for logsift
//!
//! This module provides the CLI definition, the log level selection and the
//! checks that run before a log is read.

use std::path::PathBuf;

use clap::Parser;
use logsift_report::GatePolicy;

/// Terminal width used when `--width` is not given
pub const DEFAULT_WIDTH: usize = 80;

/// Narrowest terminal the build report table can be laid out in
pub const MIN_WIDTH: usize = 40;

/// Logsift - summarize a NEST Travis CI build log
#[derive(Parser, Debug, Clone)]
#[command(name = "logsift")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Path to the build log (usually `build.sh.log`)
    pub log_file: PathBuf,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so the report on stdout stays clean.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,

    /// Terminal width the report tables are laid out for
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Let Cppcheck's initialization and findings fail the build
    ///
    /// Cppcheck always runs and is always reported; by default it does not
    /// decide the exit code.
    #[arg(long, default_value = "false")]
    pub gate_cppcheck: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("build.sh.log"),
            verbose: false,
            quiet: false,
            width: DEFAULT_WIDTH,
            gate_cppcheck: false,
        }
    }
}

impl Config {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The log file doesn't exist or is a directory
    /// - The width is narrower than [`MIN_WIDTH`]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.log_file.exists() {
            return Err(ConfigError::LogNotFound(self.log_file.clone()));
        }
        if self.log_file.is_dir() {
            return Err(ConfigError::LogIsDirectory(self.log_file.clone()));
        }
        if self.width < MIN_WIDTH {
            return Err(ConfigError::WidthTooSmall(self.width));
        }
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }

    /// Which findings decide the exit code
    #[must_use]
    pub fn gate_policy(&self) -> GatePolicy {
        GatePolicy {
            include_cppcheck: self.gate_cppcheck,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Log file not found
    #[error("Build log not found: {0}")]
    LogNotFound(PathBuf),

    /// Log path names a directory
    #[error("Build log path is a directory: {0}")]
    LogIsDirectory(PathBuf),

    /// Width too small for the report tables
    #[error("Width {0} is too small, need at least {min} columns", min = MIN_WIDTH)]
    WidthTooSmall(usize),
}

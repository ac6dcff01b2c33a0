// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! logsift: summarize a NEST Travis CI build log
//!
//! Prints the build summary to stdout and exits with `0` if the build passed
//! every gate, `1` otherwise. Logs go to stderr.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use logsift::config::Config;
use logsift::summary::summarize_file;
use logsift_report::AsciiTable;
use tracing::{error, info};

fn run(config: &Config) -> anyhow::Result<u8> {
    config.validate().context("Invalid configuration")?;

    let renderer = AsciiTable::new(config.width);
    let summary = summarize_file(&config.log_file, &config.gate_policy(), &renderer)
        .with_context(|| format!("Failed to summarize {}", config.log_file.display()))?;

    println!("{}", summary.text);
    info!(exit_code = summary.exit_code, "build log summarized");
    Ok(summary.exit_code)
}

fn main() -> ExitCode {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&config) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Printable build summary

use std::collections::BTreeSet;
use std::fmt::Display;

use logsift_scan::analysis::{AnalysisTool, CLANG_FORMAT, CPPCHECK, PEP8, VERA};
use logsift_scan::{FileCounts, MessageTable};
use tracing::debug;

use crate::error::ReportError;
use crate::report::{BuildReport, GatePolicy, compute_exit_code};
use crate::status::{count_messages, status_string, table_status_string, yes_no_string};
use crate::table::{Row, TableRenderer};

const HEADER: &str = "
    + + + + + + + + + + + + + + + + + + + + + + + + + + + + + + + + + + + + + +
    +                                                                         +
    +        N E S T   T r a v i s   C I   B u i l d   S u m m a r y          +
    +                                                                         +
    + + + + + + + + + + + + + + + + + + + + + + + + + + + + + + + + + + + + + +
    \n\n";

/// Row index of the changed-files cell in the build report table
const CHANGED_FILES_ROW: usize = 1;

fn row(label: impl Into<String>, value: impl Into<String>) -> Row {
    [label.into(), value.into()]
}

/// A count that may be missing because its phase never ran
fn optional_count<T: Display>(count: Option<T>) -> String {
    count.map_or_else(|| "n/a".to_string(), |count| count.to_string())
}

/// A tool's name in the build report, marking it when it does not gate
fn gated_name(tool: &AnalysisTool, gated: bool) -> String {
    if gated {
        tool.name.to_string()
    } else {
        format!("{} (DEACTIVATED)", tool.name)
    }
}

// ============================================================================
// Static code analysis
// ============================================================================

/// Ensure the C++ tools that all ran report the same files
fn check_same_files(tools: &[(&AnalysisTool, Option<&MessageTable>)]) -> Result<(), ReportError> {
    if tools.iter().any(|(_, table)| table.is_none()) {
        return Ok(());
    }

    let mut ran = tools
        .iter()
        .filter_map(|(tool, table)| table.map(|table| (*tool, table)));
    let Some((first, reference)) = ran.next() else {
        return Ok(());
    };

    for (tool, table) in ran {
        let mut files: Vec<String> = reference
            .files()
            .filter(|file| !table.contains_file(file))
            .chain(table.files().filter(|file| !reference.contains_file(file)))
            .map(str::to_string)
            .collect();
        if !files.is_empty() {
            files.sort();
            return Err(ReportError::InconsistentAnalysisFiles {
                first: first.name,
                second: tool.name,
                files,
            });
        }
    }
    Ok(())
}

/// Table of one file's findings across `tools`, or `None` if it has none
fn file_table(
    file: &str,
    tools: &[(&AnalysisTool, Option<&MessageTable>)],
    renderer: &dyn TableRenderer,
) -> Option<String> {
    let mut rows = vec![row(format!("+ + + {file} + + +"), "")];

    for (tool, table) in tools {
        let Some(table) = table else { continue };
        if table.file_total(file) == 0 {
            continue;
        }
        rows.push(row(format!("{} ({}):", tool.name, tool.item), "Count"));
        rows.extend(
            table
                .messages(file)
                .map(|(message, count)| row(message, count.to_string())),
        );
    }

    (rows.len() > 1).then(|| renderer.render(&rows) + "\n")
}

/// Per-file tables of all static code analysis findings
///
/// VERA++, Cppcheck and clang-format findings are grouped per C++ file; PEP8
/// findings follow per Python file.
///
/// # Errors
///
/// Returns `ReportError::InconsistentAnalysisFiles` if all three C++ tools
/// ran but on different files.
fn analysis_tables(
    report: &BuildReport,
    renderer: &dyn TableRenderer,
) -> Result<String, ReportError> {
    let cpp_tools = [
        (&VERA, report.vera.as_ref()),
        (&CPPCHECK, report.cppcheck.as_ref()),
        (&CLANG_FORMAT, report.format.as_ref()),
    ];
    check_same_files(&cpp_tools)?;

    let cpp_files: BTreeSet<&str> = cpp_tools
        .iter()
        .filter_map(|(_, table)| *table)
        .flat_map(MessageTable::files)
        .collect();

    let mut out = String::new();
    for file in cpp_files {
        out.extend(file_table(file, &cpp_tools, renderer));
    }

    let python_tools = [(&PEP8, report.pep8.as_ref())];
    if let Some(pep8) = report.pep8.as_ref() {
        for file in pep8.files() {
            out.extend(file_table(file, &python_tools, renderer));
        }
    }
    Ok(out)
}

// ============================================================================
// Build messages
// ============================================================================

fn counts_table(
    heading: &str,
    counts: Option<&FileCounts>,
    renderer: &dyn TableRenderer,
) -> String {
    let mut rows = vec![row(heading, "Count")];
    rows.extend(
        counts
            .into_iter()
            .flatten()
            .map(|(file, count)| row(file.as_str(), count.to_string())),
    );
    renderer.render(&rows) + "\n"
}

// ============================================================================
// Build report table
// ============================================================================

fn analysis_status(tool: &AnalysisTool, table: Option<&MessageTable>) -> String {
    format!(
        "{}\n\nNumber of messages ({}): {}",
        table_status_string(table),
        tool.item,
        count_messages(table)
    )
}

fn summary_rows(report: &BuildReport, policy: &GatePolicy) -> Vec<Row> {
    let cppcheck = gated_name(&CPPCHECK, policy.include_cppcheck);
    let build = &report.build;
    let tests = &report.tests;

    vec![
        row("Changed Files :", ""),
        row("", ""),
        row("Tools Initialization :", ""),
        row(VERA.name, status_string(report.vera_init)),
        row(cppcheck.as_str(), status_string(report.cppcheck_init)),
        row(CLANG_FORMAT.name, status_string(report.format_init)),
        row("Static Code Analysis :", ""),
        row(VERA.name, analysis_status(&VERA, report.vera.as_ref())),
        row(cppcheck, analysis_status(&CPPCHECK, report.cppcheck.as_ref())),
        row(
            CLANG_FORMAT.name,
            analysis_status(&CLANG_FORMAT, report.format.as_ref()),
        ),
        row(PEP8.name, analysis_status(&PEP8, report.pep8.as_ref())),
        row("NEST Build :", ""),
        row("CMake configure", status_string(report.cmake_configure)),
        row(
            "Make",
            format!(
                "{}\n\nErrors  : {}\nWarnings: {}",
                status_string(build.status),
                optional_count(build.error_count),
                optional_count(build.warning_count)
            ),
        ),
        row("Make install", status_string(report.make_install)),
        row(
            "Make installcheck",
            format!(
                "{}\n\nTotal number of tests : {}\nNumber of tests failed: {}",
                status_string(tests.status),
                optional_count(tests.total),
                optional_count(tests.failed)
            ),
        ),
        row("Artifacts :", ""),
        row("Amazon S3 upload", yes_no_string(report.s3_upload)),
    ]
}

/// Render the complete build summary
///
/// The summary lists static analysis findings, compiler warnings and errors
/// (each only if there are any), then the build report table and the final
/// verdict.
///
/// # Errors
///
/// Returns `ReportError::InconsistentAnalysisFiles` if VERA++, Cppcheck and
/// clang-format all ran but on different files.
pub fn render_report(
    report: &BuildReport,
    policy: &GatePolicy,
    renderer: &dyn TableRenderer,
) -> Result<String, ReportError> {
    let mut out = String::from(HEADER);

    if report.has_analysis_messages() {
        out.push_str("  S T A T I C   C O D E   A N A L Y S I S\n");
        out.push_str(&analysis_tables(report, renderer)?);
    }

    if report.build.warnings_or_zero() > 0 {
        out.push_str("\n  W A R N I N G S\n");
        out.push_str(&counts_table(
            "Warnings in file:",
            report.build.warnings.as_ref(),
            renderer,
        ));
    }

    if report.build.errors_or_zero() > 0 {
        out.push_str("\n  E R R O R S\n");
        out.push_str(&counts_table(
            "Errors in file:",
            report.build.errors.as_ref(),
            renderer,
        ));
    }

    let mut rows = summary_rows(report, policy);
    let width = renderer.column_max_width(&rows, 1);
    let files = report.changed_files.join(", ");
    rows[CHANGED_FILES_ROW][1] = textwrap::wrap(&files, width).join("\n");
    out.push_str("\n\n  B U I L D   R E P O R T\n");
    out.push_str(&renderer.render(&rows));
    out.push('\n');

    let exit_code = compute_exit_code(report, policy);
    out.push_str(if exit_code == 0 {
        "\nBUILD TERMINATED SUCCESSFULLY"
    } else {
        "\nBUILD FAILED"
    });

    debug!(exit_code, bytes = out.len(), "rendered build report");
    Ok(out)
}

// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

use criterion::{Criterion, criterion_group, criterion_main};
use logsift_scan::{AnalysisTool, BuildLog, build_messages, extract_messages, find_pair, markers};

/// Build a log with `files` analyzed files and a noisy make section
fn synthetic_log(files: usize) -> BuildLog {
    let mut text = String::new();
    text.push_str("MSGBLD0010: VERA++ init\nMSGBLD0020: VERA++ init done\n");
    for i in 0..files {
        let file = format!("models/model_{i}.cpp");
        text.push_str(&format!("MSGBLD0130: Running VERA++ for {file}\n"));
        for line in 0..5 {
            text.push_str(&format!(
                "MSGBLD0135: [VERA++] {file}:{line}: trailing whitespace\n"
            ));
        }
        text.push_str(&format!("MSGBLD0140: VERA++ for {file} completed.\n"));
    }
    text.push_str("MSGBLD0250: Running make.\n");
    for i in 0..files * 20 {
        text.push_str(&format!("[{:3}%] Building CXX object model_{i}.cpp.o\n", i % 100));
    }
    text.push_str("models/model_0.cpp:1:1: warning: unused variable 'x'\n");
    text.push_str("MSGBLD0260: Make completed.\n");
    BuildLog::from_text(text)
}

fn scan_benchmark(c: &mut Criterion) {
    let log = synthetic_log(500);

    let mut group = c.benchmark_group("scan");

    group.bench_function("find_pair", |b| {
        b.iter(|| find_pair(log.lines(), markers::MAKE_START, markers::MAKE_END))
    });

    group.bench_function("extract_messages_all_tools", |b| {
        b.iter(|| {
            AnalysisTool::all()
                .iter()
                .map(|tool| extract_messages(log.lines(), tool))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("build_messages", |b| {
        b.iter(|| build_messages(log.lines(), markers::MAKE_START, markers::MAKE_END))
    });

    group.finish();
}

criterion_group!(benches, scan_benchmark);
criterion_main!(benches);

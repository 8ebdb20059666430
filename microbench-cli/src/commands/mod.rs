// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! CLI command modules.

pub mod compare;
pub mod list;
pub mod run;
pub mod suite;
pub mod validate;

use microbench_core::{BenchmarkResult, LineWriter};

/// Writer that prints `name:line` to stdout.
pub fn console_writer(name: &str) -> LineWriter {
    let name = name.to_string();
    LineWriter::new(move |line| println!("{}:{}", name, line))
}

/// Print a single report through the result's writer, styled unless `plain`
/// is set.
pub fn report(result: &BenchmarkResult, plain: bool) {
    if !plain {
        result.pretty_print();
        return;
    }

    let text = result.plain_text();
    match &result.options().write_line {
        Some(writer) => writer.write_line(&text),
        None => println!("{}", text),
    }
}

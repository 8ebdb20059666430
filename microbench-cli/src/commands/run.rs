// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `mbench run` command - Benchmark one or more workloads.

use microbench_core::bencher::BENCHER_NAME;
use microbench_core::{Bencher, BenchmarkOptions};

use super::{console_writer, report};
use crate::workloads::Workload;

pub async fn execute(
    names: &[String],
    iterations: u64,
    warmup: u64,
    plain: bool,
    debug_line: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Resolve everything up front so a typo fails before any timing starts
    let workloads = names
        .iter()
        .map(|name| Workload::resolve(name, name))
        .collect::<Result<Vec<_>, _>>()?;

    let mut bencher = Bencher::new(
        BenchmarkOptions::new()
            .iterations(iterations)
            .warmup(warmup)
            .write_line(console_writer(BENCHER_NAME)),
    );

    for workload in workloads {
        tracing::info!(
            workload = workload.name(),
            kind = %workload.kind(),
            iterations = iterations,
            warmup = warmup,
            "Running workload"
        );

        let result = match bencher.run(workload.name(), workload.candidate()).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(workload = workload.name(), error = %e, "Benchmark aborted");
                return Err(e.into());
            }
        };

        report(result, plain);
        if debug_line {
            println!("{}", result.debug_text());
        }
    }

    Ok(())
}

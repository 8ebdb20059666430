// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `mbench compare` command - Run two workloads and print them side by side.

use microbench_core::{compare, compare_plain, Bencher, BenchmarkOptions};

use crate::workloads::Workload;

pub async fn execute(
    left: &str,
    right: &str,
    iterations: u64,
    warmup: u64,
    plain: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let left_workload = Workload::resolve(left, left)?;
    let right_workload = Workload::resolve(right, right)?;

    let mut bencher = Bencher::new(BenchmarkOptions::new().iterations(iterations).warmup(warmup));
    bencher.run(left, left_workload.candidate()).await?;
    bencher.run(right, right_workload.candidate()).await?;

    let runs = bencher.runs();
    let text = if plain {
        compare_plain(runs.first(), runs.get(1))
    } else {
        compare(runs.first(), runs.get(1))
    };
    println!("{}", text);

    Ok(())
}

// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `mbench validate` command - Validate a suite file.

use microbench_core::config::{DEFAULT_ITERATIONS, DEFAULT_WARMUP_ITERATIONS};
use microbench_core::ConfigLoader;

use super::suite::resolve_workloads;

pub async fn execute(file: &str) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(file = %file, "Validating suite");

    let checked = ConfigLoader::load_file(file).and_then(|suite| {
        let workloads = resolve_workloads(&suite)?;
        Ok((suite, workloads))
    });

    match checked {
        Ok((suite, workloads)) => {
            println!("✓ Suite is valid");
            println!();
            println!("Defaults:");
            println!(
                "  Iterations:         {}",
                suite.defaults.iterations.unwrap_or(DEFAULT_ITERATIONS)
            );
            println!(
                "  Warmup Iterations:  {}",
                suite
                    .defaults
                    .warmup_iterations
                    .unwrap_or(DEFAULT_WARMUP_ITERATIONS)
            );
            println!();
            println!("Benchmarks ({}):", suite.benchmarks.len());
            for (entry, workload) in suite.benchmarks.iter().zip(&workloads) {
                let config = entry.options.merged();
                println!(
                    "  - {} (workload: {}, {}, iterations: {}, warmup: {})",
                    entry.name,
                    workload.name(),
                    workload.kind(),
                    config.iterations,
                    config.warmup_iterations
                );
            }
            if !suite.comparisons.is_empty() {
                println!();
                println!("Comparisons ({}):", suite.comparisons.len());
                for (left, right) in &suite.comparisons {
                    println!("  - {} vs {}", left, right);
                }
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("✗ Suite validation failed:");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }
}

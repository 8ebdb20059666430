// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `mbench suite` command - Run every benchmark of a suite file.
//!
//! Benchmarks run in declaration order, then each `compare` pair is printed.

use microbench_core::{
    benchmark, compare, compare_plain, BenchmarkResult, ConfigLoader, MicrobenchResult,
    SuiteConfig,
};

use super::{console_writer, report};
use crate::workloads::Workload;

/// Map every suite entry to its workload, in declaration order.
pub fn resolve_workloads(suite: &SuiteConfig) -> MicrobenchResult<Vec<Workload>> {
    suite
        .benchmarks
        .iter()
        .map(|entry| Workload::resolve(&entry.name, &entry.workload))
        .collect()
}

fn find<'a>(results: &'a [BenchmarkResult], name: &str) -> Option<&'a BenchmarkResult> {
    results.iter().find(|r| r.name() == Some(name))
}

pub async fn execute(file: &str, plain: bool) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(file = %file, "Loading suite");

    let suite = ConfigLoader::load_file(file)?;
    let workloads = resolve_workloads(&suite)?;

    let mut results = Vec::with_capacity(suite.benchmarks.len());
    for (entry, workload) in suite.benchmarks.iter().zip(workloads) {
        let options = entry.options.clone().write_line(console_writer(&entry.name));
        let result = benchmark(&options, workload.candidate()).await?;
        report(&result, plain);
        results.push(result);
    }

    for (left, right) in &suite.comparisons {
        let (a, b) = (find(&results, left), find(&results, right));
        let text = if plain {
            compare_plain(a, b)
        } else {
            compare(a, b)
        };
        println!();
        println!("{}", text);
    }

    println!();
    println!(
        "Ran {} benchmark(s), {} comparison(s)",
        results.len(),
        suite.comparisons.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use microbench_core::{HardValidationError, MicrobenchError};
    use tempfile::TempDir;

    #[test]
    fn test_resolve_workloads_defaults_to_name() {
        let suite = ConfigLoader::load_string(
            r#"
benchmarks:
  - name: noop
  - name: hashing
    workload: cyrb53
"#,
        )
        .unwrap();

        let workloads = resolve_workloads(&suite).unwrap();
        assert_eq!(workloads, vec![Workload::Noop, Workload::Cyrb53]);
    }

    #[test]
    fn test_resolve_workloads_unknown() {
        let suite = ConfigLoader::load_string(
            r#"
benchmarks:
  - name: mystery
"#,
        )
        .unwrap();

        let err = resolve_workloads(&suite).unwrap_err();
        match err {
            MicrobenchError::HardValidation(HardValidationError::UnknownWorkload {
                name,
                workload,
            }) => {
                assert_eq!(name, "mystery");
                assert_eq!(workload, "mystery");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[tokio::test]
    async fn test_execute_runs_suite_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("suite.yaml");
        std::fs::write(
            &path,
            r#"
defaults:
  iterations: 20
  warmup_iterations: 2
benchmarks:
  - name: jvm
    workload: jvm_hash
  - name: cyrb
    workload: cyrb53
compare:
  - [jvm, cyrb]
"#,
        )
        .expect("Failed to write suite file");

        execute(path.to_str().unwrap(), true).await.unwrap();
    }

    #[tokio::test]
    async fn test_execute_propagates_abort() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("suite.yaml");
        std::fs::write(
            &path,
            r#"
benchmarks:
  - name: flaky
    iterations: 500
"#,
        )
        .expect("Failed to write suite file");

        assert!(execute(path.to_str().unwrap(), true).await.is_err());
    }
}

// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Benchmark orchestration.
//!
//! A run merges the supplied options over the defaults, runs the warmup pass
//! (timings discarded) and the timed pass with the runner matching the
//! candidate, and builds a [`BenchmarkResult`] from the options as supplied.
//! Configuration and count problems are logged and never stop a run; only a
//! failing candidate does.

use crate::candidate::{Candidate, CandidateKind};
use crate::config::{BenchmarkConfig, BenchmarkOptions};
use crate::error::MicrobenchResult;
use crate::result::BenchmarkResult;
use crate::runner::{run_async, run_sync};
use crate::types::DurationSequence;

/// Benchmark `candidate`, awaiting asynchronous candidates.
///
/// Synchronous candidates go through the synchronous runner, so this is the
/// single entry point for both kinds.
pub async fn benchmark(
    options: &BenchmarkOptions,
    mut candidate: Candidate<'_>,
) -> MicrobenchResult<BenchmarkResult> {
    let config = prepare(options, &candidate);

    let durations = match candidate.kind() {
        CandidateKind::Sync => {
            if config.warmup_iterations > 0 {
                run_sync(config.warmup_iterations, &mut candidate)?;
            }
            run_sync(config.iterations, &mut candidate)?
        }
        CandidateKind::Async => {
            if config.warmup_iterations > 0 {
                run_async(config.warmup_iterations, &mut candidate).await?;
            }
            run_async(config.iterations, &mut candidate).await?
        }
    };

    Ok(finish(options, &config, durations))
}

/// Benchmark `candidate` on the calling thread without an executor.
///
/// Asynchronous candidates are refused by the synchronous runner and yield
/// an empty result.
pub fn benchmark_sync(
    options: &BenchmarkOptions,
    mut candidate: Candidate<'_>,
) -> MicrobenchResult<BenchmarkResult> {
    let config = prepare(options, &candidate);

    if config.warmup_iterations > 0 {
        run_sync(config.warmup_iterations, &mut candidate)?;
    }
    let durations = run_sync(config.iterations, &mut candidate)?;

    Ok(finish(options, &config, durations))
}

fn prepare(options: &BenchmarkOptions, candidate: &Candidate<'_>) -> BenchmarkConfig {
    let missing = options.missing_keys();
    if !missing.is_empty() {
        tracing::warn!(
            missing = ?missing,
            options = ?options,
            "Benchmark options incomplete, using defaults for missing keys"
        );
    }

    let config = options.merged();
    tracing::debug!(
        name = %config.name,
        iterations = config.iterations,
        warmup = config.warmup_iterations,
        kind = %candidate.kind(),
        takes_index = candidate.takes_index(),
        "Starting benchmark"
    );
    config
}

fn finish(
    options: &BenchmarkOptions,
    config: &BenchmarkConfig,
    durations: DurationSequence,
) -> BenchmarkResult {
    let actual = durations.len() as u64;

    if actual != config.iterations {
        tracing::warn!(
            name = %config.name,
            expected = config.iterations,
            actual = actual,
            "Result count does not match requested number of iterations"
        );
    }

    if actual == 0 && config.iterations > 0 {
        tracing::error!(
            name = %config.name,
            expected = config.iterations,
            "No results were returned but iterations were expected, something might be wrong"
        );
    }

    let result = BenchmarkResult::new(options.clone(), durations);
    tracing::debug!(name = %config.name, result = %result.debug_text(), "Finished benchmark");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MicrobenchError;
    use std::cell::Cell;

    #[test]
    fn test_benchmark_sync_counts_warmup_and_timed_calls() {
        let calls = Cell::new(0u64);
        let options = BenchmarkOptions::new().name("count").iterations(50).warmup(5);

        let result = benchmark_sync(&options, Candidate::sync(|| calls.set(calls.get() + 1))).unwrap();

        assert_eq!(calls.get(), 55);
        assert_eq!(result.durations().len(), 50);
        assert_eq!(result.failures(), 0);
        assert!(result.fastest() <= result.average());
        assert!(result.average() <= result.slowest());
    }

    #[test]
    fn test_benchmark_sync_applies_default_iterations() {
        let calls = Cell::new(0u64);
        let options = BenchmarkOptions::new().name("defaults");

        let result = benchmark_sync(&options, Candidate::sync(|| calls.set(calls.get() + 1))).unwrap();

        assert_eq!(calls.get(), crate::config::DEFAULT_ITERATIONS);
        assert_eq!(result.durations().len() as u64, crate::config::DEFAULT_ITERATIONS);
        // The result keeps the options as supplied
        assert_eq!(result.options().iterations, None);
        assert_eq!(result.failures(), 0);
    }

    #[test]
    fn test_benchmark_sync_zero_iterations() {
        let options = BenchmarkOptions::new().name("zero").iterations(0).warmup(0);

        let result = benchmark_sync(&options, Candidate::sync(|| {})).unwrap();

        assert!(result.is_empty());
        assert!(result.failure_percent().is_nan());
    }

    #[test]
    fn test_benchmark_sync_with_async_candidate_is_empty() {
        let options = BenchmarkOptions::new().name("mismatch").iterations(3).warmup(0);

        let result = benchmark_sync(&options, Candidate::future(|| async {})).unwrap();

        assert!(result.is_empty());
    }

    #[test]
    fn test_warmup_failure_aborts() {
        let options = BenchmarkOptions::new().name("warmup-fails").iterations(3).warmup(2);

        let err = benchmark_sync(
            &options,
            Candidate::sync_indexed(|i| if i == 1 { Err("nope") } else { Ok(()) }),
        )
        .unwrap_err();

        match err {
            MicrobenchError::Candidate(e) => assert_eq!(e.iteration, 1),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[tokio::test]
    async fn test_benchmark_async_candidate() {
        let options = BenchmarkOptions::new().name("sleepy").iterations(5).warmup(1);

        let result = benchmark(
            &options,
            Candidate::future(|| tokio::time::sleep(std::time::Duration::from_micros(100))),
        )
        .await
        .unwrap();

        assert_eq!(result.durations().len(), 5);
        assert!(result.fastest() >= 100.0);
        assert_eq!(result.failures(), 0);
    }

    #[tokio::test]
    async fn test_benchmark_dispatches_sync_candidate() {
        let seen = Cell::new(0u64);
        let options = BenchmarkOptions::new().name("indexed").iterations(4).warmup(0);

        let result = benchmark(&options, Candidate::sync_indexed(|i| seen.set(seen.get() + i)))
            .await
            .unwrap();

        assert_eq!(result.durations().len(), 4);
        assert_eq!(seen.get(), 1 + 2 + 3);
    }
}

// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Repeated runs with one fixed configuration.
//!
//! `Bencher::run` takes `&mut self`, so runs are recorded in call order and
//! never concurrently. Sharing a `Bencher` across threads is left to the
//! caller.

use crate::bench::{benchmark, benchmark_sync};
use crate::candidate::Candidate;
use crate::config::BenchmarkOptions;
use crate::error::MicrobenchResult;
use crate::result::BenchmarkResult;

/// Name used for the base options until a run overrides it.
pub const BENCHER_NAME: &str = "Bencher";

/// Runs benchmarks with shared options and keeps every result.
#[derive(Debug)]
pub struct Bencher {
    options: BenchmarkOptions,
    runs: Vec<BenchmarkResult>,
}

impl Bencher {
    /// Create a bencher; `options` is used for every run.
    pub fn new(options: BenchmarkOptions) -> Self {
        Self {
            options: options.name(BENCHER_NAME),
            runs: Vec::new(),
        }
    }

    /// Benchmark `candidate` under `name` and record the result.
    pub async fn run(
        &mut self,
        name: impl Into<String>,
        candidate: Candidate<'_>,
    ) -> MicrobenchResult<&BenchmarkResult> {
        let options = self.options.clone().name(name);
        let result = benchmark(&options, candidate).await?;
        Ok(self.record(result))
    }

    /// Benchmark a synchronous `candidate` under `name` and record the result.
    pub fn run_sync(
        &mut self,
        name: impl Into<String>,
        candidate: Candidate<'_>,
    ) -> MicrobenchResult<&BenchmarkResult> {
        let options = self.options.clone().name(name);
        let result = benchmark_sync(&options, candidate)?;
        Ok(self.record(result))
    }

    fn record(&mut self, result: BenchmarkResult) -> &BenchmarkResult {
        let index = self.runs.len();
        self.runs.push(result);
        &self.runs[index]
    }

    /// Options shared by every run.
    pub fn options(&self) -> &BenchmarkOptions {
        &self.options
    }

    /// Results in the order the runs were made.
    pub fn runs(&self) -> &[BenchmarkResult] {
        &self.runs
    }

    /// Most recent result with the given name.
    pub fn find(&self, name: &str) -> Option<&BenchmarkResult> {
        self.runs.iter().rev().find(|r| r.name() == Some(name))
    }

    pub fn into_runs(self) -> Vec<BenchmarkResult> {
        self.runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_recorded_in_order() {
        let mut bencher = Bencher::new(BenchmarkOptions::new().iterations(10).warmup(2));

        bencher.run_sync("first", Candidate::sync(|| {})).unwrap();
        let second = bencher
            .run_sync("second", Candidate::sync_indexed(|_| {}))
            .unwrap();
        assert_eq!(second.name(), Some("second"));
        bencher.run_sync("first", Candidate::sync(|| {})).unwrap();

        let names: Vec<_> = bencher.runs().iter().map(|r| r.name()).collect();
        assert_eq!(names, vec![Some("first"), Some("second"), Some("first")]);
        assert!(bencher.runs().iter().all(|r| r.durations().len() == 10));
    }

    #[test]
    fn test_base_options_are_named_bencher() {
        let bencher = Bencher::new(BenchmarkOptions::new().name("ignored").iterations(1));
        assert_eq!(bencher.options().name.as_deref(), Some(BENCHER_NAME));
        assert_eq!(bencher.options().iterations, Some(1));
    }

    #[test]
    fn test_failed_run_is_not_recorded() {
        let mut bencher = Bencher::new(BenchmarkOptions::new().iterations(3).warmup(0));

        let result = bencher.run_sync("broken", Candidate::sync(|| Err::<(), _>("always")));

        assert!(result.is_err());
        assert!(bencher.runs().is_empty());
    }

    #[tokio::test]
    async fn test_async_runs() {
        let mut bencher = Bencher::new(BenchmarkOptions::new().iterations(3).warmup(1));

        bencher
            .run("yield", Candidate::future(tokio::task::yield_now))
            .await
            .unwrap();
        bencher
            .run("noop", Candidate::sync(|| {}))
            .await
            .unwrap();

        assert_eq!(bencher.runs().len(), 2);
        assert_eq!(bencher.find("yield").unwrap().durations().len(), 3);
        assert!(bencher.find("missing").is_none());
        assert_eq!(bencher.into_runs().len(), 2);
    }
}

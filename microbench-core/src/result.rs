// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Summary statistics for one benchmark run.
//!
//! A `BenchmarkResult` is computed once from the options a run was started
//! with and the durations it produced, and never changes afterwards. Every
//! rendering is therefore a pure function of the result.

use serde::Serialize;

use crate::config::BenchmarkOptions;
use crate::severity::Severity;
use crate::types::DurationSequence;

const MICROS_PER_SEC: f64 = 1_000_000.0;

/// Statistics over one duration sequence.
///
/// When [`is_empty`](Self::is_empty) is true the average, fastest and slowest
/// values are NaN and no other derived value is meaningful.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkResult {
    options: BenchmarkOptions,
    durations: DurationSequence,
    average: f64,
    slowest: f64,
    fastest: f64,
    failures: i64,
    total_runtime_secs: f64,
    is_empty: bool,
}

impl BenchmarkResult {
    /// Compute the statistics for `durations` (microseconds).
    ///
    /// When the requested iteration count is known and differs from the
    /// number of durations, the difference is counted as failures. More
    /// durations than requested yields a negative failure count.
    pub fn new(options: BenchmarkOptions, durations: impl Into<DurationSequence>) -> Self {
        let durations = durations.into();

        if durations.is_empty() {
            tracing::warn!(
                name = options.name.as_deref().unwrap_or_default(),
                "No durations were passed to BenchmarkResult"
            );
            return Self {
                options,
                durations,
                average: f64::NAN,
                slowest: f64::NAN,
                fastest: f64::NAN,
                failures: 0,
                total_runtime_secs: 0.0,
                is_empty: true,
            };
        }

        let count = durations.len() as i128;
        let failures = match options.iterations {
            Some(iterations) if iterations as i128 != count => {
                (iterations as i128 - count).clamp(i64::MIN as i128, i64::MAX as i128) as i64
            }
            _ => 0,
        };

        let total = durations.total_micros() as f64;
        let (fastest, slowest) = durations
            .iter()
            .fold((u64::MAX, u64::MIN), |(min, max), &d| (min.min(d), max.max(d)));

        Self {
            average: total / durations.len() as f64,
            slowest: slowest as f64,
            fastest: fastest as f64,
            failures,
            total_runtime_secs: total / MICROS_PER_SEC,
            is_empty: false,
            options,
            durations,
        }
    }

    /// Options the run was started with, before defaults were applied.
    pub fn options(&self) -> &BenchmarkOptions {
        &self.options
    }

    pub fn name(&self) -> Option<&str> {
        self.options.name.as_deref()
    }

    /// Per-call timings in microseconds.
    pub fn durations(&self) -> &DurationSequence {
        &self.durations
    }

    /// Mean call time in microseconds.
    pub fn average(&self) -> f64 {
        self.average
    }

    /// Longest call time in microseconds.
    pub fn slowest(&self) -> f64 {
        self.slowest
    }

    /// Shortest call time in microseconds.
    pub fn fastest(&self) -> f64 {
        self.fastest
    }

    /// Requested iterations minus produced durations.
    pub fn failures(&self) -> i64 {
        self.failures
    }

    /// Sum of all timings in seconds.
    pub fn total_runtime_secs(&self) -> f64 {
        self.total_runtime_secs
    }

    pub fn is_empty(&self) -> bool {
        self.is_empty
    }

    pub fn has_failures(&self) -> bool {
        self.failures > 0
    }

    /// Failures as a whole percentage of the requested iterations.
    ///
    /// NaN when the requested iteration count is zero or unknown.
    pub fn failure_percent(&self) -> f64 {
        match self.options.iterations {
            Some(0) | None => f64::NAN,
            Some(iterations) => round_half_up(self.failures as f64 / iterations as f64 * 100.0),
        }
    }

    /// Severity bucket of [`failure_percent`](Self::failure_percent).
    pub fn severity(&self) -> Severity {
        Severity::from_percent(self.failure_percent())
    }

    /// Single-line summary meant for diagnostic logs.
    pub fn debug_text(&self) -> String {
        let opts = serde_json::to_string(&self.options).unwrap_or_else(|_| "{}".to_string());
        format!(
            "<BenchmarkResult|Opts: {}|{} Results|Runtime: {}|Avg: {}|Fastest: {}|Slowest: {}|Failures: {}>",
            opts,
            self.durations.len(),
            self.total_runtime_secs,
            self.average,
            self.fastest,
            self.slowest,
            self.failures
        )
    }
}

/// Round half toward positive infinity.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

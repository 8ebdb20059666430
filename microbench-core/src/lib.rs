// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Microbench Core Library
//!
//! Runs a candidate function (synchronous or asynchronous) a configured
//! number of times, times every call at microsecond resolution, summarizes
//! the timings and renders single-result and side-by-side comparison
//! reports.

pub mod align;
pub mod bench;
pub mod bencher;
pub mod candidate;
pub mod compare;
pub mod config;
pub mod error;
pub mod render;
pub mod result;
pub mod runner;
pub mod severity;
pub mod timer;
pub mod types;

// Re-export commonly used types
pub use bench::{benchmark, benchmark_sync};
pub use bencher::Bencher;
pub use candidate::{Candidate, CandidateKind};
pub use compare::{compare, compare_plain, compare_with};
pub use config::{BenchmarkConfig, BenchmarkOptions, ConfigLoader, SuiteConfig, SuiteEntry};
pub use error::{CandidateError, HardValidationError, MicrobenchError, MicrobenchResult};
pub use render::{AnsiPalette, Palette, PlainPalette, Tone};
pub use result::BenchmarkResult;
pub use severity::Severity;
pub use timer::Timestamp;
pub use types::{DurationSequence, LineWriter};

// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Built-in workloads.
//!
//! Each workload turns into a [`Candidate`]. The hashing workloads hash the
//! iteration index rendered as decimal text.

use std::time::Duration;

use microbench_core::{Candidate, CandidateKind, HardValidationError, MicrobenchResult};

/// Sleep length of the `async_sleep` workload.
pub const SLEEP_MICROS: u64 = 50;

/// Iteration at which the `flaky` workload fails.
pub const FLAKY_FAILURE_INDEX: u64 = 100;

/// Error raised by the `flaky` workload.
#[derive(Debug, thiserror::Error)]
#[error("flaky workload failed at iteration {0}")]
pub struct FlakyFailure(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workload {
    JvmHash,
    Cyrb53,
    Noop,
    AsyncYield,
    AsyncSleep,
    Flaky,
}

impl Workload {
    pub const ALL: [Workload; 6] = [
        Workload::JvmHash,
        Workload::Cyrb53,
        Workload::Noop,
        Workload::AsyncYield,
        Workload::AsyncSleep,
        Workload::Flaky,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Workload::JvmHash => "jvm_hash",
            Workload::Cyrb53 => "cyrb53",
            Workload::Noop => "noop",
            Workload::AsyncYield => "async_yield",
            Workload::AsyncSleep => "async_sleep",
            Workload::Flaky => "flaky",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Workload::JvmHash => "31-multiplier string hash of the index",
            Workload::Cyrb53 => "53-bit cyrb hash of the index",
            Workload::Noop => "empty function",
            Workload::AsyncYield => "yields once to the runtime",
            Workload::AsyncSleep => "sleeps for 50µs",
            Workload::Flaky => "fails at iteration 100",
        }
    }

    pub fn kind(&self) -> CandidateKind {
        match self {
            Workload::AsyncYield | Workload::AsyncSleep => CandidateKind::Async,
            _ => CandidateKind::Sync,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.name() == name)
    }

    /// Look up the workload for `benchmark`, failing on unknown names.
    pub fn resolve(benchmark: &str, workload: &str) -> MicrobenchResult<Self> {
        Self::from_name(workload).ok_or_else(|| {
            HardValidationError::UnknownWorkload {
                name: benchmark.to_string(),
                workload: workload.to_string(),
            }
            .into()
        })
    }

    pub fn candidate(self) -> Candidate<'static> {
        match self {
            Workload::JvmHash => Candidate::sync_indexed(|i| {
                std::hint::black_box(jvm_hash(&i.to_string()));
            }),
            Workload::Cyrb53 => Candidate::sync_indexed(|i| {
                std::hint::black_box(cyrb53(&i.to_string(), 0));
            }),
            Workload::Noop => Candidate::sync(|| {}),
            Workload::AsyncYield => Candidate::future(tokio::task::yield_now),
            Workload::AsyncSleep => {
                Candidate::future(|| tokio::time::sleep(Duration::from_micros(SLEEP_MICROS)))
            }
            Workload::Flaky => Candidate::sync_indexed(|i| {
                if i == FLAKY_FAILURE_INDEX {
                    Err(FlakyFailure(i))
                } else {
                    Ok(())
                }
            }),
        }
    }
}

/// Java `String::hashCode` over the UTF-16 code units of `text`.
pub fn jvm_hash(text: &str) -> i32 {
    text.encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(unit as i32))
}

/// cyrb53 hash of the UTF-16 code units of `text`. Fits in 53 bits.
pub fn cyrb53(text: &str, seed: u32) -> u64 {
    let mut h1: u32 = 0xdead_beef ^ seed;
    let mut h2: u32 = 0x41c6_ce57 ^ seed;

    for unit in text.encode_utf16() {
        let ch = unit as u32;
        h1 = (h1 ^ ch).wrapping_mul(2_654_435_761);
        h2 = (h2 ^ ch).wrapping_mul(1_597_334_677);
    }

    h1 = (h1 ^ (h1 >> 16)).wrapping_mul(2_246_822_507)
        ^ (h2 ^ (h2 >> 13)).wrapping_mul(3_266_489_909);
    h2 = (h2 ^ (h2 >> 16)).wrapping_mul(2_246_822_507)
        ^ (h1 ^ (h1 >> 13)).wrapping_mul(3_266_489_909);

    4_294_967_296 * u64::from(h2 & 0x1f_ffff) + u64::from(h1)
}

// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Iteration runners.
//!
//! Both runners invoke the candidate `count` times strictly in order and time
//! every call individually. Neither ever has two candidate calls outstanding:
//! the async runner awaits each call to completion before the next timing
//! window opens.
//!
//! A failing call aborts the run; the timings collected so far are dropped.

use crate::candidate::{AsyncCandidate, Candidate, CandidateFuture, CandidateOutcome, SyncCandidate};
use crate::error::CandidateError;
use crate::timer::Timestamp;
use crate::types::DurationSequence;

/// Upper bound on the number of timings reserved up front.
const PREALLOCATE_LIMIT: u64 = 1 << 20;

/// Run a synchronous candidate `count` times on the calling thread.
///
/// An asynchronous candidate is refused: calling it here would only time
/// the construction of its future, not its completion. The refusal is a
/// warning only: an empty sequence is returned, which the result later
/// reports as an empty run.
pub fn run_sync(
    count: u64,
    candidate: &mut Candidate<'_>,
) -> Result<DurationSequence, CandidateError> {
    match candidate {
        Candidate::Sync(sync) => run_sync_candidate(count, sync),
        Candidate::Async(_) => {
            tracing::warn!(
                count = count,
                "Synchronous runner refused an async candidate; no iterations were timed"
            );
            Ok(DurationSequence::default())
        }
    }
}

/// Run a candidate `count` times, awaiting each call before timing the next.
///
/// A synchronous candidate is still run, but the mismatch is logged since
/// it usually means the caller picked the wrong constructor.
pub async fn run_async(
    count: u64,
    candidate: &mut Candidate<'_>,
) -> Result<DurationSequence, CandidateError> {
    match candidate {
        Candidate::Async(AsyncCandidate::NoArg(f)) => time_each_async(count, |_| f()).await,
        Candidate::Async(AsyncCandidate::Indexed(f)) => time_each_async(count, |i| f(i)).await,
        Candidate::Sync(sync) => {
            tracing::warn!(
                count = count,
                "Asynchronous runner was given a sync candidate; running it without awaiting"
            );
            run_sync_candidate(count, sync)
        }
    }
}

fn run_sync_candidate(
    count: u64,
    candidate: &mut SyncCandidate<'_>,
) -> Result<DurationSequence, CandidateError> {
    match candidate {
        SyncCandidate::NoArg(f) => time_each(count, |_| f()),
        SyncCandidate::Indexed(f) => time_each(count, |i| f(i)),
    }
}

fn time_each(
    count: u64,
    mut call: impl FnMut(u64) -> CandidateOutcome,
) -> Result<DurationSequence, CandidateError> {
    let mut durations = DurationSequence::with_capacity(count.min(PREALLOCATE_LIMIT) as usize);

    for i in 0..count {
        let start = Timestamp::now();
        let outcome = call(i);
        let end = Timestamp::now();

        outcome.map_err(|source| CandidateError::new(i, source))?;
        durations.push(start.micros_until(end));
    }

    Ok(durations)
}

async fn time_each_async<'a>(
    count: u64,
    mut call: impl FnMut(u64) -> CandidateFuture<'a>,
) -> Result<DurationSequence, CandidateError> {
    let mut durations = DurationSequence::with_capacity(count.min(PREALLOCATE_LIMIT) as usize);

    for i in 0..count {
        let start = Timestamp::now();
        let outcome = call(i).await;
        let end = Timestamp::now();

        outcome.map_err(|source| CandidateError::new(i, source))?;
        durations.push(start.micros_until(end));
    }

    Ok(durations)
}

// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! The function under measurement.
//!
//! A candidate is either synchronous or asynchronous, and either ignores the
//! iteration index or takes it as its only argument. Both decisions are made
//! by the caller when the candidate is built, so the runners only ever match
//! on the variant once before their loop starts.
//!
//! Candidates may return `()` or any `Result<T, E>`; an `Err` aborts the run.

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use crate::error::BoxError;

/// What a single candidate call reports back to the runner.
pub type CandidateOutcome = Result<(), BoxError>;

/// Boxed future produced by one asynchronous candidate call.
pub type CandidateFuture<'a> = Pin<Box<dyn Future<Output = CandidateOutcome> + 'a>>;

type SyncNoArg<'a> = Box<dyn FnMut() -> CandidateOutcome + 'a>;
type SyncIndexed<'a> = Box<dyn FnMut(u64) -> CandidateOutcome + 'a>;
type AsyncNoArg<'a> = Box<dyn FnMut() -> CandidateFuture<'a> + 'a>;
type AsyncIndexed<'a> = Box<dyn FnMut(u64) -> CandidateFuture<'a> + 'a>;

/// Conversion of a candidate's return value into a [`CandidateOutcome`].
pub trait IntoOutcome {
    fn into_outcome(self) -> CandidateOutcome;
}

impl IntoOutcome for () {
    fn into_outcome(self) -> CandidateOutcome {
        Ok(())
    }
}

impl<T, E> IntoOutcome for Result<T, E>
where
    E: Into<BoxError>,
{
    fn into_outcome(self) -> CandidateOutcome {
        self.map(drop).map_err(Into::into)
    }
}

/// A synchronous candidate.
pub enum SyncCandidate<'a> {
    NoArg(SyncNoArg<'a>),
    Indexed(SyncIndexed<'a>),
}

/// An asynchronous candidate; each call yields a future that is awaited
/// to completion before the next call starts.
pub enum AsyncCandidate<'a> {
    NoArg(AsyncNoArg<'a>),
    Indexed(AsyncIndexed<'a>),
}

/// Whether a candidate is synchronous or asynchronous.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateKind {
    Sync,
    Async,
}

impl fmt::Display for CandidateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateKind::Sync => write!(f, "sync"),
            CandidateKind::Async => write!(f, "async"),
        }
    }
}

/// A function to benchmark.
pub enum Candidate<'a> {
    Sync(SyncCandidate<'a>),
    Async(AsyncCandidate<'a>),
}

impl<'a> Candidate<'a> {
    /// Synchronous candidate that ignores the iteration index.
    pub fn sync<F, R>(mut f: F) -> Self
    where
        F: FnMut() -> R + 'a,
        R: IntoOutcome,
    {
        Candidate::Sync(SyncCandidate::NoArg(Box::new(move || f().into_outcome())))
    }

    /// Synchronous candidate called with the zero-based iteration index.
    pub fn sync_indexed<F, R>(mut f: F) -> Self
    where
        F: FnMut(u64) -> R + 'a,
        R: IntoOutcome,
    {
        Candidate::Sync(SyncCandidate::Indexed(Box::new(move |i| {
            f(i).into_outcome()
        })))
    }

    /// Asynchronous candidate that ignores the iteration index.
    pub fn future<F, Fut, R>(mut f: F) -> Self
    where
        F: FnMut() -> Fut + 'a,
        Fut: Future<Output = R> + 'a,
        R: IntoOutcome,
    {
        Candidate::Async(AsyncCandidate::NoArg(Box::new(move || {
            let fut = f();
            Box::pin(async move { fut.await.into_outcome() })
        })))
    }

    /// Asynchronous candidate called with the zero-based iteration index.
    pub fn future_indexed<F, Fut, R>(mut f: F) -> Self
    where
        F: FnMut(u64) -> Fut + 'a,
        Fut: Future<Output = R> + 'a,
        R: IntoOutcome,
    {
        Candidate::Async(AsyncCandidate::Indexed(Box::new(move |i| {
            let fut = f(i);
            Box::pin(async move { fut.await.into_outcome() })
        })))
    }

    pub fn kind(&self) -> CandidateKind {
        match self {
            Candidate::Sync(_) => CandidateKind::Sync,
            Candidate::Async(_) => CandidateKind::Async,
        }
    }

    /// Whether the candidate takes the iteration index.
    pub fn takes_index(&self) -> bool {
        matches!(
            self,
            Candidate::Sync(SyncCandidate::Indexed(_)) | Candidate::Async(AsyncCandidate::Indexed(_))
        )
    }
}

impl fmt::Debug for Candidate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Candidate")
            .field("kind", &self.kind())
            .field("takes_index", &self.takes_index())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_shapes() {
        let sync = Candidate::sync(|| {});
        assert_eq!(sync.kind(), CandidateKind::Sync);
        assert!(!sync.takes_index());

        let indexed = Candidate::sync_indexed(|i| {
            std::hint::black_box(i.to_string());
        });
        assert_eq!(indexed.kind(), CandidateKind::Sync);
        assert!(indexed.takes_index());

        let fut = Candidate::future(|| async {});
        assert_eq!(fut.kind(), CandidateKind::Async);
        assert!(!fut.takes_index());

        let fut_indexed = Candidate::future_indexed(|_i| async { Ok::<_, std::io::Error>(()) });
        assert_eq!(fut_indexed.kind(), CandidateKind::Async);
        assert!(fut_indexed.takes_index());
    }

    #[test]
    fn test_into_outcome() {
        assert!(().into_outcome().is_ok());
        assert!(Ok::<u32, std::io::Error>(3).into_outcome().is_ok());

        let err = Err::<(), _>("boom").into_outcome().unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_debug_does_not_expose_closure() {
        let candidate = Candidate::sync_indexed(|_| {});
        assert_eq!(
            format!("{:?}", candidate),
            "Candidate { kind: Sync, takes_index: true }"
        );
    }
}

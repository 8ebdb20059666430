// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Monotonic timestamps at microsecond granularity.

use std::time::Instant;

/// A point on the monotonic clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(Instant);

impl Timestamp {
    /// Take a timestamp now.
    pub fn now() -> Self {
        Self(Instant::now())
    }

    /// Whole microseconds from `self` to `later`.
    ///
    /// Saturates to zero if `later` is actually earlier.
    pub fn micros_until(self, later: Timestamp) -> u64 {
        later.0.saturating_duration_since(self.0).as_micros() as u64
    }
}

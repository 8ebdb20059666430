// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Newtype wrappers shared across the engine.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Ordered per-call elapsed times in microseconds, one entry per timed call.
///
/// Shorter than the requested iteration count when calls could not be
/// completed or timed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DurationSequence(Vec<u64>);

impl DurationSequence {
    /// Create an empty sequence with room for `capacity` timings.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Append one timing.
    pub fn push(&mut self, micros: u64) {
        self.0.push(micros);
    }

    /// Get the timings as a slice.
    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    /// Sum of all timings in microseconds.
    pub fn total_micros(&self) -> u128 {
        self.0.iter().map(|&d| d as u128).sum()
    }
}

impl Deref for DurationSequence {
    type Target = [u64];

    fn deref(&self) -> &[u64] {
        &self.0
    }
}

impl From<Vec<u64>> for DurationSequence {
    fn from(durations: Vec<u64>) -> Self {
        Self(durations)
    }
}

impl From<DurationSequence> for Vec<u64> {
    fn from(seq: DurationSequence) -> Self {
        seq.0
    }
}

/// Line-writing capability used when a result prints itself.
#[derive(Clone)]
pub struct LineWriter(Arc<dyn Fn(&str) + Send + Sync>);

impl LineWriter {
    pub fn new(write: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self(Arc::new(write))
    }

    /// Write one (possibly multi-line) message.
    pub fn write_line(&self, line: &str) {
        (self.0)(line)
    }
}

impl fmt::Debug for LineWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LineWriter(..)")
    }
}

// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

use std::fmt;

use serde::{Deserialize, Serialize};

/// Qualitative bucket for a failure percentage, used to shade reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// NaN or outside 0..=100
    Invalid,
    /// Below 1%
    Best,
    /// 1% to 20%
    Good,
    /// Above 20%, up to 50%
    Moderate,
    /// Above 50%, up to 75%
    Poor,
    /// Above 75%, up to 90%
    Bad,
    /// Above 90%
    Worst,
}

impl Severity {
    /// Bucket a failure percentage.
    pub fn from_percent(percent: f64) -> Self {
        if percent.is_nan() || !(0.0..=100.0).contains(&percent) {
            Severity::Invalid
        } else if percent < 1.0 {
            Severity::Best
        } else if percent <= 20.0 {
            Severity::Good
        } else if percent <= 50.0 {
            Severity::Moderate
        } else if percent <= 75.0 {
            Severity::Poor
        } else if percent <= 90.0 {
            Severity::Bad
        } else {
            Severity::Worst
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Invalid => write!(f, "invalid"),
            Severity::Best => write!(f, "best"),
            Severity::Good => write!(f, "good"),
            Severity::Moderate => write!(f, "moderate"),
            Severity::Poor => write!(f, "poor"),
            Severity::Bad => write!(f, "bad"),
            Severity::Worst => write!(f, "worst"),
        }
    }
}

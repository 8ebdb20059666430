// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Custom error types for microbench.
//!
//! Configuration problems and failing candidates are the only hard errors.
//! Everything else the engine runs into (undercounts, empty results, a
//! candidate of the wrong kind) degrades to a diagnostic plus degenerate
//! statistics instead of an error.

use std::error::Error as StdError;
use std::path::PathBuf;

use thiserror::Error;

/// Boxed error returned by a failing candidate.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Top-level error type for microbench.
#[derive(Debug, Error)]
pub enum MicrobenchError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    #[error("Hard validation error: {0}")]
    HardValidation(#[from] HardValidationError),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    // =========================================================================
    // Run Errors - a failing candidate aborts the whole run
    // =========================================================================
    #[error("Benchmark aborted: {0}")]
    Candidate(#[from] CandidateError),

    // =========================================================================
    // System Errors
    // =========================================================================
    #[error("IO error: {context} - {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Hard validation errors reject a suite file before anything runs.
#[derive(Debug, Error)]
pub enum HardValidationError {
    #[error("Missing required field: {field} in {context}")]
    MissingRequiredField {
        field: &'static str,
        context: String,
    },

    #[error("Invalid field value: {field} = {value} - {reason}")]
    InvalidFieldValue {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Duplicate benchmark name: {name}")]
    DuplicateBenchmarkName { name: String },

    #[error("Unknown workload '{workload}' for benchmark {name}")]
    UnknownWorkload { name: String, workload: String },

    #[error("Schema validation failed: {message}")]
    SchemaValidation { message: String },
}

/// A candidate call returned an error; the run stops at that iteration.
#[derive(Debug, Error)]
#[error("candidate failed at iteration {iteration}: {source}")]
pub struct CandidateError {
    /// Zero-based index of the iteration that failed.
    pub iteration: u64,
    #[source]
    pub source: BoxError,
}

impl CandidateError {
    pub fn new(iteration: u64, source: impl Into<BoxError>) -> Self {
        Self {
            iteration,
            source: source.into(),
        }
    }
}

/// Result type alias using MicrobenchError.
pub type MicrobenchResult<T> = Result<T, MicrobenchError>;

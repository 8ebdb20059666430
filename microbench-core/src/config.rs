// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Benchmark options and YAML suite parsing.
//!
//! `BenchmarkOptions` is what a caller supplies: any field may be missing.
//! `BenchmarkConfig` is the same set of options merged over the defaults and
//! is what the runners actually use. Suite files are validated at load time;
//! any invalid field results in a HardValidationError.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{HardValidationError, MicrobenchError, MicrobenchResult};
use crate::types::LineWriter;

/// Iteration count used when none is supplied.
pub const DEFAULT_ITERATIONS: u64 = 10_000;
/// Warmup iteration count used when none is supplied.
pub const DEFAULT_WARMUP_ITERATIONS: u64 = 0;

/// Options supplied for a benchmark run, before defaults are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BenchmarkOptions {
    /// Display label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Number of timed calls
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iterations: Option<u64>,
    /// Number of untimed calls run first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warmup_iterations: Option<u64>,
    /// Used only when a result prints itself
    #[serde(skip)]
    pub write_line: Option<LineWriter>,
}

impl BenchmarkOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display label.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the number of timed iterations.
    pub fn iterations(mut self, iterations: u64) -> Self {
        self.iterations = Some(iterations);
        self
    }

    /// Set the number of warmup iterations.
    pub fn warmup(mut self, iterations: u64) -> Self {
        self.warmup_iterations = Some(iterations);
        self
    }

    /// Set the line writer used by `BenchmarkResult::pretty_print`.
    pub fn write_line(mut self, writer: LineWriter) -> Self {
        self.write_line = Some(writer);
        self
    }

    /// Names of the recognized keys that were not supplied.
    pub fn missing_keys(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push("name");
        }
        if self.iterations.is_none() {
            missing.push("iterations");
        }
        if self.warmup_iterations.is_none() {
            missing.push("warmup_iterations");
        }
        missing
    }

    /// Fill every missing field from `fallback`.
    pub fn or(self, fallback: &BenchmarkOptions) -> Self {
        Self {
            name: self.name.or_else(|| fallback.name.clone()),
            iterations: self.iterations.or(fallback.iterations),
            warmup_iterations: self.warmup_iterations.or(fallback.warmup_iterations),
            write_line: self.write_line.or_else(|| fallback.write_line.clone()),
        }
    }

    /// Merge these options over the defaults.
    pub fn merged(&self) -> BenchmarkConfig {
        let defaults = BenchmarkConfig::default();
        BenchmarkConfig {
            name: self.name.clone().unwrap_or(defaults.name),
            iterations: self.iterations.unwrap_or(defaults.iterations),
            warmup_iterations: self.warmup_iterations.unwrap_or(defaults.warmup_iterations),
            write_line: self.write_line.clone(),
        }
    }
}

/// Fully populated run configuration.
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub name: String,
    pub iterations: u64,
    pub warmup_iterations: u64,
    pub write_line: Option<LineWriter>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            iterations: DEFAULT_ITERATIONS,
            warmup_iterations: DEFAULT_WARMUP_ITERATIONS,
            write_line: None,
        }
    }
}

/// Raw benchmark entry as parsed from YAML (before validation).
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawBenchmarkEntry {
    name: Option<String>,
    workload: Option<String>,
    iterations: Option<u64>,
    warmup_iterations: Option<u64>,
}

/// Raw root suite file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSuiteConfig {
    #[serde(default)]
    defaults: BenchmarkOptions,
    benchmarks: Vec<RawBenchmarkEntry>,
    #[serde(default)]
    compare: Vec<[String; 2]>,
}

/// One validated benchmark of a suite.
#[derive(Debug, Clone)]
pub struct SuiteEntry {
    /// Unique benchmark name
    pub name: String,
    /// Workload to run; defaults to the benchmark name
    pub workload: String,
    /// Entry options filled from the suite defaults
    pub options: BenchmarkOptions,
}

/// Complete validated suite.
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    pub defaults: BenchmarkOptions,
    pub benchmarks: Vec<SuiteEntry>,
    /// Pairs of benchmark names to compare once everything has run
    pub comparisons: Vec<(String, String)>,
}

impl SuiteConfig {
    /// Look up a benchmark by name.
    pub fn entry(&self, name: &str) -> Option<&SuiteEntry> {
        self.benchmarks.iter().find(|entry| entry.name == name)
    }
}

/// Suite loader with strict validation.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate a suite from a YAML file.
    pub fn load_file(path: impl AsRef<Path>) -> MicrobenchResult<SuiteConfig> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(MicrobenchError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| MicrobenchError::Io {
            context: "reading suite file",
            source: e,
        })?;

        Self::load_string(&content)
    }

    /// Load and validate a suite from a YAML string.
    pub fn load_string(content: &str) -> MicrobenchResult<SuiteConfig> {
        let raw: RawSuiteConfig =
            serde_yaml::from_str(content).map_err(|e| MicrobenchError::ConfigParse {
                message: format!("YAML parse error: {}", e),
            })?;

        Self::validate(raw)
    }

    fn validate(raw: RawSuiteConfig) -> MicrobenchResult<SuiteConfig> {
        if raw.benchmarks.is_empty() {
            return Err(HardValidationError::SchemaValidation {
                message: "At least one benchmark must be defined".to_string(),
            }
            .into());
        }

        let mut benchmarks = Vec::with_capacity(raw.benchmarks.len());
        let mut seen_names = HashSet::new();

        for (index, raw_entry) in raw.benchmarks.into_iter().enumerate() {
            let entry = Self::validate_entry(raw_entry, index, &raw.defaults)?;

            if !seen_names.insert(entry.name.clone()) {
                return Err(HardValidationError::DuplicateBenchmarkName { name: entry.name }.into());
            }

            benchmarks.push(entry);
        }

        let mut comparisons = Vec::with_capacity(raw.compare.len());
        for [left, right] in raw.compare {
            for name in [&left, &right] {
                if !seen_names.contains(name) {
                    return Err(HardValidationError::InvalidFieldValue {
                        field: "compare",
                        value: name.clone(),
                        reason: "Comparison references an undeclared benchmark".to_string(),
                    }
                    .into());
                }
            }
            comparisons.push((left, right));
        }

        Ok(SuiteConfig {
            defaults: raw.defaults,
            benchmarks,
            comparisons,
        })
    }

    fn validate_entry(
        raw: RawBenchmarkEntry,
        index: usize,
        defaults: &BenchmarkOptions,
    ) -> MicrobenchResult<SuiteEntry> {
        let context = format!("benchmark at index {}", index);

        let name = match raw.name {
            Some(name) if !name.trim().is_empty() => name,
            Some(name) => {
                return Err(HardValidationError::InvalidFieldValue {
                    field: "name",
                    value: name,
                    reason: format!("Benchmark name cannot be blank in {}", context),
                }
                .into());
            }
            None => {
                return Err(HardValidationError::MissingRequiredField {
                    field: "name",
                    context,
                }
                .into());
            }
        };

        let workload = raw.workload.unwrap_or_else(|| name.clone());
        if workload.trim().is_empty() {
            return Err(HardValidationError::InvalidFieldValue {
                field: "workload",
                value: workload,
                reason: format!("Workload cannot be blank in {}", context),
            }
            .into());
        }

        let options = BenchmarkOptions {
            name: Some(name.clone()),
            iterations: raw.iterations,
            warmup_iterations: raw.warmup_iterations,
            write_line: None,
        }
        .or(defaults);

        Ok(SuiteEntry {
            name,
            workload,
            options,
        })
    }
}

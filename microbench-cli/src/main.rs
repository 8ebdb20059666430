// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Microbench CLI
//!
//! Command-line interface for running and comparing micro-benchmarks.

use clap::{Parser, Subcommand};
use microbench_core::config::{DEFAULT_ITERATIONS, DEFAULT_WARMUP_ITERATIONS};

mod commands;
mod workloads;

/// mbench - Micro-benchmark runner with side-by-side comparisons
#[derive(Parser)]
#[command(name = "mbench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List built-in workloads
    List,

    /// Benchmark one or more workloads
    Run {
        /// Workload names
        #[arg(required = true)]
        workloads: Vec<String>,

        /// Number of timed iterations
        #[arg(short, long, default_value_t = DEFAULT_ITERATIONS)]
        iterations: u64,

        /// Number of warmup iterations
        #[arg(short, long, default_value_t = DEFAULT_WARMUP_ITERATIONS)]
        warmup: u64,

        /// Print reports without colors
        #[arg(long)]
        plain: bool,

        /// Also print the one-line debug form of each result
        #[arg(long)]
        debug_line: bool,
    },

    /// Benchmark two workloads and compare them
    Compare {
        /// Left-hand workload
        left: String,

        /// Right-hand workload
        right: String,

        /// Number of timed iterations
        #[arg(short, long, default_value_t = DEFAULT_ITERATIONS)]
        iterations: u64,

        /// Number of warmup iterations
        #[arg(short, long, default_value_t = DEFAULT_WARMUP_ITERATIONS)]
        warmup: u64,

        /// Print the comparison without colors
        #[arg(long)]
        plain: bool,
    },

    /// Run every benchmark of a suite file
    Suite {
        /// Path to the suite YAML file
        file: String,

        /// Print reports without colors
        #[arg(long)]
        plain: bool,
    },

    /// Validate a suite file
    Validate {
        /// Path to the suite YAML file
        file: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    // Dispatch to command handlers
    match cli.command {
        Commands::List => commands::list::execute().await,
        Commands::Run {
            workloads,
            iterations,
            warmup,
            plain,
            debug_line,
        } => commands::run::execute(&workloads, iterations, warmup, plain, debug_line).await,
        Commands::Compare {
            left,
            right,
            iterations,
            warmup,
            plain,
        } => commands::compare::execute(&left, &right, iterations, warmup, plain).await,
        Commands::Suite { file, plain } => commands::suite::execute(&file, plain).await,
        Commands::Validate { file } => commands::validate::execute(&file).await,
    }
}

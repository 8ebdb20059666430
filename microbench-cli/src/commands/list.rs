// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `mbench list` command - List built-in workloads.

use crate::workloads::Workload;

pub async fn execute() -> Result<(), Box<dyn std::error::Error>> {
    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║                        BUILT-IN WORKLOADS                        ║");
    println!("╠═══════════════╦════════╦═════════════════════════════════════════╣");
    println!("║ Name          ║ Kind   ║ Description                             ║");
    println!("╠═══════════════╬════════╬═════════════════════════════════════════╣");

    for workload in Workload::ALL {
        println!(
            "║ {:<13} ║ {:<6} ║ {:<39} ║",
            workload.name(),
            workload.kind().to_string(),
            workload.description()
        );
    }

    println!("╚═══════════════╩════════╩═════════════════════════════════════════╝");
    println!();
    println!("Total: {} workload(s)", Workload::ALL.len());

    Ok(())
}

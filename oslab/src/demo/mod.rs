/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Demonstration driver: wires the sample datasets into the calculators
//! and prints the formatted reports.
//!
//! The tables printed here are the program's product output and go to
//! stdout via `println!`; `tracing` events stay on the diagnostic stream.
//! No data flows between sections: each builds its inputs from the
//! [`LabConfig`], invokes one calculator family, and prints the result.

use anyhow::Result;
use clap::ValueEnum;
use tracing::debug;

use crate::banker::{Banker, BankerError};
use crate::config::{BankerConfig, DiskConfig, LabConfig, PagingConfig, SchedConfig};
use crate::{disk, paging, sched};

// ── Section selector ──────────────────────────────────────────────────────────

/// Which demonstration(s) to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    /// All four demonstrations in order.
    All,
    /// CPU scheduling only.
    Sched,
    /// Page replacement only.
    Paging,
    /// Banker's algorithm only.
    Banker,
    /// Disk scheduling only.
    Disk,
}

impl Section {
    fn includes(self, other: Section) -> bool {
        self == Section::All || self == other
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Run the selected demonstration(s) against `config`.
///
/// Any calculator precondition failure propagates out as an error; a denied
/// Banker's request is part of the demonstration and is printed, not
/// propagated.
pub fn run(config: &LabConfig, section: Section) -> Result<()> {
    debug!(?section, "starting demonstrations");

    println!();
    println!("{}", "*".repeat(70));
    println!("*{:^68}*", "");
    println!("*{:^68}*", "OPERATING SYSTEMS ALGORITHM DEMONSTRATIONS");
    println!("*{:^68}*", "");
    println!("{}", "*".repeat(70));

    if section.includes(Section::Sched) {
        run_scheduling(&config.sched)?;
    }
    if section.includes(Section::Paging) {
        run_paging(&config.paging)?;
    }
    if section.includes(Section::Banker) {
        run_banker(&config.banker)?;
    }
    if section.includes(Section::Disk) {
        run_disk(&config.disk)?;
    }

    println!();
    println!("{}", "=".repeat(70));
    println!("ALL DEMONSTRATIONS COMPLETED SUCCESSFULLY!");
    println!("{}", "=".repeat(70));
    println!();

    Ok(())
}

// ── CPU scheduling ────────────────────────────────────────────────────────────

fn run_scheduling(cfg: &SchedConfig) -> Result<()> {
    heading("PROCESS SCHEDULING ALGORITHMS");

    println!();
    println!("Process Details:");
    println!("{:<10} {:<15} {:<10}", "Process", "Burst Time", "Priority");
    println!("{}", "-".repeat(35));
    for p in &cfg.processes {
        println!("{:<10} {:<15} {:<10}", p.id, p.burst, p.priority);
    }

    subheading("1. First Come First Serve (FCFS):");
    let result = sched::fcfs(&cfg.processes)?;
    print_averages(&result);

    subheading("2. Shortest Job First (SJF):");
    let result = sched::sjf(&cfg.processes)?;
    if let Some(order) = &result.order {
        println!("Execution Order: {}", order.join(" -> "));
    }
    print_averages(&result);

    subheading(&format!("3. Round Robin (Quantum = {}):", cfg.quantum));
    let result = sched::round_robin(&cfg.processes, cfg.quantum)?;
    print_averages(&result);

    subheading("4. Priority Scheduling:");
    let result = sched::priority(&cfg.processes)?;
    if let Some(order) = &result.order {
        println!("Execution Order: {}", order.join(" -> "));
    }
    print_averages(&result);

    Ok(())
}

fn print_averages(result: &crate::process::ScheduleResult) {
    println!("Average Waiting Time: {:.2}", result.avg_waiting);
    println!("Average Turnaround Time: {:.2}", result.avg_turnaround);
}

// ── Page replacement ──────────────────────────────────────────────────────────

fn run_paging(cfg: &PagingConfig) -> Result<()> {
    heading("PAGE REPLACEMENT ALGORITHMS");

    println!();
    println!("Page Reference String: {:?}", cfg.reference_string);
    println!("Number of Frames: {}", cfg.frames);

    subheading("1. FIFO (First In First Out):");
    print_paging(&paging::fifo(&cfg.reference_string, cfg.frames)?);

    subheading("2. LRU (Least Recently Used):");
    print_paging(&paging::lru(&cfg.reference_string, cfg.frames)?);

    subheading("3. Optimal Page Replacement:");
    print_paging(&paging::optimal(&cfg.reference_string, cfg.frames)?);

    Ok(())
}

fn print_paging(result: &paging::PagingResult) {
    println!("Page Faults: {}", result.faults);
    println!("Hits: {}", result.hits);
    println!("Hit Ratio: {:.2}%", result.hit_ratio * 100.0);
}

// ── Banker's algorithm ────────────────────────────────────────────────────────

fn run_banker(cfg: &BankerConfig) -> Result<()> {
    heading("BANKER'S ALGORITHM FOR DEADLOCK AVOIDANCE");

    let mut banker = Banker::new(
        cfg.available.clone(),
        cfg.maximum.clone(),
        cfg.allocation.clone(),
    )?;

    println!();
    println!("Available Resources: {}", row_str(banker.available()));
    println!();
    println!("Allocation and Maximum Matrices:");
    println!(
        "{:<10} {:<20} {:<20} {:<20}",
        "Process", "Allocation", "Maximum", "Need"
    );
    println!("{}", "-".repeat(70));
    for i in 0..banker.process_count() {
        println!(
            "P{:<9} {:<20} {:<20} {:<20}",
            i,
            row_str(&banker.allocation()[i]),
            row_str(&banker.maximum()[i]),
            row_str(&banker.need()[i]),
        );
    }

    let report = banker.is_safe();
    println!();
    println!(
        "System is {}",
        if report.is_safe() { "SAFE" } else { "UNSAFE" }
    );
    if let Some(sequence) = report.sequence() {
        println!("Safe Sequence: {}", pid_chain(sequence));
    }

    // The sample request is part of the demonstration: denials are printed,
    // only genuine usage errors propagate
    println!();
    println!();
    println!("Testing Resource Request:");
    println!(
        "Process P{} requests {:?}",
        cfg.request.process, cfg.request.resources
    );
    match banker.request_resources(cfg.request.process, &cfg.request.resources) {
        Ok(sequence) => {
            println!("Result: Request granted. Safe sequence: {}", pid_chain(&sequence));
        }
        Err(BankerError::Denied { reason, .. }) => {
            println!("Result: Request denied: {reason}");
        }
        Err(other) => return Err(other.into()),
    }

    Ok(())
}

/// `(3, 3, 2)` — matrix rows and vectors as the report prints them.
fn row_str(row: &[u64]) -> String {
    let cells: Vec<String> = row.iter().map(u64::to_string).collect();
    format!("({})", cells.join(", "))
}

/// `P1 -> P3 -> P0` — process indices as a safe-sequence chain.
fn pid_chain(sequence: &[usize]) -> String {
    let ids: Vec<String> = sequence.iter().map(|i| format!("P{i}")).collect();
    ids.join(" -> ")
}

// ── Disk scheduling ───────────────────────────────────────────────────────────

fn run_disk(cfg: &DiskConfig) -> Result<()> {
    heading("DISK SCHEDULING ALGORITHMS");

    println!();
    println!("Disk Queue: {:?}", cfg.requests);
    println!("Initial Head Position: {}", cfg.head);
    println!("Disk Size: {}", cfg.disk_size);

    subheading("1. FCFS (First Come First Serve):");
    print_disk(&disk::fcfs(&cfg.requests, cfg.head));

    subheading("2. SCAN (Elevator Algorithm):");
    print_disk(&disk::scan(
        &cfg.requests,
        cfg.head,
        cfg.disk_size,
        cfg.direction,
    )?);

    subheading("3. C-SCAN (Circular SCAN):");
    print_disk(&disk::cscan(&cfg.requests, cfg.head, cfg.disk_size)?);

    Ok(())
}

fn print_disk(result: &disk::DiskResult) {
    let positions: Vec<String> = result.sequence.iter().map(u32::to_string).collect();
    println!("Seek Sequence: {}", positions.join(" -> "));
    println!("Total Seek Count: {}", result.seek_count);
    println!("Average Seek: {:.2}", result.avg_seek);
}

// ── Layout helpers ────────────────────────────────────────────────────────────

fn heading(title: &str) {
    println!();
    println!("{}", "=".repeat(70));
    println!("{title}");
    println!("{}", "=".repeat(70));
}

fn subheading(title: &str) {
    println!();
    println!("{title}");
    println!("{}", "-".repeat(35));
}

// ── Tests ─────────────────────────────────────────────────────────────────────

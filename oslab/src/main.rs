/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{debug, error};

use oslab::config::LabConfig;
use oslab::demo::{self, Section};

// ── CLI argument definition ───────────────────────────────────────────────────

/// Classic operating-systems algorithm demonstrations.
///
/// Example:
///   oslab --section paging --frames 4
///   oslab --config demos/lab.yaml
#[derive(Debug, Parser)]
#[command(
    name = "oslab",
    about = "CPU scheduling, page replacement, deadlock avoidance and disk scheduling demos",
    long_about = None,
)]
struct Cli {
    /// Path to a YAML file overriding the embedded sample datasets.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Which demonstration section to run.
    #[arg(short = 's', long = "section", value_enum, default_value = "all")]
    section: Section,

    /// Override the Round Robin time quantum.
    #[arg(short = 'q', long = "quantum")]
    quantum: Option<u64>,

    /// Override the number of page frames.
    #[arg(short = 'f', long = "frames")]
    frames: Option<usize>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialise structured logging.
    // The demonstration tables go to stdout; diagnostics default to `warn`
    // and are controlled by the RUST_LOG env-var (e.g. RUST_LOG=debug).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    debug!(
        config  = ?cli.config,
        section = ?cli.section,
        quantum = ?cli.quantum,
        frames  = ?cli.frames,
        "Configuration"
    );

    if let Err(e) = run(&cli) {
        error!("{:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => LabConfig::load_from_file(path)?,
        None => LabConfig::default(),
    };

    // CLI overrides beat both file and embedded values
    if let Some(quantum) = cli.quantum {
        config.sched.quantum = quantum;
    }
    if let Some(frames) = cli.frames {
        config.paging.frames = frames;
    }

    demo::run(&config, cli.section)
}

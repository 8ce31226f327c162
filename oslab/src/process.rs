/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Core data types shared by the CPU scheduling calculators.
//!
//! Two types model the two sides of one scheduling run:
//!
//! ```text
//! config/demo  ──(Vec<Process>)──►  sched::*  ──►  ScheduleResult
//!                 immutable input                   fresh per call
//! ```
//!
//! # Ownership model
//! A `&[Process]` slice is borrowed by a scheduling algorithm for the
//! duration of one call; the [`ScheduleResult`] it returns owns all of its
//! vectors and is never mutated afterwards.

use serde::Deserialize;

// ── Process ───────────────────────────────────────────────────────────────────

/// One process as seen by the CPU scheduling algorithms.
///
/// Immutable once constructed. All processes are modelled as arriving at
/// time zero, so turnaround time is simply waiting time plus burst time.
///
/// Derives `Deserialize` so the sample process list can be overridden from
/// the YAML configuration file (see [`crate::config`]).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Process {
    /// Display identifier, e.g. `"P1"`. Not required to be unique, but the
    /// sample datasets always use distinct ids.
    pub id: String,

    /// Total CPU time the process requires before completion.
    ///
    /// Must be non-zero — [`crate::sched`] rejects a zero burst with
    /// [`SchedError::ZeroBurst`](crate::sched::SchedError::ZeroBurst)
    /// before entering any algorithm.
    pub burst: u64,

    /// Scheduling priority. Lower value = higher priority.
    #[serde(default)]
    pub priority: i32,
}

impl Process {
    /// Convenience constructor used by the demo datasets and tests.
    pub fn new(id: impl Into<String>, burst: u64, priority: i32) -> Self {
        Self {
            id: id.into(),
            burst,
            priority,
        }
    }
}

// ── ScheduleResult ────────────────────────────────────────────────────────────

/// Per-process timing produced by one scheduling algorithm call.
///
/// `waiting` and `turnaround` are indexed by the *original* input order,
/// regardless of the order in which the algorithm executed the processes.
/// Algorithms that reorder execution (SJF, Priority) additionally report the
/// execution order as a list of process ids.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleResult {
    /// Time each process spent ready but not executing, by original index.
    pub waiting: Vec<u64>,

    /// Total time from arrival (t = 0) to completion, by original index.
    /// Always `waiting[i] + burst[i]`.
    pub turnaround: Vec<u64>,

    /// Arithmetic mean of `waiting`.
    pub avg_waiting: f64,

    /// Arithmetic mean of `turnaround`.
    pub avg_turnaround: f64,

    /// Execution order as process ids, for algorithms where the order
    /// differs from the input order. `None` for FCFS and Round Robin.
    pub order: Option<Vec<String>>,
}

impl ScheduleResult {
    /// Build a result from per-process times, computing the averages.
    ///
    /// The caller guarantees `waiting` and `turnaround` are non-empty and of
    /// equal length (the scheduling algorithms validate the process list
    /// before constructing any result).
    pub(crate) fn from_times(
        waiting: Vec<u64>,
        turnaround: Vec<u64>,
        order: Option<Vec<String>>,
    ) -> Self {
        debug_assert!(!waiting.is_empty());
        debug_assert_eq!(waiting.len(), turnaround.len());

        let n = waiting.len() as f64;
        let avg_waiting = waiting.iter().sum::<u64>() as f64 / n;
        let avg_turnaround = turnaround.iter().sum::<u64>() as f64 / n;

        Self {
            waiting,
            turnaround,
            avg_waiting,
            avg_turnaround,
            order,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

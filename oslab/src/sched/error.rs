/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Structured error type for the CPU scheduling calculators.
//!
//! Every variant is a *precondition* violation: the sample datasets never
//! trigger them, but a caller supplying its own data (via the YAML config)
//! must get a typed rejection instead of a divide-by-zero or a scheduler
//! that never terminates.

use thiserror::Error;

/// Precondition failures for [`crate::sched`] algorithms.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchedError {
    /// An algorithm was called with an empty process list. Averaging over
    /// zero processes is a usage error, not a computable result.
    #[error("no processes provided")]
    NoProcesses,

    /// A process has a zero burst time. Every process must require some CPU
    /// time; a zero burst would also stall Round Robin's progress argument.
    #[error("process '{id}' has zero burst time")]
    ZeroBurst { id: String },

    /// Round Robin was called with a zero time quantum, which would never
    /// advance the simulated clock.
    #[error("round robin time quantum must be positive")]
    ZeroQuantum,
}

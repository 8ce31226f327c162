/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Deadlock avoidance via the Banker's algorithm.
//!
//! [`Banker`] owns one resource-allocation state: an `available` vector, an
//! `allocation` and a `maximum` matrix (process × resource type), and the
//! derived `need = maximum − allocation`, kept in sync after every mutation.
//!
//! # Safety check
//! [`Banker::is_safe`] runs the work/finish fixed point: starting from
//! `work = available`, repeatedly scan processes in ascending index order
//! and retire the **first** unfinished process whose entire need fits in
//! `work`, releasing its allocation back into `work` and restarting the
//! scan. The reported safe sequence is the retirement order, which is why
//! it is not necessarily ascending. A full scan with no progress while
//! processes remain means the state is unsafe. O(p² · r) worst case.
//!
//! # Transactional requests
//! [`Banker::request_resources`] follows a strict
//! snapshot → apply → verify → commit-or-restore discipline. Rejections for
//! "exceeds need" and "resources not available" happen before any mutation;
//! a request that would produce an unsafe state is rolled back to the exact
//! pre-request snapshot. No exit path leaves the state partially applied,
//! so a future concurrent caller would only need a lock around the whole
//! sequence, never a repair step.

use thiserror::Error;
use tracing::{debug, info, warn};

// ── Errors ────────────────────────────────────────────────────────────────────

/// Why a resource request was denied.
///
/// Denials are user-facing rejections, not faults: the checker state is
/// untouched (or exactly restored) on every denial. Carried inside
/// [`BankerError::Denied`] so the caller always knows which process failed
/// and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenyReason {
    /// The request asks for more of a resource than the process could ever
    /// still need under its declared maximum.
    ExceedsNeed {
        resource: usize,
        requested: u64,
        need: u64,
    },

    /// The request asks for more of a resource than is currently available.
    Unavailable {
        resource: usize,
        requested: u64,
        available: u64,
    },

    /// Granting the request would leave the system with no safe sequence.
    /// The state was rolled back to its pre-request snapshot.
    Unsafe,
}

impl std::fmt::Display for DenyReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DenyReason::ExceedsNeed {
                resource,
                requested,
                need,
            } => write!(
                f,
                "requested {} of resource {} exceeds remaining need {}",
                requested, resource, need
            ),

            DenyReason::Unavailable {
                resource,
                requested,
                available,
            } => write!(
                f,
                "requested {} of resource {} but only {} available",
                requested, resource, available
            ),

            DenyReason::Unsafe => {
                write!(f, "granting the request would leave the system unsafe")
            }
        }
    }
}

/// Top-level error type for [`Banker`] construction and requests.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BankerError {
    /// A matrix or vector does not match the expected dimensions.
    #[error("{what}: expected length {expected}, found {found}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// `allocation[process][resource]` exceeds
    /// `maximum[process][resource]`, which would make the need matrix
    /// negative.
    #[error(
        "process {process} holds {allocated} of resource {resource} \
         but declares a maximum of {maximum}"
    )]
    NeedUnderflow {
        process: usize,
        resource: usize,
        allocated: u64,
        maximum: u64,
    },

    /// A request named a process index outside the state.
    #[error("no process {pid} (state holds {count} processes)")]
    NoSuchProcess { pid: usize, count: usize },

    /// The request was denied with a structured reason; the state is
    /// unchanged.
    #[error("request by process {pid} denied: {reason}")]
    Denied { pid: usize, reason: DenyReason },
}

// ── SafetyReport ──────────────────────────────────────────────────────────────

/// Outcome of one safety check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SafetyReport {
    /// Every process can run to completion in the given index order.
    Safe(Vec<usize>),

    /// No ordering lets all processes finish.
    Unsafe,
}

impl SafetyReport {
    pub fn is_safe(&self) -> bool {
        matches!(self, SafetyReport::Safe(_))
    }

    /// The safe sequence, if one exists.
    pub fn sequence(&self) -> Option<&[usize]> {
        match self {
            SafetyReport::Safe(seq) => Some(seq),
            SafetyReport::Unsafe => None,
        }
    }
}

// ── Banker ────────────────────────────────────────────────────────────────────

/// Banker's algorithm checker over one resource-allocation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banker {
    available: Vec<u64>,
    maximum: Vec<Vec<u64>>,
    allocation: Vec<Vec<u64>>,
    /// Invariant: `need[i][j] == maximum[i][j] − allocation[i][j]` at all
    /// times, re-established by every commit and every rollback.
    need: Vec<Vec<u64>>,
}

impl Banker {
    /// Build a checker, validating shapes and deriving the need matrix.
    ///
    /// # Errors
    /// * [`BankerError::ShapeMismatch`] — `maximum` and `allocation` must
    ///   have the same number of rows, each as long as `available`.
    /// * [`BankerError::NeedUnderflow`] — an allocation entry exceeds its
    ///   declared maximum.
    pub fn new(
        available: Vec<u64>,
        maximum: Vec<Vec<u64>>,
        allocation: Vec<Vec<u64>>,
    ) -> Result<Self, BankerError> {
        if allocation.len() != maximum.len() {
            return Err(BankerError::ShapeMismatch {
                what: "allocation rows",
                expected: maximum.len(),
                found: allocation.len(),
            });
        }
        let resources = available.len();
        for row in maximum.iter() {
            if row.len() != resources {
                return Err(BankerError::ShapeMismatch {
                    what: "maximum row",
                    expected: resources,
                    found: row.len(),
                });
            }
        }
        for row in allocation.iter() {
            if row.len() != resources {
                return Err(BankerError::ShapeMismatch {
                    what: "allocation row",
                    expected: resources,
                    found: row.len(),
                });
            }
        }

        let mut need = Vec::with_capacity(maximum.len());
        for (i, (max_row, alloc_row)) in maximum.iter().zip(&allocation).enumerate() {
            let mut need_row = Vec::with_capacity(resources);
            for (j, (&m, &a)) in max_row.iter().zip(alloc_row).enumerate() {
                if a > m {
                    return Err(BankerError::NeedUnderflow {
                        process: i,
                        resource: j,
                        allocated: a,
                        maximum: m,
                    });
                }
                need_row.push(m - a);
            }
            need.push(need_row);
        }

        debug!(
            processes = maximum.len(),
            resources,
            "banker state initialised"
        );

        Ok(Self {
            available,
            maximum,
            allocation,
            need,
        })
    }

    // ── Accessors (used by the demo report) ───────────────────────────────────

    pub fn available(&self) -> &[u64] {
        &self.available
    }

    pub fn maximum(&self) -> &[Vec<u64>] {
        &self.maximum
    }

    pub fn allocation(&self) -> &[Vec<u64>] {
        &self.allocation
    }

    pub fn need(&self) -> &[Vec<u64>] {
        &self.need
    }

    pub fn process_count(&self) -> usize {
        self.allocation.len()
    }

    pub fn resource_count(&self) -> usize {
        self.available.len()
    }

    // ── Safety check ──────────────────────────────────────────────────────────

    /// Work/finish fixed point over the current state.
    pub fn is_safe(&self) -> SafetyReport {
        let p = self.process_count();
        let mut work = self.available.clone();
        let mut finish = vec![false; p];
        let mut sequence = Vec::with_capacity(p);

        loop {
            // First unfinished process whose whole need fits in `work`;
            // restart the scan after every retirement
            let runnable = (0..p).find(|&i| {
                !finish[i]
                    && self.need[i]
                        .iter()
                        .zip(&work)
                        .all(|(&need, &have)| need <= have)
            });

            match runnable {
                Some(i) => {
                    for (have, &held) in work.iter_mut().zip(&self.allocation[i]) {
                        *have += held;
                    }
                    finish[i] = true;
                    sequence.push(i);
                }
                None => break,
            }
        }

        if sequence.len() == p {
            debug!(?sequence, "state is safe");
            SafetyReport::Safe(sequence)
        } else {
            debug!(
                finished = sequence.len(),
                total = p,
                "state is unsafe, no further process can complete"
            );
            SafetyReport::Unsafe
        }
    }

    // ── Resource requests ─────────────────────────────────────────────────────

    /// Try to grant `request` to process `pid`.
    ///
    /// Returns the safe sequence of the post-grant state on success. On any
    /// denial ([`BankerError::Denied`]) the state is byte-for-byte identical
    /// to its pre-call value: "exceeds need" and "unavailable" are rejected
    /// before mutation, and an unsafe result is rolled back to the snapshot
    /// taken before the speculative apply.
    pub fn request_resources(
        &mut self,
        pid: usize,
        request: &[u64],
    ) -> Result<Vec<usize>, BankerError> {
        let count = self.process_count();
        if pid >= count {
            return Err(BankerError::NoSuchProcess { pid, count });
        }
        if request.len() != self.resource_count() {
            return Err(BankerError::ShapeMismatch {
                what: "request",
                expected: self.resource_count(),
                found: request.len(),
            });
        }

        // Reject-before-mutate checks
        for (j, &r) in request.iter().enumerate() {
            if r > self.need[pid][j] {
                return Err(BankerError::Denied {
                    pid,
                    reason: DenyReason::ExceedsNeed {
                        resource: j,
                        requested: r,
                        need: self.need[pid][j],
                    },
                });
            }
        }
        for (j, &r) in request.iter().enumerate() {
            if r > self.available[j] {
                return Err(BankerError::Denied {
                    pid,
                    reason: DenyReason::Unavailable {
                        resource: j,
                        requested: r,
                        available: self.available[j],
                    },
                });
            }
        }

        // Snapshot → speculative apply → verify → commit or restore
        let snapshot = (
            self.available.clone(),
            self.allocation[pid].clone(),
            self.need[pid].clone(),
        );

        for (j, &r) in request.iter().enumerate() {
            self.available[j] -= r;
            self.allocation[pid][j] += r;
            self.need[pid][j] -= r;
        }

        match self.is_safe() {
            SafetyReport::Safe(sequence) => {
                info!(pid, ?request, ?sequence, "request granted");
                Ok(sequence)
            }
            SafetyReport::Unsafe => {
                let (available, allocation, need) = snapshot;
                self.available = available;
                self.allocation[pid] = allocation;
                self.need[pid] = need;
                warn!(pid, ?request, "request rolled back, would be unsafe");
                Err(BankerError::Denied {
                    pid,
                    reason: DenyReason::Unsafe,
                })
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

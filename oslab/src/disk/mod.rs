/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Disk-seek scheduling calculators.
//!
//! Given a queue of cylinder requests and a starting head position, each
//! algorithm computes the total head movement (seek count), the average
//! seek per request, and the full sequence of positions visited, starting
//! with the initial head position.
//!
//! | Algorithm | Service order |
//! |---|---|
//! | [`fcfs`] | input order |
//! | [`scan`] | one side to the edge cylinder, then the other side (elevator) |
//! | [`cscan`] | rightward sweep to the edge, jump to cylinder 0, sweep again |
//!
//! The C-SCAN return jump is costed as the direct distance from the current
//! position back to cylinder 0, not as a wrap beyond the last cylinder.
//! That accounting is part of the contract and must not be "corrected".

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

// ── Error type ────────────────────────────────────────────────────────────────

/// Precondition failures for the SCAN / C-SCAN calculators.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiskError {
    /// A queued request addresses a cylinder at or beyond the disk size.
    #[error("request for cylinder {request} is outside the disk (size {disk_size})")]
    RequestOutOfRange { request: u32, disk_size: u32 },

    /// The starting head position is at or beyond the disk size.
    #[error("head position {head} is outside the disk (size {disk_size})")]
    HeadOutOfRange { head: u32, disk_size: u32 },
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// Initial sweep direction for [`scan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Sweep toward the last cylinder first.
    #[default]
    Right,
    /// Sweep toward cylinder 0 first.
    Left,
}

// ── Result type ───────────────────────────────────────────────────────────────

/// Outcome of one disk scheduling run.
#[derive(Debug, Clone, PartialEq)]
pub struct DiskResult {
    /// Total head movement: sum of absolute cylinder distances.
    pub seek_count: u64,

    /// `seek_count / request count`, `0.0` for an empty queue.
    pub avg_seek: f64,

    /// Every position visited, starting with the initial head position and
    /// including any boundary cylinder actually traversed.
    pub sequence: Vec<u32>,
}

// ── FCFS ──────────────────────────────────────────────────────────────────────

/// Service requests in input order, with no reordering.
pub fn fcfs(requests: &[u32], head: u32) -> DiskResult {
    let mut sweep = Sweep::start(head);
    for &request in requests {
        sweep.seek_to(request);
    }
    debug!(seek_count = sweep.seek_count, "disk fcfs complete");
    sweep.finish(requests.len())
}

// ── SCAN ──────────────────────────────────────────────────────────────────────

/// Elevator algorithm: service everything on one side of the head, travel
/// to that side's edge cylinder (only if any request was serviced there),
/// then reverse and service the other side.
///
/// Requests at exactly the head position belong to the right partition.
pub fn scan(
    requests: &[u32],
    head: u32,
    disk_size: u32,
    direction: Direction,
) -> Result<DiskResult, DiskError> {
    validate(requests, head, disk_size)?;

    let (left, right) = partition(requests, head);
    let mut sweep = Sweep::start(head);

    match direction {
        Direction::Right => {
            for &r in &right {
                sweep.seek_to(r);
            }
            if !right.is_empty() && sweep.current != disk_size - 1 {
                sweep.seek_to(disk_size - 1);
            }
            for &r in left.iter().rev() {
                sweep.seek_to(r);
            }
        }
        Direction::Left => {
            for &r in left.iter().rev() {
                sweep.seek_to(r);
            }
            if !left.is_empty() && sweep.current != 0 {
                sweep.seek_to(0);
            }
            for &r in &right {
                sweep.seek_to(r);
            }
        }
    }

    debug!(?direction, seek_count = sweep.seek_count, "disk scan complete");
    Ok(sweep.finish(requests.len()))
}

// ── C-SCAN ────────────────────────────────────────────────────────────────────

/// Circular SCAN, always rightward: sweep up to the last cylinder, then, if
/// any requests remain below the original head, jump back to cylinder 0
/// (costed as the direct distance from the current position) and sweep the
/// remainder ascending.
pub fn cscan(requests: &[u32], head: u32, disk_size: u32) -> Result<DiskResult, DiskError> {
    validate(requests, head, disk_size)?;

    let (left, right) = partition(requests, head);
    let mut sweep = Sweep::start(head);

    for &r in &right {
        sweep.seek_to(r);
    }
    if !right.is_empty() && sweep.current != disk_size - 1 {
        sweep.seek_to(disk_size - 1);
    }

    if !left.is_empty() {
        // Return jump: direct traversal back through cylinder 0
        sweep.seek_count += u64::from(sweep.current);
        sweep.current = 0;
        sweep.sequence.push(0);

        for &r in &left {
            sweep.seek_to(r);
        }
    }

    debug!(seek_count = sweep.seek_count, "disk cscan complete");
    Ok(sweep.finish(requests.len()))
}

// ── Shared helpers ────────────────────────────────────────────────────────────

/// Running head position with accumulated seek distance and visit log.
struct Sweep {
    current: u32,
    seek_count: u64,
    sequence: Vec<u32>,
}

impl Sweep {
    fn start(head: u32) -> Self {
        Self {
            current: head,
            seek_count: 0,
            sequence: vec![head],
        }
    }

    fn seek_to(&mut self, target: u32) {
        self.seek_count += u64::from(self.current.abs_diff(target));
        self.current = target;
        self.sequence.push(target);
    }

    fn finish(self, request_count: usize) -> DiskResult {
        let avg_seek = if request_count == 0 {
            0.0
        } else {
            self.seek_count as f64 / request_count as f64
        };
        DiskResult {
            seek_count: self.seek_count,
            avg_seek,
            sequence: self.sequence,
        }
    }
}

/// Split into below-head (ascending) and at-or-above-head (ascending).
fn partition(requests: &[u32], head: u32) -> (Vec<u32>, Vec<u32>) {
    let mut left: Vec<u32> = requests.iter().copied().filter(|&r| r < head).collect();
    let mut right: Vec<u32> = requests.iter().copied().filter(|&r| r >= head).collect();
    left.sort_unstable();
    right.sort_unstable();
    (left, right)
}

fn validate(requests: &[u32], head: u32, disk_size: u32) -> Result<(), DiskError> {
    if head >= disk_size {
        return Err(DiskError::HeadOutOfRange { head, disk_size });
    }
    if let Some(&request) = requests.iter().find(|&&r| r >= disk_size) {
        return Err(DiskError::RequestOutOfRange { request, disk_size });
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

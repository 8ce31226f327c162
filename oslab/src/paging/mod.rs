/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Page replacement simulators.
//!
//! Each simulator makes a single pass over a reference string, classifying
//! every reference as a **hit** (page resident) or a **fault** (page not
//! resident), and reports totals plus the hit ratio.
//!
//! # Eviction policies
//! * [`fifo`] — evict the earliest-inserted resident page (queue order).
//! * [`lru`] — evict the resident page with the oldest last-use timestamp.
//! * [`optimal`] — evict the resident page whose next use lies farthest in
//!   the future (Bélády's clairvoyant policy); a lower bound no online
//!   policy can beat.
//!
//! # Tie-breaking
//! Victim selection scans the frame set in its current order and keeps the
//! first strict extremum, so ties go to the page that entered the frame set
//! earliest among the candidates. For LRU a tie is unreachable (every
//! reference writes a distinct timestamp); for Optimal two pages that are
//! both never referenced again genuinely tie and the first in frame order
//! is evicted.

use std::collections::{HashMap, VecDeque};

use thiserror::Error;
use tracing::debug;

// ── Error type ────────────────────────────────────────────────────────────────

/// Precondition failures for the page replacement simulators.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PagingError {
    /// The simulators need at least one frame to hold a resident page.
    #[error("frame count must be positive")]
    ZeroFrames,
}

// ── Result type ───────────────────────────────────────────────────────────────

/// Outcome of one simulation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PagingResult {
    /// References to pages that were not resident.
    pub faults: usize,

    /// References to pages that were already resident.
    pub hits: usize,

    /// `hits / reference string length`, `0.0` for an empty string.
    pub hit_ratio: f64,
}

impl PagingResult {
    fn new(faults: usize, hits: usize, total: usize) -> Self {
        let hit_ratio = if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        };
        Self {
            faults,
            hits,
            hit_ratio,
        }
    }
}

// ── FIFO ──────────────────────────────────────────────────────────────────────

/// First In First Out: on a fault at full capacity, evict the page that has
/// been resident the longest, regardless of how recently it was used.
pub fn fifo(pages: &[u32], frames: usize) -> Result<PagingResult, PagingError> {
    if frames == 0 {
        return Err(PagingError::ZeroFrames);
    }

    let mut resident: VecDeque<u32> = VecDeque::with_capacity(frames);
    let mut faults = 0usize;
    let mut hits = 0usize;

    for &page in pages {
        if resident.contains(&page) {
            hits += 1;
        } else {
            faults += 1;
            if resident.len() == frames {
                resident.pop_front();
            }
            resident.push_back(page);
        }
    }

    debug!(faults, hits, frames, "fifo simulation complete");
    Ok(PagingResult::new(faults, hits, pages.len()))
}

// ── LRU ───────────────────────────────────────────────────────────────────────

/// Least Recently Used: on a fault at full capacity, evict the resident page
/// with the smallest last-use timestamp. The timestamp of the referenced
/// page is refreshed on every reference, hit or fault.
pub fn lru(pages: &[u32], frames: usize) -> Result<PagingResult, PagingError> {
    if frames == 0 {
        return Err(PagingError::ZeroFrames);
    }

    let mut resident: Vec<u32> = Vec::with_capacity(frames);
    let mut last_use: HashMap<u32, usize> = HashMap::new();
    let mut faults = 0usize;
    let mut hits = 0usize;

    for (now, &page) in pages.iter().enumerate() {
        if resident.contains(&page) {
            hits += 1;
        } else {
            faults += 1;
            if resident.len() == frames {
                // First strict minimum in frame order. Every resident page
                // has been referenced, so the last_use lookup cannot miss
                // and timestamps are pairwise distinct.
                let mut victim = 0usize;
                for (slot, p) in resident.iter().enumerate() {
                    if last_use[p] < last_use[&resident[victim]] {
                        victim = slot;
                    }
                }
                resident.remove(victim);
            }
            resident.push(page);
        }
        last_use.insert(page, now);
    }

    debug!(faults, hits, frames, "lru simulation complete");
    Ok(PagingResult::new(faults, hits, pages.len()))
}

// ── Optimal ───────────────────────────────────────────────────────────────────

/// Bélády's Optimal policy: on a fault at full capacity, evict the resident
/// page whose next reference lies farthest in the remaining suffix, treating
/// "never referenced again" as infinitely far.
///
/// Each eviction performs a forward scan of the suffix per resident page.
/// Quadratic-ish over the whole string, which is fine at demonstration
/// scale; the eviction decisions are what must stay exact.
pub fn optimal(pages: &[u32], frames: usize) -> Result<PagingResult, PagingError> {
    if frames == 0 {
        return Err(PagingError::ZeroFrames);
    }

    let mut resident: Vec<u32> = Vec::with_capacity(frames);
    let mut faults = 0usize;
    let mut hits = 0usize;

    for (now, &page) in pages.iter().enumerate() {
        if resident.contains(&page) {
            hits += 1;
        } else {
            faults += 1;
            if resident.len() == frames {
                let suffix = &pages[now + 1..];
                // First strict maximum in frame order; usize::MAX stands in
                // for "never referenced again"
                let next_use = |p: u32| -> usize {
                    suffix
                        .iter()
                        .position(|&q| q == p)
                        .unwrap_or(usize::MAX)
                };
                let mut victim = 0usize;
                let mut victim_dist = next_use(resident[0]);
                for (slot, &p) in resident.iter().enumerate().skip(1) {
                    let dist = next_use(p);
                    if dist > victim_dist {
                        victim = slot;
                        victim_dist = dist;
                    }
                }
                resident.remove(victim);
            }
            resident.push(page);
        }
    }

    debug!(faults, hits, frames, "optimal simulation complete");
    Ok(PagingResult::new(faults, hits, pages.len()))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// The canonical 20-reference sample string.
    fn sample() -> Vec<u32> {
        vec![7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2, 1, 2, 0, 1, 7, 0, 1]
    }

    // ── Canonical results with three frames ───────────────────────────────────

    #[test]
    fn fifo_canonical_sample() {
        let r = fifo(&sample(), 3).unwrap();
        assert_eq!(r.faults, 15);
        assert_eq!(r.hits, 5);
        assert!((r.hit_ratio - 0.25).abs() < 1e-9);
    }

    #[test]
    fn lru_canonical_sample() {
        let r = lru(&sample(), 3).unwrap();
        assert_eq!(r.faults, 12);
        assert_eq!(r.hits, 8);
        assert!((r.hit_ratio - 0.40).abs() < 1e-9);
    }

    #[test]
    fn optimal_canonical_sample() {
        let r = optimal(&sample(), 3).unwrap();
        assert_eq!(r.faults, 9);
        assert_eq!(r.hits, 11);
        assert!((r.hit_ratio - 0.55).abs() < 1e-9);
    }

    #[test]
    fn optimal_never_beats_optimal() {
        // Optimal is a lower bound on faults for any policy
        let s = sample();
        let opt = optimal(&s, 3).unwrap().faults;
        assert!(opt <= fifo(&s, 3).unwrap().faults);
        assert!(opt <= lru(&s, 3).unwrap().faults);
    }

    // ── Counting laws ─────────────────────────────────────────────────────────

    #[test]
    fn hits_plus_faults_cover_reference_string() {
        let s = sample();
        for r in [
            fifo(&s, 3).unwrap(),
            lru(&s, 3).unwrap(),
            optimal(&s, 3).unwrap(),
        ] {
            assert_eq!(r.hits + r.faults, s.len());
        }
    }

    #[test]
    fn hit_and_fault_ratios_sum_to_one() {
        let s = sample();
        let r = lru(&s, 3).unwrap();
        let fault_ratio = r.faults as f64 / s.len() as f64;
        assert!((r.hit_ratio + fault_ratio - 1.0).abs() < 1e-9);
    }

    // ── Enough frames: one fault per distinct page ────────────────────────────

    #[test]
    fn fifo_enough_frames_faults_once_per_distinct_page() {
        let s = sample();
        let distinct = {
            let mut v = s.clone();
            v.sort_unstable();
            v.dedup();
            v.len()
        };
        let r = fifo(&s, distinct).unwrap();
        assert_eq!(r.faults, distinct);
    }

    #[test]
    fn optimal_enough_frames_matches_fifo() {
        let s = sample();
        let f = fifo(&s, 8).unwrap();
        let o = optimal(&s, 8).unwrap();
        assert_eq!(f, o);
    }

    // ── Edge cases ────────────────────────────────────────────────────────────

    #[test]
    fn empty_reference_string_has_zero_ratio() {
        let r = fifo(&[], 3).unwrap();
        assert_eq!(r.faults, 0);
        assert_eq!(r.hits, 0);
        assert_eq!(r.hit_ratio, 0.0);
    }

    #[test]
    fn single_frame_faults_on_every_alternation() {
        let r = lru(&[1, 2, 1, 2, 1, 2], 1).unwrap();
        assert_eq!(r.faults, 6);
        assert_eq!(r.hits, 0);
    }

    #[test]
    fn repeated_single_page_hits_after_first_touch() {
        let r = fifo(&[9, 9, 9, 9], 2).unwrap();
        assert_eq!(r.faults, 1);
        assert_eq!(r.hits, 3);
    }

    #[test]
    fn lru_evicts_least_recent_not_oldest_insertion() {
        // [1,2,3] resident; touching 1 makes 2 the LRU victim when 4 arrives
        let r = lru(&[1, 2, 3, 1, 4, 2], 3).unwrap();
        // 1F 2F 3F 1H 4F(evict 2) 2F(evict 3)
        assert_eq!(r.faults, 5);
        assert_eq!(r.hits, 1);
    }

    #[test]
    fn optimal_keeps_pages_needed_soonest() {
        // At the fault on 4, page 3 is needed after 1 and 2 — never, so 3 goes
        let r = optimal(&[1, 2, 3, 4, 1, 2], 3).unwrap();
        // 1F 2F 3F 4F(evict 3) 1H 2H
        assert_eq!(r.faults, 4);
        assert_eq!(r.hits, 2);
    }

    #[test]
    fn optimal_all_distinct_pages_fault_every_time() {
        let r = optimal(&[1, 2, 3, 4, 5], 2).unwrap();
        assert_eq!(r.faults, 5);
        assert_eq!(r.hits, 0);
    }

    // ── Preconditions ─────────────────────────────────────────────────────────

    #[test]
    fn zero_frames_is_rejected() {
        assert_eq!(fifo(&[1], 0).unwrap_err(), PagingError::ZeroFrames);
        assert_eq!(lru(&[1], 0).unwrap_err(), PagingError::ZeroFrames);
        assert_eq!(optimal(&[1], 0).unwrap_err(), PagingError::ZeroFrames);
    }
}

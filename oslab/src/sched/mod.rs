//! CPU scheduling calculators.
//!
//! Four classic algorithms over one immutable process list. All processes
//! are modelled as arriving at time zero, so every algorithm reduces to
//! computing per-process waiting times; turnaround is always waiting plus
//! burst.
//!
//! | Algorithm | Execution order | Waiting time |
//! |---|---|---|
//! | [`fcfs`] | input order | prefix sums of earlier bursts |
//! | [`sjf`] | burst ascending, stable | FCFS recurrence over sorted order |
//! | [`round_robin`] | FIFO queue, fixed quantum | completion clock − burst |
//! | [`priority`] | priority ascending, stable | FCFS recurrence over sorted order |
//!
//! SJF and Priority are the same computation with a different sort key, so
//! both delegate to one private sort-scatter helper: stable-sort the
//! original indices by key, run the FCFS recurrence over the sorted order,
//! and scatter the results back into original-index positions.

pub mod error;

pub use error::SchedError;

use std::collections::VecDeque;

use tracing::debug;

use crate::process::{Process, ScheduleResult};

// ── Validation ────────────────────────────────────────────────────────────────

/// Shared precondition gate: a non-empty list of processes with non-zero
/// bursts. Runs before any algorithm touches its working state.
fn validate(processes: &[Process]) -> Result<(), SchedError> {
    if processes.is_empty() {
        return Err(SchedError::NoProcesses);
    }
    if let Some(p) = processes.iter().find(|p| p.burst == 0) {
        return Err(SchedError::ZeroBurst { id: p.id.clone() });
    }
    Ok(())
}

// ── FCFS ──────────────────────────────────────────────────────────────────────

/// First Come First Serve: processes execute in input order.
///
/// `waiting[0] = 0`; each later process waits for the sum of all earlier
/// bursts.
///
/// # Example
/// ```
/// use oslab::process::Process;
/// use oslab::sched;
///
/// let ps = vec![Process::new("P1", 5, 0), Process::new("P2", 3, 0)];
/// let r = sched::fcfs(&ps).unwrap();
/// assert_eq!(r.waiting, vec![0, 5]);
/// assert_eq!(r.turnaround, vec![5, 8]);
/// ```
pub fn fcfs(processes: &[Process]) -> Result<ScheduleResult, SchedError> {
    validate(processes)?;

    let n = processes.len();
    let mut waiting = vec![0u64; n];
    for i in 1..n {
        waiting[i] = waiting[i - 1] + processes[i - 1].burst;
    }

    let turnaround = turnaround_from(processes, &waiting);

    debug!(process_count = n, "fcfs complete");
    Ok(ScheduleResult::from_times(waiting, turnaround, None))
}

// ── SJF / Priority ────────────────────────────────────────────────────────────

/// Shortest Job First (non-preemptive): burst time ascending, ties broken
/// by original index (stable sort). Reports the execution order of ids.
pub fn sjf(processes: &[Process]) -> Result<ScheduleResult, SchedError> {
    validate(processes)?;
    debug!(process_count = processes.len(), "sjf");
    Ok(schedule_by_key(processes, |p| p.burst))
}

/// Priority scheduling (non-preemptive): priority ascending (lower value =
/// higher priority), ties broken by original index (stable sort). Reports
/// the execution order of ids.
pub fn priority(processes: &[Process]) -> Result<ScheduleResult, SchedError> {
    validate(processes)?;
    debug!(process_count = processes.len(), "priority");
    Ok(schedule_by_key(processes, |p| p.priority))
}

/// Sort-scatter core shared by [`sjf`] and [`priority`].
///
/// Stable-sorts the original indices by `key`, applies the FCFS waiting-time
/// recurrence over the sorted order, and scatters each waiting time back to
/// its original index. The caller has already validated the process list.
fn schedule_by_key<K: Ord>(
    processes: &[Process],
    key: impl Fn(&Process) -> K,
) -> ScheduleResult {
    let n = processes.len();

    let mut order: Vec<usize> = (0..n).collect();
    // sort_by_key is stable: equal keys keep ascending original index
    order.sort_by_key(|&i| key(&processes[i]));

    let mut waiting = vec![0u64; n];
    for k in 1..n {
        waiting[order[k]] = waiting[order[k - 1]] + processes[order[k - 1]].burst;
    }

    let turnaround = turnaround_from(processes, &waiting);
    let ids = order.iter().map(|&i| processes[i].id.clone()).collect();

    ScheduleResult::from_times(waiting, turnaround, Some(ids))
}

// ── Round Robin ───────────────────────────────────────────────────────────────

/// Round Robin with a fixed time `quantum`.
///
/// A FIFO ready queue starts with all process indices in input order. Each
/// dequeued process runs for at most one quantum; if work remains it goes to
/// the tail, otherwise its waiting time is the completion clock minus its
/// burst. Terminates because total remaining work strictly decreases on
/// every dequeue.
pub fn round_robin(processes: &[Process], quantum: u64) -> Result<ScheduleResult, SchedError> {
    validate(processes)?;
    if quantum == 0 {
        return Err(SchedError::ZeroQuantum);
    }

    let n = processes.len();
    let mut remaining: Vec<u64> = processes.iter().map(|p| p.burst).collect();
    let mut waiting = vec![0u64; n];
    let mut clock = 0u64;
    let mut queue: VecDeque<usize> = (0..n).collect();

    while let Some(i) = queue.pop_front() {
        if remaining[i] > quantum {
            clock += quantum;
            remaining[i] -= quantum;
            queue.push_back(i);
        } else {
            clock += remaining[i];
            remaining[i] = 0;
            // completion time minus total service time = time spent waiting
            waiting[i] = clock - processes[i].burst;
        }
    }

    let turnaround = turnaround_from(processes, &waiting);

    debug!(process_count = n, quantum, final_clock = clock, "round robin complete");
    Ok(ScheduleResult::from_times(waiting, turnaround, None))
}

// ── Shared helpers ────────────────────────────────────────────────────────────

/// `turnaround[i] = waiting[i] + burst[i]`, by original index.
fn turnaround_from(processes: &[Process], waiting: &[u64]) -> Vec<u64> {
    processes
        .iter()
        .zip(waiting)
        .map(|(p, &w)| w + p.burst)
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// The canonical four-process sample: P1(5,2) P2(3,1) P3(8,3) P4(6,2).
    fn sample() -> Vec<Process> {
        vec![
            Process::new("P1", 5, 2),
            Process::new("P2", 3, 1),
            Process::new("P3", 8, 3),
            Process::new("P4", 6, 2),
        ]
    }

    // ── FCFS ──────────────────────────────────────────────────────────────────

    #[test]
    fn fcfs_first_process_never_waits() {
        let r = fcfs(&sample()).unwrap();
        assert_eq!(r.waiting[0], 0);
    }

    #[test]
    fn fcfs_turnaround_is_waiting_plus_burst() {
        let ps = sample();
        let r = fcfs(&ps).unwrap();
        for (i, p) in ps.iter().enumerate() {
            assert_eq!(r.turnaround[i], r.waiting[i] + p.burst);
        }
    }

    #[test]
    fn fcfs_canonical_sample() {
        let r = fcfs(&sample()).unwrap();
        assert_eq!(r.waiting, vec![0, 5, 8, 16]);
        assert_eq!(r.turnaround, vec![5, 8, 16, 22]);
        assert!((r.avg_waiting - 7.25).abs() < 1e-9);
        assert!((r.avg_turnaround - 12.75).abs() < 1e-9);
        assert!(r.order.is_none());
    }

    #[test]
    fn fcfs_single_process() {
        let r = fcfs(&[Process::new("only", 7, 0)]).unwrap();
        assert_eq!(r.waiting, vec![0]);
        assert_eq!(r.turnaround, vec![7]);
        assert_eq!(r.avg_waiting, 0.0);
    }

    // ── SJF ───────────────────────────────────────────────────────────────────

    #[test]
    fn sjf_canonical_sample() {
        let r = sjf(&sample()).unwrap();
        // Execution order: P2(3) P1(5) P4(6) P3(8)
        assert_eq!(
            r.order.as_deref().unwrap(),
            ["P2", "P1", "P4", "P3"]
        );
        assert_eq!(r.waiting, vec![3, 0, 14, 8]);
        assert_eq!(r.turnaround, vec![8, 3, 22, 14]);
        assert!((r.avg_waiting - 6.25).abs() < 1e-9);
    }

    #[test]
    fn sjf_presorted_matches_fcfs() {
        // Bursts already ascending — SJF must reproduce FCFS times exactly
        let ps = vec![
            Process::new("a", 2, 0),
            Process::new("b", 4, 0),
            Process::new("c", 9, 0),
        ];
        let s = sjf(&ps).unwrap();
        let f = fcfs(&ps).unwrap();
        assert_eq!(s.waiting, f.waiting);
        assert_eq!(s.turnaround, f.turnaround);
        assert_eq!(s.order.as_deref().unwrap(), ["a", "b", "c"]);
    }

    #[test]
    fn sjf_equal_bursts_keep_input_order() {
        let ps = vec![
            Process::new("x", 4, 0),
            Process::new("y", 4, 0),
            Process::new("z", 4, 0),
        ];
        let r = sjf(&ps).unwrap();
        assert_eq!(r.order.as_deref().unwrap(), ["x", "y", "z"]);
        assert_eq!(r.waiting, vec![0, 4, 8]);
    }

    // ── Priority ──────────────────────────────────────────────────────────────

    #[test]
    fn priority_canonical_sample() {
        let r = priority(&sample()).unwrap();
        // Priorities: P2(1), then P1(2) and P4(2) in input order, then P3(3)
        assert_eq!(
            r.order.as_deref().unwrap(),
            ["P2", "P1", "P4", "P3"]
        );
        assert_eq!(r.waiting, vec![3, 0, 14, 8]);
        assert!((r.avg_waiting - 6.25).abs() < 1e-9);
    }

    #[test]
    fn priority_presorted_matches_fcfs() {
        let ps = vec![
            Process::new("a", 6, 1),
            Process::new("b", 2, 2),
            Process::new("c", 5, 3),
        ];
        let p = priority(&ps).unwrap();
        let f = fcfs(&ps).unwrap();
        assert_eq!(p.waiting, f.waiting);
        assert_eq!(p.turnaround, f.turnaround);
    }

    #[test]
    fn priority_negative_values_rank_highest() {
        let ps = vec![
            Process::new("low", 3, 5),
            Process::new("high", 4, -1),
        ];
        let r = priority(&ps).unwrap();
        assert_eq!(r.order.as_deref().unwrap(), ["high", "low"]);
        assert_eq!(r.waiting, vec![4, 0]);
    }

    // ── Round Robin ───────────────────────────────────────────────────────────

    #[test]
    fn round_robin_canonical_sample() {
        let r = round_robin(&sample(), 2).unwrap();
        assert_eq!(r.waiting, vec![11, 8, 14, 14]);
        assert_eq!(r.turnaround, vec![16, 11, 22, 20]);
        assert!((r.avg_waiting - 11.75).abs() < 1e-9);
        assert!((r.avg_turnaround - 17.25).abs() < 1e-9);
    }

    #[test]
    fn round_robin_large_quantum_reduces_to_fcfs() {
        // Quantum ≥ max burst: every process finishes in its first slice,
        // so waiting times collapse to the FCFS prefix sums
        let ps = sample();
        let rr = round_robin(&ps, 8).unwrap();
        let f = fcfs(&ps).unwrap();
        assert_eq!(rr.waiting, f.waiting);
        assert_eq!(rr.turnaround, f.turnaround);
    }

    #[test]
    fn round_robin_quantum_one_still_terminates() {
        let r = round_robin(&sample(), 1).unwrap();
        // Total work is 22 time units regardless of quantum
        let max_turnaround = r.turnaround.iter().max().copied().unwrap();
        assert_eq!(max_turnaround, 22);
    }

    // ── Preconditions ─────────────────────────────────────────────────────────

    #[test]
    fn empty_process_list_is_rejected() {
        assert_eq!(fcfs(&[]).unwrap_err(), SchedError::NoProcesses);
        assert_eq!(sjf(&[]).unwrap_err(), SchedError::NoProcesses);
        assert_eq!(priority(&[]).unwrap_err(), SchedError::NoProcesses);
        assert_eq!(round_robin(&[], 2).unwrap_err(), SchedError::NoProcesses);
    }

    #[test]
    fn zero_burst_is_rejected_with_offending_id() {
        let ps = vec![Process::new("ok", 3, 0), Process::new("bad", 0, 0)];
        assert_eq!(
            fcfs(&ps).unwrap_err(),
            SchedError::ZeroBurst { id: "bad".into() }
        );
    }

    #[test]
    fn zero_quantum_is_rejected() {
        assert_eq!(
            round_robin(&sample(), 0).unwrap_err(),
            SchedError::ZeroQuantum
        );
    }
}

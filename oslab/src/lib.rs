/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! oslab – classic operating-systems algorithm demonstrations.
//!
//! Four independent calculator modules, each a leaf with no dependency on
//! the others, plus a thin presentation layer:
//!
//! ```text
//! lib.rs
//! ├── process   – Process and ScheduleResult data types
//! ├── sched/    – CPU scheduling (FCFS, SJF, Round Robin, Priority)
//! ├── paging/   – page replacement (FIFO, LRU, Optimal)
//! ├── banker/   – deadlock avoidance (Banker's algorithm)
//! ├── disk/     – disk-seek scheduling (FCFS, SCAN, C-SCAN)
//! ├── config/   – optional YAML override of the sample datasets
//! └── demo/     – sample datasets + formatted console reports
//! ```
//!
//! Every calculator is a pure, deterministic, single-pass function over data
//! owned by its caller; the one stateful type ([`banker::Banker`]) applies
//! requests transactionally so no exit path observes a half-applied state.

pub mod banker;
pub mod config;
pub mod demo;
pub mod disk;
pub mod paging;
pub mod process;
pub mod sched;

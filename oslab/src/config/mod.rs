//! Sample-dataset configuration.
//!
//! Every demonstration runs against an embedded canonical dataset; an
//! optional YAML file can override any subset of the parameters. Missing
//! sections and fields fall back to their embedded defaults, so a partial
//! file like
//!
//! ```yaml
//! sched:
//!   quantum: 4
//! disk:
//!   head: 100
//! ```
//!
//! only changes the Round Robin quantum and the disk head position.
//!
//! The expected full structure is:
//! ```yaml
//! sched:
//!   quantum: 2
//!   processes:
//!     - { id: P1, burst: 5, priority: 2 }
//! paging:
//!   frames: 3
//!   reference_string: [7, 0, 1, 2, 0, 3]
//! banker:
//!   available: [3, 3, 2]
//!   maximum: [[7, 5, 3], [3, 2, 2]]
//!   allocation: [[0, 1, 0], [2, 0, 0]]
//!   request: { process: 1, resources: [1, 0, 2] }
//! disk:
//!   requests: [98, 183, 37]
//!   head: 53
//!   disk_size: 200
//!   direction: right
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::disk::Direction;
use crate::process::Process;

// ── Top level ─────────────────────────────────────────────────────────────────

/// All four demonstration datasets.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    pub sched: SchedConfig,
    pub paging: PagingConfig,
    pub banker: BankerConfig,
    pub disk: DiskConfig,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            sched: SchedConfig::default(),
            paging: PagingConfig::default(),
            banker: BankerConfig::default(),
            disk: DiskConfig::default(),
        }
    }
}

impl LabConfig {
    /// Parse `path` as a YAML override of the embedded sample datasets.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if the YAML is
    /// structurally invalid. Value-level validation (zero quantum, requests
    /// beyond the disk, …) is left to the calculators so that config errors
    /// and algorithm preconditions surface through the same typed paths.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot open configuration file: {}", path.display()))?;

        let config: LabConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML file: {}", path.display()))?;

        info!("Loaded sample-data overrides from: {}", path.display());
        Ok(config)
    }
}

// ── Scheduling section ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SchedConfig {
    /// Process list fed to all four CPU scheduling algorithms.
    pub processes: Vec<Process>,

    /// Round Robin time quantum.
    pub quantum: u64,
}

impl Default for SchedConfig {
    fn default() -> Self {
        Self {
            processes: vec![
                Process::new("P1", 5, 2),
                Process::new("P2", 3, 1),
                Process::new("P3", 8, 3),
                Process::new("P4", 6, 2),
            ],
            quantum: 2,
        }
    }
}

// ── Paging section ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PagingConfig {
    /// Page reference string fed to all three simulators.
    pub reference_string: Vec<u32>,

    /// Number of frames available to hold resident pages.
    pub frames: usize,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            reference_string: vec![7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2, 1, 2, 0, 1, 7, 0, 1],
            frames: 3,
        }
    }
}

// ── Banker section ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BankerConfig {
    pub available: Vec<u64>,
    pub maximum: Vec<Vec<u64>>,
    pub allocation: Vec<Vec<u64>>,

    /// The sample resource request tried after the initial safety check.
    pub request: RequestConfig,
}

/// One resource request: which process asks, and for how much of each
/// resource type.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestConfig {
    pub process: usize,
    pub resources: Vec<u64>,
}

impl Default for BankerConfig {
    fn default() -> Self {
        Self {
            available: vec![3, 3, 2],
            maximum: vec![
                vec![7, 5, 3],
                vec![3, 2, 2],
                vec![9, 0, 2],
                vec![2, 2, 2],
                vec![4, 3, 3],
            ],
            allocation: vec![
                vec![0, 1, 0],
                vec![2, 0, 0],
                vec![3, 0, 2],
                vec![2, 1, 1],
                vec![0, 0, 2],
            ],
            request: RequestConfig {
                process: 1,
                resources: vec![1, 0, 2],
            },
        }
    }
}

// ── Disk section ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DiskConfig {
    /// Cylinder request queue, serviced by all three algorithms.
    pub requests: Vec<u32>,

    /// Initial head position.
    pub head: u32,

    /// Number of cylinders; valid positions are `0..disk_size`.
    pub disk_size: u32,

    /// Initial sweep direction for SCAN.
    pub direction: Direction,
}

impl Default for DiskConfig {
    fn default() -> Self {
        Self {
            requests: vec![98, 183, 37, 122, 14, 124, 65, 67],
            head: 53,
            disk_size: 200,
            direction: Direction::Right,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper: write a YAML string to a temp file and return it.
    fn yaml_tempfile(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    // ── Embedded defaults ─────────────────────────────────────────────────────

    #[test]
    fn defaults_carry_the_canonical_datasets() {
        let cfg = LabConfig::default();
        assert_eq!(cfg.sched.processes.len(), 4);
        assert_eq!(cfg.sched.quantum, 2);
        assert_eq!(cfg.paging.reference_string.len(), 20);
        assert_eq!(cfg.paging.frames, 3);
        assert_eq!(cfg.banker.available, vec![3, 3, 2]);
        assert_eq!(cfg.banker.maximum.len(), 5);
        assert_eq!(cfg.banker.request.process, 1);
        assert_eq!(cfg.disk.requests.len(), 8);
        assert_eq!(cfg.disk.head, 53);
        assert_eq!(cfg.disk.disk_size, 200);
        assert_eq!(cfg.disk.direction, Direction::Right);
    }

    #[test]
    fn default_banker_matrices_are_consistent() {
        let cfg = LabConfig::default();
        assert_eq!(cfg.banker.maximum.len(), cfg.banker.allocation.len());
        for (max_row, alloc_row) in cfg.banker.maximum.iter().zip(&cfg.banker.allocation) {
            assert_eq!(max_row.len(), cfg.banker.available.len());
            assert_eq!(alloc_row.len(), cfg.banker.available.len());
        }
    }

    // ── Loading ───────────────────────────────────────────────────────────────

    #[test]
    fn full_file_overrides_everything() {
        let yaml = r#"
sched:
  quantum: 4
  processes:
    - { id: A, burst: 1, priority: 1 }
    - { id: B, burst: 2, priority: 2 }
paging:
  frames: 4
  reference_string: [1, 2, 3]
banker:
  available: [1]
  maximum: [[1]]
  allocation: [[0]]
  request: { process: 0, resources: [1] }
disk:
  requests: [5, 6]
  head: 0
  disk_size: 10
  direction: left
"#;
        let f = yaml_tempfile(yaml);
        let cfg = LabConfig::load_from_file(f.path()).unwrap();

        assert_eq!(cfg.sched.quantum, 4);
        assert_eq!(cfg.sched.processes.len(), 2);
        assert_eq!(cfg.sched.processes[0].id, "A");
        assert_eq!(cfg.paging.frames, 4);
        assert_eq!(cfg.paging.reference_string, vec![1, 2, 3]);
        assert_eq!(cfg.banker.available, vec![1]);
        assert_eq!(cfg.banker.request.resources, vec![1]);
        assert_eq!(cfg.disk.requests, vec![5, 6]);
        assert_eq!(cfg.disk.direction, Direction::Left);
    }

    #[test]
    fn partial_file_keeps_defaults_elsewhere() {
        let yaml = "sched:\n  quantum: 7\n";
        let f = yaml_tempfile(yaml);
        let cfg = LabConfig::load_from_file(f.path()).unwrap();

        assert_eq!(cfg.sched.quantum, 7);
        // Everything else is untouched
        assert_eq!(cfg.sched.processes.len(), 4);
        assert_eq!(cfg.paging.frames, 3);
        assert_eq!(cfg.disk.head, 53);
    }

    #[test]
    fn missing_file_returns_error() {
        let result = LabConfig::load_from_file(Path::new("/nonexistent/oslab.yaml"));
        assert!(result.is_err());
    }

    #[test]
    fn malformed_yaml_returns_error() {
        let f = yaml_tempfile("this is: not: valid: yaml: content:::");
        assert!(LabConfig::load_from_file(f.path()).is_err());
    }

    #[test]
    fn direction_parses_lowercase_names() {
        let yaml = "disk:\n  direction: left\n";
        let f = yaml_tempfile(yaml);
        let cfg = LabConfig::load_from_file(f.path()).unwrap();
        assert_eq!(cfg.disk.direction, Direction::Left);
    }
}

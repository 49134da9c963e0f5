//! Process model.
//!
//! A process is the unit of work handed to a simulator: it becomes ready
//! at its arrival time and needs its burst time of CPU service to finish.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).
//! The caller defines what a tick means (ms, cycles, abstract units).

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Immutable from the simulator's point of view. The position of a process
/// in the caller's slice is its *input index*, which breaks ties between
/// otherwise equal candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Opaque identifier, passed through to results. May be empty.
    #[serde(default)]
    pub id: String,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU ticks required to complete.
    pub burst_time: i64,
}

impl Process {
    /// Creates an anonymous process.
    pub fn new(arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id: String::new(),
            arrival_time,
            burst_time,
        }
    }

    /// Sets the identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Returns the identifier, or `P{index}` for anonymous processes.
    pub fn label(&self, index: usize) -> String {
        if self.id.is_empty() {
            format!("P{index}")
        } else {
            self.id.clone()
        }
    }
}

/// Builds anonymous processes from `(arrival, burst)` pairs.
///
/// ```
/// use u_cpusched::models::processes_from_pairs;
///
/// let procs = processes_from_pairs(&[(0, 5), (1, 3)]);
/// assert_eq!(procs[1].arrival_time, 1);
/// assert_eq!(procs[1].burst_time, 3);
/// ```
pub fn processes_from_pairs(pairs: &[(i64, i64)]) -> Vec<Process> {
    pairs
        .iter()
        .map(|&(arrival, burst)| Process::new(arrival, burst))
        .collect()
}

//! Per-run working state.
//!
//! A [`ProcessTable`] is built from the caller's processes at the start of
//! every simulation run and owned exclusively by that run. It is turned
//! into [`ProcessRecord`]s once every process has completed.

use serde::{Deserialize, Serialize};

use super::Process;

/// Working copy of one process inside a simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimProcess {
    /// Position of the process in the caller's input.
    pub index: usize,
    /// Arrival tick (copied, never modified).
    pub arrival_time: i64,
    /// Burst length (copied, never modified).
    pub burst_time: i64,
    /// CPU ticks still owed. Starts at `burst_time`.
    pub remaining_time: i64,
    /// First dispatch tick. Set once.
    pub start_time: Option<i64>,
    /// Completion tick. Set once.
    pub completion_time: Option<i64>,
}

impl SimProcess {
    fn from_process(index: usize, process: &Process) -> Self {
        Self {
            index,
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            remaining_time: process.burst_time,
            start_time: None,
            completion_time: None,
        }
    }

    /// Records the first dispatch. Later dispatches leave `start_time` alone.
    ///
    /// Returns `true` if this was the first dispatch.
    pub fn dispatch(&mut self, now: i64) -> bool {
        if self.start_time.is_some() {
            return false;
        }
        self.start_time = Some(now);
        true
    }

    /// Consumes up to `quantum` ticks of remaining work and returns the
    /// ticks actually used.
    pub fn execute(&mut self, quantum: i64) -> i64 {
        let slice = self.remaining_time.min(quantum);
        self.remaining_time -= slice;
        slice
    }

    /// Marks the process finished at `now`.
    pub fn complete(&mut self, now: i64) {
        debug_assert!(self.start_time.is_some(), "completed before dispatch");
        debug_assert!(self.completion_time.is_none(), "completed twice");
        debug_assert_eq!(self.remaining_time, 0, "completed with work left");
        self.completion_time = Some(now);
    }

    /// Whether the process has finished.
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.completion_time.is_some()
    }

    /// Whether the process has arrived by `now`.
    #[inline]
    pub fn has_arrived(&self, now: i64) -> bool {
        self.arrival_time <= now
    }
}

/// Final timing of one process, with derived per-process quantities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Identifier passed through from the input (`P{index}` when empty).
    pub id: String,
    /// Position in the caller's input.
    pub index: usize,
    /// Arrival tick.
    pub arrival_time: i64,
    /// Burst length.
    pub burst_time: i64,
    /// First dispatch tick.
    pub start_time: i64,
    /// Completion tick.
    pub completion_time: i64,
}

impl ProcessRecord {
    /// Time in system: completion - arrival.
    #[inline]
    pub fn turnaround(&self) -> i64 {
        self.completion_time - self.arrival_time
    }

    /// Time spent ready but not running: turnaround - burst.
    #[inline]
    pub fn waiting(&self) -> i64 {
        self.turnaround() - self.burst_time
    }

    /// Latency to first execution: start - arrival.
    #[inline]
    pub fn response(&self) -> i64 {
        self.start_time - self.arrival_time
    }
}

/// Working copies of every process for one simulation run.
///
/// Indexed by input position. Never shared between runs.
#[derive(Debug, Clone)]
pub struct ProcessTable {
    procs: Vec<SimProcess>,
}

impl ProcessTable {
    /// Copies the input and resets all simulation-local fields.
    pub fn from_processes(processes: &[Process]) -> Self {
        Self {
            procs: processes
                .iter()
                .enumerate()
                .map(|(i, p)| SimProcess::from_process(i, p))
                .collect(),
        }
    }

    /// Number of processes.
    #[inline]
    pub fn len(&self) -> usize {
        self.procs.len()
    }

    /// Whether the table is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.procs.is_empty()
    }

    /// Iterates working copies in input order.
    pub fn iter(&self) -> impl Iterator<Item = &SimProcess> {
        self.procs.iter()
    }

    /// Input indices ordered by arrival time, ties by input index.
    ///
    /// `sort_by_key` is stable, so equal arrivals keep input order.
    pub fn arrival_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.procs.len()).collect();
        order.sort_by_key(|&i| self.procs[i].arrival_time);
        order
    }

    /// Sum of remaining work across all processes.
    pub fn total_remaining(&self) -> i64 {
        self.procs.iter().map(|p| p.remaining_time).sum()
    }

    /// Whether every process has completed.
    pub fn all_completed(&self) -> bool {
        self.procs.iter().all(SimProcess::is_completed)
    }

    /// Converts the finished table into records, in input order.
    ///
    /// # Panics
    /// If any process was never dispatched or never completed. That can
    /// only happen through a bookkeeping defect in a simulator.
    pub fn into_records(self, processes: &[Process]) -> Vec<ProcessRecord> {
        self.procs
            .into_iter()
            .map(|sp| {
                let (Some(start_time), Some(completion_time)) = (sp.start_time, sp.completion_time)
                else {
                    panic!("process {} did not run to completion", sp.index);
                };
                ProcessRecord {
                    id: processes[sp.index].label(sp.index),
                    index: sp.index,
                    arrival_time: sp.arrival_time,
                    burst_time: sp.burst_time,
                    start_time,
                    completion_time,
                }
            })
            .collect()
    }
}

impl std::ops::Index<usize> for ProcessTable {
    type Output = SimProcess;

    fn index(&self, index: usize) -> &SimProcess {
        &self.procs[index]
    }
}

impl std::ops::IndexMut<usize> for ProcessTable {
    fn index_mut(&mut self, index: usize) -> &mut SimProcess {
        &mut self.procs[index]
    }
}

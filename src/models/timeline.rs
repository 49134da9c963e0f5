//! Execution timeline (Gantt chart).
//!
//! Every dispatch of a process onto the CPU is recorded as a [`Slice`].
//! Gaps between slices are idle CPU time.

use serde::{Deserialize, Serialize};

/// One contiguous stretch of CPU time given to a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Input index of the process.
    pub process: usize,
    /// Tick the slice starts.
    pub start: i64,
    /// Tick the slice ends (exclusive).
    pub end: i64,
}

impl Slice {
    /// Length in ticks.
    #[inline]
    pub fn len(&self) -> i64 {
        self.end - self.start
    }

    /// Whether the slice covers no time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Ordered record of dispatches for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Slices in dispatch order. Non-overlapping, ascending by start.
    pub slices: Vec<Slice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice. Slices must be pushed in time order.
    pub fn push(&mut self, process: usize, start: i64, end: i64) {
        debug_assert!(
            self.slices.last().map_or(true, |s| s.end <= start),
            "overlapping slice"
        );
        self.slices.push(Slice {
            process,
            start,
            end,
        });
    }

    /// Tick at which the last slice ends (0 if empty).
    pub fn makespan(&self) -> i64 {
        self.slices.last().map_or(0, |s| s.end)
    }

    /// Total ticks the CPU was running something.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(Slice::len).sum()
    }

    /// Total ticks the CPU was idle between t=0 and the makespan.
    pub fn idle_time(&self) -> i64 {
        self.makespan() - self.busy_time()
    }

    /// Number of times the CPU switched to a different process.
    ///
    /// The first dispatch is not a switch; consecutive slices of the same
    /// process are not switches either.
    pub fn context_switches(&self) -> usize {
        self.slices
            .windows(2)
            .filter(|w| w[0].process != w[1].process)
            .count()
    }

    /// Slices belonging to one process.
    pub fn slices_for(&self, process: usize) -> impl Iterator<Item = &Slice> {
        self.slices.iter().filter(move |s| s.process == process)
    }

    /// Number of dispatches.
    #[inline]
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether nothing was dispatched.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

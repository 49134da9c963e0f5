//! Round Robin.
//!
//! # Algorithm
//!
//! Processes wait in a FIFO ready queue and receive at most one quantum of
//! CPU per turn.
//!
//! 1. If the queue is empty, fast-forward to the next arrival and enqueue it.
//! 2. Dequeue the head; record its start on first dispatch.
//! 3. Run it for `min(remaining, quantum)` ticks.
//! 4. Enqueue every process that arrived by the end of the slice.
//! 5. Re-enqueue the preempted process at the tail, or mark it complete.
//!
//! Step 4 before step 5 puts processes arriving exactly at the end of a
//! slice ahead of the process that was just preempted.
//!
//! # Complexity
//! O(n log n + Σ ceil(burst / quantum)).

use std::collections::VecDeque;

use super::{Policy, SimulationOutcome};
use crate::metrics::Metrics;
use crate::models::{Process, ProcessTable, Timeline};

/// FIFO of input indices waiting for the CPU. Lives for one run.
#[derive(Debug, Default)]
struct ReadyQueue {
    inner: VecDeque<usize>,
}

impl ReadyQueue {
    fn push(&mut self, idx: usize, now: i64) {
        log::trace!("RR: t={now} enqueue P{idx}");
        self.inner.push_back(idx);
    }

    fn pop(&mut self) -> Option<usize> {
        self.inner.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// Cursor over processes in arrival order that have not been enqueued yet.
struct Arrivals {
    order: Vec<usize>,
    next: usize,
}

impl Arrivals {
    fn new(table: &ProcessTable) -> Self {
        Self {
            order: table.arrival_order(),
            next: 0,
        }
    }

    /// Next process to arrive, without consuming it.
    fn peek(&self) -> Option<usize> {
        self.order.get(self.next).copied()
    }

    /// Consumes the next process if it has arrived by `now`.
    fn take_arrived(&mut self, table: &ProcessTable, now: i64) -> Option<usize> {
        let idx = self.peek()?;
        if table[idx].has_arrived(now) {
            self.next += 1;
            Some(idx)
        } else {
            None
        }
    }
}

/// Runs Round Robin with the given quantum and returns the full outcome.
///
/// # Panics
/// If `quantum` is not positive; the run could not make progress.
pub fn run_rr(processes: &[Process], quantum: i64) -> SimulationOutcome {
    assert!(quantum > 0, "time quantum must be positive, got {quantum}");

    let mut table = ProcessTable::from_processes(processes);
    let mut timeline = Timeline::new();
    let mut queue = ReadyQueue::default();
    let mut arrivals = Arrivals::new(&table);
    let n = table.len();
    let mut current_time: i64 = 0;
    let mut completed = 0;

    while completed < n {
        if queue.is_empty() {
            if let Some(idx) = arrivals.peek() {
                let arrival = table[idx].arrival_time;
                if current_time < arrival {
                    log::trace!("RR: idle {current_time}..{arrival}");
                    current_time = arrival;
                }
                arrivals.next += 1;
                queue.push(idx, current_time);
            }
        }

        let Some(idx) = queue.pop() else {
            unreachable!("RR: ready queue drained with {} processes unfinished", n - completed);
        };

        let p = &mut table[idx];
        if p.dispatch(current_time) {
            log::debug!("RR: P{idx} first dispatch at {current_time}");
        }
        let slice_start = current_time;
        current_time += p.execute(quantum);
        let remaining = p.remaining_time;
        timeline.push(idx, slice_start, current_time);
        log::debug!("RR: P{idx} runs {slice_start}..{current_time}, {remaining} left");

        while let Some(arrived) = arrivals.take_arrived(&table, current_time) {
            queue.push(arrived, current_time);
        }

        if remaining > 0 {
            queue.push(idx, current_time);
        } else {
            table[idx].complete(current_time);
            completed += 1;
        }
    }

    SimulationOutcome::finish(Policy::RoundRobin { quantum }, table, timeline, processes)
}

/// Runs Round Robin and returns only the averages.
///
/// # Panics
/// If `quantum` is not positive.
pub fn simulate_rr(processes: &[Process], quantum: i64) -> Metrics {
    run_rr(processes, quantum).metrics
}

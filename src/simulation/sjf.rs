//! Shortest-Job-First (non-preemptive).
//!
//! # Algorithm
//!
//! At every decision point, among processes that have arrived and not yet
//! run, dispatch the one with the smallest burst and run it to completion.
//! If nothing has arrived, jump the clock to the earliest pending arrival
//! and decide again.
//!
//! Ties on burst go to the lowest input index: the scan only replaces its
//! candidate on a strictly smaller burst.
//!
//! # Complexity
//! O(n²): one linear scan per dispatch.
//!
//! # Reference
//! Smith (1956), SPT is optimal for mean flow time on a single machine.

use super::{Policy, SimulationOutcome};
use crate::metrics::Metrics;
use crate::models::{Process, ProcessTable, Timeline};

/// Index of the shortest arrived, unfinished process at `now`.
fn select_shortest(table: &ProcessTable, now: i64) -> Option<usize> {
    let mut selected: Option<usize> = None;
    for p in table.iter() {
        if p.is_completed() || !p.has_arrived(now) {
            continue;
        }
        if selected.map_or(true, |s| p.burst_time < table[s].burst_time) {
            selected = Some(p.index);
        }
    }
    selected
}

/// Earliest arrival among unfinished processes.
fn earliest_pending_arrival(table: &ProcessTable) -> Option<i64> {
    table
        .iter()
        .filter(|p| !p.is_completed())
        .map(|p| p.arrival_time)
        .min()
}

/// Runs non-preemptive SJF and returns the full outcome.
pub fn run_sjf(processes: &[Process]) -> SimulationOutcome {
    let mut table = ProcessTable::from_processes(processes);
    let mut timeline = Timeline::new();
    let n = table.len();
    let mut current_time: i64 = 0;
    let mut completed = 0;

    while completed < n {
        let Some(idx) = select_shortest(&table, current_time) else {
            let Some(next) = earliest_pending_arrival(&table) else {
                unreachable!("SJF: {} processes unfinished but none pending", n - completed);
            };
            log::trace!("SJF: idle {current_time}..{next}");
            current_time = next;
            continue;
        };

        let p = &mut table[idx];
        p.dispatch(current_time);
        let ran = p.execute(p.burst_time);
        let completion = current_time + ran;
        p.complete(completion);

        log::debug!("SJF: P{idx} (burst {ran}) runs {current_time}..{completion}");
        timeline.push(idx, current_time, completion);
        current_time = completion;
        completed += 1;
    }

    SimulationOutcome::finish(Policy::Sjf, table, timeline, processes)
}

/// Runs non-preemptive SJF and returns only the averages.
pub fn simulate_sjf(processes: &[Process]) -> Metrics {
    run_sjf(processes).metrics
}

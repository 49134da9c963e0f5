//! First-Come-First-Served.
//!
//! # Algorithm
//!
//! 1. Order processes by arrival time (ties by input index).
//! 2. Run each to completion in that order, idling the CPU until the
//!    next process arrives when nothing is ready.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the run.

use super::{Policy, SimulationOutcome};
use crate::metrics::Metrics;
use crate::models::{Process, ProcessTable, Timeline};

/// Runs FCFS and returns the full outcome.
pub fn run_fcfs(processes: &[Process]) -> SimulationOutcome {
    let mut table = ProcessTable::from_processes(processes);
    let mut timeline = Timeline::new();
    let mut current_time: i64 = 0;

    for idx in table.arrival_order() {
        let p = &mut table[idx];
        if current_time < p.arrival_time {
            log::trace!("FCFS: idle {current_time}..{}", p.arrival_time);
            current_time = p.arrival_time;
        }

        p.dispatch(current_time);
        let ran = p.execute(p.burst_time);
        let completion = current_time + ran;
        p.complete(completion);

        log::debug!("FCFS: P{idx} runs {current_time}..{completion}");
        timeline.push(idx, current_time, completion);
        current_time = completion;
    }

    SimulationOutcome::finish(Policy::Fcfs, table, timeline, processes)
}

/// Runs FCFS and returns only the averages.
///
/// ```
/// use u_cpusched::models::processes_from_pairs;
/// use u_cpusched::simulation::simulate_fcfs;
///
/// let m = simulate_fcfs(&processes_from_pairs(&[(0, 5), (1, 3), (2, 8)]));
/// assert!((m.avg_waiting - 10.0 / 3.0).abs() < 1e-9);
/// ```
pub fn simulate_fcfs(processes: &[Process]) -> Metrics {
    run_fcfs(processes).metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::processes_from_pairs;

    #[test]
    fn test_fcfs_reference_scenario() {
        let procs = processes_from_pairs(&[(0, 5), (1, 3), (2, 8)]);
        let outcome = run_fcfs(&procs);

        assert_eq!(outcome.start_times(), vec![0, 5, 8]);
        assert_eq!(outcome.completion_times(), vec![5, 8, 16]);
        let m = outcome.metrics;
        assert!((m.avg_waiting - 10.0 / 3.0).abs() < 1e-10);
        assert!((m.avg_turnaround - 26.0 / 3.0).abs() < 1e-10);
        // Non-preemptive: response equals waiting.
        assert!((m.avg_response - m.avg_waiting).abs() < 1e-10);
    }

    #[test]
    fn test_fcfs_sorts_by_arrival() {
        let procs = processes_from_pairs(&[(6, 2), (0, 3), (1, 1)]);
        let outcome = run_fcfs(&procs);
        assert_eq!(outcome.completion_order(), vec![1, 2, 0]);
        assert_eq!(outcome.completion_times(), vec![8, 3, 4]);
    }

    #[test]
    fn test_fcfs_idles_until_arrival() {
        let procs = processes_from_pairs(&[(0, 2), (10, 3)]);
        let outcome = run_fcfs(&procs);
        assert_eq!(outcome.start_times(), vec![0, 10]);
        assert_eq!(outcome.completion_times(), vec![2, 13]);
        assert_eq!(outcome.timeline.idle_time(), 8);
    }

    #[test]
    fn test_fcfs_all_at_zero_keeps_input_order() {
        let procs = processes_from_pairs(&[(0, 4), (0, 1), (0, 2)]);
        let outcome = run_fcfs(&procs);
        assert_eq!(outcome.start_times(), vec![0, 4, 5]);
        assert_eq!(outcome.completion_order(), vec![0, 1, 2]);
    }

    #[test]
    fn test_fcfs_no_idle_when_arrivals_overlap() {
        let procs = processes_from_pairs(&[(0, 3), (1, 3), (2, 3)]);
        let outcome = run_fcfs(&procs);
        assert_eq!(outcome.timeline.idle_time(), 0);
        assert_eq!(outcome.timeline.makespan(), 9);
    }

    #[test]
    fn test_fcfs_single_process() {
        let outcome = run_fcfs(&processes_from_pairs(&[(3, 4)]));
        assert_eq!(outcome.start_times(), vec![3]);
        assert_eq!(outcome.completion_times(), vec![7]);
        assert!((outcome.metrics.avg_turnaround - 4.0).abs() < 1e-10);
    }
}

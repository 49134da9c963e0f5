//! Single-processor scheduling simulators.
//!
//! Provides First-Come-First-Served, non-preemptive Shortest-Job-First,
//! and Round Robin simulations over a fixed process set.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::models::processes_from_pairs;
//! use u_cpusched::simulation::{simulate_fcfs, simulate_rr, simulate_sjf};
//!
//! let procs = processes_from_pairs(&[(0, 5), (1, 3), (2, 8)]);
//! let fcfs = simulate_fcfs(&procs);
//! let sjf = simulate_sjf(&procs);
//! let rr = simulate_rr(&procs, 2);
//! assert!((fcfs.avg_turnaround - 26.0 / 3.0).abs() < 1e-9);
//! assert!(sjf.avg_waiting <= fcfs.avg_waiting);
//! assert!(rr.avg_response <= fcfs.avg_response);
//! ```
//!
//! # Tie-breaking
//!
//! Every policy resolves ties by input index: equal arrivals keep input
//! order (FCFS, RR), and among arrived jobs with equal bursts the earlier
//! input wins (SJF).
//!
//! # Validation
//!
//! The functions here assume valid input (see [`crate::validation`]).
//! Use [`Policy::simulate`] or [`SimulationRequest::run`] for checked runs.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod compare;
mod fcfs;
mod policy;
mod round_robin;
mod sjf;

pub use compare::{best_by_waiting, compare_policies, PolicyComparison};
pub use fcfs::{run_fcfs, simulate_fcfs};
pub use policy::{Policy, SimulationRequest};
pub use round_robin::{run_rr, simulate_rr};
pub use sjf::{run_sjf, simulate_sjf};

use serde::{Deserialize, Serialize};

use crate::metrics::{Metrics, RunSummary};
use crate::models::{Process, ProcessRecord, ProcessTable, Timeline};

/// Everything a simulation run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Policy that produced this outcome.
    pub policy: Policy,
    /// Final per-process timings, in input order.
    pub records: Vec<ProcessRecord>,
    /// Dispatch history.
    pub timeline: Timeline,
    /// Averages over all processes.
    pub metrics: Metrics,
}

impl SimulationOutcome {
    /// Finalizes a run: converts the table and aggregates metrics.
    pub(crate) fn finish(
        policy: Policy,
        table: ProcessTable,
        timeline: Timeline,
        processes: &[Process],
    ) -> Self {
        debug_assert_eq!(table.total_remaining(), 0, "work left at end of run");
        let records = table.into_records(processes);
        let metrics = Metrics::from_records(&records);
        log::debug!(
            "{policy}: {} processes, makespan {}, avg turnaround {:.2}, avg waiting {:.2}, avg response {:.2}",
            records.len(),
            timeline.makespan(),
            metrics.avg_turnaround,
            metrics.avg_waiting,
            metrics.avg_response
        );
        Self {
            policy,
            records,
            timeline,
            metrics,
        }
    }

    /// CPU-level indicators for this run.
    pub fn summary(&self) -> RunSummary {
        RunSummary::calculate(&self.records, &self.timeline)
    }

    /// Start ticks, in input order.
    pub fn start_times(&self) -> Vec<i64> {
        self.records.iter().map(|r| r.start_time).collect()
    }

    /// Completion ticks, in input order.
    pub fn completion_times(&self) -> Vec<i64> {
        self.records.iter().map(|r| r.completion_time).collect()
    }

    /// Input indices in the order processes finished.
    pub fn completion_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.records.len()).collect();
        order.sort_by_key(|&i| self.records[i].completion_time);
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::processes_from_pairs;
    use rand::rngs::SmallRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    use crate::workload::WorkloadGenerator;

    fn all_policies(procs: &[Process]) -> Vec<SimulationOutcome> {
        vec![run_fcfs(procs), run_sjf(procs), run_rr(procs, 1), run_rr(procs, 3)]
    }

    #[test]
    fn test_invariants_hold_for_random_workloads() {
        let mut rng = SmallRng::seed_from_u64(42);
        let generator = WorkloadGenerator::new(12)
            .with_arrival_gap(0, 6)
            .with_burst_range(1, 9);

        for _ in 0..50 {
            let procs = generator.generate(&mut rng);
            for outcome in all_policies(&procs) {
                for r in &outcome.records {
                    assert!(r.start_time >= r.arrival_time, "{}", outcome.policy);
                    assert!(r.completion_time > r.start_time, "{}", outcome.policy);
                    assert_eq!(r.waiting() + r.burst_time, r.turnaround());
                    assert_eq!(r.turnaround(), r.completion_time - r.arrival_time);
                    let served: i64 = outcome.timeline.slices_for(r.index).map(|s| s.len()).sum();
                    assert_eq!(served, r.burst_time);
                }
                let total_burst: i64 = procs.iter().map(|p| p.burst_time).sum();
                assert_eq!(outcome.timeline.busy_time(), total_burst);
            }
        }
    }

    #[test]
    fn test_fcfs_permutation_invariant() {
        // Distinct arrivals so the arrival order is fully determined.
        let procs = processes_from_pairs(&[(0, 4), (3, 2), (5, 6), (6, 1), (12, 3), (13, 2)]);
        let baseline = simulate_fcfs(&procs);

        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..20 {
            let mut shuffled = procs.clone();
            shuffled.shuffle(&mut rng);
            assert!(simulate_fcfs(&shuffled).approx_eq(&baseline, 1e-9));
        }
    }

    #[test]
    fn test_rr_large_quantum_matches_fcfs() {
        let mut rng = SmallRng::seed_from_u64(3);
        let generator = WorkloadGenerator::new(8).with_burst_range(1, 10);
        for _ in 0..20 {
            let procs = generator.generate(&mut rng);
            let max_burst = procs.iter().map(|p| p.burst_time).max().unwrap();
            let rr = run_rr(&procs, max_burst);
            let fcfs = run_fcfs(&procs);
            assert_eq!(rr.completion_times(), fcfs.completion_times());
            assert!(rr.metrics.approx_eq(&fcfs.metrics, 1e-9));
        }
    }

    #[test]
    fn test_sjf_equal_bursts_matches_fcfs() {
        let procs = processes_from_pairs(&[(0, 3), (1, 3), (2, 3), (7, 3), (20, 3)]);
        let sjf = run_sjf(&procs);
        let fcfs = run_fcfs(&procs);
        assert_eq!(sjf.completion_order(), fcfs.completion_order());
        assert!(sjf.metrics.approx_eq(&fcfs.metrics, 1e-9));
    }

    #[test]
    fn test_single_process_same_under_every_policy() {
        let procs = processes_from_pairs(&[(4, 7)]);
        for outcome in all_policies(&procs) {
            assert_eq!(outcome.start_times(), vec![4]);
            assert_eq!(outcome.completion_times(), vec![11]);
            assert!((outcome.metrics.avg_waiting - 0.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_outcome_summary() {
        let procs = processes_from_pairs(&[(0, 2), (5, 3)]);
        let summary = run_fcfs(&procs).summary();
        assert_eq!(summary.makespan, 8);
        assert_eq!(summary.idle_time, 3);
        assert_eq!(summary.context_switches, 1);
    }

    #[test]
    fn test_outcome_serializes() {
        let procs = processes_from_pairs(&[(0, 2), (1, 1)]);
        let outcome = run_rr(&procs, 1);
        let json = serde_json::to_string(&outcome).unwrap();
        let back: SimulationOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outcome);
    }
}

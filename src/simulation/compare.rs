//! Side-by-side comparison of all policies on one workload.

use serde::{Deserialize, Serialize};

use super::Policy;
use crate::metrics::{Metrics, RunSummary};
use crate::models::Process;
use crate::validation::{validate_request, ValidationError};

/// One policy's result in a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyComparison {
    /// Policy simulated.
    pub policy: Policy,
    /// Averages for the run.
    pub metrics: Metrics,
    /// CPU-level indicators for the run.
    pub summary: RunSummary,
}

/// Runs FCFS, SJF and Round Robin over the same processes.
///
/// Input is validated once, against the Round Robin quantum as well.
/// Results are in the order FCFS, SJF, RR.
///
/// ```
/// use u_cpusched::models::processes_from_pairs;
/// use u_cpusched::simulation::{best_by_waiting, compare_policies, Policy};
///
/// let procs = processes_from_pairs(&[(0, 8), (1, 1), (2, 1)]);
/// let results = compare_policies(&procs, 2).unwrap();
/// assert_eq!(results.len(), 3);
/// assert_eq!(best_by_waiting(&results).unwrap().policy, Policy::RoundRobin { quantum: 2 });
/// ```
pub fn compare_policies(
    processes: &[Process],
    quantum: i64,
) -> Result<Vec<PolicyComparison>, Vec<ValidationError>> {
    let rr = Policy::RoundRobin { quantum };
    validate_request(processes, &rr)?;

    Ok([Policy::Fcfs, Policy::Sjf, rr]
        .into_iter()
        .map(|policy| {
            let outcome = policy.run_unchecked(processes);
            PolicyComparison {
                policy,
                summary: outcome.summary(),
                metrics: outcome.metrics,
            }
        })
        .collect())
}

/// Entry with the lowest average waiting time. Earlier entries win ties.
pub fn best_by_waiting(results: &[PolicyComparison]) -> Option<&PolicyComparison> {
    results.iter().fold(None, |best, r| match best {
        Some(b) if b.metrics.avg_waiting <= r.metrics.avg_waiting => Some(b),
        _ => Some(r),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::processes_from_pairs;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_compare_runs_all_policies() {
        let procs = processes_from_pairs(&[(0, 5), (1, 3), (2, 8)]);
        let results = compare_policies(&procs, 2).unwrap();
        let names: Vec<&str> = results.iter().map(|r| r.policy.name()).collect();
        assert_eq!(names, vec!["FCFS", "SJF", "RR"]);
        for r in &results {
            assert_eq!(r.summary.busy_time, 16);
        }
    }

    #[test]
    fn test_compare_validates_quantum() {
        let procs = processes_from_pairs(&[(0, 5)]);
        let errors = compare_policies(&procs, -1).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveQuantum));
    }

    #[test]
    fn test_best_by_waiting_prefers_earlier_on_tie() {
        // A single process waits 0 under every policy.
        let procs = processes_from_pairs(&[(0, 3)]);
        let results = compare_policies(&procs, 1).unwrap();
        assert_eq!(best_by_waiting(&results).unwrap().policy, Policy::Fcfs);
    }

    #[test]
    fn test_best_by_waiting_sjf_wins() {
        // Short jobs stuck behind a long one that is already queued.
        let procs = processes_from_pairs(&[(0, 1), (0, 9), (0, 1), (0, 1)]);
        let results = compare_policies(&procs, 4).unwrap();
        assert_eq!(best_by_waiting(&results).unwrap().policy, Policy::Sjf);
    }

    #[test]
    fn test_best_by_waiting_empty() {
        assert!(best_by_waiting(&[]).is_none());
    }
}

//! Policy selection and checked simulation requests.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{run_fcfs, run_rr, run_sjf, SimulationOutcome};
use crate::models::Process;
use crate::validation::{validate_request, ValidationError};

/// A scheduling policy and its parameters.
///
/// Serialized with an internal `policy` tag:
/// `{"policy":"round_robin","quantum":2}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum Policy {
    /// First-Come-First-Served.
    #[default]
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Round Robin with a fixed time quantum.
    RoundRobin {
        /// Maximum ticks per dispatch. Must be positive.
        quantum: i64,
    },
}

impl Policy {
    /// Short policy name ("FCFS", "SJF", "RR").
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sjf => "SJF",
            Policy::RoundRobin { .. } => "RR",
        }
    }

    /// Validates the input, then runs the policy.
    ///
    /// Besides rejecting empty input, negative arrivals, non-positive
    /// bursts and a non-positive quantum, this also refuses:
    /// - two processes sharing a non-empty `id` (the simulators themselves
    ///   never read ids, so [`Policy::run_unchecked`] accepts duplicates)
    /// - time values large enough that the run's clock or metric sums
    ///   would overflow `i64`
    ///
    /// # Returns
    /// The outcome, or every validation problem found.
    ///
    /// ```
    /// use u_cpusched::models::processes_from_pairs;
    /// use u_cpusched::simulation::Policy;
    ///
    /// let procs = processes_from_pairs(&[(0, 5), (1, 3)]);
    /// let outcome = Policy::RoundRobin { quantum: 2 }.simulate(&procs).unwrap();
    /// assert_eq!(outcome.timeline.makespan(), 8);
    ///
    /// assert!(Policy::RoundRobin { quantum: 0 }.simulate(&procs).is_err());
    /// ```
    pub fn simulate(&self, processes: &[Process]) -> Result<SimulationOutcome, Vec<ValidationError>> {
        validate_request(processes, self)?;
        Ok(self.run_unchecked(processes))
    }

    /// Runs the policy without validating the input.
    ///
    /// # Panics
    /// For Round Robin with a non-positive quantum.
    pub fn run_unchecked(&self, processes: &[Process]) -> SimulationOutcome {
        match *self {
            Policy::Fcfs => run_fcfs(processes),
            Policy::Sjf => run_sjf(processes),
            Policy::RoundRobin { quantum } => run_rr(processes, quantum),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::RoundRobin { quantum } => write!(f, "RR(q={quantum})"),
            other => f.write_str(other.name()),
        }
    }
}

/// Input container for one checked simulation.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::simulation::{Policy, SimulationRequest};
///
/// let request = SimulationRequest::new(vec![
///     Process::new(0, 7).with_id("compile"),
///     Process::new(2, 4).with_id("test"),
/// ])
/// .with_policy(Policy::Sjf);
///
/// let outcome = request.run().unwrap();
/// assert_eq!(outcome.records[1].id, "test");
/// assert_eq!(outcome.records[1].start_time, 7);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to schedule, in input order.
    pub processes: Vec<Process>,
    /// Policy to simulate.
    #[serde(default)]
    pub policy: Policy,
}

impl SimulationRequest {
    /// Creates an FCFS request.
    pub fn new(processes: Vec<Process>) -> Self {
        Self {
            processes,
            policy: Policy::default(),
        }
    }

    /// Sets the policy.
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Validates and runs the request.
    pub fn run(&self) -> Result<SimulationOutcome, Vec<ValidationError>> {
        self.policy.simulate(&self.processes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::processes_from_pairs;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_policy_names() {
        assert_eq!(Policy::Fcfs.name(), "FCFS");
        assert_eq!(Policy::Sjf.name(), "SJF");
        assert_eq!(Policy::RoundRobin { quantum: 4 }.name(), "RR");
        assert_eq!(Policy::RoundRobin { quantum: 4 }.to_string(), "RR(q=4)");
        assert_eq!(Policy::Sjf.to_string(), "SJF");
    }

    #[test]
    fn test_policy_dispatches_to_simulator() {
        let procs = processes_from_pairs(&[(0, 5), (1, 3), (2, 8)]);
        let outcome = Policy::Fcfs.simulate(&procs).unwrap();
        assert_eq!(outcome.policy, Policy::Fcfs);
        assert_eq!(outcome.completion_times(), vec![5, 8, 16]);

        let rr = Policy::RoundRobin { quantum: 2 }.simulate(&procs).unwrap();
        assert_eq!(rr.policy, Policy::RoundRobin { quantum: 2 });
    }

    #[test]
    fn test_simulate_rejects_empty_input() {
        let errors = Policy::Sjf.simulate(&[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyInput));
    }

    #[test]
    fn test_simulate_rejects_overflowing_clock() {
        let procs = vec![Process::new(i64::MAX - 2, 5)];
        let errors = Policy::Fcfs.simulate(&procs).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
    }

    #[test]
    fn test_duplicate_ids_only_rejected_when_checked() {
        let procs = vec![Process::new(0, 2).with_id("A"), Process::new(1, 2).with_id("A")];
        assert!(Policy::Sjf.simulate(&procs).is_err());
        let outcome = Policy::Sjf.run_unchecked(&procs);
        assert_eq!(outcome.completion_times(), vec![2, 4]);
    }

    #[test]
    fn test_policy_serde_tagging() {
        let json = serde_json::to_string(&Policy::RoundRobin { quantum: 2 }).unwrap();
        assert_eq!(json, r#"{"policy":"round_robin","quantum":2}"#);

        let p: Policy = serde_json::from_str(r#"{"policy":"sjf"}"#).unwrap();
        assert_eq!(p, Policy::Sjf);
    }

    #[test]
    fn test_request_from_json() {
        let json = r#"{
            "processes": [
                {"id": "A", "arrival_time": 0, "burst_time": 5},
                {"arrival_time": 1, "burst_time": 3}
            ],
            "policy": {"policy": "round_robin", "quantum": 2}
        }"#;
        let request: SimulationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.policy, Policy::RoundRobin { quantum: 2 });

        let outcome = request.run().unwrap();
        assert_eq!(outcome.records[0].id, "A");
        assert_eq!(outcome.records[1].id, "P1");
    }

    #[test]
    fn test_request_defaults_to_fcfs() {
        let json = r#"{"processes": [{"arrival_time": 0, "burst_time": 1}]}"#;
        let request: SimulationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.policy, Policy::Fcfs);
    }
}

//! CPU scheduling simulation for a single processor.
//!
//! Simulates First-Come-First-Served, non-preemptive Shortest-Job-First,
//! and Round Robin over a fixed process set, and reports per-process
//! timings plus average turnaround, waiting, and response times.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ProcessTable`, `SimProcess`,
//!   `ProcessRecord`, `Timeline`
//! - **`simulation`**: The three simulators, `Policy`, `SimulationRequest`,
//!   and policy comparison
//! - **`metrics`**: `Metrics` averages and `RunSummary` CPU indicators
//! - **`validation`**: Input checks (empty input, bad times, bad quantum)
//! - **`workload`**: Random process-set generation
//!
//! # Determinism
//!
//! Every run is a pure function of its input. Runs own their working
//! state, share nothing, and can execute concurrently.
//!
//! # Example
//!
//! ```
//! use u_cpusched::{simulate_fcfs, simulate_rr, simulate_sjf, Process};
//!
//! let procs = vec![Process::new(0, 7), Process::new(2, 4), Process::new(4, 1), Process::new(5, 4)];
//! assert!((simulate_sjf(&procs).avg_waiting - 4.0).abs() < 1e-9);
//! assert!((simulate_fcfs(&procs).avg_waiting - 4.75).abs() < 1e-9);
//! assert!(simulate_rr(&procs, 3).avg_response < simulate_fcfs(&procs).avg_response);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7

pub mod metrics;
pub mod models;
pub mod simulation;
pub mod validation;
pub mod workload;

pub use metrics::{Metrics, RunSummary};
pub use models::Process;
pub use simulation::{
    compare_policies, simulate_fcfs, simulate_rr, simulate_sjf, Policy, SimulationOutcome,
    SimulationRequest,
};

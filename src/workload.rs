//! Random workload generation.
//!
//! Produces process sets with random inter-arrival gaps and burst lengths,
//! for demos, benchmarks, and randomized testing. The caller supplies the
//! RNG, so seeded generators give reproducible workloads.
//!
//! ```
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//! use u_cpusched::workload::WorkloadGenerator;
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let procs = WorkloadGenerator::new(5).with_burst_range(2, 4).generate(&mut rng);
//! assert_eq!(procs.len(), 5);
//! assert!(procs.iter().all(|p| (2..=4).contains(&p.burst_time)));
//! ```

use rand::Rng;

use crate::models::Process;

/// Parameters for random process sets.
///
/// Arrivals are cumulative: each process arrives a random gap after the
/// previous one, the first a random gap after t=0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadGenerator {
    /// Number of processes to generate.
    pub count: usize,
    /// Smallest gap between consecutive arrivals.
    pub min_arrival_gap: i64,
    /// Largest gap between consecutive arrivals.
    pub max_arrival_gap: i64,
    /// Smallest burst time.
    pub min_burst: i64,
    /// Largest burst time.
    pub max_burst: i64,
    /// ID prefix; processes are named `{prefix}{index}`.
    pub id_prefix: String,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes with default ranges
    /// (gaps 0..=4, bursts 1..=10).
    pub fn new(count: usize) -> Self {
        Self {
            count,
            min_arrival_gap: 0,
            max_arrival_gap: 4,
            min_burst: 1,
            max_burst: 10,
            id_prefix: "P".to_string(),
        }
    }

    /// Sets the inter-arrival gap range (inclusive).
    pub fn with_arrival_gap(mut self, min: i64, max: i64) -> Self {
        self.min_arrival_gap = min.max(0);
        self.max_arrival_gap = max.max(self.min_arrival_gap);
        self
    }

    /// Sets the burst range (inclusive). Bursts are at least 1.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.min_burst = min.max(1);
        self.max_burst = max.max(self.min_burst);
        self
    }

    /// Sets the ID prefix.
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    /// Generates a process set. Output is sorted by arrival time.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        let mut arrival: i64 = 0;
        (0..self.count)
            .map(|i| {
                arrival += rng.random_range(self.min_arrival_gap..=self.max_arrival_gap);
                let burst = rng.random_range(self.min_burst..=self.max_burst);
                Process::new(arrival, burst).with_id(format!("{}{i}", self.id_prefix))
            })
            .collect()
    }
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self::new(10)
    }
}

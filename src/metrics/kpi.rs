//! CPU-level run indicators.
//!
//! Computes performance indicators from a finished run's records and
//! timeline.
//!
//! # Indicators
//!
//! | Indicator | Definition |
//! |-----------|-----------|
//! | Makespan | End of the last slice |
//! | Busy time | Sum of slice lengths |
//! | Idle time | Makespan - busy time |
//! | CPU utilization | Busy time / makespan |
//! | Throughput | Completed processes per tick of makespan |
//! | Context switches | Dispatches that change the running process |
//! | Max waiting / response | Worst single process |

use serde::{Deserialize, Serialize};

use crate::models::{ProcessRecord, Timeline};

/// Run performance indicators. Times are in ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Completion tick of the last process.
    pub makespan: i64,
    /// Ticks spent executing.
    pub busy_time: i64,
    /// Ticks the CPU sat idle before the makespan.
    pub idle_time: i64,
    /// Fraction of the makespan spent executing (0.0..1.0).
    pub cpu_utilization: f64,
    /// Processes completed per tick.
    pub throughput: f64,
    /// Number of switches between different processes.
    pub context_switches: usize,
    /// Largest waiting time of any process.
    pub max_waiting: i64,
    /// Largest response time of any process.
    pub max_response: i64,
    /// Largest turnaround time of any process.
    pub max_turnaround: i64,
}

impl RunSummary {
    /// Computes indicators for a finished run.
    pub fn calculate(records: &[ProcessRecord], timeline: &Timeline) -> Self {
        let makespan = timeline.makespan();
        let busy_time = timeline.busy_time();

        let mut max_waiting: i64 = 0;
        let mut max_response: i64 = 0;
        let mut max_turnaround: i64 = 0;
        for r in records {
            max_waiting = max_waiting.max(r.waiting());
            max_response = max_response.max(r.response());
            max_turnaround = max_turnaround.max(r.turnaround());
        }

        let (cpu_utilization, throughput) = if makespan == 0 {
            (0.0, 0.0)
        } else {
            (
                busy_time as f64 / makespan as f64,
                records.len() as f64 / makespan as f64,
            )
        };

        Self {
            makespan,
            busy_time,
            idle_time: makespan - busy_time,
            cpu_utilization,
            throughput,
            context_switches: timeline.context_switches(),
            max_waiting,
            max_response,
            max_turnaround,
        }
    }

    /// Whether the run meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_waiting: i64, min_utilization: f64) -> bool {
        self.max_waiting <= max_waiting && self.cpu_utilization >= min_utilization
    }
}

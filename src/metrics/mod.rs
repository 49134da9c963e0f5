//! Metrics aggregation and run summaries.
//!
//! # Per-process quantities
//!
//! | Quantity | Definition |
//! |----------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | start - arrival |
//!
//! [`Metrics`] holds their arithmetic means over all processes.
//! [`RunSummary`] adds CPU-level indicators derived from the timeline.

mod kpi;

pub use kpi::RunSummary;

use serde::{Deserialize, Serialize};

use crate::models::ProcessRecord;

/// Fleet-wide averages of one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Mean response time.
    pub avg_response: f64,
}

impl Metrics {
    /// Averages the per-process quantities of finished records.
    ///
    /// With no records every mean is NaN (0 / 0). Checked entry points
    /// reject empty input before a run starts.
    pub fn from_records(records: &[ProcessRecord]) -> Self {
        let mut sum_turnaround: i64 = 0;
        let mut sum_waiting: i64 = 0;
        let mut sum_response: i64 = 0;

        for r in records {
            sum_turnaround += r.turnaround();
            sum_waiting += r.waiting();
            sum_response += r.response();
        }

        let n = records.len() as f64;
        Self {
            avg_turnaround: sum_turnaround as f64 / n,
            avg_waiting: sum_waiting as f64 / n,
            avg_response: sum_response as f64 / n,
        }
    }

    /// Whether every mean is within `epsilon` of `other`'s.
    pub fn approx_eq(&self, other: &Metrics, epsilon: f64) -> bool {
        (self.avg_turnaround - other.avg_turnaround).abs() <= epsilon
            && (self.avg_waiting - other.avg_waiting).abs() <= epsilon
            && (self.avg_response - other.avg_response).abs() <= epsilon
    }
}

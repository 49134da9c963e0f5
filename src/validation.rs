//! Input validation for simulation requests.
//!
//! The simulators assume well-formed input. This module is the boundary
//! that checks it first. Detects:
//! - Empty process lists
//! - Negative arrival times
//! - Non-positive burst times
//! - Non-positive Round Robin quanta
//! - Duplicate process IDs (anonymous processes are exempt)
//! - Time values whose clock or metric sums would overflow `i64`

use std::collections::HashSet;
use std::fmt;

use crate::models::Process;
use crate::simulation::Policy;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes to schedule.
    EmptyInput,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process needs no CPU time (or negative time).
    NonPositiveBurst,
    /// Round Robin quantum is zero or negative.
    NonPositiveQuantum,
    /// Two processes share the same ID.
    DuplicateId,
    /// The simulated clock or a metric sum would overflow `i64`.
    TimeOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a process list.
///
/// Checks:
/// 1. At least one process
/// 2. Every arrival time is non-negative
/// 3. Every burst time is positive
/// 4. No two non-empty IDs are equal
/// 5. The time horizon (`max(arrival) + Σburst`) and the per-metric sums
///    (at most `n * horizon`) fit in `i64`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "No processes to schedule",
        ));
    }

    let mut ids = HashSet::new();
    for (i, p) in processes.iter().enumerate() {
        let label = p.label(i);

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{label}' has negative arrival time {}", p.arrival_time),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process '{label}' has non-positive burst time {}", p.burst_time),
            ));
        }

        if !p.id.is_empty() && !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }
    }

    let times_valid = processes
        .iter()
        .all(|p| p.arrival_time >= 0 && p.burst_time > 0);
    if times_valid && !processes.is_empty() && metric_bound(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Arrival and burst times are too large to simulate without overflow",
        ));
    }

    into_result(errors)
}

/// Upper bound on any metric sum, or `None` if it overflows.
///
/// No run's clock passes the latest arrival plus the total burst, and every
/// per-process turnaround, waiting or response time is at most that horizon.
fn metric_bound(processes: &[Process]) -> Option<i64> {
    let latest_arrival = processes.iter().map(|p| p.arrival_time).max()?;
    let horizon = processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_time))?;
    let n = i64::try_from(processes.len()).ok()?;
    horizon.checked_mul(n)
}

/// Validates a Round Robin time quantum.
pub fn validate_quantum(quantum: i64) -> ValidationResult {
    if quantum > 0 {
        Ok(())
    } else {
        Err(vec![ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Time quantum must be positive, got {quantum}"),
        )])
    }
}

/// Validates processes and policy parameters together.
///
/// Collects errors from both checks. Rejections are logged at `warn`.
pub fn validate_request(processes: &[Process], policy: &Policy) -> ValidationResult {
    let mut errors = validate_processes(processes).err().unwrap_or_default();
    if let Policy::RoundRobin { quantum } = *policy {
        if let Err(mut quantum_errors) = validate_quantum(quantum) {
            errors.append(&mut quantum_errors);
        }
    }

    if !errors.is_empty() {
        log::warn!(
            "{policy}: rejecting input with {} problem(s): {}",
            errors.len(),
            errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ")
        );
    }
    into_result(errors)
}

fn into_result(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

//! Input validation for scheduling runs.
//!
//! Checks process descriptors and queue configuration before anything is
//! loaded. Detects:
//! - Duplicate process IDs (within a batch and against already loaded ones)
//! - Queue numbers outside the configured range
//! - Negative arrival times and non-positive CPU bursts
//! - Missing queues and non-positive Round-Robin quanta
//! - Batches whose run would push the clock past `i64::MAX`
//!
//! All checks run to completion so every problem is reported at once.

use std::collections::HashSet;

use crate::models::{ProcessDescriptor, QueuePolicy};

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
    /// Two processes share the same ID.
    DuplicateId,
    /// A process references a queue that doesn't exist.
    InvalidQueue,
    /// A process arrives before t=0.
    InvalidArrivalTime,
    /// A process has a zero or negative CPU burst.
    InvalidCpuTime,
    /// A Round-Robin queue has a zero or negative quantum.
    InvalidQuantum,
    /// The configuration defines no queues.
    NoQueues,
    /// Latest arrival plus total CPU work does not fit in the clock.
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a queue configuration.
///
/// Checks:
/// 1. At least one queue
/// 2. Every Round-Robin quantum is positive
pub fn validate_queues(policies: &[QueuePolicy]) -> ValidationResult {
    let mut errors = Vec::new();

    if policies.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoQueues,
            "Configuration defines no queues",
        ));
    }

    for (idx, policy) in policies.iter().enumerate() {
        if let QueuePolicy::RoundRobin { quantum } = policy {
            if *quantum <= 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidQuantum,
                    format!("Queue {} has non-positive quantum {quantum}", idx + 1),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a batch of process descriptors.
///
/// `queue_count` is the number of configured queues (valid numbers are
/// `1..=queue_count`). `loaded_ids` are identifiers already owned by the
/// scheduler.
///
/// Checks:
/// 1. No duplicate IDs within the batch or against `loaded_ids`
/// 2. Queue number in range
/// 3. Arrival time ≥ 0
/// 4. CPU time > 0
pub fn validate_descriptors(
    descriptors: &[ProcessDescriptor],
    queue_count: usize,
    loaded_ids: &[&str],
) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen: HashSet<&str> = loaded_ids.iter().copied().collect();

    for d in descriptors {
        if !seen.insert(d.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", d.id),
            ));
        }

        if d.queue == 0 || d.queue > queue_count {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidQueue,
                format!(
                    "Process '{}' references unknown queue {} (valid: 1..={queue_count})",
                    d.id, d.queue
                ),
            ));
        }

        if d.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidArrivalTime,
                format!("Process '{}' has negative arrival time {}", d.id, d.arrival_time),
            ));
        }

        if d.cpu_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCpuTime,
                format!("Process '{}' has non-positive CPU time {}", d.id, d.cpu_time),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks that a run over `descriptors` cannot overflow the clock.
///
/// The clock of a run never passes the latest of `start_time` and every
/// arrival, plus all CPU work still owed. `pending_work` is the work of
/// processes already queued; `start_time` is the later of the current clock
/// and their latest arrival. Assumes the descriptors passed
/// [`validate_descriptors`].
pub fn validate_horizon(
    descriptors: &[ProcessDescriptor],
    start_time: i64,
    pending_work: i64,
) -> ValidationResult {
    let latest = descriptors
        .iter()
        .map(|d| d.arrival_time)
        .fold(start_time, i64::max);
    let horizon = descriptors
        .iter()
        .try_fold(pending_work, |total, d| total.checked_add(d.cpu_time))
        .and_then(|work| latest.checked_add(work));

    match horizon {
        Some(_) => Ok(()),
        None => Err(vec![ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            format!(
                "Batch of {} processes would run the clock past {} (latest start {latest})",
                descriptors.len(),
                i64::MAX
            ),
        )]),
    }
}

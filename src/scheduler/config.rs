//! Scheduler configuration.

use serde::{Deserialize, Serialize};

use crate::models::QueuePolicy;
use crate::validation::{validate_queues, ValidationResult};

/// Ordered queue policies for a multi-level scheduler.
///
/// Position in `queues` is the queue priority: index 0 is queue 1, the
/// highest priority level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Queue policies, highest priority first.
    pub queues: Vec<QueuePolicy>,
}

impl SchedulerConfig {
    /// Creates a configuration with no queues.
    pub fn empty() -> Self {
        Self { queues: Vec::new() }
    }

    /// Appends a Round-Robin queue.
    pub fn with_round_robin(mut self, quantum: i64) -> Self {
        self.queues.push(QueuePolicy::round_robin(quantum));
        self
    }

    /// Appends a Shortest-Job-First queue.
    pub fn with_shortest_job_first(mut self) -> Self {
        self.queues.push(QueuePolicy::ShortestJobFirst);
        self
    }

    /// Number of configured queues.
    pub fn queue_count(&self) -> usize {
        self.queues.len()
    }

    /// Checks that the configuration can drive a run.
    pub fn validate(&self) -> ValidationResult {
        validate_queues(&self.queues)
    }
}

impl Default for SchedulerConfig {
    /// Queue 1: RR(q=1), queue 2: RR(q=3), queue 3: SJF.
    fn default() -> Self {
        Self::empty()
            .with_round_robin(1)
            .with_round_robin(3)
            .with_shortest_job_first()
    }
}

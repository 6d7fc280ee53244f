//! Random workload generation.
//!
//! Produces batches of valid process descriptors from any `rand::Rng`,
//! for seeded experiments and invariant checks.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::ProcessDescriptor;

/// Shape of a generated batch. All ranges are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadParams {
    /// Number of processes.
    pub count: usize,
    /// Latest arrival time (ticks). Arrivals are drawn from `0..=max_arrival`.
    pub max_arrival: i64,
    /// Shortest CPU burst (ticks, > 0).
    pub min_cpu_time: i64,
    /// Longest CPU burst (ticks).
    pub max_cpu_time: i64,
    /// Queues are drawn from `1..=queue_count`.
    pub queue_count: usize,
    /// Priorities are drawn from `0..=max_priority`.
    pub max_priority: i32,
}

impl WorkloadParams {
    /// Creates parameters for `count` processes with default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    /// Sets the latest arrival time.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the CPU burst range.
    pub fn with_cpu_time(mut self, min: i64, max: i64) -> Self {
        self.min_cpu_time = min;
        self.max_cpu_time = max;
        self
    }

    /// Sets the number of queues to spread processes over.
    pub fn with_queue_count(mut self, queue_count: usize) -> Self {
        self.queue_count = queue_count;
        self
    }
}

impl Default for WorkloadParams {
    fn default() -> Self {
        Self {
            count: 12,
            max_arrival: 10,
            min_cpu_time: 1,
            max_cpu_time: 8,
            queue_count: 3,
            max_priority: 5,
        }
    }
}

/// Generates `params.count` descriptors named `P1..Pn`.
///
/// Degenerate ranges are widened to stay valid: CPU bursts are at least 1
/// tick, arrivals at least 0, and at least one queue is used.
pub fn random_batch<R: Rng>(params: &WorkloadParams, rng: &mut R) -> Vec<ProcessDescriptor> {
    let min_cpu = params.min_cpu_time.max(1);
    let max_cpu = params.max_cpu_time.max(min_cpu);
    let max_arrival = params.max_arrival.max(0);
    let queue_count = params.queue_count.max(1);
    let max_priority = params.max_priority.max(0);

    (1..=params.count)
        .map(|i| {
            ProcessDescriptor::new(
                format!("P{i}"),
                rng.random_range(0..=max_arrival),
                rng.random_range(min_cpu..=max_cpu),
                rng.random_range(1..=queue_count),
            )
            .with_priority(rng.random_range(0..=max_priority))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_descriptors;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_batch_is_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        let params = WorkloadParams::new(50);
        let batch = random_batch(&params, &mut rng);
        assert_eq!(batch.len(), 50);
        assert!(validate_descriptors(&batch, params.queue_count, &[]).is_ok());
    }

    #[test]
    fn test_batch_respects_ranges() {
        let mut rng = StdRng::seed_from_u64(11);
        let params = WorkloadParams::new(100)
            .with_max_arrival(3)
            .with_cpu_time(2, 4)
            .with_queue_count(2);
        for d in random_batch(&params, &mut rng) {
            assert!((0..=3).contains(&d.arrival_time));
            assert!((2..=4).contains(&d.cpu_time));
            assert!((1..=2).contains(&d.queue));
            assert!((0..=params.max_priority).contains(&d.priority));
        }
    }

    #[test]
    fn test_same_seed_same_batch() {
        let params = WorkloadParams::default();
        let a = random_batch(&params, &mut StdRng::seed_from_u64(3));
        let b = random_batch(&params, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_degenerate_ranges_widened() {
        let mut rng = StdRng::seed_from_u64(1);
        let params = WorkloadParams::new(10)
            .with_max_arrival(-4)
            .with_cpu_time(0, -1)
            .with_queue_count(0);
        for d in random_batch(&params, &mut rng) {
            assert_eq!(d.arrival_time, 0);
            assert_eq!(d.cpu_time, 1);
            assert_eq!(d.queue, 1);
        }
    }

    #[test]
    fn test_ids_sequential() {
        let mut rng = StdRng::seed_from_u64(0);
        let batch = random_batch(&WorkloadParams::new(3), &mut rng);
        let ids: Vec<&str> = batch.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["P1", "P2", "P3"]);
    }
}

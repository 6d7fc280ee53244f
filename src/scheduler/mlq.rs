//! Multi-level queue scheduler.
//!
//! # Algorithm
//!
//! 1. Queues are swept in priority order (queue 1 first).
//! 2. Each non-empty queue is drained completely before the next one starts:
//!    - Round-Robin: arrival-gated admission, FIFO rotation, at most one
//!      quantum per dispatch, unit idle steps while waiting for arrivals.
//!    - Shortest-Job-First: non-preemptive, least remaining time first.
//! 3. Sweeps repeat until every queue is empty.
//!
//! All queues share one simulated clock, which only moves forward.

use std::collections::VecDeque;

use log::{debug, info, trace};

use super::{Averages, SchedulerConfig};
use crate::error::Result;
use crate::models::{Dispatch, Process, ProcessDescriptor, Queue, QueuePolicy, Timeline};
use crate::validation::{validate_descriptors, validate_horizon};

/// Multi-level queue scheduler over a single simulated CPU.
///
/// Owns its queues, the clock, the completed-process list and the run
/// timeline. Nothing is shared between scheduler values.
///
/// # Example
///
/// ```
/// use u_mlq::models::ProcessDescriptor;
/// use u_mlq::scheduler::MlqScheduler;
///
/// let mut scheduler = MlqScheduler::new();
/// scheduler
///     .load(vec![
///         ProcessDescriptor::new("P1", 0, 5, 3),
///         ProcessDescriptor::new("P2", 0, 2, 3),
///     ])
///     .unwrap();
/// scheduler.run();
///
/// let first = &scheduler.completed()[0];
/// assert_eq!(first.id, "P2");
/// assert_eq!(first.completion_time, Some(2));
/// assert_eq!(scheduler.time(), 7);
/// ```
#[derive(Debug, Clone)]
pub struct MlqScheduler {
    queues: Vec<Queue>,
    time: i64,
    completed: Vec<Process>,
    timeline: Timeline,
}

impl MlqScheduler {
    /// Creates a scheduler with the default queues: RR(q=1), RR(q=3), SJF.
    pub fn new() -> Self {
        Self::from_policies(&SchedulerConfig::default().queues)
    }

    /// Creates a scheduler from a configuration.
    ///
    /// Fails with `MlqError::Configuration` if the configuration has no
    /// queues or a non-positive Round-Robin quantum.
    pub fn with_config(config: SchedulerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_policies(&config.queues))
    }

    fn from_policies(policies: &[QueuePolicy]) -> Self {
        let queues = policies
            .iter()
            .enumerate()
            .map(|(idx, &policy)| Queue::new(idx + 1, policy))
            .collect();
        Self {
            queues,
            time: 0,
            completed: Vec::new(),
            timeline: Timeline::new(),
        }
    }

    /// Validates and loads a batch of processes into their queues.
    ///
    /// Descriptors may come in any order; each lands in the queue named by
    /// its `queue` field. The batch is all-or-nothing: if any descriptor is
    /// invalid nothing is loaded and every problem is reported.
    pub fn load(&mut self, descriptors: impl IntoIterator<Item = ProcessDescriptor>) -> Result<()> {
        let descriptors: Vec<ProcessDescriptor> = descriptors.into_iter().collect();
        {
            let loaded: Vec<&str> = self
                .queues
                .iter()
                .flat_map(|q| q.processes())
                .chain(self.completed.iter())
                .map(|p| p.id.as_str())
                .collect();
            validate_descriptors(&descriptors, self.queues.len(), &loaded)?;
        }
        let start_time = self
            .queues
            .iter()
            .flat_map(|q| q.processes())
            .map(|p| p.arrival_time)
            .fold(self.time, i64::max);
        let pending_work: i64 = self
            .queues
            .iter()
            .flat_map(|q| q.processes())
            .map(|p| p.remaining_time)
            .sum();
        validate_horizon(&descriptors, start_time, pending_work)?;

        let count = descriptors.len();
        for descriptor in descriptors {
            let idx = descriptor.queue - 1;
            self.queues[idx].add(Process::from(descriptor));
        }
        info!("loaded {count} processes into {} queues", self.queues.len());
        Ok(())
    }

    /// Runs the simulation until every queue is empty.
    ///
    /// Returns the completed processes in completion order.
    pub fn run(&mut self) -> &[Process] {
        info!(
            "run started at t={} with {} pending processes",
            self.time,
            self.pending_count()
        );
        while !self.is_finished() {
            for idx in 0..self.queues.len() {
                if !self.queues[idx].is_empty() {
                    self.run_queue(idx);
                }
            }
        }
        info!(
            "run finished at t={}: {} completed, {} dispatches",
            self.time,
            self.completed.len(),
            self.timeline.dispatch_count()
        );
        &self.completed
    }

    fn run_queue(&mut self, idx: usize) {
        match self.queues[idx].policy {
            QueuePolicy::RoundRobin { quantum } => self.run_round_robin(idx, quantum),
            QueuePolicy::ShortestJobFirst => self.run_shortest_job_first(idx),
        }
    }

    /// Drains a Round-Robin queue, including processes that have not
    /// arrived yet when the queue starts.
    fn run_round_robin(&mut self, idx: usize, quantum: i64) {
        let number = self.queues[idx].number;
        let mut waiting = self.queues[idx].take_all();
        waiting.sort_by(|a, b| {
            a.arrival_time
                .cmp(&b.arrival_time)
                .then_with(|| a.id.cmp(&b.id))
        });
        let mut waiting: VecDeque<Process> = waiting.into();
        let mut time = self.time;
        let mut finished = 0usize;

        while !waiting.is_empty() || !self.queues[idx].is_empty() {
            // Admission: `waiting` is sorted, so arrivals form a prefix
            while waiting.front().is_some_and(|p| p.arrival_time <= time) {
                if let Some(process) = waiting.pop_front() {
                    self.queues[idx].add(process);
                }
            }

            match self.queues[idx].pop_front() {
                Some(mut process) => {
                    let start = time;
                    process.mark_started(start);
                    time += process.consume(quantum);
                    self.record_dispatch(&process, number, start, time);

                    if process.is_complete() {
                        finished += 1;
                        self.complete(process, time);
                    } else {
                        self.queues[idx].add(process);
                    }
                }
                None => {
                    // Nothing can be admitted before the next arrival
                    let next = waiting
                        .front()
                        .map_or(time + 1, |p| p.arrival_time.max(time + 1));
                    trace!("queue {number} idle from t={time} to t={next}");
                    self.timeline.add_idle(number, time, next);
                    time = next;
                }
            }
        }

        self.time = time;
        debug!("queue {number} drained at t={time}: {finished} completed");
    }

    /// Drains a Shortest-Job-First queue, running each pick to completion.
    fn run_shortest_job_first(&mut self, idx: usize) {
        let number = self.queues[idx].number;
        while let Some(mut process) = self.queues[idx].pop_shortest() {
            let start = self.time;
            process.mark_started(start);
            let burst = process.remaining_time;
            self.time += process.consume(burst);
            self.record_dispatch(&process, number, start, self.time);
            self.complete(process, self.time);
        }
        debug!("queue {number} drained at t={}", self.time);
    }

    fn record_dispatch(&mut self, process: &Process, queue: usize, start: i64, end: i64) {
        debug!(
            "dispatch {} from queue {queue}: [{start}, {end}), {} remaining",
            process.id, process.remaining_time
        );
        self.timeline
            .add_dispatch(Dispatch::new(process.id.clone(), queue, start, end));
    }

    fn complete(&mut self, mut process: Process, now: i64) {
        process.mark_completed(now);
        debug!(
            "completed {} at t={now} (wt={:?}, tat={:?})",
            process.id, process.waiting_time, process.turnaround_time
        );
        self.completed.push(process);
    }

    /// Current simulated time.
    pub fn time(&self) -> i64 {
        self.time
    }

    /// Queues in priority order.
    pub fn queues(&self) -> &[Queue] {
        &self.queues
    }

    /// Queue by 1-based number.
    pub fn queue(&self, number: usize) -> Option<&Queue> {
        number.checked_sub(1).and_then(|idx| self.queues.get(idx))
    }

    /// Whether every queue is empty.
    pub fn is_finished(&self) -> bool {
        self.queues.iter().all(Queue::is_empty)
    }

    /// Number of processes not yet completed.
    pub fn pending_count(&self) -> usize {
        self.queues.iter().map(Queue::len).sum()
    }

    /// Completed processes in completion order.
    pub fn completed(&self) -> &[Process] {
        &self.completed
    }

    /// Completed processes sorted by identifier.
    pub fn completed_by_id(&self) -> Vec<&Process> {
        let mut sorted: Vec<&Process> = self.completed.iter().collect();
        sorted.sort_by(|a, b| a.id.cmp(&b.id));
        sorted
    }

    /// Consumes the scheduler, returning the completed processes.
    pub fn into_completed(self) -> Vec<Process> {
        self.completed
    }

    /// Dispatch and idle log of the run so far.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Averages over the first `n` completed processes.
    pub fn averages(&self, n: usize) -> Result<Averages> {
        Averages::calculate(&self.completed, n)
    }

    /// Averages over the first `n` completed processes sorted by identifier.
    pub fn averages_by_id(&self, n: usize) -> Result<Averages> {
        Averages::calculate(self.completed_by_id(), n)
    }
}

impl Default for MlqScheduler {
    fn default() -> Self {
        Self::new()
    }
}

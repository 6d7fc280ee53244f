//! Process model.
//!
//! A process is one CPU burst to be scheduled. It carries the static inputs
//! from its descriptor and the timing state filled in by the scheduler.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// Input description of a process, as produced by a data loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessDescriptor {
    /// Unique process identifier.
    pub id: String,
    /// Arrival time (ticks).
    pub arrival_time: i64,
    /// Total CPU burst (ticks).
    pub cpu_time: i64,
    /// Informational priority. Not consulted by dispatch.
    pub priority: i32,
    /// 1-based number of the queue that owns this process.
    pub queue: usize,
}

impl ProcessDescriptor {
    /// Creates a descriptor with priority 0.
    pub fn new(id: impl Into<String>, arrival_time: i64, cpu_time: i64, queue: usize) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            cpu_time,
            priority: 0,
            queue,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

/// A process and its scheduling state.
///
/// `completion_time`, `turnaround_time` and `waiting_time` are `Some`
/// only once `remaining_time` has reached zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: String,
    /// Arrival time (ticks).
    pub arrival_time: i64,
    /// Total CPU burst (ticks).
    pub cpu_time: i64,
    /// Informational priority.
    pub priority: i32,
    /// 1-based owning queue number.
    pub queue: usize,
    /// CPU time still owed (0..=cpu_time).
    pub remaining_time: i64,
    /// Time of first dispatch.
    pub start_time: Option<i64>,
    /// start_time - arrival_time.
    pub response_time: Option<i64>,
    /// Time the last slice ended.
    pub completion_time: Option<i64>,
    /// completion_time - arrival_time.
    pub turnaround_time: Option<i64>,
    /// turnaround_time - cpu_time.
    pub waiting_time: Option<i64>,
}

impl Process {
    /// Creates a fresh process. `remaining_time` starts at `cpu_time`.
    pub fn new(id: impl Into<String>, arrival_time: i64, cpu_time: i64, queue: usize) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            cpu_time,
            priority: 0,
            queue,
            remaining_time: cpu_time,
            start_time: None,
            response_time: None,
            completion_time: None,
            turnaround_time: None,
            waiting_time: None,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has been dispatched at least once.
    #[inline]
    pub fn has_started(&self) -> bool {
        self.start_time.is_some()
    }

    /// Whether the process has received its whole burst.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.remaining_time == 0
    }

    /// Records the first dispatch. Later calls are ignored.
    pub(crate) fn mark_started(&mut self, now: i64) {
        if self.start_time.is_none() {
            self.start_time = Some(now);
            self.response_time = Some(now - self.arrival_time);
        }
    }

    /// Grants up to `ticks` of CPU and returns the amount actually consumed.
    pub(crate) fn consume(&mut self, ticks: i64) -> i64 {
        let slice = ticks.min(self.remaining_time);
        self.remaining_time -= slice;
        slice
    }

    /// Fills in the completion metrics. Must only be called once remaining is 0.
    pub(crate) fn mark_completed(&mut self, now: i64) {
        debug_assert!(self.is_complete());
        let turnaround = now - self.arrival_time;
        self.completion_time = Some(now);
        self.turnaround_time = Some(turnaround);
        self.waiting_time = Some(turnaround - self.cpu_time);
    }
}

impl From<ProcessDescriptor> for Process {
    fn from(d: ProcessDescriptor) -> Self {
        Process::new(d.id, d.arrival_time, d.cpu_time, d.queue).with_priority(d.priority)
    }
}

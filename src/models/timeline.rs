//! Run timeline.
//!
//! Records every CPU dispatch and every idle stretch of a simulation run,
//! in the order they happened on the single simulated CPU.

use serde::{Deserialize, Serialize};

/// Record of the CPU activity of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Dispatches in execution order.
    pub dispatches: Vec<Dispatch>,
    /// Idle stretches in execution order.
    pub idle: Vec<IdleInterval>,
}

/// One slice of CPU granted to a process: `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dispatch {
    /// Dispatched process.
    pub process_id: String,
    /// Queue the process was drained from.
    pub queue: usize,
    /// Slice start (ticks).
    pub start: i64,
    /// Slice end (ticks).
    pub end: i64,
}

/// A stretch where a queue waited for its next arrival: `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdleInterval {
    /// Queue that was waiting.
    pub queue: usize,
    /// Idle start (ticks).
    pub start: i64,
    /// Idle end (ticks).
    pub end: i64,
}

impl Dispatch {
    /// Creates a dispatch record.
    pub fn new(process_id: impl Into<String>, queue: usize, start: i64, end: i64) -> Self {
        Self {
            process_id: process_id.into(),
            queue,
            start,
            end,
        }
    }

    /// Slice length (ticks).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

impl IdleInterval {
    /// Idle length (ticks).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a dispatch.
    pub fn add_dispatch(&mut self, dispatch: Dispatch) {
        self.dispatches.push(dispatch);
    }

    /// Records `[start, end)` as idle for `queue`.
    ///
    /// Extends the previous interval when it is contiguous and for the same
    /// queue, so unit idle steps collapse into one stretch.
    pub fn add_idle(&mut self, queue: usize, start: i64, end: i64) {
        if let Some(last) = self.idle.last_mut() {
            if last.queue == queue && last.end == start {
                last.end = end;
                return;
            }
        }
        self.idle.push(IdleInterval { queue, start, end });
    }

    /// Number of dispatches.
    pub fn dispatch_count(&self) -> usize {
        self.dispatches.len()
    }

    /// Latest end time across dispatches and idle stretches.
    pub fn makespan(&self) -> i64 {
        let last_dispatch = self.dispatches.iter().map(|d| d.end).max().unwrap_or(0);
        let last_idle = self.idle.iter().map(|i| i.end).max().unwrap_or(0);
        last_dispatch.max(last_idle)
    }

    /// Total ticks the CPU ran a process.
    pub fn busy_time(&self) -> i64 {
        self.dispatches.iter().map(Dispatch::duration).sum()
    }

    /// Total ticks recorded as idle.
    pub fn idle_time(&self) -> i64 {
        self.idle.iter().map(IdleInterval::duration).sum()
    }

    /// CPU utilization: busy_time / makespan.
    ///
    /// Returns `None` if the makespan is zero.
    pub fn utilization(&self) -> Option<f64> {
        let horizon = self.makespan();
        if horizon <= 0 {
            return None;
        }
        Some(self.busy_time() as f64 / horizon as f64)
    }

    /// All dispatches of a process, in order.
    pub fn dispatches_for_process(&self, process_id: &str) -> Vec<&Dispatch> {
        self.dispatches
            .iter()
            .filter(|d| d.process_id == process_id)
            .collect()
    }

    /// All dispatches drained from a queue, in order.
    pub fn dispatches_for_queue(&self, queue: usize) -> Vec<&Dispatch> {
        self.dispatches.iter().filter(|d| d.queue == queue).collect()
    }
}

//! Queue model.
//!
//! A queue is one priority level of the multi-level scheduler. It holds the
//! processes assigned to it and names the policy used to drain them.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

use super::Process;

/// Dispatch policy of a queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueuePolicy {
    /// Round-Robin with a fixed time quantum (ticks).
    RoundRobin {
        /// Maximum ticks granted per dispatch.
        quantum: i64,
    },
    /// Non-preemptive Shortest-Job-First over remaining time.
    ShortestJobFirst,
}

impl QueuePolicy {
    /// Round-Robin policy with the given quantum.
    pub fn round_robin(quantum: i64) -> Self {
        Self::RoundRobin { quantum }
    }

    /// Quantum for Round-Robin, `None` for SJF.
    pub fn quantum(&self) -> Option<i64> {
        match self {
            Self::RoundRobin { quantum } => Some(*quantum),
            Self::ShortestJobFirst => None,
        }
    }
}

impl fmt::Display for QueuePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundRobin { quantum } => write!(f, "RR(q={quantum})"),
            Self::ShortestJobFirst => f.write_str("SJF"),
        }
    }
}

/// A priority level holding pending processes.
#[derive(Debug, Clone)]
pub struct Queue {
    /// 1-based queue number, matching `Process::queue`.
    pub number: usize,
    /// Dispatch policy.
    pub policy: QueuePolicy,
    processes: VecDeque<Process>,
}

impl Queue {
    /// Creates an empty queue.
    pub fn new(number: usize, policy: QueuePolicy) -> Self {
        Self {
            number,
            policy,
            processes: VecDeque::new(),
        }
    }

    /// Appends a process to the tail.
    pub fn add(&mut self, process: Process) {
        self.processes.push_back(process);
    }

    /// Whether no process is pending.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Number of pending processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Pending processes in queue order.
    pub fn processes(&self) -> impl Iterator<Item = &Process> {
        self.processes.iter()
    }

    /// Removes the head (FIFO).
    pub fn pop_front(&mut self) -> Option<Process> {
        self.processes.pop_front()
    }

    /// Removes the process with the least remaining time.
    ///
    /// The pending set is stable-sorted by `remaining_time` on every pick, so
    /// ties keep their relative order.
    pub fn pop_shortest(&mut self) -> Option<Process> {
        self.processes
            .make_contiguous()
            .sort_by_key(|p| p.remaining_time);
        self.processes.pop_front()
    }

    /// Empties the queue, returning its processes in order.
    pub(crate) fn take_all(&mut self) -> Vec<Process> {
        self.processes.drain(..).collect()
    }
}

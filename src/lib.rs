//! Multi-level queue CPU scheduling simulator.
//!
//! Simulates a single CPU serving a fixed, ordered set of priority queues.
//! Each queue has its own dispatch policy (Round-Robin with a queue-specific
//! quantum, or Shortest-Job-First) and queues are drained strictly in
//! priority order. For every process the run yields start, response,
//! completion, turnaround and waiting time; batch averages follow.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ProcessDescriptor`, `Queue`,
//!   `QueuePolicy`, `Timeline`
//! - **`scheduler`**: `MlqScheduler`, `SchedulerConfig`, `Averages`
//! - **`validation`**: Load-time checks (queue range, burst, duplicate IDs, quanta)
//! - **`workload`**: Seeded random batch generation
//!
//! Reading and writing process records is left to the caller: the scheduler
//! takes `ProcessDescriptor` values and hands back completed `Process`
//! records (both serde-enabled).
//!
//! # Logging
//!
//! Emits through the `log` facade; install any logger to see dispatches.

pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{MlqError, Result};

//! Multi-level queue scheduler and batch metrics.
//!
//! # Algorithm
//!
//! `MlqScheduler` drains an ordered list of queues in strict priority
//! order. Each queue runs its own policy (Round-Robin with a quantum, or
//! non-preemptive Shortest-Job-First) until it is empty, then hands the
//! shared clock to the next queue.
//!
//! # Metrics
//!
//! `Averages` computes mean waiting, completion, response and turnaround
//! time over completed processes.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod config;
mod metrics;
mod mlq;

pub use config::SchedulerConfig;
pub use metrics::Averages;
pub use mlq::MlqScheduler;

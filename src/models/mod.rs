//! Scheduling domain models.
//!
//! Provides the data types shared by the multi-level queue scheduler:
//! the processes being scheduled, the queues that hold them, and the
//! timeline a run leaves behind.
//!
//! | Type | Role |
//! |------|------|
//! | `ProcessDescriptor` | Input record from a data loader |
//! | `Process` | Runtime record with timing metrics |
//! | `Queue` / `QueuePolicy` | One priority level and its dispatch rule |
//! | `Timeline` | Dispatch and idle log of a run |

mod process;
mod queue;
mod timeline;

pub use process::{Process, ProcessDescriptor};
pub use queue::{Queue, QueuePolicy};
pub use timeline::{Dispatch, IdleInterval, Timeline};

//! Task module - identifiers, statuses, and execution records.
//!
//! Records are plain data: constructors enforce which fields a given
//! outcome carries, and nothing mutates a record after creation.

mod record;

pub use record::{ExecutionDetails, ExecutionResult, TaskId, TaskRecord, TaskStatus};

//! Agents module - simulated autonomous task execution.
//!
//! # Components
//! - **OpenManusAgent**: executes described tasks and keeps an append-only history
//! - **ExecutionStrategy**: seam between bookkeeping and the machinery that
//!   performs the work
//! - **SimulatedExecution**: shipped placeholder strategy (fixed sleep, canned
//!   multi-agent payload)
//!
//! # Design Principles
//! - Task outcomes are data on the returned record, never propagated errors
//! - History mutates only on the completed path
//! - The record-keeping contract does not depend on what sits behind the seam

mod openmanus;
mod simulated;

pub use openmanus::{
    OpenManusAgent, PreparedTask, TaskOptions, CAPABILITIES, DEFAULT_HISTORY_LIMIT, DEFAULT_MODEL,
};
pub use simulated::SimulatedExecution;

use async_trait::async_trait;

use crate::task::ExecutionResult;

/// Errors surfaced by an execution strategy.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AgentError {
    #[error("Execution error: {0}")]
    Execution(String),

    #[error("Task preparation error: {0}")]
    Preparation(String),
}

/// The work behind a task, separated from its bookkeeping.
///
/// `OpenManusAgent` enforces the deadline and turns the outcome into a
/// `TaskRecord`; implementations only perform the work. A real OpenManus
/// integration can replace [`SimulatedExecution`] without touching the
/// surrounding contract.
#[async_trait]
pub trait ExecutionStrategy: Send + Sync {
    /// Perform the prepared task.
    ///
    /// # Errors
    /// Returns `Err` when the work itself fails. Deadlines are not this
    /// trait's concern.
    async fn run(
        &self,
        task: &PreparedTask,
        use_browser: bool,
    ) -> Result<ExecutionResult, AgentError>;
}

//! # Executive Agent
//!
//! Orchestration shim for OpenManus autonomous task execution.
//!
//! This library provides:
//! - An OpenManus-backed agent for (simulated) task execution with history
//! - A workflow manager running ordered task collections sequentially or in
//!   parallel
//! - Environment-derived configuration and the harness report document
//!
//! ## Task Flow
//! 1. Receive a workflow (name + task descriptions) via `WorkflowManager`
//! 2. Fan the tasks out to `OpenManusAgent` under one coordination mode
//! 3. Collect per-task records in input order, failures included
//! 4. Store the aggregated workflow record and return it
//!
//! The execution step is a placeholder: `SimulatedExecution` sleeps briefly
//! and reports a canned multi-agent run. Substituting a real OpenManus
//! integration only requires another [`agents::ExecutionStrategy`].
//!
//! ## Modules
//! - `agents`: OpenManusAgent and the execution-strategy seam
//! - `workflow`: WorkflowManager and workflow records
//! - `task`: task identifiers, statuses, and execution records
//! - `config`: environment-derived configuration
//! - `report`: harness report document (`test_report.json`)

pub mod agents;
pub mod config;
pub mod report;
pub mod task;
pub mod workflow;

pub use agents::{ExecutionStrategy, OpenManusAgent, SimulatedExecution, TaskOptions};
pub use config::Config;
pub use task::{TaskRecord, TaskStatus};
pub use workflow::{Coordination, WorkflowManager, WorkflowRecord};

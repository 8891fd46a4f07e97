//! OpenManus-backed agent - single-task execution, multi-task fan-out, and
//! an append-only task history.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{error, info};

use super::{ExecutionStrategy, SimulatedExecution};
use crate::task::{TaskId, TaskRecord};
use crate::workflow::{Coordination, WorkflowRecord};

/// Model used when the caller has no preference.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default number of entries returned by `get_task_history`.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Capability tags advertised by every agent instance, in order.
pub const CAPABILITIES: [&str; 6] = [
    "autonomous_task_execution",
    "web_browsing",
    "code_generation",
    "data_analysis",
    "report_generation",
    "workflow_automation",
];

/// Per-call knobs for `execute_task`.
#[derive(Debug, Clone, Copy)]
pub struct TaskOptions {
    /// Whether the run may use a browser
    pub use_browser: bool,
    /// Deadline for the execution step
    pub timeout: Duration,
}

impl Default for TaskOptions {
    fn default() -> Self {
        Self {
            use_browser: true,
            timeout: Duration::from_secs(300),
        }
    }
}

/// Prepared form of a task, handed to the execution strategy.
#[derive(Debug, Clone, Serialize)]
pub struct PreparedTask {
    pub description: String,
    pub capabilities_available: Vec<String>,
    pub model: String,
    pub timestamp: DateTime<Utc>,
}

/// Agent wrapping the OpenManus autonomous-execution service.
///
/// Owns an append-only history of completed tasks; timeouts and failures
/// are returned to the caller but never recorded. The API key and model
/// are carried for the eventual real integration and are not validated.
pub struct OpenManusAgent {
    api_key: Option<String>,
    model: String,
    history: RwLock<Vec<TaskRecord>>,
    strategy: Box<dyn ExecutionStrategy>,
}

impl OpenManusAgent {
    /// Create an agent backed by the simulated execution strategy.
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Self {
        Self::with_strategy(api_key, model, Box::new(SimulatedExecution))
    }

    /// Create an agent around a custom execution strategy.
    pub fn with_strategy(
        api_key: Option<String>,
        model: impl Into<String>,
        strategy: Box<dyn ExecutionStrategy>,
    ) -> Self {
        Self {
            api_key,
            model: model.into(),
            history: RwLock::new(Vec::new()),
            strategy,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Execute a single described task under the options' deadline.
    ///
    /// Every outcome comes back as a `TaskRecord`:
    /// - the strategy returns in time -> `completed`, appended to history
    /// - the deadline elapses -> `timeout`, not appended
    /// - the strategy fails -> `failed`, not appended
    pub async fn execute_task(&self, description: &str, opts: TaskOptions) -> TaskRecord {
        let task_id = TaskId::generate();
        info!("Executing OpenManus task: {}", task_id);

        let prepared = self.prepare_task(description);

        match tokio::time::timeout(opts.timeout, self.strategy.run(&prepared, opts.use_browser))
            .await
        {
            Ok(Ok(result)) => {
                let record = TaskRecord::completed(task_id, description, result, opts.use_browser);
                self.history.write().await.push(record.clone());
                record
            }
            Ok(Err(e)) => {
                error!("Task {} failed: {}", task_id, e);
                TaskRecord::failed(task_id, description, opts.use_browser, e.to_string())
            }
            Err(_) => {
                error!("Task {} timed out", task_id);
                TaskRecord::timeout(task_id, description, opts.use_browser)
            }
        }
    }

    /// Run a set of task descriptions under one coordination mode.
    ///
    /// Individual failures never abort the remaining tasks, and `results`
    /// preserves input order in both modes: sequential runs await each task
    /// before starting the next, parallel runs collect positionally.
    pub async fn execute_multi_agent_workflow(
        &self,
        tasks: &[String],
        coordination: Coordination,
    ) -> WorkflowRecord {
        let start_time = Utc::now();
        let workflow_id = TaskId::generate();

        let results = match coordination {
            Coordination::Parallel => {
                futures::future::join_all(
                    tasks
                        .iter()
                        .map(|task| self.execute_task(task, TaskOptions::default())),
                )
                .await
            }
            Coordination::Sequential => {
                let mut results = Vec::with_capacity(tasks.len());
                for task in tasks {
                    results.push(self.execute_task(task, TaskOptions::default()).await);
                }
                results
            }
        };

        let completed_tasks = results.iter().filter(|r| r.is_completed()).count();

        WorkflowRecord {
            workflow_id: workflow_id.to_string(),
            workflow_name: None,
            coordination,
            total_tasks: tasks.len(),
            completed_tasks,
            results,
            start_time,
            end_time: Some(Utc::now()),
            error: None,
        }
    }

    fn prepare_task(&self, description: &str) -> PreparedTask {
        PreparedTask {
            description: description.to_string(),
            capabilities_available: CAPABILITIES.iter().map(|c| c.to_string()).collect(),
            model: self.model.clone(),
            timestamp: Utc::now(),
        }
    }

    /// The most recent `limit` history entries, oldest first.
    ///
    /// Does not mutate the history; a `limit` past the history length
    /// returns everything.
    pub async fn get_task_history(&self, limit: usize) -> Vec<TaskRecord> {
        let history = self.history.read().await;
        let skip = history.len().saturating_sub(limit);
        history[skip..].to_vec()
    }

    /// The fixed capability tags, always in the same order.
    pub fn get_capabilities(&self) -> &'static [&'static str] {
        &CAPABILITIES
    }
}

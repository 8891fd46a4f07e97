//! Workflow orchestration - named multi-task runs over a single agent.
//!
//! A workflow is an ordered collection of task descriptions executed under
//! one coordination mode and tracked as a single record. Records live in an
//! in-memory map owned by the manager for the process lifetime; there is no
//! retry and no persistence across restarts.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;

use crate::agents::OpenManusAgent;
use crate::task::TaskRecord;

/// How the tasks of a workflow are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Coordination {
    /// One task at a time, strict input order
    Sequential,
    /// All tasks scheduled concurrently; results stay input-ordered
    Parallel,
}

/// Aggregated record of one workflow run.
///
/// # Invariants
/// - `completed_tasks` equals the number of `completed` entries in `results`
/// - `results` preserves the input order of the task list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowRecord {
    pub workflow_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_name: Option<String>,
    pub coordination: Coordination,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub results: Vec<TaskRecord>,
    pub start_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    /// Set only when aggregation itself fails; per-task failures stay in `results`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Task dependency map, keyed by task description.
///
/// Only presence matters: a non-empty map forces sequential coordination.
/// There is no per-task resolution or topological ordering.
pub type Dependencies = HashMap<String, Vec<String>>;

/// Runs named task collections through one agent and keeps their records.
pub struct WorkflowManager {
    agent: OpenManusAgent,
    workflows: RwLock<HashMap<String, WorkflowRecord>>,
}

impl WorkflowManager {
    pub fn new(agent: OpenManusAgent) -> Self {
        Self {
            agent,
            workflows: RwLock::new(HashMap::new()),
        }
    }

    /// Access the wrapped agent (history, capabilities).
    pub fn agent(&self) -> &OpenManusAgent {
        &self.agent
    }

    /// Run a named workflow over `task_list`.
    ///
    /// A present, non-empty dependency map selects sequential coordination;
    /// anything else runs the tasks in parallel. The returned record is also
    /// stored in the manager's map under its generated `workflow_id`.
    pub async fn run_automation_workflow(
        &self,
        workflow_name: &str,
        task_list: &[String],
        dependencies: Option<&Dependencies>,
    ) -> WorkflowRecord {
        let workflow_id = format!("wf-{}", Utc::now().timestamp_micros());
        let coordination = match dependencies {
            Some(deps) if !deps.is_empty() => Coordination::Sequential,
            _ => Coordination::Parallel,
        };

        info!(
            "Running workflow '{}' ({:?}, {} tasks)",
            workflow_name,
            coordination,
            task_list.len()
        );

        let mut record = self
            .agent
            .execute_multi_agent_workflow(task_list, coordination)
            .await;
        record.workflow_name = Some(workflow_name.to_string());
        record.workflow_id = workflow_id.clone();

        self.workflows
            .write()
            .await
            .insert(workflow_id, record.clone());
        record
    }

    /// Look up a stored workflow record by id.
    pub async fn get_workflow(&self, workflow_id: &str) -> Option<WorkflowRecord> {
        self.workflows.read().await.get(workflow_id).cloned()
    }

    /// Number of workflows run so far.
    pub async fn workflow_count(&self) -> usize {
        self.workflows.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::DEFAULT_MODEL;
    use crate::task::TaskStatus;

    fn manager() -> WorkflowManager {
        WorkflowManager::new(OpenManusAgent::new(None, DEFAULT_MODEL))
    }

    fn tasks(descs: &[&str]) -> Vec<String> {
        descs.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_dependencies_select_sequential() {
        let manager = manager();
        let deps: Dependencies = HashMap::from([("t1".to_string(), vec![])]);

        let record = manager
            .run_automation_workflow("nightly", &tasks(&["t1"]), Some(&deps))
            .await;

        assert_eq!(record.coordination, Coordination::Sequential);
        assert_eq!(record.workflow_name.as_deref(), Some("nightly"));
        assert!(record.workflow_id.starts_with("wf-"));

        // The record is stored under its generated id
        let stored = manager.get_workflow(&record.workflow_id).await.unwrap();
        assert_eq!(stored.workflow_id, record.workflow_id);
        assert_eq!(manager.workflow_count().await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_dependencies_selects_parallel() {
        let manager = manager();

        let record = manager
            .run_automation_workflow("bulk", &tasks(&["t1", "t2"]), None)
            .await;
        assert_eq!(record.coordination, Coordination::Parallel);

        // An empty map counts as no dependencies
        let empty: Dependencies = HashMap::new();
        let record = manager
            .run_automation_workflow("bulk-2", &tasks(&["t1"]), Some(&empty))
            .await;
        assert_eq!(record.coordination, Coordination::Parallel);
    }

    #[tokio::test(start_paused = true)]
    async fn test_workflow_results_complete() {
        let manager = manager();
        let record = manager
            .run_automation_workflow("batch", &tasks(&["t1", "t2", "t3"]), None)
            .await;

        assert_eq!(record.total_tasks, 3);
        assert_eq!(record.completed_tasks, 3);
        assert!(record.results.iter().all(|r| r.status == TaskStatus::Completed));
        assert!(record.error.is_none());

        // Completed tasks also landed in the agent's history
        assert_eq!(manager.agent().get_task_history(10).await.len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_task_list() {
        let manager = manager();
        let record = manager.run_automation_workflow("noop", &[], None).await;

        assert_eq!(record.total_tasks, 0);
        assert_eq!(record.completed_tasks, 0);
        assert!(record.results.is_empty());
    }

    #[test]
    fn test_coordination_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Coordination::Sequential).unwrap(),
            "\"sequential\""
        );
        assert_eq!(
            serde_json::to_string(&Coordination::Parallel).unwrap(),
            "\"parallel\""
        );
    }
}

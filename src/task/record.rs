//! Execution records - the immutable bookkeeping unit for a single task.
//!
//! # Invariants
//! - A `TaskRecord` is never mutated after creation
//! - Only `completed` records carry a result payload

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a task.
///
/// Format: `om-` followed by the first 8 lowercase hex characters of a
/// random v4 UUID. IDs are never reused as map keys on an agent, so there
/// is no collision detection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Generate a fresh task ID.
    pub fn generate() -> Self {
        let hex = Uuid::new_v4().simple().to_string();
        Self(format!("om-{}", &hex[..8]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Terminal outcome of a single task.
///
/// All three outcomes come back to the caller as data on the record,
/// never as a propagated error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Execution finished before the deadline
    Completed,
    /// The deadline elapsed first
    Timeout,
    /// Preparation or execution failed for any other reason
    Failed,
}

impl TaskStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, TaskStatus::Completed)
    }
}

/// Detail block reported by an execution run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionDetails {
    /// Agents that took part in the run
    pub agents_involved: Vec<String>,
    /// Whether a browser was used
    pub browser_used: bool,
    /// Number of actions the agents performed
    pub actions_taken: u32,
    /// Outcome of data extraction
    pub data_extracted: String,
}

/// Payload produced by an execution strategy on success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub execution_details: ExecutionDetails,
    pub output: String,
}

/// Immutable record of one task execution.
///
/// Created once the task reaches a terminal outcome. Only `completed`
/// records enter the owning agent's history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRecord {
    pub task_id: TaskId,
    pub description: String,
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<ExecutionResult>,
    /// ISO-8601 creation time of the record
    pub timestamp: DateTime<Utc>,
    pub use_browser: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TaskRecord {
    /// Record for a task whose execution finished before the deadline.
    pub fn completed(
        task_id: TaskId,
        description: impl Into<String>,
        result: ExecutionResult,
        use_browser: bool,
    ) -> Self {
        Self {
            task_id,
            description: description.into(),
            status: TaskStatus::Completed,
            result: Some(result),
            timestamp: Utc::now(),
            use_browser,
            error: None,
        }
    }

    /// Record for a task whose deadline elapsed.
    pub fn timeout(task_id: TaskId, description: impl Into<String>, use_browser: bool) -> Self {
        Self {
            task_id,
            description: description.into(),
            status: TaskStatus::Timeout,
            result: None,
            timestamp: Utc::now(),
            use_browser,
            error: Some("Execution timeout".to_string()),
        }
    }

    /// Record for a task that failed during preparation or execution.
    pub fn failed(
        task_id: TaskId,
        description: impl Into<String>,
        use_browser: bool,
        error: impl Into<String>,
    ) -> Self {
        Self {
            task_id,
            description: description.into(),
            status: TaskStatus::Failed,
            result: None,
            timestamp: Utc::now(),
            use_browser,
            error: Some(error.into()),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canned_result(output: &str) -> ExecutionResult {
        ExecutionResult {
            execution_details: ExecutionDetails {
                agents_involved: vec!["planning_agent".to_string()],
                browser_used: true,
                actions_taken: 3,
                data_extracted: "success".to_string(),
            },
            output: output.to_string(),
        }
    }

    #[test]
    fn test_task_id_format() {
        let id = TaskId::generate();
        let s = id.as_str();
        assert!(s.starts_with("om-"));
        assert_eq!(s.len(), 11);
        assert!(s[3..]
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_task_ids_unique() {
        let ids: Vec<String> = (0..100)
            .map(|_| TaskId::generate().as_str().to_string())
            .collect();
        let unique: std::collections::HashSet<&String> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::Completed).unwrap(),
            "\"completed\""
        );
        assert_eq!(
            serde_json::to_string(&TaskStatus::Timeout).unwrap(),
            "\"timeout\""
        );
        assert_eq!(
            serde_json::to_string(&TaskStatus::Failed).unwrap(),
            "\"failed\""
        );
    }

    #[test]
    fn test_completed_record_shape() {
        let record = TaskRecord::completed(
            TaskId::generate(),
            "Test task",
            canned_result("Completed: Test task"),
            true,
        );
        assert!(record.is_completed());
        assert!(record.error.is_none());

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["status"], "completed");
        assert_eq!(json["result"]["output"], "Completed: Test task");
        // Absent error must not appear in the serialized record
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_timeout_record_has_error_and_no_result() {
        let record = TaskRecord::timeout(TaskId::generate(), "Slow task", false);
        assert_eq!(record.status, TaskStatus::Timeout);
        assert!(record.result.is_none());
        assert_eq!(record.error.as_deref(), Some("Execution timeout"));
        assert!(!record.use_browser);
    }
}

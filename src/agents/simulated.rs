//! Placeholder execution strategy.

use std::time::Duration;

use async_trait::async_trait;

use super::{AgentError, ExecutionStrategy, PreparedTask};
use crate::task::{ExecutionDetails, ExecutionResult};

/// Fixed duration of the simulated execution step.
const SIMULATED_WORK: Duration = Duration::from_millis(500);

/// Stand-in for real multi-agent execution.
///
/// Sleeps for [`SIMULATED_WORK`], then reports a canned three-agent run.
/// The sleep is a task's only suspension point besides the deadline wait.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedExecution;

#[async_trait]
impl ExecutionStrategy for SimulatedExecution {
    async fn run(
        &self,
        task: &PreparedTask,
        use_browser: bool,
    ) -> Result<ExecutionResult, AgentError> {
        tokio::time::sleep(SIMULATED_WORK).await;

        Ok(ExecutionResult {
            execution_details: ExecutionDetails {
                agents_involved: vec![
                    "planning_agent".to_string(),
                    "execution_agent".to_string(),
                    "validation_agent".to_string(),
                ],
                browser_used: use_browser,
                actions_taken: 3,
                data_extracted: "success".to_string(),
            },
            output: format!("Completed: {}", task.description),
        })
    }
}

//! executive-agent - demo entry point.
//!
//! Loads configuration, builds an OpenManus agent, and runs one automation
//! workflow over the task descriptions given on the command line.

use executive_agent::agents::{OpenManusAgent, DEFAULT_MODEL};
use executive_agent::config::Config;
use executive_agent::workflow::WorkflowManager;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "executive_agent=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!("Loaded configuration: agent={}", config.agent_name);

    let agent = OpenManusAgent::new(config.llm.openai_api_key.clone(), DEFAULT_MODEL);
    let manager = WorkflowManager::new(agent);

    let mut tasks: Vec<String> = std::env::args().skip(1).collect();
    if tasks.is_empty() {
        tasks = vec![
            "Summarize today's calendar".to_string(),
            "Draft a status update".to_string(),
            "Collect open action items".to_string(),
        ];
    }

    let record = manager.run_automation_workflow("demo", &tasks, None).await;
    info!(
        "Workflow {} finished: {}/{} tasks completed",
        record.workflow_id, record.completed_tasks, record.total_tasks
    );

    println!("{}", serde_json::to_string_pretty(&record)?);

    Ok(())
}

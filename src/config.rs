//! Configuration management for the executive agent.
//!
//! All options are environment-derived:
//! - `COMET_API_KEY` - Optional. Comet ML API key.
//! - `COMET_PROJECT_NAME` - Optional. Defaults to `ai-executive-agent`.
//! - `AGENT_NAME` - Optional. Defaults to `ExecutiveAssistant`.
//! - `GOOGLE_API_KEY` / `OPENAI_API_KEY` / `ANTHROPIC_API_KEY` - Optional LLM keys.
//! - `APIDOG_API_KEY` / `APIDOG_PROJECT_ID` - Optional Apidog credentials.
//! - `BROWSER_TIMEOUT` - Optional. Seconds, defaults to `30`.
//! - `HEADLESS_MODE` - Optional. Case-insensitive `true`, defaults to `true`.
//! - `VECTOR_DB_PATH` - Optional. Defaults to `./data/vectordb`.
//! - `KNOWLEDGE_BASE_PATH` - Optional. Defaults to `./data/knowledge`.
//! - `MAX_TOKENS` - Optional. Defaults to `2000`.
//! - `TEMPERATURE` - Optional. Defaults to `0.7`.

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Comet ML experiment tracking.
#[derive(Debug, Clone)]
pub struct CometConfig {
    pub api_key: Option<String>,
    pub project_name: String,
}

impl Default for CometConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            project_name: "ai-executive-agent".to_string(),
        }
    }
}

/// LLM provider keys and generation settings.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub google_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub anthropic_api_key: Option<String>,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            google_api_key: None,
            openai_api_key: None,
            anthropic_api_key: None,
            max_tokens: 2000,
            temperature: 0.7,
        }
    }
}

/// Apidog integration credentials.
#[derive(Debug, Clone, Default)]
pub struct ApidogConfig {
    pub api_key: Option<String>,
    pub project_id: Option<String>,
}

/// Browser automation settings.
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    pub timeout_secs: u64,
    pub headless: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            headless: true,
        }
    }
}

/// On-disk storage locations.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub vector_db_path: PathBuf,
    pub knowledge_base_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            vector_db_path: PathBuf::from("./data/vectordb"),
            knowledge_base_path: PathBuf::from("./data/knowledge"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub agent_name: String,
    pub comet: CometConfig,
    pub llm: LlmConfig,
    pub apidog: ApidogConfig,
    pub browser: BrowserConfig,
    pub storage: StorageConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            agent_name: "ExecutiveAssistant".to_string(),
            comet: CometConfig::default(),
            llm: LlmConfig::default(),
            apidog: ApidogConfig::default(),
            browser: BrowserConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when a numeric variable is set
    /// but does not parse. Missing variables fall back to their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            agent_name: env_or("AGENT_NAME", "ExecutiveAssistant"),
            comet: CometConfig {
                api_key: std::env::var("COMET_API_KEY").ok(),
                project_name: env_or("COMET_PROJECT_NAME", "ai-executive-agent"),
            },
            llm: LlmConfig {
                google_api_key: std::env::var("GOOGLE_API_KEY").ok(),
                openai_api_key: std::env::var("OPENAI_API_KEY").ok(),
                anthropic_api_key: std::env::var("ANTHROPIC_API_KEY").ok(),
                max_tokens: env_parsed("MAX_TOKENS", 2000)?,
                temperature: env_parsed("TEMPERATURE", 0.7)?,
            },
            apidog: ApidogConfig {
                api_key: std::env::var("APIDOG_API_KEY").ok(),
                project_id: std::env::var("APIDOG_PROJECT_ID").ok(),
            },
            browser: BrowserConfig {
                timeout_secs: env_parsed("BROWSER_TIMEOUT", 30)?,
                headless: env_bool("HEADLESS_MODE", true),
            },
            storage: StorageConfig {
                vector_db_path: PathBuf::from(env_or("VECTOR_DB_PATH", "./data/vectordb")),
                knowledge_base_path: PathBuf::from(env_or(
                    "KNOWLEDGE_BASE_PATH",
                    "./data/knowledge",
                )),
            },
        })
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_parsed<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| ConfigError::InvalidValue(name.to_string(), format!("{}", e))),
        Err(_) => Ok(default),
    }
}

fn env_bool(name: &str, default: bool) -> bool {
    match std::env::var(name) {
        Ok(raw) => raw.eq_ignore_ascii_case("true"),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own variable names so parallel test threads
    // cannot race on the process environment.

    #[test]
    fn test_env_or_default() {
        assert_eq!(env_or("EA_TEST_UNSET_STRING", "fallback"), "fallback");
        std::env::set_var("EA_TEST_SET_STRING", "custom");
        assert_eq!(env_or("EA_TEST_SET_STRING", "fallback"), "custom");
    }

    #[test]
    fn test_env_parsed_values_and_errors() {
        assert_eq!(env_parsed("EA_TEST_UNSET_INT", 2000u32).unwrap(), 2000);

        std::env::set_var("EA_TEST_GOOD_INT", "512");
        assert_eq!(env_parsed("EA_TEST_GOOD_INT", 2000u32).unwrap(), 512);

        std::env::set_var("EA_TEST_BAD_INT", "not-a-number");
        let err = env_parsed("EA_TEST_BAD_INT", 2000u32).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(name, _) if name == "EA_TEST_BAD_INT"));

        std::env::set_var("EA_TEST_GOOD_FLOAT", "0.25");
        assert_eq!(env_parsed("EA_TEST_GOOD_FLOAT", 0.7f64).unwrap(), 0.25);
    }

    #[test]
    fn test_env_bool_case_insensitive() {
        assert!(env_bool("EA_TEST_UNSET_BOOL", true));
        assert!(!env_bool("EA_TEST_UNSET_BOOL_2", false));

        std::env::set_var("EA_TEST_BOOL_TRUE", "TRUE");
        assert!(env_bool("EA_TEST_BOOL_TRUE", false));

        std::env::set_var("EA_TEST_BOOL_FALSE", "false");
        assert!(!env_bool("EA_TEST_BOOL_FALSE", true));

        // Anything other than "true" counts as false once the variable is set
        std::env::set_var("EA_TEST_BOOL_JUNK", "yes");
        assert!(!env_bool("EA_TEST_BOOL_JUNK", true));
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.agent_name, "ExecutiveAssistant");
        assert_eq!(config.comet.project_name, "ai-executive-agent");
        assert_eq!(config.llm.max_tokens, 2000);
        assert_eq!(config.llm.temperature, 0.7);
        assert_eq!(config.browser.timeout_secs, 30);
        assert!(config.browser.headless);
        assert_eq!(
            config.storage.vector_db_path,
            PathBuf::from("./data/vectordb")
        );
    }
}

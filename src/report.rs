//! Harness report document.
//!
//! After a run, the test harness persists a JSON summary to
//! `test_report.json`. Only the document shape and its writer live here;
//! console reporting belongs to the harness itself.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of a single harness test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestStatus {
    #[serde(rename = "PASS")]
    Pass,
    #[serde(rename = "FAIL")]
    Fail,
}

/// One test case entry in the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCaseResult {
    pub test: String,
    pub status: TestStatus,
    pub details: String,
}

impl TestCaseResult {
    pub fn pass(test: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            test: test.into(),
            status: TestStatus::Pass,
            details: details.into(),
        }
    }

    pub fn fail(test: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            test: test.into(),
            status: TestStatus::Fail,
            details: details.into(),
        }
    }
}

/// Summary report written after a harness run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestReport {
    pub timestamp: DateTime<Utc>,
    pub total_tests: usize,
    pub passed: usize,
    pub failed: usize,
    /// Percentage formatted to one decimal, e.g. `"83.3%"`
    pub success_rate: String,
    pub tests: Vec<TestCaseResult>,
}

impl TestReport {
    /// Tally the given case results into a report.
    pub fn from_results(tests: Vec<TestCaseResult>) -> Self {
        let total_tests = tests.len();
        let passed = tests
            .iter()
            .filter(|t| t.status == TestStatus::Pass)
            .count();
        let failed = total_tests - passed;
        let success_rate = if total_tests == 0 {
            "0.0%".to_string()
        } else {
            format!("{:.1}%", passed as f64 / total_tests as f64 * 100.0)
        };

        Self {
            timestamp: Utc::now(),
            total_tests,
            passed,
            failed,
            success_rate,
            tests,
        }
    }

    /// Persist the report as pretty-printed JSON.
    pub fn write_to(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        std::fs::write(path, contents)
    }
}

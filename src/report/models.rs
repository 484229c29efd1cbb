use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Longest detail string recorded on a result. Anything past this (stack
/// traces, full stderr dumps) adds noise without aiding diagnosis.
pub const DETAIL_MAX_CHARS: usize = 200;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Healthy,
    Unhealthy,
    Error,
    Timeout,
    Skipped,
}

impl CheckStatus {
    /// A failure for exit-code purposes. Skipped checks never fail a run.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Unhealthy | Self::Error | Self::Timeout)
    }
}

/// One probe outcome. Created once when the probe settles, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub name: String,
    pub category: String,
    pub status: CheckStatus,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<u64>,
    pub checked_at: DateTime<Utc>,
}

impl CheckResult {
    fn new(name: &str, category: &str, status: CheckStatus, detail: String) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            status,
            detail: truncate_detail(&detail),
            response_time_ms: None,
            checked_at: Utc::now(),
        }
    }

    pub fn healthy(name: &str, category: &str, detail: String) -> Self {
        Self::new(name, category, CheckStatus::Healthy, detail)
    }

    pub fn unhealthy(name: &str, category: &str, detail: String) -> Self {
        Self::new(name, category, CheckStatus::Unhealthy, detail)
    }

    pub fn error(name: &str, category: &str, detail: String) -> Self {
        Self::new(name, category, CheckStatus::Error, detail)
    }

    pub fn timeout(name: &str, category: &str, detail: String) -> Self {
        Self::new(name, category, CheckStatus::Timeout, detail)
    }

    pub fn skipped(name: &str, category: &str, detail: String) -> Self {
        Self::new(name, category, CheckStatus::Skipped, detail)
    }

    pub fn with_response_time(mut self, elapsed_ms: u64) -> Self {
        self.response_time_ms = Some(elapsed_ms);
        self
    }
}

fn truncate_detail(detail: &str) -> String {
    let detail = detail.trim();
    if detail.chars().count() <= DETAIL_MAX_CHARS {
        detail.to_string()
    } else {
        let truncated: String = detail.chars().take(DETAIL_MAX_CHARS).collect();
        format!("{truncated}…")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunSummary {
    pub total: usize,
    pub healthy: usize,
    pub unhealthy: usize,
    pub error: usize,
    pub timeout: usize,
    pub skipped: usize,
    pub health_percent: f64,
}

/// The serialized report artifact. Overwritten in full on every run; the
/// only fields that vary between runs over identical results are `run_id`
/// and the timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub version: String,
    pub summary: RunSummary,
    pub checks: Vec<CheckResult>,
}

//! Fire-and-forget event delivery to a local ingestion endpoint.
//!
//! The sink is an explicit, injectable dependency of the probe runner. The
//! core never waits on it and its failures are always swallowed — a dead
//! ingest endpoint must not change probe results or exit codes.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::configuration::SinkSettings;
use crate::report::CheckStatus;

#[derive(Debug, Clone, Serialize)]
pub struct SinkEvent {
    pub kind: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CheckStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl SinkEvent {
    pub fn probe(name: &str, status: CheckStatus, detail: &str) -> Self {
        Self {
            kind: "probe".to_string(),
            name: name.to_string(),
            status: Some(status),
            detail: Some(detail.to_string()),
            timestamp: Utc::now(),
        }
    }

    pub fn run_completed(total: usize, failures: bool) -> Self {
        Self {
            kind: "run".to_string(),
            name: format!("completed {total} checks"),
            status: None,
            detail: Some(if failures { "failures" } else { "clean" }.to_string()),
            timestamp: Utc::now(),
        }
    }
}

pub trait EventSink: Send + Sync {
    /// Must return immediately; delivery happens off the caller's path.
    fn emit(&self, event: SinkEvent);
}

/// Sink used when no ingest endpoint is configured.
pub struct NoopSink;

impl EventSink for NoopSink {
    fn emit(&self, _event: SinkEvent) {}
}

pub struct HttpEventSink {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpEventSink {
    pub fn new(endpoint: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap_or_default();
        Self { endpoint, client }
    }
}

impl EventSink for HttpEventSink {
    fn emit(&self, event: SinkEvent) {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        tokio::spawn(async move {
            if let Err(e) = client.post(&endpoint).json(&event).send().await {
                tracing::debug!("event sink delivery failed: {}", e);
            }
        });
    }
}

/// Pick the sink implied by configuration: HTTP when an endpoint is set,
/// no-op otherwise.
pub fn from_settings(settings: &Option<SinkSettings>) -> Arc<dyn EventSink> {
    match settings {
        Some(sink) => Arc::new(HttpEventSink::new(sink.endpoint.clone())),
        None => Arc::new(NoopSink),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_http_sink_posts_event() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/ingest/devdoctor")
            .match_header("content-type", "application/json")
            .with_status(200)
            .create_async()
            .await;

        let sink = HttpEventSink::new(format!("{}/ingest/devdoctor", server.url()));
        sink.emit(SinkEvent::probe("redis", CheckStatus::Healthy, "PONG"));

        // Delivery is detached; poll briefly instead of joining the task.
        for _ in 0..50 {
            if mock.matched_async().await {
                return;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        panic!("sink event never arrived");
    }

    #[tokio::test]
    async fn test_http_sink_swallows_unreachable_endpoint() {
        // Port 9 (discard) is closed on any sane dev box; emit must not panic
        // and must return without blocking on the failed delivery.
        let sink = HttpEventSink::new("http://127.0.0.1:9/ingest/devdoctor".to_string());
        sink.emit(SinkEvent::run_completed(3, false));
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
}

use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::stream::StreamExt;
use tokio::time::timeout;

use crate::configuration::ProbeSettings;
use crate::probe::executor::{CommandExecutor, ShellExecutor};
use crate::probe::spec::{ProbeKind, ProbeSpec};
use crate::report::CheckResult;
use crate::sink::{EventSink, SinkEvent};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ProbeRunner — every outcome becomes a CheckResult
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// A probe batch must always run to completion: non-zero exits, refused
// connections, missing binaries, and timeouts are recorded, never raised.
// No retries.

pub struct ProbeRunner {
    executor: Arc<dyn CommandExecutor>,
    sink: Arc<dyn EventSink>,
    http: reqwest::Client,
    default_timeout: Duration,
    concurrency: usize,
}

impl ProbeRunner {
    pub fn new(settings: &ProbeSettings, sink: Arc<dyn EventSink>) -> Self {
        Self::with_executor(settings, sink, Arc::new(ShellExecutor))
    }

    pub fn with_executor(
        settings: &ProbeSettings,
        sink: Arc<dyn EventSink>,
        executor: Arc<dyn CommandExecutor>,
    ) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs.max(1)))
            .build()
            .unwrap_or_default();
        Self {
            executor,
            sink,
            http,
            default_timeout: Duration::from_secs(settings.timeout_secs.max(1)),
            concurrency: settings.concurrency.max(1),
        }
    }

    #[cfg(test)]
    pub fn for_tests(executor: Arc<dyn CommandExecutor>, concurrency: usize) -> Self {
        Self::with_executor(
            &ProbeSettings {
                timeout_secs: 2,
                concurrency,
            },
            Arc::new(crate::sink::NoopSink),
            executor,
        )
    }

    /// Run every probe with at most `concurrency` in flight, then restore
    /// submission order so reports are deterministic regardless of which
    /// probe settles first.
    pub async fn run_all(&self, specs: Vec<ProbeSpec>) -> Vec<CheckResult> {
        let total = specs.len();
        let mut indexed: Vec<(usize, CheckResult)> =
            futures::stream::iter(specs.into_iter().enumerate().map(|(idx, spec)| async move {
                (idx, self.run_one(spec).await)
            }))
            .buffer_unordered(self.concurrency)
            .collect()
            .await;

        indexed.sort_by_key(|(idx, _)| *idx);
        let results: Vec<CheckResult> = indexed.into_iter().map(|(_, r)| r).collect();

        let failures = results.iter().any(|r| r.status.is_failure());
        self.sink.emit(SinkEvent::run_completed(total, failures));
        results
    }

    /// Run a single probe under its timeout.
    #[tracing::instrument(name = "Run probe", skip(self, spec), fields(probe = %spec.name))]
    pub async fn run_one(&self, spec: ProbeSpec) -> CheckResult {
        let probe_timeout = spec
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(self.default_timeout);
        let start = Instant::now();

        let result = match timeout(probe_timeout, self.dispatch(&spec)).await {
            Ok(result) => {
                let elapsed = start.elapsed().as_millis() as u64;
                result.with_response_time(elapsed)
            }
            Err(_) => {
                tracing::warn!(probe = %spec.name, "probe timed out");
                CheckResult::timeout(
                    &spec.name,
                    &spec.category,
                    format!("Timed out after {}s", probe_timeout.as_secs()),
                )
            }
        };

        self.sink
            .emit(SinkEvent::probe(&result.name, result.status, &result.detail));
        result
    }

    async fn dispatch(&self, spec: &ProbeSpec) -> CheckResult {
        match &spec.kind {
            ProbeKind::Command { program, args } => {
                self.check_command(spec, program, args).await
            }
            ProbeKind::Tcp { host, port } => self.check_tcp(spec, host, *port).await,
            ProbeKind::Http { url } => self.check_http(spec, url).await,
            ProbeKind::Redis { url } => self.check_redis(spec, url).await,
        }
    }

    async fn check_command(&self, spec: &ProbeSpec, program: &str, args: &[String]) -> CheckResult {
        match self.executor.execute(program, args).await {
            Ok(output) if output.success() => {
                CheckResult::healthy(&spec.name, &spec.category, output.summary_line())
            }
            Ok(output) => {
                let detail = format!("exit {}: {}", output.exit_code, output.summary_line());
                CheckResult::unhealthy(&spec.name, &spec.category, detail)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => CheckResult::error(
                &spec.name,
                &spec.category,
                format!("command not found: {program}"),
            ),
            Err(e) => {
                tracing::warn!(probe = %spec.name, "failed to spawn {}: {}", program, e);
                CheckResult::error(&spec.name, &spec.category, format!("spawn failed: {e}"))
            }
        }
    }

    async fn check_tcp(&self, spec: &ProbeSpec, host: &str, port: u16) -> CheckResult {
        match tokio::net::TcpStream::connect((host, port)).await {
            Ok(_) => CheckResult::healthy(
                &spec.name,
                &spec.category,
                format!("connected to {host}:{port}"),
            ),
            Err(e) => CheckResult::unhealthy(
                &spec.name,
                &spec.category,
                format!("{host}:{port} unreachable: {e}"),
            ),
        }
    }

    async fn check_http(&self, spec: &ProbeSpec, url: &str) -> CheckResult {
        match self.http.get(url).send().await {
            Ok(response) if response.status().is_success() => CheckResult::healthy(
                &spec.name,
                &spec.category,
                format!("HTTP {}", response.status().as_u16()),
            ),
            Ok(response) => CheckResult::unhealthy(
                &spec.name,
                &spec.category,
                format!("HTTP {}", response.status().as_u16()),
            ),
            Err(e) => {
                CheckResult::unhealthy(&spec.name, &spec.category, format!("request failed: {e}"))
            }
        }
    }

    async fn check_redis(&self, spec: &ProbeSpec, url: &str) -> CheckResult {
        let client = match redis::Client::open(url) {
            Ok(client) => client,
            Err(e) => {
                return CheckResult::error(
                    &spec.name,
                    &spec.category,
                    format!("bad redis url: {e}"),
                )
            }
        };

        match client.get_multiplexed_async_connection().await {
            Ok(mut conn) => {
                let ping: Result<String, redis::RedisError> =
                    redis::cmd("PING").query_async(&mut conn).await;
                match ping {
                    Ok(reply) => CheckResult::healthy(&spec.name, &spec.category, reply),
                    Err(e) => CheckResult::unhealthy(
                        &spec.name,
                        &spec.category,
                        format!("PING failed: {e}"),
                    ),
                }
            }
            Err(e) => {
                CheckResult::unhealthy(&spec.name, &spec.category, format!("unreachable: {e}"))
            }
        }
    }
}

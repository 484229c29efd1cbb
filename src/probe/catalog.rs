//! Built-in probe sets. These replace the pile of near-duplicate one-off
//! scripts that each hardcoded the same localhost ports and tool lists.

use crate::configuration::ServiceSettings;
use crate::probe::spec::ProbeSpec;

pub const SERVICES_CATEGORY: &str = "services";
pub const TOOLS_CATEGORY: &str = "tools";

/// CLI tools expected on a workstation PATH. Absence is a failed check,
/// never a fatal error.
const EXPECTED_TOOLS: &[&str] = &[
    "docker",
    "git",
    "npm",
    "pnpm",
    "redis-cli",
    "pg_isready",
    "curl",
    "gh",
    "brew",
];

/// Probes for the local service roster: docker daemon, redis, postgres,
/// neo4j (http + bolt), qdrant, ollama, kafka, temporal.
pub fn service_probes(services: &ServiceSettings) -> Vec<ProbeSpec> {
    let host = services.host.as_str();
    vec![
        ProbeSpec::command("docker", SERVICES_CATEGORY, "docker", &["info", "--format", "{{.ServerVersion}}"]),
        ProbeSpec::redis(
            "redis",
            SERVICES_CATEGORY,
            &format!("redis://{host}:{}/", services.redis_port),
        ),
        ProbeSpec::tcp("postgres", SERVICES_CATEGORY, host, services.postgres_port),
        ProbeSpec::http(
            "neo4j",
            SERVICES_CATEGORY,
            &format!("http://{host}:{}/", services.neo4j_http_port),
        ),
        ProbeSpec::tcp("neo4j-bolt", SERVICES_CATEGORY, host, services.neo4j_bolt_port),
        ProbeSpec::http(
            "qdrant",
            SERVICES_CATEGORY,
            &format!("http://{host}:{}/healthz", services.qdrant_port),
        ),
        ProbeSpec::http(
            "ollama",
            SERVICES_CATEGORY,
            &format!("http://{host}:{}/api/tags", services.ollama_port),
        ),
        ProbeSpec::tcp("kafka", SERVICES_CATEGORY, host, services.kafka_port),
        ProbeSpec::tcp("temporal", SERVICES_CATEGORY, host, services.temporal_port),
    ]
}

/// Presence checks for expected CLI tools via `<tool> --version`.
pub fn tool_probes() -> Vec<ProbeSpec> {
    EXPECTED_TOOLS
        .iter()
        .map(|tool| ProbeSpec::command(tool, TOOLS_CATEGORY, tool, &["--version"]))
        .collect()
}

/// The default `check` run: services first, then tools.
pub fn default_probes(services: &ServiceSettings) -> Vec<ProbeSpec> {
    let mut probes = service_probes(services);
    probes.extend(tool_probes());
    probes
}

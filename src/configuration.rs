use serde;
use std::path::PathBuf;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    /// Root of the developer workspace being audited. Required — there is no
    /// sensible default for a machine-specific path.
    pub dev_root: PathBuf,
    #[serde(default)]
    pub report: ReportSettings,
    #[serde(default)]
    pub probes: ProbeSettings,
    #[serde(default)]
    pub services: ServiceSettings,
    #[serde(default)]
    pub sink: Option<SinkSettings>,
    #[serde(default)]
    pub mcp: McpSettings,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct ReportSettings {
    pub path: PathBuf,
    pub audit_path: PathBuf,
    pub mcp_path: PathBuf,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("reports/devdoctor-report.json"),
            audit_path: PathBuf::from("reports/organization-audit-report.json"),
            mcp_path: PathBuf::from("reports/mcp-server-validation-report.json"),
        }
    }
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct ProbeSettings {
    /// Per-probe timeout in seconds, unless the probe spec overrides it.
    pub timeout_secs: u64,
    /// Upper bound on probes in flight at once. 1 = fully sequential.
    pub concurrency: usize,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 5,
            concurrency: 4,
        }
    }
}

/// Ports for the local services the built-in catalog probes. The defaults
/// are the conventional localhost ports; override any of them in
/// `devdoctor.yaml` when a service runs elsewhere.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ServiceSettings {
    pub host: String,
    pub postgres_port: u16,
    pub redis_port: u16,
    pub neo4j_http_port: u16,
    pub neo4j_bolt_port: u16,
    pub qdrant_port: u16,
    pub ollama_port: u16,
    pub kafka_port: u16,
    pub temporal_port: u16,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            postgres_port: 5432,
            redis_port: 6379,
            neo4j_http_port: 7474,
            neo4j_bolt_port: 7687,
            qdrant_port: 6333,
            ollama_port: 11434,
            kafka_port: 9092,
            temporal_port: 7233,
        }
    }
}

/// Optional fire-and-forget event ingestion endpoint. When absent, events
/// are dropped locally instead of POSTed.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct SinkSettings {
    pub endpoint: String,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct McpSettings {
    /// Canonical MCP config file. Defaults to `.cursor/mcp.json` under
    /// `dev_root` when unset.
    pub config_path: Option<PathBuf>,
    /// Catalog to pull server definitions from during `mcp sync`.
    pub catalog_url: Option<String>,
}

impl Settings {
    pub fn mcp_config_path(&self) -> PathBuf {
        self.mcp
            .config_path
            .clone()
            .unwrap_or_else(|| self.dev_root.join(".cursor").join("mcp.json"))
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let mut settings = config::Config::default();

    // Optional configuration file named `devdoctor` (.json, .toml, .yaml, .yml),
    // then DEVDOCTOR_-prefixed environment variables on top
    // (e.g. DEVDOCTOR_DEV_ROOT, DEVDOCTOR_REPORT__PATH).
    settings.merge(config::File::with_name("devdoctor").required(false))?;
    settings.merge(
        config::Environment::with_prefix("DEVDOCTOR")
            .prefix_separator("_")
            .separator("__"),
    )?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_report_paths() {
        let report = ReportSettings::default();
        assert_eq!(report.path, PathBuf::from("reports/devdoctor-report.json"));
        assert_eq!(
            report.audit_path,
            PathBuf::from("reports/organization-audit-report.json")
        );
    }

    #[test]
    fn test_default_service_ports() {
        let services = ServiceSettings::default();
        assert_eq!(services.postgres_port, 5432);
        assert_eq!(services.redis_port, 6379);
        assert_eq!(services.ollama_port, 11434);
        assert_eq!(services.temporal_port, 7233);
    }

    #[test]
    fn test_mcp_config_path_falls_back_under_dev_root() {
        let settings = Settings {
            dev_root: PathBuf::from("/home/dev/workspace"),
            report: ReportSettings::default(),
            probes: ProbeSettings::default(),
            services: ServiceSettings::default(),
            sink: None,
            mcp: McpSettings::default(),
        };
        assert_eq!(
            settings.mcp_config_path(),
            PathBuf::from("/home/dev/workspace/.cursor/mcp.json")
        );
    }
}

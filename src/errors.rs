use std::path::PathBuf;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// DoctorError — setup-phase failures only
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Probe outcomes are never errors; they are recorded as CheckResults and the
// run continues. Everything here aborts the run before or after the probe
// loop (bad config, unreadable probe file, unwritable report).

#[derive(Debug, thiserror::Error)]
pub enum DoctorError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Probe file not found: {path}")]
    ProbeFileNotFound { path: PathBuf },

    #[error("Failed to parse probe file {path}: {source}")]
    ProbeFileParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("MCP config not found: {path}")]
    McpConfigNotFound { path: PathBuf },

    #[error("Failed to parse MCP config {path}: {source}")]
    McpConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("No MCP catalog URL configured. Set mcp.catalog_url in devdoctor.yaml")]
    CatalogUrlMissing,

    #[error("Catalog request failed: {0}")]
    CatalogFetch(#[from] reqwest::Error),

    #[error("Failed to serialize report: {0}")]
    ReportSerialize(#[from] serde_json::Error),

    #[error("Failed to write report to {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

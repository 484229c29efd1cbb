//! Canonical MCP (Model Context Protocol) config file — the JSON map of
//! AI-tool servers an IDE launches. Read/written leniently: missing fields
//! tolerated, server order preserved.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::errors::DoctorError;
use crate::report::CheckResult;

pub const MCP_CATEGORY: &str = "mcp";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct McpConfig {
    #[serde(rename = "mcpServers", default)]
    pub servers: IndexMap<String, McpServerSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct McpServerSpec {
    /// Launch command for subprocess-based servers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub env: IndexMap<String, String>,
    /// Endpoint for remote servers (mutually exclusive with `command` in
    /// practice, but both being set is tolerated).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
}

impl McpConfig {
    pub fn load(path: &Path) -> Result<Self, DoctorError> {
        if !path.exists() {
            return Err(DoctorError::McpConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|source| DoctorError::McpConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the config, or start from an empty one when the file does not
    /// exist yet (first `mcp sync` on a fresh machine).
    pub fn load_or_default(path: &Path) -> Result<Self, DoctorError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), DoctorError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let body = serde_json::to_string_pretty(self)?;
        std::fs::write(path, body)?;
        Ok(())
    }

    pub fn enabled(&self) -> impl Iterator<Item = (&String, &McpServerSpec)> {
        self.servers.iter().filter(|(_, spec)| !spec.disabled)
    }

    /// Structural validation, one result per server. Disabled servers are
    /// skipped, not failed.
    pub fn validate(&self) -> Vec<CheckResult> {
        self.servers
            .iter()
            .map(|(name, spec)| validate_server(name, spec))
            .collect()
    }
}

fn validate_server(name: &str, spec: &McpServerSpec) -> CheckResult {
    if spec.disabled {
        return CheckResult::skipped(name, MCP_CATEGORY, "disabled".to_string());
    }

    if let Some(command) = spec.command.as_deref() {
        if command.trim().is_empty() {
            return CheckResult::unhealthy(name, MCP_CATEGORY, "empty command".to_string());
        }
    }

    if let Some((key, _)) = spec.env.iter().find(|(_, v)| v.trim().is_empty()) {
        return CheckResult::unhealthy(
            name,
            MCP_CATEGORY,
            format!("env var {key} has an empty value"),
        );
    }

    match (spec.command.as_deref(), spec.url.as_deref()) {
        (Some(command), _) => CheckResult::healthy(
            name,
            MCP_CATEGORY,
            format!("launches via `{}`", command),
        ),
        (None, Some(url)) => {
            CheckResult::healthy(name, MCP_CATEGORY, format!("remote at {url}"))
        }
        (None, None) => CheckResult::unhealthy(
            name,
            MCP_CATEGORY,
            "neither command nor url set".to_string(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::CheckStatus;

    const SAMPLE: &str = r#"{
        "mcpServers": {
            "filesystem": {
                "command": "npx",
                "args": ["-y", "@modelcontextprotocol/server-filesystem", "/tmp"]
            },
            "memory": {
                "url": "http://127.0.0.1:8765/sse"
            },
            "broken": {},
            "legacy": {
                "command": "node",
                "disabled": true
            }
        }
    }"#;

    fn sample() -> McpConfig {
        serde_json::from_str(SAMPLE).unwrap()
    }

    #[test]
    fn test_parse_preserves_server_order() {
        let config = sample();
        let names: Vec<&String> = config.servers.keys().collect();
        assert_eq!(names, vec!["filesystem", "memory", "broken", "legacy"]);
    }

    #[test]
    fn test_enabled_excludes_disabled_servers() {
        let config = sample();
        assert_eq!(config.enabled().count(), 3);
    }

    #[test]
    fn test_validate_statuses() {
        let results = sample().validate();
        assert_eq!(results.len(), 4);
        assert_eq!(results[0].status, CheckStatus::Healthy);
        assert_eq!(results[1].status, CheckStatus::Healthy);
        assert_eq!(results[2].status, CheckStatus::Unhealthy);
        assert!(results[2].detail.contains("neither command nor url"));
        assert_eq!(results[3].status, CheckStatus::Skipped);
    }

    #[test]
    fn test_validate_flags_empty_env_value() {
        let mut config = sample();
        config
            .servers
            .get_mut("filesystem")
            .unwrap()
            .env
            .insert("API_KEY".to_string(), "".to_string());

        let results = config.validate();
        assert_eq!(results[0].status, CheckStatus::Unhealthy);
        assert!(results[0].detail.contains("API_KEY"));
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(".cursor").join("mcp.json");

        let config = sample();
        config.save(&path).unwrap();

        let reloaded = McpConfig::load(&path).unwrap();
        assert_eq!(reloaded.servers.len(), 4);
        assert_eq!(
            reloaded.servers["filesystem"].command.as_deref(),
            Some("npx")
        );
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let err = McpConfig::load(Path::new("/nonexistent/mcp.json")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}

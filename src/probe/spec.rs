use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::DoctorError;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ProbeSpec — one named external check
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeSpec {
    pub name: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(flatten)]
    pub kind: ProbeKind,
    /// Overrides the run-wide probe timeout when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_category() -> String {
    "general".to_string()
}

/// The observed probe shapes: run a command, open a TCP connection, issue an
/// HTTP GET. Redis gets a protocol-level PING since a TCP connect alone says
/// nothing about a wedged server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProbeKind {
    Command {
        program: String,
        #[serde(default)]
        args: Vec<String>,
    },
    Tcp {
        host: String,
        port: u16,
    },
    Http {
        url: String,
    },
    Redis {
        url: String,
    },
}

impl ProbeSpec {
    pub fn command(name: &str, category: &str, program: &str, args: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            kind: ProbeKind::Command {
                program: program.to_string(),
                args: args.iter().map(|a| a.to_string()).collect(),
            },
            timeout_secs: None,
        }
    }

    pub fn tcp(name: &str, category: &str, host: &str, port: u16) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            kind: ProbeKind::Tcp {
                host: host.to_string(),
                port,
            },
            timeout_secs: None,
        }
    }

    pub fn http(name: &str, category: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            kind: ProbeKind::Http {
                url: url.to_string(),
            },
            timeout_secs: None,
        }
    }

    pub fn redis(name: &str, category: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            kind: ProbeKind::Redis {
                url: url.to_string(),
            },
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeFile {
    pub probes: Vec<ProbeSpec>,
}

/// Load a probe set from a YAML (or JSON) file.
pub fn load_probe_file(path: &Path) -> Result<Vec<ProbeSpec>, DoctorError> {
    if !path.exists() {
        return Err(DoctorError::ProbeFileNotFound {
            path: path.to_path_buf(),
        });
    }
    let raw = std::fs::read_to_string(path)?;
    let file: ProbeFile =
        serde_yaml::from_str(&raw).map_err(|source| DoctorError::ProbeFileParse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(file.probes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_probe_file_yaml() {
        let yaml = r#"
probes:
  - name: redis
    category: services
    type: tcp
    host: 127.0.0.1
    port: 6379
  - name: docker
    type: command
    program: docker
    args: ["info"]
    timeout_secs: 10
  - name: ollama
    category: services
    type: http
    url: http://127.0.0.1:11434/api/tags
"#;
        let file: ProbeFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(file.probes.len(), 3);

        assert!(matches!(
            &file.probes[0].kind,
            ProbeKind::Tcp { host, port: 6379 } if host == "127.0.0.1"
        ));
        // category defaults when omitted
        assert_eq!(file.probes[1].category, "general");
        assert_eq!(file.probes[1].timeout_secs, Some(10));
        assert!(matches!(&file.probes[2].kind, ProbeKind::Http { .. }));
    }

    #[test]
    fn test_missing_probe_file_is_an_error() {
        let err = load_probe_file(Path::new("/nonexistent/probes.yaml")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}

//! Pull server definitions from the hosted catalog into the canonical
//! config. The merge is additive: catalog entries missing locally are
//! added, existing local entries are never overwritten or deleted.

use std::path::Path;
use std::time::Duration;

use crate::errors::DoctorError;

use super::config::McpConfig;

#[derive(Debug, Clone)]
pub struct SyncOutcome {
    pub added: Vec<String>,
    pub unchanged: usize,
    pub total: usize,
}

#[tracing::instrument(name = "Sync MCP catalog", skip(config_path))]
pub async fn sync_from_catalog(
    config_path: &Path,
    catalog_url: &str,
) -> Result<SyncOutcome, DoctorError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()?;
    let catalog: McpConfig = client
        .get(catalog_url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let mut local = McpConfig::load_or_default(config_path)?;
    let outcome = merge_catalog(&mut local, catalog);
    local.save(config_path)?;

    tracing::info!(
        added = outcome.added.len(),
        total = outcome.total,
        "catalog sync complete"
    );
    Ok(outcome)
}

fn merge_catalog(local: &mut McpConfig, catalog: McpConfig) -> SyncOutcome {
    let mut added = Vec::new();
    let mut unchanged = 0;

    for (name, spec) in catalog.servers {
        if local.servers.contains_key(&name) {
            unchanged += 1;
        } else {
            local.servers.insert(name.clone(), spec);
            added.push(name);
        }
    }

    SyncOutcome {
        added,
        unchanged,
        total: local.servers.len(),
    }
}

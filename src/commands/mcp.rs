//! `devdoctor mcp` — canonical MCP config upkeep.

use std::path::PathBuf;
use std::process::ExitCode;

use colored::Colorize;

use crate::configuration::Settings;
use crate::errors::DoctorError;
use crate::mcp::{sync_from_catalog, McpConfig};
use crate::report::ReportAggregator;

use super::finish_run;

pub enum McpAction {
    Validate { json: bool },
    Show,
    Sync,
}

pub struct McpOptions {
    pub action: McpAction,
    pub config_path: Option<PathBuf>,
}

pub async fn run(settings: &Settings, opts: McpOptions) -> Result<ExitCode, DoctorError> {
    let config_path = opts
        .config_path
        .unwrap_or_else(|| settings.mcp_config_path());

    match opts.action {
        McpAction::Validate { json } => {
            let config = McpConfig::load(&config_path)?;
            let mut aggregator = ReportAggregator::new();
            aggregator.extend(config.validate());
            finish_run(aggregator, json, &settings.report.mcp_path)
        }
        McpAction::Show => {
            let config = McpConfig::load(&config_path)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(ExitCode::SUCCESS)
        }
        McpAction::Sync => {
            let catalog_url = settings
                .mcp
                .catalog_url
                .as_deref()
                .ok_or(DoctorError::CatalogUrlMissing)?;

            let outcome = sync_from_catalog(&config_path, catalog_url).await?;
            if outcome.added.is_empty() {
                println!(
                    "{} Canonical config up to date ({} servers)",
                    "✓".green().bold(),
                    outcome.total
                );
            } else {
                for name in &outcome.added {
                    println!("{} added {}", "+".green().bold(), name);
                }
                println!(
                    "{} server(s) added, {} unchanged, {} total",
                    outcome.added.len(),
                    outcome.unchanged,
                    outcome.total
                );
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

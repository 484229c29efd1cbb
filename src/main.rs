//! `devdoctor` CLI binary.
//!
//! ```text
//! devdoctor check
//! devdoctor check --probes probes.yaml --json
//! devdoctor audit
//! devdoctor mcp validate
//! devdoctor mcp sync
//! ```
//!
//! Exit codes: 0 = all checks healthy or skipped, 1 = at least one
//! unhealthy/error/timeout result, 2 = setup failure (bad configuration,
//! unreadable input, unwritable report).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use devdoctor::commands::audit::AuditOptions;
use devdoctor::commands::check::CheckOptions;
use devdoctor::commands::mcp::{McpAction, McpOptions};
use devdoctor::configuration::get_configuration;
use devdoctor::telemetry::{get_subscriber, init_subscriber};
use devdoctor::{commands, errors::DoctorError};

#[derive(Parser, Debug)]
#[command(
    name = "devdoctor",
    version,
    about = "Workstation health probes, MCP config upkeep, and layout audits",
    long_about = "devdoctor — one parameterized health-check/report pipeline\n\n\
        Probes local services (docker, redis, postgres, neo4j, qdrant, ollama,\n\
        kafka, temporal) and CLI tooling, audits workspace layout conventions,\n\
        and keeps the canonical MCP config in sync with a hosted catalog.\n\
        Every run prints a colorized console report and writes a JSON artifact."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run health probes against local services and CLI tools
    Check {
        /// Probe set file (YAML); defaults to the built-in catalog
        #[arg(long, value_name = "FILE")]
        probes: Option<PathBuf>,
        /// Only run probes in this category (e.g. services, tools)
        #[arg(long)]
        category: Option<String>,
        /// Print the report as JSON instead of the console view
        #[arg(long)]
        json: bool,
        /// JSON report output path (overrides configuration)
        #[arg(long, value_name = "PATH")]
        report: Option<PathBuf>,
        /// Max probes in flight at once (1 = sequential)
        #[arg(long, value_name = "N")]
        concurrency: Option<usize>,
        /// Per-probe timeout in seconds
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,
    },
    /// Audit workspace layout conventions under the configured dev root
    Audit {
        /// Print the report as JSON instead of the console view
        #[arg(long)]
        json: bool,
        /// JSON report output path (overrides configuration)
        #[arg(long, value_name = "PATH")]
        report: Option<PathBuf>,
    },
    /// Canonical MCP config management
    Mcp {
        #[command(subcommand)]
        command: McpCommands,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
enum McpCommands {
    /// Structurally validate the canonical MCP config
    Validate {
        /// Config file (default: <dev_root>/.cursor/mcp.json)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
        /// Print the report as JSON instead of the console view
        #[arg(long)]
        json: bool,
    },
    /// Print the canonical config
    Show {
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// Merge catalog servers into the canonical config
    Sync {
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(*shell, &mut cmd, "devdoctor", &mut std::io::stdout());
        return ExitCode::SUCCESS;
    }

    let subscriber = get_subscriber("devdoctor".into(), "warn".into());
    init_subscriber(subscriber);

    let settings = match get_configuration() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(2);
        }
    };

    let result: Result<ExitCode, DoctorError> = match cli.command {
        Commands::Check {
            probes,
            category,
            json,
            report,
            concurrency,
            timeout,
        } => {
            commands::check::run(
                &settings,
                CheckOptions {
                    probe_file: probes,
                    category,
                    json,
                    report_path: report,
                    concurrency,
                    timeout_secs: timeout,
                },
            )
            .await
        }
        Commands::Audit { json, report } => commands::audit::run(
            &settings,
            AuditOptions {
                json,
                report_path: report,
            },
        ),
        Commands::Mcp { command } => {
            let opts = match command {
                McpCommands::Validate { config, json } => McpOptions {
                    action: McpAction::Validate { json },
                    config_path: config,
                },
                McpCommands::Show { config } => McpOptions {
                    action: McpAction::Show,
                    config_path: config,
                },
                McpCommands::Sync { config } => McpOptions {
                    action: McpAction::Sync,
                    config_path: config,
                },
            };
            commands::mcp::run(&settings, opts).await
        }
        Commands::Completions { .. } => unreachable!(),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}

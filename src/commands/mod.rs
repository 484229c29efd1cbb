pub mod audit;
pub mod check;
pub mod mcp;
pub mod progress;

use std::path::Path;
use std::process::ExitCode;

use crate::errors::DoctorError;
use crate::report::{console, json, ReportAggregator};

/// Exit code for a run that completed but found failures.
pub const EXIT_FAILURES: u8 = 1;

/// Render the aggregate, persist the JSON artifact, and map the outcome to
/// the exit-code contract: 0 all healthy/skipped, 1 any failure. Setup
/// errors (2) propagate as `Err` and are handled in main.
pub(crate) fn finish_run(
    aggregator: ReportAggregator,
    as_json: bool,
    report_path: &Path,
) -> Result<ExitCode, DoctorError> {
    let failed = aggregator.has_failures();
    let report = aggregator.into_report(env!("CARGO_PKG_VERSION"));

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        console::render(&report);
    }

    json::write_report(report_path, &report)?;
    if !as_json {
        println!("\nReport written to {}", report_path.display());
    }

    Ok(if failed {
        ExitCode::from(EXIT_FAILURES)
    } else {
        ExitCode::SUCCESS
    })
}

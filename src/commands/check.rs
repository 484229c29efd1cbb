//! `devdoctor check` — run the health probe batch and report.

use std::path::PathBuf;
use std::process::ExitCode;

use crate::configuration::{ProbeSettings, Settings};
use crate::errors::DoctorError;
use crate::probe::{catalog, load_probe_file, ProbeRunner};
use crate::report::ReportAggregator;
use crate::sink;

use super::{finish_run, progress};

pub struct CheckOptions {
    /// Probe set file; defaults to the built-in catalog when absent.
    pub probe_file: Option<PathBuf>,
    pub category: Option<String>,
    pub json: bool,
    pub report_path: Option<PathBuf>,
    pub concurrency: Option<usize>,
    pub timeout_secs: Option<u64>,
}

pub async fn run(settings: &Settings, opts: CheckOptions) -> Result<ExitCode, DoctorError> {
    let mut specs = match &opts.probe_file {
        Some(path) => load_probe_file(path)?,
        None => catalog::default_probes(&settings.services),
    };

    if let Some(category) = &opts.category {
        specs.retain(|s| &s.category == category);
    }

    let probe_settings = ProbeSettings {
        timeout_secs: opts.timeout_secs.unwrap_or(settings.probes.timeout_secs),
        concurrency: opts.concurrency.unwrap_or(settings.probes.concurrency),
    };
    let runner = ProbeRunner::new(&probe_settings, sink::from_settings(&settings.sink));

    let spinner = (!opts.json).then(|| progress::probe_spinner(specs.len()));
    let results = runner.run_all(specs).await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let mut aggregator = ReportAggregator::new();
    aggregator.extend(results);

    let report_path = opts
        .report_path
        .unwrap_or_else(|| settings.report.path.clone());
    finish_run(aggregator, opts.json, &report_path)
}

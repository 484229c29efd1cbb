//! `devdoctor audit` — layout convention checks over the dev root.

use std::path::PathBuf;
use std::process::ExitCode;

use crate::audit::{LayoutAudit, RealFileSystem};
use crate::configuration::Settings;
use crate::errors::DoctorError;
use crate::report::ReportAggregator;

use super::finish_run;

pub struct AuditOptions {
    pub json: bool,
    pub report_path: Option<PathBuf>,
}

pub fn run(settings: &Settings, opts: AuditOptions) -> Result<ExitCode, DoctorError> {
    let fs = RealFileSystem;
    let results = LayoutAudit::new(&fs, &settings.dev_root).run();

    let mut aggregator = ReportAggregator::new();
    aggregator.extend(results);

    let report_path = opts
        .report_path
        .unwrap_or_else(|| settings.report.audit_path.clone());
    finish_run(aggregator, opts.json, &report_path)
}

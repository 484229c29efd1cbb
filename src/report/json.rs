//! JSON report artifact. The file is overwritten in full on every run —
//! no history, no rotation. Missing parent directories are created.

use std::fs;
use std::path::Path;

use crate::errors::DoctorError;

use super::models::RunReport;

pub fn write_report(path: &Path, report: &RunReport) -> Result<(), DoctorError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| DoctorError::ReportWrite {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }

    let body = serde_json::to_string_pretty(report)?;
    fs::write(path, body).map_err(|source| DoctorError::ReportWrite {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), "report written");
    Ok(())
}

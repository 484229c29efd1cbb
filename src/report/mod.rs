pub mod aggregator;
pub mod console;
pub mod json;
pub mod models;

pub use aggregator::ReportAggregator;
pub use models::{CheckResult, CheckStatus, RunReport, RunSummary};

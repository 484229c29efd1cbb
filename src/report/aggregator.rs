use chrono::Utc;
use uuid::Uuid;

use super::models::{CheckResult, CheckStatus, RunReport, RunSummary};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ReportAggregator — append-only, insertion-ordered
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Default)]
pub struct ReportAggregator {
    checks: Vec<CheckResult>,
}

impl ReportAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: CheckResult) {
        self.checks.push(result);
    }

    pub fn extend(&mut self, results: impl IntoIterator<Item = CheckResult>) {
        self.checks.extend(results);
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    pub fn checks(&self) -> &[CheckResult] {
        &self.checks
    }

    pub fn has_failures(&self) -> bool {
        self.checks.iter().any(|c| c.status.is_failure())
    }

    /// Status counts partition the total: every result is counted exactly
    /// once. An empty run reports 0% healthy rather than dividing by zero.
    pub fn summary(&self) -> RunSummary {
        let mut summary = RunSummary {
            total: self.checks.len(),
            healthy: 0,
            unhealthy: 0,
            error: 0,
            timeout: 0,
            skipped: 0,
            health_percent: 0.0,
        };

        for check in &self.checks {
            match check.status {
                CheckStatus::Healthy => summary.healthy += 1,
                CheckStatus::Unhealthy => summary.unhealthy += 1,
                CheckStatus::Error => summary.error += 1,
                CheckStatus::Timeout => summary.timeout += 1,
                CheckStatus::Skipped => summary.skipped += 1,
            }
        }

        if summary.total > 0 {
            summary.health_percent = summary.healthy as f64 / summary.total as f64 * 100.0;
        }

        summary
    }

    pub fn into_report(self, version: &str) -> RunReport {
        let summary = self.summary();
        RunReport {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            version: version.to_string(),
            summary,
            checks: self.checks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, status: CheckStatus) -> CheckResult {
        match status {
            CheckStatus::Healthy => CheckResult::healthy(name, "test", "ok".into()),
            CheckStatus::Unhealthy => CheckResult::unhealthy(name, "test", "down".into()),
            CheckStatus::Error => CheckResult::error(name, "test", "boom".into()),
            CheckStatus::Timeout => CheckResult::timeout(name, "test", "slow".into()),
            CheckStatus::Skipped => CheckResult::skipped(name, "test", "off".into()),
        }
    }

    #[test]
    fn test_counts_partition_total() {
        let mut agg = ReportAggregator::new();
        agg.push(result("a", CheckStatus::Healthy));
        agg.push(result("b", CheckStatus::Unhealthy));
        agg.push(result("c", CheckStatus::Error));
        agg.push(result("d", CheckStatus::Timeout));
        agg.push(result("e", CheckStatus::Skipped));
        agg.push(result("f", CheckStatus::Healthy));

        let summary = agg.summary();
        assert_eq!(summary.total, 6);
        assert_eq!(
            summary.healthy + summary.unhealthy + summary.error + summary.timeout + summary.skipped,
            summary.total
        );
        assert_eq!(summary.healthy, 2);
        assert_eq!(summary.unhealthy, 1);
    }

    #[test]
    fn test_empty_run_reports_zero_percent() {
        let agg = ReportAggregator::new();
        let summary = agg.summary();
        assert_eq!(summary.total, 0);
        assert_eq!(summary.health_percent, 0.0);
        assert!(summary.health_percent.is_finite());
    }

    #[test]
    fn test_health_percent() {
        let mut agg = ReportAggregator::new();
        agg.push(result("a", CheckStatus::Healthy));
        agg.push(result("b", CheckStatus::Healthy));
        agg.push(result("c", CheckStatus::Unhealthy));
        agg.push(result("d", CheckStatus::Unhealthy));

        assert_eq!(agg.summary().health_percent, 50.0);
    }

    #[test]
    fn test_report_preserves_insertion_order() {
        let mut agg = ReportAggregator::new();
        for name in ["zeta", "alpha", "mid"] {
            agg.push(result(name, CheckStatus::Healthy));
        }
        let report = agg.into_report("0.0.0");
        let names: Vec<&str> = report.checks.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_has_failures_ignores_skipped() {
        let mut agg = ReportAggregator::new();
        agg.push(result("a", CheckStatus::Healthy));
        agg.push(result("b", CheckStatus::Skipped));
        assert!(!agg.has_failures());

        agg.push(result("c", CheckStatus::Timeout));
        assert!(agg.has_failures());
    }
}

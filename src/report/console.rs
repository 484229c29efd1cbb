//! Human-readable report rendering — colorized per-status lines grouped by
//! category, with a summary footer.

use colored::{ColoredString, Colorize};

use super::models::{CheckResult, CheckStatus, RunReport};

/// Status icon for a single check line.
pub fn status_icon(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::Healthy => "✓",
        CheckStatus::Unhealthy => "✗",
        CheckStatus::Error => "!",
        CheckStatus::Timeout => "◷",
        CheckStatus::Skipped => "-",
    }
}

fn paint(status: CheckStatus, text: &str) -> ColoredString {
    match status {
        CheckStatus::Healthy => text.green(),
        CheckStatus::Unhealthy => text.red(),
        CheckStatus::Error => text.red().bold(),
        CheckStatus::Timeout => text.yellow(),
        CheckStatus::Skipped => text.dimmed(),
    }
}

fn check_line(check: &CheckResult) -> String {
    let icon = paint(check.status, status_icon(check.status));
    let timing = match check.response_time_ms {
        Some(ms) => format!(" ({ms} ms)").dimmed().to_string(),
        None => String::new(),
    };
    format!("  {} {:<24} {}{}", icon, check.name, check.detail, timing)
}

/// Print the full report to stdout.
pub fn render(report: &RunReport) {
    // Categories in first-seen order, matching submission order.
    let mut categories: Vec<&str> = Vec::new();
    for check in &report.checks {
        if !categories.contains(&check.category.as_str()) {
            categories.push(check.category.as_str());
        }
    }

    for category in categories {
        println!("\n{}", category.bold());
        for check in report.checks.iter().filter(|c| c.category == category) {
            println!("{}", check_line(check));
        }
    }

    let s = &report.summary;
    let verdict = if s.unhealthy + s.error + s.timeout == 0 {
        "all healthy".green().bold().to_string()
    } else {
        format!(
            "{} unhealthy, {} error, {} timeout",
            s.unhealthy, s.error, s.timeout
        )
        .red()
        .bold()
        .to_string()
    };
    println!(
        "\n{} checks: {} healthy ({:.1}%), {}",
        s.total, s.healthy, s.health_percent, verdict
    );
}

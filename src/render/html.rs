//! HTML report page assembly
//!
//! Builds the self-contained report page returned by the HTTP boundary:
//! overall status, durations, a per-component table, and the DOT rendering of
//! the colored graph. All content is escaped; styling is minimal inline CSS.

use crate::core::report::{HealthReport, OverallStatus};
use std::fmt::Write;

/// Render the full HTML report page
///
/// `check_order` is the planner's sequencing order; the component table
/// follows it so dependencies appear before their dependents.
pub fn render_report_page(report: &HealthReport, graph_dot: &str, check_order: &[String]) -> String {
    let status_color = match report.overall {
        OverallStatus::Healthy => "#2e7d32",
        OverallStatus::Degraded => "#c62828",
    };

    let mut rows = String::new();
    for component in check_order {
        if let Some(result) = report.components.get(component) {
            let _ = write!(
                rows,
                "<tr><td>{}</td><td class=\"{}\">{}</td><td>{:.3}s</td><td>{}</td></tr>\n",
                escape(component),
                result.status.color_class(),
                result.status.as_str(),
                result.duration.as_secs_f64(),
                escape(result.error.as_deref().unwrap_or("-")),
            );
        }
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Health Report</title>
<style>
body {{ font-family: sans-serif; margin: 2em; }}
h1 {{ color: {status_color}; }}
table {{ border-collapse: collapse; }}
td, th {{ border: 1px solid #ccc; padding: 0.4em 0.8em; text-align: left; }}
td.healthy {{ color: #2e7d32; font-weight: bold; }}
td.failed {{ color: #c62828; font-weight: bold; }}
pre {{ background: #f5f5f5; padding: 1em; overflow-x: auto; }}
</style>
</head>
<body>
<h1>System status: {status}</h1>
<p>Checked at {checked_at} &mdash; {healthy} of {total} components healthy</p>
<p>Total probe time: {total_duration:.3}s &mdash; wall clock: {elapsed:.3}s</p>
<table>
<tr><th>Component</th><th>Status</th><th>Duration</th><th>Detail</th></tr>
{rows}</table>
<h2>Dependency graph</h2>
<pre>{graph}</pre>
</body>
</html>
"#,
        status_color = status_color,
        status = report.overall.as_str(),
        checked_at = report.checked_at.to_rfc3339(),
        healthy = report.summary.healthy_components,
        total = report.summary.total_components,
        total_duration = report.total_duration.as_secs_f64(),
        elapsed = report.elapsed.as_secs_f64(),
        rows = rows,
        graph = escape(graph_dot),
    )
}

/// Minimal HTML escaping
fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

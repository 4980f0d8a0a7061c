//! Report aggregation
//!
//! Reduces per-node probe results into a consolidated health report: one
//! entry per component, an overall status, the summed probe duration, and a
//! node-to-color-class map for external rendering. Aggregation is keyed by
//! identifier and therefore order-independent; the component map is a
//! `BTreeMap` so serialized reports are deterministic.

use crate::core::probe::types::duration_secs;
use crate::core::probe::{ProbeResult, ProbeStatus};
use crate::utils::error::{Result, ServiceError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;


/// Aggregate system status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OverallStatus {
    /// Every component probe passed
    Healthy,
    /// At least one component probe failed
    Degraded,
}

impl OverallStatus {
    /// Status string as rendered in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            OverallStatus::Healthy => "HEALTHY",
            OverallStatus::Degraded => "DEGRADED",
        }
    }
}

/// Component counts for the report header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Total number of components
    pub total_components: usize,
    /// Number of healthy components
    pub healthy_components: usize,
    /// Number of failed components
    pub failed_components: usize,
    /// Health percentage
    pub health_percentage: f64,
}

/// Consolidated health report for one check run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    /// Per-component results, one entry per node
    pub components: BTreeMap<String, ProbeResult>,
    /// Overall status
    pub overall: OverallStatus,
    /// Sum of all probe durations, a probe-seconds load metric
    #[serde(with = "duration_secs")]
    pub total_duration: Duration,
    /// Wall-clock time of the whole batch
    #[serde(with = "duration_secs")]
    pub elapsed: Duration,
    /// Timestamp of the check run
    pub checked_at: chrono::DateTime<chrono::Utc>,
    /// Component counts
    pub summary: ReportSummary,
}

impl HealthReport {
    /// Node-to-color-class map for external coloring
    pub fn status_classes(&self) -> BTreeMap<String, &'static str> {
        self.components
            .iter()
            .map(|(component, result)| (component.clone(), result.status.color_class()))
            .collect()
    }
}

/// Reduce probe results into a health report
///
/// `elapsed` is the wall-clock time of the batch. Fails with
/// `DuplicateComponent` if two results share an identifier; the graph model's
/// uniqueness invariant makes this unreachable in the normal flow.
pub fn aggregate(results: Vec<ProbeResult>, elapsed: Duration) -> Result<HealthReport> {
    let mut components: BTreeMap<String, ProbeResult> = BTreeMap::new();
    let mut total_duration = Duration::ZERO;
    let mut failed = 0usize;

    for result in results {
        total_duration += result.duration;
        if result.status == ProbeStatus::Failed {
            failed += 1;
        }
        if let Some(previous) = components.insert(result.component.clone(), result) {
            return Err(ServiceError::DuplicateComponent(previous.component));
        }
    }

    let total = components.len();
    let healthy = total - failed;
    let overall = if failed > 0 {
        OverallStatus::Degraded
    } else {
        OverallStatus::Healthy
    };
    let health_percentage = if total > 0 {
        (healthy as f64 / total as f64) * 100.0
    } else {
        100.0
    };

    Ok(HealthReport {
        components,
        overall,
        total_duration,
        elapsed,
        checked_at: chrono::Utc::now(),
        summary: ReportSummary {
            total_components: total,
            healthy_components: healthy,
            failed_components: failed,
            health_percentage,
        },
    })
}

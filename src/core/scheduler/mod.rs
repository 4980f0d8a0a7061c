//! Concurrent probe scheduling
//!
//! Fans probe execution out across all nodes with bounded concurrency and
//! collects every result. Units are independent: no probe consults another's
//! outcome, a failure never cancels the batch, and the batch returns only
//! when every unit has completed. Each unit runs in its own task so a probe
//! that violates its no-panic contract is still converted into a `Failed`
//! result instead of taking the batch down.

use crate::core::probe::{ProbeExecutor, ProbeResult};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};


/// Scheduler tuning knobs
#[derive(Debug, Clone)]
pub struct SchedulerOptions {
    /// Maximum probes in flight; `0` means one slot per node (unbounded)
    pub max_concurrency: usize,
    /// Per-probe timeout; an overrun reports `Failed` with this duration
    pub probe_timeout: Duration,
}

impl Default for SchedulerOptions {
    fn default() -> Self {
        Self {
            max_concurrency: 16,
            probe_timeout: Duration::from_secs(5),
        }
    }
}

/// Probe every node concurrently and collect all results
///
/// Result order is unspecified; aggregation is keyed by component identifier.
pub async fn run_all(
    nodes: &[String],
    executor: Arc<dyn ProbeExecutor>,
    options: &SchedulerOptions,
) -> Vec<ProbeResult> {
    if nodes.is_empty() {
        return Vec::new();
    }

    let concurrency = if options.max_concurrency == 0 {
        nodes.len()
    } else {
        options.max_concurrency
    };
    let probe_timeout = options.probe_timeout;

    debug!(
        nodes = nodes.len(),
        concurrency,
        timeout = ?probe_timeout,
        "scheduling probes"
    );

    stream::iter(nodes.iter().cloned())
        .map(|component| {
            let executor = Arc::clone(&executor);
            async move {
                let started = Instant::now();
                let mut unit = tokio::spawn({
                    let executor = Arc::clone(&executor);
                    let component = component.clone();
                    async move { executor.probe(&component).await }
                });

                match tokio::time::timeout(probe_timeout, &mut unit).await {
                    Ok(Ok(result)) => result,
                    Ok(Err(join_error)) => {
                        warn!(component = %component, error = %join_error, "probe task faulted");
                        ProbeResult::failed(
                            component,
                            started.elapsed(),
                            format!("probe task faulted: {}", join_error),
                        )
                    }
                    Err(_) => {
                        unit.abort();
                        warn!(component = %component, timeout = ?probe_timeout, "probe timed out");
                        ProbeResult::failed(
                            component,
                            probe_timeout,
                            format!("probe timed out after {:.3}s", probe_timeout.as_secs_f64()),
                        )
                    }
                }
            }
        })
        .buffer_unordered(concurrency)
        .collect()
        .await
}

//! Deterministic fake probes

use async_trait::async_trait;
use healthgraph::{ProbeExecutor, ProbeResult};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Probe with a fixed latency that fails a configured set of components
pub struct ScriptedProbe {
    latency: Duration,
    failing: HashSet<String>,
    invocations: AtomicUsize,
}

impl ScriptedProbe {
    /// All components pass after `latency`
    pub fn passing(latency: Duration) -> Self {
        Self {
            latency,
            failing: HashSet::new(),
            invocations: AtomicUsize::new(0),
        }
    }

    /// Named components fail; the rest pass
    pub fn failing_for(latency: Duration, failing: &[&str]) -> Self {
        Self {
            latency,
            failing: failing.iter().map(|s| s.to_string()).collect(),
            invocations: AtomicUsize::new(0),
        }
    }

    /// Number of probe invocations observed
    pub fn invocations(&self) -> usize {
        self.invocations.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProbeExecutor for ScriptedProbe {
    async fn probe(&self, component: &str) -> ProbeResult {
        self.invocations.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.latency).await;
        if self.failing.contains(component) {
            ProbeResult::failed(component, self.latency, "scripted failure")
        } else {
            ProbeResult::ok(component, self.latency)
        }
    }
}

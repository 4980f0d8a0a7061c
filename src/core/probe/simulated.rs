//! Simulated probe for development and testing
//!
//! Sleeps a bounded random duration and reports OK with a configurable
//! success probability. Randomness is injectable: an explicit seed makes
//! every outcome a pure function of `(seed, component)`, so tests never
//! depend on global random state.

use super::executor::ProbeExecutor;
use super::types::ProbeResult;
use crate::config::ProbeConfig;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hash::{Hash, Hasher};
use std::time::{Duration, Instant};
use tracing::debug;

/// Probe that simulates component checks with random latency and outcome
#[derive(Debug, Clone)]
pub struct SimulatedProbe {
    latency_min: Duration,
    latency_max: Duration,
    success_rate: f64,
    seed: Option<u64>,
}

impl SimulatedProbe {
    /// Create a simulated probe
    ///
    /// `success_rate` is clamped to `[0.0, 1.0]`; latency bounds are swapped
    /// if inverted so sampling stays well-formed.
    pub fn new(latency_min: Duration, latency_max: Duration, success_rate: f64) -> Self {
        let (low, high) = if latency_min <= latency_max {
            (latency_min, latency_max)
        } else {
            (latency_max, latency_min)
        };
        Self {
            latency_min: low,
            latency_max: high,
            success_rate: success_rate.clamp(0.0, 1.0),
            seed: None,
        }
    }

    /// Build from the probe configuration section
    pub fn from_config(config: &ProbeConfig) -> Self {
        let mut probe = Self::new(
            Duration::from_millis(config.latency_min_ms),
            Duration::from_millis(config.latency_max_ms),
            config.success_rate,
        );
        probe.seed = config.seed;
        probe
    }

    /// Fix the random seed, making outcomes deterministic per component
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// RNG for one probe invocation
    ///
    /// With a seed set, the stream is derived from the seed and the component
    /// identifier so concurrent probes never share RNG state.
    fn rng_for(&self, component: &str) -> StdRng {
        match self.seed {
            Some(seed) => {
                let mut hasher = std::collections::hash_map::DefaultHasher::new();
                seed.hash(&mut hasher);
                component.hash(&mut hasher);
                StdRng::seed_from_u64(hasher.finish())
            }
            None => StdRng::from_entropy(),
        }
    }
}

#[async_trait]
impl ProbeExecutor for SimulatedProbe {
    async fn probe(&self, component: &str) -> ProbeResult {
        let started = Instant::now();

        let (delay, healthy) = {
            let mut rng = self.rng_for(component);
            let min_ms = self.latency_min.as_millis() as u64;
            let max_ms = self.latency_max.as_millis() as u64;
            let delay = Duration::from_millis(rng.gen_range(min_ms..=max_ms));
            let healthy = rng.gen_bool(self.success_rate);
            (delay, healthy)
        };

        tokio::time::sleep(delay).await;

        let elapsed = started.elapsed();
        debug!(component, healthy, ?elapsed, "simulated probe finished");

        if healthy {
            ProbeResult::ok(component, elapsed)
        } else {
            ProbeResult::failed(component, elapsed, "simulated probe failure")
        }
    }
}

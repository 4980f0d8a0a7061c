//! The probe executor seam
//!
//! The core does not prescribe what a probe does, only its contract: a probe
//! reports its own outcome as a `ProbeResult` and never lets a fault escape
//! its boundary. Real implementations (HTTP ping, database query) plug in
//! here; the scheduler adds the timeout and fault isolation on top.

use super::types::ProbeResult;
use async_trait::async_trait;

/// Check one component's health
#[async_trait]
pub trait ProbeExecutor: Send + Sync {
    /// Probe a component by identifier
    ///
    /// Internal faults must be converted into a `Failed` result with the
    /// error detail populated rather than propagated.
    async fn probe(&self, component: &str) -> ProbeResult;
}

//! Probe status and result types

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Outcome of probing a single component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProbeStatus {
    /// The component responded healthy
    Ok,
    /// The component failed, timed out, or faulted
    Failed,
}

impl ProbeStatus {
    /// Whether the probe passed
    pub fn is_ok(&self) -> bool {
        matches!(self, ProbeStatus::Ok)
    }

    /// Status string as rendered in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            ProbeStatus::Ok => "OK",
            ProbeStatus::Failed => "FAILED",
        }
    }

    /// Color class for external rendering
    pub fn color_class(&self) -> &'static str {
        match self {
            ProbeStatus::Ok => "healthy",
            ProbeStatus::Failed => "failed",
        }
    }
}

/// Result of one component probe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeResult {
    /// Component identifier
    pub component: String,
    /// Probe status
    pub status: ProbeStatus,
    /// Wall-clock duration of the probe, fractional seconds on the wire
    #[serde(with = "duration_secs")]
    pub duration: Duration,
    /// Error detail when failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Timestamp of the check
    pub checked_at: chrono::DateTime<chrono::Utc>,
}

impl ProbeResult {
    /// Create a passing result
    pub fn ok<S: Into<String>>(component: S, duration: Duration) -> Self {
        Self {
            component: component.into(),
            status: ProbeStatus::Ok,
            duration,
            error: None,
            checked_at: chrono::Utc::now(),
        }
    }

    /// Create a failing result with error detail
    pub fn failed<S: Into<String>, E: Into<String>>(
        component: S,
        duration: Duration,
        error: E,
    ) -> Self {
        Self {
            component: component.into(),
            status: ProbeStatus::Failed,
            duration,
            error: Some(error.into()),
            checked_at: chrono::Utc::now(),
        }
    }
}

/// Serialize a `Duration` as fractional seconds
pub(crate) mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(value.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        if !secs.is_finite() || secs < 0.0 {
            return Err(serde::de::Error::custom("duration must be non-negative"));
        }
        Ok(Duration::from_secs_f64(secs))
    }
}

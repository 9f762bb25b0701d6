//! Telemetry helpers for applications embedding `chart-spec-rs`.
//!
//! Tracing setup stays explicit and opt-in: consumers either call
//! `init_default_tracing` or wire their own `tracing` subscriber.
//! User-facing interaction events go through a `TelemetrySink` supplied by
//! the host, which owns delivery.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChartSpecError, ChartSpecResult};

/// Fire-and-forget interaction event.
///
/// Serializes as `{"eventName": "SparkPlaced", "x": .., "y": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "eventName")]
pub enum TelemetryEvent {
    /// A spark was placed; coordinates are fractions of the model extent.
    SparkPlaced { x: f64, y: f64 },
}

impl TelemetryEvent {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::SparkPlaced { .. } => "SparkPlaced",
        }
    }

    pub fn to_json(&self) -> ChartSpecResult<String> {
        serde_json::to_string(self).map_err(|e| {
            ChartSpecError::Serialization(format!("failed to serialize telemetry event: {e}"))
        })
    }
}

/// Destination for interaction events.
pub trait TelemetrySink {
    fn record(&mut self, event: TelemetryEvent);
}

/// Sink that only emits the event through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TelemetrySink for TracingSink {
    fn record(&mut self, event: TelemetryEvent) {
        match event {
            TelemetryEvent::SparkPlaced { x, y } => {
                debug!(event = event.name(), x, y, "telemetry event");
            }
        }
    }
}

impl TelemetrySink for Vec<TelemetryEvent> {
    fn record(&mut self, event: TelemetryEvent) {
        self.push(event);
    }
}

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or if a
/// global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{ChartSpecError, ChartSpecResult};
use crate::telemetry::{TelemetryEvent, TelemetrySink};

/// Pointer interaction the 3D view is currently armed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    PlaceSpark,
    Dragging,
}

/// Display toggles and interaction state shared by the views.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UiState {
    #[serde(default)]
    pub interaction: Option<InteractionMode>,
    #[serde(default)]
    pub show_terrain_ui: bool,
    #[serde(default)]
    pub max_sparks: Option<u32>,
}

impl UiState {
    pub fn arm(&mut self, mode: InteractionMode) {
        self.interaction = Some(mode);
    }

    pub fn clear_interaction(&mut self) {
        self.interaction = None;
    }
}

/// Point hit in 3D scene (view) units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenePoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl ScenePoint {
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Simulation surface that accepts new sparks.
pub trait SparkSimulation {
    /// Scene units per model unit (feet).
    fn view_units_per_model_unit(&self) -> f64;
    fn model_width(&self) -> f64;
    fn model_height(&self) -> f64;
    fn add_spark(&mut self, x: f64, y: f64);
}

/// Spark position in model units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedSpark {
    pub x: f64,
    pub y: f64,
}

/// Converts a scene click into a spark placed in the simulation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceSparkInteraction;

impl PlaceSparkInteraction {
    #[must_use]
    pub fn is_active(ui: &UiState) -> bool {
        ui.interaction == Some(InteractionMode::PlaceSpark)
    }

    /// Handles a pointer-down on the scene.
    ///
    /// Returns `Ok(None)` when the view is not armed for spark placement.
    /// On success the spark is added, the interaction is cleared, and a
    /// `SparkPlaced` event with model-fraction coordinates is recorded.
    pub fn on_pointer_down<S, T>(
        self,
        ui: &mut UiState,
        simulation: &mut S,
        sink: &mut T,
        point: ScenePoint,
    ) -> ChartSpecResult<Option<PlacedSpark>>
    where
        S: SparkSimulation + ?Sized,
        T: TelemetrySink + ?Sized,
    {
        if !Self::is_active(ui) {
            trace!("pointer down ignored: spark placement not armed");
            return Ok(None);
        }

        let ratio = simulation.view_units_per_model_unit();
        let width = simulation.model_width();
        let height = simulation.model_height();
        for (name, value) in [
            ("view units per model unit", ratio),
            ("model width", width),
            ("model height", height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartSpecError::InvalidData(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        if !point.x.is_finite() || !point.y.is_finite() {
            return Err(ChartSpecError::InvalidData(
                "scene point must be finite".to_owned(),
            ));
        }

        let spark = PlacedSpark {
            x: point.x / ratio,
            y: point.y / ratio,
        };
        simulation.add_spark(spark.x, spark.y);
        ui.clear_interaction();
        sink.record(TelemetryEvent::SparkPlaced {
            x: spark.x / width,
            y: spark.y / height,
        });
        debug!(x = spark.x, y = spark.y, "spark placed");
        Ok(Some(spark))
    }
}

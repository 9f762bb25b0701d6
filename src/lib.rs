//! chart-spec-rs: declarative chart specifications for simulation data.
//!
//! The crate turns a snapshot of a chart data model (visible series, labels,
//! annotations, axis ranges) into a fully resolved `RenderSpec` that a generic
//! 2D charting engine can draw, and carries the small spark-placement
//! interaction that feeds new data into the simulation.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod telemetry;

pub use api::{ChartDataModel, ChartSpecBuilder, ChartSpecConfig, RenderSpec, SeriesDescriptor};
pub use error::{ChartSpecError, ChartSpecResult};

mod axis_range;
mod chart_model;
mod color_resolver;
mod json_contract;
mod performance;
mod rebuild_gate;
mod render_spec;
mod spec_builder;
mod spec_config;
mod style_defaults;
mod validation;

pub use axis_range::{AxisRange, AxisRangeCalculator, X_AXIS_ID, Y_AXIS_ID};
pub use chart_model::{ChartDataModel, DashPattern, SeriesDescriptor};
pub use color_resolver::{ColorResolver, ResolvedColor};
pub use json_contract::{RENDER_SPEC_JSON_SCHEMA_V1, RenderSpecJsonContractV1};
pub use performance::{DENSE_SERIES_POINT_THRESHOLD, PerformanceAdapter};
pub use rebuild_gate::RebuildGate;
pub use render_spec::{
    AxisConfig, AxisSpec, ChartOptions, ColorSpec, DatasetStyle, LegendOptions, LegendPosition,
    RenderSpec, ScaleLabel, TickOptions, TitleOptions,
};
pub use spec_builder::ChartSpecBuilder;
pub use spec_config::{ChartSpecConfig, DEFAULT_TITLE_FONT_SIZE};
pub use style_defaults::{LineStyleDefaults, StyleOverrides};

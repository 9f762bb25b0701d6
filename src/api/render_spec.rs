use serde::{Deserialize, Serialize};

use crate::core::{ChartDimensions, DataPoint, Rgba};
use crate::extensions::{AnnotationOptions, FormattedAnnotation};

use super::{AxisRange, DashPattern, LineStyleDefaults};

/// Color applied to every point, or one color per point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Uniform(Rgba),
    PerPoint(Vec<Rgba>),
}

impl ColorSpec {
    /// Color used for the point at `index`, if any.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<Rgba> {
        match self {
            Self::Uniform(color) => Some(*color),
            Self::PerPoint(colors) => colors.get(index).copied(),
        }
    }
}

/// Fully resolved style for one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetStyle {
    pub label: String,
    pub data: Vec<DataPoint>,
    pub fill: bool,
    pub show_line: bool,
    pub line_tension: f64,
    pub border_width: f64,
    pub point_radius: f64,
    pub point_hit_radius: f64,
    pub point_border_width: f64,
    pub point_hover_radius: f64,
    pub point_hover_border_width: f64,
    pub background_color: Rgba,
    pub border_color: Rgba,
    pub point_background_color: ColorSpec,
    pub point_border_color: ColorSpec,
    pub point_hover_background_color: ColorSpec,
    pub point_hover_border_color: ColorSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<DashPattern>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_rotation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rotation: Option<f64>,
}

impl DatasetStyle {
    /// Style fields as merged before colors were attached.
    #[must_use]
    pub fn line_style(&self) -> LineStyleDefaults {
        LineStyleDefaults {
            fill: self.fill,
            show_line: self.show_line,
            line_tension: self.line_tension,
            border_width: self.border_width,
            point_radius: self.point_radius,
            point_hit_radius: self.point_hit_radius,
            point_border_width: self.point_border_width,
            point_hover_radius: self.point_hover_radius,
            point_hover_border_width: self.point_hover_border_width,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickOptions {
    pub min: f64,
    pub max: f64,
    pub begin_at_zero: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_rotation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rotation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleLabel {
    pub display: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_string: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub id: String,
    pub display: bool,
    pub ticks: TickOptions,
    pub scale_label: ScaleLabel,
}

/// Both axes plus the domain they were built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    pub range: AxisRange,
    pub x: AxisSpec,
    pub y: AxisSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleOptions {
    pub display: bool,
    pub text: String,
    pub font_size: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendOptions {
    pub display: bool,
    pub position: LegendPosition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

/// Chart-wide options that do not belong to a dataset or axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub title: TitleOptions,
    pub legend: LegendOptions,
    pub animation_duration_ms: u32,
    pub maintain_aspect_ratio: bool,
    pub show_data_labels: bool,
    /// Point radius applied by the engine to elements without a dataset override.
    pub element_point_radius: f64,
    pub annotation: AnnotationOptions,
}

/// Declarative description of one chart, consumed by the rendering boundary.
///
/// Every field is owned; a spec shares nothing with the builder or with
/// previously built specs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSpec {
    pub labels: Vec<String>,
    pub datasets: Vec<DatasetStyle>,
    pub axes: AxisConfig,
    pub annotations: Vec<FormattedAnnotation>,
    pub options: ChartOptions,
    pub dimensions: ChartDimensions,
}

impl RenderSpec {
    #[must_use]
    pub fn dataset(&self, label: &str) -> Option<&DatasetStyle> {
        self.datasets.iter().find(|dataset| dataset.label == label)
    }

    /// Whether the rendering boundary must activate annotation drawing.
    #[must_use]
    pub fn annotations_enabled(&self) -> bool {
        self.options.annotation.enabled
    }
}

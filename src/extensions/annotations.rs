use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::api::{DashPattern, RenderSpec, X_AXIS_ID, Y_AXIS_ID};
use crate::core::{Rgb8, Rgba};
use crate::error::{ChartSpecError, ChartSpecResult};

/// Stroke used when an annotation has no usable color of its own.
pub const DEFAULT_ANNOTATION_COLOR: Rgb8 = Rgb8::new(0x60, 0x60, 0x60);
pub const DEFAULT_ANNOTATION_BORDER_WIDTH: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnnotationKind {
    /// Line across the plot at a fixed x value.
    VerticalLine { x: f64 },
    /// Line across the plot at a fixed y value.
    HorizontalLine { y: f64 },
    /// Shaded rectangle in data coordinates.
    Box {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },
}

/// User-defined overlay marker as held by the chart data model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationMarker {
    pub id: String,
    pub kind: AnnotationKind,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub border_width: Option<f64>,
    #[serde(default)]
    pub dash_pattern: Option<DashPattern>,
}

impl AnnotationMarker {
    #[must_use]
    pub fn new(id: impl Into<String>, kind: AnnotationKind) -> Self {
        Self {
            id: id.into(),
            kind,
            label: None,
            color: None,
            border_width: None,
            dash_pattern: None,
        }
    }

    #[must_use]
    pub fn vertical_line(id: impl Into<String>, x: f64) -> Self {
        Self::new(id, AnnotationKind::VerticalLine { x })
    }

    #[must_use]
    pub fn horizontal_line(id: impl Into<String>, y: f64) -> Self {
        Self::new(id, AnnotationKind::HorizontalLine { y })
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_dash_pattern(mut self, pattern: &[f64]) -> Self {
        self.dash_pattern = Some(DashPattern::from_slice(pattern));
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnnotationDrawTime {
    BeforeDatasetsDraw,
    AfterDatasetsDraw,
    #[default]
    AfterDraw,
}

/// Annotation plugin switches carried in the chart options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationOptions {
    /// Off whenever the model carries no annotations.
    pub enabled: bool,
    pub draw_time: AnnotationDrawTime,
    pub events: Vec<String>,
}

impl Default for AnnotationOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            draw_time: AnnotationDrawTime::AfterDraw,
            events: ["click", "mouseenter", "mouseleave"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationShape {
    Line,
    Box,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineMode {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationLabel {
    pub enabled: bool,
    pub content: String,
}

/// Annotation in the chart engine's vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedAnnotation {
    pub id: String,
    pub shape: AnnotationShape,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<LineMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_max: Option<f64>,
    pub border_color: Rgba,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Rgba>,
    pub border_width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<DashPattern>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<AnnotationLabel>,
}

/// Folds user annotations into a built spec.
///
/// Annotations keep declaration order, which is also draw order: later
/// entries are drawn on top. Overlapping annotations are all kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnnotationOverlay;

impl AnnotationOverlay {
    pub fn apply(
        self,
        mut spec: RenderSpec,
        annotations: &[AnnotationMarker],
    ) -> ChartSpecResult<RenderSpec> {
        if annotations.is_empty() {
            spec.annotations.clear();
            spec.options.annotation.enabled = false;
            return Ok(spec);
        }

        let formatted = annotations
            .iter()
            .map(format_annotation)
            .collect::<ChartSpecResult<Vec<_>>>()?;
        trace!(count = formatted.len(), "applied annotation overlay");

        spec.annotations = formatted;
        spec.options.annotation.enabled = true;
        Ok(spec)
    }
}

fn format_annotation(marker: &AnnotationMarker) -> ChartSpecResult<FormattedAnnotation> {
    validate_kind(marker)?;

    let base = match marker.color.as_deref() {
        Some(value) => Rgb8::from_hex(value).unwrap_or_else(|err| {
            warn!(
                annotation = %marker.id,
                error = %err,
                "falling back to default annotation color"
            );
            DEFAULT_ANNOTATION_COLOR
        }),
        None => DEFAULT_ANNOTATION_COLOR,
    };
    let border_width = match marker.border_width {
        Some(width) if width.is_finite() && width > 0.0 => width,
        Some(width) => {
            warn!(
                annotation = %marker.id,
                width,
                "ignoring non-positive annotation border width"
            );
            DEFAULT_ANNOTATION_BORDER_WIDTH
        }
        None => DEFAULT_ANNOTATION_BORDER_WIDTH,
    };

    let mut formatted = FormattedAnnotation {
        id: marker.id.clone(),
        shape: AnnotationShape::Line,
        mode: None,
        scale_id: None,
        value: None,
        x_min: None,
        x_max: None,
        y_min: None,
        y_max: None,
        border_color: base.opaque(),
        background_color: None,
        border_width,
        border_dash: marker.dash_pattern.clone(),
        label: marker.label.as_ref().map(|content| AnnotationLabel {
            enabled: !content.is_empty(),
            content: content.clone(),
        }),
    };

    match marker.kind {
        AnnotationKind::VerticalLine { x } => {
            formatted.mode = Some(LineMode::Vertical);
            formatted.scale_id = Some(X_AXIS_ID.to_owned());
            formatted.value = Some(x);
        }
        AnnotationKind::HorizontalLine { y } => {
            formatted.mode = Some(LineMode::Horizontal);
            formatted.scale_id = Some(Y_AXIS_ID.to_owned());
            formatted.value = Some(y);
        }
        AnnotationKind::Box {
            x_min,
            x_max,
            y_min,
            y_max,
        } => {
            formatted.shape = AnnotationShape::Box;
            formatted.x_min = Some(x_min);
            formatted.x_max = Some(x_max);
            formatted.y_min = Some(y_min);
            formatted.y_max = Some(y_max);
            formatted.background_color = Some(base.translucent());
        }
    }

    Ok(formatted)
}

fn validate_kind(marker: &AnnotationMarker) -> ChartSpecResult<()> {
    let values = match marker.kind {
        AnnotationKind::VerticalLine { x } => vec![x],
        AnnotationKind::HorizontalLine { y } => vec![y],
        AnnotationKind::Box {
            x_min,
            x_max,
            y_min,
            y_max,
        } => vec![x_min, x_max, y_min, y_max],
    };
    if values.iter().any(|value| !value.is_finite()) {
        return Err(ChartSpecError::InvalidData(format!(
            "annotation `{}` coordinates must be finite",
            marker.id
        )));
    }
    Ok(())
}

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::DataPoint;
use crate::extensions::AnnotationMarker;

use super::{AxisRange, StyleOverrides};

/// Stroke dash segments; most patterns have two or four entries.
pub type DashPattern = SmallVec<[f64; 4]>;

/// One named trace as exposed by the chart data model.
///
/// The builder only reads descriptors; `points` is never reordered or mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDescriptor {
    pub name: String,
    pub points: Vec<DataPoint>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub point_colors: Option<Vec<String>>,
    #[serde(default)]
    pub dash_pattern: Option<DashPattern>,
    #[serde(default)]
    pub fixed_label_rotation: Option<f64>,
    #[serde(default)]
    pub style: StyleOverrides,
}

impl SeriesDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>, points: Vec<DataPoint>) -> Self {
        Self {
            name: name.into(),
            points,
            color: None,
            point_colors: None,
            dash_pattern: None,
            fixed_label_rotation: None,
            style: StyleOverrides::default(),
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_point_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.point_colors = Some(colors.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_dash_pattern(mut self, pattern: &[f64]) -> Self {
        self.dash_pattern = Some(SmallVec::from_slice(pattern));
        self
    }

    #[must_use]
    pub fn with_fixed_label_rotation(mut self, degrees: f64) -> Self {
        self.fixed_label_rotation = Some(degrees);
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: StyleOverrides) -> Self {
        self.style = style;
        self
    }
}

/// Read-only snapshot of everything one chart build consumes.
///
/// `visible_data_sets` is already filtered by the owner of the model; the
/// builder renders exactly what it is given, in order. `revision` is bumped
/// by the owner on every mutation so callers can decide when to rebuild.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataModel {
    #[serde(default)]
    pub name: String,
    pub visible_data_sets: Vec<SeriesDescriptor>,
    #[serde(default)]
    pub data_labels: Vec<String>,
    /// Range aggregated by the model itself; takes precedence over computing one.
    #[serde(default)]
    pub min_max_all: Option<AxisRange>,
    /// Range used when there is no data to derive one from.
    #[serde(default)]
    pub fallback_range: AxisRange,
    #[serde(default)]
    pub annotations: Vec<AnnotationMarker>,
    #[serde(default)]
    pub axis_label_a1: Option<String>,
    #[serde(default)]
    pub axis_label_a2: Option<String>,
    #[serde(default)]
    pub data_label_rotation: Option<f64>,
    #[serde(default)]
    pub revision: u64,
}

impl ChartDataModel {
    #[must_use]
    pub fn new(visible_data_sets: Vec<SeriesDescriptor>) -> Self {
        Self {
            name: String::new(),
            visible_data_sets,
            data_labels: Vec::new(),
            min_max_all: None,
            fallback_range: AxisRange::default(),
            annotations: Vec::new(),
            axis_label_a1: None,
            axis_label_a2: None,
            data_label_rotation: None,
            revision: 0,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data_labels = labels.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_min_max_all(mut self, range: AxisRange) -> Self {
        self.min_max_all = Some(range);
        self
    }

    #[must_use]
    pub fn with_fallback_range(mut self, range: AxisRange) -> Self {
        self.fallback_range = range;
        self
    }

    #[must_use]
    pub fn with_annotations(mut self, annotations: Vec<AnnotationMarker>) -> Self {
        self.annotations = annotations;
        self
    }

    #[must_use]
    pub fn with_axis_labels(mut self, a1: impl Into<String>, a2: impl Into<String>) -> Self {
        self.axis_label_a1 = Some(a1.into());
        self.axis_label_a2 = Some(a2.into());
        self
    }

    #[must_use]
    pub fn with_data_label_rotation(mut self, degrees: f64) -> Self {
        self.data_label_rotation = Some(degrees);
        self
    }

    #[must_use]
    pub fn with_revision(mut self, revision: u64) -> Self {
        self.revision = revision;
        self
    }

    /// Replaces the visible series and advances the revision.
    pub fn set_visible_data_sets(&mut self, series: Vec<SeriesDescriptor>) {
        self.visible_data_sets = series;
        self.revision = self.revision.wrapping_add(1);
    }

    /// Appends a point to the named series and advances the revision.
    ///
    /// Returns `false` when no visible series has that name.
    pub fn push_point(&mut self, series_name: &str, point: DataPoint) -> bool {
        let Some(series) = self
            .visible_data_sets
            .iter_mut()
            .find(|series| series.name == series_name)
        else {
            return false;
        };
        series.points.push(point);
        self.revision = self.revision.wrapping_add(1);
        true
    }
}

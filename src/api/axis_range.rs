use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{ChartSpecError, ChartSpecResult};

use super::{AxisConfig, AxisSpec, ChartDataModel, ScaleLabel, SeriesDescriptor, TickOptions};

pub const X_AXIS_ID: &str = "x-axis-0";
pub const Y_AXIS_ID: &str = "y-axis-0";

/// Numeric domain of both axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl AxisRange {
    #[must_use]
    pub const fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    pub fn validate(self, context: &str) -> ChartSpecResult<Self> {
        for (name, value) in [
            ("min_x", self.min_x),
            ("max_x", self.max_x),
            ("min_y", self.min_y),
            ("max_y", self.max_y),
        ] {
            if !value.is_finite() {
                return Err(ChartSpecError::InvalidData(format!(
                    "{context} `{name}` must be finite"
                )));
            }
        }
        if self.min_x > self.max_x || self.min_y > self.max_y {
            return Err(ChartSpecError::InvalidData(format!(
                "{context} bounds must satisfy min <= max"
            )));
        }
        Ok(self)
    }
}

impl Default for AxisRange {
    fn default() -> Self {
        Self::new(0.0, 100.0, 0.0, 100.0)
    }
}

/// Derives axis domains and tick options from the visible series.
#[derive(Debug, Clone, Copy, Default)]
pub struct AxisRangeCalculator;

impl AxisRangeCalculator {
    /// Bounds over the union of every point, or `None` when there are no points.
    ///
    /// Empty series contribute nothing.
    #[must_use]
    pub fn compute_range(series: &[SeriesDescriptor]) -> Option<AxisRange> {
        let points = || series.iter().flat_map(|s| s.points.iter());
        let xs = || points().map(|p| OrderedFloat(p.x));
        let ys = || points().map(|p| OrderedFloat(p.y));

        Some(AxisRange::new(
            xs().min()?.into_inner(),
            xs().max()?.into_inner(),
            ys().min()?.into_inner(),
            ys().max()?.into_inner(),
        ))
    }

    /// Model-supplied range first, then computed, then the model fallback.
    #[must_use]
    pub fn resolve_range(model: &ChartDataModel) -> AxisRange {
        model
            .min_max_all
            .or_else(|| Self::compute_range(&model.visible_data_sets))
            .unwrap_or(model.fallback_range)
    }

    /// Tick-label rotation for the x axis.
    ///
    /// A series `fixed_label_rotation` pins the rotation; when several series
    /// declare one, the last in visible order wins.
    #[must_use]
    pub fn label_rotation(model: &ChartDataModel) -> Option<f64> {
        model
            .visible_data_sets
            .iter()
            .filter_map(|series| series.fixed_label_rotation)
            .last()
            .or(model.data_label_rotation)
    }

    #[must_use]
    pub fn build_axes(
        model: &ChartDataModel,
        range: AxisRange,
        font_family: Option<&str>,
    ) -> AxisConfig {
        let rotation = Self::label_rotation(model);
        let font_family = font_family.map(str::to_owned);

        let x = AxisSpec {
            id: X_AXIS_ID.to_owned(),
            display: true,
            ticks: TickOptions {
                min: range.min_x,
                max: range.max_x,
                begin_at_zero: range.min_x == 0.0,
                precision: Some(0),
                min_rotation: rotation,
                max_rotation: rotation,
                font_family: font_family.clone(),
            },
            scale_label: scale_label(model.axis_label_a1.as_deref(), font_family.clone()),
        };
        let y = AxisSpec {
            id: Y_AXIS_ID.to_owned(),
            display: true,
            ticks: TickOptions {
                min: range.min_y,
                max: range.max_y,
                begin_at_zero: false,
                precision: None,
                min_rotation: None,
                max_rotation: None,
                font_family: font_family.clone(),
            },
            scale_label: scale_label(model.axis_label_a2.as_deref(), font_family),
        };

        AxisConfig { range, x, y }
    }
}

fn scale_label(text: Option<&str>, font_family: Option<String>) -> ScaleLabel {
    let text = text.filter(|text| !text.is_empty());
    ScaleLabel {
        display: text.is_some(),
        label_string: text.map(str::to_owned),
        font_family,
    }
}

#[cfg(test)]
mod tests {
    use super::{AxisRange, AxisRangeCalculator};
    use crate::api::{ChartDataModel, SeriesDescriptor};
    use crate::core::DataPoint;

    #[test]
    fn empty_series_do_not_contribute() {
        let series = vec![
            SeriesDescriptor::new("empty", Vec::new()),
            SeriesDescriptor::new("data", vec![DataPoint::new(2.0, -1.0), DataPoint::new(5.0, 3.0)]),
        ];
        assert_eq!(
            AxisRangeCalculator::compute_range(&series),
            Some(AxisRange::new(2.0, 5.0, -1.0, 3.0))
        );
    }

    #[test]
    fn no_points_yields_none() {
        assert_eq!(AxisRangeCalculator::compute_range(&[]), None);
        let series = vec![SeriesDescriptor::new("empty", Vec::new())];
        assert_eq!(AxisRangeCalculator::compute_range(&series), None);
    }

    #[test]
    fn model_range_takes_precedence() {
        let supplied = AxisRange::new(-5.0, 5.0, 0.0, 1.0);
        let model = ChartDataModel::new(vec![SeriesDescriptor::new(
            "s",
            vec![DataPoint::new(0.0, 10.0)],
        )])
        .with_min_max_all(supplied);
        assert_eq!(AxisRangeCalculator::resolve_range(&model), supplied);
    }

    #[test]
    fn unlabeled_axis_hides_scale_label() {
        let model = ChartDataModel::new(Vec::new()).with_axis_labels("", "Temperature");
        let axes = AxisRangeCalculator::build_axes(&model, AxisRange::default(), None);
        assert!(!axes.x.scale_label.display);
        assert!(axes.y.scale_label.display);
        assert_eq!(axes.y.scale_label.label_string.as_deref(), Some("Temperature"));
    }

    #[test]
    fn inverted_range_is_invalid() {
        assert!(AxisRange::new(1.0, 0.0, 0.0, 1.0).validate("range").is_err());
        assert!(AxisRange::new(0.0, f64::NAN, 0.0, 1.0).validate("range").is_err());
    }
}

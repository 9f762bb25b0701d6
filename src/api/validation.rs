use crate::error::{ChartSpecError, ChartSpecResult};

use super::{ChartDataModel, ChartSpecConfig, SeriesDescriptor};

pub(super) fn validate_config(config: &ChartSpecConfig) -> ChartSpecResult<()> {
    config.dimensions.validate()?;
    if config.palette.is_empty() {
        return Err(ChartSpecError::InvalidConfig(
            "palette must contain at least one color".to_owned(),
        ));
    }
    if !config.title_font_size.is_finite() || config.title_font_size <= 0.0 {
        return Err(ChartSpecError::InvalidConfig(
            "title font size must be finite and > 0".to_owned(),
        ));
    }
    let style = config.base_style();
    for (name, value) in [
        ("line_tension", style.line_tension),
        ("border_width", style.border_width),
        ("point_radius", style.point_radius),
        ("point_hit_radius", style.point_hit_radius),
        ("point_border_width", style.point_border_width),
        ("point_hover_radius", style.point_hover_radius),
        ("point_hover_border_width", style.point_hover_border_width),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartSpecError::InvalidConfig(format!(
                "style `{name}` must be finite and >= 0"
            )));
        }
    }
    Ok(())
}

/// Rejects series the chart cannot represent faithfully.
///
/// A malformed series fails the build; it is never dropped silently.
pub(super) fn validate_series(series: &SeriesDescriptor) -> ChartSpecResult<()> {
    if let Some(index) = series.points.iter().position(|point| !point.is_finite()) {
        return Err(ChartSpecError::MalformedSeries {
            series: series.name.clone(),
            reason: format!("point {index} has a non-finite coordinate"),
        });
    }
    if let Some(rotation) = series.fixed_label_rotation {
        if !rotation.is_finite() {
            return Err(ChartSpecError::MalformedSeries {
                series: series.name.clone(),
                reason: "fixed label rotation must be finite".to_owned(),
            });
        }
    }
    Ok(())
}

pub(super) fn validate_model(model: &ChartDataModel) -> ChartSpecResult<()> {
    if let Some(range) = model.min_max_all {
        range.validate("model range")?;
    }
    model.fallback_range.validate("fallback range")?;
    if let Some(rotation) = model.data_label_rotation {
        if !rotation.is_finite() {
            return Err(ChartSpecError::InvalidData(
                "data label rotation must be finite".to_owned(),
            ));
        }
    }
    model.visible_data_sets.iter().try_for_each(validate_series)
}

pub(super) fn check_label_alignment(
    series: &SeriesDescriptor,
    labels: usize,
) -> ChartSpecResult<()> {
    if series.points.len() > labels {
        return Err(ChartSpecError::LabelMismatch {
            series: series.name.clone(),
            points: series.points.len(),
            labels,
        });
    }
    Ok(())
}

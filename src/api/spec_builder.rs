use tracing::{debug, trace, warn};

use crate::error::ChartSpecResult;
use crate::extensions::{AnnotationOptions, AnnotationOverlay};

use super::validation::{check_label_alignment, validate_config, validate_model};
use super::{
    AxisRangeCalculator, ChartDataModel, ChartOptions, ChartSpecConfig, ColorResolver, ColorSpec,
    DashPattern, DatasetStyle, LegendOptions, PerformanceAdapter, RebuildGate, RenderSpec,
    SeriesDescriptor, StyleOverrides, TitleOptions,
};

/// Turns a chart data model snapshot into a `RenderSpec`.
///
/// `build` only reads its inputs and allocates a fresh spec on every call;
/// no state carries over between builds.
#[derive(Debug, Clone)]
pub struct ChartSpecBuilder {
    config: ChartSpecConfig,
}

impl ChartSpecBuilder {
    pub fn new(config: ChartSpecConfig) -> ChartSpecResult<Self> {
        validate_config(&config)?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &ChartSpecConfig {
        &self.config
    }

    pub fn build(&self, model: &ChartDataModel) -> ChartSpecResult<RenderSpec> {
        validate_model(model)?;

        let resolver = ColorResolver::new(&self.config.palette);
        let mut datasets = Vec::with_capacity(model.visible_data_sets.len());
        for (ordinal, series) in model.visible_data_sets.iter().enumerate() {
            self.check_labels(series, model.data_labels.len())?;
            let dataset = self.build_dataset(&resolver, series, ordinal);
            trace!(
                series = %dataset.label,
                points = dataset.data.len(),
                tension = dataset.line_tension,
                "resolved dataset"
            );
            datasets.push(dataset);
        }

        let range = AxisRangeCalculator::resolve_range(model);
        let axes =
            AxisRangeCalculator::build_axes(model, range, self.config.font_family.as_deref());

        let spec = RenderSpec {
            labels: model.data_labels.clone(),
            datasets,
            axes,
            annotations: Vec::new(),
            options: self.chart_options(model),
            dimensions: self.config.dimensions,
        };
        let spec = AnnotationOverlay.apply(spec, &model.annotations)?;

        debug!(
            revision = model.revision,
            datasets = spec.datasets.len(),
            annotations = spec.annotations.len(),
            min_x = range.min_x,
            max_x = range.max_x,
            min_y = range.min_y,
            max_y = range.max_y,
            "built render spec"
        );
        Ok(spec)
    }

    /// Builds only when `model.revision` differs from the last one `gate` saw.
    pub fn build_if_changed(
        &self,
        gate: &mut RebuildGate,
        model: &ChartDataModel,
    ) -> ChartSpecResult<Option<RenderSpec>> {
        if !gate.should_rebuild(model.revision) {
            trace!(revision = model.revision, "skipping build for unchanged revision");
            return Ok(None);
        }
        let spec = self.build(model)?;
        gate.mark_built(model.revision);
        Ok(Some(spec))
    }

    fn check_labels(&self, series: &SeriesDescriptor, labels: usize) -> ChartSpecResult<()> {
        if labels == 0 && !self.config.strict_label_alignment {
            return Ok(());
        }
        match check_label_alignment(series, labels) {
            Err(err) if !self.config.strict_label_alignment => {
                debug!(error = %err, "series extends past data labels");
                Ok(())
            }
            result => result,
        }
    }

    fn build_dataset(
        &self,
        resolver: &ColorResolver<'_>,
        series: &SeriesDescriptor,
        ordinal: usize,
    ) -> DatasetStyle {
        let base = self.config.base_style();
        let style = if series.style.is_empty() {
            base
        } else {
            base.apply(&usable_overrides(series))
        };
        let style = PerformanceAdapter.adapt(style, series.points.len());

        let color = resolver.resolve_series(series, ordinal);
        let (point_background, point_stroke) = match resolver.resolve_points(series) {
            Some(points) => (
                ColorSpec::PerPoint(points.iter().map(|c| c.fill).collect()),
                ColorSpec::PerPoint(points.iter().map(|c| c.stroke).collect()),
            ),
            None => (
                ColorSpec::Uniform(color.fill),
                ColorSpec::Uniform(color.stroke),
            ),
        };

        DatasetStyle {
            label: series.name.clone(),
            data: series.points.clone(),
            fill: style.fill,
            show_line: style.show_line,
            line_tension: style.line_tension,
            border_width: style.border_width,
            point_radius: style.point_radius,
            point_hit_radius: style.point_hit_radius,
            point_border_width: style.point_border_width,
            point_hover_radius: style.point_hover_radius,
            point_hover_border_width: style.point_hover_border_width,
            background_color: color.fill,
            border_color: color.stroke,
            point_background_color: point_background,
            point_border_color: point_stroke.clone(),
            point_hover_background_color: point_stroke.clone(),
            point_hover_border_color: point_stroke,
            border_dash: dash_pattern(series),
            min_rotation: series.fixed_label_rotation,
            max_rotation: series.fixed_label_rotation,
        }
    }

    fn chart_options(&self, model: &ChartDataModel) -> ChartOptions {
        let font_family = self.config.font_family.clone();
        ChartOptions {
            title: TitleOptions {
                display: !model.name.is_empty(),
                text: model.name.clone(),
                font_size: self.config.title_font_size,
                font_family: font_family.clone(),
            },
            legend: LegendOptions {
                display: true,
                position: self.config.legend_position,
                font_family,
            },
            animation_duration_ms: 0,
            maintain_aspect_ratio: false,
            show_data_labels: false,
            element_point_radius: 0.0,
            annotation: AnnotationOptions::default(),
        }
    }
}

fn dash_pattern(series: &SeriesDescriptor) -> Option<DashPattern> {
    let pattern = series.dash_pattern.as_ref()?;
    if pattern
        .iter()
        .any(|segment| !segment.is_finite() || *segment < 0.0)
    {
        warn!(
            series = %series.name,
            "ignoring dash pattern with negative or non-finite segments"
        );
        return None;
    }
    Some(pattern.clone())
}

/// Series overrides with unusable numeric fields dropped back to defaults.
fn usable_overrides(series: &SeriesDescriptor) -> StyleOverrides {
    let mut overrides = series.style;
    for (name, field) in [
        ("line_tension", &mut overrides.line_tension),
        ("border_width", &mut overrides.border_width),
        ("point_radius", &mut overrides.point_radius),
        ("point_hit_radius", &mut overrides.point_hit_radius),
        ("point_border_width", &mut overrides.point_border_width),
        ("point_hover_radius", &mut overrides.point_hover_radius),
        ("point_hover_border_width", &mut overrides.point_hover_border_width),
    ] {
        if field.is_some_and(|value| !value.is_finite() || value < 0.0) {
            warn!(
                series = %series.name,
                field = name,
                "ignoring negative or non-finite style override"
            );
            *field = None;
        }
    }
    overrides
}

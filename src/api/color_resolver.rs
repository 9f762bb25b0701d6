use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{PaletteCycle, Rgb8, Rgba};

use super::SeriesDescriptor;

/// Fill/stroke pair derived from one base color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedColor {
    /// Translucent variant used under the line and for point backgrounds.
    pub fill: Rgba,
    /// Opaque variant used for the line, point borders, and hover states.
    pub stroke: Rgba,
}

impl ResolvedColor {
    #[must_use]
    pub const fn from_base(base: Rgb8) -> Self {
        Self {
            fill: base.translucent(),
            stroke: base.opaque(),
        }
    }
}

/// Assigns colors to series and points from explicit overrides or the palette.
///
/// Palette positions come from the series ordinal or point index only, never
/// from mutable state, so the same input always resolves to the same colors.
#[derive(Debug, Clone, Copy)]
pub struct ColorResolver<'a> {
    palette: &'a PaletteCycle,
}

impl<'a> ColorResolver<'a> {
    #[must_use]
    pub fn new(palette: &'a PaletteCycle) -> Self {
        Self { palette }
    }

    /// Resolves the series color: explicit `color` when it parses, otherwise
    /// the palette entry at `ordinal`.
    #[must_use]
    pub fn resolve_series(&self, series: &SeriesDescriptor, ordinal: usize) -> ResolvedColor {
        let fallback = self.palette.at(ordinal);
        let base = match series.color.as_deref() {
            Some(value) => Rgb8::from_hex(value).unwrap_or_else(|err| {
                warn!(
                    series = %series.name,
                    error = %err,
                    "falling back to palette color for series"
                );
                fallback
            }),
            None => fallback,
        };
        ResolvedColor::from_base(base)
    }

    /// Resolves one point color when the series carries `point_colors`.
    ///
    /// Overrides are consumed in order; past the last override the palette
    /// continues from its first entry and cycles. A malformed override
    /// degrades to the palette entry at the point position.
    #[must_use]
    pub fn resolve_point(
        &self,
        series: &SeriesDescriptor,
        point_index: usize,
    ) -> Option<ResolvedColor> {
        let overrides = series.point_colors.as_ref()?;
        let resolved = match overrides.get(point_index) {
            Some(value) => match Rgb8::from_hex(value) {
                Ok(base) => ResolvedColor::from_base(base),
                Err(err) => {
                    warn!(
                        series = %series.name,
                        point_index,
                        error = %err,
                        "falling back to palette color for point"
                    );
                    ResolvedColor::from_base(self.palette.at(point_index))
                }
            },
            None => ResolvedColor::from_base(self.palette.at(point_index - overrides.len())),
        };
        Some(resolved)
    }

    /// Resolves every point of `series`, or `None` without `point_colors`.
    #[must_use]
    pub fn resolve_points(&self, series: &SeriesDescriptor) -> Option<Vec<ResolvedColor>> {
        series.point_colors.as_ref()?;
        Some(
            (0..series.points.len())
                .filter_map(|index| self.resolve_point(series, index))
                .collect(),
        )
    }
}

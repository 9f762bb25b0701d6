use tracing::trace;

use super::LineStyleDefaults;

/// Series with at least this many points are drawn with straight segments.
pub const DENSE_SERIES_POINT_THRESHOLD: usize = 80;

/// Relaxes smoothing for dense series to bound draw cost.
///
/// Runs after every style merge so its tension wins over any configured value.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerformanceAdapter;

impl PerformanceAdapter {
    #[must_use]
    pub fn is_dense(point_count: usize) -> bool {
        point_count >= DENSE_SERIES_POINT_THRESHOLD
    }

    #[must_use]
    pub fn adapt(self, style: LineStyleDefaults, point_count: usize) -> LineStyleDefaults {
        if !Self::is_dense(point_count) {
            return style;
        }
        trace!(point_count, "dense series: forcing straight segments");
        LineStyleDefaults {
            line_tension: 0.0,
            ..style
        }
    }
}

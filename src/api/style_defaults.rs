use serde::{Deserialize, Serialize};

/// Base per-dataset style merged under every series before overrides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyleDefaults {
    pub fill: bool,
    pub show_line: bool,
    pub line_tension: f64,
    pub border_width: f64,
    pub point_radius: f64,
    pub point_hit_radius: f64,
    pub point_border_width: f64,
    pub point_hover_radius: f64,
    pub point_hover_border_width: f64,
}

impl Default for LineStyleDefaults {
    fn default() -> Self {
        Self {
            fill: false,
            show_line: true,
            line_tension: 0.2,
            border_width: 3.0,
            point_radius: 1.0,
            point_hit_radius: 10.0,
            point_border_width: 1.0,
            point_hover_radius: 5.0,
            point_hover_border_width: 2.0,
        }
    }
}

/// Partial style; every `Some` field replaces the matching default.
///
/// Fields never read each other, so applying disjoint overrides in any order
/// yields the same style.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOverrides {
    pub fill: Option<bool>,
    pub show_line: Option<bool>,
    pub line_tension: Option<f64>,
    pub border_width: Option<f64>,
    pub point_radius: Option<f64>,
    pub point_hit_radius: Option<f64>,
    pub point_border_width: Option<f64>,
    pub point_hover_radius: Option<f64>,
    pub point_hover_border_width: Option<f64>,
}

impl StyleOverrides {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    #[must_use]
    pub fn with_line_tension(mut self, tension: f64) -> Self {
        self.line_tension = Some(tension);
        self
    }

    #[must_use]
    pub fn with_point_radius(mut self, radius: f64) -> Self {
        self.point_radius = Some(radius);
        self
    }

    #[must_use]
    pub fn with_border_width(mut self, width: f64) -> Self {
        self.border_width = Some(width);
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: bool) -> Self {
        self.fill = Some(fill);
        self
    }
}

impl LineStyleDefaults {
    /// Shallow-merges `overrides` on top of `self`.
    #[must_use]
    pub fn apply(self, overrides: &StyleOverrides) -> Self {
        Self {
            fill: overrides.fill.unwrap_or(self.fill),
            show_line: overrides.show_line.unwrap_or(self.show_line),
            line_tension: overrides.line_tension.unwrap_or(self.line_tension),
            border_width: overrides.border_width.unwrap_or(self.border_width),
            point_radius: overrides.point_radius.unwrap_or(self.point_radius),
            point_hit_radius: overrides.point_hit_radius.unwrap_or(self.point_hit_radius),
            point_border_width: overrides
                .point_border_width
                .unwrap_or(self.point_border_width),
            point_hover_radius: overrides
                .point_hover_radius
                .unwrap_or(self.point_hover_radius),
            point_hover_border_width: overrides
                .point_hover_border_width
                .unwrap_or(self.point_hover_border_width),
        }
    }
}

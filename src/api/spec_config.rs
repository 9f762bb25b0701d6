use serde::{Deserialize, Serialize};

use crate::core::{ChartDimensions, PaletteCycle};
use crate::error::{ChartSpecError, ChartSpecResult};

use super::{LegendPosition, LineStyleDefaults, StyleOverrides};

pub const DEFAULT_TITLE_FONT_SIZE: f64 = 15.0;

/// Builder configuration shared by every build.
///
/// This type is serializable so host applications can persist chart setup
/// next to their own settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpecConfig {
    #[serde(default)]
    pub palette: PaletteCycle,
    #[serde(default)]
    pub dimensions: ChartDimensions,
    #[serde(default)]
    pub font_family: Option<String>,
    #[serde(default = "default_title_font_size")]
    pub title_font_size: f64,
    /// Applied on top of the built-in line defaults, under series overrides.
    #[serde(default)]
    pub style: StyleOverrides,
    #[serde(default)]
    pub legend_position: LegendPosition,
    /// Reject series that have more points than there are data labels.
    #[serde(default)]
    pub strict_label_alignment: bool,
}

impl Default for ChartSpecConfig {
    fn default() -> Self {
        Self {
            palette: PaletteCycle::default(),
            dimensions: ChartDimensions::default(),
            font_family: None,
            title_font_size: default_title_font_size(),
            style: StyleOverrides::default(),
            legend_position: LegendPosition::default(),
            strict_label_alignment: false,
        }
    }
}

impl ChartSpecConfig {
    #[must_use]
    pub fn with_palette(mut self, palette: PaletteCycle) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_dimensions(mut self, dimensions: ChartDimensions) -> Self {
        self.dimensions = dimensions;
        self
    }

    #[must_use]
    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = Some(font_family.into());
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: StyleOverrides) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_legend_position(mut self, position: LegendPosition) -> Self {
        self.legend_position = position;
        self
    }

    #[must_use]
    pub fn with_strict_label_alignment(mut self, strict: bool) -> Self {
        self.strict_label_alignment = strict;
        self
    }

    /// Line style every series starts from.
    #[must_use]
    pub fn base_style(&self) -> LineStyleDefaults {
        LineStyleDefaults::default().apply(&self.style)
    }

    pub fn from_json_str(input: &str) -> ChartSpecResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartSpecError::InvalidConfig(format!("failed to parse config json: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartSpecResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartSpecError::Serialization(format!("failed to serialize config: {e}")))
    }
}

fn default_title_font_size() -> f64 {
    DEFAULT_TITLE_FONT_SIZE
}

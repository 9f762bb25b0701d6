use serde::{Deserialize, Serialize};

use crate::core::color::Rgb8;
use crate::error::{ChartSpecError, ChartSpecResult};

/// Base colors assigned to series and points when nothing overrides them.
pub const DEFAULT_CHART_COLORS: [&str; 8] = [
    "#0081FF", "#FF8415", "#19C85D", "#E73F3F", "#A35BF0", "#8C564B", "#E377C2", "#17BECF",
];

/// Fixed, non-empty ordered palette indexed by position.
///
/// The cycle carries no cursor: the entry for position `i` is always
/// `entries[i % len]`, so repeated builds assign identical colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct PaletteCycle {
    entries: Vec<Rgb8>,
}

impl PaletteCycle {
    pub fn new(entries: Vec<Rgb8>) -> ChartSpecResult<Self> {
        if entries.is_empty() {
            return Err(ChartSpecError::InvalidConfig(
                "palette must contain at least one color".to_owned(),
            ));
        }
        Ok(Self { entries })
    }

    pub fn from_hex<S: AsRef<str>>(values: &[S]) -> ChartSpecResult<Self> {
        let entries = values
            .iter()
            .map(|value| {
                Rgb8::from_hex(value.as_ref()).map_err(|_| {
                    ChartSpecError::InvalidConfig(format!(
                        "palette entry `{}` is not a hex color",
                        value.as_ref()
                    ))
                })
            })
            .collect::<ChartSpecResult<Vec<_>>>()?;
        Self::new(entries)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn at(&self, position: usize) -> Rgb8 {
        self.entries[position % self.entries.len()]
    }

    #[must_use]
    pub fn entries(&self) -> &[Rgb8] {
        &self.entries
    }
}

impl Default for PaletteCycle {
    fn default() -> Self {
        let entries = DEFAULT_CHART_COLORS
            .iter()
            .filter_map(|value| Rgb8::from_hex(value).ok())
            .collect();
        Self { entries }
    }
}

impl TryFrom<Vec<String>> for PaletteCycle {
    type Error = ChartSpecError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<PaletteCycle> for Vec<String> {
    fn from(value: PaletteCycle) -> Self {
        value.entries.into_iter().map(Rgb8::to_hex).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_parses_every_entry() {
        assert_eq!(PaletteCycle::default().len(), DEFAULT_CHART_COLORS.len());
    }

    #[test]
    fn positions_wrap_modulo_length() {
        let palette = PaletteCycle::from_hex(&["#111111", "#222222"]).expect("palette");
        assert_eq!(palette.at(0), Rgb8::new(0x11, 0x11, 0x11));
        assert_eq!(palette.at(3), Rgb8::new(0x22, 0x22, 0x22));
        assert_eq!(palette.at(4), palette.at(0));
    }

    #[test]
    fn empty_or_malformed_palette_is_rejected() {
        assert!(PaletteCycle::from_hex::<&str>(&[]).is_err());
        assert!(PaletteCycle::from_hex(&["#111111", "blue"]).is_err());
    }
}

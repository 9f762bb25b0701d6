use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartSpecError, ChartSpecResult};

/// Opacity used for fills under a line and for point backgrounds.
pub const FILL_ALPHA: f64 = 0.4;
/// Opacity used for strokes, point borders, and hover states.
pub const STROKE_ALPHA: f64 = 1.0;

/// Opaque base color parsed from `#RRGGBB` or `#RGB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn from_hex(value: &str) -> ChartSpecResult<Self> {
        parse_hex(value).ok_or_else(|| {
            ChartSpecError::InvalidData(format!("`{value}` is not a #RRGGBB or #RGB color"))
        })
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            alpha,
        }
    }

    #[must_use]
    pub const fn translucent(self) -> Rgba {
        self.with_alpha(FILL_ALPHA)
    }

    #[must_use]
    pub const fn opaque(self) -> Rgba {
        self.with_alpha(STROKE_ALPHA)
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

fn parse_hex(value: &str) -> Option<Rgb8> {
    let hex = value.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some(Rgb8::new(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        3 => Some(Rgb8::new(
            channel(&hex[0..1].repeat(2))?,
            channel(&hex[1..2].repeat(2))?,
            channel(&hex[2..3].repeat(2))?,
        )),
        _ => None,
    }
}

/// Color with opacity, serialized as a CSS `rgba(r,g,b,a)` string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f64,
}

impl Rgba {
    #[must_use]
    pub const fn base(self) -> Rgb8 {
        Rgb8::new(self.r, self.g, self.b)
    }

    pub fn parse_css(value: &str) -> ChartSpecResult<Self> {
        let invalid =
            || ChartSpecError::InvalidData(format!("`{value}` is not an rgba(r,g,b,a) color"));
        let body = value
            .trim()
            .strip_prefix("rgba(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(invalid)?;

        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        let [r, g, b, alpha] = parts.as_slice() else {
            return Err(invalid());
        };
        let alpha: f64 = alpha.parse().map_err(|_| invalid())?;
        if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
            return Err(invalid());
        }
        Ok(Self {
            r: r.parse().map_err(|_| invalid())?,
            g: g.parse().map_err(|_| invalid())?,
            b: b.parse().map_err(|_| invalid())?,
            alpha,
        })
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Whole alphas keep one decimal so `1` renders as `1.0`.
        if self.alpha.fract() == 0.0 {
            write!(f, "rgba({},{},{},{:.1})", self.r, self.g, self.b, self.alpha)
        } else {
            write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.alpha)
        }
    }
}

impl From<Rgba> for String {
    fn from(value: Rgba) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for Rgba {
    type Error = ChartSpecError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_css(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(Rgb8::from_hex("#FF0000").expect("long hex"), Rgb8::new(255, 0, 0));
        assert_eq!(Rgb8::from_hex(" #0a0B0c ").expect("padded hex"), Rgb8::new(10, 11, 12));
        assert_eq!(Rgb8::from_hex("#abc").expect("short hex"), Rgb8::new(0xaa, 0xbb, 0xcc));
    }

    #[test]
    fn rejects_malformed_hex() {
        for value in ["", "FF0000", "#FF00", "#GG0000", "#FF00000", "#ééé"] {
            assert!(Rgb8::from_hex(value).is_err(), "{value} should be rejected");
        }
    }

    #[test]
    fn css_output_keeps_one_decimal_for_whole_alpha() {
        assert_eq!(Rgb8::new(17, 17, 17).opaque().to_string(), "rgba(17,17,17,1.0)");
        assert_eq!(
            Rgb8::new(255, 0, 0).translucent().to_string(),
            "rgba(255,0,0,0.4)"
        );
    }

    #[test]
    fn css_string_parses_back() {
        let color = Rgba::parse_css("rgba(1, 2, 3, 0.4)").expect("css color");
        assert_eq!(color, Rgb8::new(1, 2, 3).translucent());
        assert!(Rgba::parse_css("rgb(1,2,3)").is_err());
    }
}

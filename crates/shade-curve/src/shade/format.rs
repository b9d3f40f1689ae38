//! Output formats for a resolved shade.

use std::fmt;
use std::str::FromStr;

use crate::color::{Hsl, Lch, LinearRgb};
use crate::error::CurveError;

use super::Shade;

/// Significant digits used for CSS function notation.
const PRECISION: usize = 5;

/// A string representation a shade can be exported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ColorFormat {
    Oklch,
    Lch,
    Hsl,
    Hex,
    Rgb,
}

impl ColorFormat {
    pub const ALL: [ColorFormat; 5] = [
        ColorFormat::Oklch,
        ColorFormat::Lch,
        ColorFormat::Hsl,
        ColorFormat::Hex,
        ColorFormat::Rgb,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ColorFormat::Oklch => "oklch",
            ColorFormat::Lch => "lch",
            ColorFormat::Hsl => "hsl",
            ColorFormat::Hex => "hex",
            ColorFormat::Rgb => "rgb",
        }
    }

    pub(crate) fn render(self, shade: &Shade) -> String {
        match self {
            ColorFormat::Oklch => format!(
                "oklch({}% {} {})",
                to_precision(shade.lightness * 100.0, PRECISION),
                to_precision(shade.chroma, PRECISION),
                hue_to_precision(shade.hue)
            ),
            ColorFormat::Lch => {
                let lch = Lch::from(LinearRgb::from(shade.oklch()));
                format!(
                    "lch({}% {} {})",
                    to_precision(lch.l, PRECISION),
                    to_precision(lch.c, PRECISION),
                    hue_to_precision(lch.h)
                )
            }
            ColorFormat::Hsl => {
                let hsl = Hsl::from(shade.srgb());
                format!(
                    "hsl({} {}% {}%)",
                    hue_to_precision(hsl.h),
                    to_precision(hsl.s * 100.0, PRECISION),
                    to_precision(hsl.l * 100.0, PRECISION)
                )
            }
            ColorFormat::Hex => shade.srgb().to_hex(),
            ColorFormat::Rgb => {
                let [r, g, b] = shade.srgb().to_bytes();
                format!("rgb({} {} {})", r, g, b)
            }
        }
    }
}

impl FromStr for ColorFormat {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorFormat::ALL
            .into_iter()
            .find(|f| f.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| CurveError::UnknownFormat(s.to_string()))
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Hue in degrees, wrapped into `[0, 360)` after rounding so a value just
/// under a full turn prints as `0`.
fn hue_to_precision(hue: f64) -> String {
    let text = to_precision(hue.rem_euclid(360.0), PRECISION);
    if text == "360" {
        "0".to_string()
    } else {
        text
    }
}

/// Round to `digits` significant digits and drop trailing zeros.
pub(crate) fn to_precision(value: f64, digits: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return "0".to_string();
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (digits as i32 - 1 - magnitude).max(0) as usize;
    let formatted = format!("{:.*}", decimals, value);
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}

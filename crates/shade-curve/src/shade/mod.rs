//! Resolved shades and their display representations.

mod format;
mod numeric;

pub use format::ColorFormat;
pub use numeric::{separate_numeric_string_into_parts, DisplayValue, NumericPart, PartKind};

use crate::color::{LinearRgb, Oklch, Srgb};

/// One sampled point of a color ramp, in native OKLCH coordinates.
///
/// Shades are value objects: they are recomputed from curves on demand
/// and never stored. `index` is the shade's position in its ramp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shade {
    pub index: usize,
    /// 0.0..=1.0
    pub lightness: f64,
    /// 0.0..=0.5
    pub chroma: f64,
    /// 0.0..=480.0, not wrapped
    pub hue: f64,
}

impl Shade {
    pub fn new(index: usize, lightness: f64, chroma: f64, hue: f64) -> Self {
        Self {
            index,
            lightness,
            chroma,
            hue,
        }
    }

    /// Hue wrapped onto the color wheel.
    #[inline]
    pub fn display_hue(&self) -> f64 {
        self.hue.rem_euclid(360.0)
    }

    pub fn oklch(&self) -> Oklch {
        Oklch::new(self.lightness, self.chroma, self.hue)
    }

    /// Whether the shade is representable in sRGB without clipping.
    pub fn in_gamut(&self) -> bool {
        LinearRgb::from(self.oklch()).in_gamut()
    }

    /// Nearest sRGB color (per-channel clip in linear light).
    pub fn srgb(&self) -> Srgb {
        Srgb::from(LinearRgb::from(self.oklch()).clip())
    }

    pub fn hex(&self) -> String {
        ColorFormat::Hex.render(self)
    }

    /// String form in the requested format.
    ///
    /// ```
    /// use shade_curve::{ColorFormat, Shade};
    ///
    /// let shade = Shade::new(0, 0.9, 0.05, 389.74);
    /// assert_eq!(shade.format(ColorFormat::Oklch), "oklch(90% 0.05 29.74)");
    /// ```
    pub fn format(&self, format: ColorFormat) -> String {
        format.render(self)
    }

    /// Lightness, chroma and hue formatted for a compact value readout.
    pub fn merged(&self) -> [DisplayValue; 3] {
        let hue = format!("{:.0}", self.hue.round().rem_euclid(360.0));
        [
            DisplayValue::new(format!("{:.2}", self.lightness), ""),
            DisplayValue::new(format!("{:.2}", self.chroma), ""),
            DisplayValue::new(format!("{:0>3}", hue), "º"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats_for_srgb_red() {
        let red = Oklch::from(Srgb::new(1.0, 0.0, 0.0));
        let shade = Shade::new(0, red.l, red.c, red.h);

        assert_eq!(shade.hex(), "#ff0000");
        assert_eq!(shade.format(ColorFormat::Rgb), "rgb(255 0 0)");
        // Hue of pure red may land on either side of 0/360 after the round trip
        let hsl = shade.format(ColorFormat::Hsl);
        assert!(hsl.starts_with("hsl(") && hsl.ends_with(" 100% 50%)"), "got {hsl}");
        assert!(shade.format(ColorFormat::Oklch).starts_with("oklch(62.79"));
        assert!(shade.format(ColorFormat::Lch).starts_with("lch(54.2"));
    }

    #[test]
    fn test_hue_wraps_only_for_display() {
        let shade = Shade::new(0, 0.5, 0.1, 400.0);
        assert_eq!(shade.hue, 400.0);
        assert_eq!(shade.display_hue(), 40.0);
        assert!(shade.format(ColorFormat::Oklch).ends_with(" 40)"));
    }

    #[test]
    fn test_merged_hue_rounding_up_to_a_full_turn_wraps() {
        let [_, _, h] = Shade::new(0, 0.5, 0.1, 359.6).merged();
        assert_eq!(h.value, "000");
        let [_, _, h] = Shade::new(0, 0.5, 0.1, 479.7).merged();
        assert_eq!(h.value, "120");
    }

    #[test]
    fn test_out_of_gamut_is_clipped() {
        let shade = Shade::new(0, 0.5, 0.5, 150.0);
        assert!(!shade.in_gamut());
        let [r, g, b] = shade.srgb().to_bytes();
        assert!(g > r && g > b, "expected a green, got {r} {g} {b}");
    }

    #[test]
    fn test_merged_display_values() {
        let shade = Shade::new(0, 0.9, 0.05, 7.2);
        let [l, c, h] = shade.merged();

        assert_eq!(l.value, "0.90");
        assert_eq!(
            l.parts,
            vec![NumericPart::insignificant("0."), NumericPart::significant("90")]
        );
        assert_eq!(c.value, "0.05");
        assert_eq!(h.value, "007");
        assert_eq!(h.unit, "º");
        assert_eq!(h.parts[1], NumericPart::significant("7"));
    }

    #[test]
    fn test_merged_wraps_hue() {
        let shade = Shade::new(0, 0.5, 0.1, 389.74);
        assert_eq!(shade.merged()[2].value, "030");
    }
}

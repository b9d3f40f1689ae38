//! HSL: the legacy cylindrical form of sRGB.
//!
//! Earlier palettes were authored in HSL with saturation and lightness in
//! 0..100. This type uses 0..1 for both; callers scale legacy values.

use super::srgb::Srgb;

/// Hue (degrees), saturation and lightness (0.0..=1.0) over sRGB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue angle in degrees, 0.0..360.0
    pub h: f64,
    /// Saturation, 0.0..=1.0
    pub s: f64,
    /// Lightness, 0.0..=1.0
    pub l: f64,
}

impl Hsl {
    #[inline]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

impl From<Srgb> for Hsl {
    fn from(rgb: Srgb) -> Self {
        let max = rgb.r.max(rgb.g).max(rgb.b);
        let min = rgb.r.min(rgb.g).min(rgb.b);
        let l = (max + min) / 2.0;
        let d = max - min;

        if d <= f64::EPSILON {
            return Self::new(0.0, 0.0, l);
        }

        let s = d / (1.0 - (2.0 * l - 1.0).abs());
        let h = if max == rgb.r {
            ((rgb.g - rgb.b) / d).rem_euclid(6.0)
        } else if max == rgb.g {
            (rgb.b - rgb.r) / d + 2.0
        } else {
            (rgb.r - rgb.g) / d + 4.0
        };

        Self::new(h * 60.0, s, l)
    }
}

impl From<Hsl> for Srgb {
    fn from(hsl: Hsl) -> Self {
        let s = hsl.s.clamp(0.0, 1.0);
        let l = hsl.l.clamp(0.0, 1.0);
        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let h = hsl.h.rem_euclid(360.0) / 60.0;
        let x = c * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Srgb::new(r + m, g + m, b + m)
    }
}

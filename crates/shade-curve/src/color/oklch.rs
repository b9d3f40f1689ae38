//! Oklch: polar form of Oklab.
//!
//! This is the native coordinate system of a sampled shade: lightness
//! (0..1), chroma (0..~0.4 in gamut) and hue in degrees. Hue is kept in
//! degrees rather than radians because curve hue values may run past 360
//! and are only wrapped at display time.

use super::linear_rgb::LinearRgb;
use super::oklab::Oklab;
use super::srgb::Srgb;

/// Below this chroma a color is treated as achromatic.
const ACHROMATIC_CHROMA: f64 = 1e-6;

/// Oklch color (Lightness, Chroma, Hue in degrees).
///
/// For achromatic colors hue is undefined. Conversions from Oklab set it to
/// 0.0 in that case, which is harmless since zero chroma ignores hue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    /// Lightness: 0.0 (black) to 1.0 (white)
    pub l: f64,
    /// Chroma: distance from neutral axis (0.0 = gray)
    pub c: f64,
    /// Hue angle in degrees (not wrapped)
    pub h: f64,
}

impl Oklch {
    #[inline]
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Whether chroma is too small for hue to be meaningful.
    #[inline]
    pub fn is_achromatic(self) -> bool {
        self.c.abs() < ACHROMATIC_CHROMA
    }
}

impl From<Oklab> for Oklch {
    fn from(lab: Oklab) -> Self {
        let c = (lab.a * lab.a + lab.b * lab.b).sqrt();
        let h = if c < ACHROMATIC_CHROMA {
            0.0
        } else {
            lab.b.atan2(lab.a).to_degrees().rem_euclid(360.0)
        };
        Self { l: lab.l, c, h }
    }
}

impl From<Oklch> for Oklab {
    fn from(lch: Oklch) -> Self {
        let h = lch.h.to_radians();
        Self::new(lch.l, lch.c * h.cos(), lch.c * h.sin())
    }
}

impl From<Oklch> for LinearRgb {
    fn from(lch: Oklch) -> Self {
        LinearRgb::from(Oklab::from(lch))
    }
}

impl From<Srgb> for Oklch {
    fn from(srgb: Srgb) -> Self {
        Oklch::from(Oklab::from(LinearRgb::from(srgb)))
    }
}

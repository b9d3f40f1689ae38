//! Linear-light RGB, the hop between encoded [`Srgb`] and [`Oklab`].
//!
//! [`Oklab`]: super::Oklab

use super::srgb::Srgb;

/// Channels leave 0.0..=1.0 whenever the source shade is out of gamut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl LinearRgb {
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Per-channel clip into the sRGB cube, applied before hex, rgb and hsl
    /// output.
    #[inline]
    pub fn clip(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    pub fn in_gamut(self) -> bool {
        const SLACK: f64 = 1e-6;
        [self.r, self.g, self.b]
            .iter()
            .all(|c| (-SLACK..=1.0 + SLACK).contains(c))
    }
}

/// Decode one sRGB channel (linear segment below 0.04045)
#[inline]
pub(crate) fn srgb_to_linear(srgb: f64) -> f64 {
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode one linear channel
#[inline]
pub(crate) fn linear_to_srgb(linear: f64) -> f64 {
    if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

impl From<Srgb> for LinearRgb {
    fn from(srgb: Srgb) -> Self {
        Self {
            r: srgb_to_linear(srgb.r),
            g: srgb_to_linear(srgb.g),
            b: srgb_to_linear(srgb.b),
        }
    }
}

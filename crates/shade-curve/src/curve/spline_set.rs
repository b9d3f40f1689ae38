//! The three channel curves that define one color's ramp.

use super::bezier::Curve;
use crate::channel::Channel;

/// Hue, saturation (chroma) and lightness curves of a single color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplineSet {
    pub hue: Curve,
    pub saturation: Curve,
    pub lightness: Curve,
}

impl SplineSet {
    pub fn new(hue: Curve, saturation: Curve, lightness: Curve) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Default hue curve: blue sweeping down towards purple.
    pub fn default_hue() -> Curve {
        Self::pinned([0.0, 389.74, 0.29, 332.3, 0.65, 294.56, 1.0, 276.51])
    }

    /// Default chroma curve: muted ends with a saturated middle.
    pub fn default_saturation() -> Curve {
        Self::pinned([0.0, 0.05, 0.328125, 0.23, 0.76, 0.25, 1.0, 0.05])
    }

    /// Default lightness curve: light to dark.
    pub fn default_lightness() -> Curve {
        Self::pinned([0.0, 0.9, 0.203, 0.53, 0.58, 0.24, 1.0, 0.16])
    }

    pub fn curve(&self, channel: Channel) -> &Curve {
        match channel {
            Channel::Hue => &self.hue,
            Channel::Saturation => &self.saturation,
            Channel::Lightness => &self.lightness,
        }
    }

    pub fn set_curve(&mut self, channel: Channel, curve: Curve) {
        match channel {
            Channel::Hue => self.hue = curve,
            Channel::Saturation => self.saturation = curve,
            Channel::Lightness => self.lightness = curve,
        }
    }

    fn pinned(points: [f64; 8]) -> Curve {
        // Literal defaults above satisfy the curve invariants
        Curve::new(points).unwrap_or_else(|_| Curve::linear(points[1], points[7]))
    }
}

impl Default for SplineSet {
    fn default() -> Self {
        Self::new(
            Self::default_hue(),
            Self::default_saturation(),
            Self::default_lightness(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_keep_configured_points() {
        let set = SplineSet::default();
        assert_eq!(
            set.hue.points(),
            [0.0, 389.74, 0.29, 332.3, 0.65, 294.56, 1.0, 276.51]
        );
        assert_eq!(set.saturation.start(), 0.05);
        assert_eq!(set.lightness.end(), 0.16);
    }

    #[test]
    fn test_set_curve_targets_one_channel() {
        let mut set = SplineSet::default();
        let flat = Curve::linear(0.5, 0.5);
        set.set_curve(Channel::Lightness, flat);
        assert_eq!(*set.curve(Channel::Lightness), flat);
        assert_eq!(*set.curve(Channel::Hue), SplineSet::default_hue());
    }
}

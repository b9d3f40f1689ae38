//! Named easing presets and scalar interpolation helpers.

use std::fmt;
use std::str::FromStr;

use crate::error::CurveError;

/// Linear interpolation: `position = 0` gives `start`, `1` gives `end`.
///
/// ```
/// use shade_curve::lerp;
/// assert_eq!(lerp(10.0, 20.0, 0.5), 15.0);
/// ```
#[inline]
pub fn lerp(start: f64, end: f64, position: f64) -> f64 {
    (1.0 - position) * start + position * end
}

/// Map `value` from the range `min1..max1` onto `min2..max2`.
#[inline]
pub fn remap(value: f64, min1: f64, max1: f64, min2: f64, max2: f64) -> f64 {
    min2 + (value - min1) * (max2 - min2) / (max1 - min1)
}

macro_rules! easings {
    ($($variant:ident => $key:literal, $name:literal, [$x1:expr, $y1:expr, $x2:expr, $y2:expr];)+) => {
        /// A canonical curve shape, applied to a channel while keeping its
        /// endpoints.
        ///
        /// Each preset is two handles in normalized space:
        /// `[x1, y1_fraction, x2, y2_fraction]`.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Easing {
            $($variant,)+
        }

        impl Easing {
            /// Every preset, in menu order.
            pub const ALL: &'static [Easing] = &[$(Easing::$variant,)+];

            /// Stable lookup key (camelCase).
            pub fn key(self) -> &'static str {
                match self {
                    $(Easing::$variant => $key,)+
                }
            }

            /// Human-readable label.
            pub fn name(self) -> &'static str {
                match self {
                    $(Easing::$variant => $name,)+
                }
            }

            /// `[x1, y1_fraction, x2, y2_fraction]`
            pub fn handles(self) -> [f64; 4] {
                match self {
                    $(Easing::$variant => [$x1, $y1, $x2, $y2],)+
                }
            }
        }
    };
}

easings! {
    Linear => "linear", "Linear", [1.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0];
    EaseInSine => "easeInSine", "Sine In", [0.12, 0.0, 0.39, 0.0];
    EaseOutSine => "easeOutSine", "Sine Out", [0.61, 1.0, 0.88, 1.0];
    EaseInOutSine => "easeInOutSine", "Sine", [0.37, 0.0, 0.63, 1.0];
    EaseInQuad => "easeInQuad", "Quad In", [0.11, 0.0, 0.5, 0.0];
    EaseOutQuad => "easeOutQuad", "Quad Out", [0.5, 1.0, 0.89, 1.0];
    EaseInOutQuad => "easeInOutQuad", "Quad", [0.45, 0.0, 0.55, 1.0];
    EaseInCubic => "easeInCubic", "Cubic In", [0.32, 0.0, 0.67, 0.0];
    EaseOutCubic => "easeOutCubic", "Cubic Out", [0.33, 1.0, 0.68, 1.0];
    EaseInOutCubic => "easeInOutCubic", "Cubic", [0.65, 0.0, 0.35, 1.0];
    EaseInQuart => "easeInQuart", "Quart In", [0.5, 0.0, 0.75, 0.0];
    EaseOutQuart => "easeOutQuart", "Quart Out", [0.25, 1.0, 0.5, 1.0];
    EaseInOutQuart => "easeInOutQuart", "Quart", [0.76, 0.0, 0.24, 1.0];
    EaseInQuint => "easeInQuint", "Quint In", [0.64, 0.0, 0.78, 0.0];
    EaseOutQuint => "easeOutQuint", "Quint Out", [0.22, 1.0, 0.36, 1.0];
    EaseInOutQuint => "easeInOutQuint", "Quint", [0.83, 0.0, 0.17, 1.0];
    EaseInExpo => "easeInExpo", "Expo In", [0.7, 0.0, 0.84, 0.0];
    EaseOutExpo => "easeOutExpo", "Expo Out", [0.16, 1.0, 0.3, 1.0];
    EaseInOutExpo => "easeInOutExpo", "Expo", [0.87, 0.0, 0.13, 1.0];
    EaseInCirc => "easeInCirc", "Circ In", [0.55, 0.0, 1.0, 0.45];
    EaseOutCirc => "easeOutCirc", "Circ Out", [0.0, 0.55, 0.45, 1.0];
    EaseInOutCirc => "easeInOutCirc", "Circ", [0.85, 0.0, 0.15, 1.0];
    EaseInBack => "easeInBack", "Back In", [0.36, 0.0, 0.66, -0.56];
    EaseOutBack => "easeOutBack", "Back Out", [0.34, 1.56, 0.64, 1.0];
    EaseInOutBack => "easeInOutBack", "Back", [0.68, -0.6, 0.32, 1.6];
}

impl FromStr for Easing {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Easing::ALL
            .iter()
            .copied()
            .find(|e| e.key() == s)
            .ok_or_else(|| CurveError::UnknownEasing(s.to_string()))
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_known_values() {
        assert_eq!(lerp(10.0, 20.0, 0.5), 15.0);
        assert_eq!(lerp(0.0, 1.0, 0.2), 0.2);
        assert_eq!(lerp(0.0, 10.0, 0.2), 2.0);
        assert_eq!(lerp(10.0, 0.0, 0.2), 8.0);
    }

    #[test]
    fn test_remap() {
        assert_eq!(remap(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
        assert_eq!(remap(0.25, 0.0, 1.0, 100.0, 200.0), 125.0);
    }

    #[test]
    fn test_keys_round_trip_through_from_str() {
        for easing in Easing::ALL {
            assert_eq!(easing.key().parse::<Easing>().unwrap(), *easing);
        }
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        let err = "easeSideways".parse::<Easing>().unwrap_err();
        assert_eq!(err, CurveError::UnknownEasing("easeSideways".to_string()));
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<_> = Easing::ALL.iter().map(|e| e.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Easing::ALL.len());
    }
}

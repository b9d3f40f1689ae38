//! CIE LCh (polar CIE Lab) relative to the D50 white point, as used by CSS
//! `lch()`.

use super::linear_rgb::LinearRgb;
use super::{mul3, Mat3};

/// D50 reference white (x = 0.3457, y = 0.3585)
const D50_WHITE: [f64; 3] = [0.3457 / 0.3585, 1.0, (1.0 - 0.3457 - 0.3585) / 0.3585];

const EPSILON: f64 = 216.0 / 24389.0;
const KAPPA: f64 = 24389.0 / 27.0;

/// CIE LCh color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lch {
    /// Lightness, 0.0..=100.0
    pub l: f64,
    /// Chroma, 0.0..~150.0
    pub c: f64,
    /// Hue in degrees, 0.0..360.0
    pub h: f64,
}

impl Lch {
    #[inline]
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }
}

impl From<LinearRgb> for Lch {
    fn from(rgb: LinearRgb) -> Self {
        // Linear sRGB -> XYZ (D65)
        const RGB_TO_XYZ: Mat3 = [
            [0.41239079926595934, 0.357584339383878, 0.1804807884018343],
            [0.21263900587151027, 0.715168678767756, 0.07219231536073371],
            [0.01933081871559182, 0.11919477979462598, 0.9505321522496607],
        ];
        // Bradford chromatic adaptation D65 -> D50
        const D65_TO_D50: Mat3 = [
            [1.0479298208405488, 0.022946793341019088, -0.05019222954313557],
            [0.029627815688159344, 0.990434484573249, -0.01707382502938514],
            [-0.009243058152591178, 0.015055144896577895, 0.7518742899580008],
        ];

        let xyz = mul3(&D65_TO_D50, mul3(&RGB_TO_XYZ, [rgb.r, rgb.g, rgb.b]));

        let f = |t: f64| {
            if t > EPSILON {
                t.cbrt()
            } else {
                (KAPPA * t + 16.0) / 116.0
            }
        };
        let fx = f(xyz[0] / D50_WHITE[0]);
        let fy = f(xyz[1] / D50_WHITE[1]);
        let fz = f(xyz[2] / D50_WHITE[2]);

        let l = 116.0 * fy - 16.0;
        let a = 500.0 * (fx - fy);
        let b = 200.0 * (fy - fz);

        let c = (a * a + b * b).sqrt();
        // Near-neutral colors carry matrix rounding noise in a/b
        let h = if c < 1e-4 {
            0.0
        } else {
            b.atan2(a).to_degrees().rem_euclid(360.0)
        };

        Self::new(l, c, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Srgb;

    #[test]
    fn test_srgb_red() {
        // CSS Color 4 reference: lch(54.29% 106.84 40.85)
        let red = Lch::from(LinearRgb::from(Srgb::new(1.0, 0.0, 0.0)));
        assert!((red.l - 54.29).abs() < 0.05, "L = {}", red.l);
        assert!((red.c - 106.84).abs() < 0.05, "C = {}", red.c);
        assert!((red.h - 40.85).abs() < 0.05, "h = {}", red.h);
    }

    #[test]
    fn test_white_and_black() {
        let white = Lch::from(LinearRgb::new(1.0, 1.0, 1.0));
        assert!((white.l - 100.0).abs() < 0.01, "L = {}", white.l);
        assert!(white.c < 0.01, "C = {}", white.c);

        let black = Lch::from(LinearRgb::new(0.0, 0.0, 0.0));
        assert!(black.l.abs() < 1e-9);
        assert_eq!(black.h, 0.0);
    }
}

//! Cartesian Oklab, the bridge between sRGB and the polar [`Oklch`] form
//! that shades are sampled in.
//!
//! Matrices are the 2021-01-25 revision published at
//! <https://bottosson.github.io/posts/oklab/>.
//!
//! [`Oklch`]: super::Oklch

use super::linear_rgb::LinearRgb;
use super::{mul3, Mat3};

/// Linear sRGB to cone response.
const RGB_TO_LMS: Mat3 = [
    [0.4122214708, 0.5363325363, 0.0514459929],
    [0.2119034982, 0.6806995451, 0.1073969566],
    [0.0883024619, 0.2817188376, 0.6299787005],
];

/// Cube-rooted cone response to L, a, b.
const LMS_TO_LAB: Mat3 = [
    [0.2104542553, 0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.8086757660],
];

const LAB_TO_LMS: Mat3 = [
    [1.0, 0.3963377774, 0.2158037573],
    [1.0, -0.1055613458, -0.0638541728],
    [1.0, -0.0894841775, -1.2914855480],
];

const LMS_TO_RGB: Mat3 = [
    [4.0767416621, -3.3077115913, 0.2309699292],
    [-1.2684380046, 2.6097574011, -0.3413193965],
    [-0.0041960863, -0.7034186147, 1.7076147010],
];

/// `l` is perceived lightness, `a` runs green to red and `b` blue to yellow.
///
/// Nothing is clamped: a curve is free to describe colors the display
/// cannot show, and gamut handling happens when a shade is formatted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Oklab {
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }
}

impl From<LinearRgb> for Oklab {
    fn from(rgb: LinearRgb) -> Self {
        let lms = mul3(&RGB_TO_LMS, [rgb.r, rgb.g, rgb.b]).map(f64::cbrt);
        let [l, a, b] = mul3(&LMS_TO_LAB, lms);
        Self { l, a, b }
    }
}

impl From<Oklab> for LinearRgb {
    /// Out-of-gamut input gives channels outside 0.0..=1.0.
    fn from(lab: Oklab) -> Self {
        let lms = mul3(&LAB_TO_LMS, [lab.l, lab.a, lab.b]).map(|v| v * v * v);
        let [r, g, b] = mul3(&LMS_TO_RGB, lms);
        LinearRgb::new(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_primary_red_reference_values() {
        // Values listed for sRGB red on the Oklab reference page
        let red = Oklab::from(LinearRgb::new(1.0, 0.0, 0.0));
        assert!((red.l - 0.627955).abs() < 1e-5, "l = {}", red.l);
        assert!((red.a - 0.224863).abs() < 1e-5, "a = {}", red.a);
        assert!((red.b - 0.125846).abs() < 1e-5, "b = {}", red.b);
    }

    #[test]
    fn test_agrees_with_palette() {
        use palette::{IntoColor, LinSrgb};

        // A spread of ramp-like colors rather than just the cube corners
        for &(r, g, b) in &[
            (0.9, 0.1, 0.05),
            (0.02, 0.3, 0.6),
            (0.45, 0.45, 0.45),
            (0.8, 0.7, 0.0),
            (0.003, 0.001, 0.002),
        ] {
            let ours = Oklab::from(LinearRgb::new(r, g, b));
            let reference: palette::Oklab<f64> = LinSrgb::new(r, g, b).into_color();
            assert!(
                close(ours.l, reference.l)
                    && close(ours.a, reference.a)
                    && close(ours.b, reference.b),
                "({r}, {g}, {b}): {ours:?} vs {reference:?}"
            );
        }
    }

    #[test]
    fn test_inverse_recovers_linear_rgb() {
        // Includes channels outside the unit cube, as produced by wide curves
        for &(r, g, b) in &[(1.0, 0.5, 0.0), (0.1, 0.9, 0.4), (1.1, -0.05, 0.3)] {
            let back = LinearRgb::from(Oklab::from(LinearRgb::new(r, g, b)));
            assert!(
                close(back.r, r) && close(back.g, g) && close(back.b, b),
                "({r}, {g}, {b}) came back as {back:?}"
            );
        }
    }

    #[test]
    fn test_grays_have_no_chroma() {
        for v in [0.0, 0.18, 1.0] {
            let gray = Oklab::from(LinearRgb::new(v, v, v));
            assert!(gray.a.abs() < 1e-6 && gray.b.abs() < 1e-6, "{gray:?}");
        }
        assert!(close(Oklab::from(LinearRgb::new(1.0, 1.0, 1.0)).l, 1.0));
    }
}

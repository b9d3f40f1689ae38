//! Cubic Bézier curves over the unit sampling domain.
//!
//! A [`Curve`] maps a sampling position `t` in `0..=1` to a channel value.
//! The two on-curve points are pinned to `x = 0` and `x = 1`; the off-curve
//! handles are free and may leave the domain, so the curve is not guaranteed
//! to be monotonic in `x`.

use super::easing::{lerp, Easing};
use crate::channel::Endpoint;
use crate::error::CurveError;

/// Positions past this are treated as the right edge during root finding.
pub const RIGHT_EDGE: f64 = 0.999_999;

/// Bisection steps inside the bracketing piece (well past f64 resolution).
const BISECT_STEPS: usize = 64;

/// One of the four Bézier control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    /// Sampling-domain coordinate
    pub x: f64,
    /// Channel value in native units
    pub y: f64,
}

impl ControlPoint {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A cubic Bézier stored as `[x0, y0, x1, y1, x2, y2, x3, y3]`.
///
/// Invariants, checked by every constructor:
/// - all eight values are finite
/// - `x0 == 0` and `x3 == 1`
///
/// `Curve` is `Copy`; handing a curve to another color always hands over an
/// independent value.
///
/// # Example
///
/// ```
/// use shade_curve::Curve;
///
/// let curve = Curve::linear(0.9, 0.1);
/// assert_eq!(curve.value_at(0.0), 0.9);
/// assert_eq!(curve.value_at(1.0), 0.1);
/// assert!((curve.value_at(0.5) - 0.5).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<f64>", into = "Vec<f64>")
)]
pub struct Curve {
    points: [f64; 8],
}

impl Curve {
    /// Build a curve from its flat control-point array.
    pub fn new(points: [f64; 8]) -> Result<Self, CurveError> {
        if let Some(index) = points.iter().position(|v| !v.is_finite()) {
            return Err(CurveError::NonFinite { index });
        }
        if points[0] != 0.0 {
            return Err(CurveError::UnpinnedEndpoint {
                index: 0,
                found: points[0],
            });
        }
        if points[6] != 1.0 {
            return Err(CurveError::UnpinnedEndpoint {
                index: 6,
                found: points[6],
            });
        }
        Ok(Self { points })
    }

    /// A straight ramp from `start` to `end` with handles at thirds.
    pub fn linear(start: f64, end: f64) -> Self {
        Self {
            points: [
                0.0,
                start,
                1.0 / 3.0,
                lerp(start, end, 1.0 / 3.0),
                2.0 / 3.0,
                lerp(start, end, 2.0 / 3.0),
                1.0,
                end,
            ],
        }
    }

    /// The flat `[x0, y0, .., x3, y3]` array.
    #[inline]
    pub fn points(&self) -> [f64; 8] {
        self.points
    }

    pub fn control_points(&self) -> [ControlPoint; 4] {
        let p = &self.points;
        [
            ControlPoint::new(p[0], p[1]),
            ControlPoint::new(p[2], p[3]),
            ControlPoint::new(p[4], p[5]),
            ControlPoint::new(p[6], p[7]),
        ]
    }

    /// The four `y` values: start, handle, handle, end.
    pub fn y_values(&self) -> [f64; 4] {
        let p = &self.points;
        [p[1], p[3], p[5], p[7]]
    }

    /// Value at the left edge (`y0`).
    #[inline]
    pub fn start(&self) -> f64 {
        self.points[1]
    }

    /// Value at the right edge (`y3`).
    #[inline]
    pub fn end(&self) -> f64 {
        self.points[7]
    }

    pub fn endpoint(&self, which: Endpoint) -> f64 {
        match which {
            Endpoint::Start => self.start(),
            Endpoint::End => self.end(),
        }
    }

    /// Copy of this curve with one endpoint value replaced.
    ///
    /// Non-finite values are rejected; handles are left untouched.
    pub fn with_endpoint(&self, which: Endpoint, value: f64) -> Result<Self, CurveError> {
        let mut points = self.points;
        match which {
            Endpoint::Start => points[1] = value,
            Endpoint::End => points[7] = value,
        }
        Self::new(points)
    }

    /// Copy of this curve with its handles replaced by an easing preset.
    ///
    /// Handle `x` values are taken from the preset as-is (the domain is
    /// already normalized); handle `y` values interpolate between the
    /// current start and end values. Endpoints are preserved.
    pub fn with_easing(&self, easing: Easing) -> Self {
        let [hx1, hy1, hx2, hy2] = easing.handles();
        let (start, end) = (self.start(), self.end());
        Self {
            points: [
                self.points[0],
                start,
                hx1,
                lerp(start, end, hy1),
                hx2,
                lerp(start, end, hy2),
                self.points[6],
                end,
            ],
        }
    }

    /// Copy of this curve with each `y` replaced by `f(index, y)`.
    ///
    /// `index` runs over the four control points. `x` values are kept.
    pub fn map_y(&self, mut f: impl FnMut(usize, f64) -> f64) -> Result<Self, CurveError> {
        let mut points = self.points;
        for k in 0..4 {
            points[2 * k + 1] = f(k, points[2 * k + 1]);
        }
        Self::new(points)
    }

    /// Point on the curve at parameter `u`.
    pub fn point_at(&self, u: f64) -> ControlPoint {
        let [p0, p1, p2, p3] = self.control_points();
        ControlPoint::new(
            bernstein(u, p0.x, p1.x, p2.x, p3.x),
            bernstein(u, p0.y, p1.y, p2.y, p3.y),
        )
    }

    /// Channel value where the curve crosses the vertical line `x = t`.
    ///
    /// Takes the first crossing in increasing curve parameter. Positions at
    /// or below 0 resolve to the start value and positions at or past 1 to
    /// the end value; interior positions are capped at [`RIGHT_EDGE`]. The
    /// result is not clamped to channel bounds.
    pub fn value_at(&self, t: f64) -> f64 {
        if t.is_nan() || t <= 0.0 {
            return self.start();
        }
        if t >= 1.0 {
            return self.end();
        }
        let t = t.min(RIGHT_EDGE);

        match self.parameter_for_x(t) {
            Some(u) => self.point_at(u).y,
            None if t < 0.5 => self.start(),
            None => self.end(),
        }
    }

    /// Smallest `u` in `0..=1` with `x(u) == t`, if any.
    ///
    /// `x(u)` is monotonic between its turning points, so each piece holds
    /// at most one crossing and the first piece with a sign change holds
    /// the first one.
    fn parameter_for_x(&self, t: f64) -> Option<f64> {
        let [x0, _, x1, _, x2, _, x3, _] = self.points;
        let f = |u: f64| bernstein(u, x0, x1, x2, x3) - t;

        let mut lo = 0.0;
        let mut f_lo = f(lo);
        if f_lo == 0.0 {
            return Some(lo);
        }

        let ends = turning_points(x0, x1, x2, x3).into_iter().flatten();
        for hi in ends.chain([1.0]) {
            let f_hi = f(hi);
            if f_hi == 0.0 {
                return Some(hi);
            }
            if (f_lo < 0.0) != (f_hi < 0.0) {
                return Some(bisect(&f, lo, hi, f_lo));
            }
            lo = hi;
            f_lo = f_hi;
        }

        None
    }
}

/// Cubic Bernstein polynomial for one coordinate.
#[inline]
fn bernstein(u: f64, p0: f64, p1: f64, p2: f64, p3: f64) -> f64 {
    let v = 1.0 - u;
    v * v * v * p0 + 3.0 * v * v * u * p1 + 3.0 * v * u * u * p2 + u * u * u * p3
}

/// Parameters in `(0, 1)` where `x'(u) == 0`, in increasing order.
fn turning_points(p0: f64, p1: f64, p2: f64, p3: f64) -> [Option<f64>; 2] {
    // x'(u) / 3 = a u^2 + b u + c
    let (d0, d1, d2) = (p1 - p0, p2 - p1, p3 - p2);
    let a = d0 - 2.0 * d1 + d2;
    let b = 2.0 * (d1 - d0);
    let c = d0;
    let inside = |u: f64| (u > 0.0 && u < 1.0).then_some(u);

    if a.abs() < 1e-12 {
        if b.abs() < 1e-12 {
            return [None, None];
        }
        return [inside(-c / b), None];
    }
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return [None, None];
    }
    let root = disc.sqrt();
    let r1 = (-b - root) / (2.0 * a);
    let r2 = (-b + root) / (2.0 * a);
    [inside(r1.min(r2)), inside(r1.max(r2))]
}

fn bisect(f: &impl Fn(f64) -> f64, mut lo: f64, mut hi: f64, mut f_lo: f64) -> f64 {
    for _ in 0..BISECT_STEPS {
        let mid = 0.5 * (lo + hi);
        let f_mid = f(mid);
        if f_mid == 0.0 {
            return mid;
        }
        if (f_lo < 0.0) == (f_mid < 0.0) {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
    }
    0.5 * (lo + hi)
}

impl TryFrom<[f64; 8]> for Curve {
    type Error = CurveError;

    fn try_from(points: [f64; 8]) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl TryFrom<Vec<f64>> for Curve {
    type Error = CurveError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        let points: [f64; 8] = values
            .as_slice()
            .try_into()
            .map_err(|_| CurveError::InvalidLength { len: values.len() })?;
        Self::new(points)
    }
}

impl From<Curve> for Vec<f64> {
    fn from(curve: Curve) -> Self {
        curve.points.to_vec()
    }
}

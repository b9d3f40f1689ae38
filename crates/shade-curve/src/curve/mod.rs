//! Bézier curves, easing presets and the per-color spline set.

mod bezier;
mod easing;
mod spline_set;

pub use bezier::{ControlPoint, Curve, RIGHT_EDGE};
pub use easing::{lerp, remap, Easing};
pub use spline_set::SplineSet;

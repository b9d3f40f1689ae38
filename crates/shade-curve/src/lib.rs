//! shade-curve: curve-based shade interpolation in perceptual color space
//!
//! A color is three cubic Bézier curves, one per channel (lightness,
//! chroma, hue), over a shared sampling domain `0..=1`. Sampling the curves
//! at `n` evenly spaced positions produces a ramp of `n` shades, which can
//! then be rendered in several CSS color notations.
//!
//! # Quick Start
//!
//! ```
//! use shade_curve::{sample, ColorFormat, Curve, SplineSet};
//!
//! let splines = SplineSet::new(
//!     Curve::linear(250.0, 290.0), // hue, degrees
//!     Curve::linear(0.05, 0.15),   // chroma
//!     Curve::linear(0.95, 0.25),   // lightness
//! );
//!
//! let shades = sample(&splines, 5).unwrap();
//! assert_eq!(shades.len(), 5);
//! assert_eq!(shades[0].format(ColorFormat::Oklch), "oklch(95% 0.05 250)");
//! ```
//!
//! # Curves
//!
//! Every [`Curve`] has its on-curve points pinned to `x = 0` and `x = 1`.
//! The value at a position `t` is found by intersecting the curve with the
//! vertical line `x = t` and taking the first crossing in curve parameter
//! order (handles may make the curve fold back on itself). Curves are
//! never clamped; the sampler clamps the values it reads into the
//! channel's [`ChannelBounds`]:
//!
//! | Channel | Min | Max |
//! |---------|-----|-----|
//! | hue | 0 | 480 |
//! | saturation (chroma) | 0 | 0.5 |
//! | lightness | 0 | 1 |
//!
//! Hue runs past 360 so a ramp can sweep across red while staying a plain
//! increasing or decreasing value; it is wrapped only for display.
//!
//! # Easing
//!
//! An [`Easing`] preset replaces a curve's two handles with a canonical
//! shape while keeping its endpoints. The preset's `x` values are used
//! directly and its `y` fractions are interpolated between the current
//! start and end values.
//!
//! # Color Spaces
//!
//! ```text
//! Shade (L, C, h°)  ──>  Oklch ──> Oklab ──> LinearRgb ──┬─> clip ──> Srgb ──> hex / rgb / hsl
//!                                                        └─> XYZ D65 ──> D50 ──> Lch
//! ```
//!
//! The `oklch()` notation is produced straight from the shade. Display
//! formats limited to sRGB clip each linear channel into `0..=1`.

pub mod channel;
pub mod color;
pub mod curve;
pub mod error;
pub mod sampler;
pub mod shade;


pub use channel::{Channel, ChannelBounds, Endpoint};
pub use color::{Hsl, Lch, LinearRgb, Oklab, Oklch, Srgb};
pub use curve::{lerp, remap, ControlPoint, Curve, Easing, SplineSet};
pub use error::{CurveError, ParseColorError};
pub use sampler::{sample, MAX_SAMPLES, MIN_SAMPLES};
pub use shade::{
    separate_numeric_string_into_parts, ColorFormat, DisplayValue, NumericPart, PartKind, Shade,
};

//! Conversions out of the native [`Oklch`] shade space.
//!
//! [`Srgb`] is what hex and `rgb()` print, [`Hsl`] is derived from it, and
//! [`Lch`] is CIE LCh against D50. [`LinearRgb`] and [`Oklab`] are the
//! intermediate hops.
//!
//! ```
//! use shade_curve::{LinearRgb, Oklch, Srgb};
//!
//! let red = Oklch::new(0.627955, 0.257683, 29.2339);
//! assert_eq!(Srgb::from(LinearRgb::from(red).clip()).to_hex(), "#ff0000");
//! ```

mod hsl;
mod lch;
mod linear_rgb;
mod oklab;
mod oklch;
mod srgb;

pub use hsl::Hsl;
pub use lch::Lch;
pub use linear_rgb::LinearRgb;
pub use oklab::Oklab;
pub use oklch::Oklch;
pub use srgb::Srgb;

/// Row-major 3x3 matrix
type Mat3 = [[f64; 3]; 3];

#[inline]
fn mul3(m: &Mat3, v: [f64; 3]) -> [f64; 3] {
    m.map(|row| row[0] * v[0] + row[1] * v[1] + row[2] * v[2])
}

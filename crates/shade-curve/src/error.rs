//! Errors returned by curve construction, sampling and key parsing.

use std::num::ParseIntError;

use thiserror::Error;

use crate::sampler::{MAX_SAMPLES, MIN_SAMPLES};

/// Rejected `#rgb` / `#rrggbb` input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    #[error("hex color needs 3 or 6 digits")]
    InvalidLength,
    #[error("bad hex digit: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// Common error for everything fallible in this crate, so callers can use
/// `?` across curve, sampler and lookup calls.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// Flat curve array without exactly 8 numbers
    #[error("curve must have 8 values, got {len}")]
    InvalidLength { len: usize },

    /// NaN or infinite coordinate at `index` of `[x0, y0, .., x3, y3]`
    #[error("curve value at index {index} is not finite")]
    NonFinite { index: usize },

    /// `x0` (index 0) not 0, or `x3` (index 6) not 1
    #[error("curve value at index {index} must be {expected}, got {found}", expected = pinned_value(.index))]
    UnpinnedEndpoint { index: usize, found: f64 },

    #[error("sample count {0} out of range ({min}..={max})", min = MIN_SAMPLES, max = MAX_SAMPLES)]
    SampleCount(usize),

    #[error("unknown easing: {0}")]
    UnknownEasing(String),

    #[error("unknown color format: {0}")]
    UnknownFormat(String),

    #[error("unknown channel: {0}")]
    UnknownChannel(String),

    #[error("unknown endpoint: {0} (expected start or end)")]
    UnknownEndpoint(String),

    #[error("invalid color: {0}")]
    ParseColor(#[from] ParseColorError),
}

fn pinned_value(index: &usize) -> u8 {
    u8::from(*index != 0)
}

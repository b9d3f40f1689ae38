use shade_curve::{CurveError, MAX_SAMPLES, MIN_SAMPLES};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Theme not found: {0}")]
    ThemeNotFound(String),

    #[error("Color not found: {0}")]
    ColorNotFound(String),

    #[error("Interpolation count {0} out of range ({min}..={max})", min = MIN_SAMPLES, max = MAX_SAMPLES)]
    InterpolationCount(usize),

    #[error("Shade index {index} out of range for {count} shades")]
    ShadeIndex { index: usize, count: usize },

    #[error("Curve error: {0}")]
    Curve(#[from] CurveError),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Failed to read template: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown export language: {0}")]
    UnknownLanguage(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid state file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported state version: {0}")]
    UnsupportedVersion(String),

    #[error("Migration failed: {0}")]
    Migration(#[from] CurveError),
}

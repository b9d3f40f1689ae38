//! Huepals - curve-based color palettes
//!
//! Themes of named colors, each a set of OKLCH channel curves sampled into
//! shade ramps by the `shade-curve` engine. This library holds the model,
//! persistence and export layers behind the `huepals` CLI and exposes them
//! for integration testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod services;

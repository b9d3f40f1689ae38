//! Test fixtures and constants.

use huepals::models::{Color, Theme};
use huepals::services::StateFile;
use shade_curve::Curve;
use tempfile::TempDir;

/// Hex values used across tests
pub mod hex {
    pub const RED: &str = "#ff0000";
    pub const BLUE: &str = "#0000ff";
    pub const GRAY: &str = "#808080";
}

/// OKLCH coordinates of pure sRGB red
pub const RED_OKLCH: (f64, f64, f64) = (0.627955, 0.257683, 29.2339);

/// A flat red color: every shade is `#ff0000`
pub fn flat_red(name: &str) -> Color {
    let (l, c, h) = RED_OKLCH;
    let mut color = Color::new(name);
    color.lightness_spline = Curve::linear(l, l);
    color.saturation_spline = Curve::linear(c, c);
    color.hue_spline = Curve::linear(h, h);
    color
}

/// A theme of `names.len()` default colors sampled at `count`
pub fn theme_with(names: &[&str], count: usize) -> Theme {
    Theme {
        colors: names.iter().map(|n| Color::new(*n)).collect(),
        interpolation_count: count,
        ..Theme::new("Fixture")
    }
}

/// A state file inside a fresh temp directory
///
/// Keep the `TempDir` alive for as long as the file is used.
pub fn temp_state() -> (TempDir, StateFile) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let state = StateFile::new(dir.path().join("huepals.json"));
    (dir, state)
}

/// A version "1.0" snapshot written by the HSL editor
pub const LEGACY_HSL_SNAPSHOT: &str = r#"{
  "themes": [
    {
      "id": "theme-1",
      "name": "Legacy",
      "favorite": true,
      "colors": [
        {
          "id": "color-1",
          "name": "Red",
          "hueSpline": [0, 0, 0.3, 0, 0.7, 0, 1, 0],
          "saturationSpline": [0, 100, 0.3, 100, 0.7, 100, 1, 100],
          "lightnessSpline": [0, 50, 0.3, 50, 0.7, 50, 1, 50],
          "hueLinked": false,
          "saturationLinked": true,
          "lightnessLinked": true
        }
      ],
      "baseColorId": null,
      "interpolationCount": 5
    }
  ],
  "ui": {
    "isFooterOpen": false,
    "exportLanguage": "css",
    "messages": [],
    "colorspace": "lch",
    "tab": "overview",
    "currentTheme": null
  },
  "version": "1.0"
}"#;

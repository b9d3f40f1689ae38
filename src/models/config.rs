use crate::assets::AssetLoader;
use crate::services::export::ExportLanguage;
use serde::Deserialize;
use shade_curve::{ColorFormat, MAX_SAMPLES, MIN_SAMPLES};
use std::path::PathBuf;

use super::theme::DEFAULT_INTERPOLATION_COUNT;

/// Settings read from config.yaml; every field is optional
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Path of the persisted theme collection
    #[serde(default = "default_state_file")]
    pub state_file: PathBuf,

    /// Shade count for newly created themes
    #[serde(default = "default_interpolation_count")]
    pub default_interpolation_count: usize,

    /// Defaults for text export
    #[serde(default)]
    pub export: ExportConfig,

    /// SVG grid size
    #[serde(default)]
    pub svg: SvgConfig,
}

fn default_state_file() -> PathBuf {
    PathBuf::from("huepals.json")
}

fn default_interpolation_count() -> usize {
    DEFAULT_INTERPOLATION_COUNT
}

/// Defaults for `export` and `svg` commands
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ExportConfig {
    #[serde(default)]
    pub language: ExportLanguage,

    #[serde(default = "default_format")]
    pub format: ColorFormat,
}

fn default_format() -> ColorFormat {
    ColorFormat::Lch
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            language: ExportLanguage::default(),
            format: default_format(),
        }
    }
}

/// Size of the rendered palette grid
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct SvgConfig {
    #[serde(default = "default_svg_size")]
    pub width: u32,

    #[serde(default = "default_svg_size")]
    pub height: u32,
}

fn default_svg_size() -> u32 {
    128
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            width: default_svg_size(),
            height: default_svg_size(),
        }
    }
}

impl AppConfig {
    /// Parse config.yaml from the loader, or defaults if it is unusable
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        let parsed = loader
            .read_config_string()
            .map_err(|e| e.to_string())
            .and_then(|yaml| serde_yaml::from_str::<Self>(&yaml).map_err(|e| e.to_string()));

        match parsed {
            Ok(config) => {
                tracing::info!(
                    state_file = %config.state_file.display(),
                    language = %config.export.language,
                    format = %config.export.format,
                    "Configuration loaded"
                );
                config
            }
            Err(error) => {
                tracing::warn!(%error, "Unusable config.yaml, falling back to defaults");
                Self::default()
            }
        }
    }

    /// State file path, with `STATE_FILE` taking precedence
    pub fn resolve_state_file(&self) -> PathBuf {
        std::env::var("STATE_FILE")
            .ok()
            .map(PathBuf::from)
            .unwrap_or_else(|| self.state_file.clone())
    }

    /// Configured shade count for new themes, if it is in range
    pub fn interpolation_count(&self) -> usize {
        let count = self.default_interpolation_count;
        if (MIN_SAMPLES..=MAX_SAMPLES).contains(&count) {
            count
        } else {
            tracing::warn!(count, "Configured interpolation count out of range, using default");
            DEFAULT_INTERPOLATION_COUNT
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            state_file: default_state_file(),
            default_interpolation_count: DEFAULT_INTERPOLATION_COUNT,
            export: ExportConfig::default(),
            svg: SvgConfig::default(),
        }
    }
}

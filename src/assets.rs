//! Config and template files, compiled in and optionally replaced on disk
//!
//! `CONFIG_FILE` names a config path and `TEMPLATES_DIR` a template
//! directory. A configured path that holds the file wins over the built-in
//! copy. Configured paths that are still empty get seeded with the built-in
//! copy so there is something to edit.

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(RustEmbed)]
#[folder = "templates/"]
#[include = "*.svg"]
struct Templates;

#[derive(RustEmbed)]
#[folder = "."]
#[include = "config.yaml"]
struct DefaultConfig;

const CONFIG_NAME: &str = "config.yaml";

/// Name of the palette grid template
pub const PALETTE_TEMPLATE: &str = "palette.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Templates,
    Config,
}

/// Files written and left alone by an extraction
#[derive(Debug, Default)]
pub struct ExtractReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

pub struct AssetLoader {
    templates_dir: Option<PathBuf>,
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// `None` means built-in only for that kind of asset
    pub fn new(templates_dir: Option<PathBuf>, config_file: Option<PathBuf>) -> Self {
        Self {
            templates_dir,
            config_file,
        }
    }

    pub fn from_env() -> Self {
        Self::new(
            std::env::var("TEMPLATES_DIR").ok().map(PathBuf::from),
            std::env::var("CONFIG_FILE").ok().map(PathBuf::from),
        )
    }

    pub fn read_template_string(&self, name: &str) -> io::Result<String> {
        let on_disk = self.templates_dir.as_ref().map(|dir| dir.join(name));
        load(on_disk.as_deref(), Templates::get(name).map(|f| f.data), name)
    }

    pub fn read_config_string(&self) -> io::Result<String> {
        load(
            self.config_file.as_deref(),
            DefaultConfig::get(CONFIG_NAME).map(|f| f.data),
            CONFIG_NAME,
        )
    }

    /// Write built-in copies into configured paths that lack them
    pub fn seed_if_configured(&self) -> io::Result<ExtractReport> {
        let mut report = ExtractReport::default();
        if self.templates_dir.is_some() {
            self.extract(AssetCategory::Templates, false, &mut report)?;
        }
        if self.config_file.is_some() {
            self.extract(AssetCategory::Config, false, &mut report)?;
        }
        if !report.written.is_empty() {
            tracing::info!(files = ?report.written, "Seeded assets from built-in copies");
        }
        Ok(report)
    }

    /// Extract built-in assets for editing (`init` command)
    ///
    /// Unconfigured paths default to `./templates` and `./config.yaml`.
    pub fn init(&self, categories: &[AssetCategory], force: bool) -> io::Result<ExtractReport> {
        let mut report = ExtractReport::default();
        for &category in categories {
            self.extract(category, force, &mut report)?;
        }
        Ok(report)
    }

    fn extract(
        &self,
        category: AssetCategory,
        overwrite: bool,
        report: &mut ExtractReport,
    ) -> io::Result<()> {
        for (path, data) in self.targets(category) {
            if !overwrite && path.exists() {
                report.skipped.push(path.display().to_string());
                continue;
            }
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, &data)?;
            report.written.push(path.display().to_string());
        }
        Ok(())
    }

    /// Destination and built-in contents of every file in `category`
    fn targets(&self, category: AssetCategory) -> Vec<(PathBuf, Cow<'static, [u8]>)> {
        match category {
            AssetCategory::Templates => {
                let dir = self
                    .templates_dir
                    .clone()
                    .unwrap_or_else(|| PathBuf::from("./templates"));
                Templates::iter()
                    .filter_map(|name| {
                        let file = Templates::get(&name)?;
                        Some((dir.join(name.as_ref()), file.data))
                    })
                    .collect()
            }
            AssetCategory::Config => {
                let path = self
                    .config_file
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(CONFIG_NAME));
                DefaultConfig::get(CONFIG_NAME)
                    .map(|file| (path, file.data))
                    .into_iter()
                    .collect()
            }
        }
    }
}

fn load(
    on_disk: Option<&Path>,
    builtin: Option<Cow<'static, [u8]>>,
    name: &str,
) -> io::Result<String> {
    let bytes = match on_disk.filter(|path| path.exists()) {
        Some(path) => {
            tracing::trace!(path = %path.display(), "Reading asset from disk");
            Cow::Owned(fs::read(path)?)
        }
        None => builtin.ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("No asset named {name}"))
        })?,
    };
    String::from_utf8(bytes.into_owned())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

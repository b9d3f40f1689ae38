use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use serde::{Deserialize, Serialize};
use shade_curve::ColorFormat;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use tera::{Context, Tera};

use crate::assets::{AssetLoader, PALETTE_TEMPLATE};
use crate::error::ExportError;
use crate::models::{SvgConfig, Theme};

/// Characters left as-is by JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const SVG_URI_PREFIX: &str = "data:image/svg+xml;utf8,";

/// Text export dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportLanguage {
    /// `--gray-1: value;`
    #[default]
    Css,
    /// `$gray1: value`
    Sass,
    /// `Gray 1,value`
    Csv,
}

impl ExportLanguage {
    pub const ALL: [ExportLanguage; 3] = [Self::Css, Self::Sass, Self::Csv];

    pub fn key(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Sass => "sass",
            Self::Csv => "csv",
        }
    }

    /// One exported line for shade `number` (1-based) of `color_name`
    pub fn line(self, color_name: &str, number: usize, value: &str) -> String {
        let label = format!("{color_name} {number}");
        match self {
            Self::Css => format!("--{}: {value};", kebab_case(&label)),
            Self::Sass => format!("${}: {value}", camel_case(&label)),
            Self::Csv => format!("{label},{value}"),
        }
    }
}

impl FromStr for ExportLanguage {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| ExportError::UnknownLanguage(s.to_string()))
    }
}

impl fmt::Display for ExportLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One filled cell of the palette grid
#[derive(Debug, Serialize)]
struct Cell {
    x: String,
    y: String,
    width: String,
    height: String,
    fill: String,
}

/// Renders themes to text variables and SVG grids
pub struct ExportService {
    template: String,
    svg: SvgConfig,
}

impl ExportService {
    /// Service using the palette template from `loader`
    pub fn new(loader: &AssetLoader, svg: SvgConfig) -> Result<Self, ExportError> {
        let template = loader.read_template_string(PALETTE_TEMPLATE)?;
        Ok(Self::with_template(template, svg))
    }

    pub fn with_template(template: impl Into<String>, svg: SvgConfig) -> Self {
        Self {
            template: template.into(),
            svg,
        }
    }

    /// Every shade of every color as variables
    ///
    /// Colors follow theme order and are separated by a blank line.
    pub fn export_text(
        &self,
        theme: &Theme,
        language: ExportLanguage,
        format: ColorFormat,
    ) -> Result<String, ExportError> {
        let blocks: Vec<String> = theme
            .interpolations()?
            .into_iter()
            .map(|(color, shades)| {
                shades
                    .iter()
                    .map(|shade| language.line(&color.name, shade.index + 1, &shade.format(format)))
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .collect();

        tracing::debug!(
            theme = %theme.name,
            %language,
            %format,
            colors = blocks.len(),
            "Exported theme text"
        );
        Ok(blocks.join("\n\n"))
    }

    /// The theme as a grid of rectangles: one column per color, one row per shade
    pub fn svg_string(&self, theme: &Theme, format: ColorFormat) -> Result<String, ExportError> {
        let width = f64::from(self.svg.width);
        let height = f64::from(self.svg.height);
        let columns = theme.colors.len() as f64;
        let rows = theme.interpolation_count as f64;

        let mut cells = Vec::new();
        for (x, (_, shades)) in theme.interpolations()?.into_iter().enumerate() {
            for (y, shade) in shades.iter().enumerate() {
                cells.push(Cell {
                    x: ((x as f64 / columns) * width).to_string(),
                    y: ((y as f64 / rows) * height).to_string(),
                    width: (width / columns).to_string(),
                    height: (height / rows).to_string(),
                    fill: shade.format(format),
                });
            }
        }

        let mut context = Context::new();
        context.insert("width", &self.svg.width);
        context.insert("height", &self.svg.height);
        context.insert("cells", &cells);

        let svg = Tera::one_off(&self.template, &context, false)?;
        tracing::debug!(theme = %theme.name, cells = cells.len(), "Rendered palette SVG");
        Ok(svg)
    }

    /// The theme's SVG grid as a data URI
    pub fn svg_uri(&self, theme: &Theme, format: ColorFormat) -> Result<String, ExportError> {
        Ok(svg_uri(&self.svg_string(theme, format)?))
    }
}

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern compiles"));

/// A capitalized or lowercase run, an all-caps run, other letters, or digits
static WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\p{Lu}?\p{Ll}+|\p{Lu}+|\p{Lo}+|\p{N}+").expect("word pattern compiles")
});

/// Collapse whitespace and percent-encode `svg` into a data URI
pub fn svg_uri(svg: &str) -> String {
    let collapsed = WHITESPACE.replace_all(svg, " ");
    format!(
        "{SVG_URI_PREFIX}{}",
        utf8_percent_encode(&collapsed, URI_COMPONENT)
    )
}

fn words(s: &str) -> Vec<&str> {
    WORDS.find_iter(s).map(|m| m.as_str()).collect()
}

/// `"Blue Gray 2"` -> `"blue-gray-2"`
pub fn kebab_case(s: &str) -> String {
    words(s)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// `"Blue Gray 2"` -> `"blueGray2"`
pub fn camel_case(s: &str) -> String {
    let mut out = String::new();
    for (i, word) in words(s).into_iter().enumerate() {
        let lower = word.to_lowercase();
        if i == 0 {
            out.push_str(&lower);
            continue;
        }
        let mut chars = lower.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

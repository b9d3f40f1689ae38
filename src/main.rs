use anyhow::Context as _;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use huepals::assets::{AssetCategory, AssetLoader};
use huepals::models::{AppConfig, Color, RootStore, Theme};
use huepals::services::{ExportLanguage, ExportService, StateFile};
use shade_curve::{Channel, ColorFormat, Easing, Endpoint, Srgb};

#[derive(Parser)]
#[command(name = "huepals")]
#[command(about = "Huepals - curve-based color palettes")]
struct Cli {
    /// State file (overrides STATE_FILE and config.yaml)
    #[arg(long, global = true)]
    state: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List themes and their colors
    List,
    /// Extract embedded config and templates for customization
    Init {
        /// Overwrite existing files
        #[arg(long, short)]
        force: bool,

        /// Extract only config.yaml
        #[arg(long)]
        config: bool,
    },
    /// List easing presets
    Easings,
    /// Print the shades of a theme
    Shades {
        /// Theme id or name
        theme: String,

        /// Only this color (id or name)
        #[arg(long)]
        color: Option<String>,

        /// oklch, lch, hsl, hex or rgb
        #[arg(long)]
        format: Option<ColorFormat>,
    },
    /// Export a theme as CSS, Sass or CSV variables
    Export {
        /// Theme id or name
        theme: String,

        /// css, sass or csv
        #[arg(long, short)]
        language: Option<ExportLanguage>,

        /// oklch, lch, hsl, hex or rgb
        #[arg(long)]
        format: Option<ColorFormat>,
    },
    /// Render a theme as an SVG grid
    Svg {
        /// Theme id or name
        theme: String,

        /// oklch, lch, hsl, hex or rgb
        #[arg(long)]
        format: Option<ColorFormat>,

        /// Output file (stdout if omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Print as a data URI
        #[arg(long)]
        uri: bool,
    },
    /// Create a theme with one default color
    AddTheme {
        name: String,
    },
    /// Delete a theme
    RemoveTheme {
        theme: String,
    },
    /// Toggle a theme's favorite flag
    Favorite {
        theme: String,
    },
    /// Set a theme's shade count (3..=16)
    SetCount {
        theme: String,
        count: usize,
    },
    /// Append a default color to a theme
    AddColor {
        theme: String,

        #[arg(long)]
        name: Option<String>,
    },
    /// Copy a color under a new id
    DuplicateColor {
        theme: String,
        color: String,
    },
    /// Delete a color
    RemoveColor {
        theme: String,
        color: String,
    },
    /// Set the start or end value of one channel
    SetEndpoint {
        theme: String,
        color: String,
        /// lightness, saturation or hue
        channel: Channel,
        /// start or end
        which: Endpoint,
        #[arg(allow_hyphen_values = true)]
        value: f64,
    },
    /// Set the start or end of all channels from a hex color
    SetColor {
        theme: String,
        color: String,
        /// start or end
        which: Endpoint,
        /// e.g. "#3366cc"
        hex: String,
    },
    /// Apply an easing preset to one channel
    SetEasing {
        theme: String,
        color: String,
        channel: Channel,
        easing: Easing,
    },
    /// Link a channel to the other linked colors of the theme
    Link {
        theme: String,
        color: String,
        channel: Channel,

        /// Unlink instead
        #[arg(long)]
        off: bool,
    },
    /// Mark a shade as the preview background
    SetBackground {
        theme: String,
        color: String,
        index: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "huepals=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let loader = AssetLoader::from_env();
    if let Err(e) = loader.seed_if_configured() {
        tracing::warn!(error = %e, "Could not seed asset overrides");
    }
    let config = AppConfig::load_from_assets(&loader);
    let state = StateFile::new(cli.state.unwrap_or_else(|| config.resolve_state_file()));

    match cli.command {
        Some(Commands::Init { force, config }) => run_init_command(&loader, force, config),
        Some(Commands::Easings) => {
            for easing in Easing::ALL {
                println!("{:<16} {}", easing.key(), easing.name());
            }
            Ok(())
        }
        Some(Commands::List) | None => {
            let store = state.load_store()?;
            run_list_command(&store, &state);
            Ok(())
        }
        Some(Commands::Shades {
            theme,
            color,
            format,
        }) => {
            let store = state.load_store()?;
            let theme = store.find_theme(&theme)?;
            run_shades_command(theme, color.as_deref(), format.unwrap_or(config.export.format))
        }
        Some(Commands::Export {
            theme,
            language,
            format,
        }) => {
            let store = state.load_store()?;
            let theme = store.find_theme(&theme)?;
            let exporter = ExportService::new(&loader, config.svg)?;
            let text = exporter.export_text(
                theme,
                language.unwrap_or(config.export.language),
                format.unwrap_or(config.export.format),
            )?;
            println!("{text}");
            Ok(())
        }
        Some(Commands::Svg {
            theme,
            format,
            output,
            uri,
        }) => {
            let store = state.load_store()?;
            let theme = store.find_theme(&theme)?;
            let exporter = ExportService::new(&loader, config.svg)?;
            let format = format.unwrap_or(config.export.format);
            let svg = if uri {
                exporter.svg_uri(theme, format)?
            } else {
                exporter.svg_string(theme, format)?
            };
            match output {
                Some(path) => {
                    std::fs::write(&path, &svg)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Wrote {} ({} bytes)", path.display(), svg.len());
                }
                None => println!("{svg}"),
            }
            Ok(())
        }
        Some(command) => {
            let mut store = state.load_store()?;
            if run_edit_command(&mut store, &config, command)? {
                state.save_store(&store)?;
            }
            Ok(())
        }
    }
}

/// Apply a command that changes the store
///
/// Returns whether the store needs saving.
fn run_edit_command(
    store: &mut RootStore,
    config: &AppConfig,
    command: Commands,
) -> anyhow::Result<bool> {
    match command {
        Commands::AddTheme { name } => {
            let mut theme = Theme::new(name);
            theme.set_interpolation_count(config.interpolation_count())?;
            let id = store.add_theme(theme);
            println!("{id}");
        }
        Commands::RemoveTheme { theme } => {
            let id = store.find_theme(&theme)?.id.clone();
            let removed = store.remove_theme(&id)?;
            println!("Removed theme {}", removed.name);
        }
        Commands::Favorite { theme } => {
            let theme = store.find_theme_mut(&theme)?;
            theme.toggle_favorite();
            println!("{} favorite: {}", theme.name, theme.favorite);
        }
        Commands::SetCount { theme, count } => {
            store.find_theme_mut(&theme)?.set_interpolation_count(count)?;
        }
        Commands::AddColor { theme, name } => {
            let color = name.map(Color::new).unwrap_or_default();
            let id = store.find_theme_mut(&theme)?.add_color(color);
            println!("{id}");
        }
        Commands::DuplicateColor { theme, color } => {
            let theme = store.find_theme_mut(&theme)?;
            let id = theme.find_color(&color)?.id.clone();
            println!("{}", theme.duplicate_color(&id)?);
        }
        Commands::RemoveColor { theme, color } => {
            let theme = store.find_theme_mut(&theme)?;
            let id = theme.find_color(&color)?.id.clone();
            let removed = theme.remove_color(&id)?;
            println!("Removed color {}", removed.name);
        }
        Commands::SetEndpoint {
            theme,
            color,
            channel,
            which,
            value,
        } => {
            let theme = store.find_theme_mut(&theme)?;
            let id = theme.find_color(&color)?.id.clone();
            theme.set_endpoint(&id, channel, which, value)?;
        }
        Commands::SetColor {
            theme,
            color,
            which,
            hex,
        } => {
            let srgb: Srgb = hex
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid color {hex:?}: {e}"))?;
            let theme = store.find_theme_mut(&theme)?;
            let id = theme.find_color(&color)?.id.clone();
            theme.set_endpoint_color(&id, which, srgb)?;
        }
        Commands::SetEasing {
            theme,
            color,
            channel,
            easing,
        } => {
            let theme = store.find_theme_mut(&theme)?;
            let id = theme.find_color(&color)?.id.clone();
            theme.set_easing(&id, channel, easing)?;
        }
        Commands::Link {
            theme,
            color,
            channel,
            off,
        } => {
            let theme = store.find_theme_mut(&theme)?;
            let id = theme.find_color(&color)?.id.clone();
            theme.link_channel(&id, channel, !off)?;
        }
        Commands::SetBackground {
            theme,
            color,
            index,
        } => {
            let theme = store.find_theme_mut(&theme)?;
            let id = theme.find_color(&color)?.id.clone();
            theme.set_background_shade(&id, index)?;
        }
        Commands::List
        | Commands::Init { .. }
        | Commands::Easings
        | Commands::Shades { .. }
        | Commands::Export { .. }
        | Commands::Svg { .. } => return Ok(false),
    }
    Ok(true)
}

/// Write the built-in config and templates out for editing
fn run_init_command(loader: &AssetLoader, force: bool, config_only: bool) -> anyhow::Result<()> {
    let categories: &[AssetCategory] = if config_only {
        &[AssetCategory::Config]
    } else {
        &[AssetCategory::Config, AssetCategory::Templates]
    };
    let report = loader.init(categories, force)?;

    for path in &report.written {
        println!("wrote   {path}");
    }
    for path in &report.skipped {
        println!("exists  {path}");
    }
    if !report.skipped.is_empty() {
        println!("(use --force to overwrite existing files)");
    }
    Ok(())
}

fn run_list_command(store: &RootStore, state: &StateFile) {
    println!("State: {}\n", state.path().display());
    for theme in &store.themes {
        let star = if theme.favorite { " *" } else { "" };
        println!(
            "{}{star}  ({} shades)  {}",
            theme.name, theme.interpolation_count, theme.id
        );
        for color in &theme.colors {
            let links: Vec<&str> = Channel::ALL
                .into_iter()
                .filter(|c| color.is_linked(*c))
                .map(Channel::key)
                .collect();
            println!("  {:<20} linked: {:<30} {}", color.name, links.join(","), color.id);
        }
    }
}

fn run_shades_command(
    theme: &Theme,
    color: Option<&str>,
    format: ColorFormat,
) -> anyhow::Result<()> {
    let background = theme.background_shade();
    for (c, shades) in theme.interpolations()? {
        if let Some(selector) = color {
            if !c.matches(selector) {
                continue;
            }
        }
        println!("{}", c.name);
        for shade in shades {
            let [l, s, h] = shade.merged();
            let is_background = theme.background_color_id.as_deref() == Some(c.id.as_str())
                && background.is_some_and(|bg| bg.index == shade.index);
            let marker = if is_background { " (background)" } else { "" };
            let gamut = if shade.in_gamut() { "" } else { " (clipped)" };
            println!(
                "  {:>2}  {} {} {}{}  {}{gamut}{marker}",
                shade.index + 1,
                l.value,
                s.value,
                h.value,
                h.unit,
                shade.format(format),
            );
        }
    }
    Ok(())
}

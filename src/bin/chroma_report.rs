//! chroma-report - inspect colors, search named colors, and find
//! ideal-contrast colors from the command line.
//!
//! Configuration is read from `--config`, else from
//! `<config dir>/chroma-wcag/config.yaml` when that file exists.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use chroma_wcag::catalog::{self, ColorFilter};
use chroma_wcag::color::{Cmyk, Hsl, Rgb};
use chroma_wcag::config::Config;
use chroma_wcag::output::TextRenderer;
use chroma_wcag::report::ColorReport;
use chroma_wcag::solver::ideal_contrast_with;

const CONFIG_RELATIVE_PATH: &str = "chroma-wcag/config.yaml";

/// Color conversion and WCAG contrast reports
#[derive(Parser, Debug)]
#[command(name = "chroma-report")]
#[command(version)]
#[command(about = "Color conversion and WCAG contrast reports")]
#[command(long_about = None)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    /// Disable ANSI color swatches
    #[arg(long, global = true)]
    no_color: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show every representation, contrast and grayscale of one color
    Inspect(InspectArgs),

    /// List named colors matching the given filters
    Catalog(CatalogArgs),

    /// Find the color of a hue that contrasts equally with white and black
    Ideal(IdealArgs),
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct InspectArgs {
    /// Hex color (#RGB or #RRGGBB) or a catalog name
    color: Option<String>,

    /// RGB channels (0-255)
    #[arg(long, num_args = 3, value_names = ["R", "G", "B"])]
    #[arg(allow_negative_numbers = true)]
    rgb: Option<Vec<f64>>,

    /// Hue (degrees), saturation and lightness (percent)
    #[arg(long, num_args = 3, value_names = ["H", "S", "L"])]
    #[arg(allow_negative_numbers = true)]
    hsl: Option<Vec<f64>>,

    /// Cyan, magenta, yellow and key (percent)
    #[arg(long, num_args = 4, value_names = ["C", "M", "Y", "K"])]
    #[arg(allow_negative_numbers = true)]
    cmyk: Option<Vec<f64>>,
}

#[derive(Args, Debug)]
struct CatalogArgs {
    /// Substring of the color name
    #[arg(long, default_value = "")]
    name: String,

    /// Only web-safe (true) or non-web-safe (false) colors
    #[arg(long)]
    web_safe: Option<bool>,

    /// Only basic-16 (true) or non-basic (false) colors
    #[arg(long)]
    basic: Option<bool>,

    /// Only extended (true) or non-extended (false) colors
    #[arg(long)]
    extended: Option<bool>,

    /// Substring of the legacy palette index
    #[arg(long, default_value = "")]
    legacy_index: String,

    /// Substring of the legacy palette name
    #[arg(long, default_value = "")]
    legacy_name: String,

    /// Substring of the legacy palette alias
    #[arg(long, default_value = "")]
    legacy_alias: String,
}

#[derive(Args, Debug)]
struct IdealArgs {
    /// Hue in degrees
    #[arg(allow_negative_numbers = true)]
    hue: f64,

    /// Saturation in percent (overrides config)
    #[arg(long)]
    saturation: Option<f64>,

    /// Target relative luminance (overrides config)
    #[arg(long)]
    target: Option<f64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config = load_config(cli.config.as_deref())?;
    let ansi = config.display.ansi && !cli.no_color && std::io::stdout().is_terminal();
    let renderer = TextRenderer::new()
        .precision(config.display.precision)
        .ansi(ansi);

    let output = match &cli.command {
        Command::Inspect(args) => {
            let report = inspect(args)?;
            match cli.format {
                Format::Text => renderer.render_report(&report),
                Format::Json => serde_json::to_string_pretty(&report)?,
            }
        }
        Command::Catalog(args) => {
            let colors = catalog::filter(&catalog_filter(args));
            match cli.format {
                Format::Text => renderer.render_catalog(&colors),
                Format::Json => serde_json::to_string_pretty(&colors)?,
            }
        }
        Command::Ideal(args) => {
            let defaults = &config.ideal_contrast;
            let saturation = args.saturation.unwrap_or(defaults.saturation);
            let target = args.target.unwrap_or(defaults.target_luminance);
            let ideal = ideal_contrast_with(args.hue, &config.solver, saturation, target)?;
            match cli.format {
                Format::Text => renderer.render_ideal(&ideal),
                Format::Json => serde_json::to_string_pretty(&ideal)?,
            }
        }
    };

    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        let context = || format!("loading config from {}", path.display());
        return Config::load(path).with_context(context);
    }

    match dirs::config_dir().map(|dir| dir.join(CONFIG_RELATIVE_PATH)) {
        Some(path) if path.exists() => Ok(Config::load_or_default(path)),
        _ => Ok(Config::default()),
    }
}

fn inspect(args: &InspectArgs) -> Result<ColorReport> {
    if let Some(v) = &args.rgb {
        return Ok(ColorReport::from_rgb(Rgb::new(v[0], v[1], v[2]))?);
    }
    if let Some(v) = &args.hsl {
        return Ok(ColorReport::from_hsl(Hsl::new(v[0], v[1], v[2]))?);
    }
    if let Some(v) = &args.cmyk {
        return Ok(ColorReport::from_cmyk(Cmyk::new(v[0], v[1], v[2], v[3]))?);
    }

    let input = args.color.as_deref().unwrap_or_default();
    if let Some(named) = catalog::find(input) {
        return Ok(ColorReport::from_rgb(named.rgb())?);
    }
    let context = || format!("'{input}' is neither a hex color nor a color name");
    ColorReport::from_hex(input).with_context(context)
}

fn catalog_filter(args: &CatalogArgs) -> ColorFilter {
    let mut filter = ColorFilter::new()
        .name(&args.name)
        .legacy_index(&args.legacy_index)
        .legacy_name(&args.legacy_name)
        .legacy_alias(&args.legacy_alias);
    if let Some(v) = args.web_safe {
        filter = filter.web_safe(v);
    }
    if let Some(v) = args.basic {
        filter = filter.basic(v);
    }
    if let Some(v) = args.extended {
        filter = filter.extended(v);
    }
    filter
}

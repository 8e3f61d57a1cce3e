use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use color_match::{find_mixes, Catalog, ColorInput, ColorMatcher, MatchResult, Pigment, Rgb};
use huemix::catalogs;
use huemix::error::AppError;
use huemix::export::{self, PaletteFormat, Swatch};
use huemix::image::{Region, RgbaImage};
use huemix::models::{CatalogFile, PigmentFile};

#[derive(Parser)]
#[command(name = "huemix")]
#[command(about = "Huemix - color matching and mixing toolkit for art reference")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank catalog colors closest to a target color
    Match {
        /// Target color as #RRGGBB hex
        color: String,

        /// Number of matches to show
        #[arg(short, long, default_value_t = 8)]
        count: usize,

        /// Restrict matches to one brand
        #[arg(short, long)]
        brand: Option<String>,

        /// Additional catalog file to search (YAML or JSON)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Suggest pigment mixes that approximate a target color
    Mix {
        /// Target color as #RRGGBB hex
        color: String,

        /// Built-in pigment set: "oil" or "pencil"
        #[arg(short, long, default_value = "oil")]
        set: String,

        /// Pigment file to mix from instead (YAML or JSON)
        #[arg(long)]
        pigments: Option<PathBuf>,
    },
    /// Extract dominant colors from a PNG image
    Extract {
        /// Input PNG file
        image: PathBuf,

        /// Maximum number of colors to report
        #[arg(short, long, default_value_t = color_match::DEFAULT_MAX_COLORS)]
        max_colors: usize,

        /// Crop region as X,Y,WIDTH,HEIGHT before sampling
        #[arg(short, long)]
        region: Option<Region>,

        /// Also rank catalog matches for the extracted palette
        #[arg(long)]
        matches: bool,
    },
    /// Export a palette file (json, csv, gpl or aco)
    Export {
        /// Output format: json, csv, gpl or aco
        format: String,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Palette name written into formats that carry one
        #[arg(short, long, default_value = "huemix palette")]
        name: String,

        /// Palette color as #RRGGBB hex (repeat for multiple colors)
        #[arg(short, long = "color")]
        colors: Vec<String>,

        /// Extract the palette from a PNG instead of --color flags
        #[arg(long)]
        from_image: Option<PathBuf>,
    },
    /// List built-in catalogs and pigment sets
    Catalogs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Match {
            color,
            count,
            brand,
            catalog,
        }) => run_match_command(&color, count, brand.as_deref(), catalog.as_deref()),
        Some(Commands::Mix {
            color,
            set,
            pigments,
        }) => run_mix_command(&color, &set, pigments.as_deref()),
        Some(Commands::Extract {
            image,
            max_colors,
            region,
            matches,
        }) => run_extract_command(&image, max_colors, region, matches),
        Some(Commands::Export {
            format,
            output,
            name,
            colors,
            from_image,
        }) => run_export_command(&format, &output, &name, &colors, from_image.as_deref()),
        Some(Commands::Catalogs) => run_catalogs_command(),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for the CLI: env filter wins, otherwise huemix-only
/// output at info (or debug with --verbose).
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "huemix=debug" } else { "huemix=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Build the search catalog: built-ins (optionally brand-filtered) plus an
/// optional user catalog file.
fn build_catalog(brand: Option<&str>, catalog_file: Option<&Path>) -> Result<Catalog, AppError> {
    let mut entries = catalogs::builtin_entries(brand)?;

    if let Some(path) = catalog_file {
        let file = CatalogFile::load(path)?;
        let keep = match brand {
            Some(filter) => file.brand.eq_ignore_ascii_case(filter),
            None => true,
        };
        if keep {
            entries.extend(file.into_entries()?);
        }
    }

    Ok(Catalog::new(entries)?)
}

fn run_match_command(
    color: &str,
    count: usize,
    brand: Option<&str>,
    catalog_file: Option<&Path>,
) -> anyhow::Result<()> {
    let catalog = build_catalog(brand, catalog_file)?;
    let matcher = ColorMatcher::new(catalog).match_limit(count);
    let results = matcher.matches(&ColorInput::hex(color))?;

    let target: Rgb = color.parse().map_err(AppError::from)?;
    println!("Closest matches for {target}:");
    print_matches(&results);
    Ok(())
}

fn run_mix_command(color: &str, set: &str, pigment_file: Option<&Path>) -> anyhow::Result<()> {
    let target: Rgb = color.parse().map_err(AppError::from)?;

    let pigments: Vec<Pigment> = match pigment_file {
        Some(path) => PigmentFile::load(path)?.into_pigments()?,
        None => catalogs::pigment_set(set)?,
    };

    let mixes = find_mixes(target, &pigments);
    if mixes.is_empty() {
        println!("No mix of the selected pigments lands close enough to {target}.");
        return Ok(());
    }

    println!("Mix suggestions for {target}:");
    for (i, candidate) in mixes.iter().enumerate() {
        let recipe = candidate
            .components
            .iter()
            .map(|c| format!("{} part{} {}", c.parts, if c.parts == 1 { "" } else { "s" }, c.name))
            .collect::<Vec<_>>()
            .join(" + ");
        println!(
            "{:>2}. {recipe} -> {}  ({:.1}%)",
            i + 1,
            candidate.mixed,
            candidate.accuracy
        );
    }
    Ok(())
}

fn run_extract_command(
    image_path: &Path,
    max_colors: usize,
    region: Option<Region>,
    with_matches: bool,
) -> anyhow::Result<()> {
    let colors = extract_palette(image_path, region, max_colors)?;
    if colors.is_empty() {
        println!("No visible pixels to sample (image fully transparent?).");
        return Ok(());
    }

    println!("Dominant colors in {}:", image_path.display());
    for color in &colors {
        println!("  {color}");
    }

    if with_matches {
        let matcher = ColorMatcher::new(catalogs::builtin_catalog()?);
        let inputs: Vec<ColorInput> = colors
            .iter()
            .map(|c| ColorInput::hex(c.to_hex()))
            .collect();
        let results = matcher.palette_matches(&inputs)?;

        println!();
        println!("Catalog matches for the palette:");
        print_matches(&results);
    }
    Ok(())
}

fn run_export_command(
    format: &str,
    output: &Path,
    name: &str,
    colors: &[String],
    from_image: Option<&Path>,
) -> anyhow::Result<()> {
    let format: PaletteFormat = format.parse()?;

    let swatches: Vec<Swatch> = match from_image {
        Some(path) => extract_palette(path, None, color_match::DEFAULT_MAX_COLORS)?
            .iter()
            .enumerate()
            .map(|(i, &color)| Swatch::new(format!("color {}", i + 1), color))
            .collect(),
        None => colors
            .iter()
            .map(|hex| {
                let color: Rgb = hex.parse().map_err(AppError::from)?;
                Ok(Swatch::new(color.to_hex(), color))
            })
            .collect::<Result<_, AppError>>()?,
    };

    let mut writer = BufWriter::new(File::create(output).map_err(AppError::from)?);
    export::write_palette(&mut writer, format, name, &swatches)?;

    tracing::info!(
        path = %output.display(),
        format = format.extension(),
        swatches = swatches.len(),
        "Wrote palette"
    );
    Ok(())
}

fn run_catalogs_command() -> anyhow::Result<()> {
    println!("Built-in catalogs:");
    for &brand in catalogs::brands() {
        let entries = catalogs::builtin_entries(Some(brand))?;
        println!("  {brand:<14} {} colors", entries.len());
    }

    println!();
    println!("Pigment sets:");
    for &set in catalogs::pigment_set_names() {
        let pigments = catalogs::pigment_set(set)?;
        let primaries = pigments.iter().filter(|p| p.primary).count();
        println!(
            "  {set:<14} {} pigments ({primaries} primary)",
            pigments.len()
        );
    }
    Ok(())
}

fn run_status_command() {
    println!("huemix - color matching and mixing toolkit for art reference");
    println!();
    println!("Usage:");
    println!("  huemix match \"#2D6BB4\"             rank catalog colors");
    println!("  huemix mix \"#808080\" --set oil     suggest pigment mixes");
    println!("  huemix extract photo.png --matches   dominant colors + matches");
    println!("  huemix export gpl -o out.gpl --color \"#2D6BB4\" --color \"#B8283C\"");
    println!("  huemix catalogs                      list built-in data");
    println!();
    println!("Run `huemix --help` for all options.");
}

/// Shared extract pipeline: decode, optional crop, sample.
fn extract_palette(
    image_path: &Path,
    region: Option<Region>,
    max_colors: usize,
) -> Result<Vec<Rgb>, AppError> {
    let image = RgbaImage::load_png(image_path)?;
    let image = match region {
        Some(region) => image.crop(region)?,
        None => image,
    };
    Ok(color_match::extract_dominant_colors(&image.pixels, max_colors))
}

fn print_matches(results: &[MatchResult<'_>]) {
    for (i, m) in results.iter().enumerate() {
        println!(
            "{:>2}. {:<13} {:<22} {:<6} {}  {:>5.1}%  (dE {:.2})",
            i + 1,
            m.entry.brand,
            m.entry.name,
            m.entry.code,
            m.entry.color,
            m.accuracy,
            m.distance
        );
    }
}

use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;

use ishihara_map::config::{FileConfig, RenderConfig};
use ishihara_map::geometry::Projection;
use ishihara_map::input::load_shape;
use ishihara_map::raster::{ExportFormat, write_image};
use ishihara_map::render;

/// Render GeoJSON outlines as Ishihara-style dot plates
///
/// Examples:
///   # Render a country outline with default settings
///   ishihara-map -i georgia.geojson -o georgia_plate
///
///   # Smaller plate with a darker red and a different background
///   ishihara-map -i abasha_line.geojson -s 512 -r 230 --dot-color 200,0,0 --seed 7
///
///   # Input that is already in a planar coordinate system
///   ishihara-map -i shapes.geojson --projection planar
///
///   # Use a config file
///   ishihara-map --config my-plate.toml
#[derive(Parser, Debug)]
#[command(name = "ishihara-map")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches ishihara-map.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// GeoJSON input (Geometry, Feature or FeatureCollection)
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,

    /// Output image path; the format's extension is added when missing
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output image format
    #[arg(short = 'f', long)]
    format: Option<ExportFormat>,

    /// How input coordinates are projected before fitting
    #[arg(long)]
    projection: Option<Projection>,

    /// Canvas width and height in pixels
    #[arg(short = 's', long)]
    size: Option<u32>,

    /// Radius of the dotted background circle in pixels
    #[arg(short = 'r', long)]
    circle_radius: Option<u32>,

    /// Radius of every dot in pixels
    #[arg(long)]
    dot_radius: Option<u32>,

    /// Spacing of the background dot grid in pixels
    #[arg(long)]
    dot_spacing: Option<u32>,

    /// How far the geometry spans relative to the circle radius (typically 1.2-2.0)
    #[arg(long)]
    padding: Option<f64>,

    /// Geometry dot color as R,G,B
    #[arg(long, value_parser = parse_rgb)]
    dot_color: Option<[u8; 3]>,

    /// Background channel range as LOW,HIGH (high exclusive)
    #[arg(long, value_parser = parse_range)]
    background_range: Option<[u8; 2]>,

    /// Seed for the background colors
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config = match args.config {
        Some(ref config_path) => Some(FileConfig::from_path(config_path)?),
        None => FileConfig::load(),
    };

    let verbose = args.verbose || file_config.as_ref().map(|c| c.verbose).unwrap_or(false);
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if verbose { "debug" } else { "info" }),
    )
    .init();

    let input = args
        .input
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.input.clone()));
    let Some(input) = input else {
        bail!("Must provide an input file with --input/-i or in the config file");
    };
    let format = args
        .format
        .or_else(|| file_config.as_ref().and_then(|c| c.format))
        .unwrap_or_default();
    let projection = args
        .projection
        .or_else(|| file_config.as_ref().and_then(|c| c.projection))
        .unwrap_or_default();
    let output = args
        .output
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.output.clone()))
        .unwrap_or_else(|| default_output(&input));

    let config = merge_render_config(
        &args,
        file_config
            .as_ref()
            .and_then(|c| c.render.clone())
            .unwrap_or_default(),
    );

    println!("ishihara-map - Dot Plate Renderer");
    println!("=================================");
    println!();

    if verbose {
        println!("Configuration:");
        println!("  Input: {}", input.display());
        println!("  Projection: {:?}", projection);
        println!("  Canvas: {}px", config.canvas_size);
        println!("  Circle radius: {}px", config.circle_radius);
        println!(
            "  Dots: radius {}px, spacing {}px",
            config.dot_radius, config.dot_spacing
        );
        println!("  Padding factor: {}", config.padding_factor);
        println!("  Dot color: {:?}", config.geometry_dot_color);
        println!("  Background range: {:?}", config.background_color_range);
        println!("  Seed: {}", config.rng_seed);
        println!("  Output: {} ({:?})", output.display(), format);
        println!();
    }

    let spinner = create_spinner("Loading geometry...");
    let start = Instant::now();
    let shape = load_shape(&input).context("Failed to load geometry")?;
    let shape = projection.apply(&shape);
    spinner.finish_with_message(format!(
        "Loaded {} with {} vertices [{:.1}s]",
        shape.kind(),
        shape.vertex_count(),
        start.elapsed().as_secs_f32()
    ));

    let spinner = create_spinner("Rendering plate...");
    let start = Instant::now();
    let rendered = render(&shape, &config).context("Failed to render plate")?;
    spinner.finish_with_message(format!(
        "Stamped {} background and {} geometry dots [{:.1}s]",
        rendered.stats.background_dots,
        rendered.stats.geometry_dots,
        start.elapsed().as_secs_f32()
    ));
    if verbose {
        println!(
            "  Bounds: {:.1} x {:.1} -> scale {:.6} px/unit",
            rendered.stats.bounds.width(),
            rendered.stats.bounds.height(),
            rendered.stats.scale
        );
    }

    let spinner = create_spinner("Writing image...");
    let start = Instant::now();
    let written = write_image(&rendered.canvas, &output, format)?;
    spinner.finish_with_message(format!(
        "Wrote {} [{:.1}s]",
        written.display(),
        start.elapsed().as_secs_f32()
    ));

    println!();
    println!(
        "Done! Total time: {:.1}s",
        total_start.elapsed().as_secs_f32()
    );
    println!();
    println!("Output: {}", written.display());

    Ok(())
}

/// Command-line values win over the file's `[render]` table
fn merge_render_config(args: &Args, file: RenderConfig) -> RenderConfig {
    RenderConfig {
        canvas_size: args.size.unwrap_or(file.canvas_size),
        circle_radius: args.circle_radius.unwrap_or(file.circle_radius),
        dot_radius: args.dot_radius.unwrap_or(file.dot_radius),
        dot_spacing: args.dot_spacing.unwrap_or(file.dot_spacing),
        padding_factor: args.padding.unwrap_or(file.padding_factor),
        background_color_range: args.background_range.unwrap_or(file.background_color_range),
        geometry_dot_color: args.dot_color.unwrap_or(file.geometry_dot_color),
        rng_seed: args.seed.unwrap_or(file.rng_seed),
    }
}

fn default_output(input: &std::path::Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "plate".to_string());
    PathBuf::from(format!("{}_ishihara", stem))
}

fn parse_channels<const N: usize>(s: &str) -> Result<[u8; N], String> {
    let values = s
        .split(',')
        .map(|v| v.trim().parse::<u8>().map_err(|e| format!("{:?}: {}", v, e)))
        .collect::<Result<Vec<u8>, String>>()?;
    values
        .try_into()
        .map_err(|v: Vec<u8>| format!("expected {} comma-separated values, got {}", N, v.len()))
}

fn parse_rgb(s: &str) -> Result<[u8; 3], String> {
    parse_channels(s)
}

fn parse_range(s: &str) -> Result<[u8; 2], String> {
    parse_channels(s)
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb() {
        assert_eq!(parse_rgb("200,0,0"), Ok([200, 0, 0]));
        assert_eq!(parse_rgb(" 1, 2 ,3"), Ok([1, 2, 3]));
        assert!(parse_rgb("1,2").is_err());
        assert!(parse_rgb("1,2,300").is_err());
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_range("80,220"), Ok([80, 220]));
        assert!(parse_range("80").is_err());
    }

    #[test]
    fn test_cli_overrides_file_values() {
        let args = Args::parse_from(["ishihara-map", "-i", "in.geojson", "-s", "512", "--seed", "9"]);
        let file = RenderConfig {
            canvas_size: 2048,
            circle_radius: 900,
            ..Default::default()
        };
        let merged = merge_render_config(&args, file);

        assert_eq!(merged.canvas_size, 512);
        assert_eq!(merged.circle_radius, 900);
        assert_eq!(merged.rng_seed, 9);
    }

    #[test]
    fn test_default_output_from_input_stem() {
        assert_eq!(
            default_output(std::path::Path::new("data/georgia.geojson")),
            PathBuf::from("georgia_ishihara")
        );
    }
}

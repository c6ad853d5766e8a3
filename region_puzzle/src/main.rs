use clap::Parser;
use log::warn;
use region_puzzle::{create_region_puzzle, GeoJsonBoundaries, PuzzleConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "region-puzzle",
    about = "Extruded jigsaw puzzle pieces from adjacent region boundaries"
)]
struct Cli {
    /// GeoJSON FeatureCollection holding the region boundaries
    #[arg(short, long)]
    boundaries: PathBuf,

    /// Directory receiving one STL file per region
    #[arg(short, long, default_value = "output")]
    output: PathBuf,

    /// Region to include, repeatable (all features if omitted)
    #[arg(short, long)]
    region: Vec<String>,

    /// JSON configuration file, flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Largest gap between border ranges that still merges them
    #[arg(long)]
    snap_distance: Option<f64>,

    /// Simplification tolerance along shared borders
    #[arg(long)]
    border_tolerance: Option<f64>,

    /// Simplification tolerance along outside coast lines
    #[arg(long)]
    outside_tolerance: Option<f64>,

    /// Height of the extruded pieces
    #[arg(long)]
    extrude_height: Option<f64>,

    /// Scale applied to projected coordinates
    #[arg(long)]
    projection_scale: Option<f64>,

    /// Write a debug SVG of all pieces to this path
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Feature property holding the region name
    #[arg(long)]
    name_property: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => PuzzleConfig::from_json_file(path)?,
        None => PuzzleConfig::default(),
    };
    if let Some(v) = cli.snap_distance {
        config.simplify.snap_distance = v;
    }
    if let Some(v) = cli.border_tolerance {
        config.simplify.border_tolerance = v;
    }
    if let Some(v) = cli.outside_tolerance {
        config.simplify.outside_tolerance = v;
    }
    if let Some(v) = cli.extrude_height {
        config.extrude_height = v;
    }
    if let Some(v) = cli.projection_scale {
        config.projection_scale = v;
    }
    if cli.svg.is_some() {
        config.svg_path = cli.svg;
    }
    if let Some(v) = cli.name_property {
        config.name_property = v;
    }

    let source = GeoJsonBoundaries::from_path(&cli.boundaries, &config.name_property)?;
    if source.is_empty() {
        warn!(
            "no features named by '{}' in {}",
            config.name_property,
            cli.boundaries.display()
        );
    }

    let summary = create_region_puzzle(&source, &cli.region, &cli.output, &config)?;
    eprintln!(
        "Wrote {} pieces to {} ({} border warnings, {} failed)",
        summary.stl_files.len(),
        cli.output.display(),
        summary.report.diagnostics.len(),
        summary.failed.len()
    );
    Ok(())
}

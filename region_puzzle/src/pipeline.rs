//! End to end puzzle generation: load, simplify, project, export.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{info, warn};
use rayon::prelude::*;
use region_borders::{
    polygon::{Polygon, RingSource},
    polygon_set::{PolygonSet, SimplifyReport},
};

use crate::{
    boundary::{load_regions, BoundarySource},
    config::PuzzleConfig,
    error::{PuzzleError, Result},
    projection::{mercator_polygon, normalize_polygons},
    stl_export::{unique_stl_file_names, write_stl_file},
    svg_export::export_svg,
};

/// Outcome of [create_region_puzzle].
#[derive(Debug, Clone)]
pub struct PuzzleSummary {
    /// Names of the regions that were loaded and exported, in processing order.
    pub regions: Vec<String>,
    pub report: SimplifyReport,
    /// One mesh file per region, same order as `regions`.
    pub stl_files: Vec<PathBuf>,
    pub svg_file: Option<PathBuf>,
    /// Regions loaded and simplified whose mesh could not be written, with the error message.
    pub failed: Vec<(String, String)>,
}

/// Build puzzle pieces for the regions `names` of `source` (every region of the source if `names`
/// is empty) and write them to `output_dir`.
///
/// Regions that fail to load are logged and left out. The remaining outlines are simplified
/// together so that touching pieces keep identical shared borders, projected, optionally
/// rendered to a debug SVG, and finally extruded into one STL file per region in parallel. Regions
/// whose names map to the same file name get numbered file names. A region failing to export is
/// logged and listed in [PuzzleSummary::failed], the other regions are still exported.
pub fn create_region_puzzle<S>(
    source: &S,
    names: &[String],
    output_dir: impl AsRef<Path>,
    config: &PuzzleConfig,
) -> Result<PuzzleSummary>
where
    S: BoundarySource + ?Sized,
{
    config.validate()?;
    let output_dir = output_dir.as_ref();

    let names = if names.is_empty() {
        source.region_names()
    } else {
        names.to_vec()
    };

    let polygons = load_regions(source, &names);
    if polygons.is_empty() {
        return Err(PuzzleError::EmptyPolygonSet);
    }
    info!("loaded {} of {} regions", polygons.len(), names.len());

    let mut set: PolygonSet = polygons.into_iter().collect();
    let report = set.simplify(&config.simplify);
    info!(
        "simplified {} points down to {}",
        report.total_before(),
        report.total_after()
    );

    let projected: Vec<Polygon> = set
        .into_polygons()
        .iter()
        .map(|p| mercator_polygon(p, config.projection_scale))
        .collect();

    fs::create_dir_all(output_dir)?;
    let svg_file = match &config.svg_path {
        Some(path) => {
            export_svg(&normalize_polygons(&projected)?, path)?;
            Some(path.clone())
        }
        None => None,
    };

    let file_names: Vec<String> = unique_stl_file_names(
        &projected.iter().map(|p| p.name()).collect::<Vec<_>>(),
    );
    let results: Vec<(PathBuf, Result<()>)> = projected
        .par_iter()
        .zip(file_names.par_iter())
        .map(|(polygon, file_name)| {
            let path = output_dir.join(file_name);
            let result = write_stl_file(polygon, &path, config.extrude_height);
            (path, result)
        })
        .collect();

    let mut regions = Vec::with_capacity(projected.len());
    let mut stl_files = Vec::with_capacity(projected.len());
    let mut failed = Vec::new();
    for (polygon, (path, result)) in projected.iter().zip(results) {
        match result {
            Ok(()) => {
                regions.push(polygon.name().to_string());
                stl_files.push(path);
            }
            Err(err) => {
                warn!("failed to export region '{}': {err}", polygon.name());
                failed.push((polygon.name().to_string(), err.to_string()));
            }
        }
    }

    info!(
        "exported {} of {} regions ({} points) to {}",
        stl_files.len(),
        projected.len(),
        projected.iter().map(|p| p.vertex_count()).sum::<usize>(),
        output_dir.display()
    );

    Ok(PuzzleSummary {
        regions,
        report,
        stl_files,
        svg_file,
        failed,
    })
}

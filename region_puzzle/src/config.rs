use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use region_borders::simplify::SimplifyOptions;
use serde::Deserialize;

use crate::error::{PuzzleError, Result};

/// All puzzle generation parameters in one struct, loadable from a JSON file where every field is
/// optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    /// Border matching and simplification tolerances, in boundary source units (degrees for
    /// GeoJSON).
    pub simplify: SimplifyOptions<f64>,
    /// Height of the extruded puzzle pieces.
    pub extrude_height: f64,
    /// Factor applied to projected coordinates before export.
    pub projection_scale: f64,
    /// Debug SVG of all pieces, not written if `None`.
    pub svg_path: Option<PathBuf>,
    /// GeoJSON feature property holding the region name.
    pub name_property: String,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            simplify: SimplifyOptions::new(),
            extrude_height: 2.0,
            projection_scale: 20.0,
            svg_path: None,
            name_property: "name".to_string(),
        }
    }
}

impl PuzzleConfig {
    /// Load a configuration from a JSON file, missing fields take their default value.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let config: PuzzleConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every value is in its valid range.
    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("snap_distance", self.simplify.snap_distance),
            ("border_tolerance", self.simplify.border_tolerance),
            ("outside_tolerance", self.simplify.outside_tolerance),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(PuzzleError::InvalidConfig(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        let positive = [
            ("extrude_height", self.extrude_height),
            ("projection_scale", self.projection_scale),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(PuzzleError::InvalidConfig(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }

        if self.name_property.is_empty() {
            return Err(PuzzleError::InvalidConfig(
                "name_property must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

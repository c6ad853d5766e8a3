//! Region boundary sources.

use std::{collections::HashMap, fs, path::Path};

use log::{debug, warn};
use region_borders::{core::math::Vector2, polygon::Polygon};
use serde::Deserialize;

use crate::error::{PuzzleError, Result};

/// Source of region outlines by name.
pub trait BoundarySource {
    /// Outer boundary of the region named `name`.
    fn region_polygon(&self, name: &str) -> Result<Polygon>;

    /// Names of every region this source can provide, in source order.
    fn region_names(&self) -> Vec<String>;
}

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    properties: Option<serde_json::Map<String, serde_json::Value>>,
    geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    Polygon {
        coordinates: Vec<Vec<Vec<f64>>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Vec<f64>>>>,
    },
    #[serde(other)]
    Other,
}

/// Region boundaries read from a GeoJSON `FeatureCollection`.
///
/// Each feature is named by a string property. A `Polygon` geometry contributes its outer ring, a
/// `MultiPolygon` contributes the outer ring with the most points, islands and holes are ignored.
#[derive(Debug, Clone, Default)]
pub struct GeoJsonBoundaries {
    names: Vec<String>,
    rings: HashMap<String, Vec<Vec<f64>>>,
}

impl GeoJsonBoundaries {
    /// Read a GeoJSON file, naming features by the `name_property` property.
    pub fn from_path(path: impl AsRef<Path>, name_property: &str) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_str(&content, name_property)
    }

    /// Parse GeoJSON text, naming features by the `name_property` property.
    pub fn from_str(content: &str, name_property: &str) -> Result<Self> {
        let collection: FeatureCollection = serde_json::from_str(content)?;
        let mut result = Self::default();

        for feature in collection.features {
            let name = feature
                .properties
                .as_ref()
                .and_then(|props| props.get(name_property))
                .and_then(|value| value.as_str());
            let Some(name) = name else {
                debug!("skipping feature without a '{name_property}' property");
                continue;
            };

            let ring = match feature.geometry {
                Some(Geometry::Polygon {
                    coordinates: mut rings,
                }) if !rings.is_empty() => rings.swap_remove(0),
                Some(Geometry::MultiPolygon {
                    coordinates: polygons,
                }) => {
                    match polygons
                        .into_iter()
                        .filter_map(|mut rings| (!rings.is_empty()).then(|| rings.swap_remove(0)))
                        .max_by_key(|ring| ring.len())
                    {
                        Some(ring) => ring,
                        None => continue,
                    }
                }
                _ => {
                    debug!("skipping feature '{name}' without polygon geometry");
                    continue;
                }
            };

            if result.rings.insert(name.to_string(), ring).is_some() {
                warn!("duplicate region '{name}', keeping the last feature");
            } else {
                result.names.push(name.to_string());
            }
        }

        Ok(result)
    }

    /// Number of named regions read.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl BoundarySource for GeoJsonBoundaries {
    fn region_polygon(&self, name: &str) -> Result<Polygon> {
        let ring = self
            .rings
            .get(name)
            .ok_or_else(|| PuzzleError::MissingRegion {
                name: name.to_string(),
            })?;

        let mut points = Vec::with_capacity(ring.len());
        for (i, coord) in ring.iter().enumerate() {
            match coord.as_slice() {
                [x, y, ..] => points.push(Vector2::new(*x, *y)),
                _ => {
                    return Err(PuzzleError::InvalidGeometry {
                        name: name.to_string(),
                        details: format!("position {i} has {} coordinates", coord.len()),
                    })
                }
            }
        }

        // closing position repeats the first
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }

        if points.len() < 3 {
            return Err(PuzzleError::InvalidGeometry {
                name: name.to_string(),
                details: format!("outer ring has {} distinct positions", points.len()),
            });
        }

        Ok(Polygon::new(name, points))
    }

    fn region_names(&self) -> Vec<String> {
        self.names.clone()
    }
}

/// Load every named region from `source`, failures are logged and the region omitted.
pub fn load_regions<S, N>(source: &S, names: &[N]) -> Vec<Polygon>
where
    S: BoundarySource + ?Sized,
    N: AsRef<str>,
{
    names
        .iter()
        .filter_map(|name| match source.region_polygon(name.as_ref()) {
            Ok(polygon) => Some(polygon),
            Err(err) => {
                warn!("omitting region '{}': {err}", name.as_ref());
                None
            }
        })
        .collect()
}

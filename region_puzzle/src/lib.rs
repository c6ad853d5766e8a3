//! Region puzzle generation.
//!
//! Region outlines (counties, states, ...) are loaded from a [BoundarySource], simplified with
//! [region_borders] so that neighboring pieces keep identical shared borders, projected with
//! spherical Web-Mercator and written out as one extruded STL mesh per region plus an optional
//! debug SVG of all pieces.
//!
//! ```no_run
//! use region_puzzle::{create_region_puzzle, GeoJsonBoundaries, PuzzleConfig};
//!
//! let source = GeoJsonBoundaries::from_path("counties.geojson", "name").unwrap();
//! let summary = create_region_puzzle(&source, &[], "output", &PuzzleConfig::default()).unwrap();
//! println!("wrote {} pieces", summary.stl_files.len());
//! ```

pub mod boundary;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod projection;
pub mod stl_export;
pub mod svg_export;

pub use boundary::{load_regions, BoundarySource, GeoJsonBoundaries};
pub use config::PuzzleConfig;
pub use error::{PuzzleError, Result};
pub use pipeline::{create_region_puzzle, PuzzleSummary};

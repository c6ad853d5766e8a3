//! Error types for region puzzle generation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`PuzzleError`].
pub type Result<T> = std::result::Result<T, PuzzleError>;

/// Errors that can occur while building a region puzzle.
#[derive(Error, Debug)]
pub enum PuzzleError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Boundary or configuration JSON could not be parsed.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The boundary source has no region with the requested name.
    #[error("no boundary found for region '{name}'")]
    MissingRegion {
        /// The requested region name.
        name: String,
    },

    /// A region boundary cannot form a polygon.
    #[error("region '{name}' has invalid geometry: {details}")]
    InvalidGeometry {
        /// The region name.
        name: String,
        /// Description of the problem.
        details: String,
    },

    /// An operation needing at least one polygon got none.
    #[error("no region polygons to process")]
    EmptyPolygonSet,

    /// A polygon outline could not be triangulated for its mesh caps.
    #[error("failed to triangulate '{name}': {details}")]
    Triangulation {
        /// The region name.
        name: String,
        /// Triangulation failure details.
        details: String,
    },

    /// Error writing an STL file.
    #[error("failed to write STL {path}: {source}")]
    StlWrite {
        /// The file path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// Error writing an SVG file.
    #[error("failed to write SVG {path}: {source}")]
    Svg {
        /// The file path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// A configuration value is out of its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

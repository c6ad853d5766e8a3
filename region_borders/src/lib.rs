//! Border-aware simplification of adjacent 2D polygons.
//!
//! Polygons that touch share exact coordinate values along their common boundary. This crate finds
//! those shared runs ([borders]), merges runs split by small gaps, and reduces point counts with
//! Douglas-Peucker ([simplify]) using one tolerance on shared arcs and another on the remaining
//! arcs, so neighbors stay consistent with each other after simplification ([polygon_set]).
//!
//! # Examples
//!
//! ```
//! use region_borders::{polygon, polygon::RingSource, polygon_set::PolygonSet};
//! use region_borders::simplify::SimplifyOptions;
//!
//! let mut set = PolygonSet::new();
//! let upper = set.insert(polygon!["upper"; (0.0, 0.0), (0.5, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
//! let lower = set.insert(polygon!["lower"; (0.0, 0.0), (0.0, -1.0), (1.0, -1.0), (1.0, 0.0), (0.5, 0.0)]);
//!
//! let report = set.simplify(&SimplifyOptions::new());
//! assert_eq!(report.touching_pairs(), 1);
//! // the collinear shared point is removed from both sides
//! assert_eq!(set[upper].vertex_count(), 4);
//! assert_eq!(set[lower].vertex_count(), 4);
//! ```
#[macro_use]
mod macros;

pub mod borders;
pub mod core;
pub mod polygon;
pub mod polygon_set;
pub mod simplify;

pub use static_aabb2d_index::AABB;

#![allow(dead_code)]
mod debug;
mod ring_properties;

pub use debug::*;
pub use ring_properties::*;

use region_borders::{core::math::Vector2, polygon::Polygon};

/// Returns true if `subset` is a subsequence of the ring `original` read circularly from some
/// starting index.
pub fn is_ring_subsequence(original: &[Vector2<f64>], subset: &[Vector2<f64>]) -> bool {
    if subset.is_empty() {
        return true;
    }

    let n = original.len();
    (0..n).any(|rotation| {
        let mut remaining = subset.iter().peekable();
        for i in 0..n {
            if let Some(&&p) = remaining.peek() {
                if original[(rotation + i) % n] == p {
                    remaining.next();
                }
            }
        }
        remaining.peek().is_none()
    })
}

/// Unit square sitting on top of the x axis.
pub fn upper_square() -> Polygon {
    Polygon::from_coords("upper", [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
}

/// Unit square hanging below the x axis.
pub fn lower_square() -> Polygon {
    Polygon::from_coords("lower", [(0.0, 0.0), (1.0, 0.0), (1.0, -1.0), (0.0, -1.0)])
}

/// Polygon with a run of collinear points along its top edge.
pub fn complex_polygon() -> Polygon {
    Polygon::from_coords(
        "complex",
        [
            (0.0, 0.0),
            (0.2, 0.0),
            (0.3, 0.0),
            (0.4, 0.0),
            (0.5, 0.0),
            (1.0, 0.0),
            (1.0, -1.0),
            (0.0, -1.0),
        ],
    )
}

/// Grid of `columns` x `rows` unit cells, each cell edge subdivided into `edge_points` segments so
/// neighboring cells share runs of collinear points.
pub fn cell_grid(columns: usize, rows: usize, edge_points: usize) -> Vec<Polygon> {
    let n = edge_points;
    let coord = |cell: usize, i: usize| (cell * n + i) as f64 / n as f64;

    let mut result = Vec::with_capacity(columns * rows);
    for row in 0..rows {
        for col in 0..columns {
            let mut points = Vec::with_capacity(4 * n);
            points.extend((0..n).map(|i| Vector2::new(coord(col, i), coord(row, 0))));
            points.extend((0..n).map(|i| Vector2::new(coord(col + 1, 0), coord(row, i))));
            points.extend((0..n).map(|i| Vector2::new(coord(col, n - i), coord(row + 1, 0))));
            points.extend((0..n).map(|i| Vector2::new(coord(col, 0), coord(row, n - i))));
            result.push(Polygon::new(format!("cell_{row}_{col}"), points));
        }
    }

    result
}

use log::{debug, warn};

use super::douglas_peucker_mask;
use crate::{
    borders::BorderRange,
    core::{math::Vector2, traits::Real},
    polygon::{ring_slice_indexes, Polygon, RingSource},
};

/// Result of simplifying targeted arcs of a ring, see [simplify_ring].
#[derive(Debug, Clone)]
pub struct SimplifiedRing<T> {
    /// Retained points in output order.
    pub points: Vec<Vector2<T>>,
    /// For every input ring index the output index it landed at, `None` if it was removed.
    pub index_map: Vec<Option<usize>>,
}

impl<T> SimplifiedRing<T>
where
    T: Real,
{
    /// Output index for input ring index `i`. Removed indexes map to the next retained index
    /// walking forward around the input ring. Returns `None` if no point was retained.
    pub fn map_index(&self, i: usize) -> Option<usize> {
        let n = self.index_map.len();
        if n == 0 {
            return None;
        }

        (0..n).find_map(|offset| self.index_map[(i + offset) % n])
    }

    /// Re-index a range recorded against the input ring so it addresses the output ring.
    ///
    /// Returns `None` if the range collapsed, i.e. it did not cover the whole ring but both of its
    /// ends now map to the same output index.
    pub fn map_range(&self, range: BorderRange) -> Option<BorderRange> {
        let start = self.map_index(range.start)?;
        let end = self.map_index(range.end)?;
        if start == end && !range.is_whole_ring() {
            return None;
        }

        Some(BorderRange::new(start, end))
    }
}

/// Simplify the arcs of `ring` addressed by `border_ranges` with Douglas-Peucker reduction using
/// `tolerance`, keeping everything between the ranges verbatim.
///
/// Ranges are processed in ascending start order. For each range the reduced range slice is
/// appended followed by the unmodified slice between the range end and the start of the next range
/// (wrapping to the first range after the last). If `border_ranges` is empty the whole ring is
/// reduced as a single open arc starting at index 0. Output points are always a subset of the input
/// points and [SimplifiedRing::index_map] records where each input index landed.
///
/// # Panics
///
/// Panics if a range index is greater than the ring vertex count.
pub fn simplify_ring<R, T>(
    ring: &R,
    border_ranges: &[BorderRange],
    tolerance: T,
) -> SimplifiedRing<T>
where
    R: RingSource<Num = T> + ?Sized,
    T: Real,
{
    let vc = ring.vertex_count();
    let mut points = Vec::with_capacity(vc);
    let mut index_map = vec![None; vc];

    if vc == 0 {
        return SimplifiedRing { points, index_map };
    }

    if border_ranges.is_empty() {
        push_reduced_arc(ring, 0, 0, tolerance, &mut points, &mut index_map);
        return SimplifiedRing { points, index_map };
    }

    let mut sorted = border_ranges.to_vec();
    sorted.sort();

    for (i, range) in sorted.iter().enumerate() {
        push_reduced_arc(
            ring,
            range.start,
            range.end,
            tolerance,
            &mut points,
            &mut index_map,
        );

        let next_start = sorted[(i + 1) % sorted.len()].start;
        if range.end == next_start {
            continue;
        }

        for j in ring_slice_indexes(vc, range.end, next_start) {
            index_map[j] = Some(points.len());
            points.push(ring.at(j));
        }
    }

    SimplifiedRing { points, index_map }
}

fn push_reduced_arc<R, T>(
    ring: &R,
    start: usize,
    end: usize,
    tolerance: T,
    points: &mut Vec<Vector2<T>>,
    index_map: &mut [Option<usize>],
) where
    R: RingSource<Num = T> + ?Sized,
    T: Real,
{
    let indexes: Vec<usize> = ring_slice_indexes(ring.vertex_count(), start, end).collect();
    let arc: Vec<Vector2<T>> = indexes.iter().map(|&i| ring.at(i)).collect();
    let keep = douglas_peucker_mask(&arc, tolerance);
    for (&i, kept) in indexes.iter().zip(keep) {
        if kept {
            index_map[i] = Some(points.len());
            points.push(ring.at(i));
        }
    }
}

/// Simplify the arcs of `polygon` addressed by `border_ranges`, see [simplify_ring].
///
/// If the reduction would leave fewer than 3 points a warning is logged and a copy of the input
/// polygon is returned instead.
///
/// # Examples
///
/// ```
/// # use region_borders::borders::BorderRange;
/// # use region_borders::polygon::*;
/// # use region_borders::simplify::*;
/// # use region_borders::polygon;
/// let p = polygon![
///     "p";
///     (0.0, 0.0), (0.2, 0.0), (0.3, 0.0), (0.4, 0.0), (0.5, 0.0), (1.0, 0.0), (1.0, -1.0),
///     (0.0, -1.0)
/// ];
/// assert_eq!(simplify_polygon(&p, &[BorderRange::new(0, 5)], 1.0).vertex_count(), 5);
/// assert_eq!(simplify_polygon(&p, &[BorderRange::new(0, 6)], 1.0).vertex_count(), 4);
/// ```
pub fn simplify_polygon<T>(
    polygon: &Polygon<T>,
    border_ranges: &[BorderRange],
    tolerance: T,
) -> Polygon<T>
where
    T: Real,
{
    let simplified = simplify_ring(polygon, border_ranges, tolerance);
    if simplified.points.len() < 3 {
        warn!(
            "simplifying '{}' would collapse it to {} points, keeping {} points",
            polygon.name(),
            simplified.points.len(),
            polygon.vertex_count()
        );
        return polygon.clone();
    }

    debug!(
        "polygon '{}' size before: {} after: {}",
        polygon.name(),
        polygon.vertex_count(),
        simplified.points.len()
    );

    Polygon::new(polygon.name(), simplified.points)
}

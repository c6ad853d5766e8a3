use std::collections::HashSet;

use super::BorderRange;
use crate::{
    core::{
        math::{PointKey, Vector2},
        traits::Real,
    },
    polygon::RingSource,
};

/// Points of `ring1` whose exact coordinate values also occur in `ring2`, in `ring1` order with
/// duplicates removed.
///
/// # Examples
///
/// ```
/// # use region_borders::borders::*;
/// # use region_borders::core::math::*;
/// # use region_borders::polygon;
/// let a = polygon!["a"; (0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
/// let b = polygon!["b"; (0.0, 0.0), (1.0, 0.0), (1.0, -1.0), (0.0, -1.0)];
/// assert_eq!(exact_intersection(&a, &b), vec![vec2(0.0, 0.0), vec2(1.0, 0.0)]);
/// ```
pub fn exact_intersection<R1, R2, T>(ring1: &R1, ring2: &R2) -> Vec<Vector2<T>>
where
    R1: RingSource<Num = T> + ?Sized,
    R2: RingSource<Num = T> + ?Sized,
    T: Real,
{
    let other: HashSet<PointKey> = ring2.iter_points().map(|p| p.key()).collect();
    let mut seen = HashSet::with_capacity(other.len().min(ring1.vertex_count()));
    ring1
        .iter_points()
        .filter(|p| {
            let key = p.key();
            other.contains(&key) && seen.insert(key)
        })
        .collect()
}

/// Find the contiguous runs of `ring` made up of the `common_points` given.
///
/// The common points form a worklist consumed in order. The first unconsumed point is located in
/// the ring, then the run is extended backward (wrapping through index 0) and forward while the
/// neighboring ring points are still in the worklist, consuming each point taken. Every run is
/// returned as a [BorderRange] with an exclusive end. Common points not present in the ring are
/// discarded.
///
/// # Examples
///
/// ```
/// # use region_borders::borders::*;
/// # use region_borders::core::math::*;
/// # use region_borders::polygon;
/// let p = polygon!["p"; (0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
/// let borders = find_borders(&p, &[vec2(1.0, 0.0), vec2(0.0, 0.0)]);
/// assert_eq!(borders, vec![BorderRange::new(0, 2)]);
///
/// // run crossing the ring origin
/// let borders = find_borders(&p, &[vec2(0.0, 0.0), vec2(0.0, 1.0)]);
/// assert_eq!(borders, vec![BorderRange::new(3, 1)]);
/// ```
pub fn find_borders<R, T>(ring: &R, common_points: &[Vector2<T>]) -> Vec<BorderRange>
where
    R: RingSource<Num = T> + ?Sized,
    T: Real,
{
    let mut result = Vec::new();
    if ring.is_empty() {
        return result;
    }

    let mut worklist: HashSet<PointKey> = common_points.iter().map(|p| p.key()).collect();

    for point in common_points {
        if !worklist.remove(&point.key()) {
            // already consumed as part of an earlier run
            continue;
        }

        let Some(index) = ring.index_of(*point) else {
            continue;
        };

        let mut start = index;
        loop {
            let prev = ring.prev_wrapping_index(start);
            if prev == index || !worklist.remove(&ring.at(prev).key()) {
                break;
            }
            start = prev;
        }

        let mut end = ring.next_wrapping_index(index);
        while end != start && worklist.remove(&ring.at(end).key()) {
            end = ring.next_wrapping_index(end);
        }

        result.push(BorderRange::new(start, end));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::math::vec2, polygon::Polygon};

    fn square() -> Polygon {
        Polygon::from_coords("square", [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
    }

    #[test]
    fn unknown_points_are_discarded() {
        let borders = find_borders(&square(), &[vec2(5.0, 5.0)]);
        assert!(borders.is_empty());
    }

    #[test]
    fn fully_shared_ring_is_whole_range() {
        let p = square();
        let borders = find_borders(&p, p.points());
        assert_eq!(borders.len(), 1);
        assert!(borders[0].is_whole_ring());
    }

    #[test]
    fn separate_runs() {
        let p = Polygon::from_coords(
            "hex",
            [
                (0.0, 0.0),
                (1.0, 0.0),
                (2.0, 0.0),
                (2.0, 1.0),
                (1.0, 1.0),
                (0.0, 1.0),
            ],
        );
        let common = [vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(2.0, 1.0), vec2(1.0, 1.0)];
        let borders = find_borders(&p, &common);
        assert_eq!(borders, vec![BorderRange::new(0, 2), BorderRange::new(3, 5)]);
    }

    #[test]
    fn negative_zero_matches_zero() {
        let a = square();
        let b = Polygon::from_coords("b", [(-0.0, 0.0), (1.0, -0.0), (1.0, -1.0), (0.0, -1.0)]);
        let common = exact_intersection(&a, &b);
        assert_eq!(common.len(), 2);
        assert_eq!(find_borders(&b, &common), vec![BorderRange::new(0, 2)]);
    }
}

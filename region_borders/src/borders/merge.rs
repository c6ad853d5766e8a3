use super::BorderRange;
use crate::{
    core::{math::dist, traits::Real},
    polygon::RingSource,
};

/// Merge border ranges of `ring` separated by gaps shorter than `snap_distance`.
///
/// Ranges are sorted by start index and merged with a running range, the gap between the running
/// range and the next range is the distance from the point at the running range end to the point
/// at the next range start. Gaps strictly less than `snap_distance` are bridged. If more than one
/// range remains, a single wraparound merge between the last and first range is attempted, the
/// merged range replaces both and is placed at the end.
///
/// Fewer than 2 ranges are returned unchanged. Merging is idempotent for the same snap distance.
///
/// # Examples
///
/// ```
/// # use region_borders::borders::*;
/// # use region_borders::polygon;
/// let p = polygon!["p"; (0.0, 0.0), (1.0, 0.0), (1.001, 0.0), (2.0, 0.0), (2.0, 1.0), (0.0, 1.0)];
/// let merged = merge_borders(&p, &[BorderRange::new(2, 4), BorderRange::new(0, 2)], 0.01);
/// assert_eq!(merged, vec![BorderRange::new(0, 4)]);
/// ```
pub fn merge_borders<R, T>(
    ring: &R,
    borders: &[BorderRange],
    snap_distance: T,
) -> Vec<BorderRange>
where
    R: RingSource<Num = T> + ?Sized,
    T: Real,
{
    if borders.len() < 2 {
        return borders.to_vec();
    }

    let gap = |from_end: usize, to_start: usize| {
        dist(ring.point_at(from_end), ring.point_at(to_start))
    };

    let mut sorted = borders.to_vec();
    sorted.sort();

    let mut result = Vec::with_capacity(sorted.len());
    let mut running = sorted[0];
    for next in sorted.iter().skip(1) {
        if gap(running.end, next.start) < snap_distance {
            running.end = next.end;
        } else {
            result.push(running);
            running = *next;
        }
    }
    result.push(running);

    if result.len() == 1 {
        return result;
    }

    let first = result[0];
    let last = result[result.len() - 1];
    if gap(last.end, first.start) < snap_distance {
        result.pop();
        result.remove(0);
        result.push(BorderRange::new(last.start, first.end));
    }

    result
}

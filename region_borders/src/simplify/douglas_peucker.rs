use crate::core::{
    math::{perpendicular_distance, Vector2},
    traits::Real,
};

/// Douglas-Peucker keep mask for the open arc `points`.
///
/// The arc endpoints are always kept, between two kept points the point farthest from the line
/// through them is kept whenever its perpendicular distance is greater than `tolerance`, and the
/// two halves are processed the same way. Arcs of 2 or fewer points are kept entirely.
///
/// # Examples
///
/// ```
/// # use region_borders::core::math::*;
/// # use region_borders::simplify::*;
/// let arc = [vec2(0.0, 0.0), vec2(1.0, 0.1), vec2(2.0, 0.0), vec2(3.0, 5.0)];
/// assert_eq!(douglas_peucker_mask(&arc, 0.5), vec![true, false, true, true]);
/// ```
pub fn douglas_peucker_mask<T>(points: &[Vector2<T>], tolerance: T) -> Vec<bool>
where
    T: Real,
{
    let n = points.len();
    if n <= 2 {
        return vec![true; n];
    }

    let mut keep = vec![false; n];
    keep[0] = true;
    keep[n - 1] = true;

    let mut stack = vec![(0, n - 1)];
    while let Some((start, end)) = stack.pop() {
        if end <= start + 1 {
            continue;
        }

        let mut max_dist = T::zero();
        let mut max_idx = start;
        for (i, p) in points.iter().enumerate().take(end).skip(start + 1) {
            let d = perpendicular_distance(points[start], points[end], *p);
            if d > max_dist {
                max_dist = d;
                max_idx = i;
            }
        }

        if max_dist > tolerance {
            keep[max_idx] = true;
            stack.push((max_idx, end));
            stack.push((start, max_idx));
        }
    }

    keep
}

/// Douglas-Peucker reduction of the open arc `points`, the result is always a subsequence of the
/// input. See [douglas_peucker_mask].
///
/// # Examples
///
/// ```
/// # use region_borders::core::math::*;
/// # use region_borders::simplify::*;
/// let arc = [vec2(0.0, 0.0), vec2(0.2, 0.0), vec2(0.5, 0.0), vec2(1.0, 0.0)];
/// assert_eq!(douglas_peucker(&arc, 0.0), vec![vec2(0.0, 0.0), vec2(1.0, 0.0)]);
/// ```
pub fn douglas_peucker<T>(points: &[Vector2<T>], tolerance: T) -> Vec<Vector2<T>>
where
    T: Real,
{
    douglas_peucker_mask(points, tolerance)
        .into_iter()
        .zip(points)
        .filter_map(|(keep, p)| keep.then_some(*p))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    #[test]
    fn short_arcs_unchanged() {
        assert!(douglas_peucker::<f64>(&[], 1.0).is_empty());
        let two = [vec2(0.0, 0.0), vec2(5.0, 5.0)];
        assert_eq!(douglas_peucker(&two, 100.0), two.to_vec());
    }

    #[test]
    fn zero_tolerance_keeps_non_collinear() {
        let zigzag = [
            vec2(0.0, 0.0),
            vec2(1.0, 1.0),
            vec2(2.0, 0.0),
            vec2(3.0, 1.0),
            vec2(4.0, 0.0),
        ];
        assert_eq!(douglas_peucker(&zigzag, 0.0), zigzag.to_vec());
    }

    #[test]
    fn large_tolerance_keeps_endpoints() {
        let zigzag = [
            vec2(0.0, 0.0),
            vec2(1.0, 1.0),
            vec2(2.0, 0.0),
            vec2(3.0, 1.0),
            vec2(4.0, 0.0),
        ];
        assert_eq!(
            douglas_peucker(&zigzag, 10.0),
            vec![vec2(0.0, 0.0), vec2(4.0, 0.0)]
        );
    }

    #[test]
    fn deviation_equal_to_tolerance_is_removed() {
        let arc = [vec2(0.0, 0.0), vec2(1.0, 1.0), vec2(2.0, 0.0)];
        assert_eq!(douglas_peucker(&arc, 1.0), vec![vec2(0.0, 0.0), vec2(2.0, 0.0)]);
    }
}

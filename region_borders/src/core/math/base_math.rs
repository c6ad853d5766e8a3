use super::Vector2;
use crate::core::traits::Real;

/// Distance squared between the points `p0` and `p1`.
#[inline]
pub fn dist_squared<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    let d = p0 - p1;
    d.dot(d)
}

/// Euclidean distance between the points `p0` and `p1`.
///
/// # Examples
///
/// ```
/// # use region_borders::core::math::*;
/// assert_eq!(dist(Vector2::new(0.0, 0.0), Vector2::new(3.0, 4.0)), 5.0);
/// ```
#[inline]
pub fn dist<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    dist_squared(p0, p1).sqrt()
}

/// Perpendicular distance from `point` to the infinite line passing through `p0` and `p1`.
///
/// When `p0` and `p1` are the same position the distance from `point` to `p0` is returned.
///
/// # Examples
///
/// ```
/// # use region_borders::core::math::*;
/// let p0 = Vector2::new(0.0, 0.0);
/// let p1 = Vector2::new(2.0, 0.0);
/// assert_eq!(perpendicular_distance(p0, p1, Vector2::new(1.0, 3.0)), 3.0);
/// assert_eq!(perpendicular_distance(p0, p1, Vector2::new(5.0, -1.0)), 1.0);
/// assert_eq!(perpendicular_distance(p0, p0, Vector2::new(3.0, 4.0)), 5.0);
/// ```
#[inline]
pub fn perpendicular_distance<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> T
where
    T: Real,
{
    let line = p1 - p0;
    let length = line.length();
    if length == T::zero() {
        return dist(p0, point);
    }

    line.perp_dot(point - p0).abs() / length
}

use super::RingSource;
use crate::core::{math::Vector2, traits::Real};
use static_aabb2d_index::AABB;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Named closed ring of points, the basic data representation implementing [RingSource].
///
/// The ring is implicitly closed (the point after the last point is the first point) and always
/// holds at least 3 points. The name identifies the region and stays stable while simplification
/// passes replace the point sequence.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<T = f64> {
    name: String,
    points: Vec<Vector2<T>>,
}

impl<T> Polygon<T>
where
    T: Real,
{
    /// Create a new polygon from a name and its ordered ring of points.
    ///
    /// # Panics
    ///
    /// Panics if fewer than 3 points are given.
    ///
    /// # Examples
    ///
    /// ```
    /// # use region_borders::core::math::*;
    /// # use region_borders::polygon::*;
    /// let p = Polygon::new(
    ///     "square",
    ///     vec![vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(1.0, 1.0), vec2(0.0, 1.0)],
    /// );
    /// assert_eq!(p.name(), "square");
    /// assert_eq!(p.vertex_count(), 4);
    /// ```
    pub fn new(name: impl Into<String>, points: Vec<Vector2<T>>) -> Self {
        let name = name.into();
        assert!(
            points.len() >= 3,
            "polygon '{name}' requires at least 3 points, got {}",
            points.len()
        );

        Polygon { name, points }
    }

    /// Create a polygon from `(x, y)` tuples.
    ///
    /// # Panics
    ///
    /// Panics if fewer than 3 points are given.
    pub fn from_coords<I>(name: impl Into<String>, coords: I) -> Self
    where
        I: IntoIterator<Item = (T, T)>,
    {
        Self::new(name, coords.into_iter().map(Vector2::from).collect())
    }

    /// Region name of the polygon.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the point sequence, keeping the name.
    ///
    /// # Panics
    ///
    /// Panics if fewer than 3 points are given.
    pub fn set_points(&mut self, points: Vec<Vector2<T>>) {
        assert!(
            points.len() >= 3,
            "polygon '{}' requires at least 3 points, got {}",
            self.name,
            points.len()
        );

        self.points = points;
    }

    /// Consume the polygon returning its name and points.
    #[inline]
    pub fn into_parts(self) -> (String, Vec<Vector2<T>>) {
        (self.name, self.points)
    }

    /// Return a copy of this polygon with every point mapped by `f`.
    pub fn map_points<F>(&self, f: F) -> Self
    where
        F: FnMut(Vector2<T>) -> Vector2<T>,
    {
        Self::new(self.name.clone(), self.iter_points().map(f).collect())
    }
}

impl<T> Index<usize> for Polygon<T> {
    type Output = Vector2<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<T> RingSource for Polygon<T>
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn vertex_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<Vector2<T>> {
        self.points.get(index).copied()
    }

    #[inline]
    fn at(&self, index: usize) -> Vector2<T> {
        self.points[index]
    }

    #[inline]
    fn points(&self) -> &[Vector2<T>] {
        &self.points
    }
}

/// Combined XY extents of all the polygons given, `None` if `polygons` is empty.
///
/// # Examples
///
/// ```
/// # use region_borders::polygon::*;
/// # use region_borders::polygon;
/// let a = polygon!["a"; (0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
/// let b = polygon!["b"; (0.0, 0.0), (1.0, 0.0), (1.0, -1.0), (0.0, -1.0)];
/// let extents = polygons_extents(&[a, b]).unwrap();
/// assert_eq!((extents.min_y, extents.max_y), (-1.0, 1.0));
///
/// let none: Vec<Polygon> = Vec::new();
/// assert!(polygons_extents(&none).is_none());
/// ```
pub fn polygons_extents<'a, T, I>(polygons: I) -> Option<AABB<T>>
where
    T: Real,
    I: IntoIterator<Item = &'a Polygon<T>>,
{
    polygons
        .into_iter()
        .filter_map(|p| p.extents())
        .reduce(|acc, e| {
            AABB::new(
                num_traits::real::Real::min(acc.min_x, e.min_x),
                num_traits::real::Real::min(acc.min_y, e.min_y),
                num_traits::real::Real::max(acc.max_x, e.max_x),
                num_traits::real::Real::max(acc.max_y, e.max_y),
            )
        })
}

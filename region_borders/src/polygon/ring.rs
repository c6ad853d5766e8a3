use num_traits::Zero;
use static_aabb2d_index::AABB;

use super::{ring_slice, ring_slice_indexes};
use crate::core::{
    math::{dist, Vector2},
    traits::Real,
};

/// Represents the orientation of a ring.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RingOrientation {
    /// Ring is directionally clockwise (negative signed area).
    Clockwise,
    /// Ring is directionally counter clockwise (zero or positive signed area).
    CounterClockwise,
}

/// Trait representing a readonly closed ring of points. The element after the last point is the
/// first point, all index arithmetic provided by this trait wraps around the ring.
///
/// See [Polygon](super::Polygon) for the basic implementation.
pub trait RingSource {
    /// Numeric type used for the ring coordinates.
    type Num: Real;

    /// Total number of points.
    fn vertex_count(&self) -> usize;

    /// Get the point at given `index` position. Returns `None` if `index` out of bounds.
    fn get(&self, index: usize) -> Option<Vector2<Self::Num>>;

    /// Same as [RingSource::get] but panics if `index` is out of bounds.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    fn at(&self, index: usize) -> Vector2<Self::Num>;

    /// All the points of the ring as a contiguous slice.
    fn points(&self) -> &[Vector2<Self::Num>];

    /// Returns true if vertex count is 0.
    #[inline]
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Return iterator over all the ring points.
    #[inline]
    fn iter_points(&self) -> std::iter::Copied<std::slice::Iter<'_, Vector2<Self::Num>>> {
        self.points().iter().copied()
    }

    /// Return iterator over all the ring edges as point pairs, including the closing edge from the
    /// last point back to the first.
    #[inline]
    fn iter_edges(&self) -> EdgeIter<'_, Self> {
        EdgeIter::new(self)
    }

    /// Get the point at `index` taken modulo the vertex count.
    ///
    /// # Panics
    ///
    /// Panics if the ring is empty.
    #[inline]
    fn point_at(&self, index: usize) -> Vector2<Self::Num> {
        self.at(index % self.vertex_count())
    }

    /// Index of the first point exactly equal to `point`, or `None` if not in the ring.
    #[inline]
    fn index_of(&self, point: Vector2<Self::Num>) -> Option<usize> {
        self.points().iter().position(|p| *p == point)
    }

    /// Returns the next wrapping index.
    ///
    /// If `i + 1 >= self.vertex_count()` then 0 is returned, otherwise `i + 1` is returned.
    #[inline]
    fn next_wrapping_index(&self, i: usize) -> usize {
        let next = i + 1;
        if next >= self.vertex_count() {
            0
        } else {
            next
        }
    }

    /// Returns the previous wrapping index.
    ///
    /// If `i == 0` then `self.vertex_count() - 1` is returned, otherwise `i - 1` is returned.
    #[inline]
    fn prev_wrapping_index(&self, i: usize) -> usize {
        if i == 0 {
            self.vertex_count() - 1
        } else {
            i - 1
        }
    }

    /// Returns the forward wrapping distance between two indexes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use region_borders::polygon::*;
    /// # use region_borders::polygon;
    /// let square = polygon!["square"; (0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
    /// assert_eq!(square.fwd_wrapping_dist(0, 2), 2);
    /// assert_eq!(square.fwd_wrapping_dist(3, 1), 2);
    /// ```
    #[inline]
    fn fwd_wrapping_dist(&self, start_index: usize, end_index: usize) -> usize {
        let vc = self.vertex_count();

        debug_assert!(start_index < vc, "start_index is out of ring range bounds");

        if start_index <= end_index {
            end_index - start_index
        } else {
            vc - start_index + end_index
        }
    }

    /// Returns the index after applying `offset` to `start_index` in a wrapping manner.
    ///
    /// Assumes `offset` does not wrap multiple times, debug asserts `offset <= self.vertex_count()`.
    #[inline]
    fn fwd_wrapping_index(&self, start_index: usize, offset: usize) -> usize {
        let vc = self.vertex_count();

        debug_assert!(start_index < vc, "start_index is out of ring range bounds");
        debug_assert!(offset <= vc, "offset wraps multiple times");

        let sum = start_index + offset;
        if sum < vc {
            sum
        } else {
            sum - vc
        }
    }

    /// Materialize the wrap-aware slice `(start, end)` of the ring, see
    /// [ring_slice](super::ring_slice).
    #[inline]
    fn slice(&self, start: usize, end: usize) -> Vec<Vector2<Self::Num>> {
        ring_slice(self.points(), start, end)
    }

    /// Compute the XY extents of the ring.
    ///
    /// Returns `None` if the ring is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use region_borders::polygon::*;
    /// # use region_borders::polygon;
    /// let p = polygon!["p"; (0.0, 0.0), (1.0, 0.0), (1.0, -1.0), (0.0, -1.0)];
    /// let extents = p.extents().unwrap();
    /// assert_eq!(extents.min_x, 0.0);
    /// assert_eq!(extents.min_y, -1.0);
    /// assert_eq!(extents.max_x, 1.0);
    /// assert_eq!(extents.max_y, 0.0);
    /// ```
    fn extents(&self) -> Option<AABB<Self::Num>> {
        let mut points = self.iter_points();
        let first = points.next()?;
        let mut result = AABB::new(first.x, first.y, first.x, first.y);
        for p in points {
            if p.x < result.min_x {
                result.min_x = p.x;
            } else if p.x > result.max_x {
                result.max_x = p.x;
            }

            if p.y < result.min_y {
                result.min_y = p.y;
            } else if p.y > result.max_y {
                result.max_y = p.y;
            }
        }

        Some(result)
    }

    /// Minimum x value over all points.
    ///
    /// # Panics
    ///
    /// Panics if the ring is empty.
    #[inline]
    fn min_x(&self) -> Self::Num {
        expect_extents(self).min_x
    }

    /// Minimum y value over all points.
    ///
    /// # Panics
    ///
    /// Panics if the ring is empty.
    #[inline]
    fn min_y(&self) -> Self::Num {
        expect_extents(self).min_y
    }

    /// Maximum x value over all points.
    ///
    /// # Panics
    ///
    /// Panics if the ring is empty.
    #[inline]
    fn max_x(&self) -> Self::Num {
        expect_extents(self).max_x
    }

    /// Maximum y value over all points.
    ///
    /// # Panics
    ///
    /// Panics if the ring is empty.
    #[inline]
    fn max_y(&self) -> Self::Num {
        expect_extents(self).max_y
    }

    /// Total closed path length of the ring.
    #[inline]
    fn path_length(&self) -> Self::Num {
        self.iter_edges()
            .fold(Self::Num::zero(), |acc, (p1, p2)| acc + dist(p1, p2))
    }

    /// Length along the ring walking forward from `start` to `end` (both inclusive), wrapping
    /// through the ring origin when `start > end`. Returns 0 if `start == end`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use region_borders::polygon::*;
    /// # use region_borders::polygon;
    /// let square = polygon!["square"; (0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
    /// assert_eq!(square.border_length(0, 1), 1.0);
    /// assert_eq!(square.border_length(3, 1), 2.0);
    /// assert_eq!(square.border_length(2, 2), 0.0);
    /// ```
    fn border_length(&self, start: usize, end: usize) -> Self::Num {
        let vc = self.vertex_count();
        assert!(
            start < vc && end < vc,
            "border ({start}, {end}) out of range for ring of length {vc}"
        );

        if start == end {
            return Self::Num::zero();
        }

        let stop = self.next_wrapping_index(end);
        let mut indexes = ring_slice_indexes(vc, start, stop);
        let mut prev = match indexes.next() {
            Some(i) => self.at(i),
            None => return Self::Num::zero(),
        };

        let mut length = Self::Num::zero();
        for i in indexes {
            let p = self.at(i);
            length = length + dist(prev, p);
            prev = p;
        }

        length
    }

    /// Compute the closed signed area of the ring (shoelace formula). The area is positive if the
    /// ring direction is counter clockwise, otherwise it is negative.
    fn area(&self) -> Self::Num {
        if self.vertex_count() < 3 {
            return Self::Num::zero();
        }

        let double_area = self
            .iter_edges()
            .fold(Self::Num::zero(), |acc, (p1, p2)| acc + p1.perp_dot(p2));

        double_area / Self::Num::two()
    }

    /// Direction of the ring based on its signed area.
    #[inline]
    fn orientation(&self) -> RingOrientation {
        if self.area() < Self::Num::zero() {
            RingOrientation::Clockwise
        } else {
            RingOrientation::CounterClockwise
        }
    }
}

#[inline]
fn expect_extents<R>(ring: &R) -> AABB<R::Num>
where
    R: RingSource + ?Sized,
{
    ring.extents()
        .unwrap_or_else(|| panic!("extents requested for an empty ring"))
}

/// An iterator that traverses ring edges as pairs of points, ending with the closing edge.
#[derive(Debug)]
pub struct EdgeIter<'a, R>
where
    R: ?Sized,
{
    ring: &'a R,
    pos: usize,
}

impl<'a, R> EdgeIter<'a, R>
where
    R: RingSource + ?Sized,
{
    #[inline]
    pub fn new(ring: &'a R) -> Self {
        Self { ring, pos: 0 }
    }
}

impl<R> Clone for EdgeIter<'_, R>
where
    R: ?Sized,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            ring: self.ring,
            pos: self.pos,
        }
    }
}

impl<R> Iterator for EdgeIter<'_, R>
where
    R: RingSource + ?Sized,
{
    type Item = (Vector2<R::Num>, Vector2<R::Num>);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let vc = self.ring.vertex_count();
        if vc < 2 || self.pos >= vc {
            return None;
        }

        let i = self.pos;
        self.pos += 1;
        Some((self.ring.at(i), self.ring.at(self.ring.next_wrapping_index(i))))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let vc = self.ring.vertex_count();
        let remaining = if vc < 2 { 0 } else { vc - self.pos };
        (remaining, Some(remaining))
    }
}

impl<R> ExactSizeIterator for EdgeIter<'_, R> where R: RingSource + ?Sized {}

//! Wrap-aware slicing of circular point sequences.
//!
//! Every border algorithm addresses arcs of a ring by a `(start, end)` index pair, `start` is
//! inclusive and `end` is exclusive. When `start < end` the arc is the plain slice
//! `start..end`. When `start >= end` the arc wraps through the ring origin and is `start..`
//! followed by `..end`, so `start == end` selects the entire ring beginning at `start`.

/// Number of elements selected by the ring slice `(start, end)` over a sequence of `len`
/// elements.
///
/// # Examples
///
/// ```
/// # use region_borders::polygon::*;
/// assert_eq!(ring_slice_len(8, 0, 5), 5);
/// assert_eq!(ring_slice_len(8, 6, 2), 4);
/// assert_eq!(ring_slice_len(8, 3, 3), 8);
/// ```
#[inline]
pub fn ring_slice_len(len: usize, start: usize, end: usize) -> usize {
    debug_assert!(start <= len && end <= len, "ring slice index out of range");
    if start < end {
        end - start
    } else {
        len - start + end
    }
}

/// Iterator over the sequence indexes selected by the ring slice `(start, end)`.
///
/// # Panics
///
/// Panics if `start` or `end` is greater than `len`.
///
/// # Examples
///
/// ```
/// # use region_borders::polygon::*;
/// let indexes: Vec<usize> = ring_slice_indexes(5, 3, 1).collect();
/// assert_eq!(indexes, vec![3, 4, 0]);
/// ```
#[inline]
pub fn ring_slice_indexes(len: usize, start: usize, end: usize) -> RingSliceIndexes {
    assert!(
        start <= len && end <= len,
        "ring slice ({start}, {end}) out of range for length {len}"
    );

    RingSliceIndexes {
        len,
        next: start,
        remaining: if len == 0 {
            0
        } else {
            ring_slice_len(len, start, end)
        },
    }
}

/// Materialize the ring slice `(start, end)` of `points` into a new vector.
///
/// # Panics
///
/// Panics if `start` or `end` is greater than `points.len()`.
///
/// # Examples
///
/// ```
/// # use region_borders::polygon::*;
/// let ring = [0, 1, 2, 3, 4];
/// assert_eq!(ring_slice(&ring, 1, 3), vec![1, 2]);
/// assert_eq!(ring_slice(&ring, 3, 1), vec![3, 4, 0]);
/// assert_eq!(ring_slice(&ring, 2, 2), vec![2, 3, 4, 0, 1]);
/// ```
pub fn ring_slice<V>(points: &[V], start: usize, end: usize) -> Vec<V>
where
    V: Copy,
{
    assert!(
        start <= points.len() && end <= points.len(),
        "ring slice ({start}, {end}) out of range for length {}",
        points.len()
    );

    if start < end {
        points[start..end].to_vec()
    } else {
        let mut result = Vec::with_capacity(ring_slice_len(points.len(), start, end));
        result.extend_from_slice(&points[start..]);
        result.extend_from_slice(&points[..end]);
        result
    }
}

/// Iterator returned by [ring_slice_indexes].
#[derive(Debug, Clone)]
pub struct RingSliceIndexes {
    len: usize,
    next: usize,
    remaining: usize,
}

impl Iterator for RingSliceIndexes {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let i = if self.next >= self.len { 0 } else { self.next };
        self.next = i + 1;
        self.remaining -= 1;
        Some(i)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RingSliceIndexes {
    #[inline]
    fn len(&self) -> usize {
        self.remaining
    }
}

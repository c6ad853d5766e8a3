use crate::polygon::{ring_slice_indexes, ring_slice_len, RingSliceIndexes};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Contiguous run of ring indexes, `start` is inclusive and `end` is exclusive.
///
/// When `start >= end` the run wraps through the ring origin, `start == end` covers the whole
/// ring. Ordering compares `start` first then `end`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BorderRange {
    pub start: usize,
    pub end: usize,
}

impl BorderRange {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns true if the range wraps through the ring origin (including the whole ring case).
    #[inline]
    pub fn is_wrapping(&self) -> bool {
        self.start >= self.end
    }

    /// Returns true if the range covers the whole ring.
    #[inline]
    pub fn is_whole_ring(&self) -> bool {
        self.start == self.end
    }

    /// Number of ring indexes covered by the range on a ring with `vertex_count` points.
    #[inline]
    pub fn len(&self, vertex_count: usize) -> usize {
        ring_slice_len(vertex_count, self.start, self.end)
    }

    /// Iterator over the ring indexes covered by the range.
    ///
    /// # Panics
    ///
    /// Panics if `start` or `end` is greater than `vertex_count`.
    #[inline]
    pub fn indexes(&self, vertex_count: usize) -> RingSliceIndexes {
        ring_slice_indexes(vertex_count, self.start, self.end)
    }

    /// Returns true if ring index `i` lies in the range.
    ///
    /// # Examples
    ///
    /// ```
    /// # use region_borders::borders::BorderRange;
    /// let r = BorderRange::new(6, 2);
    /// assert!(r.contains(7));
    /// assert!(r.contains(0));
    /// assert!(!r.contains(2));
    /// assert!(BorderRange::new(3, 3).contains(0));
    /// ```
    #[inline]
    pub fn contains(&self, i: usize) -> bool {
        if self.start < self.end {
            self.start <= i && i < self.end
        } else if self.start == self.end {
            true
        } else {
            i >= self.start || i < self.end
        }
    }

    /// Returns true if the two ranges share at least one ring index.
    #[inline]
    pub fn overlaps(&self, other: &BorderRange) -> bool {
        self.contains(other.start) || other.contains(self.start)
    }
}

impl From<(usize, usize)> for BorderRange {
    #[inline]
    fn from((start, end): (usize, usize)) -> Self {
        BorderRange::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_by_start_then_end() {
        let mut ranges = vec![
            BorderRange::new(5, 1),
            BorderRange::new(0, 3),
            BorderRange::new(0, 2),
        ];
        ranges.sort();
        assert_eq!(
            ranges,
            vec![
                BorderRange::new(0, 2),
                BorderRange::new(0, 3),
                BorderRange::new(5, 1)
            ]
        );
    }

    #[test]
    fn overlap_detection() {
        assert!(BorderRange::new(0, 3).overlaps(&BorderRange::new(2, 5)));
        assert!(!BorderRange::new(0, 3).overlaps(&BorderRange::new(3, 5)));
        assert!(BorderRange::new(6, 1).overlaps(&BorderRange::new(0, 2)));
        assert!(!BorderRange::new(6, 1).overlaps(&BorderRange::new(1, 6)));
    }

    #[test]
    fn length_on_ring() {
        assert_eq!(BorderRange::new(1, 4).len(8), 3);
        assert_eq!(BorderRange::new(6, 2).len(8), 4);
        assert_eq!(BorderRange::new(2, 2).len(8), 8);
    }
}

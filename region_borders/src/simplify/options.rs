use crate::core::traits::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters for border-aware simplification of a set of polygons.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(default)
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SimplifyOptions<T>
where
    T: Real,
{
    /// Border ranges separated by a gap shorter than this distance are merged.
    pub snap_distance: T,
    /// Douglas-Peucker tolerance applied to the arcs shared between two polygons.
    pub border_tolerance: T,
    /// Douglas-Peucker tolerance applied to the arcs not shared with any other polygon.
    pub outside_tolerance: T,
}

impl<T> SimplifyOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        let default_distance = T::from(0.01).unwrap();
        Self {
            snap_distance: default_distance,
            border_tolerance: default_distance,
            outside_tolerance: default_distance,
        }
    }
}

impl<T> Default for SimplifyOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

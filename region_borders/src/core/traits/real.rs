use super::FuzzyEq;
use static_aabb2d_index::IndexableNum;

/// Trait representing a real number coordinate value (e.g. 1.1, -3.5, etc.) that can be fuzzy
/// compared, stored in a spatial index, and hashed by exact value.
pub trait Real:
    num_traits::real::Real
    + num_traits::Bounded
    + FuzzyEq
    + std::default::Default
    + std::fmt::Debug
    + IndexableNum
    + 'static
{
    /// Exact value key used for hashing coordinates.
    ///
    /// Two values that compare equal with `==` always produce the same key (`-0.0` and `0.0` share
    /// the key of `0.0`). NaN values are not meaningful coordinates and produce an unspecified key.
    fn exact_key(self) -> u64;

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

impl Real for f32 {
    #[inline]
    fn exact_key(self) -> u64 {
        if self == 0.0 {
            0
        } else {
            u64::from(self.to_bits())
        }
    }

    #[inline]
    fn two() -> Self {
        2.0f32
    }
}

impl Real for f64 {
    #[inline]
    fn exact_key(self) -> u64 {
        if self == 0.0 {
            0
        } else {
            self.to_bits()
        }
    }

    #[inline]
    fn two() -> Self {
        2.0f64
    }
}

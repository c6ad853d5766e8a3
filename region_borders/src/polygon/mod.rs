//! This module has the [Polygon] ring type, the [RingSource] trait with all the circular index
//! and measurement methods, and the wrap-aware ring slicing helpers.
mod polygon;
mod ring;
mod ring_slice;

pub use polygon::*;
pub use ring::*;
pub use ring_slice::*;

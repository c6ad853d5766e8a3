//! Detection and merging of the boundary runs two rings share.
mod border_range;
mod find;
mod merge;

pub use border_range::*;
pub use find::*;
pub use merge::*;

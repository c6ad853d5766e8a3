//! Arena of polygons with their recorded neighbor borders, and the two phase border-aware
//! simplification run over it.
mod report;
mod set;
mod two_phase;

pub use report::*;
pub use set::*;
pub use two_phase::*;

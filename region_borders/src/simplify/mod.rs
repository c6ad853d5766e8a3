//! Point reduction of targeted ring arcs.
mod arc;
mod douglas_peucker;
mod options;

pub use arc::*;
pub use douglas_peucker::*;
pub use options::*;

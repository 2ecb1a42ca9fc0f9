//! Shared terminal utilities.
//!
//! Box drawing, the strength meter and result rendering.

mod output;
mod report;

pub use output::*;
pub use report::*;

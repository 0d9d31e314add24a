//! Guess-versus-target comparison.
//!
//! - `Mark` and the per-field mark functions
//! - `Field`, `FieldComparison`, `compare_songs` - the full guess report

mod mark;
mod report;

pub use mark::*;
pub use report::*;

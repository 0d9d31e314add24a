//! Song and chart data structures.
//!
//! This module contains types for representing catalog songs:
//! - `Scalar` - catalog values that may be numbers or text
//! - `ChartType` - chart-type groups (standard, dx, ...)
//! - `Difficulty` - named difficulty tiers (BASIC .. Re:MASTER)
//! - `Chart`, `TaggedChart` - chart records
//! - `Song` - song metadata
//! - `representative_chart` - the chart used for designer/level comparison

mod chart_type;
mod difficulty;
mod scalar;
mod selector;
mod song;
mod types;

pub use chart_type::*;
pub use difficulty::*;
pub use scalar::*;
pub use selector::*;
pub use song::*;
pub use types::*;

pub mod lookup;
pub mod play;
pub mod stats;

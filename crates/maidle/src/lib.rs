//! # maidle
//!
//! Core library for the maidle song-guessing game.
//!
//! This crate provides:
//! - Song catalog data structures and JSON loading
//! - Representative chart selection and per-field comparison marks
//! - Per-group game sessions and the `/maidle` command engine
//!
//! The chat transport is not part of this crate: hosts build a [`Command`],
//! pass it to [`Engine::handle`], and send the rendered [`Reply`] back.

pub mod catalog;
pub mod chart;
pub mod compare;
pub mod config;
pub mod error;
pub mod game;
pub mod prelude;

// Re-export from catalog module
pub use catalog::{Catalog, VersionEntry, VersionTable, era_of};

// Re-export from chart module
pub use chart::{Chart, ChartType, Difficulty, Scalar, Song, TaggedChart, representative_chart};

// Re-export from compare module
pub use compare::{
    Field, FieldComparison, Mark, bpm_mark, compare_songs, equality_mark, level_mark,
    version_mark,
};

// Re-export from error module
pub use error::{Error, GameError, Result};

// Re-export from game module
pub use game::{
    Action, Command, Engine, GameSession, GroupId, GuessOutcome, GuessReport, Reply, Reveal,
    RevealedChart, SessionRegistry, SessionStep,
};

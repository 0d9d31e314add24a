//! CLI argument definitions for maidle.

use clap::{Parser, Subcommand};
use maidle::config::catalog::DEFAULT_DATA_PATH;

#[derive(Parser)]
#[command(name = "maidle")]
#[command(about = "Guess-the-song game over a maimai song catalog", version)]
pub struct Args {
    /// Catalog file (JSON with `songs` and `versions`)
    #[arg(long, value_name = "FILE", env = "MAIDLE_DATA", default_value = DEFAULT_DATA_PATH)]
    pub data: String,

    /// Group identifier the commands are played in
    #[arg(long, env = "MAIDLE_GROUP", default_value = "local")]
    pub group: String,

    /// Seed for target selection (reproducible rounds)
    #[arg(long, env = "MAIDLE_SEED")]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Play interactively: one `/maidle` command per input line
    Play,
    /// Resolve a title, alias or ID and show the song
    Lookup {
        /// Title, alias or ID (exact match)
        query: String,
    },
    /// Show catalog statistics
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

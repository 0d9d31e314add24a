mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so replies on stdout stay clean
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("maidle_cli=warn,maidle=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Some(Command::Lookup { query }) => commands::lookup::run(&args.data, &query),
        Some(Command::Stats { json }) => commands::stats::run(&args.data, json),
        Some(Command::Play) | None => commands::play::run(&args.data, &args.group, args.seed),
    }
}

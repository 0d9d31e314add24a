//! CLI argument parsing tests.
//!
//! These tests verify that command-line arguments are parsed correctly
//! without loading a catalog or reading stdin.

use clap::Parser;

// Re-create Args structure for testing since it's not publicly exported
#[derive(Parser)]
#[command(name = "maidle")]
struct Args {
    #[arg(long, value_name = "FILE", default_value = "data/plugins/maidle/maidle.json")]
    data: String,

    #[arg(long, default_value = "local")]
    group: String,

    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(clap::Subcommand)]
enum Command {
    Play,
    Lookup {
        query: String,
    },
    Stats {
        #[arg(long)]
        json: bool,
    },
}

#[test]
fn test_parse_no_args() {
    let args = Args::try_parse_from(["maidle"]).unwrap();
    assert!(args.command.is_none());
    assert_eq!(args.data, "data/plugins/maidle/maidle.json");
    assert_eq!(args.group, "local");
    assert!(args.seed.is_none());
}

#[test]
fn test_parse_global_options() {
    let args = Args::try_parse_from([
        "maidle", "--data", "songs.json", "--group", "123456", "--seed", "42", "play",
    ])
    .unwrap();
    assert_eq!(args.data, "songs.json");
    assert_eq!(args.group, "123456");
    assert_eq!(args.seed, Some(42));
    assert!(matches!(args.command, Some(Command::Play)));
}

#[test]
fn test_parse_lookup() {
    let args = Args::try_parse_from(["maidle", "lookup", "Oshama Scramble!"]).unwrap();
    match args.command {
        Some(Command::Lookup { query }) => assert_eq!(query, "Oshama Scramble!"),
        _ => panic!("Expected Lookup command"),
    }
}

#[test]
fn test_parse_lookup_requires_query() {
    assert!(Args::try_parse_from(["maidle", "lookup"]).is_err());
}

#[test]
fn test_parse_stats_json() {
    let args = Args::try_parse_from(["maidle", "stats", "--json"]).unwrap();
    match args.command {
        Some(Command::Stats { json }) => assert!(json),
        _ => panic!("Expected Stats command"),
    }
}

#[test]
fn test_parse_invalid_seed() {
    assert!(Args::try_parse_from(["maidle", "--seed", "abc"]).is_err());
}

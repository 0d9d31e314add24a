//! Interactive play: stdin lines in, replies out.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use maidle::{Catalog, Command, Engine};
use tracing::{debug, info};

use crate::cli_utils::build_engine;

const COMMAND_PREFIX: &str = "/maidle";

/// What a single input line asks the loop to do.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Skip,
    Quit,
    Content(&'a str),
}

fn classify(line: &str) -> Line<'_> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Line::Skip;
    }
    if matches!(line.trim(), "quit" | "exit") {
        return Line::Quit;
    }
    match line.strip_prefix(COMMAND_PREFIX) {
        Some("") => Line::Content(""),
        Some(rest) if rest.starts_with(' ') => Line::Content(&rest[1..]),
        _ => Line::Content(line),
    }
}

/// Feed every input line to the engine as a command for `group` and write
/// each reply followed by a blank line.
pub fn play<R: BufRead, W: Write>(
    engine: &Engine,
    group: &str,
    input: R,
    mut output: W,
) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        let content = match classify(&line) {
            Line::Skip => continue,
            Line::Quit => break,
            Line::Content(content) => content,
        };
        let command = Command::parse(group, content);
        debug!("Command: {:?}", command);
        let reply = engine.handle(&command);
        writeln!(output, "{}\n", reply)?;
        output.flush()?;
    }
    Ok(())
}

pub fn run(data: &str, group: &str, seed: Option<u64>) -> Result<()> {
    // A broken catalog still starts the loop; `start` then reports it
    let catalog = Catalog::load_or_empty(data);
    info!("Playing in group '{}' with {} songs", group, catalog.len());
    let engine = build_engine(catalog, seed);

    let stdout = io::stdout();
    writeln!(stdout.lock(), "{}\n", engine.help())?;
    play(&engine, group, io::stdin().lock(), stdout.lock())
}

//! Resolve a query against the catalog and print the song.

use anyhow::{Result, bail};
use maidle::Reveal;

use crate::cli_utils::open_catalog;

pub fn run(data: &str, query: &str) -> Result<()> {
    let catalog = open_catalog(data)?;
    let Some(song) = catalog.resolve(query) else {
        bail!("No song matches {:?}", query);
    };

    println!("{}", Reveal::of(song, catalog.versions()));
    if !song.aliases.is_empty() {
        println!("Aliases: {}", song.aliases.join(", "));
    }
    let signature = song.chart_signature();
    if !signature.is_empty() {
        println!("Chart types: {}", signature);
    }
    Ok(())
}

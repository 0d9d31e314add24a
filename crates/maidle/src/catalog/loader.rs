//! Catalog file loading.
//!
//! The catalog file is a JSON document of the form
//! `{"songs": [...], "versions": [{"version": 24000, "title": "..."}]}`.
//! Entries are decoded one at a time so a single malformed song does not
//! take the whole catalog down with it.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value as JsonValue;
use tracing::{info, warn};

use crate::catalog::{Catalog, VersionEntry, VersionTable, era_of};
use crate::chart::Song;
use crate::error::{Error, Result};

#[derive(Debug, Default, Deserialize)]
struct RawCatalog {
    #[serde(default)]
    songs: Option<Vec<JsonValue>>,
    #[serde(default)]
    versions: Option<Vec<JsonValue>>,
}

fn decode_songs(entries: Vec<JsonValue>) -> Vec<Song> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<Song>(entry) {
            Ok(song) => Some(song),
            Err(e) => {
                warn!("Skipping song entry #{}: {}", index, e);
                None
            }
        })
        .collect()
}

fn decode_versions(entries: Vec<JsonValue>) -> VersionTable {
    let mut table = VersionTable::new();
    for (index, entry) in entries.into_iter().enumerate() {
        let entry = match serde_json::from_value::<VersionEntry>(entry) {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping version entry #{}: {}", index, e);
                continue;
            }
        };
        match entry.version.as_int() {
            Some(code) => {
                if era_of(code) != Some(code) {
                    warn!(
                        "Version entry '{}' ({}) is not an era code and will never match",
                        entry.title, code
                    );
                }
                table.insert(code, entry.title);
            }
            None => warn!(
                "Skipping version entry '{}': non-numeric version {}",
                entry.title, entry.version
            ),
        }
    }
    table
}

impl Catalog {
    /// Parse a catalog from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let raw: RawCatalog = serde_json::from_str(text)?;
        let songs = decode_songs(raw.songs.unwrap_or_default());
        let versions = decode_versions(raw.versions.unwrap_or_default());
        Ok(Self::new(songs, versions))
    }

    /// Load a catalog file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&text)?;
        info!(
            "Loaded {} songs and {} versions from {:?}",
            catalog.len(),
            catalog.versions().len(),
            path
        );
        Ok(catalog)
    }

    /// Load a catalog file, falling back to an empty catalog on failure.
    ///
    /// Games cannot be started on an empty catalog, which is how a broken
    /// data file surfaces to players.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!("Failed to load catalog: {}, starting with an empty catalog", e);
                Self::default()
            }
        }
    }
}

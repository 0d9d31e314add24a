//! In-memory song catalog.
//!
//! The catalog is built once (usually by [`Catalog::load`]) and is read-only
//! afterwards, so it can be shared between sessions behind an `Arc`.

mod loader;
mod version;

pub use version::*;

use std::sync::Arc;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::chart::{Scalar, Song};
use crate::error::GameError;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    songs: Vec<Arc<Song>>,
    versions: VersionTable,
}

impl Catalog {
    pub fn new(songs: Vec<Song>, versions: VersionTable) -> Self {
        Self {
            songs: songs.into_iter().map(Arc::new).collect(),
            versions,
        }
    }

    /// Resolve free-text input to a song.
    ///
    /// Songs are checked in catalog order; the first one whose id, title, or
    /// alias equals `query` exactly is returned.
    pub fn resolve(&self, query: &str) -> Option<&Arc<Song>> {
        self.songs.iter().find(|song| song.matches(query))
    }

    /// Era title for a version value. Never fails; see [`VersionTable::era_title`].
    pub fn era_title(&self, version: Option<&Scalar>) -> String {
        self.versions.era_title(version)
    }

    /// Pick a song uniformly at random.
    pub fn random_song<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Arc<Song>, GameError> {
        self.songs.choose(rng).ok_or(GameError::EmptyCatalog)
    }

    pub fn songs(&self) -> &[Arc<Song>] {
        &self.songs
    }

    pub fn versions(&self) -> &VersionTable {
        &self.versions
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read catalog file {path:?}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Rejections raised by game commands.
///
/// Every variant is recoverable; the engine turns them into replies and the
/// `Display` text is what the player sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("The song catalog is empty, a game cannot be started.")]
    EmptyCatalog,

    #[error("No song matches \"{0}\". Check the input and try again; no attempt was used.")]
    UnresolvedGuess(String),

    #[error("No game in progress. Use /maidle start to begin.")]
    NoActiveSession,

    #[error("A game is already in progress. Use /maidle end before starting a new one.")]
    DuplicateSession,
}

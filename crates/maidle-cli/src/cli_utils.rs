//! Common CLI utility functions shared across commands.

use std::sync::Arc;

use anyhow::{Context, Result};
use maidle::{Catalog, Engine};

/// Load the catalog, failing if the file is missing or unreadable.
pub fn open_catalog(data: &str) -> Result<Catalog> {
    Catalog::load(data).with_context(|| format!("Failed to load catalog from {}", data))
}

/// Build an engine with an optional fixed seed.
pub fn build_engine(catalog: Catalog, seed: Option<u64>) -> Engine {
    let catalog = Arc::new(catalog);
    match seed {
        Some(seed) => Engine::with_seed(catalog, seed),
        None => Engine::new(catalog),
    }
}

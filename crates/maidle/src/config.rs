//! Game and catalog configuration constants.
//!
//! The game has a single fixed rule set, so everything here is a named
//! constant rather than a runtime setting. Host-level settings (data path,
//! group, RNG seed) are handled by the CLI.

/// Round rules.
pub mod game {
    /// Attempts a player gets per round.
    pub const MAX_TRIES: u32 = 10;
}

/// Catalog data configuration.
pub mod catalog {
    /// Catalog file location, relative to the working directory.
    pub const DEFAULT_DATA_PATH: &str = "data/plugins/maidle/maidle.json";

    /// Width of a version era: `era = floor(version / ERA_SPAN) * ERA_SPAN`.
    pub const ERA_SPAN: i64 = 100;

    /// Display text for a value the catalog does not provide.
    pub const MISSING_VALUE: &str = "-";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_constants() {
        assert_eq!(game::MAX_TRIES, 10);
    }

    #[test]
    fn test_catalog_constants() {
        assert_eq!(catalog::ERA_SPAN, 100);
        assert!(catalog::DEFAULT_DATA_PATH.ends_with("maidle.json"));
    }
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::chart::Scalar;
use crate::config::catalog::{ERA_SPAN, MISSING_VALUE};

/// Era code of a version: the start of its hundred-block.
///
/// `None` when the block start does not fit in an `i64`; callers treat such a
/// version as non-numeric.
pub fn era_of(version: i64) -> Option<i64> {
    version.div_euclid(ERA_SPAN).checked_mul(ERA_SPAN)
}

/// One row of the catalog's `versions` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionEntry {
    pub version: Scalar,
    pub title: String,
}

/// Era code to era title lookup
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VersionTable {
    titles: BTreeMap<i64, String>,
}

impl VersionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an era title. Later entries for the same code win.
    pub fn insert(&mut self, era: i64, title: impl Into<String>) {
        self.titles.insert(era, title.into());
    }

    pub fn title(&self, era: i64) -> Option<&str> {
        self.titles.get(&era).map(String::as_str)
    }

    /// Display title for a song version.
    ///
    /// Falls back to the raw value when the version is non-numeric or its era
    /// is not in the table, and to a placeholder when it is missing.
    pub fn era_title(&self, version: Option<&Scalar>) -> String {
        let Some(version) = version else {
            return MISSING_VALUE.to_string();
        };
        version
            .as_int()
            .and_then(era_of)
            .and_then(|era| self.title(era))
            .map(str::to_owned)
            .unwrap_or_else(|| version.to_string())
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Eras in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, &str)> {
        self.titles.iter().map(|(era, title)| (*era, title.as_str()))
    }
}

impl FromIterator<(i64, String)> for VersionTable {
    fn from_iter<I: IntoIterator<Item = (i64, String)>>(iter: I) -> Self {
        Self {
            titles: iter.into_iter().collect(),
        }
    }
}

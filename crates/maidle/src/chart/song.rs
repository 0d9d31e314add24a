use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::chart::{Chart, ChartType, Scalar, TaggedChart, representative_chart};

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Song metadata as stored in the catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub id: Scalar,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub aliases: Vec<String>,
    pub artist: Option<String>,
    pub genre: Option<String>,
    pub version: Option<Scalar>,
    pub bpm: Option<Scalar>,
    /// Charts grouped by chart type, iterated in `ChartType` order
    #[serde(default, deserialize_with = "null_as_default")]
    pub difficulties: BTreeMap<ChartType, Vec<Chart>>,
}

impl Song {
    /// Whether `query` names this song by id, title, or alias (exact match).
    pub fn matches(&self, query: &str) -> bool {
        self.id.to_string() == query
            || self.title == query
            || self.aliases.iter().any(|alias| alias == query)
    }

    /// All charts flattened across chart types, each tagged with its group.
    pub fn charts(&self) -> impl Iterator<Item = TaggedChart<'_>> {
        self.difficulties.iter().flat_map(|(chart_type, charts)| {
            charts
                .iter()
                .map(move |chart| TaggedChart { chart_type, chart })
        })
    }

    /// Chart types that have at least one chart.
    pub fn chart_types(&self) -> impl Iterator<Item = &ChartType> {
        self.difficulties
            .iter()
            .filter(|(_, charts)| !charts.is_empty())
            .map(|(chart_type, _)| chart_type)
    }

    /// Chart-type signature, e.g. "SD/DX". Empty when the song has no charts.
    pub fn chart_signature(&self) -> String {
        self.chart_types()
            .map(|chart_type| chart_type.code())
            .collect::<Vec<_>>()
            .join("/")
    }

    pub fn representative_chart(&self) -> Option<TaggedChart<'_>> {
        representative_chart(self)
    }
}

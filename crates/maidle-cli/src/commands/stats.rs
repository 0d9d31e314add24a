//! Catalog statistics.

use std::collections::BTreeMap;

use anyhow::Result;
use maidle::{Catalog, era_of};
use serde::Serialize;

use crate::cli_utils::open_catalog;

#[derive(Debug, Serialize)]
struct EraStats {
    era: i64,
    title: Option<String>,
    songs: usize,
}

#[derive(Debug, Serialize)]
struct CatalogStats {
    songs: usize,
    versions: usize,
    /// Songs per chart-type code
    chart_types: BTreeMap<String, usize>,
    eras: Vec<EraStats>,
    /// Songs whose version is missing or non-numeric
    unversioned: usize,
}

fn collect(catalog: &Catalog) -> CatalogStats {
    let mut chart_types = BTreeMap::new();
    let mut per_era: BTreeMap<i64, usize> = BTreeMap::new();
    let mut unversioned = 0;

    for song in catalog.songs() {
        for chart_type in song.chart_types() {
            *chart_types.entry(chart_type.code().into_owned()).or_insert(0) += 1;
        }
        match song.version.as_ref().and_then(|v| v.as_int()).and_then(era_of) {
            Some(era) => *per_era.entry(era).or_insert(0) += 1,
            None => unversioned += 1,
        }
    }

    let eras = per_era
        .into_iter()
        .map(|(era, songs)| EraStats {
            era,
            title: catalog.versions().title(era).map(str::to_owned),
            songs,
        })
        .collect();

    CatalogStats {
        songs: catalog.len(),
        versions: catalog.versions().len(),
        chart_types,
        eras,
        unversioned,
    }
}

pub fn run(data: &str, json: bool) -> Result<()> {
    let catalog = open_catalog(data)?;
    let stats = collect(&catalog);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Songs: {}", stats.songs);
    println!("Versions: {}", stats.versions);
    println!("Chart types:");
    for (code, count) in &stats.chart_types {
        println!("  {:<8} {}", code, count);
    }
    println!("Eras:");
    for era in &stats.eras {
        let title = era.title.as_deref().unwrap_or("(untitled)");
        println!("  {:>6} {:<24} {}", era.era, title, era.songs);
    }
    if stats.unversioned > 0 {
        println!("Unversioned: {}", stats.unversioned);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect() {
        let catalog = Catalog::from_json_str(
            r#"{
                "songs": [
                    {"id": 1, "title": "A", "version": 10010,
                     "difficulties": {"standard": [{"difficulty": 3}], "dx": [{"difficulty": 3}]}},
                    {"id": 2, "title": "B", "version": 10099, "difficulties": {"dx": [{"difficulty": 3}]}},
                    {"id": 3, "title": "C", "version": "?", "difficulties": {"dx": []}}
                ],
                "versions": [{"version": 10000, "title": "maimai"}]
            }"#,
        )
        .unwrap();

        let stats = collect(&catalog);
        assert_eq!(stats.songs, 3);
        assert_eq!(stats.chart_types.get("SD"), Some(&1));
        assert_eq!(stats.chart_types.get("DX"), Some(&2));
        assert_eq!(stats.eras.len(), 1);
        assert_eq!(stats.eras[0].songs, 2);
        assert_eq!(stats.eras[0].title.as_deref(), Some("maimai"));
        assert_eq!(stats.unversioned, 1);
    }
}

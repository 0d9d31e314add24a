use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Chart-type group a chart belongs to (the keys of a song's `difficulties`).
///
/// The three labels the catalog uses (`standard`, `dx`, `utage`) get a fixed
/// two-letter code; anything else, including other spellings of those, is
/// kept verbatim and coded by its upper-cased label. Distinct labels always
/// map to distinct variants, so no chart group is merged into another. The derived ordering (Standard,
/// Deluxe, Utage, then other labels alphabetically) is the display order of
/// chart-type signatures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChartType {
    Standard,
    Deluxe,
    Utage,
    Other(String),
}

impl ChartType {
    /// Label as written in the catalog.
    pub fn label(&self) -> &str {
        match self {
            Self::Standard => "standard",
            Self::Deluxe => "dx",
            Self::Utage => "utage",
            Self::Other(label) => label,
        }
    }

    /// Short code used in chart-type signatures (e.g. "SD", "DX").
    pub fn code(&self) -> Cow<'_, str> {
        match self {
            Self::Standard => Cow::Borrowed("SD"),
            Self::Deluxe => Cow::Borrowed("DX"),
            Self::Utage => Cow::Borrowed("UT"),
            Self::Other(label) => Cow::Owned(label.to_uppercase()),
        }
    }
}

impl From<String> for ChartType {
    fn from(label: String) -> Self {
        match label.as_str() {
            "standard" => Self::Standard,
            "dx" => Self::Deluxe,
            "utage" => Self::Utage,
            _ => Self::Other(label),
        }
    }
}

impl From<&str> for ChartType {
    fn from(label: &str) -> Self {
        Self::from(label.to_owned())
    }
}

impl From<ChartType> for String {
    fn from(chart_type: ChartType) -> Self {
        match chart_type {
            ChartType::Other(label) => label,
            known => known.label().to_owned(),
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(ChartType::from("standard"), ChartType::Standard);
        assert_eq!(ChartType::from("dx"), ChartType::Deluxe);
        assert_eq!(ChartType::from("utage"), ChartType::Utage);
    }

    #[test]
    fn test_other_spellings_stay_distinct() {
        for label in ["DX", "deluxe", "std", "sd", "Standard"] {
            let chart_type = ChartType::from(label);
            assert_eq!(chart_type, ChartType::Other(label.to_string()));
            assert_eq!(String::from(chart_type), label);
        }
    }

    #[test]
    fn test_unknown_label_is_kept() {
        let chart_type = ChartType::from("festival");
        assert_eq!(chart_type, ChartType::Other("festival".to_string()));
        assert_eq!(chart_type.code(), "FESTIVAL");
        assert_eq!(chart_type.label(), "festival");
    }

    #[test]
    fn test_ordering() {
        let mut types = vec![
            ChartType::from("zeta"),
            ChartType::Deluxe,
            ChartType::from("alpha"),
            ChartType::Standard,
            ChartType::Utage,
        ];
        types.sort();
        let codes: Vec<_> = types.iter().map(|t| t.code().into_owned()).collect();
        assert_eq!(codes, ["SD", "DX", "UT", "ALPHA", "ZETA"]);
    }

    #[test]
    fn test_map_key_round_trip() {
        let map: std::collections::BTreeMap<ChartType, u8> =
            serde_json::from_str(r#"{"dx": 1, "standard": 2}"#).unwrap();
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, [ChartType::Standard, ChartType::Deluxe]);
        assert_eq!(
            serde_json::to_string(&map).unwrap(),
            r#"{"standard":2,"dx":1}"#
        );
    }

    #[test]
    fn test_map_keeps_every_label() {
        let map: std::collections::BTreeMap<ChartType, u8> =
            serde_json::from_str(r#"{"dx": 1, "deluxe": 2, "DX": 3}"#).unwrap();
        assert_eq!(map.len(), 3);
        assert_eq!(map[&ChartType::Deluxe], 1);
        assert_eq!(
            serde_json::to_string(&map).unwrap(),
            r#"{"dx":1,"DX":3,"deluxe":2}"#
        );
    }
}

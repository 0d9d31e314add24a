use serde::{Deserialize, Serialize};

use crate::chart::{ChartType, Difficulty, Scalar};

/// One playable chart of a song.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    /// Difficulty tier ordinal (0 = BASIC .. 4 = Re:MASTER)
    pub difficulty: Option<Scalar>,
    /// Fine-grained level within the tier, e.g. 13.6
    pub level_value: Option<Scalar>,
    pub note_designer: Option<String>,
}

impl Chart {
    /// Tier ordinal used for ranking; missing or non-numeric reads as -1.
    pub fn ordinal(&self) -> i64 {
        self.difficulty
            .as_ref()
            .and_then(Scalar::as_int)
            .unwrap_or(-1)
    }

    /// Level used for ranking; missing or non-numeric reads as 0.
    pub fn level(&self) -> f64 {
        self.level_value
            .as_ref()
            .and_then(Scalar::as_float)
            .unwrap_or(0.0)
    }

    pub fn tier(&self) -> Option<Difficulty> {
        self.difficulty
            .as_ref()
            .and_then(Scalar::as_int)
            .and_then(Difficulty::from_ordinal)
    }
}

/// A chart flattened out of its song, tagged with its chart-type group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaggedChart<'a> {
    pub chart_type: &'a ChartType,
    pub chart: &'a Chart,
}

impl TaggedChart<'_> {
    /// Tier name for display: the named tier when known, the raw ordinal
    /// otherwise.
    pub fn tier_name(&self) -> Option<String> {
        match self.chart.tier() {
            Some(tier) => Some(tier.to_string()),
            None => self.chart.difficulty.as_ref().map(Scalar::to_string),
        }
    }
}

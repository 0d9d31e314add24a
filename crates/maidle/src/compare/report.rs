use std::fmt;

use serde::Serialize;
use strum::IntoStaticStr;

use crate::catalog::VersionTable;
use crate::chart::{Scalar, Song};
use crate::compare::{Mark, bpm_mark, equality_mark, level_mark, version_mark};
use crate::config::catalog::MISSING_VALUE;

/// Attributes shown in a guess report, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, IntoStaticStr)]
pub enum Field {
    #[strum(serialize = "Title")]
    Title,
    #[strum(serialize = "Chart types")]
    ChartTypes,
    #[strum(serialize = "Artist")]
    Artist,
    #[strum(serialize = "Genre")]
    Genre,
    #[strum(serialize = "Version")]
    Version,
    #[strum(serialize = "BPM")]
    Bpm,
    #[strum(serialize = "Note designer")]
    NoteDesigner,
    #[strum(serialize = "Level")]
    Level,
}

impl Field {
    pub fn label(&self) -> &'static str {
        self.into()
    }

    /// Glyph for a mark on this field. Versions read as a timeline
    /// (left/right), numeric fields as a scale (up/down).
    pub fn glyph(&self, mark: Mark) -> &'static str {
        match (mark, self) {
            (Mark::Equal, _) => "✅",
            (Mark::Mismatch, _) => "❌",
            (Mark::GoHigher, Self::Version) => "➡️",
            (Mark::GoLower, Self::Version) => "⬅️",
            (Mark::GoHigher, _) => "⬆️",
            (Mark::GoLower, _) => "⬇️",
        }
    }
}

/// One line of a guess report: the mark plus the guessed song's value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldComparison {
    pub field: Field,
    pub mark: Mark,
    pub value: String,
}

impl fmt::Display for FieldComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}{}",
            self.field.label(),
            self.field.glyph(self.mark),
            self.value
        )
    }
}

fn show_text(value: Option<&str>) -> String {
    value.unwrap_or(MISSING_VALUE).to_string()
}

fn show_scalar(value: Option<&Scalar>) -> String {
    value.map_or_else(|| MISSING_VALUE.to_string(), Scalar::to_string)
}

/// Compare every reported attribute of `guess` against `target`.
pub fn compare_songs(guess: &Song, target: &Song, versions: &VersionTable) -> Vec<FieldComparison> {
    let guess_chart = guess.representative_chart().map(|c| c.chart);
    let target_chart = target.representative_chart().map(|c| c.chart);

    let guess_designer = guess_chart.and_then(|c| c.note_designer.as_deref());
    let target_designer = target_chart.and_then(|c| c.note_designer.as_deref());
    let guess_level = guess_chart.and_then(|c| c.level_value.as_ref());
    let target_level = target_chart.and_then(|c| c.level_value.as_ref());

    let guess_signature = guess.chart_signature();
    let target_signature = target.chart_signature();

    vec![
        FieldComparison {
            field: Field::Title,
            mark: equality_mark(Some(guess.title.as_str()), Some(target.title.as_str())),
            value: guess.title.clone(),
        },
        FieldComparison {
            field: Field::ChartTypes,
            mark: equality_mark(Some(guess_signature.as_str()), Some(target_signature.as_str())),
            value: if guess_signature.is_empty() {
                MISSING_VALUE.to_string()
            } else {
                guess_signature
            },
        },
        FieldComparison {
            field: Field::Artist,
            mark: equality_mark(guess.artist.as_deref(), target.artist.as_deref()),
            value: show_text(guess.artist.as_deref()),
        },
        FieldComparison {
            field: Field::Genre,
            mark: equality_mark(guess.genre.as_deref(), target.genre.as_deref()),
            value: show_text(guess.genre.as_deref()),
        },
        FieldComparison {
            field: Field::Version,
            mark: version_mark(guess.version.as_ref(), target.version.as_ref()),
            value: versions.era_title(guess.version.as_ref()),
        },
        FieldComparison {
            field: Field::Bpm,
            mark: bpm_mark(guess.bpm.as_ref(), target.bpm.as_ref()),
            value: show_scalar(guess.bpm.as_ref()),
        },
        FieldComparison {
            field: Field::NoteDesigner,
            mark: equality_mark(guess_designer, target_designer),
            value: show_text(guess_designer),
        },
        FieldComparison {
            field: Field::Level,
            mark: level_mark(guess_level, target_level),
            value: show_scalar(guess_level),
        },
    ]
}

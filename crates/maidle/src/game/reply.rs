//! Replies returned to the host, with their chat-text rendering.

use std::fmt;

use serde::Serialize;

use crate::catalog::VersionTable;
use crate::chart::{Scalar, Song};
use crate::compare::FieldComparison;
use crate::config::catalog::MISSING_VALUE;
use crate::error::GameError;

pub const HELP_TEXT: &str = "\
/maidle start - start a new round
/maidle <title/alias/ID> - make a guess
/maidle end - end the round and reveal the answer
/maidle help - show this help";

/// Representative chart details shown when the answer is revealed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevealedChart {
    pub chart_type: String,
    pub tier: Option<String>,
    pub note_designer: Option<String>,
    pub level: Option<Scalar>,
}

/// Full details of a target song.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reveal {
    pub title: String,
    pub id: String,
    pub artist: Option<String>,
    pub genre: Option<String>,
    pub version: String,
    pub bpm: Option<Scalar>,
    pub chart: Option<RevealedChart>,
}

impl Reveal {
    pub fn of(song: &Song, versions: &VersionTable) -> Self {
        let chart = song.representative_chart().map(|tagged| RevealedChart {
            chart_type: tagged.chart_type.code().into_owned(),
            tier: tagged.tier_name(),
            note_designer: tagged.chart.note_designer.clone(),
            level: tagged.chart.level_value.clone(),
        });
        Self {
            title: song.title.clone(),
            id: song.id.to_string(),
            artist: song.artist.clone(),
            genre: song.genre.clone(),
            version: versions.era_title(song.version.as_ref()),
            bpm: song.bpm.clone(),
            chart,
        }
    }
}

fn or_missing<T: ToString>(value: Option<&T>) -> String {
    value.map_or_else(|| MISSING_VALUE.to_string(), T::to_string)
}

impl fmt::Display for Reveal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chart = self.chart.as_ref();
        writeln!(f, "🎵 Answer:")?;
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Artist: {}", or_missing(self.artist.as_ref()))?;
        writeln!(f, "Genre: {}", or_missing(self.genre.as_ref()))?;
        writeln!(f, "Version: {}", self.version)?;
        writeln!(f, "BPM: {}", or_missing(self.bpm.as_ref()))?;
        if let Some(chart) = chart {
            let tier = chart.tier.as_deref().unwrap_or(MISSING_VALUE);
            writeln!(f, "Chart: {} {}", chart.chart_type, tier)?;
        }
        writeln!(
            f,
            "Note designer: {}",
            or_missing(chart.and_then(|c| c.note_designer.as_ref()))
        )?;
        write!(f, "Level: {}", or_missing(chart.and_then(|c| c.level.as_ref())))
    }
}

/// How a resolved guess left the round.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GuessOutcome {
    /// Correct guess; the round is over
    Correct,
    /// Wrong guess with attempts left
    InProgress,
    /// Wrong guess that used the last attempt; the round is over
    OutOfTries(Reveal),
}

/// Result of a resolved guess.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuessReport {
    pub comparisons: Vec<FieldComparison>,
    pub tries_remaining: u32,
    pub outcome: GuessOutcome,
}

impl GuessReport {
    pub fn is_finished(&self) -> bool {
        !matches!(self.outcome, GuessOutcome::InProgress)
    }
}

impl fmt::Display for GuessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "🎯 Guess result ({} tries left):", self.tries_remaining)?;
        for line in &self.comparisons {
            write!(f, "\n{}", line)?;
        }
        match &self.outcome {
            GuessOutcome::Correct => write!(f, "\n🎉 Correct! Game over."),
            GuessOutcome::InProgress => Ok(()),
            GuessOutcome::OutOfTries(reveal) => write!(f, "\n😢 Out of tries.\n{}", reveal),
        }
    }
}

/// Reply to a single command.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Help,
    Started { max_tries: u32 },
    Guessed(GuessReport),
    Ended(Reveal),
    Rejected(GameError),
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Help => f.write_str(HELP_TEXT),
            Self::Started { max_tries } => write!(
                f,
                "🎵 Maidle started! You have {} tries. Use /maidle <title/alias/ID> to guess.",
                max_tries
            ),
            Self::Guessed(report) => write!(f, "{}", report),
            Self::Ended(reveal) => write!(f, "{}", reveal),
            Self::Rejected(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{Chart, ChartType};
    use crate::compare::{Field, Mark};

    fn song() -> Song {
        let mut song = Song {
            id: Scalar::from(1),
            title: "Alpha".to_string(),
            artist: Some("Composer".to_string()),
            version: Some(Scalar::from(10050)),
            bpm: Some(Scalar::from(150)),
            ..Default::default()
        };
        song.difficulties.insert(
            ChartType::Deluxe,
            vec![Chart {
                difficulty: Some(Scalar::from(3)),
                level_value: Some(Scalar::from(13.5)),
                note_designer: Some("Designer".to_string()),
            }],
        );
        song
    }

    fn versions() -> VersionTable {
        [(10000, "maimai".to_string())].into_iter().collect()
    }

    #[test]
    fn test_reveal_of_song() {
        let reveal = Reveal::of(&song(), &versions());
        assert_eq!(reveal.id, "1");
        assert_eq!(reveal.version, "maimai");
        let chart = reveal.chart.unwrap();
        assert_eq!(chart.chart_type, "DX");
        assert_eq!(chart.tier.as_deref(), Some("MASTER"));
        assert_eq!(chart.note_designer.as_deref(), Some("Designer"));
        assert_eq!(chart.level, Some(Scalar::from(13.5)));
    }

    #[test]
    fn test_reveal_rendering() {
        let text = Reveal::of(&song(), &versions()).to_string();
        assert_eq!(
            text,
            "🎵 Answer:\nTitle: Alpha\nID: 1\nArtist: Composer\nGenre: -\nVersion: maimai\n\
             BPM: 150\nChart: DX MASTER\nNote designer: Designer\nLevel: 13.5"
        );
    }

    #[test]
    fn test_reveal_rendering_without_charts() {
        let bare = Song {
            id: Scalar::from(2),
            title: "Bare".to_string(),
            ..Default::default()
        };
        let text = Reveal::of(&bare, &versions()).to_string();
        assert!(!text.contains("Chart:"));
        assert!(text.ends_with("Note designer: -\nLevel: -"));
    }

    #[test]
    fn test_guess_report_rendering() {
        let report = GuessReport {
            comparisons: vec![FieldComparison {
                field: Field::Bpm,
                mark: Mark::GoLower,
                value: "170".to_string(),
            }],
            tries_remaining: 9,
            outcome: GuessOutcome::InProgress,
        };
        assert_eq!(report.to_string(), "🎯 Guess result (9 tries left):\nBPM: ⬇️170");
        assert!(!report.is_finished());
    }

    #[test]
    fn test_reply_rendering() {
        assert_eq!(Reply::Help.to_string(), HELP_TEXT);
        assert!(
            Reply::Started { max_tries: 10 }
                .to_string()
                .contains("10 tries")
        );
        assert_eq!(
            Reply::Rejected(GameError::NoActiveSession).to_string(),
            GameError::NoActiveSession.to_string()
        );
    }
}

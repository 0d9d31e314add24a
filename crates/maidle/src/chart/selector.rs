//! Representative chart selection.
//!
//! Designer and level comparisons use one chart per song: the hardest tier,
//! ties broken by the highest level. Charts that tie on both keys resolve to
//! the first one in flattened order (chart-type order, then list order).

use std::cmp::Ordering;

use crate::chart::{Song, TaggedChart};

/// Descending two-key order: higher tier first, then higher level.
fn by_rank_desc(a: &TaggedChart<'_>, b: &TaggedChart<'_>) -> Ordering {
    b.chart
        .ordinal()
        .cmp(&a.chart.ordinal())
        .then_with(|| b.chart.level().total_cmp(&a.chart.level()))
}

/// Pick the representative chart of a song, or `None` if it has no charts.
pub fn representative_chart(song: &Song) -> Option<TaggedChart<'_>> {
    // min_by keeps the first of equal elements
    song.charts().min_by(by_rank_desc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{Chart, ChartType, Scalar};

    fn chart(difficulty: i64, level: f64, designer: &str) -> Chart {
        Chart {
            difficulty: Some(Scalar::from(difficulty)),
            level_value: Some(Scalar::from(level)),
            note_designer: Some(designer.to_string()),
        }
    }

    fn song_with(groups: Vec<(ChartType, Vec<Chart>)>) -> Song {
        Song {
            id: Scalar::from(1),
            title: "Test".to_string(),
            difficulties: groups.into_iter().collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_charts() {
        let song = song_with(vec![]);
        assert!(representative_chart(&song).is_none());
    }

    #[test]
    fn test_highest_difficulty_wins() {
        let song = song_with(vec![(
            ChartType::Standard,
            vec![chart(2, 13.9, "a"), chart(3, 12.5, "b"), chart(1, 9.0, "c")],
        )]);
        let picked = representative_chart(&song).unwrap();
        assert_eq!(picked.chart.note_designer.as_deref(), Some("b"));
    }

    #[test]
    fn test_tie_broken_by_level_across_types() {
        let song = song_with(vec![
            (ChartType::Standard, vec![chart(3, 13.2, "sd master")]),
            (ChartType::Deluxe, vec![chart(3, 13.8, "dx master")]),
        ]);
        let picked = representative_chart(&song).unwrap();
        assert_eq!(picked.chart_type, &ChartType::Deluxe);
        assert_eq!(picked.chart.note_designer.as_deref(), Some("dx master"));
    }

    #[test]
    fn test_full_tie_keeps_first_in_flattened_order() {
        let song = song_with(vec![
            (ChartType::Deluxe, vec![chart(4, 14.0, "dx")]),
            (
                ChartType::Standard,
                vec![chart(4, 14.0, "sd first"), chart(4, 14.0, "sd second")],
            ),
        ]);
        let picked = representative_chart(&song).unwrap();
        assert_eq!(picked.chart_type, &ChartType::Standard);
        assert_eq!(picked.chart.note_designer.as_deref(), Some("sd first"));
    }

    #[test]
    fn test_missing_difficulty_ranks_lowest() {
        let unranked = Chart {
            level_value: Some(Scalar::from(15.0)),
            note_designer: Some("unranked".to_string()),
            ..Default::default()
        };
        let song = song_with(vec![(ChartType::Standard, vec![unranked, chart(0, 2.0, "basic")])]);
        let picked = representative_chart(&song).unwrap();
        assert_eq!(picked.chart.note_designer.as_deref(), Some("basic"));
    }
}

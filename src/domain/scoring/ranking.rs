//! Ranking of scored options with tie detection.

use std::cmp::Ordering;

use serde::Serialize;

/// Absolute tolerance under which two scores count as tied.
pub const SCORE_TIE_TOLERANCE: f64 = 1e-9;

/// One option's computed results, before ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredOption {
    pub name: String,
    pub expected_value: f64,
    pub variance: f64,
    pub score: f64,
}

/// One option's position in a ranking.
///
/// Options tied within [`SCORE_TIE_TOLERANCE`] share a rank and are flagged,
/// so callers can render a tie notice instead of presenting an arbitrary
/// winner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedOption {
    pub rank: usize,
    pub name: String,
    pub expected_value: f64,
    pub variance: f64,
    pub score: f64,
    pub tied: bool,
}

/// A complete ranking for one evaluation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking {
    pub entries: Vec<RankedOption>,
    /// True when the top rank is shared by more than one option.
    pub top_tied: bool,
}

/// Sorts options by score descending and assigns ranks.
///
/// The sort is stable, so options with exactly equal scores keep their input
/// order. Tie groups are formed by comparing each entry against its group's
/// leading score; members of a group share the leader's 1-based position as
/// their rank, and the next distinct score resumes at its own position
/// (ranks 1, 1, 3 for a two-way tie at the top).
///
/// A single pass over a fixed batch; an empty batch yields an empty ranking.
pub fn rank_options(options: Vec<ScoredOption>) -> Ranking {
    let mut sorted = options;
    // NaN scores compare as equal here, which keeps the sort total and stable.
    sorted.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    let mut entries: Vec<RankedOption> = Vec::with_capacity(sorted.len());
    let mut group_start = 0;
    let mut group_score = 0.0;

    for (index, option) in sorted.into_iter().enumerate() {
        if index == 0 || !scores_tied(group_score, option.score) {
            group_start = index;
            group_score = option.score;
        }

        entries.push(RankedOption {
            rank: group_start + 1,
            name: option.name,
            expected_value: option.expected_value,
            variance: option.variance,
            score: option.score,
            tied: false,
        });
    }

    for index in 0..entries.len() {
        let shares_previous = index > 0 && entries[index - 1].rank == entries[index].rank;
        let shares_next =
            index + 1 < entries.len() && entries[index + 1].rank == entries[index].rank;
        entries[index].tied = shares_previous || shares_next;
    }

    let top_tied = entries.first().map(|entry| entry.tied).unwrap_or(false);

    Ranking { entries, top_tied }
}

fn scores_tied(a: f64, b: f64) -> bool {
    (a - b).abs() <= SCORE_TIE_TOLERANCE
}

/// Per-player aggregation of accepted plays.
///
/// Single left-to-right fold over the score log: O(n) in the number of rows.
use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::registry::Registry;
use crate::types::{AggregateMode, PlayerAggregate, ScoreRecord};

/// Counts of what happened to each score row. Dropped rows are normal, not errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AggregationReport {
    pub accepted: usize,
    /// `player_id` not present in the registry.
    pub unknown_player: usize,
    /// `played_at` earlier than the player's registration.
    pub before_registration: usize,
}

impl AggregationReport {
    pub fn dropped(&self) -> usize {
        self.unknown_player + self.before_registration
    }
}

impl PlayerAggregate {
    fn first_play(registered_at: NaiveDateTime, score: u64) -> Self {
        PlayerAggregate {
            registered_at,
            play_count: 1,
            best_score: score,
            total_score: score,
            average_score: score,
        }
    }

    fn record_play(&mut self, score: u64) {
        self.play_count += 1;
        self.total_score = self.total_score.saturating_add(score);
        self.best_score = self.best_score.max(score);
        self.average_score = round_half_even(self.total_score, self.play_count);
    }

    /// The statistic ranked under `mode`.
    pub fn score_for(&self, mode: AggregateMode) -> u64 {
        match mode {
            AggregateMode::Highscore => self.best_score,
            AggregateMode::Average => self.average_score,
        }
    }
}

/// `numerator / denominator` rounded to the nearest integer, ties to even.
///
/// Exact integer arithmetic: 5/2 -> 2, 7/2 -> 4, 11/4 -> 3.
pub fn round_half_even(numerator: u64, denominator: u64) -> u64 {
    debug_assert!(denominator > 0);
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    // remainder < denominator, so comparing remainder with denominator - remainder
    // avoids doubling and cannot overflow.
    let upper = denominator - remainder;
    if remainder > upper || (remainder == upper && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    }
}

/// Fold the score log into per-player aggregates.
pub fn aggregate(scores: &[ScoreRecord], registry: &Registry) -> HashMap<String, PlayerAggregate> {
    aggregate_with_report(scores, registry).0
}

/// Same as `aggregate()`, also returning how many rows were accepted or dropped.
///
/// A row is accepted iff its player is registered and it was played at or after
/// that player's registration.
pub fn aggregate_with_report(
    scores: &[ScoreRecord],
    registry: &Registry,
) -> (HashMap<String, PlayerAggregate>, AggregationReport) {
    scores.iter().fold(
        (HashMap::new(), AggregationReport::default()),
        |(mut aggregates, mut report), play| {
            let Some(registered_at) = registry.registered_at(&play.player_id) else {
                report.unknown_player += 1;
                return (aggregates, report);
            };
            if play.played_at < registered_at {
                report.before_registration += 1;
                return (aggregates, report);
            }

            report.accepted += 1;
            aggregates
                .entry(play.player_id.clone())
                .and_modify(|agg: &mut PlayerAggregate| agg.record_play(play.score))
                .or_insert_with(|| PlayerAggregate::first_play(registered_at, play.score));
            (aggregates, report)
        },
    )
}

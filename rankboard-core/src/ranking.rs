/// Ranking extraction: filter, sort, competition ranks, threshold cutoff.
use std::cmp::Reverse;
use std::collections::HashMap;

use crate::registry::Registry;
use crate::types::{AggregateMode, PlayerAggregate, RankedRow, RankingOptions};

/// Build the leaderboard from aggregated plays.
///
/// Ordering: selected score descending, then earlier registration, then
/// `player_id` ascending. Ranks follow standard competition ranking
/// (100, 100, 90 -> 1, 1, 3). Rows stop once the displayed rank exceeds
/// `options.threshold`; a tied group sharing an in-threshold rank is never split.
///
/// In `Average` mode, players with fewer than `options.min_plays` accepted plays
/// are excluded before sorting.
pub fn extract(
    registry: &Registry,
    aggregates: &HashMap<String, PlayerAggregate>,
    options: &RankingOptions,
) -> Vec<RankedRow> {
    let mode = options.mode;
    let mut candidates: Vec<(&str, &PlayerAggregate)> = aggregates
        .iter()
        .filter(|(_, agg)| mode != AggregateMode::Average || agg.play_count >= options.min_plays)
        .map(|(id, agg)| (id.as_str(), agg))
        .collect();

    candidates.sort_unstable_by_key(|&(id, agg)| {
        (Reverse(agg.score_for(mode)), agg.registered_at, id)
    });

    let mut rows = Vec::new();
    let mut rank = 0;
    let mut previous_score = None;

    for (idx, (player_id, agg)) in candidates.into_iter().enumerate() {
        let score = agg.score_for(mode);
        if previous_score != Some(score) {
            rank = idx + 1;
        }
        if rank > options.threshold {
            break;
        }
        previous_score = Some(score);

        // Every aggregate comes from a registered player; this only guards
        // against a mismatched registry being passed in.
        let Some(handle_name) = registry.handle_name(player_id) else {
            continue;
        };

        rows.push(RankedRow {
            rank,
            player_id: player_id.to_string(),
            handle_name: handle_name.to_string(),
            score,
        });
    }

    rows
}

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;

use crate::constants::{DEFAULT_MIN_PLAYS, DEFAULT_RANKING_THRESHOLD};
use crate::error::LeaderboardError;

/// One validated row of the entry log.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntryRecord {
    pub registered_at: NaiveDateTime,
    pub player_id: String,
    pub handle_name: String,
}

/// One validated row of the score log.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreRecord {
    pub played_at: NaiveDateTime,
    pub player_id: String,
    pub score: u64,
}

/// A player's registry row: earliest registration and latest handle name.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Registration {
    pub registered_at: NaiveDateTime,
    pub handle_name: String,
}

/// Running statistics over a player's accepted plays.
///
/// Only exists for players with at least one accepted play, so
/// `play_count >= 1` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerAggregate {
    /// Copied from the registry; secondary sort key.
    pub registered_at: NaiveDateTime,
    pub play_count: u64,
    pub best_score: u64,
    pub total_score: u64,
    /// `total_score / play_count`, rounded half to even.
    pub average_score: u64,
}

/// Which statistic a ranking is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AggregateMode {
    /// Best single score.
    #[default]
    Highscore,
    /// Rounded mean score, restricted to players with enough plays.
    Average,
}

impl AggregateMode {
    pub fn as_str(self) -> &'static str {
        match self {
            AggregateMode::Highscore => "highscore",
            AggregateMode::Average => "average",
        }
    }
}

impl fmt::Display for AggregateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AggregateMode {
    type Err = LeaderboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "highscore" => Ok(AggregateMode::Highscore),
            "average" => Ok(AggregateMode::Average),
            other => Err(LeaderboardError::InvalidMode(other.to_string())),
        }
    }
}

/// Parameters for `ranking::extract()`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankingOptions {
    pub mode: AggregateMode,
    /// Minimum accepted plays to be ranked. Only applies in `Average` mode.
    pub min_plays: u64,
    /// Highest displayed rank to emit.
    pub threshold: usize,
}

impl Default for RankingOptions {
    fn default() -> Self {
        RankingOptions {
            mode: AggregateMode::Highscore,
            min_plays: DEFAULT_MIN_PLAYS,
            threshold: DEFAULT_RANKING_THRESHOLD,
        }
    }
}

/// One line of the final leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedRow {
    pub rank: usize,
    pub player_id: String,
    pub handle_name: String,
    pub score: u64,
}

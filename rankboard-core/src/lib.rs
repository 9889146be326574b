//! rankboard-core: Pure-computation leaderboard engine.
//!
//! Entry log + score log → validated records → registry and per-player
//! aggregates → competition-ranked rows. No IO, no printing, no process exit:
//! callers hand in log text and get rows or a `LeaderboardError` back.
//!
//! # Quick start
//!
//! ```rust
//! use rankboard_core::{run_leaderboard, AggregateMode, RankingOptions};
//!
//! let entries = "create_timestamp,player_id,handle_name\n\
//!                2024-01-01 00:00:00,p1,Alice\n\
//!                2024-01-01 00:00:01,p2,Bob\n";
//! let scores = "create_timestamp,player_id,score\n\
//!               2024-01-02 10:00:00,p1,100\n\
//!               2024-01-02 11:00:00,p1,150\n\
//!               2024-01-02 12:00:00,p2,150\n";
//!
//! let board = run_leaderboard(entries, scores, &RankingOptions {
//!     mode: AggregateMode::Highscore,
//!     min_plays: 10,
//!     threshold: 10,
//! })
//! .unwrap();
//!
//! for row in &board.rows {
//!     println!("{},{},{},{}", row.rank, row.player_id, row.handle_name, row.score);
//! }
//! assert_eq!(board.rows.len(), 2);
//! assert!(board.rows.iter().all(|r| r.rank == 1));
//! ```

pub mod aggregate;
pub mod constants;
pub mod error;
pub mod ranking;
pub mod registry;
pub mod schema;
pub mod types;

// Re-export primary public API at crate root.
pub use aggregate::{AggregationReport, aggregate, aggregate_with_report, round_half_even};
pub use error::{LeaderboardError, LogKind, Result};
pub use ranking::extract;
pub use registry::Registry;
pub use schema::{parse_entry_log, parse_score_log, validate};
pub use types::{
    AggregateMode, EntryRecord, PlayerAggregate, RankedRow, RankingOptions, Registration,
    ScoreRecord,
};

/// Output of `run_leaderboard()`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leaderboard {
    /// Ranked rows in rank order.
    pub rows: Vec<RankedRow>,
    /// Data rows in the entry log.
    pub entry_rows: usize,
    /// Distinct registered players.
    pub registered_players: usize,
    /// Players with at least one accepted play, before any min-plays filter.
    pub aggregated_players: usize,
    pub report: AggregationReport,
}

/// Run the whole pipeline on the text of both logs.
///
/// Both logs are fully validated before anything is aggregated, so a bad row
/// anywhere yields an error and no rows.
pub fn run_leaderboard(
    entry_log: &str,
    score_log: &str,
    options: &RankingOptions,
) -> Result<Leaderboard> {
    let entries = parse_entry_log(entry_log)?;
    let scores = parse_score_log(score_log)?;

    let registry = Registry::build(&entries);
    let (aggregates, report) = aggregate_with_report(&scores, &registry);
    let rows = extract(&registry, &aggregates, options);

    Ok(Leaderboard {
        rows,
        entry_rows: entries.len(),
        registered_players: registry.len(),
        aggregated_players: aggregates.len(),
        report,
    })
}

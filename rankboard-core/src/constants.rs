/// Expected header of the entry log, column for column.
pub const ENTRY_LOG_HEADER: [&str; 3] = ["create_timestamp", "player_id", "handle_name"];

/// Expected header of the score log, column for column.
pub const SCORE_LOG_HEADER: [&str; 3] = ["create_timestamp", "player_id", "score"];

/// Header line of the emitted ranking.
pub const RANKING_HEADER: [&str; 4] = ["rank", "player_id", "handle_name", "score"];

/// Strict timestamp layout shared by both logs: `YYYY-MM-DD HH:MM:SS`.
/// No timezone, no fractional seconds.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Maximum length of a `player_id` or `handle_name`.
pub const MAX_IDENTIFIER_LEN: usize = 20;

/// Highest displayed rank that still gets emitted.
///
/// A tied group whose shared rank is within the threshold is emitted in full,
/// so the output can hold more than this many rows.
pub const DEFAULT_RANKING_THRESHOLD: usize = 10;

/// Minimum accepted plays for a player to appear in the `average` ranking.
/// Players below it are excluded outright, not ranked low.
pub const DEFAULT_MIN_PLAYS: u64 = 10;

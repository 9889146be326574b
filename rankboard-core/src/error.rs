use std::fmt;

/// Which of the two input logs a row-level error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Entry,
    Score,
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogKind::Entry => f.write_str("entry log"),
            LogKind::Score => f.write_str("score log"),
        }
    }
}

/// Every way a leaderboard run can fail.
///
/// All variants are fatal for the run: no partial ranking is produced.
/// Line numbers are 1-based and count the header as line 1.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeaderboardError {
    #[error("{path}: file not found or not readable ({reason})")]
    MissingFile { path: String, reason: String },

    #[error("{log}: header must be \"{expected}\", found \"{found}\"")]
    HeaderMismatch {
        log: LogKind,
        expected: String,
        found: String,
    },

    #[error("{log} line {line}: expected {expected} columns, found {found}")]
    ColumnCountMismatch {
        log: LogKind,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("{log} line {line}: invalid timestamp \"{value}\" (expected YYYY-MM-DD HH:MM:SS)")]
    TimestampFormat {
        log: LogKind,
        line: usize,
        value: String,
    },

    #[error(
        "{log} line {line}: invalid {column} \"{value}\" (1-20 characters of A-Z, a-z, 0-9, _)"
    )]
    IdentifierFormat {
        log: LogKind,
        line: usize,
        column: &'static str,
        value: String,
    },

    #[error("{log} line {line}: invalid score \"{value}\" (expected a non-negative integer)")]
    ScoreFormat {
        log: LogKind,
        line: usize,
        value: String,
    },

    #[error("unknown aggregate mode \"{0}\" (expected \"highscore\" or \"average\")")]
    InvalidMode(String),

    #[error(
        "expected 2 or 3 arguments ([highscore|average] <entry_log> <score_log>), got {0}"
    )]
    BadArgumentCount(usize),
}

pub type Result<T> = std::result::Result<T, LeaderboardError>;

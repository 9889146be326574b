/// Schema validation for the entry and score logs.
///
/// Validation is all-or-nothing: the whole log is checked before any row is
/// turned into a record, and the first violation aborts with a specific error.
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{ENTRY_LOG_HEADER, MAX_IDENTIFIER_LEN, SCORE_LOG_HEADER, TIMESTAMP_FORMAT};
use crate::error::{LeaderboardError, LogKind, Result};
use crate::types::{EntryRecord, ScoreRecord};

/// What a column must contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Timestamp,
    /// `[A-Za-z0-9_]{1,20}`. The name is used in error messages.
    Identifier(&'static str),
    Score,
}

/// Header plus per-column rules for one log.
#[derive(Debug, Clone, Copy)]
pub struct LogSchema {
    pub kind: LogKind,
    pub header: &'static [&'static str],
    pub columns: &'static [Column],
}

pub const ENTRY_LOG_SCHEMA: LogSchema = LogSchema {
    kind: LogKind::Entry,
    header: &ENTRY_LOG_HEADER,
    columns: &[
        Column::Timestamp,
        Column::Identifier("player_id"),
        Column::Identifier("handle_name"),
    ],
};

pub const SCORE_LOG_SCHEMA: LogSchema = LogSchema {
    kind: LogKind::Score,
    header: &SCORE_LOG_HEADER,
    columns: &[Column::Timestamp, Column::Identifier("player_id"), Column::Score],
};

// Hardcoded patterns: a failure here is a source bug, not bad input.
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2}$")
        .expect("hardcoded timestamp regex is invalid")
});

static IDENTIFIER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^[A-Za-z0-9_]{{1,{MAX_IDENTIFIER_LEN}}}$"))
        .expect("hardcoded identifier regex is invalid")
});

static SCORE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("hardcoded score regex is invalid"));

/// Split raw log text into rows of cells, header included.
///
/// Tolerates a leading BOM and CRLF endings. A final line terminator does not
/// produce an extra row, but blank lines elsewhere are kept so they fail the
/// column count check with their real line number.
pub fn split_rows(text: &str) -> Vec<Vec<&str>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    if text.is_empty() {
        return Vec::new();
    }
    let text = text.strip_suffix('\n').unwrap_or(text);
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).split(',').collect())
        .collect()
}

/// Check every row of a split log against `schema`.
pub fn validate(rows: &[Vec<&str>], schema: &LogSchema) -> Result<()> {
    let header = rows.first().map(Vec::as_slice).unwrap_or(&[]);
    if header != schema.header {
        return Err(LeaderboardError::HeaderMismatch {
            log: schema.kind,
            expected: schema.header.join(","),
            found: header.join(","),
        });
    }

    for (idx, row) in rows.iter().enumerate().skip(1) {
        let line = idx + 1;
        if row.len() != schema.header.len() {
            return Err(LeaderboardError::ColumnCountMismatch {
                log: schema.kind,
                line,
                expected: schema.header.len(),
                found: row.len(),
            });
        }
        for (column, value) in schema.columns.iter().zip(row) {
            match *column {
                Column::Timestamp => {
                    parse_timestamp(value, schema.kind, line)?;
                }
                Column::Identifier(name) => check_identifier(value, name, schema.kind, line)?,
                Column::Score => {
                    parse_score(value, schema.kind, line)?;
                }
            }
        }
    }
    Ok(())
}

/// Validate the whole entry log, then convert it to records.
pub fn parse_entry_log(text: &str) -> Result<Vec<EntryRecord>> {
    let rows = split_rows(text);
    validate(&rows, &ENTRY_LOG_SCHEMA)?;

    rows.iter()
        .enumerate()
        .skip(1)
        .map(|(idx, row)| -> Result<EntryRecord> {
            Ok(EntryRecord {
                registered_at: parse_timestamp(row[0], LogKind::Entry, idx + 1)?,
                player_id: row[1].to_string(),
                handle_name: row[2].to_string(),
            })
        })
        .collect()
}

/// Validate the whole score log, then convert it to records.
pub fn parse_score_log(text: &str) -> Result<Vec<ScoreRecord>> {
    let rows = split_rows(text);
    validate(&rows, &SCORE_LOG_SCHEMA)?;

    rows.iter()
        .enumerate()
        .skip(1)
        .map(|(idx, row)| -> Result<ScoreRecord> {
            Ok(ScoreRecord {
                played_at: parse_timestamp(row[0], LogKind::Score, idx + 1)?,
                player_id: row[1].to_string(),
                score: parse_score(row[2], LogKind::Score, idx + 1)?,
            })
        })
        .collect()
}

/// Parse `YYYY-MM-DD HH:MM:SS` exactly.
///
/// chrono alone accepts unpadded fields, so the digit layout is matched first;
/// chrono then rejects impossible dates and times.
pub fn parse_timestamp(value: &str, log: LogKind, line: usize) -> Result<NaiveDateTime> {
    let err = || LeaderboardError::TimestampFormat {
        log,
        line,
        value: value.to_string(),
    };

    if !TIMESTAMP_REGEX.is_match(value) {
        return Err(err());
    }

    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|_| err())
}

fn check_identifier(value: &str, column: &'static str, log: LogKind, line: usize) -> Result<()> {
    if is_valid_identifier(value) {
        Ok(())
    } else {
        Err(LeaderboardError::IdentifierFormat {
            log,
            line,
            column,
            value: value.to_string(),
        })
    }
}

/// `[A-Za-z0-9_]{1,20}`, ASCII only.
pub fn is_valid_identifier(value: &str) -> bool {
    IDENTIFIER_REGEX.is_match(value)
}

/// Base-10 digits only: no sign, no decimal point, no whitespace.
pub fn parse_score(value: &str, log: LogKind, line: usize) -> Result<u64> {
    let err = || LeaderboardError::ScoreFormat {
        log,
        line,
        value: value.to_string(),
    };

    if !SCORE_REGEX.is_match(value) {
        return Err(err());
    }
    // Overflow is the only failure left.
    value.parse().map_err(|_| err())
}

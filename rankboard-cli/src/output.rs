/// Output formatting: comma-delimited rows and JSON.
use rankboard_core::constants::RANKING_HEADER;
use rankboard_core::{AggregateMode, RankedRow};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Serialize)]
struct JsonOutput<'a> {
    mode: AggregateMode,
    rankings: &'a [RankedRow],
}

/// Write the header line and one `rank,player_id,handle_name,score` line per row.
pub fn write_csv<W: Write>(out: &mut W, rows: &[RankedRow]) -> io::Result<()> {
    writeln!(out, "{}", RANKING_HEADER.join(","))?;
    for row in rows {
        writeln!(out, "{},{},{},{}", row.rank, row.player_id, row.handle_name, row.score)?;
    }
    out.flush()
}

/// Write rows as a pretty-printed JSON object.
pub fn write_json<W: Write>(
    out: &mut W,
    rows: &[RankedRow],
    mode: AggregateMode,
) -> io::Result<()> {
    let output = JsonOutput {
        mode,
        rankings: rows,
    };
    serde_json::to_writer_pretty(&mut *out, &output)?;
    writeln!(out)?;
    out.flush()
}

//! Rendering scan results for the terminal.

use anyhow::Result;
use harscan_core::filter::{FilterOutcome, MatchResult, NO_MATCHES_MESSAGE};
use harscan_core::har::UNKNOWN;
use std::io::Write;

/// One `Match Found:` block per match, or the no-match message.
pub fn write_text<W: Write>(out: &mut W, outcome: &FilterOutcome) -> Result<()> {
    match outcome {
        FilterOutcome::NoMatches => writeln!(out, "{NO_MATCHES_MESSAGE}")?,
        FilterOutcome::Matches(results) => {
            for m in results {
                write_match(out, m)?;
            }
        }
    }
    Ok(())
}

fn write_match<W: Write>(out: &mut W, m: &MatchResult) -> Result<()> {
    let status = m
        .status
        .map(|s| s.to_string())
        .unwrap_or_else(|| "None".to_string());
    let time = m
        .time
        .map(|t| t.to_string())
        .unwrap_or_else(|| UNKNOWN.to_string());

    writeln!(out, "Match Found:")?;
    writeln!(out, "Packet Number: {}", m.position)?;
    writeln!(out, "URL: {}", m.url)?;
    writeln!(out, "Method: {}", m.method)?;
    writeln!(out, "Status: {status}")?;
    writeln!(out, "Start Time: {}", m.started_date_time)?;
    writeln!(out, "Time Taken (ms): {time}")?;
    if let Some(sources) = &m.match_sources {
        let labels: Vec<&str> = sources.iter().map(|s| s.label()).collect();
        writeln!(out, "Match Sources: {}", labels.join(", "))?;
    }
    writeln!(out, "Transaction Type: {}", m.transaction_type)?;
    writeln!(out)?;
    Ok(())
}

/// Matches as a pretty-printed JSON array (`[]` when nothing matched).
pub fn write_json<W: Write>(out: &mut W, matches: &[MatchResult]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, matches)?;
    writeln!(out)?;
    Ok(())
}

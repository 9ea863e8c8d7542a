//! Plain-text rendering of log scan results.

use gridmark_logs::ErrorTally;
use std::io::Write;

/// Writes `count<TAB>message` lines, most frequent first.
pub fn write_tally<W: Write>(
    tally: &ErrorTally,
    top: Option<usize>,
    output: &mut W,
) -> std::io::Result<()> {
    let ranked = tally.ranked();
    let limit = top.unwrap_or(ranked.len());
    for (message, count) in ranked.into_iter().take(limit) {
        writeln!(output, "{}\t{}", count, message)?;
    }
    Ok(())
}

//! Run summary output.

use std::io::{self, Write};

use log::info;

use crate::extract::ExtractionStats;
use crate::ExtractionReport;

/// Prints the final summary: where the domains went and how many there are.
pub fn print_summary<W: Write>(report: &ExtractionReport, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "\u{2705} Domains were successfully written to '{}'.",
        report.output_path.display()
    )?;
    writeln!(out, "Total unique domains added: {}", report.total_unique)
}

/// Logs the run counters at info level.
pub fn log_statistics(stats: &ExtractionStats, elapsed_seconds: f64) {
    info!(
        "Run statistics: rows={}, fields={}, tokens={}, emails_skipped={}, non_domains={}, duplicates={}, elapsed={:.2}s",
        stats.rows,
        stats.fields,
        stats.tokens,
        stats.emails_skipped,
        stats.non_domains,
        stats.duplicates,
        elapsed_seconds
    );
}

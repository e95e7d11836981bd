//! Progress logging utilities.

use log::debug;

/// Logs progress information about CSV processing.
///
/// # Arguments
///
/// * `start_time` - The start time of processing
/// * `rows` - Number of CSV rows read so far
/// * `unique_domains` - Number of unique domains collected so far
pub fn log_progress(start_time: std::time::Instant, rows: usize, unique_domains: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    #[allow(clippy::cast_precision_loss)]
    let rate = if elapsed_secs > 0.0 {
        rows as f64 / elapsed_secs
    } else {
        0.0
    };
    debug!(
        "Processed {} rows in {:.2} seconds (~{:.2} rows/sec), {} unique domains",
        rows, elapsed_secs, rate, unique_domains
    );
}

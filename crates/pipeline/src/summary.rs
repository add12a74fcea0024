//! Startup summary file: a CSV snapshot of the catalog.
//!
//! Written once at process startup (not refreshed per batch) into the
//! output directory, mirroring what the read API would have returned at
//! that moment.

use std::path::Path;

use posterly_core::guest_list::csv_escape;

use crate::catalog::PosterRecord;

/// Filename of the summary CSV inside the output directory.
pub const SUMMARY_FILENAME: &str = "wedding_guest_list.csv";

/// Render the catalog as CSV text (`name,full,url` header plus one row per
/// record).
pub fn summary_csv(records: &[PosterRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push("name,full,url".to_string());
    for record in records {
        lines.push(format!(
            "{},{},{}",
            csv_escape(&record.name),
            csv_escape(&record.full),
            csv_escape(&record.url)
        ));
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Write the catalog snapshot to `<output_dir>/wedding_guest_list.csv`.
pub async fn write_summary(output_dir: &Path, records: &[PosterRecord]) -> std::io::Result<()> {
    let path = output_dir.join(SUMMARY_FILENAME);
    tokio::fs::write(path, summary_csv(records)).await
}

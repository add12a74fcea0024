//! The result catalog: a derived, recomputed-on-read listing of posters.
//!
//! Nothing tracks renders incrementally; every listing request rescans the
//! output directory and reconstructs the records from filenames alone.
//! Ids are sequential in directory-traversal order and therefore only
//! stable within one scan.

use std::path::Path;

use serde::Serialize;

use posterly_core::naming;

/// One catalog entry, reconstructed from a file in the output directory.
#[derive(Debug, Clone, Serialize)]
pub struct PosterRecord {
    /// Sequential id in traversal order; reassigned on every scan.
    pub id: u32,
    /// Guest name recovered from the filename.
    pub name: String,
    /// Filename without its extension.
    pub full: String,
    /// Public URL the poster is served under.
    pub url: String,
}

/// Output directory scan failure. Raised only when the directory itself
/// cannot be opened or traversed; individual odd filenames never fail a
/// scan.
#[derive(Debug, thiserror::Error)]
#[error("Cannot scan output directory: {0}")]
pub struct ScanError(#[from] std::io::Error);

/// Walk `output_dir` (non-recursively) and build the poster catalog.
///
/// Subdirectories are skipped. For each file, the extension is stripped,
/// the configured prefix is stripped to recover the guest name, and the
/// access URL is derived from `base_url`. Files that don't match the
/// naming scheme are still listed with the stem as their name.
pub async fn scan(
    output_dir: &Path,
    prefix: &str,
    base_url: &str,
) -> Result<Vec<PosterRecord>, ScanError> {
    let mut records = Vec::new();
    let mut id = 1;

    let mut entries = tokio::fs::read_dir(output_dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        if entry.file_type().await?.is_dir() {
            continue;
        }

        let file_name = entry.file_name();
        let file_name = file_name.to_string_lossy();
        let stem = file_name
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(&file_name);
        let name = naming::guest_name_from_stem(prefix, stem);

        records.push(PosterRecord {
            id,
            name: name.to_string(),
            full: stem.to_string(),
            url: format!("{base_url}/guest_posters/{file_name}"),
        });
        id += 1;
    }

    Ok(records)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

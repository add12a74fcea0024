//! Poster filename derivation and its inverse.
//!
//! A poster's filename is derived only from the guest name by substitution
//! into a fixed template: `<prefix> - <name>.png`. The catalog builder
//! recovers the name by stripping the same prefix back off. Duplicate guest
//! names therefore collapse onto the same path (last write wins).

/// File extension for all generated posters.
pub const POSTER_EXT: &str = "png";

/// Separator between the configured prefix and the guest name.
const PREFIX_SEPARATOR: &str = " - ";

/// Derive the output filename for a guest.
///
/// Deterministic: the same `(prefix, name)` pair always yields the same
/// filename.
pub fn poster_filename(prefix: &str, name: &str) -> String {
    format!("{prefix}{PREFIX_SEPARATOR}{name}.{POSTER_EXT}")
}

/// Recover a guest name from a poster file stem (filename minus extension).
///
/// Liberal: if the stem does not carry the expected prefix it is returned
/// as-is (trimmed), so files that were not produced by the renderer still
/// get a catalog entry rather than being rejected.
pub fn guest_name_from_stem<'a>(prefix: &str, stem: &'a str) -> &'a str {
    let full_prefix_len = prefix.len() + PREFIX_SEPARATOR.len();
    let name = if stem.starts_with(prefix) && stem[prefix.len()..].starts_with(PREFIX_SEPARATOR) {
        &stem[full_prefix_len..]
    } else {
        stem
    };
    name.trim()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Guest-list (CSV) parsing and CSV escaping.
//!
//! The guest list is row-oriented text: one guest per row, the first field
//! is the name, and any additional fields are ignored. Parsing is
//! fail-fast -- one malformed row fails the entire parse -- so a batch is
//! never launched against a guest list we only half understood.

use crate::error::GuestListError;

/// Parse raw guest-list bytes into an ordered list of guest names.
///
/// Rows are returned in file order. Blank lines are skipped. Empty input
/// yields an empty vector, not an error. Quoted fields with `""` escapes
/// are supported; an unterminated or stray quote fails the parse with the
/// offending 1-based row number.
pub fn parse_guest_list(data: &[u8]) -> Result<Vec<String>, GuestListError> {
    let text = std::str::from_utf8(data)?;

    let mut names = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let fields = parse_csv_line(line, i + 1)?;
        // First field is the name; extra columns are ignored.
        if let Some(name) = fields.into_iter().next() {
            names.push(name);
        }
    }

    Ok(names)
}

/// Parse a single CSV line into fields, handling quoted fields.
fn parse_csv_line(line: &str, row: usize) -> Result<Vec<String>, GuestListError> {
    let mut result = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    // Escaped quote.
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(ch);
            }
        } else if ch == '"' {
            if current.is_empty() {
                in_quotes = true;
            } else {
                return Err(GuestListError::BareQuote { row });
            }
        } else if ch == ',' {
            result.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }

    if in_quotes {
        return Err(GuestListError::UnterminatedQuote { row });
    }

    result.push(current);
    Ok(result)
}

/// Escape a value for CSV: wrap in quotes if it contains comma, quote, or
/// newline.
pub fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

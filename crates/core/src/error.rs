/// Guest-list parsing failures.
///
/// Parsing is fail-fast: the first malformed row aborts the whole parse,
/// so a batch never runs against a partially understood guest list.
#[derive(Debug, thiserror::Error)]
pub enum GuestListError {
    #[error("Guest list is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("Unterminated quoted field on row {row}")]
    UnterminatedQuote { row: usize },

    #[error("Unexpected quote inside unquoted field on row {row}")]
    BareQuote { row: usize },
}

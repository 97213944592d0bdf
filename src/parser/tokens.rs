//! Token types for the date-entry lexer.

/// A token in a date string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A run of digits, already converted to its value.
    Number(u32),

    /// `-`, `/` or `.`
    Separator(char),

    // End of input
    Eof,
}

/// A token with its byte position in the source.
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub start: usize,
    pub end: usize,
}

//! Core data model: token lines and the matrix a scanned document becomes.
//!
//! Tokens are plain owned strings. A decoded token may contain any character
//! (whitespace, `#`, quotes, even newlines); restrictions apply only to the
//! *encoded* textual form, which the [`crate::escape`] module produces.

/// One parsed input line: an ordered sequence of tokens.
///
/// The scanner never emits an empty `TokenLine` — lines that yield zero
/// tokens (blank or comment-only) are omitted from the matrix entirely.
pub type TokenLine = Vec<String>;

/// An entire parsed document, in source line order with blank and
/// comment-only lines omitted (not placeholder-preserved).
pub type TokenMatrix = Vec<TokenLine>;

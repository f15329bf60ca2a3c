//! Error types for qtok scanning and binary encoding/decoding.
//!
//! Two severities exist and they never mix:
//!
//! - [`ScanError`] — recoverable diagnostics produced while scanning text.
//!   These are accumulated in a [`crate::ScanOutcome`] and never abort the
//!   scan; the matrix is fully populated for all other content.
//! - [`QtokError`] — fatal faults: stream I/O failure, a truncated or
//!   corrupt binary stream, or a matrix too large for the 32-bit wire
//!   counts. These abort the call with no partial result.

use thiserror::Error;

/// Fatal errors from the writer and the binary codec.
#[derive(Error, Debug)]
pub enum QtokError {
    /// The underlying stream failed while reading or writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The binary stream ended mid-structure.
    #[error("binary stream truncated while reading {0}")]
    Truncated(&'static str),

    /// A count field in the binary stream was negative.
    #[error("corrupt binary stream: negative {what} {value}")]
    NegativeCount { what: &'static str, value: i32 },

    /// A count or byte length exceeded the 32-bit wire format limit.
    #[error("matrix too large to encode: {what} {value} exceeds the 32-bit limit")]
    Oversized { what: &'static str, value: usize },

    /// Token bytes in the binary stream were not valid UTF-8.
    #[error("token data is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Convenience alias used throughout qtok-core.
pub type Result<T> = std::result::Result<T, QtokError>;

/// Recoverable diagnostics recorded during a scan.
///
/// Line and position are zero-based: `line` indexes the input line sequence,
/// `position` the character offset within that line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// A backslash escape inside a quoted token had an unrecognized payload.
    /// The payload character is dropped from the token and scanning continues.
    #[error("Unknown escape token '{token}', line {line}, position {position}.")]
    UnknownEscape {
        token: char,
        line: usize,
        position: usize,
    },
}

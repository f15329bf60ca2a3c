//! # qtok-core
//!
//! Reader and writer for **qtok**, a line-oriented text format of quoted,
//! whitespace-delimited, comment-aware token lines, plus a length-prefixed
//! binary serialization of the tokenized result.
//!
//! A qtok document is a sequence of lines. Each line holds zero or more
//! tokens separated by whitespace; `#` starts a comment that runs to the end
//! of the line; a token containing whitespace, `#`, `"`, or `\` is written
//! inside double quotes with backslash escapes (`\\`, `\n`, `\"`). Blank and
//! comment-only lines vanish when scanned — the result is a dense matrix of
//! token lines.
//!
//! ## Quick start
//!
//! ```rust
//! use qtok_core::{scan_str, writer};
//!
//! let outcome = scan_str("host localhost   # local only\n\"log file\" /var/log/app.log");
//! assert!(!outcome.had_error());
//! assert_eq!(outcome.lines.len(), 2);
//! assert_eq!(outcome.lines[1], vec!["log file".to_string(), "/var/log/app.log".to_string()]);
//!
//! // Re-emit the second line, canonically quoted
//! let text = writer::line_to_string(&outcome.lines[1]);
//! assert_eq!(text, "\"log file\" /var/log/app.log\n");
//! ```
//!
//! Binary round-trip:
//!
//! ```rust
//! use qtok_core::binary;
//!
//! let matrix = vec![vec!["alpha".to_string(), "beta gamma".to_string()]];
//! let bytes = binary::encode_to_vec(&matrix).unwrap();
//! assert_eq!(binary::decode_slice(&bytes).unwrap(), matrix);
//! ```
//!
//! ## Modules
//!
//! - [`scanner`] — raw text lines → [`TokenMatrix`] (the quote/escape state machine)
//! - [`writer`] — token lines → quoted text, terminated or continuation form
//! - [`escape`] — the escape codec shared by scanner and writer
//! - [`binary`] — [`TokenMatrix`] ↔ length-prefixed binary form
//! - [`error`] — fatal error types and recoverable scan diagnostics
//! - [`types`] — `TokenLine` / `TokenMatrix` aliases

pub mod binary;
pub mod error;
pub mod escape;
pub mod scanner;
pub mod types;
pub mod writer;

pub use error::{QtokError, Result, ScanError};
pub use scanner::{scan_lines, scan_str, ScanOutcome};
pub use types::{TokenLine, TokenMatrix};

//! Line Tokenizer — scans raw text lines into a [`TokenMatrix`].
//!
//! Each line runs through a small state machine with two states, **Unquoted**
//! and **Quoted** (Quoted carries an escape sub-state):
//!
//! - **Unquoted**: whitespace finishes the current token; `#` truncates the
//!   rest of the line as a comment; `"` enters Quoted without emitting
//!   anything; everything else accumulates.
//! - **Quoted**: `\` arms the escape sub-state, the next character is then
//!   decoded through [`crate::escape::unescape`]; an unarmed `"` finishes
//!   the token and returns to Unquoted; everything else (whitespace and `#`
//!   included) accumulates verbatim.
//!
//! Scanning cannot fail: unknown escape payloads are recorded as
//! [`ScanError`] diagnostics in the outcome and the payload character is
//! dropped. Two deliberate policies, both matching the reference behavior:
//!
//! - **Drop-empty**: a token is only emitted when its buffer is non-empty,
//!   so an explicit `""` in the input produces no token at all.
//! - **Lenient end-of-line**: an unterminated quote or a trailing armed
//!   escape at end-of-line is absorbed silently; whatever accumulated is
//!   emitted as the final token, without a diagnostic.
//!
//! State never carries across lines, and each call owns its own buffers.

use crate::error::ScanError;
use crate::escape;
use crate::types::{TokenLine, TokenMatrix};

/// The by-value result of a scan: the tokenized lines plus any recoverable
/// diagnostics recorded along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Tokenized lines in source order, blank/comment-only lines omitted.
    pub lines: TokenMatrix,
    /// Diagnostics accumulated across all lines, in encounter order.
    pub errors: Vec<ScanError>,
}

impl ScanOutcome {
    /// True if any diagnostic was recorded. The matrix is still fully
    /// populated for all content the diagnostics did not touch.
    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Scan a whole document, splitting it into lines with [`str::lines`].
///
/// Thin convenience over [`scan_lines`] — the state machine itself never
/// sees line terminators.
pub fn scan_str(text: &str) -> ScanOutcome {
    scan_lines(text.lines())
}

/// Scan a sequence of raw text lines into a [`ScanOutcome`].
///
/// Lines are processed independently; diagnostics reference the zero-based
/// position of the line in the input sequence and the zero-based character
/// offset within it.
///
/// ```rust
/// use qtok_core::scan_lines;
///
/// let outcome = scan_lines(["hello # world", "\"a b\" c"]);
/// assert_eq!(outcome.lines, vec![
///     vec!["hello".to_string()],
///     vec!["a b".to_string(), "c".to_string()],
/// ]);
/// ```
pub fn scan_lines<'a, I>(lines: I) -> ScanOutcome
where
    I: IntoIterator<Item = &'a str>,
{
    let mut outcome = ScanOutcome::default();
    for (line_number, input) in lines.into_iter().enumerate() {
        scan_line(input, line_number, &mut outcome);
    }
    outcome
}

/// Run the state machine over one line, appending its tokens (if any) and
/// diagnostics to the outcome.
fn scan_line(input: &str, line_number: usize, outcome: &mut ScanOutcome) {
    let mut tokens = TokenLine::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut escape_pending = false;

    for (position, ch) in input.chars().enumerate() {
        let mut finish_token = false;

        if in_quotes {
            if escape_pending {
                escape_pending = false;
                match escape::unescape(ch) {
                    Some(decoded) => current.push(decoded),
                    None => outcome.errors.push(ScanError::UnknownEscape {
                        token: ch,
                        line: line_number,
                        position,
                    }),
                }
            } else {
                match ch {
                    '\\' => escape_pending = true,
                    '"' => {
                        in_quotes = false;
                        finish_token = true;
                    }
                    _ => current.push(ch),
                }
            }
        } else if ch.is_whitespace() {
            finish_token = true;
        } else if ch == '#' {
            // Comment: the rest of the line is gone.
            break;
        } else if ch == '"' {
            in_quotes = true;
        } else {
            current.push(ch);
        }

        if finish_token && !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }

    // Final token, regardless of whether a quote was left open.
    if !current.is_empty() {
        tokens.push(current);
    }

    if !tokens.is_empty() {
        outcome.lines.push(tokens);
    }
}

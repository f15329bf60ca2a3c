//! Line Writer — composes tokens into quoted text lines.
//!
//! Every token, including the first, goes through [`crate::escape::quote`];
//! tokens are separated by single spaces. Two entry points differ only in
//! what follows the last token:
//!
//! - [`write_line`] appends a line terminator — the line is complete.
//! - [`write_partial`] appends one trailing **space** instead, so a later
//!   call can continue the same line without re-deriving separator logic.
//!   This asymmetry is a deliberate external contract, not an oversight.
//!
//! The writer owns no stream: it writes into whatever `io::Write` the caller
//! hands it, one token at a time, with no buffering of its own.

use std::io::Write;

use crate::error::Result;
use crate::escape;
use crate::types::TokenLine;

/// Write one complete line: space-separated encoded tokens plus `\n`.
pub fn write_line<W: Write>(out: &mut W, tokens: &[impl AsRef<str>]) -> Result<()> {
    write_tokens(out, tokens)?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Write tokens followed by a single trailing space, leaving the line open
/// for a subsequent [`write_partial`] or [`write_line`] call.
pub fn write_partial<W: Write>(out: &mut W, tokens: &[impl AsRef<str>]) -> Result<()> {
    write_tokens(out, tokens)?;
    out.write_all(b" ")?;
    Ok(())
}

/// Write an entire matrix as text, one terminated line per token line.
pub fn write_matrix_text<W: Write>(out: &mut W, matrix: &[TokenLine]) -> Result<()> {
    for line in matrix {
        write_line(out, line)?;
    }
    Ok(())
}

/// Render one complete line to an owned string, terminator included.
/// Infallible in-memory form of [`write_line`].
pub fn line_to_string(tokens: &[impl AsRef<str>]) -> String {
    let mut out = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&escape::quote(token.as_ref()));
    }
    out.push('\n');
    out
}

fn write_tokens<W: Write>(out: &mut W, tokens: &[impl AsRef<str>]) -> Result<()> {
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.write_all(b" ")?;
        }
        out.write_all(escape::quote(token.as_ref()).as_bytes())?;
    }
    Ok(())
}

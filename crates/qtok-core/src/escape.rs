//! The escape codec shared by the scanner and the writer.
//!
//! Three escape sequences exist inside quoted tokens: `\\`, `\n`, and `\"`.
//! Decoding is a single-character lookup ([`unescape`]); encoding decides
//! between emitting a token bare and wrapping it in quotes ([`quote`]).

use std::borrow::Cow;

/// Decode the payload character of a backslash escape.
///
/// Returns `None` for an unrecognized payload — the scanner reports it as a
/// [`crate::ScanError::UnknownEscape`] and drops the character.
pub fn unescape(payload: char) -> Option<char> {
    match payload {
        '\\' => Some('\\'),
        'n' => Some('\n'),
        '"' => Some('"'),
        _ => None,
    }
}

/// Encode a token for text output, quoting and escaping only when necessary.
///
/// A token is returned borrowed, unchanged, when it contains none of `#`,
/// `\`, `"`, or whitespace. Otherwise it is wrapped in double quotes with
/// the prefix before the first special character copied verbatim and the
/// rest escaped. Carriage returns are dropped entirely, normalizing CRLF
/// content to `\n`-only form.
///
/// ```rust
/// use qtok_core::escape::quote;
///
/// assert_eq!(quote("plain"), "plain");
/// assert_eq!(quote("has space"), "\"has space\"");
/// assert_eq!(quote("line\nbreak"), "\"line\\nbreak\"");
/// ```
pub fn quote(token: &str) -> Cow<'_, str> {
    match token.char_indices().find(|&(_, ch)| is_special(ch)) {
        Some((at, _)) => Cow::Owned(quote_wrap_and_escape(token, at)),
        None => Cow::Borrowed(token),
    }
}

/// Characters that force a token into quoted form.
fn is_special(ch: char) -> bool {
    matches!(ch, '#' | '\\' | '"') || ch.is_whitespace()
}

/// Wrap `token` in quotes, copying `token[..start]` verbatim and escaping
/// from the first special character onward. `start` must lie on a char
/// boundary (it comes from `char_indices`).
fn quote_wrap_and_escape(token: &str, start: usize) -> String {
    let mut out = String::with_capacity(token.len() + 2);
    out.push('"');
    out.push_str(&token[..start]);
    for ch in token[start..].chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '"' => out.push_str("\\\""),
            '\r' => {}
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

use qtok_core::{scan_lines, scan_str, ScanError};

/// Assert that a single line scans to the expected tokens with no diagnostics.
fn assert_scans(line: &str, expected: &[&str]) {
    let outcome = scan_lines([line]);
    assert!(
        !outcome.had_error(),
        "unexpected diagnostics for {line:?}: {:?}",
        outcome.errors
    );
    let expected: Vec<Vec<String>> = if expected.is_empty() {
        vec![]
    } else {
        vec![expected.iter().map(|t| t.to_string()).collect()]
    };
    assert_eq!(outcome.lines, expected, "scan mismatch for {line:?}");
}

// ============================================================================
// Unquoted scanning
// ============================================================================

#[test]
fn splits_on_spaces() {
    assert_scans("one two three", &["one", "two", "three"]);
}

#[test]
fn splits_on_tabs_and_mixed_whitespace() {
    assert_scans("one\ttwo   three", &["one", "two", "three"]);
}

#[test]
fn coalesces_whitespace_runs() {
    assert_scans("  a    b  ", &["a", "b"]);
}

#[test]
fn whitespace_only_line_yields_no_token_line() {
    assert_scans("   \t  ", &[]);
}

#[test]
fn empty_line_yields_no_token_line() {
    assert_scans("", &[]);
}

#[test]
fn backslash_is_literal_outside_quotes() {
    assert_scans(r"C:\temp", &[r"C:\temp"]);
}

// ============================================================================
// Comments
// ============================================================================

#[test]
fn comment_truncates_line() {
    assert_scans("hello # world", &["hello"]);
}

#[test]
fn comment_without_space_truncates_token() {
    // The `#` stops the line immediately; the pending token still emits.
    assert_scans("hello#world", &["hello"]);
}

#[test]
fn comment_only_line_yields_no_token_line() {
    assert_scans("# just a comment", &[]);
}

#[test]
fn hash_inside_quotes_is_not_a_comment() {
    assert_scans(r#""a # b" c"#, &["a # b", "c"]);
}

// ============================================================================
// Quoted scanning
// ============================================================================

#[test]
fn quoted_token_preserves_spaces() {
    assert_scans(r#""a b" c"#, &["a b", "c"]);
}

#[test]
fn quote_continues_current_token() {
    // Entering quotes mid-token neither emits nor appends the quote itself.
    assert_scans(r#"ab"cd e"f"#, &["abcd e", "f"]);
}

#[test]
fn escaped_quote_inside_quotes() {
    assert_scans(r#""say \"hi\"""#, &[r#"say "hi""#]);
}

#[test]
fn escaped_backslash_inside_quotes() {
    assert_scans(r#""a\\b""#, &[r"a\b"]);
}

#[test]
fn escaped_newline_inside_quotes() {
    assert_scans(r#""line\nbreak""#, &["line\nbreak"]);
}

#[test]
fn empty_quoted_token_is_dropped() {
    // Drop-empty policy: `""` produces no token at all.
    assert_scans(r#"a "" b"#, &["a", "b"]);
}

#[test]
fn lone_empty_quotes_yield_no_token_line() {
    assert_scans(r#""""#, &[]);
}

// ============================================================================
// Lenient end-of-line policy
// ============================================================================

#[test]
fn unterminated_quote_yields_accumulated_token() {
    assert_scans(r#""abc def"#, &["abc def"]);
}

#[test]
fn unterminated_quote_with_trailing_escape_is_silent() {
    // Quote never closes and the escape never gets its payload; whatever
    // accumulated is still emitted, with no diagnostic.
    assert_scans(r#""a\"#, &["a"]);
}

#[test]
fn unterminated_empty_quote_yields_nothing() {
    assert_scans(r#"a ""#, &["a"]);
}

// ============================================================================
// Escape diagnostics
// ============================================================================

#[test]
fn unknown_escape_is_recorded_and_dropped() {
    let outcome = scan_lines([r#""bad\q""#]);
    assert!(outcome.had_error());
    assert_eq!(
        outcome.errors,
        vec![ScanError::UnknownEscape {
            token: 'q',
            line: 0,
            position: 5,
        }]
    );
    // The payload is dropped, not appended; the rest of the token survives.
    assert_eq!(outcome.lines, vec![vec!["bad".to_string()]]);
}

#[test]
fn unknown_escape_message_format() {
    let err = ScanError::UnknownEscape {
        token: 'q',
        line: 3,
        position: 17,
    };
    assert_eq!(err.to_string(), "Unknown escape token 'q', line 3, position 17.");
}

#[test]
fn unknown_escape_reports_zero_based_line() {
    let outcome = scan_lines(["ok", r#""x\t""#]);
    assert_eq!(
        outcome.errors,
        vec![ScanError::UnknownEscape {
            token: 't',
            line: 1,
            position: 3,
        }]
    );
}

#[test]
fn escape_position_counts_chars_not_bytes() {
    // 'é' is two bytes but one char; position is the char offset.
    let outcome = scan_lines([r#""café\q""#]);
    assert_eq!(
        outcome.errors,
        vec![ScanError::UnknownEscape {
            token: 'q',
            line: 0,
            position: 6,
        }]
    );
}

#[test]
fn scan_continues_after_diagnostic() {
    let outcome = scan_lines([r#""a\qb" ok"#, "second line"]);
    assert!(outcome.had_error());
    assert_eq!(
        outcome.lines,
        vec![
            vec!["ab".to_string(), "ok".to_string()],
            vec!["second".to_string(), "line".to_string()],
        ]
    );
}

// ============================================================================
// Whole documents
// ============================================================================

#[test]
fn matrix_preserves_line_order_and_drops_blanks() {
    let outcome = scan_str("first line\n\n# comment\nsecond line\n");
    assert!(!outcome.had_error());
    assert_eq!(
        outcome.lines,
        vec![
            vec!["first".to_string(), "line".to_string()],
            vec!["second".to_string(), "line".to_string()],
        ]
    );
}

#[test]
fn state_never_carries_across_lines() {
    // Line 0 leaves a quote open; line 1 must start fresh in Unquoted.
    let outcome = scan_lines([r#""open"#, "plain next"]);
    assert!(!outcome.had_error());
    assert_eq!(
        outcome.lines,
        vec![
            vec!["open".to_string()],
            vec!["plain".to_string(), "next".to_string()],
        ]
    );
}

#[test]
fn scan_str_on_empty_input() {
    let outcome = scan_str("");
    assert!(outcome.lines.is_empty());
    assert!(!outcome.had_error());
}

#[test]
fn config_like_document() {
    let text = "\
# server settings
host localhost      # local only
port 8080
\"log file\" \"/var/log/my app.log\"
";
    let outcome = scan_str(text);
    assert!(!outcome.had_error());
    assert_eq!(
        outcome.lines,
        vec![
            vec!["host".to_string(), "localhost".to_string()],
            vec!["port".to_string(), "8080".to_string()],
            vec!["log file".to_string(), "/var/log/my app.log".to_string()],
        ]
    );
}

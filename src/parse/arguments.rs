//! Space-delimited command-line argument string parsing.

use super::quoting::strip_quoting;

/// Scanner state while walking the argument string.
///
/// Exactly one level of quoting is supported: a span opened by `'` or `"` is
/// closed by the next quote character of either kind. No nesting, no escapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Outside any quoted span; whitespace splits tokens.
    Normal,
    /// Inside a span opened by `'`.
    InSingleQuote,
    /// Inside a span opened by `"`.
    InDoubleQuote,
}

/// Parse a string of space-delimited command-line arguments.
///
/// ASCII whitespace splits tokens only outside an open quoted span, so
/// `param2='another test'` survives as one token; non-ASCII whitespace is
/// ordinary token content. Each raw token is trimmed and quote-stripped (see
/// [`strip_quoting`]); tokens left without visible content are discarded.
/// Order of the surviving tokens is preserved.
///
/// A span left open at the end of input (unbalanced quoting) is not an error;
/// the remaining text is flushed as a single token with the quote characters
/// kept as literals.
///
/// # Arguments
///
/// * `text` - The raw argument string (may be empty)
///
/// # Returns
///
/// The ordered list of cleaned tokens; empty for empty or whitespace-only input.
pub fn parse_arguments(text: &str) -> Vec<String> {
    let mut arguments = Vec::new();
    let mut state = ScanState::Normal;
    let mut current = String::new();

    for ch in text.chars() {
        match state {
            ScanState::Normal => {
                if ch.is_ascii_whitespace() {
                    push_token(&mut arguments, &current);
                    current.clear();
                } else {
                    if ch == '\'' {
                        state = ScanState::InSingleQuote;
                    } else if ch == '"' {
                        state = ScanState::InDoubleQuote;
                    }
                    current.push(ch);
                }
            }
            ScanState::InSingleQuote | ScanState::InDoubleQuote => {
                // Either quote character closes the span.
                if ch == '\'' || ch == '"' {
                    state = ScanState::Normal;
                }
                current.push(ch);
            }
        }
    }
    push_token(&mut arguments, &current);

    arguments
}

/// Trim and quote-strip a raw token, keeping it only if it still has text.
///
/// The emptiness check runs after stripping, so a quoted whitespace run like
/// `' '` is discarded rather than surviving as a blank argument.
fn push_token(arguments: &mut Vec<String>, raw: &str) {
    let token = strip_quoting(raw.trim());
    if !token.trim().is_empty() {
        arguments.push(token);
    }
}

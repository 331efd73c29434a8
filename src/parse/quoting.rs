//! Quote stripping for parsed argument tokens.

/// Remove wrapping quote pairs from a token.
///
/// Two passes run over the whole token, first for `'` and then for `"`; each
/// pass removes the enclosing pair only when the token has length >= 2 and
/// both starts and ends with that quote character. The passes are not
/// recursive, so `"'abc'"` strips to `'abc'` and no further.
///
/// If the stripped token has a `key=value` shape (split on the first `=`
/// only), the value portion gets the same two passes independently. This is
/// what turns `key='a value'` into `key=a value` even though the token as a
/// whole was never quoted.
///
/// This function never fails: tokens shorter than two characters, mismatched
/// opening/closing characters, and stray quotes are passed through unchanged.
pub fn strip_quoting(token: &str) -> String {
    let stripped = strip_quote(strip_quote(token, '\''), '"');
    match stripped.split_once('=') {
        Some((key, value)) => {
            let value = strip_quote(strip_quote(value, '\''), '"');
            format!("{}={}", key, value)
        }
        None => stripped.to_string(),
    }
}

/// Remove one enclosing pair of `quote` characters, if present.
fn strip_quote(token: &str, quote: char) -> &str {
    if token.len() >= 2 && token.starts_with(quote) && token.ends_with(quote) {
        &token[1..token.len() - 1]
    } else {
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_single_quoted_token() {
        assert_eq!(strip_quoting("'abc'"), "abc");
    }

    #[test]
    fn strips_double_quoted_token() {
        assert_eq!(strip_quoting("\"abc\""), "abc");
    }

    #[test]
    fn unquoted_token_unchanged() {
        assert_eq!(strip_quoting("noquotes"), "noquotes");
    }

    #[test]
    fn strips_quoted_value_of_pair() {
        assert_eq!(strip_quoting("key='a b'"), "key=a b");
        assert_eq!(strip_quoting("key=\"a b\""), "key=a b");
    }

    #[test]
    fn splits_on_first_equals_only() {
        assert_eq!(strip_quoting("key='a=b'"), "key=a=b");
    }

    #[test]
    fn not_recursive_across_quote_kinds() {
        // One pass per quote character: the inner pair survives.
        assert_eq!(strip_quoting("\"'abc'\""), "'abc'");
        assert_eq!(strip_quoting("'\"abc\"'"), "\"abc\"");
    }

    #[test]
    fn mismatched_quotes_unchanged() {
        assert_eq!(strip_quoting("'abc\""), "'abc\"");
        assert_eq!(strip_quoting("\"abc'"), "\"abc'");
    }

    #[test]
    fn short_tokens_unchanged() {
        assert_eq!(strip_quoting("'"), "'");
        assert_eq!(strip_quoting("\""), "\"");
        assert_eq!(strip_quoting(""), "");
    }

    #[test]
    fn empty_pair_strips_to_empty() {
        assert_eq!(strip_quoting("''"), "");
        assert_eq!(strip_quoting("\"\""), "");
    }

    #[test]
    fn empty_value_preserved() {
        assert_eq!(strip_quoting("key="), "key=");
    }

    #[test]
    fn quoted_whole_pair_then_value_untouched() {
        // Whole-token strip happens first; what remains is a plain pair.
        assert_eq!(strip_quoting("'key=value'"), "key=value");
    }

    #[test]
    fn interior_quotes_untouched() {
        assert_eq!(strip_quoting("ab'cd"), "ab'cd");
        assert_eq!(strip_quoting("key=ab\"cd"), "key=ab\"cd");
    }
}

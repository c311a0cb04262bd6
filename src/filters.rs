/// Token-level filters: punctuation-only tokens, numeric sentinels, and the
/// pre-stemming deny list.
use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// A token that is, in its entirety, a signed integer or decimal
/// (`123`, `-4.5`, `.25`). Anchored so mixed tokens never match.
static NUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)$").expect("NUMERIC: invalid pattern"));

/// True when the token is non-empty and made only of punctuation characters.
pub fn is_punctuation_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_punctuation())
}

/// Drop tokens composed entirely of punctuation, preserving order.
pub fn remove_punctuation_tokens(tokens: Vec<String>) -> Vec<String> {
    tokens.into_iter().filter(|t| !is_punctuation_token(t)).collect()
}

/// Replace tokens that are wholly numeric with `sentinel`. `None` is the
/// identity; mixed tokens like "word123word" are never touched.
pub fn replace_numbers(tokens: Vec<String>, sentinel: Option<&str>) -> Vec<String> {
    let Some(sentinel) = sentinel else {
        return tokens;
    };
    tokens
        .into_iter()
        .map(|t| {
            if NUMERIC.is_match(&t) {
                sentinel.to_string()
            } else {
                t
            }
        })
        .collect()
}

/// Drop every token present in `deny_list`, preserving order.
pub fn remove_denied(tokens: Vec<String>, deny_list: &HashSet<String>) -> Vec<String> {
    tokens.into_iter().filter(|t| !deny_list.contains(t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_punctuation_tokens_removed() {
        assert_eq!(
            remove_punctuation_tokens(toks(&["Hello", ",", "world", "!"])),
            toks(&["Hello", "world"])
        );
        assert_eq!(remove_punctuation_tokens(toks(&["--", "...", "!"])), toks(&[]));
    }

    #[test]
    fn test_mixed_tokens_survive_punctuation_filter() {
        assert_eq!(
            remove_punctuation_tokens(toks(&["word.", "another-word"])),
            toks(&["word.", "another-word"])
        );
        assert_eq!(remove_punctuation_tokens(toks(&["a", "-", "b"])), toks(&["a", "b"]));
        assert_eq!(remove_punctuation_tokens(toks(&["a-b"])), toks(&["a-b"]));
    }

    #[test]
    fn test_replace_numbers() {
        assert_eq!(
            replace_numbers(toks(&["Review", "123", "and", "45", "."]), Some("NUMTOKEN")),
            toks(&["Review", "NUMTOKEN", "and", "NUMTOKEN", "."])
        );
        assert_eq!(
            replace_numbers(toks(&["No", "numbers", "here", "."]), Some("NUMTOKEN")),
            toks(&["No", "numbers", "here", "."])
        );
    }

    #[test]
    fn test_replace_numbers_full_match_only() {
        assert_eq!(replace_numbers(toks(&["word123word"]), Some("NUM")), toks(&["word123word"]));
        assert_eq!(replace_numbers(toks(&["word123"]), Some("NUM")), toks(&["word123"]));
        assert_eq!(replace_numbers(toks(&["12a"]), Some("NUM")), toks(&["12a"]));
        assert_eq!(replace_numbers(toks(&[""]), Some("NUM")), toks(&[""]));
    }

    #[test]
    fn test_replace_numbers_signed_and_fractional() {
        assert_eq!(
            replace_numbers(toks(&["-1", "+2.5", ".25", "3.", "9/10"]), Some("N")),
            toks(&["N", "N", "N", "N", "9/10"])
        );
    }

    #[test]
    fn test_replace_numbers_without_sentinel_is_identity() {
        assert_eq!(
            replace_numbers(toks(&["Review", "123"]), None),
            toks(&["Review", "123"])
        );
    }

    #[test]
    fn test_remove_denied() {
        let deny: HashSet<String> = ["the", "a"].iter().map(|s| s.to_string()).collect();
        assert_eq!(
            remove_denied(toks(&["the", "cat", "a", "mat"]), &deny),
            toks(&["cat", "mat"])
        );
    }
}

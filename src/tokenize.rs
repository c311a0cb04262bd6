/// Tokenization and token-level cleanup.
use once_cell::sync::Lazy;
use regex::Regex;

/// A maximal run of word characters, or any single non-whitespace,
/// non-word character (punctuation).
static WORD_OR_PUNCT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+|[^\s\w]").expect("WORD_OR_PUNCT: invalid pattern"));

/// Split `text` into tokens.
///
/// With `on_punctuation` set, every punctuation character becomes its own
/// single-character token and words (letters, digits, underscore) stay
/// together. Otherwise the split is on whitespace runs and punctuation stays
/// attached to adjacent words. Token order follows the input scan; empty
/// tokens never appear.
pub fn tokenize(text: &str, on_punctuation: bool) -> Vec<String> {
    if on_punctuation {
        WORD_OR_PUNCT
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    } else {
        text.split_whitespace().map(str::to_string).collect()
    }
}

/// Strip stray leading/trailing apostrophes from each token, dropping tokens
/// that become empty. Meant for whitespace-mode tokens, where quotes cling to
/// words (`'Hello'` → `Hello`).
pub fn clean_tokens(tokens: Vec<String>) -> Vec<String> {
    tokens
        .into_iter()
        .map(|t| t.trim_matches(|c| c == '\'' || c == '’').to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

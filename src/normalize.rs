/// Character-level normalization: stray byte artifacts, punctuation mapping,
/// and non-printable removal.
///
/// The built-in tables were derived from a movie-review corpus; both are
/// injectable so callers can supply their own.
use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Byte-level artifacts seen in the wild (Windows-1252 leftovers, soft
/// hyphens, private-use bullets). Each occurrence is replaced with a filler.
pub const WEIRD_CHARS: &[char] = &[
    '\u{0096}', '\u{0091}', '\u{0097}', '\u{00AD}', '\u{0084}', '\u{0008}',
    '\u{0080}', '\u{008E}', '\u{009E}', '\u{0095}', '\u{009A}', '\u{0010}',
    '\u{008D}', '\u{F0B7}',
];

/// What to do with a mapped character.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharAction {
    /// Replace every occurrence with this literal.
    Replace(String),
    /// Leave the character alone; a later context-sensitive stage owns it
    /// (dashes, see `resolve_dashes`).
    Deferred,
}

impl CharAction {
    fn replace(with: &str) -> Self {
        CharAction::Replace(with.to_string())
    }
}

/// Mapping from single characters to their replacement (or deferral).
///
/// Substitutions target disjoint single source characters, so application
/// order over the entries does not affect the output.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CharacterMap {
    entries: HashMap<char, CharAction>,
}

/// Characters the built-in map turns into spaces. Apostrophe variants are
/// unified instead (they matter in contractions like "don't"), and `-` is
/// deferred to dash resolution.
const SPACED_OUT: &[char] = &[
    '%', ')', '}', '/', '$', '_', '£', '\\', '“', '~', '¦', '»', '^', '¨',
    '(', '”', '|', '.', '[', '°', '¡', '·', '!', '+', '¤', '¿', ';', '{',
    '"', '?', '<', '>', '–', '®', '*', '=', '#', ']', '…', ':', ',', '&',
    '₤', '§', '`', '@', '«', '½', '¢', '©', '″', '，', '、', '★', '▼',
];

static DEFAULT_MAP: Lazy<CharacterMap> = Lazy::new(|| {
    let mut map = CharacterMap::empty();
    for &c in SPACED_OUT {
        map.insert(c, CharAction::replace(" "));
    }
    for c in ['´', '’', '‘'] {
        map.insert(c, CharAction::replace("'"));
    }
    map.insert('\'', CharAction::replace("'"));
    map.insert('-', CharAction::Deferred);
    map
});

impl CharacterMap {
    /// The built-in review-corpus map.
    pub fn standard() -> Self {
        DEFAULT_MAP.clone()
    }

    /// A map with no entries; `apply` becomes the identity.
    pub fn empty() -> Self {
        CharacterMap {
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, from: char, action: CharAction) {
        self.entries.insert(from, action);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply every non-deferred substitution to `text`.
    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (&from, action) in &self.entries {
            if let CharAction::Replace(with) = action {
                if out.contains(from) {
                    out = out.replace(from, with);
                }
            }
        }
        out
    }
}

impl Default for CharacterMap {
    fn default() -> Self {
        CharacterMap::standard()
    }
}

/// Replace every occurrence of each listed character with `filler`.
pub fn clean_weird_chars(text: &str, weird_chars: &[char], filler: &str) -> String {
    let mut out = text.to_string();
    for &c in weird_chars {
        if out.contains(c) {
            out = out.replace(c, filler);
        }
    }
    out
}

/// Drop control characters (tabs and newlines included); everything else
/// passes through untouched.
pub fn remove_non_printable(text: &str) -> String {
    text.chars().filter(|c| !c.is_control()).collect()
}

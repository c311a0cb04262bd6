/// HTML tag removal that leaves text content (and hearts) intact.
use once_cell::sync::Lazy;
use regex::Regex;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("TAG: invalid pattern"));

/// Stand-in for "<3" while tags are removed. A private-use code point, so it
/// cannot collide with real document text that survives tag removal.
const HEART_PLACEHOLDER: &str = "\u{E000}";

/// Remove everything shaped like a tag (`<`, any non-`>` run, `>`).
///
/// The emoticon "<3" is protected: it is swapped for a placeholder before
/// the regex pass and restored afterwards. Stray `<` or `>` with no pairing
/// are left untouched, as is all text between tags.
pub fn strip_html(text: &str) -> String {
    let protected = text.replace("<3", HEART_PLACEHOLDER);
    let stripped = TAG.replace_all(&protected, "");
    stripped.replace(HEART_PLACEHOLDER, "<3")
}

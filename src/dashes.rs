/// Context-sensitive dash handling.
///
/// A dash is kept only when it sits inside a word, i.e. both immediate
/// neighbors are alphanumeric. Every other dash (string boundary, next to
/// whitespace or punctuation, runs of dashes) becomes a single space.
/// Decisions are made against the original character sequence, so the scan
/// is a single O(n) pass and the function is idempotent.
pub fn resolve_dashes(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == '-' {
            let word_internal = i > 0
                && chars[i - 1].is_alphanumeric()
                && i + 1 < chars.len()
                && chars[i + 1].is_alphanumeric();
            out.push(if word_internal { '-' } else { ' ' });
        } else {
            out.push(c);
        }
    }
    out
}

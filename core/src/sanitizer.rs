//! Input filtering to the postcode alphabet.
//!
//! Only `A`-`Z`, `0`-`9` and single spaces survive. Lowercase ASCII letters are
//! folded to uppercase; everything else (punctuation, control characters,
//! non-ASCII letters and digits) is dropped rather than substituted.

/// Whether `ch` is kept by [`sanitize`] (before case folding).
pub fn is_allowed(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == ' '
}

/// Filter `raw` to the postcode alphabet and collapse runs of spaces.
///
/// A space is dropped when the previously kept character is also a space.
/// Because every decision only looks at what was kept so far,
/// `sanitize(a + b)` always starts with `sanitize(a)`.
pub fn sanitize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars().filter(|c| is_allowed(*c)) {
        if ch == ' ' && out.ends_with(' ') {
            continue;
        }
        out.push(ch.to_ascii_uppercase());
    }
    out
}

/// Number of characters in `text` that are not spaces.
pub fn non_space_len(text: &str) -> usize {
    text.chars().filter(|c| *c != ' ').count()
}

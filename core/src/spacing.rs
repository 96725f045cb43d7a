//! Placement of the space between outward and inward code.

use crate::class::classify_text;
use crate::matcher::FormatMatcher;
use tracing::debug;

/// Decides when the separating space goes in, and whether a space typed by
/// the user is acceptable.
#[derive(Debug, Clone)]
pub struct SpaceInserter {
    matcher: FormatMatcher,
}

impl SpaceInserter {
    pub fn new(matcher: FormatMatcher) -> Self {
        Self { matcher }
    }

    /// Insert the separator into `text` if the surviving shapes now agree on
    /// where the outward code ends.
    ///
    /// Returns `None` when `text` already has a space, when shapes of
    /// different outward lengths still survive, or when nothing matches.
    /// The space goes right after the outward code, which is usually just
    /// before the last character but can be earlier when the ambiguity only
    /// resolved later (`B11A` becomes `B1 1A`).
    pub fn insert_separator(&self, text: &str) -> Option<String> {
        if text.contains(' ') {
            return None;
        }
        let classes = classify_text(text);
        let outward_len = self.matcher.match_prefix(&classes).outward_len?;
        if outward_len >= classes.len() {
            return None;
        }

        let mut out = String::with_capacity(text.len() + 1);
        let mut seen = 0;
        for ch in text.chars() {
            if seen == outward_len {
                out.push(' ');
                seen += 1;
            }
            out.push(ch);
            if ch.is_ascii_alphanumeric() {
                seen += 1;
            }
        }
        debug!(outward_len, text = %out, "inserted separator");
        Some(out)
    }

    /// Whether a space typed at the end of `text` should be kept.
    ///
    /// The field must be non-empty, must not already contain a space, and
    /// the outward code must be able to end here: either some surviving
    /// shape's outward code is no longer than what was typed, or nothing
    /// matches at all (unrecognized input is never restricted).
    pub fn accepts_typed_space(&self, text: &str) -> bool {
        if text.is_empty() || text.contains(' ') {
            return false;
        }
        let classes = classify_text(text);
        let result = self.matcher.match_prefix(&classes);
        if result.is_unconstrained() {
            return true;
        }
        let table = self.matcher.table();
        result
            .surviving
            .iter()
            .filter_map(|&i| table.get(i))
            .any(|shape| shape.outward_len() <= classes.len())
    }
}

/// Outward length fixed by a space already in `text`: the number of
/// non-space characters before the first space.
pub fn fixed_outward_len(text: &str) -> Option<usize> {
    let (outward, _) = text.split_once(' ')?;
    Some(classify_text(outward).len())
}

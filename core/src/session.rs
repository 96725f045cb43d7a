//! Edit session: the stateful part of the postcode formatter.
//!
//! The `EditSession` receives every edit the host proposes for one text
//! field, classifies it, and decides the resulting text and keyboard
//! recommendation. It owns the typing history and the active recommendation;
//! nothing else holds mutable state.
//!
//! Only simple edits at the end of the text (typing one character, deleting
//! the last one) take part in keyboard switching. Pastes, mid-text edits and
//! multi-character deletes are applied as-is and leave the keyboard alone.

use crate::class::CharacterClass;
use crate::decision::Decision;
use crate::history::{TypedCharacter, TypingHistory};
use crate::matcher::FormatMatcher;
use crate::pattern::PatternTable;
use crate::resolver::{resolve, Recommendation};
use crate::sanitizer::sanitize;
use crate::spacing::{fixed_outward_len, SpaceInserter};
use crate::Config;
use std::ops::Range;
use std::sync::Arc;
use tracing::debug;

/// Kind of a proposed edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// One character typed at the end of the text.
    TrailingInsert(char),
    /// The last character deleted, nothing inserted.
    TrailingDelete,
    /// Anything else: pastes, mid-text edits, multi-character deletes.
    Other,
}

/// Classify an edit of `range` (character positions, already clamped) in a
/// text of `len` characters.
pub fn classify_edit(len: usize, range: &Range<usize>, replacement: &str) -> EditKind {
    let mut chars = replacement.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if range.start == len && range.end == len => EditKind::TrailingInsert(ch),
        (None, _) if len > 0 && range.end == len && range.start + 1 == len => {
            EditKind::TrailingDelete
        }
        _ => EditKind::Other,
    }
}

/// Per-field session state and edit processing.
#[derive(Debug, Clone)]
pub struct EditSession {
    matcher: FormatMatcher,
    spacer: SpaceInserter,

    /// One entry per non-space character in the field
    history: TypingHistory,

    /// Keyboard class the session believes is active
    active: Option<CharacterClass>,

    auto_space: bool,
    restore_on_backspace: bool,
}

impl EditSession {
    /// Create a session with default behaviour.
    pub fn new(table: Arc<PatternTable>) -> Self {
        Self::with_config(table, &Config::default())
    }

    /// Create a session using the behaviour flags of `config`.
    ///
    /// The shapes listed in `config` are not consulted; `table` is used.
    pub fn with_config(table: Arc<PatternTable>, config: &Config) -> Self {
        let matcher = FormatMatcher::new(table);
        Self {
            spacer: SpaceInserter::new(matcher.clone()),
            matcher,
            history: TypingHistory::new(),
            active: None,
            auto_space: config.auto_space,
            restore_on_backspace: config.restore_on_backspace,
        }
    }

    /// Get the typing history.
    pub fn history(&self) -> &TypingHistory {
        &self.history
    }

    /// Keyboard class the session currently considers active.
    pub fn active_class(&self) -> Option<CharacterClass> {
        self.active
    }

    /// Forget all state, as after detaching and re-attaching.
    pub fn reset(&mut self) {
        self.history.clear();
        self.active = None;
    }

    /// Process an edit proposed by the host.
    ///
    /// `selection` is a half-open range of character positions in
    /// `current_text`; out-of-range bounds are clamped. `replacement` is the
    /// raw text to put there.
    pub fn propose_edit(
        &mut self,
        current_text: &str,
        selection: Range<usize>,
        replacement: &str,
    ) -> Decision {
        let len = current_text.chars().count();
        let end = selection.end.min(len);
        let range = selection.start.min(end)..end;

        self.resync(current_text);

        let kind = classify_edit(len, &range, replacement);
        debug!(?kind, ?range, "proposed edit");

        let decision = match kind {
            EditKind::TrailingInsert(ch) => self.trailing_insert(current_text, ch),
            EditKind::TrailingDelete => self.trailing_delete(current_text),
            EditKind::Other => self.other_edit(current_text, range, replacement),
        };

        debug!(
            accepted = decision.accepted,
            text = %decision.new_text,
            recommendation = %decision.recommended_class,
            "edit decided"
        );
        decision
    }

    /// Rebuild the history if the host shows text this session did not produce.
    fn resync(&mut self, text: &str) {
        if !self.history.is_in_sync_with(text) {
            debug!(
                tracked = self.history.len(),
                text, "history out of sync with field, rebuilding"
            );
            self.history = TypingHistory::untracked(text);
            self.active = None;
        }
    }

    fn trailing_insert(&mut self, text: &str, raw: char) -> Decision {
        let caret = text.chars().count();
        let Some(ch) = sanitize(raw.encode_utf8(&mut [0; 4])).chars().next() else {
            debug!(?raw, "rejected character outside postcode alphabet");
            return Decision::reject(text, caret);
        };

        match CharacterClass::of(ch) {
            Some(class) => self.insert_char(text, ch, class),
            None => self.insert_space(text, caret),
        }
    }

    fn insert_char(&mut self, text: &str, ch: char, class: CharacterClass) -> Decision {
        let mut new_text = String::with_capacity(text.len() + 2);
        new_text.push_str(text);
        new_text.push(ch);

        let mut classes = self.history.classes();
        classes.push(class);
        let result = self
            .matcher
            .match_with_outward(&classes, fixed_outward_len(&new_text));

        // The layout the character was typed on is the one in use now.
        let recommendation = resolve(result.next_classes, Some(class));

        self.history.push(TypedCharacter::new(ch, self.active));

        if self.auto_space {
            if let Some(spaced) = self.spacer.insert_separator(&new_text) {
                new_text = spaced;
            }
        }

        self.active = Some(recommendation.class().unwrap_or(class));
        Decision::accept(new_text, recommendation)
    }

    fn insert_space(&mut self, text: &str, caret: usize) -> Decision {
        if !self.spacer.accepts_typed_space(text) {
            debug!("rejected space");
            return Decision::reject(text, caret);
        }

        let new_text = format!("{text} ");
        let result = self
            .matcher
            .match_with_outward(&self.history.classes(), fixed_outward_len(&new_text));
        let recommendation = resolve(result.next_classes, self.active);
        if let Some(class) = recommendation.class() {
            self.active = Some(class);
        }
        Decision::accept(new_text, recommendation)
    }

    fn trailing_delete(&mut self, text: &str) -> Decision {
        let mut new_text = text.to_string();
        let Some(removed) = new_text.pop() else {
            return Decision::reject(text, 0);
        };

        // A space has no history slot.
        if removed == ' ' {
            return Decision::accept(new_text, Recommendation::NoChange);
        }

        let popped = self.history.pop();
        if !self.restore_on_backspace {
            self.active = None;
            return Decision::accept(new_text, Recommendation::NoChange);
        }

        let restored = popped.and_then(|entry| entry.active_when_typed);
        self.active = restored;
        Decision::accept(new_text, restored.into())
    }

    fn other_edit(&mut self, text: &str, range: Range<usize>, replacement: &str) -> Decision {
        let inserted = sanitize(replacement);
        if inserted.is_empty() && !replacement.is_empty() && range.is_empty() {
            debug!("rejected edit with nothing to insert");
            return Decision::reject(text, range.end);
        }

        let prefix: String = text.chars().take(range.start).collect();
        let suffix: String = text.chars().skip(range.end).collect();

        // Sanitizing is prefix-stable, so the caret lands right after the
        // inserted text even when a double space at a seam collapses.
        let caret = sanitize(&format!("{prefix}{inserted}")).chars().count();
        let new_text = sanitize(&format!("{prefix}{inserted}{suffix}"));

        self.history = TypingHistory::untracked(&new_text);
        self.active = None;
        Decision::accept_at(new_text, caret)
    }
}

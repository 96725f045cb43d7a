//! Per-character typing history used to restore the keyboard on backspace.
//!
//! One entry exists for each non-space character in the field. Each entry
//! remembers which class was recommended when the character was typed, so a
//! backspace can put the keyboard back the way it was.

use crate::class::CharacterClass;
use serde::{Deserialize, Serialize};

/// One accepted character and the recommendation active when it was typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedCharacter {
    pub ch: char,
    /// `None` when no recommendation existed (pasted or mid-text input).
    pub active_when_typed: Option<CharacterClass>,
}

impl TypedCharacter {
    pub fn new(ch: char, active_when_typed: Option<CharacterClass>) -> Self {
        Self {
            ch,
            active_when_typed,
        }
    }

    /// Class of the character itself.
    pub fn class(&self) -> Option<CharacterClass> {
        CharacterClass::of(self.ch)
    }
}

/// Undo log of typed characters, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypingHistory {
    entries: Vec<TypedCharacter>,
}

impl TypingHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a history for `text` where no character has a recorded class.
    pub fn untracked(text: &str) -> Self {
        let entries = text
            .chars()
            .filter(|c| *c != ' ')
            .map(|c| TypedCharacter::new(c, None))
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[TypedCharacter] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, entry: TypedCharacter) {
        self.entries.push(entry);
    }

    /// Remove the last entry (backspace).
    pub fn pop(&mut self) -> Option<TypedCharacter> {
        self.entries.pop()
    }

    pub fn last(&self) -> Option<&TypedCharacter> {
        self.entries.last()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Classes of all entries, in order. Entries without a class are skipped.
    pub fn classes(&self) -> Vec<CharacterClass> {
        self.entries.iter().filter_map(TypedCharacter::class).collect()
    }

    /// Whether this history still describes the non-space characters of `text`.
    pub fn is_in_sync_with(&self, text: &str) -> bool {
        let mut chars = text.chars().filter(|c| *c != ' ');
        self.entries.iter().all(|e| chars.next() == Some(e.ch)) && chars.next().is_none()
    }
}

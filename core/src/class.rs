//! Letter/digit classification of postcode characters.
//!
//! Every accepted character falls into exactly one `CharacterClass`, which is
//! what the host maps onto an on-screen keyboard layout ([ABC] or [123]).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Character class of a single postcode slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    /// `A`..`Z`
    Letter,
    /// `0`..`9`
    Digit,
}

impl CharacterClass {
    /// Classify a character. Spaces and anything outside `[A-Za-z0-9]` have
    /// no class.
    pub fn of(ch: char) -> Option<Self> {
        if ch.is_ascii_alphabetic() {
            Some(Self::Letter)
        } else if ch.is_ascii_digit() {
            Some(Self::Digit)
        } else {
            None
        }
    }

    /// Parse a slot from the `@`/`#` shape notation.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '@' => Some(Self::Letter),
            '#' => Some(Self::Digit),
            _ => None,
        }
    }

    /// Symbol used in the shape notation.
    pub fn symbol(self) -> char {
        match self {
            Self::Letter => '@',
            Self::Digit => '#',
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter => f.write_str("letter"),
            Self::Digit => f.write_str("digit"),
        }
    }
}

/// Set of classes demanded at one slot position (size 0, 1 or 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassSet {
    letter: bool,
    digit: bool,
}

impl ClassSet {
    /// The empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A set holding one class.
    pub fn single(class: CharacterClass) -> Self {
        let mut set = Self::empty();
        set.insert(class);
        set
    }

    /// Both classes.
    pub fn both() -> Self {
        Self {
            letter: true,
            digit: true,
        }
    }

    pub fn insert(&mut self, class: CharacterClass) {
        match class {
            CharacterClass::Letter => self.letter = true,
            CharacterClass::Digit => self.digit = true,
        }
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Letter => self.letter,
            CharacterClass::Digit => self.digit,
        }
    }

    pub fn len(&self) -> usize {
        usize::from(self.letter) + usize::from(self.digit)
    }

    pub fn is_empty(&self) -> bool {
        !self.letter && !self.digit
    }

    /// The only member, if the set has exactly one.
    pub fn only(&self) -> Option<CharacterClass> {
        match (self.letter, self.digit) {
            (true, false) => Some(CharacterClass::Letter),
            (false, true) => Some(CharacterClass::Digit),
            _ => None,
        }
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        let mut set = Self::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

/// Classes of the non-space characters of `text`, in order.
pub fn classify_text(text: &str) -> Vec<CharacterClass> {
    text.chars().filter_map(CharacterClass::of).collect()
}

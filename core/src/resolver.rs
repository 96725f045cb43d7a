//! Keyboard-type decision table.
//!
//! Turns the set of classes the next slot may take into one recommendation,
//! never forcing a switch when the current layout is already a valid
//! continuation.

use crate::class::{CharacterClass, ClassSet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What the host should do with its keyboard layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Recommendation {
    /// Switch to (or stay on) the letter layout.
    Letter,
    /// Switch to (or stay on) the digit layout.
    Digit,
    /// Leave the layout alone.
    #[default]
    NoChange,
}

impl Recommendation {
    /// The recommended class, `None` for [`Recommendation::NoChange`].
    pub fn class(self) -> Option<CharacterClass> {
        match self {
            Self::Letter => Some(CharacterClass::Letter),
            Self::Digit => Some(CharacterClass::Digit),
            Self::NoChange => None,
        }
    }

    pub fn is_change(self) -> bool {
        self != Self::NoChange
    }
}

impl From<CharacterClass> for Recommendation {
    fn from(class: CharacterClass) -> Self {
        match class {
            CharacterClass::Letter => Self::Letter,
            CharacterClass::Digit => Self::Digit,
        }
    }
}

impl From<Option<CharacterClass>> for Recommendation {
    fn from(class: Option<CharacterClass>) -> Self {
        class.map_or(Self::NoChange, Self::from)
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter => f.write_str("ABC"),
            Self::Digit => f.write_str("123"),
            Self::NoChange => f.write_str("-"),
        }
    }
}

/// Resolve the next-slot classes against the class currently active.
///
/// The whole table:
///
/// | next classes | current        | result        |
/// |--------------|----------------|---------------|
/// | none         | any            | `NoChange`    |
/// | one class    | any            | that class    |
/// | both         | one of them    | `NoChange`    |
/// | both         | none           | `NoChange`    |
pub fn resolve(next: ClassSet, current: Option<CharacterClass>) -> Recommendation {
    if next.is_empty() {
        return Recommendation::NoChange;
    }
    if let Some(only) = next.only() {
        return only.into();
    }
    // Both classes remain. Either the active layout is already one of them,
    // or nothing is active (after a paste) and there is nothing to guess from.
    debug_assert!(current.map_or(true, |class| next.contains(class)));
    Recommendation::NoChange
}

#[cfg(test)]
mod tests {
    use super::*;
    use CharacterClass::*;

    #[test]
    fn test_empty_set_defers() {
        assert_eq!(resolve(ClassSet::empty(), None), Recommendation::NoChange);
        assert_eq!(resolve(ClassSet::empty(), Some(Letter)), Recommendation::NoChange);
    }

    #[test]
    fn test_single_class_wins_regardless_of_current() {
        assert_eq!(resolve(ClassSet::single(Digit), Some(Letter)), Recommendation::Digit);
        assert_eq!(resolve(ClassSet::single(Digit), Some(Digit)), Recommendation::Digit);
        assert_eq!(resolve(ClassSet::single(Letter), None), Recommendation::Letter);
    }

    #[test]
    fn test_ambiguous_keeps_current_layout() {
        assert_eq!(resolve(ClassSet::both(), Some(Letter)), Recommendation::NoChange);
        assert_eq!(resolve(ClassSet::both(), Some(Digit)), Recommendation::NoChange);
    }

    #[test]
    fn test_ambiguous_without_current_does_not_guess() {
        assert_eq!(resolve(ClassSet::both(), None), Recommendation::NoChange);
    }

    #[test]
    fn test_recommendation_conversions() {
        assert_eq!(Recommendation::from(Some(Digit)), Recommendation::Digit);
        assert_eq!(Recommendation::from(None), Recommendation::NoChange);
        assert_eq!(Recommendation::Letter.class(), Some(Letter));
        assert!(!Recommendation::NoChange.is_change());
    }
}

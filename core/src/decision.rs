//! Edit decision returned to the host.
//!
//! Like the IME context it is a plain data container: after proposing an
//! edit the host reads these fields and updates its text field and keyboard.

use crate::resolver::Recommendation;
use serde::{Deserialize, Serialize};

/// Outcome of one proposed edit.
///
/// # Fields
///
/// - `accepted`: `false` means the host must leave its text untouched
/// - `new_text`: text to display (equal to the old text when rejected)
/// - `new_selection_position`: caret position in characters
/// - `recommended_class`: keyboard layout to select, or `NoChange`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub accepted: bool,
    pub new_text: String,
    pub new_selection_position: usize,
    pub recommended_class: Recommendation,
}

impl Decision {
    /// Accept an edit producing `new_text` with the caret at its end.
    pub fn accept(new_text: String, recommended_class: Recommendation) -> Self {
        let new_selection_position = new_text.chars().count();
        Self {
            accepted: true,
            new_text,
            new_selection_position,
            recommended_class,
        }
    }

    /// Accept an edit with an explicit caret position.
    pub fn accept_at(new_text: String, new_selection_position: usize) -> Self {
        Self {
            accepted: true,
            new_text,
            new_selection_position,
            recommended_class: Recommendation::NoChange,
        }
    }

    /// Reject an edit; the text stays as it was.
    pub fn reject(current_text: &str, caret: usize) -> Self {
        Self {
            accepted: false,
            new_text: current_text.to_string(),
            new_selection_position: caret,
            recommended_class: Recommendation::NoChange,
        }
    }

    /// Whether the host should switch its keyboard layout.
    pub fn has_recommendation(&self) -> bool {
        self.recommended_class.is_change()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_puts_caret_at_end() {
        let d = Decision::accept("M60 2".to_string(), Recommendation::Letter);
        assert!(d.accepted);
        assert_eq!(d.new_selection_position, 5);
        assert!(d.has_recommendation());
    }

    #[test]
    fn test_reject_keeps_text() {
        let d = Decision::reject("B1 ", 3);
        assert!(!d.accepted);
        assert_eq!(d.new_text, "B1 ");
        assert_eq!(d.recommended_class, Recommendation::NoChange);
    }

    #[test]
    fn test_serializes_to_json() {
        let d = Decision::accept("B".to_string(), Recommendation::NoChange);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(
            json,
            r#"{"accepted":true,"new_text":"B","new_selection_position":1,"recommended_class":"NoChange"}"#
        );
        let back: Decision = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }
}

//! Postcode shapes and the immutable table that holds them.
//!
//! A shape is the letter/digit pattern of a postcode: an outward code of 2-4
//! slots followed by the fixed inward code `# @ @`. Shapes are written in the
//! same notation the UK format list uses, e.g. `"@@#@ #@@"` for `EC2R 8AH`.

use crate::class::CharacterClass;
use crate::error::{PostcodeError, Result};
use std::fmt;

/// The inward code is the same for every shape: digit, letter, letter.
pub const INWARD_CODE: [CharacterClass; 3] = [
    CharacterClass::Digit,
    CharacterClass::Letter,
    CharacterClass::Letter,
];

pub const MIN_OUTWARD_LEN: usize = 2;
pub const MAX_OUTWARD_LEN: usize = 4;

/// One valid postcode shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostcodeShape {
    outward: Vec<CharacterClass>,
}

impl PostcodeShape {
    /// Build a shape from its outward slots.
    pub fn new(outward: Vec<CharacterClass>) -> Result<Self> {
        if !(MIN_OUTWARD_LEN..=MAX_OUTWARD_LEN).contains(&outward.len()) {
            let format = outward.iter().map(|c| c.symbol()).collect();
            return Err(PostcodeError::InvalidShape {
                format,
                reason: "outward code must have 2 to 4 slots",
            });
        }
        Ok(Self { outward })
    }

    /// Parse the `@`/`#` notation, e.g. `"@## #@@"`.
    pub fn parse(format: &str) -> Result<Self> {
        let invalid = |reason| PostcodeError::InvalidShape {
            format: format.to_string(),
            reason,
        };

        let (outward, inward) = format
            .trim()
            .split_once(' ')
            .ok_or_else(|| invalid("missing space between outward and inward code"))?;

        let inward: Option<Vec<_>> = inward.chars().map(CharacterClass::from_symbol).collect();
        if inward.as_deref() != Some(&INWARD_CODE[..]) {
            return Err(invalid("inward code must be `#@@`"));
        }

        let outward: Vec<_> = outward
            .chars()
            .map(CharacterClass::from_symbol)
            .collect::<Option<_>>()
            .ok_or_else(|| invalid("only `@` and `#` are allowed"))?;

        if !(MIN_OUTWARD_LEN..=MAX_OUTWARD_LEN).contains(&outward.len()) {
            return Err(invalid("outward code must have 2 to 4 slots"));
        }

        Ok(Self { outward })
    }

    pub fn outward(&self) -> &[CharacterClass] {
        &self.outward
    }

    pub fn outward_len(&self) -> usize {
        self.outward.len()
    }

    /// Total number of slots, outward plus inward.
    pub fn len(&self) -> usize {
        self.outward.len() + INWARD_CODE.len()
    }

    /// Class demanded at a zero-based slot position.
    pub fn slot(&self, index: usize) -> Option<CharacterClass> {
        if index < self.outward.len() {
            Some(self.outward[index])
        } else {
            INWARD_CODE.get(index - self.outward.len()).copied()
        }
    }

    /// Iterate all slots in order.
    pub fn slots(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        self.outward.iter().copied().chain(INWARD_CODE)
    }

    /// Whether the first `prefix.len()` slots equal `prefix` exactly.
    pub fn matches_prefix(&self, prefix: &[CharacterClass]) -> bool {
        prefix.len() <= self.len() && self.slots().zip(prefix).all(|(slot, class)| slot == *class)
    }
}

impl fmt::Display for PostcodeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for class in &self.outward {
            write!(f, "{}", class.symbol())?;
        }
        f.write_str(" ")?;
        for class in INWARD_CODE {
            write!(f, "{}", class.symbol())?;
        }
        Ok(())
    }
}

/// Fixed, read-only set of shapes shared by every session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternTable {
    shapes: Vec<PostcodeShape>,
}

impl PatternTable {
    pub fn new(shapes: Vec<PostcodeShape>) -> Result<Self> {
        if shapes.is_empty() {
            return Err(PostcodeError::EmptyPatternTable);
        }
        Ok(Self { shapes })
    }

    /// Build a table from shape format strings (`"@# #@@"`, ...).
    pub fn from_formats<S: AsRef<str>>(formats: &[S]) -> Result<Self> {
        let shapes = formats
            .iter()
            .map(|f| PostcodeShape::parse(f.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::new(shapes)
    }

    pub fn shapes(&self) -> &[PostcodeShape] {
        &self.shapes
    }

    pub fn get(&self, index: usize) -> Option<&PostcodeShape> {
        self.shapes.get(index)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Length of the longest shape in slots.
    pub fn max_len(&self) -> usize {
        self.shapes.iter().map(PostcodeShape::len).max().unwrap_or(0)
    }

    /// Format strings of every shape, in table order.
    pub fn formats(&self) -> Vec<String> {
        self.shapes.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CharacterClass::*;

    #[test]
    fn test_parse_shape() {
        let shape = PostcodeShape::parse("@@#@ #@@").unwrap();
        assert_eq!(shape.outward(), &[Letter, Letter, Digit, Letter]);
        assert_eq!(shape.outward_len(), 4);
        assert_eq!(shape.len(), 7);
        assert_eq!(shape.slot(4), Some(Digit));
        assert_eq!(shape.slot(6), Some(Letter));
        assert_eq!(shape.slot(7), None);
        assert_eq!(shape.to_string(), "@@#@ #@@");
    }

    #[test]
    fn test_parse_rejects_bad_formats() {
        for bad in ["@##@@", "@ #@@", "@@@@@ #@@", "@x #@@", "@# #@#", "@# #@@@"] {
            assert!(PostcodeShape::parse(bad).is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_shape_new_checks_outward_len() {
        assert!(PostcodeShape::new(vec![Letter]).is_err());
        assert!(PostcodeShape::new(vec![Letter, Digit]).is_ok());
    }

    #[test]
    fn test_matches_prefix() {
        let shape = PostcodeShape::parse("@# #@@").unwrap();
        assert!(shape.matches_prefix(&[]));
        assert!(shape.matches_prefix(&[Letter, Digit, Digit]));
        assert!(!shape.matches_prefix(&[Letter, Letter]));
        assert!(shape.matches_prefix(&[Letter, Digit, Digit, Letter, Letter]));
        assert!(!shape.matches_prefix(&[Letter, Digit, Digit, Letter, Letter, Letter]));
    }

    #[test]
    fn test_table_from_formats() {
        let table = PatternTable::from_formats(&["@# #@@", "@@#@ #@@"]).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.max_len(), 7);
        assert_eq!(table.formats(), vec!["@# #@@", "@@#@ #@@"]);
    }

    #[test]
    fn test_empty_table_is_error() {
        let formats: [&str; 0] = [];
        assert!(matches!(
            PatternTable::from_formats(&formats),
            Err(PostcodeError::EmptyPatternTable)
        ));
    }
}

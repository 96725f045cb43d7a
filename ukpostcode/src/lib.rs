//! ukpostcode crate root
//!
//! UK-specific layer over `postcode-core`: the six UK postcode shapes, a
//! configuration with UK defaults, and convenience constructors for sessions
//! and engines.
//!
//! Public API exported here:
//! - `UK_POSTCODE_FORMATS` and `uk_pattern_table`
//! - `UkPostcodeConfig` from `config`
//! - `new_session` / `new_engine`
//! - the core types a host needs (`EditSession`, `Decision`, `Recommendation`, ...)

pub mod config;

use std::sync::Arc;

// Re-export the core types hosts work with.
pub use postcode_core::{
    classify_edit, sanitize, CharacterClass, Config, Decision, EditKind, EditSession,
    FormatMatcher, PatternTable, PostcodeEngine, PostcodeError, PostcodeShape, Recommendation,
    SessionHandle, TypedCharacter, TypingHistory,
};

pub use config::UkPostcodeConfig;

/// Letter/digit shapes of UK postcodes (`@` letter, `#` digit).
///
/// | Format     | Example   | Place                                          |
/// |------------|-----------|------------------------------------------------|
/// | `@# #@@`   | B1 1AA    | Royal Mail Central Birmingham Delivery Office  |
/// | `@## #@@`  | M60 2LA   | Manchester City Council                        |
/// | `@@# #@@`  | SA6 7JL   | DVLA, Swansea                                  |
/// | `@@## #@@` | SO17 1BJ  | University of Southampton                      |
/// | `@#@ #@@`  | W1D 1AN   | Tottenham Court Road Tube Station, London      |
/// | `@@#@ #@@` | EC2R 8AH  | Bank of England, London                        |
pub const UK_POSTCODE_FORMATS: [&str; 6] = [
    "@# #@@", "@## #@@", "@@# #@@", "@@## #@@", "@#@ #@@", "@@#@ #@@",
];

/// Shape formats as owned strings, for populating a [`Config`].
pub fn uk_postcode_formats() -> Vec<String> {
    UK_POSTCODE_FORMATS.iter().map(|s| s.to_string()).collect()
}

/// The UK pattern table.
pub fn uk_pattern_table() -> PatternTable {
    PatternTable::from_formats(&UK_POSTCODE_FORMATS).expect("built-in UK shapes parse")
}

/// A session for one UK postcode field with default behaviour.
pub fn new_session() -> EditSession {
    EditSession::new(Arc::new(uk_pattern_table()))
}

/// An engine for UK postcode fields using `config`.
pub fn new_engine(config: UkPostcodeConfig) -> postcode_core::Result<PostcodeEngine> {
    PostcodeEngine::from_config(config.into_base())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uk_table() {
        let table = uk_pattern_table();
        assert_eq!(table.len(), 6);
        assert_eq!(table.formats(), uk_postcode_formats());
        assert_eq!(table.max_len(), 7);
    }

    #[test]
    fn test_new_engine_uses_uk_shapes() {
        let engine = new_engine(UkPostcodeConfig::default()).unwrap();
        assert_eq!(engine.table().len(), 6);
    }
}

//! postcode-core
//!
//! Country-independent core of the postcode entry assistant: shape matching,
//! keyboard-type resolution, input sanitizing and the per-field edit session.
//! Country crates (`ukpostcode`) supply the shape list and defaults.
//!
//! Public API:
//! - `PatternTable` / `PostcodeShape` - the letter/digit shapes a postcode may take
//! - `FormatMatcher` - which shapes survive a typed prefix, and what comes next
//! - `resolve` / `Recommendation` - the keyboard-type decision table
//! - `EditSession` - per-field state and edit processing
//! - `PostcodeEngine` - attach/detach of sessions
//! - `Config` - behaviour flags and shape formats
use serde::{Deserialize, Serialize};

pub mod class;
pub use class::{classify_text, CharacterClass, ClassSet};

pub mod error;
pub use error::{PostcodeError, Result};

pub mod pattern;
pub use pattern::{PatternTable, PostcodeShape, INWARD_CODE};

pub mod sanitizer;
pub use sanitizer::{is_allowed, non_space_len, sanitize};

pub mod matcher;
pub use matcher::{FormatMatcher, MatchResult};

pub mod resolver;
pub use resolver::{resolve, Recommendation};

pub mod history;
pub use history::{TypedCharacter, TypingHistory};

pub mod spacing;
pub use spacing::{fixed_outward_len, SpaceInserter};

pub mod decision;
pub use decision::Decision;

pub mod session;
pub use session::{classify_edit, EditKind, EditSession};

pub mod engine;
pub use engine::{PostcodeEngine, SessionHandle};

/// Generic configuration for the postcode core.
///
/// The shape list is empty by default; country crates populate it (see
/// `ukpostcode::UkPostcodeConfig`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Insert the space between outward and inward code automatically
    pub auto_space: bool,

    /// On backspace, restore the keyboard class active when the deleted
    /// character was typed
    pub restore_on_backspace: bool,

    /// Shape formats, `@` for a letter and `#` for a digit (e.g. "@## #@@")
    pub shapes: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auto_space: true,
            restore_on_backspace: true,
            shapes: vec![],
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Build the pattern table described by `shapes`.
    pub fn pattern_table(&self) -> Result<PatternTable> {
        PatternTable::from_formats(self.shapes.as_slice())
    }
}

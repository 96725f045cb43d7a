//! Errors for the fallible setup paths (shape parsing, configuration,
//! session lookup). The edit path itself never fails.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PostcodeError {
    #[error("invalid shape format {format:?}: {reason}")]
    InvalidShape { format: String, reason: &'static str },

    #[error("pattern table has no shapes")]
    EmptyPatternTable,

    #[error("unknown session handle {0}")]
    UnknownSession(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, PostcodeError>;

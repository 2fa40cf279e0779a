//! Error types for the DevDay terminal.

use std::io;

/// Errors produced by the DevDay terminal.
#[derive(Debug, thiserror::Error)]
pub enum DevdayError {
    #[error("sink error: {0}")]
    Sink(String),

    #[error("backend error: {0}")]
    Backend(String),

    #[error("config error: {0}")]
    Config(String),

    /// A handler referenced a help entry that is not in the static table.
    #[error("help entry not found: {0}")]
    MissingHelpEntry(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, DevdayError>;

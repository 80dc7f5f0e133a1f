//! Error types for waymark

use thiserror::Error;

/// The main error type for waymark operations
#[derive(Debug, Error)]
pub enum WaymarkError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error on line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),

    #[error("No path name defined")]
    EmptyPathName,

    #[error("Path name already given: {0}")]
    DuplicatePathName(String),

    #[error("Not enough waypoints placed in '{name}': need at least 2, got {count}")]
    NotEnoughPoints { name: String, count: usize },

    #[error("No path is being placed")]
    NoActivePath,

    #[error("A path is already being placed: {0}")]
    AlreadyPlacing(String),

    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Config error: {0}")]
    ConfigError(String),
}

/// Result type alias for waymark operations
pub type Result<T> = std::result::Result<T, WaymarkError>;

impl From<toml::de::Error> for WaymarkError {
    fn from(err: toml::de::Error) -> Self {
        WaymarkError::TomlParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for WaymarkError {
    fn from(err: toml::ser::Error) -> Self {
        WaymarkError::TomlSerError(err.to_string())
    }
}

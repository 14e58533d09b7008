//! Error types for hemma
//!
//! The engine never fails during alert emission; errors only surface at the
//! loading boundaries (configuration, event sink setup) and when parsing
//! textual representations of domain enums.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for hemma operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Result type alias for hemma operations
pub type Result<T> = std::result::Result<T, Error>;

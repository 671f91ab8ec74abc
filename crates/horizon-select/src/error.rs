//! Error types for the selection adapter.

use std::num::ParseIntError;
use std::path::PathBuf;

/// Result type alias for selection operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or driving a selection adapter.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The option list is empty or contains a malformed option.
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// The staged selection is not a valid integer.
    #[error("Cannot parse staged selection '{input}' as an index: {source}")]
    Parse {
        input: String,
        #[source]
        source: ParseIntError,
    },

    /// No option carries the requested id.
    #[error("No option with id '{id}'")]
    UnknownOption { id: String },

    /// Reading or writing a configuration file failed.
    #[error("Failed to access configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration document could not be decoded or encoded.
    #[error("Invalid configuration document '{path}': {message}")]
    Format { path: PathBuf, message: String },

    /// The configuration file extension is neither `json` nor `toml`.
    #[error("Unsupported configuration format: {path}")]
    UnsupportedFormat { path: PathBuf },
}

impl Error {
    /// Create an invalid configuration error.
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// Create a parse error for the given input.
    pub fn parse(input: impl Into<String>, source: ParseIntError) -> Self {
        Self::Parse {
            input: input.into(),
            source,
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a format error.
    pub fn format(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Format {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Returns true if this is an [`Error::InvalidConfiguration`].
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. })
    }

    /// Returns true if this is an [`Error::Parse`].
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

//! Error handling for the action-inouts generator.
//!
//! This module defines the main error type `Error` used throughout the library,
//! along with a convenient `Result` type alias. Descriptor loading failures get
//! their own `LoadError` so callers can tell a missing `action.yml` apart from
//! a malformed one.
//!
//! # Examples
//!
//! ```
//! use action_inouts_core::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     Err(Error::config("no descriptor configured"))
//! }
//!
//! assert!(might_fail().is_err());
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for generator operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The action descriptor could not be loaded
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The generated file could not be written
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Template error
    #[error("Template error: {0}")]
    Template(String),

    /// Template engine error
    #[error("Template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// Parameter names rejected by strict validation
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Failure to turn the descriptor file into an `ActionDescriptor`
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Action descriptor not found at {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read action descriptor {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document parsed to nothing (empty file or a bare `null`)
    #[error("Action descriptor {} is empty", .0.display())]
    Empty(PathBuf),

    /// Missing keys, wrong types or invalid YAML
    #[error("Invalid action descriptor {}: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new template error
    pub fn template<S: Into<String>>(msg: S) -> Self {
        Self::Template(msg.into())
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }

    /// Wrap an I/O failure on the output path
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

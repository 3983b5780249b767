//! Error types for Font Catalogue.
//!
//! Index violations on the list model are programming errors and panic.
//! Everything here is recoverable: loading fonts, reading settings, and
//! talking to label sources.

use std::io;
use std::path::PathBuf;

/// The main error type for Font Catalogue operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogueError {
    /// A file could not be read or written.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// The path involved.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A settings document could not be parsed.
    #[error("Failed to parse settings: {0}")]
    SettingsParse(String),

    /// Settings could not be serialized.
    #[error("Failed to serialize settings: {0}")]
    SettingsSerialize(String),

    /// A font file or font data could not be loaded.
    #[error("Failed to load font: {0}")]
    FontLoad(String),

    /// A label source failed to produce labels.
    #[error("Label source failed: {0}")]
    Source(String),

    /// Signal-related error.
    #[error("Signal error: {0}")]
    Signal(#[from] SignalError),
}

impl CatalogueError {
    /// Creates an I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true if this error wraps a "not found" I/O error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Signal-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignalError {
    /// The connection ID is invalid or has already been disconnected.
    #[error("Invalid or disconnected connection ID")]
    InvalidConnection,
}

/// A specialized Result type for Font Catalogue operations.
pub type Result<T> = std::result::Result<T, CatalogueError>;

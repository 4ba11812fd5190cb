//! Error types for store-fs

use std::path::PathBuf;

/// Result type for store-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in store-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to deserialize entity at {path}: {message}")]
    Deserialize { path: PathBuf, message: String },

    #[error("Failed to serialize entity for {path}: {message}")]
    Serialize { path: PathBuf, message: String },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Failed to serialize {format} config for {path}: {message}")]
    ConfigSerialize {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("Invalid store directory {path}: {message}")]
    InvalidBase { path: PathBuf, message: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True when this is an I/O error caused by a missing file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }

    /// True when a file was read but its contents could not be decoded.
    pub fn is_deserialize(&self) -> bool {
        matches!(self, Self::Deserialize { .. })
    }
}

//! Error types for store-core

use uuid::Uuid;

/// Result type for store-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in store-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Roots exist only in memory and cannot be written, moved or deleted
    #[error("Entity {id} is a synthetic root and has no backing file")]
    SyntheticEntity { id: Uuid },

    /// The target parent path runs through the entity being moved
    #[error("Cannot move entity {id} beneath itself")]
    MoveCycle { id: Uuid },

    /// A path that cannot hold the entity
    #[error("Invalid path for entity {id}: {message}")]
    InvalidPath { id: Uuid, message: String },

    /// Filesystem error from store-fs
    #[error(transparent)]
    Fs(#[from] store_fs::Error),
}

//! Error types for store-model

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown entity kind: {kind}")]
    UnknownKind { kind: String },
}

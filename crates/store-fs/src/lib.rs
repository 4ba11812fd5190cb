//! Filesystem layer for the form entity store
//!
//! Provides normalized path handling, safe I/O primitives and the
//! one-file-per-entity [`FileStore`].

pub mod config;
pub mod error;
pub mod file_store;
pub mod io;
pub mod path;

pub use config::{ConfigFormat, ConfigStore};
pub use error::{Error, Result};
pub use file_store::FileStore;
pub use io::RobustnessConfig;
pub use path::NormalizedPath;

//! In-memory cache of deserialized entity files
//!
//! Entries are keyed by normalized absolute path and remember the file's
//! size and modification time at load. A lookup re-stats the file and only
//! pays for reading and deserializing when that pair has changed.

pub mod cache;
pub mod entry;

pub use cache::{CacheStats, FreshnessCache};
pub use entry::{CacheEntry, FileStamp};

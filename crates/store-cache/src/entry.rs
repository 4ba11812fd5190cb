//! Cache entry and file stamp types

use std::any::{Any, TypeId};
use std::fs;
use std::io::ErrorKind;
use std::sync::Arc;
use std::time::SystemTime;

use store_fs::{Error, NormalizedPath, Result};

/// The `(size, modification time)` pair used to detect changed files.
///
/// Two different contents with the same length written within the
/// filesystem's timestamp resolution produce equal stamps. Such a change
/// goes unnoticed until the file changes again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStamp {
    pub len: u64,
    pub modified: Option<SystemTime>,
}

impl FileStamp {
    /// Stat `path`. Returns `None` if the file does not exist.
    pub fn read(path: &NormalizedPath) -> Result<Option<Self>> {
        let native = path.to_native();
        match fs::metadata(&native) {
            Ok(meta) => Ok(Some(Self {
                len: meta.len(),
                modified: meta.modified().ok(),
            })),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::io(native, e)),
        }
    }
}

/// A deserialized value together with its declared type and file stamp.
#[derive(Clone)]
pub struct CacheEntry {
    type_id: TypeId,
    type_name: &'static str,
    value: Arc<dyn Any + Send + Sync>,
    stamp: FileStamp,
}

impl CacheEntry {
    pub fn new<T: Any + Send + Sync>(value: T, stamp: FileStamp) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            value: Arc::new(value),
            stamp,
        }
    }

    pub fn stamp(&self) -> FileStamp {
        self.stamp
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn is<T: Any>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Clone the stored value out if it has type `T`.
    pub fn get<T: Any + Clone>(&self) -> Option<T> {
        self.value.downcast_ref::<T>().cloned()
    }
}

impl std::fmt::Debug for CacheEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheEntry")
            .field("type_name", &self.type_name)
            .field("stamp", &self.stamp)
            .finish_non_exhaustive()
    }
}

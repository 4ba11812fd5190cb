//! Path-keyed cache with size/mtime invalidation

use std::any::Any;
use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};
use std::sync::{Mutex, MutexGuard, PoisonError};

use store_fs::{NormalizedPath, Result, io};

use crate::entry::{CacheEntry, FileStamp};

const WRITE_STRIPES: usize = 16;

/// Counters describing how lookups were served.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Served from memory without touching file contents
    pub hits: u64,
    /// First load of a path
    pub loads: u64,
    /// Load of a path whose cached stamp no longer matched
    pub reloads: u64,
}

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<NormalizedPath, CacheEntry>,
    stats: CacheStats,
}

/// Shared cache of deserialized entity files.
///
/// One instance is meant to be shared (behind an `Arc`) by every repository
/// in a process. All access goes through a single mutex, which is never
/// held while a loader reads or parses a file. Writes made through
/// [`write_through`](Self::write_through) additionally take a per-path
/// stripe lock.
#[derive(Debug, Default)]
pub struct FreshnessCache {
    inner: Mutex<Inner>,
    write_locks: [Mutex<()>; WRITE_STRIPES],
}

impl FreshnessCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Entries are replaced whole, so a poisoned map is still consistent
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_lock(&self, path: &NormalizedPath) -> MutexGuard<'_, ()> {
        let mut hasher = DefaultHasher::new();
        path.hash(&mut hasher);
        let stripe = (hasher.finish() % WRITE_STRIPES as u64) as usize;
        self.write_locks[stripe]
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Return the value for `path`, calling `loader` only when needed.
    ///
    /// The file is stat'ed on every call. If no entry exists, the entry has
    /// a different type, or the file's size or modification time differ from
    /// the cached stamp, `loader` runs and its result replaces the entry.
    ///
    /// A missing file yields `Ok(None)` and evicts the entry. When `loader`
    /// fails the entry is evicted and the error returned; other entries are
    /// untouched.
    pub fn get_or_load<T, F>(&self, path: &NormalizedPath, loader: F) -> Result<Option<T>>
    where
        T: Any + Clone + Send + Sync,
        F: FnOnce(&NormalizedPath) -> Result<Option<T>>,
    {
        let Some(stamp) = FileStamp::read(path)? else {
            self.invalidate(path);
            return Ok(None);
        };

        let was_cached = {
            let mut inner = self.lock();
            let cached = inner
                .entries
                .get(path)
                .filter(|entry| entry.stamp() == stamp)
                .and_then(|entry| entry.get::<T>());
            if let Some(value) = cached {
                inner.stats.hits += 1;
                return Ok(Some(value));
            }
            inner.entries.contains_key(path)
        };

        // Stamp was taken before the read: a write racing with this load
        // leaves an older stamp behind, which forces a reload next time.
        match loader(path) {
            Ok(Some(value)) => {
                let mut inner = self.lock();
                if was_cached {
                    inner.stats.reloads += 1;
                    tracing::debug!(path = %path, "Reloaded stale cache entry");
                } else {
                    inner.stats.loads += 1;
                }
                inner
                    .entries
                    .insert(path.clone(), CacheEntry::new(value.clone(), stamp));
                Ok(Some(value))
            }
            Ok(None) => {
                self.invalidate(path);
                Ok(None)
            }
            Err(e) => {
                self.invalidate(path);
                Err(e)
            }
        }
    }

    /// Load every file directly under `dir` whose name ends with `suffix`.
    ///
    /// Each file goes through the same freshness check as
    /// [`get_or_load`](Self::get_or_load). Files that vanish between listing
    /// and reading are skipped, as are files that fail to deserialize (with
    /// a warning). Entries for files of this listing that no longer exist are
    /// evicted. Other I/O errors abort the call.
    pub fn load_all<T, F>(&self, dir: &NormalizedPath, suffix: &str, loader: F) -> Result<Vec<T>>
    where
        T: Any + Clone + Send + Sync,
        F: Fn(&NormalizedPath) -> Result<Option<T>>,
    {
        let files = io::list_files(dir, suffix)?;
        let mut values = Vec::with_capacity(files.len());

        for path in &files {
            match self.get_or_load(path, &loader) {
                Ok(Some(value)) => values.push(value),
                Ok(None) => {}
                Err(e) if e.is_not_found() => {}
                Err(e) if e.is_deserialize() => {
                    tracing::warn!(path = %path, error = %e, "Skipping unreadable entity file");
                }
                Err(e) => return Err(e),
            }
        }

        let listed: HashSet<&NormalizedPath> = files.iter().collect();
        self.lock().entries.retain(|path, _| {
            listed.contains(path)
                || path.parent().as_ref() != Some(dir)
                || !path.ends_with_suffix(suffix)
        });

        Ok(values)
    }

    /// Store `value` for `path` using the file's current stamp.
    ///
    /// Nothing stops another writer from replacing the file between its
    /// write and this call; [`write_through`](Self::write_through) pairs the
    /// two under a lock.
    pub fn insert<T>(&self, path: &NormalizedPath, value: T) -> Result<()>
    where
        T: Any + Send + Sync,
    {
        match FileStamp::read(path)? {
            Some(stamp) => {
                self.lock()
                    .entries
                    .insert(path.clone(), CacheEntry::new(value, stamp));
            }
            None => self.invalidate(path),
        }
        Ok(())
    }

    /// Run `write` for `path`, then cache `value` under the stamp of the
    /// file it produced.
    ///
    /// Calls for the same path are serialized with each other and with
    /// [`remove_through`](Self::remove_through), so when two writers race
    /// the cached value belongs to whichever file ended up on disk. A failed
    /// write evicts the entry.
    pub fn write_through<T, F>(&self, path: &NormalizedPath, value: T, write: F) -> Result<()>
    where
        T: Any + Send + Sync,
        F: FnOnce(&NormalizedPath) -> Result<()>,
    {
        let _guard = self.write_lock(path);
        if let Err(e) = write(path) {
            self.invalidate(path);
            return Err(e);
        }
        self.insert(path, value)
    }

    /// Run `remove` for `path` and evict its entry, serialized with
    /// [`write_through`](Self::write_through) for the same path.
    pub fn remove_through<F>(&self, path: &NormalizedPath, remove: F) -> Result<()>
    where
        F: FnOnce(&NormalizedPath) -> Result<()>,
    {
        let _guard = self.write_lock(path);
        let removed = remove(path);
        self.invalidate(path);
        removed
    }

    /// Remove the entry for `path`, if any.
    pub fn invalidate(&self, path: &NormalizedPath) {
        if self.lock().entries.remove(path).is_some() {
            tracing::debug!(path = %path, "Evicted cache entry");
        }
    }

    /// Remove every entry.
    pub fn clear(&self) {
        self.lock().entries.clear();
    }

    /// Check whether an entry exists for `path`, fresh or not.
    pub fn contains(&self, path: &NormalizedPath) -> bool {
        self.lock().entries.contains_key(path)
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    /// Snapshot of the lookup counters.
    pub fn stats(&self) -> CacheStats {
        self.lock().stats
    }
}

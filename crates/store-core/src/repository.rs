//! Per-kind entity repository

use std::marker::PhantomData;
use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};
use store_cache::FreshnessCache;
use store_fs::FileStore;
use store_model::EntityRecord;
use uuid::Uuid;

use crate::Result;

/// Stores entities of one kind `T`, one JSON file each.
///
/// Reads go through the shared cache; writes and deletes update it so that
/// no caller in this process reads a value older than its last write.
pub struct TypedEntityRepository<T> {
    files: FileStore,
    cache: Arc<FreshnessCache>,
    _kind: PhantomData<fn() -> T>,
}

impl<T> TypedEntityRepository<T>
where
    T: EntityRecord + Serialize + DeserializeOwned,
{
    pub fn new(files: FileStore, cache: Arc<FreshnessCache>) -> Self {
        Self {
            files,
            cache,
            _kind: PhantomData,
        }
    }

    /// The underlying file store.
    pub fn files(&self) -> &FileStore {
        &self.files
    }

    /// Retrieve the entity with `id`.
    ///
    /// Returns `None` when no file exists, and also when the file exists
    /// but cannot be parsed (the failure is logged).
    pub fn retrieve(&self, id: Uuid) -> Result<Option<T>> {
        let path = self.files.entity_path(id);
        match self.cache.get_or_load(&path, |p| self.files.load::<T>(p)) {
            Ok(entity) => Ok(entity),
            Err(e) if e.is_deserialize() => {
                tracing::warn!(kind = %T::KIND, %id, error = %e, "Ignoring unreadable entity file");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Retrieve every entity of this kind. Unreadable files are skipped.
    pub fn retrieve_all(&self) -> Result<Vec<T>> {
        let entities = self.cache.load_all(self.files.base(), self.files.extension(), |p| {
            self.files.load::<T>(p)
        })?;
        Ok(entities)
    }

    /// Retrieve the children of `parent`, or the top-level entities when
    /// `parent` is `None`.
    ///
    /// This scans every entity of the kind.
    pub fn retrieve_children(&self, parent: Option<Uuid>) -> Result<Vec<T>> {
        let mut children = self.retrieve_all()?;
        children.retain(|entity| entity.path().is_child_of(parent));
        Ok(children)
    }

    /// Retrieve the first entity whose alias matches, ignoring case.
    pub fn retrieve_by_alias(&self, alias: &str) -> Result<Option<T>> {
        let found = self
            .retrieve_all()?
            .into_iter()
            .find(|entity| entity.alias().eq_ignore_ascii_case(alias));
        Ok(found)
    }

    /// Check whether a file exists for `id`, without reading it.
    pub fn exists(&self, id: Uuid) -> bool {
        self.files.entity_path(id).is_file()
    }

    /// Write `entity`, replacing any previous version.
    ///
    /// The write and the cache update happen under the cache's lock for
    /// this file, so concurrent writers in this process cannot leave the
    /// cache holding a value other than the one on disk.
    pub fn persist(&self, entity: &T) -> Result<()> {
        let id = entity.id();
        let path = self.files.entity_path(id);
        self.cache.write_through(&path, entity.clone(), |_| {
            self.files.save(id, entity).map(|_| ())
        })?;
        tracing::debug!(kind = %T::KIND, %id, "Persisted entity");
        Ok(())
    }

    /// Delete the entity with `id`. Deleting an absent entity succeeds.
    pub fn delete(&self, id: Uuid) -> Result<()> {
        let path = self.files.entity_path(id);
        self.cache
            .remove_through(&path, |_| self.files.delete(id).map(|_| ()))?;
        tracing::debug!(kind = %T::KIND, %id, "Deleted entity");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store_model::{Folder, RootKind};

    fn repository(dir: &std::path::Path) -> TypedEntityRepository<Folder> {
        let files = FileStore::new(dir.join("folders"), ".folder.json").unwrap();
        TypedEntityRepository::new(files, Arc::new(FreshnessCache::new()))
    }

    #[test]
    fn persist_then_retrieve() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repository(dir.path());
        let folder = Folder::new(Uuid::new_v4(), &RootKind::Forms.entity().path, "Marketing");

        repo.persist(&folder).unwrap();

        assert_eq!(repo.retrieve(folder.id()).unwrap(), Some(folder.clone()));
        assert!(repo.exists(folder.id()));
    }

    #[test]
    fn retrieve_by_alias_ignores_case() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repository(dir.path());
        let folder = Folder::new(Uuid::new_v4(), &RootKind::Forms.entity().path, "Marketing");
        repo.persist(&folder).unwrap();

        let found = repo.retrieve_by_alias("marketing").unwrap();

        assert_eq!(found.map(|f| f.id()), Some(folder.id()));
        assert!(repo.retrieve_by_alias("sales").unwrap().is_none());
    }

    #[test]
    fn unreadable_file_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repository(dir.path());
        let id = Uuid::new_v4();
        std::fs::write(repo.files().entity_path(id).to_native(), "{ broken").unwrap();

        assert_eq!(repo.retrieve(id).unwrap(), None);
        assert!(repo.retrieve_all().unwrap().is_empty());
    }
}

//! Wiring of settings, cache and repositories

use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};
use store_cache::FreshnessCache;
use store_fs::FileStore;
use store_model::{EntityKind, EntityRecord};

use crate::{AggregatorOptions, EntityAggregator, Result, StoreSettings, TypedEntityRepository};

/// An opened entity store: one shared cache and one repository per kind.
pub struct EntityStore {
    settings: StoreSettings,
    cache: Arc<FreshnessCache>,
    entities: EntityAggregator,
}

impl EntityStore {
    /// Open the store described by `settings` with a fresh cache.
    ///
    /// Creates the per-kind directories if they are missing.
    pub fn open(settings: StoreSettings) -> Result<Self> {
        Self::open_with_cache(settings, Arc::new(FreshnessCache::new()))
    }

    /// Open the store using an existing cache, e.g. one shared with
    /// another store instance in the same process.
    pub fn open_with_cache(settings: StoreSettings, cache: Arc<FreshnessCache>) -> Result<Self> {
        let options = AggregatorOptions {
            include_data_values_in_children: settings.include_data_values_in_children,
        };
        let entities = EntityAggregator::new(
            repository(&settings, &cache)?,
            repository(&settings, &cache)?,
            repository(&settings, &cache)?,
            repository(&settings, &cache)?,
            repository(&settings, &cache)?,
            repository(&settings, &cache)?,
            options,
        );
        tracing::debug!(root = %settings.root.display(), "Opened entity store");

        Ok(Self {
            settings,
            cache,
            entities,
        })
    }

    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    pub fn cache(&self) -> &Arc<FreshnessCache> {
        &self.cache
    }

    /// The aggregated entity tree.
    pub fn entities(&self) -> &EntityAggregator {
        &self.entities
    }
}

fn repository<T>(settings: &StoreSettings, cache: &Arc<FreshnessCache>) -> Result<TypedEntityRepository<T>>
where
    T: EntityRecord + Serialize + DeserializeOwned,
{
    let kind: EntityKind = T::KIND;
    let files = FileStore::with_robustness(
        settings.directory_for(kind),
        settings.extension_for(kind),
        settings.robustness(),
    )?;
    Ok(TypedEntityRepository::new(files, Arc::clone(cache)))
}

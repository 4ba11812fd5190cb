//! One entity tree across every kind-specific repository

use std::collections::HashSet;

use store_model::{
    ConfiguredForm, DataValue, Entity, EntityKind, EntityPath, EntityRecord, Folder, Form, Layout,
    RootKind, Validation,
};
use uuid::Uuid;

use crate::{Error, Result, TypedEntityRepository};

/// Switches that change which kinds the aggregator enumerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregatorOptions {
    /// Include data values in [`EntityAggregator::retrieve_children`].
    ///
    /// Installations with thousands of data values can turn this off to
    /// keep tree listings fast.
    pub include_data_values_in_children: bool,
}

impl Default for AggregatorOptions {
    fn default() -> Self {
        Self {
            include_data_values_in_children: true,
        }
    }
}

/// Presents all entity kinds as one tree addressed by GUID.
///
/// Lookups probe the repositories in a fixed order: folders, forms,
/// configured forms, layouts, validations, data values. Ids are expected to
/// be unique across kinds; if two kinds ever held the same id, the first
/// in that order would win.
pub struct EntityAggregator {
    folders: TypedEntityRepository<Folder>,
    forms: TypedEntityRepository<Form>,
    configured_forms: TypedEntityRepository<ConfiguredForm>,
    layouts: TypedEntityRepository<Layout>,
    validations: TypedEntityRepository<Validation>,
    data_values: TypedEntityRepository<DataValue>,
    options: AggregatorOptions,
}

impl EntityAggregator {
    pub fn new(
        folders: TypedEntityRepository<Folder>,
        forms: TypedEntityRepository<Form>,
        configured_forms: TypedEntityRepository<ConfiguredForm>,
        layouts: TypedEntityRepository<Layout>,
        validations: TypedEntityRepository<Validation>,
        data_values: TypedEntityRepository<DataValue>,
        options: AggregatorOptions,
    ) -> Self {
        Self {
            folders,
            forms,
            configured_forms,
            layouts,
            validations,
            data_values,
            options,
        }
    }

    pub fn options(&self) -> AggregatorOptions {
        self.options
    }

    pub fn folders(&self) -> &TypedEntityRepository<Folder> {
        &self.folders
    }

    pub fn forms(&self) -> &TypedEntityRepository<Form> {
        &self.forms
    }

    pub fn configured_forms(&self) -> &TypedEntityRepository<ConfiguredForm> {
        &self.configured_forms
    }

    pub fn layouts(&self) -> &TypedEntityRepository<Layout> {
        &self.layouts
    }

    pub fn validations(&self) -> &TypedEntityRepository<Validation> {
        &self.validations
    }

    pub fn data_values(&self) -> &TypedEntityRepository<DataValue> {
        &self.data_values
    }

    /// Retrieve the entity with `id`, whatever its kind.
    ///
    /// Well-known root ids produce their synthetic root entity.
    pub fn retrieve(&self, id: Uuid) -> Result<Option<Entity>> {
        if let Some(root) = RootKind::from_id(id) {
            return Ok(Some(root.entity().into()));
        }
        if let Some(folder) = self.folders.retrieve(id)? {
            return Ok(Some(folder.into()));
        }
        if let Some(form) = self.forms.retrieve(id)? {
            return Ok(Some(form.into()));
        }
        if let Some(conform) = self.configured_forms.retrieve(id)? {
            return Ok(Some(conform.into()));
        }
        if let Some(layout) = self.layouts.retrieve(id)? {
            return Ok(Some(layout.into()));
        }
        if let Some(validation) = self.validations.retrieve(id)? {
            return Ok(Some(validation.into()));
        }
        if let Some(value) = self.data_values.retrieve(id)? {
            return Ok(Some(value.into()));
        }
        Ok(None)
    }

    /// Retrieve the direct children of `parent` across kinds, or the
    /// top-level entities when `parent` is `None`.
    ///
    /// Configured forms only ever sit beneath a form, so they are skipped
    /// at the top level. Data values are skipped unless
    /// [`AggregatorOptions::include_data_values_in_children`] is set.
    pub fn retrieve_children(&self, parent: Option<Uuid>) -> Result<Vec<Entity>> {
        let mut children = Vec::new();
        extend(&mut children, self.folders.retrieve_children(parent)?);
        extend(&mut children, self.forms.retrieve_children(parent)?);
        if parent.is_some() {
            extend(&mut children, self.configured_forms.retrieve_children(parent)?);
        }
        extend(&mut children, self.layouts.retrieve_children(parent)?);
        extend(&mut children, self.validations.retrieve_children(parent)?);
        if self.options.include_data_values_in_children {
            extend(&mut children, self.data_values.retrieve_children(parent)?);
        }
        Ok(children)
    }

    /// Retrieve everything beneath `parent`.
    ///
    /// Only folders are descended into. For `parent` and every folder below
    /// it, the direct children of each other kind are included, but the
    /// children of those entities are not: a configured form beneath a form
    /// inside `parent` is not part of the result.
    pub fn retrieve_descendants(&self, parent: Uuid) -> Result<Vec<Entity>> {
        let mut descendants = Vec::new();
        let mut visited = HashSet::new();
        self.collect_descendants(parent, &mut visited, &mut descendants)?;
        Ok(descendants)
    }

    fn collect_descendants(
        &self,
        parent: Uuid,
        visited: &mut HashSet<Uuid>,
        out: &mut Vec<Entity>,
    ) -> Result<()> {
        // A corrupt path could make a folder its own ancestor
        if !visited.insert(parent) {
            return Ok(());
        }

        let parent = Some(parent);
        for folder in self.folders.retrieve_children(parent)? {
            let folder_id = folder.id();
            out.push(folder.into());
            self.collect_descendants(folder_id, visited, out)?;
        }
        extend(out, self.forms.retrieve_children(parent)?);
        extend(out, self.configured_forms.retrieve_children(parent)?);
        extend(out, self.layouts.retrieve_children(parent)?);
        extend(out, self.validations.retrieve_children(parent)?);
        extend(out, self.data_values.retrieve_children(parent)?);
        Ok(())
    }

    /// Retrieve every stored entity of `kind`. Roots yield all synthetic
    /// roots.
    pub fn retrieve_all_of(&self, kind: EntityKind) -> Result<Vec<Entity>> {
        let mut all = Vec::new();
        match kind {
            EntityKind::Folder => extend(&mut all, self.folders.retrieve_all()?),
            EntityKind::Form => extend(&mut all, self.forms.retrieve_all()?),
            EntityKind::ConfiguredForm => extend(&mut all, self.configured_forms.retrieve_all()?),
            EntityKind::Layout => extend(&mut all, self.layouts.retrieve_all()?),
            EntityKind::Validation => extend(&mut all, self.validations.retrieve_all()?),
            EntityKind::DataValue => extend(&mut all, self.data_values.retrieve_all()?),
            EntityKind::Root => {
                all.extend(RootKind::ALL.iter().map(|root| Entity::from(root.entity())))
            }
        }
        Ok(all)
    }

    /// Write `entity` to the repository for its kind.
    pub fn persist(&self, entity: &Entity) -> Result<()> {
        match entity {
            Entity::Folder(e) => self.folders.persist(e),
            Entity::Form(e) => self.forms.persist(e),
            Entity::ConfiguredForm(e) => self.configured_forms.persist(e),
            Entity::Layout(e) => self.layouts.persist(e),
            Entity::Validation(e) => self.validations.persist(e),
            Entity::DataValue(e) => self.data_values.persist(e),
            Entity::Root(root) => Err(Error::SyntheticEntity { id: root.id }),
        }
    }

    /// Place `entity` beneath `new_parent_path` and persist it.
    ///
    /// The new path is `new_parent_path` followed by the entity's id; on
    /// success it is written to `entity` and returned. The parent is not
    /// checked for existence. Moves that would put the entity beneath itself are
    /// rejected with [`Error::MoveCycle`]. Descendants keep their old paths.
    pub fn move_entity(&self, entity: &mut Entity, new_parent_path: &EntityPath) -> Result<EntityPath> {
        let id = entity.id();
        if entity.is_synthetic() {
            return Err(Error::SyntheticEntity { id });
        }
        if new_parent_path.is_empty() {
            return Err(Error::InvalidPath {
                id,
                message: "parent path must start with a root".into(),
            });
        }
        if new_parent_path.contains(id) {
            return Err(Error::MoveCycle { id });
        }

        let new_path = new_parent_path.child(id);
        let mut moved = entity.clone();
        moved.set_path(new_path.clone());
        self.persist(&moved)?;
        *entity = moved;
        tracing::info!(%id, kind = %entity.kind(), path = %new_path, "Moved entity");
        Ok(new_path)
    }

    /// Delete `entity` from the repository for its kind.
    ///
    /// Deleting a folder leaves its descendants in place.
    pub fn delete(&self, entity: &Entity) -> Result<()> {
        let id = entity.id();
        match entity {
            Entity::Folder(_) => self.folders.delete(id),
            Entity::Form(_) => self.forms.delete(id),
            Entity::ConfiguredForm(_) => self.configured_forms.delete(id),
            Entity::Layout(_) => self.layouts.delete(id),
            Entity::Validation(_) => self.validations.delete(id),
            Entity::DataValue(_) => self.data_values.delete(id),
            Entity::Root(_) => Err(Error::SyntheticEntity { id }),
        }
    }
}

fn extend<T: Into<Entity>>(out: &mut Vec<Entity>, items: Vec<T>) {
    out.extend(items.into_iter().map(Into::into));
}

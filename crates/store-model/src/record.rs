//! The capability shared by every entity variant

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Entity, EntityKind, EntityPath};

/// Attributes common to all persisted entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EntityHeader {
    /// Assigned by the caller at creation and never changed
    pub id: Uuid,
    pub path: EntityPath,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub alias: String,
}

impl EntityHeader {
    /// Header for a new entity placed under `parent_path`.
    pub fn new(id: Uuid, parent_path: &EntityPath, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id,
            path: parent_path.child(id),
            alias: name.clone(),
            name,
        }
    }
}

/// Uniform access to an entity variant.
///
/// Implemented by every struct that is stored in its own file. `KIND` and
/// the icon are derived from the type and are not part of the stored data.
pub trait EntityRecord: Clone + Send + Sync + 'static {
    const KIND: EntityKind;

    fn header(&self) -> &EntityHeader;

    fn header_mut(&mut self) -> &mut EntityHeader;

    /// Wrap into the [`Entity`] enum.
    fn into_entity(self) -> Entity;

    /// Unwrap from the [`Entity`] enum if the variant matches.
    fn from_entity(entity: Entity) -> Option<Self>;

    fn id(&self) -> Uuid {
        self.header().id
    }

    fn path(&self) -> &EntityPath {
        &self.header().path
    }

    fn set_path(&mut self, path: EntityPath) {
        self.header_mut().path = path;
    }

    fn name(&self) -> &str {
        &self.header().name
    }

    fn alias(&self) -> &str {
        &self.header().alias
    }

    fn icon(&self) -> &'static str {
        Self::KIND.icon()
    }
}

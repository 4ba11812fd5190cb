//! Folders and the simple entity variants

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Entity, EntityHeader, EntityKind, EntityPath, EntityRecord};

/// Groups other entities. The only kind whose children can nest further.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Folder {
    #[serde(flatten)]
    pub header: EntityHeader,
}

impl Folder {
    pub fn new(id: Uuid, parent_path: &EntityPath, name: impl Into<String>) -> Self {
        Self {
            header: EntityHeader::new(id, parent_path, name),
        }
    }
}

impl EntityRecord for Folder {
    const KIND: EntityKind = EntityKind::Folder;

    fn header(&self) -> &EntityHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut EntityHeader {
        &mut self.header
    }

    fn into_entity(self) -> Entity {
        Entity::Folder(self)
    }

    fn from_entity(entity: Entity) -> Option<Self> {
        match entity {
            Entity::Folder(folder) => Some(folder),
            _ => None,
        }
    }
}

/// A form bound to a layout and template for rendering.
///
/// Stored beneath the form it configures, so its parent is always a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfiguredForm {
    #[serde(flatten)]
    pub header: EntityHeader,
    #[serde(default)]
    pub layout_id: Option<Uuid>,
    #[serde(default)]
    pub template_id: Option<Uuid>,
}

impl ConfiguredForm {
    pub fn new(id: Uuid, form_path: &EntityPath, name: impl Into<String>) -> Self {
        Self {
            header: EntityHeader::new(id, form_path, name),
            layout_id: None,
            template_id: None,
        }
    }

    /// The form this configures.
    pub fn form_id(&self) -> Option<Uuid> {
        self.header.path.parent_id()
    }
}

impl EntityRecord for ConfiguredForm {
    const KIND: EntityKind = EntityKind::ConfiguredForm;

    fn header(&self) -> &EntityHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut EntityHeader {
        &mut self.header
    }

    fn into_entity(self) -> Entity {
        Entity::ConfiguredForm(self)
    }

    fn from_entity(entity: Entity) -> Option<Self> {
        match entity {
            Entity::ConfiguredForm(conform) => Some(conform),
            _ => None,
        }
    }
}

/// Arrangement of form fields into rows and cells.
///
/// `kind_id` selects the layout plugin; `data` is that plugin's opaque
/// configuration, usually JSON text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Layout {
    #[serde(flatten)]
    pub header: EntityHeader,
    pub kind_id: Uuid,
    #[serde(default)]
    pub data: String,
}

impl Layout {
    pub fn new(id: Uuid, parent_path: &EntityPath, name: impl Into<String>, kind_id: Uuid) -> Self {
        Self {
            header: EntityHeader::new(id, parent_path, name),
            kind_id,
            data: String::new(),
        }
    }
}

impl EntityRecord for Layout {
    const KIND: EntityKind = EntityKind::Layout;

    fn header(&self) -> &EntityHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut EntityHeader {
        &mut self.header
    }

    fn into_entity(self) -> Entity {
        Entity::Layout(self)
    }

    fn from_entity(entity: Entity) -> Option<Self> {
        match entity {
            Entity::Layout(layout) => Some(layout),
            _ => None,
        }
    }
}

/// A reusable field validation, e.g. "required" or a regex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Validation {
    #[serde(flatten)]
    pub header: EntityHeader,
    pub kind_id: Uuid,
    #[serde(default)]
    pub data: String,
}

impl Validation {
    pub fn new(id: Uuid, parent_path: &EntityPath, name: impl Into<String>, kind_id: Uuid) -> Self {
        Self {
            header: EntityHeader::new(id, parent_path, name),
            kind_id,
            data: String::new(),
        }
    }
}

impl EntityRecord for Validation {
    const KIND: EntityKind = EntityKind::Validation;

    fn header(&self) -> &EntityHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut EntityHeader {
        &mut self.header
    }

    fn into_entity(self) -> Entity {
        Entity::Validation(self)
    }

    fn from_entity(entity: Entity) -> Option<Self> {
        match entity {
            Entity::Validation(validation) => Some(validation),
            _ => None,
        }
    }
}

/// A named source of values for list-style fields (drop downs, radio
/// buttons). There can be thousands of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataValue {
    #[serde(flatten)]
    pub header: EntityHeader,
    pub kind_id: Uuid,
    #[serde(default)]
    pub data: String,
}

impl DataValue {
    pub fn new(id: Uuid, parent_path: &EntityPath, name: impl Into<String>, kind_id: Uuid) -> Self {
        Self {
            header: EntityHeader::new(id, parent_path, name),
            kind_id,
            data: String::new(),
        }
    }
}

impl EntityRecord for DataValue {
    const KIND: EntityKind = EntityKind::DataValue;

    fn header(&self) -> &EntityHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut EntityHeader {
        &mut self.header
    }

    fn into_entity(self) -> Entity {
        Entity::DataValue(self)
    }

    fn from_entity(entity: Entity) -> Option<Self> {
        match entity {
            Entity::DataValue(value) => Some(value),
            _ => None,
        }
    }
}

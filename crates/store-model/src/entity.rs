//! The closed set of entity variants

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    ConfiguredForm, DataValue, EntityKind, EntityPath, EntityRecord, EntityRoot, Folder, Form,
    Layout, Validation,
};

/// Any entity the store can return.
///
/// Serialized with a `Kind` tag for display and export; entity files on
/// disk hold the untagged variant struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "Kind")]
pub enum Entity {
    Folder(Folder),
    Form(Form),
    ConfiguredForm(ConfiguredForm),
    Layout(Layout),
    Validation(Validation),
    DataValue(DataValue),
    Root(EntityRoot),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Folder(_) => EntityKind::Folder,
            Self::Form(_) => EntityKind::Form,
            Self::ConfiguredForm(_) => EntityKind::ConfiguredForm,
            Self::Layout(_) => EntityKind::Layout,
            Self::Validation(_) => EntityKind::Validation,
            Self::DataValue(_) => EntityKind::DataValue,
            Self::Root(_) => EntityKind::Root,
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            Self::Folder(e) => e.id(),
            Self::Form(e) => e.id(),
            Self::ConfiguredForm(e) => e.id(),
            Self::Layout(e) => e.id(),
            Self::Validation(e) => e.id(),
            Self::DataValue(e) => e.id(),
            Self::Root(e) => e.id,
        }
    }

    pub fn path(&self) -> &EntityPath {
        match self {
            Self::Folder(e) => e.path(),
            Self::Form(e) => e.path(),
            Self::ConfiguredForm(e) => e.path(),
            Self::Layout(e) => e.path(),
            Self::Validation(e) => e.path(),
            Self::DataValue(e) => e.path(),
            Self::Root(e) => &e.path,
        }
    }

    /// Replace the path. Has no effect on synthetic roots, whose path is
    /// fixed.
    pub fn set_path(&mut self, path: EntityPath) {
        match self {
            Self::Folder(e) => e.set_path(path),
            Self::Form(e) => e.set_path(path),
            Self::ConfiguredForm(e) => e.set_path(path),
            Self::Layout(e) => e.set_path(path),
            Self::Validation(e) => e.set_path(path),
            Self::DataValue(e) => e.set_path(path),
            Self::Root(_) => {}
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Folder(e) => e.name(),
            Self::Form(e) => e.name(),
            Self::ConfiguredForm(e) => e.name(),
            Self::Layout(e) => e.name(),
            Self::Validation(e) => e.name(),
            Self::DataValue(e) => e.name(),
            Self::Root(e) => &e.name,
        }
    }

    /// Alias of the entity. Roots use their name.
    pub fn alias(&self) -> &str {
        match self {
            Self::Folder(e) => e.alias(),
            Self::Form(e) => e.alias(),
            Self::ConfiguredForm(e) => e.alias(),
            Self::Layout(e) => e.alias(),
            Self::Validation(e) => e.alias(),
            Self::DataValue(e) => e.alias(),
            Self::Root(e) => &e.name,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Root(e) => e.icon(),
            other => other.kind().icon(),
        }
    }

    /// Whether the entity only exists in memory.
    pub fn is_synthetic(&self) -> bool {
        matches!(self, Self::Root(_))
    }

    /// Parent id per the path rule: the second-to-last path element.
    pub fn parent_id(&self) -> Option<Uuid> {
        self.path().parent_id()
    }

    /// Downcast to a concrete variant.
    pub fn into_record<T: EntityRecord>(self) -> Option<T> {
        T::from_entity(self)
    }
}

impl From<Folder> for Entity {
    fn from(value: Folder) -> Self {
        Self::Folder(value)
    }
}

impl From<Form> for Entity {
    fn from(value: Form) -> Self {
        Self::Form(value)
    }
}

impl From<ConfiguredForm> for Entity {
    fn from(value: ConfiguredForm) -> Self {
        Self::ConfiguredForm(value)
    }
}

impl From<Layout> for Entity {
    fn from(value: Layout) -> Self {
        Self::Layout(value)
    }
}

impl From<Validation> for Entity {
    fn from(value: Validation) -> Self {
        Self::Validation(value)
    }
}

impl From<DataValue> for Entity {
    fn from(value: DataValue) -> Self {
        Self::DataValue(value)
    }
}

impl From<EntityRoot> for Entity {
    fn from(value: EntityRoot) -> Self {
        Self::Root(value)
    }
}

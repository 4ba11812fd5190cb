//! Forms, their fields and submission handlers

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::{Entity, EntityHeader, EntityKind, EntityPath, EntityRecord};

/// A form definition: its fields and what happens on submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Form {
    #[serde(flatten)]
    pub header: EntityHeader,
    #[serde(default)]
    pub fields: Vec<FormField>,
    #[serde(default)]
    pub handlers: Vec<FormHandler>,
}

impl Form {
    pub fn new(id: Uuid, parent_path: &EntityPath, name: impl Into<String>) -> Self {
        Self {
            header: EntityHeader::new(id, parent_path, name),
            fields: Vec::new(),
            handlers: Vec::new(),
        }
    }

    /// Look up a field by id.
    pub fn field(&self, id: Uuid) -> Option<&FormField> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Ids of every validation referenced by any field, without duplicates.
    pub fn validation_ids(&self) -> Vec<Uuid> {
        let mut ids: Vec<Uuid> = Vec::new();
        for id in self.fields.iter().flat_map(|f| f.validations.iter()) {
            if !ids.contains(id) {
                ids.push(*id);
            }
        }
        ids
    }
}

/// One input on a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FormField {
    pub id: Uuid,
    /// Field type identifier, e.g. `text` or `drop-down`
    pub field_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub alias: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub category: Option<String>,
    /// Validation entities applied to this field
    #[serde(default)]
    pub validations: Vec<Uuid>,
    /// Field-type specific settings
    #[serde(default)]
    pub configuration: Value,
}

/// An action run when the form is submitted (send email, store data, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FormHandler {
    pub id: Uuid,
    pub handler_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub alias: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub configuration: Value,
}

fn default_enabled() -> bool {
    true
}

impl EntityRecord for Form {
    const KIND: EntityKind = EntityKind::Form;

    fn header(&self) -> &EntityHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut EntityHeader {
        &mut self.header
    }

    fn into_entity(self) -> Entity {
        Entity::Form(self)
    }

    fn from_entity(entity: Entity) -> Option<Self> {
        match entity {
            Entity::Form(form) => Some(form),
            _ => None,
        }
    }
}

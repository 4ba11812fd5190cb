//! Well-known tree roots
//!
//! Each top-level section of the entity tree (forms, layouts, validations,
//! data values) hangs off a fixed GUID. Roots are never stored; they are
//! synthesized whenever their id is requested.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{EntityKind, EntityPath};

/// The sections of the entity tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RootKind {
    Forms,
    Layouts,
    Validations,
    DataValues,
}

impl RootKind {
    pub const ALL: [RootKind; 4] = [
        RootKind::Forms,
        RootKind::Layouts,
        RootKind::Validations,
        RootKind::DataValues,
    ];

    /// The fixed id of this root.
    pub const fn id(&self) -> Uuid {
        match self {
            Self::Forms => Uuid::from_u128(0x7d5a2a4e_1f0b_4c69_9a0e_5b3b1c4f2d01),
            Self::Layouts => Uuid::from_u128(0x7d5a2a4e_1f0b_4c69_9a0e_5b3b1c4f2d02),
            Self::Validations => Uuid::from_u128(0x7d5a2a4e_1f0b_4c69_9a0e_5b3b1c4f2d03),
            Self::DataValues => Uuid::from_u128(0x7d5a2a4e_1f0b_4c69_9a0e_5b3b1c4f2d04),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Forms => "Forms",
            Self::Layouts => "Layouts",
            Self::Validations => "Validation Library",
            Self::DataValues => "Data Values",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Forms => "icon-formulate-forms",
            Self::Layouts => "icon-formulate-layouts",
            Self::Validations => "icon-formulate-validations",
            Self::DataValues => "icon-formulate-values",
        }
    }

    /// The root whose id is `id`, if any.
    pub fn from_id(id: Uuid) -> Option<Self> {
        Self::ALL.into_iter().find(|root| root.id() == id)
    }

    /// The section entities of `kind` live in. Folders may appear in any
    /// section and return `None`.
    pub fn for_kind(kind: EntityKind) -> Option<Self> {
        match kind {
            EntityKind::Form | EntityKind::ConfiguredForm => Some(Self::Forms),
            EntityKind::Layout => Some(Self::Layouts),
            EntityKind::Validation => Some(Self::Validations),
            EntityKind::DataValue => Some(Self::DataValues),
            EntityKind::Folder | EntityKind::Root => None,
        }
    }

    /// The synthetic entity for this root.
    pub fn entity(&self) -> EntityRoot {
        EntityRoot {
            root: *self,
            id: self.id(),
            path: EntityPath::new(vec![self.id()]),
            name: self.name().to_string(),
        }
    }
}

/// Check whether `id` is one of the well-known root ids.
pub fn is_root_id(id: Uuid) -> bool {
    RootKind::from_id(id).is_some()
}

/// A synthetic, file-less entity at the top of a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EntityRoot {
    pub root: RootKind,
    pub id: Uuid,
    /// Always just `[id]`
    pub path: EntityPath,
    pub name: String,
}

impl EntityRoot {
    pub fn icon(&self) -> &'static str {
        self.root.icon()
    }
}

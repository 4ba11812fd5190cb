//! Entity types for the form entity store
//!
//! Every persisted object (folder, form, configured form, layout,
//! validation, data value) shares an [`EntityHeader`] with its GUID, its
//! ancestor [`EntityPath`] and human-readable names. The [`Entity`] enum
//! ties the variants together for code that handles all kinds at once.

pub mod entities;
pub mod entity;
pub mod error;
pub mod form;
pub mod kind;
pub mod path;
pub mod record;
pub mod roots;

pub use entities::{ConfiguredForm, DataValue, Folder, Layout, Validation};
pub use entity::Entity;
pub use error::{Error, Result};
pub use form::{Form, FormField, FormHandler};
pub use kind::EntityKind;
pub use path::EntityPath;
pub use record::{EntityHeader, EntityRecord};
pub use roots::{EntityRoot, RootKind};

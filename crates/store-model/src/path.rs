//! Ancestor chains of entity ids

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The ordered chain of ids from a tree root down to an entity.
///
/// The first element is the root marker of the entity's tree and the last
/// is the entity's own id. A top-level entity therefore has a path of
/// length 2, and the second-to-last element of any longer path is the
/// entity's parent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityPath(Vec<Uuid>);

impl EntityPath {
    pub fn new(ids: Vec<Uuid>) -> Self {
        Self(ids)
    }

    /// Path of a top-level entity: `[root, id]`.
    pub fn top_level(root: Uuid, id: Uuid) -> Self {
        Self(vec![root, id])
    }

    /// This path extended with `id`.
    pub fn child(&self, id: Uuid) -> Self {
        let mut ids = self.0.clone();
        ids.push(id);
        Self(ids)
    }

    pub fn root_marker(&self) -> Option<Uuid> {
        self.0.first().copied()
    }

    /// The id the path ends in.
    pub fn last(&self) -> Option<Uuid> {
        self.0.last().copied()
    }

    /// The second-to-last id, if the path has at least two elements.
    pub fn parent_id(&self) -> Option<Uuid> {
        self.0.len().checked_sub(2).map(|idx| self.0[idx])
    }

    /// The path without its last element.
    pub fn parent_path(&self) -> Self {
        let end = self.0.len().saturating_sub(1);
        Self(self.0[..end].to_vec())
    }

    pub fn is_top_level(&self) -> bool {
        self.0.len() == 2
    }

    /// The children rule: with no parent, top-level paths match; with a
    /// parent, paths whose second-to-last element is that parent match.
    pub fn is_child_of(&self, parent: Option<Uuid>) -> bool {
        match parent {
            None => self.is_top_level(),
            Some(parent) => self.parent_id() == Some(parent),
        }
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Uuid] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Uuid> {
        self.0.iter()
    }
}

impl From<Vec<Uuid>> for EntityPath {
    fn from(ids: Vec<Uuid>) -> Self {
        Self(ids)
    }
}

impl From<&[Uuid]> for EntityPath {
    fn from(ids: &[Uuid]) -> Self {
        Self(ids.to_vec())
    }
}

impl std::fmt::Display for EntityPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|id| id.simple().to_string()).collect();
        write!(f, "{}", parts.join("/"))
    }
}

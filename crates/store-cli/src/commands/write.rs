//! Commands that change the store

use colored::Colorize;
use store_core::EntityAggregator;
use store_model::{Entity, EntityKind, EntityPath, Folder, RootKind};
use uuid::Uuid;

use crate::error::{CliError, Result};

fn require(entities: &EntityAggregator, id: Uuid) -> Result<Entity> {
    entities
        .retrieve(id)?
        .ok_or_else(|| CliError::user(format!("No entity with id {id}")))
}

/// Run the create-folder command
///
/// Folders may only sit directly below a root or another folder.
pub fn run_create_folder(entities: &EntityAggregator, name: &str, parent: Option<Uuid>) -> Result<()> {
    let parent_id = parent.unwrap_or(RootKind::Forms.id());
    let parent = require(entities, parent_id)?;
    if !matches!(parent.kind(), EntityKind::Root | EntityKind::Folder) {
        return Err(CliError::user(format!(
            "Cannot create a folder inside a {}",
            parent.kind()
        )));
    }

    let folder = Folder::new(Uuid::new_v4(), parent.path(), name);
    entities.persist(&Entity::Folder(folder.clone()))?;

    println!(
        "{} Created folder {} ({})",
        "OK".green().bold(),
        name.cyan(),
        folder.header.id
    );
    Ok(())
}

/// Run the move command
pub fn run_move(entities: &EntityAggregator, id: Uuid, parent: Uuid) -> Result<()> {
    let mut entity = require(entities, id)?;
    let new_parent = require(entities, parent)?;
    let new_parent_path: EntityPath = new_parent.path().clone();

    // Folders may sit in any section; everything else stays under its own root
    if let Some(section) = RootKind::for_kind(entity.kind()) {
        let target = new_parent_path.root_marker().and_then(RootKind::from_id);
        if target != Some(section) {
            return Err(CliError::user(format!(
                "Cannot move a {} out of the {} section",
                entity.kind(),
                section.name()
            )));
        }
    }

    let path = entities.move_entity(&mut entity, &new_parent_path)?;
    println!(
        "{} Moved {} to {}",
        "OK".green().bold(),
        entity.name().cyan(),
        path
    );
    Ok(())
}

/// Run the delete command
pub fn run_delete(entities: &EntityAggregator, id: Uuid) -> Result<()> {
    let entity = require(entities, id)?;
    entities.delete(&entity)?;
    println!("{} Deleted {} {}", "OK".green().bold(), entity.kind(), entity.name().cyan());
    Ok(())
}

//! Read-only commands

use colored::Colorize;
use store_core::EntityAggregator;
use store_model::{Entity, RootKind};
use uuid::Uuid;

use super::output::{print_entity_line, print_entity_list};
use crate::error::{CliError, Result};

/// Run the roots command
pub fn run_roots() -> Result<()> {
    println!("{}", "Roots".bold());
    for root in RootKind::ALL {
        print_entity_line(&Entity::Root(root.entity()));
    }
    Ok(())
}

/// Run the get command
pub fn run_get(entities: &EntityAggregator, id: Uuid, json: bool) -> Result<()> {
    let entity = entities
        .retrieve(id)?
        .ok_or_else(|| CliError::user(format!("No entity with id {id}")))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entity)?);
        return Ok(());
    }

    println!("{}", entity.name().bold());
    println!();
    println!("{}:   {}", "Id".dimmed(), entity.id());
    println!("{}:   {}", "Kind".dimmed(), entity.kind().to_string().cyan());
    println!("{}:  {}", "Alias".dimmed(), entity.alias());
    println!("{}:   {}", "Icon".dimmed(), entity.icon());
    println!("{}:   {}", "Path".dimmed(), entity.path());
    Ok(())
}

/// Run the children command
pub fn run_children(entities: &EntityAggregator, parent: Option<Uuid>, json: bool) -> Result<()> {
    let children = entities.retrieve_children(parent)?;
    let title = match parent {
        Some(id) => format!("Children of {id}"),
        None => "Top-level entities".to_string(),
    };
    print_entity_list(&title, &children, json)
}

/// Run the descendants command
pub fn run_descendants(entities: &EntityAggregator, id: Uuid, json: bool) -> Result<()> {
    let descendants = entities.retrieve_descendants(id)?;
    print_entity_list(&format!("Descendants of {id}"), &descendants, json)
}

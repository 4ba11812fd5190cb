use colored::Colorize;
use store_model::{Entity, EntityKind};

use crate::error::Result;

fn kind_label(kind: EntityKind) -> colored::ColoredString {
    let label = format!("{:<15}", kind.as_str());
    match kind {
        EntityKind::Root => label.magenta().bold(),
        EntityKind::Folder => label.blue(),
        EntityKind::Form | EntityKind::ConfiguredForm => label.green(),
        EntityKind::DataValue => label.dimmed(),
        EntityKind::Layout | EntityKind::Validation => label.cyan(),
    }
}

/// One line per entity: kind, id, name.
pub fn print_entity_line(entity: &Entity) {
    println!(
        "  {} {} {}",
        kind_label(entity.kind()),
        entity.id().to_string().dimmed(),
        entity.name()
    );
}

pub fn print_entity_list(title: &str, entities: &[Entity], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(entities)?);
        return Ok(());
    }

    println!("{}", title.bold());
    if entities.is_empty() {
        println!("  {}", "None".dimmed());
    }
    for entity in entities {
        print_entity_line(entity);
    }
    Ok(())
}

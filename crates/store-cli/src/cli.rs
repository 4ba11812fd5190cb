//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use uuid::Uuid;

/// Inspect and maintain a form entity store
#[derive(Parser, Debug)]
#[command(name = "formstore")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Store root directory
    #[arg(short, long, global = true, env = "FORMSTORE_DIR")]
    pub store: Option<PathBuf>,

    /// Settings file (TOML, JSON or YAML)
    #[arg(short, long, global = true, env = "FORMSTORE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List the well-known roots
    Roots,

    /// Show one entity
    Get {
        id: Uuid,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List the direct children of an entity, or the top level
    Children {
        /// Parent id; omit for top-level entities
        #[arg(short, long)]
        parent: Option<Uuid>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List everything beneath an entity
    Descendants {
        id: Uuid,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Create a folder
    CreateFolder {
        name: String,

        /// Parent id (a root or a folder); defaults to the forms root
        #[arg(short, long)]
        parent: Option<Uuid>,
    },

    /// Move an entity beneath another one
    Move {
        id: Uuid,

        /// New parent id
        #[arg(short, long)]
        parent: Uuid,
    },

    /// Delete an entity (folders are not deleted recursively)
    Delete { id: Uuid },
}

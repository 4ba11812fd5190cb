//! Command implementations for store-cli

pub mod read;
pub mod write;

mod output;

pub use read::{run_children, run_descendants, run_get, run_roots};
pub use write::{run_create_folder, run_delete, run_move};

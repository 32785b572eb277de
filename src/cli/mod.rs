//! CLI command handlers
//!
//! This module contains the implementation of the non-interactive commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod seed;

pub use expense::{handle_categories_command, handle_check_command, handle_list_command, CheckArgs, ListArgs};
pub use seed::{load_drafts, seed_store, session_store, SeedReport};

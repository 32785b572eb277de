//! Terminal User Interface module
//!
//! The interactive shell of the expense tracker, built on ratatui. One screen
//! holds the add-expense form, the category filter and the expense list.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;

pub use app::App;
pub use terminal::run_tui;

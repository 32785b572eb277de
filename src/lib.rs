//! Expense Tracker - Terminal expense form and filterable list
//!
//! This library provides the core of a small in-memory expense tracker: a
//! validated add-expense form, a store that hands out identifiers, a category
//! filter and a list view whose total follows the filter.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Core data (money, categories, expenses)
//! - `services`: Validation, store, filter/list view and the form controller
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: File-backed tracing setup
//! - `cli`: Non-interactive command handlers
//! - `display`: Plain-text formatting for the CLI
//! - `tui`: The interactive terminal interface
//!
//! # Example
//!
//! ```rust
//! use expenses::models::{CategoryRegistry, ExpenseDraft};
//! use expenses::services::{validate_expense, CategoryFilter, ExpenseListView, ExpenseStore};
//!
//! let registry = CategoryRegistry::default();
//! let mut store = ExpenseStore::new();
//!
//! let draft = ExpenseDraft::new("Coffee", "4.5", "Groceries");
//! let expense = validate_expense(&draft, &registry).unwrap();
//! store.append(expense);
//!
//! let view = ExpenseListView::project(&store, &CategoryFilter::all()).unwrap();
//! assert_eq!(view.format_total("$"), "$4.50");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod tui;

pub use error::{ExpenseError, ExpenseResult};

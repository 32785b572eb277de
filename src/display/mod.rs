//! Display formatting for terminal output
//!
//! Plain-text renderings of expense lists and validation reports used by the
//! non-interactive commands.

pub mod expense;

pub use expense::{format_expense_list, format_validation_errors};

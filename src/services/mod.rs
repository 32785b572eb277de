//! Service layer for the expense tracker
//!
//! Business logic on top of the models: validation, the in-memory store, the
//! filtered list view and the add-expense form controller.

pub mod filter;
pub mod form;
pub mod store;
pub mod validation;

pub use filter::{CategoryFilter, ExpenseListView, ALL_CATEGORIES};
pub use form::{ExpenseForm, FormStatus, SUBMITTED_NOTICE};
pub use store::ExpenseStore;
pub use validation::{validate_expense, Field, ValidationError, ValidationErrors};

//! Core data models for the expense tracker
//!
//! This module contains the data structures of the expense domain: money
//! amounts, the category registry and expense records.

pub mod category;
pub mod expense;
pub mod money;

pub use category::{CategoryRegistry, CategoryRegistryError, DEFAULT_CATEGORIES};
pub use expense::{Expense, ExpenseDraft, ExpenseId, NewExpense};
pub use money::{Money, MoneyParseError};

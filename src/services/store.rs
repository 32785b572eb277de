//! In-memory expense store
//!
//! Holds expenses in insertion order for the lifetime of a session. Records
//! are only ever appended or removed; identifiers are handed out in
//! increasing order and never reused.

use tracing::debug;

use crate::models::{Expense, ExpenseId, NewExpense};

/// The ordered collection of expenses owned by the active view
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
    next_id: ExpenseId,
}

impl ExpenseStore {
    /// Create an empty store; the first expense gets id 1
    pub fn new() -> Self {
        Self {
            expenses: Vec::new(),
            next_id: ExpenseId::new(1),
        }
    }

    /// Create a store seeded with existing records
    ///
    /// New identifiers continue from the highest seeded id plus one.
    pub fn with_expenses(expenses: Vec<Expense>) -> Self {
        let next_id = expenses
            .iter()
            .map(|e| e.id)
            .max()
            .map(|id| id.next())
            .unwrap_or(ExpenseId::new(1));

        Self { expenses, next_id }
    }

    /// Append a validated expense and return its new identifier
    pub fn append(&mut self, new: NewExpense) -> ExpenseId {
        let id = self.next_id;
        self.next_id = id.next();

        debug!(id = %id, category = %new.category, amount = %new.amount, "expense appended");
        self.expenses.push(Expense::from_new(id, new));
        id
    }

    /// Remove the expense with the given identifier
    ///
    /// Returns the removed record, or `None` if no such record exists. An
    /// absent identifier is not an error and leaves the store unchanged.
    pub fn remove_by_id(&mut self, id: ExpenseId) -> Option<Expense> {
        let index = self.expenses.iter().position(|e| e.id == id)?;
        let removed = self.expenses.remove(index);
        debug!(id = %id, "expense removed");
        Some(removed)
    }

    /// Get an expense by identifier
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Iterate over expenses in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Expense> {
        self.expenses.iter()
    }

    /// All expenses in insertion order
    pub fn all(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

impl Default for ExpenseStore {
    fn default() -> Self {
        Self::new()
    }
}

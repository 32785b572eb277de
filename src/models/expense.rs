//! Expense model
//!
//! `ExpenseDraft` is what the user typed, `NewExpense` is a draft that passed
//! validation, and `Expense` is a validated record that has been given an
//! identifier by the store.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::money::Money;

/// Identifier assigned by the expense store, unique within one store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u64);

impl ExpenseId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The identifier that follows this one
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated expense payload, not yet stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewExpense {
    pub description: String,
    pub amount: Money,
    pub category: String,
}

/// An expense held by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Trimmed description, 3 to 50 characters
    pub description: String,

    /// Amount between 0.01 and 100000.00
    pub amount: Money,

    /// One of the registry categories
    pub category: String,
}

impl Expense {
    /// Attach an identifier to a validated payload
    pub fn from_new(id: ExpenseId, new: NewExpense) -> Self {
        Self {
            id,
            description: new.description,
            amount: new.amount,
            category: new.category,
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} ({})",
            self.id, self.description, self.amount, self.category
        )
    }
}

/// Raw, unvalidated expense fields as entered by the user
///
/// Empty strings stand for missing values. When read from JSON every field is
/// optional and `amount` may be either a string or a number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    #[serde(default)]
    pub description: String,

    #[serde(default, deserialize_with = "amount_text")]
    pub amount: String,

    #[serde(default)]
    pub category: String,
}

impl ExpenseDraft {
    pub fn new(
        description: impl Into<String>,
        amount: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
            category: category.into(),
        }
    }
}

fn amount_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Text(String),
        Number(serde_json::Number),
        Missing(()),
    }

    Ok(match RawAmount::deserialize(deserializer)? {
        RawAmount::Text(text) => text,
        RawAmount::Number(number) => number.to_string(),
        RawAmount::Missing(()) => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_next() {
        let id = ExpenseId::new(1);
        assert_eq!(id.next(), ExpenseId::new(2));
        assert_eq!(id.to_string(), "1");
    }

    #[test]
    fn test_from_new() {
        let new = NewExpense {
            description: "Coffee".into(),
            amount: Money::from_cents(450),
            category: "Groceries".into(),
        };
        let expense = Expense::from_new(ExpenseId::new(7), new);
        assert_eq!(expense.id.value(), 7);
        assert_eq!(expense.description, "Coffee");
        assert_eq!(expense.to_string(), "#7 Coffee $4.50 (Groceries)");
    }

    #[test]
    fn test_draft_from_json() {
        let draft: ExpenseDraft = serde_json::from_str(
            r#"{"description": "Coffee", "amount": 4.5, "category": "Groceries"}"#,
        )
        .unwrap();
        assert_eq!(draft, ExpenseDraft::new("Coffee", "4.5", "Groceries"));

        let draft: ExpenseDraft =
            serde_json::from_str(r#"{"description": "Rent", "amount": "1200.00"}"#).unwrap();
        assert_eq!(draft.amount, "1200.00");
        assert_eq!(draft.category, "");

        let draft: ExpenseDraft = serde_json::from_str(r#"{"amount": null}"#).unwrap();
        assert_eq!(draft, ExpenseDraft::default());
    }
}

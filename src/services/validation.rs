//! Expense validation
//!
//! Checks a raw [`ExpenseDraft`] against the field rules and either produces a
//! [`NewExpense`] or reports one message per offending field. Validation is
//! pure: it never touches the store.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal_macros::dec;
use thiserror::Error;

use crate::models::{CategoryRegistry, ExpenseDraft, Money, NewExpense};

/// Minimum description length in characters, after trimming
pub const DESCRIPTION_MIN_CHARS: usize = 3;

/// Maximum description length in characters, after trimming
pub const DESCRIPTION_MAX_CHARS: usize = 50;

/// Smallest accepted amount
pub const AMOUNT_MIN: Money = Money::from_decimal(dec!(0.01));

/// Largest accepted amount
pub const AMOUNT_MAX: Money = Money::from_decimal(dec!(100000));

/// A form field that can carry a validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Description,
    Amount,
    Category,
}

impl Field {
    /// All fields in form order
    pub fn all() -> &'static [Self] {
        &[Self::Description, Self::Amount, Self::Category]
    }

    /// The field name used in error reports
    pub fn name(&self) -> &'static str {
        match self {
            Self::Description => "description",
            Self::Amount => "amount",
            Self::Category => "category",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single field-level validation failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validation failures keyed by field, at most one per field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error; the first error reported for a field wins
    pub fn insert(&mut self, error: ValidationError) {
        self.errors.entry(error.field).or_insert(error);
    }

    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    /// The message for a field, if it failed
    pub fn message(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(|e| e.message.as_str())
    }

    pub fn remove(&mut self, field: Field) -> Option<ValidationError> {
        self.errors.remove(&field)
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate over errors in form order
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.values()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Validate a draft against the field rules and the category registry
///
/// Every field is checked, so a draft with several problems reports all of
/// them at once.
pub fn validate_expense(
    draft: &ExpenseDraft,
    registry: &CategoryRegistry,
) -> Result<NewExpense, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let description = validate_description(&draft.description)
        .map_err(|e| errors.insert(e))
        .ok();
    let amount = validate_amount(&draft.amount)
        .map_err(|e| errors.insert(e))
        .ok();
    let category = validate_category(&draft.category, registry)
        .map_err(|e| errors.insert(e))
        .ok();

    match (description, amount, category) {
        (Some(description), Some(amount), Some(category)) => Ok(NewExpense {
            description,
            amount,
            category,
        }),
        _ => Err(errors),
    }
}

/// Check the description length and return the trimmed text
pub fn validate_description(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    let len = trimmed.chars().count();

    if len < DESCRIPTION_MIN_CHARS {
        return Err(ValidationError::new(
            Field::Description,
            format!(
                "Description should be atleast {} characters",
                DESCRIPTION_MIN_CHARS
            ),
        ));
    }

    if len > DESCRIPTION_MAX_CHARS {
        return Err(ValidationError::new(
            Field::Description,
            format!(
                "Description should be less than {} characters",
                DESCRIPTION_MAX_CHARS
            ),
        ));
    }

    Ok(trimmed.to_string())
}

/// Parse the amount text and check its bounds
///
/// Any precision is accepted; only the bounds apply.
pub fn validate_amount(raw: &str) -> Result<Money, ValidationError> {
    let amount = Money::parse(raw)
        .map_err(|_| ValidationError::new(Field::Amount, "Amount is required"))?;

    if amount < AMOUNT_MIN {
        return Err(ValidationError::new(
            Field::Amount,
            format!("Amount must be at least {}", AMOUNT_MIN.amount()),
        ));
    }

    if amount > AMOUNT_MAX {
        return Err(ValidationError::new(
            Field::Amount,
            format!("Amount must be at most {}", AMOUNT_MAX.amount()),
        ));
    }

    Ok(amount)
}

/// Check the category is exactly one of the registry entries
pub fn validate_category(
    raw: &str,
    registry: &CategoryRegistry,
) -> Result<String, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::new(Field::Category, "Category is required"));
    }

    if !registry.contains(raw) {
        return Err(ValidationError::new(
            Field::Category,
            format!("Category must be one of: {}", registry),
        ));
    }

    Ok(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> CategoryRegistry {
        CategoryRegistry::default()
    }

    #[test]
    fn test_valid_draft() {
        let draft = ExpenseDraft::new("Coffee", "4.5", "Groceries");
        let expense = validate_expense(&draft, &registry()).unwrap();
        assert_eq!(expense.description, "Coffee");
        assert_eq!(expense.amount, Money::from_cents(450));
        assert_eq!(expense.category, "Groceries");
    }

    #[test]
    fn test_description_is_trimmed() {
        let draft = ExpenseDraft::new("  Coffee  ", "4.5", "Groceries");
        let expense = validate_expense(&draft, &registry()).unwrap();
        assert_eq!(expense.description, "Coffee");
    }

    #[test]
    fn test_description_too_short() {
        let draft = ExpenseDraft::new("Ab", "4.5", "Groceries");
        let errors = validate_expense(&draft, &registry()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.message(Field::Description),
            Some("Description should be atleast 3 characters")
        );

        // Whitespace does not count toward the length
        let draft = ExpenseDraft::new("  Ab   ", "4.5", "Groceries");
        assert!(validate_expense(&draft, &registry()).is_err());
    }

    #[test]
    fn test_description_bounds() {
        assert!(validate_description("abc").is_ok());
        assert!(validate_description(&"a".repeat(50)).is_ok());

        let err = validate_description(&"a".repeat(51)).unwrap_err();
        assert_eq!(err.field, Field::Description);
        assert_eq!(err.message, "Description should be less than 50 characters");

        // Counted in characters, not bytes
        assert!(validate_description(&"é".repeat(50)).is_ok());
    }

    #[test]
    fn test_amount_required() {
        for raw in ["", "   ", "abc", "4,50"] {
            let err = validate_amount(raw).unwrap_err();
            assert_eq!(err.message, "Amount is required", "input {:?}", raw);
        }
    }

    #[test]
    fn test_amount_bounds() {
        assert_eq!(validate_amount("0.01").unwrap(), Money::from_cents(1));
        assert_eq!(
            validate_amount("100000").unwrap(),
            Money::from_cents(10_000_000)
        );

        let err = validate_amount("0").unwrap_err();
        assert_eq!(err.message, "Amount must be at least 0.01");

        let err = validate_amount("-5").unwrap_err();
        assert_eq!(err.message, "Amount must be at least 0.01");

        let err = validate_amount("100000.01").unwrap_err();
        assert_eq!(err.message, "Amount must be at most 100000");
    }

    #[test]
    fn test_amount_any_precision_within_bounds() {
        let amount = validate_amount("4.555").unwrap();
        assert_eq!(amount, Money::from_decimal(dec!(4.555)));

        let draft = ExpenseDraft::new("Coffee", "4.555", "Groceries");
        let expense = validate_expense(&draft, &registry()).unwrap();
        assert_eq!(expense.amount.to_string(), "$4.56");

        let err = validate_amount("0.009").unwrap_err();
        assert_eq!(err.message, "Amount must be at least 0.01");

        let err = validate_amount("100000.001").unwrap_err();
        assert_eq!(err.message, "Amount must be at most 100000");
    }

    #[test]
    fn test_category_required() {
        let err = validate_category("", &registry()).unwrap_err();
        assert_eq!(err.message, "Category is required");
    }

    #[test]
    fn test_category_must_be_member() {
        let err = validate_category("Travel", &registry()).unwrap_err();
        assert_eq!(
            err.message,
            "Category must be one of: Groceries, Utilities, Entertainment"
        );
        assert!(validate_category("groceries", &registry()).is_err());
    }

    #[test]
    fn test_multiple_errors_reported_together() {
        let draft = ExpenseDraft::default();
        let errors = validate_expense(&draft, &registry()).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.get(Field::Description).is_some());
        assert_eq!(errors.message(Field::Amount), Some("Amount is required"));
        assert_eq!(errors.message(Field::Category), Some("Category is required"));

        let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, Field::all());
    }

    #[test]
    fn test_errors_display() {
        let draft = ExpenseDraft::new("Coffee", "", "");
        let errors = validate_expense(&draft, &registry()).unwrap_err();
        assert_eq!(
            errors.to_string(),
            "amount: Amount is required; category: Category is required"
        );
    }

    #[test]
    fn test_first_error_per_field_wins() {
        let mut errors = ValidationErrors::new();
        errors.insert(ValidationError::new(Field::Amount, "first"));
        errors.insert(ValidationError::new(Field::Amount, "second"));
        assert_eq!(errors.message(Field::Amount), Some("first"));

        errors.remove(Field::Amount);
        assert!(errors.is_empty());
    }
}

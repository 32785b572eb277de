//! Expense form controller
//!
//! Owns the field values of the "add expense" form, runs validation on
//! submit and hands the validated payload to a caller-supplied callback. The
//! form never touches the store itself.
//!
//! ```text
//! Editing --submit(valid)----> JustSubmitted   (callback invoked, fields cleared)
//! Editing --submit(invalid)--> Editing         (errors shown, values kept)
//! JustSubmitted --edit-------> Editing         (success notice dismissed)
//! ```

use tracing::debug;

use crate::models::{CategoryRegistry, ExpenseDraft, NewExpense};

use super::validation::{validate_expense, Field, ValidationErrors};

/// Notice shown after a successful submission
pub const SUBMITTED_NOTICE: &str = "Submitted successfully!";

/// Observable state of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Editing,
    JustSubmitted,
}

impl Field {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Description => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Description,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Description => Self::Category,
            Self::Amount => Self::Description,
            Self::Category => Self::Amount,
        }
    }
}

/// State of the add-expense form
#[derive(Debug, Clone)]
pub struct ExpenseForm {
    registry: CategoryRegistry,
    description: String,
    amount: String,
    /// Selected category label; empty when nothing is selected
    category: String,
    focused: Field,
    errors: ValidationErrors,
    status: FormStatus,
}

impl ExpenseForm {
    /// Create an empty form offering the registry's categories
    pub fn new(registry: CategoryRegistry) -> Self {
        Self {
            registry,
            description: String::new(),
            amount: String::new(),
            category: String::new(),
            focused: Field::Description,
            errors: ValidationErrors::new(),
            status: FormStatus::Editing,
        }
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// Whether the success notice should be shown
    pub fn is_just_submitted(&self) -> bool {
        self.status == FormStatus::JustSubmitted
    }

    /// The categories offered by the form
    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    /// Current text of a field
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Description => &self.description,
            Field::Amount => &self.amount,
            Field::Category => &self.category,
        }
    }

    /// Validation errors from the last failed submit
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Error message to show next to a field
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.message(field)
    }

    // === Focus ===

    pub fn focused_field(&self) -> Field {
        self.focused
    }

    pub fn set_focus(&mut self, field: Field) {
        self.focused = field;
    }

    pub fn next_field(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn prev_field(&mut self) {
        self.focused = self.focused.prev();
    }

    // === Editing ===

    /// Type a character into the focused text field
    ///
    /// The category is a selector, so typing there is ignored.
    pub fn insert_char(&mut self, c: char) {
        match self.focused {
            Field::Description => {
                self.description.push(c);
                self.touched(Field::Description);
            }
            Field::Amount => {
                self.amount.push(c);
                self.touched(Field::Amount);
            }
            Field::Category => {}
        }
    }

    /// Delete the last character of the focused field, or clear the
    /// category selection
    pub fn backspace(&mut self) {
        match self.focused {
            Field::Description => {
                self.description.pop();
            }
            Field::Amount => {
                self.amount.pop();
            }
            Field::Category => self.category.clear(),
        }
        self.touched(self.focused);
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
        self.touched(Field::Description);
    }

    pub fn set_amount(&mut self, value: impl Into<String>) {
        self.amount = value.into();
        self.touched(Field::Amount);
    }

    /// Select a category by label; the empty string clears the selection
    pub fn select_category(&mut self, value: impl Into<String>) {
        self.category = value.into();
        self.touched(Field::Category);
    }

    /// Step through the empty choice followed by each registry category
    pub fn cycle_category(&mut self, forward: bool) {
        let choices = self.registry.len() + 1;
        let current = self
            .registry
            .position(&self.category)
            .map(|i| i + 1)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % choices
        } else {
            (current + choices - 1) % choices
        };

        let label = match next {
            0 => String::new(),
            i => self.registry.get(i - 1).unwrap_or_default().to_string(),
        };
        self.select_category(label);
    }

    /// Any edit dismisses the success notice and the edited field's error
    fn touched(&mut self, field: Field) {
        self.status = FormStatus::Editing;
        self.errors.remove(field);
    }

    /// The current field values as an unvalidated draft
    pub fn draft(&self) -> ExpenseDraft {
        ExpenseDraft::new(&self.description, &self.amount, &self.category)
    }

    // === Submission ===

    /// Validate the fields and, if they pass, hand the expense to `on_submit`
    ///
    /// On success the callback runs exactly once, the fields are cleared and
    /// the form enters `JustSubmitted`. On failure the entered values stay
    /// in place and the errors are kept for display.
    pub fn submit<F>(&mut self, on_submit: F) -> Result<(), ValidationErrors>
    where
        F: FnOnce(NewExpense),
    {
        match validate_expense(&self.draft(), &self.registry) {
            Ok(expense) => {
                on_submit(expense);
                self.reset();
                self.status = FormStatus::JustSubmitted;
                Ok(())
            }
            Err(errors) => {
                debug!(errors = %errors, "expense submit rejected");
                self.errors = errors.clone();
                self.status = FormStatus::Editing;
                Err(errors)
            }
        }
    }

    /// Clear every field and error and return focus to the first field
    pub fn reset(&mut self) {
        self.description.clear();
        self.amount.clear();
        self.category.clear();
        self.errors.clear();
        self.focused = Field::Description;
        self.status = FormStatus::Editing;
    }
}

//! Category filter and the expense list view
//!
//! The visible list is a pure function of the store and the current filter
//! selection; it is recomputed on every render and never cached.

use std::fmt;

use crate::models::{CategoryRegistry, Expense, ExpenseId, Money};

use super::store::ExpenseStore;

/// Label of the filter choice that shows every category
pub const ALL_CATEGORIES: &str = "All Categories";

/// The current filter selection: one category, or none for "show everything"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    selection: Option<String>,
}

impl CategoryFilter {
    /// A filter that shows every expense
    pub fn all() -> Self {
        Self { selection: None }
    }

    /// A filter on a single category
    pub fn category(label: impl Into<String>) -> Self {
        Self {
            selection: Some(label.into()),
        }
    }

    /// Build a filter from a selector value; the empty string means no filter
    pub fn from_selection(value: &str) -> Self {
        if value.is_empty() {
            Self::all()
        } else {
            Self::category(value)
        }
    }

    /// Replace the selection; the empty string clears it
    pub fn select(&mut self, value: &str) {
        *self = Self::from_selection(value);
    }

    /// The selected category, if any
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.selection.is_some()
    }

    /// Whether an expense passes the filter
    pub fn matches(&self, expense: &Expense) -> bool {
        match &self.selection {
            None => true,
            Some(category) => expense.category == *category,
        }
    }

    /// The expenses that pass the filter, in store order
    pub fn visible<'s>(&self, store: &'s ExpenseStore) -> Vec<&'s Expense> {
        store.iter().filter(|e| self.matches(e)).collect()
    }

    /// Move to the next (or previous) choice: "All Categories" followed by
    /// the registry entries, wrapping around
    pub fn cycle(&mut self, registry: &CategoryRegistry, forward: bool) {
        let choices = registry.len() + 1;
        let current = match &self.selection {
            None => 0,
            Some(label) => registry.position(label).map(|i| i + 1).unwrap_or(0),
        };
        let next = if forward {
            (current + 1) % choices
        } else {
            (current + choices - 1) % choices
        };

        *self = match next {
            0 => Self::all(),
            i => registry
                .get(i - 1)
                .map(Self::category)
                .unwrap_or_default(),
        };
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.selection().unwrap_or(ALL_CATEGORIES))
    }
}

/// The rows shown in the expense list together with their total
#[derive(Debug, Clone)]
pub struct ExpenseListView<'s> {
    rows: Vec<&'s Expense>,
}

impl<'s> ExpenseListView<'s> {
    /// Project the store through the filter
    ///
    /// Returns `None` when nothing is visible, in which case no list (not
    /// even an empty table) is shown.
    pub fn project(store: &'s ExpenseStore, filter: &CategoryFilter) -> Option<Self> {
        let rows = filter.visible(store);
        if rows.is_empty() {
            None
        } else {
            Some(Self { rows })
        }
    }

    /// Visible rows in store order
    pub fn rows(&self) -> &[&'s Expense] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Identifier of the row at a display position
    pub fn id_at(&self, index: usize) -> Option<ExpenseId> {
        self.rows.get(index).map(|e| e.id)
    }

    /// Sum of the visible amounts only
    pub fn total(&self) -> Money {
        self.rows.iter().map(|e| e.amount).sum()
    }

    /// The total with a leading currency symbol and two decimals
    pub fn format_total(&self, symbol: &str) -> String {
        self.total().format_with_symbol(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewExpense;

    fn store_with(entries: &[(&str, i64, &str)]) -> ExpenseStore {
        let mut store = ExpenseStore::new();
        for (description, cents, category) in entries {
            store.append(NewExpense {
                description: description.to_string(),
                amount: Money::from_cents(*cents),
                category: category.to_string(),
            });
        }
        store
    }

    #[test]
    fn test_no_filter_shows_everything() {
        let store = store_with(&[("Milk", 1000, "Groceries"), ("Power", 2000, "Utilities")]);
        let visible = CategoryFilter::all().visible(&store);
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn test_filter_by_category() {
        let store = store_with(&[
            ("Milk", 1000, "Groceries"),
            ("Power", 2000, "Utilities"),
            ("Water", 1500, "Utilities"),
        ]);
        let visible = CategoryFilter::category("Utilities").visible(&store);
        let names: Vec<&str> = visible.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(names, vec!["Power", "Water"]);
    }

    #[test]
    fn test_empty_selection_clears_filter() {
        let mut filter = CategoryFilter::category("Utilities");
        filter.select("");
        assert_eq!(filter, CategoryFilter::all());
        assert!(!filter.is_active());
        assert_eq!(filter.to_string(), ALL_CATEGORIES);
    }

    #[test]
    fn test_total_respects_filter() {
        let store = store_with(&[("Milk", 1000, "Groceries"), ("Power", 2000, "Utilities")]);

        let filtered = CategoryFilter::category("Utilities");
        let view = ExpenseListView::project(&store, &filtered).unwrap();
        assert_eq!(view.format_total("$"), "$20.00");

        let view = ExpenseListView::project(&store, &CategoryFilter::all()).unwrap();
        assert_eq!(view.format_total("$"), "$30.00");
    }

    #[test]
    fn test_single_expense_total() {
        let store = store_with(&[("Coffee", 450, "Groceries")]);
        let view = ExpenseListView::project(&store, &CategoryFilter::all()).unwrap();
        assert_eq!(view.len(), 1);
        assert_eq!(view.id_at(0), Some(ExpenseId::new(1)));
        assert_eq!(view.format_total("$"), "$4.50");
    }

    #[test]
    fn test_empty_view_is_none() {
        let store = ExpenseStore::new();
        assert!(ExpenseListView::project(&store, &CategoryFilter::all()).is_none());

        let store = store_with(&[("Milk", 1000, "Groceries")]);
        let filter = CategoryFilter::category("Entertainment");
        assert!(ExpenseListView::project(&store, &filter).is_none());
    }

    #[test]
    fn test_delete_hidden_row_by_id() {
        let mut store = store_with(&[("Milk", 1000, "Groceries"), ("Power", 2000, "Utilities")]);
        let filter = CategoryFilter::category("Utilities");

        let groceries_id = store
            .iter()
            .find(|e| e.category == "Groceries")
            .map(|e| e.id)
            .unwrap();
        assert!(store.remove_by_id(groceries_id).is_some());

        assert_eq!(store.len(), 1);
        assert!(store.get(groceries_id).is_none());
        let view = ExpenseListView::project(&store, &filter).unwrap();
        assert_eq!(view.format_total("$"), "$20.00");
    }

    #[test]
    fn test_cycle_through_choices() {
        let registry = CategoryRegistry::default();
        let mut filter = CategoryFilter::all();

        filter.cycle(&registry, true);
        assert_eq!(filter.selection(), Some("Groceries"));
        filter.cycle(&registry, true);
        filter.cycle(&registry, true);
        assert_eq!(filter.selection(), Some("Entertainment"));
        filter.cycle(&registry, true);
        assert_eq!(filter.selection(), None);

        filter.cycle(&registry, false);
        assert_eq!(filter.selection(), Some("Entertainment"));
    }
}

//! Expense display formatting
//!
//! Formats the visible expenses as a table with a total row.

use crate::services::{ExpenseListView, ValidationErrors};

/// Shown in place of a table when no expense is visible
pub const NO_EXPENSES: &str = "No expenses.";

/// Format the visible expenses as a table
///
/// Without a view there is nothing to list, so no header is printed either.
pub fn format_expense_list(view: Option<&ExpenseListView<'_>>, symbol: &str) -> String {
    let Some(view) = view else {
        return format!("{}\n", NO_EXPENSES);
    };

    let amounts: Vec<String> = view
        .rows()
        .iter()
        .map(|e| e.amount.format_with_symbol(symbol))
        .collect();
    let total = view.format_total(symbol);

    // Calculate column widths
    let id_width = view
        .rows()
        .iter()
        .map(|e| e.id.to_string().len())
        .max()
        .unwrap_or(2)
        .max(2);

    let description_width = view
        .rows()
        .iter()
        .map(|e| e.description.chars().count())
        .max()
        .unwrap_or(11)
        .max(11);

    let amount_width = amounts
        .iter()
        .map(|a| a.chars().count())
        .chain(std::iter::once(total.chars().count()))
        .max()
        .unwrap_or(6)
        .max(6);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<id_width$}  {:<description_width$}  {:>amount_width$}  {}\n",
        "Id",
        "Description",
        "Amount",
        "Category",
    ));

    output.push_str(&format!(
        "{:-<id_width$}  {:-<description_width$}  {:->amount_width$}  {:-<8}\n",
        "", "", "", "",
    ));

    for (expense, amount) in view.rows().iter().zip(&amounts) {
        output.push_str(&format!(
            "{:<id_width$}  {:<description_width$}  {:>amount_width$}  {}\n",
            expense.id, expense.description, amount, expense.category,
        ));
    }

    output.push_str(&format!(
        "{:-<id_width$}  {:-<description_width$}  {:->amount_width$}\n",
        "", "", "",
    ));

    output.push_str(&format!(
        "{:<id_width$}  {:<description_width$}  {:>amount_width$}\n",
        "", "Total", total,
    ));

    output
}

/// One `field: message` line per failed field, in form order
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    errors.iter().map(|e| format!("{}\n", e)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryRegistry, ExpenseDraft};
    use crate::services::{validate_expense, CategoryFilter, ExpenseStore};

    fn store_with(entries: &[(&str, &str, &str)]) -> ExpenseStore {
        let registry = CategoryRegistry::default();
        let mut store = ExpenseStore::new();
        for (description, amount, category) in entries {
            let draft = ExpenseDraft::new(*description, *amount, *category);
            store.append(validate_expense(&draft, &registry).unwrap());
        }
        store
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_expense_list(None, "$"), "No expenses.\n");
    }

    #[test]
    fn test_table_with_total() {
        let store = store_with(&[("Milk", "10", "Groceries"), ("Power bill", "20.5", "Utilities")]);
        let view = ExpenseListView::project(&store, &CategoryFilter::all()).unwrap();
        let output = format_expense_list(Some(&view), "$");

        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].starts_with("Id"));
        assert!(lines[2].contains("Milk"));
        assert!(lines[2].ends_with("Groceries"));
        assert!(lines[3].contains("$20.50"));
        assert!(lines.last().unwrap().contains("Total"));
        assert!(lines.last().unwrap().ends_with("$30.50"));
    }

    #[test]
    fn test_total_follows_filter() {
        let store = store_with(&[("Milk", "10", "Groceries"), ("Power", "20", "Utilities")]);
        let view =
            ExpenseListView::project(&store, &CategoryFilter::category("Utilities")).unwrap();
        let output = format_expense_list(Some(&view), "€");

        assert!(!output.contains("Milk"));
        assert!(output.lines().last().unwrap().ends_with("€20.00"));
    }

    #[test]
    fn test_validation_lines() {
        let draft = ExpenseDraft::new("Ab", "", "");
        let errors = validate_expense(&draft, &CategoryRegistry::default()).unwrap_err();
        let output = format_validation_errors(&errors);

        assert_eq!(
            output,
            "description: Description should be atleast 3 characters\n\
             amount: Amount is required\n\
             category: Category is required\n"
        );
    }
}

//! Expense CLI commands
//!
//! Non-interactive counterparts of the TUI: list the categories, validate a
//! single candidate, and print a filtered list with its total.

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use super::seed::{load_drafts, seed_store};
use crate::display::{format_expense_list, format_validation_errors};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{CategoryRegistry, ExpenseDraft};
use crate::services::{validate_expense, CategoryFilter, ExpenseListView, ExpenseStore};

/// Arguments for `check`
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Description (3 to 50 characters)
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Amount (e.g., "4.50")
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub amount: String,

    /// Category label
    #[arg(short, long, default_value = "")]
    pub category: String,
}

/// Arguments for `list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// JSON file with an array of expenses
    #[arg(short, long)]
    pub from: PathBuf,

    /// Only show this category (empty for all)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Currency symbol, overriding the configured one
    #[arg(long)]
    pub symbol: Option<String>,
}

/// Print the registry, one label per line
pub fn handle_categories_command(registry: &CategoryRegistry) -> ExpenseResult<()> {
    for label in registry.iter() {
        println!("{}", label);
    }
    Ok(())
}

/// Validate a single candidate expense
///
/// Invalid input prints one `field: message` line per error and returns the
/// errors so the process exits non-zero.
pub fn handle_check_command(
    registry: &CategoryRegistry,
    symbol: &str,
    args: CheckArgs,
) -> ExpenseResult<()> {
    let draft = ExpenseDraft::new(args.description, args.amount, args.category);

    match validate_expense(&draft, registry) {
        Ok(new) => {
            println!(
                "Valid: {} {} ({})",
                new.description,
                new.amount.format_with_symbol(symbol),
                new.category
            );
            Ok(())
        }
        Err(errors) => {
            print!("{}", format_validation_errors(&errors));
            Err(ExpenseError::Validation(errors))
        }
    }
}

/// Load, validate, filter and print expenses from a file
pub fn handle_list_command(
    registry: &CategoryRegistry,
    symbol: &str,
    args: ListArgs,
) -> ExpenseResult<()> {
    let filter = match args.category.as_deref() {
        None => CategoryFilter::all(),
        Some(selection) => {
            let filter = CategoryFilter::from_selection(selection);
            if let Some(label) = filter.selection() {
                if !registry.contains(label) {
                    return Err(ExpenseError::category_not_found(label));
                }
            }
            filter
        }
    };

    let drafts = load_drafts(&args.from)?;
    let mut store = ExpenseStore::new();
    let report = seed_store(&mut store, &drafts, registry);
    for line in report.skipped_lines() {
        eprintln!("{}", line);
    }

    info!(filter = %filter, "listing expenses");
    let view = ExpenseListView::project(&store, &filter);
    let symbol = args.symbol.as_deref().unwrap_or(symbol);
    print!("{}", format_expense_list(view.as_ref(), symbol));

    Ok(())
}

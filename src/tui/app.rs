//! Application state for the TUI
//!
//! The App struct owns the expense store and filter selection for the whole
//! session and holds everything needed for rendering and handling events.

use std::time::{Duration, Instant};

use tracing::info;

use crate::models::{CategoryRegistry, ExpenseId};
use crate::services::{CategoryFilter, ExpenseForm, ExpenseListView, ExpenseStore, Field};

/// How long a status message stays visible
const STATUS_TTL: Duration = Duration::from_secs(3);

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Form,
    Filter,
    List,
}

/// Main application state
pub struct App {
    /// Allowed categories, shared by the form and the filter
    pub registry: CategoryRegistry,

    /// Currency symbol for amounts and totals
    pub currency_symbol: String,

    /// All expenses of this session
    pub store: ExpenseStore,

    /// Current list filter
    pub filter: CategoryFilter,

    /// Add-expense form
    pub form: ExpenseForm,

    /// Which panel is focused
    pub focused_panel: FocusedPanel,

    /// Selected row in the visible list
    pub selected_index: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message and when it was set
    status: Option<(String, Instant)>,
}

impl App {
    /// Create a new App instance
    pub fn new(registry: CategoryRegistry, currency_symbol: impl Into<String>) -> Self {
        Self::with_store(registry, currency_symbol, ExpenseStore::new())
    }

    /// Create an App around an existing store
    pub fn with_store(
        registry: CategoryRegistry,
        currency_symbol: impl Into<String>,
        store: ExpenseStore,
    ) -> Self {
        Self {
            form: ExpenseForm::new(registry.clone()),
            registry,
            currency_symbol: currency_symbol.into(),
            store,
            filter: CategoryFilter::all(),
            focused_panel: FocusedPanel::default(),
            selected_index: 0,
            should_quit: false,
            status: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some((message.into(), Instant::now()));
    }

    /// The current status message, if any
    pub fn status_message(&self) -> Option<&str> {
        self.status.as_ref().map(|(message, _)| message.as_str())
    }

    /// Drop the status message once it has been shown long enough
    pub fn expire_status(&mut self) {
        if let Some((_, set_at)) = &self.status {
            if set_at.elapsed() >= STATUS_TTL {
                self.status = None;
            }
        }
    }

    /// The visible rows and total, or `None` when nothing is visible
    pub fn list_view(&self) -> Option<ExpenseListView<'_>> {
        ExpenseListView::project(&self.store, &self.filter)
    }

    /// Number of rows currently visible
    pub fn visible_count(&self) -> usize {
        self.list_view().map(|view| view.len()).unwrap_or(0)
    }

    /// Identifier of the selected visible row
    pub fn selected_expense_id(&self) -> Option<ExpenseId> {
        self.list_view()
            .and_then(|view| view.id_at(self.selected_index))
    }

    // === Focus ===

    /// Move focus forward: through the form fields, then the filter, then the list
    pub fn focus_next(&mut self) {
        match self.focused_panel {
            FocusedPanel::Form if self.form.focused_field() != Field::Category => {
                self.form.next_field();
            }
            FocusedPanel::Form => self.focused_panel = FocusedPanel::Filter,
            FocusedPanel::Filter => self.focused_panel = FocusedPanel::List,
            FocusedPanel::List => {
                self.focused_panel = FocusedPanel::Form;
                self.form.set_focus(Field::Description);
            }
        }
    }

    /// Move focus backward
    pub fn focus_prev(&mut self) {
        match self.focused_panel {
            FocusedPanel::Form if self.form.focused_field() != Field::Description => {
                self.form.prev_field();
            }
            FocusedPanel::Form => self.focused_panel = FocusedPanel::List,
            FocusedPanel::Filter => {
                self.focused_panel = FocusedPanel::Form;
                self.form.set_focus(Field::Category);
            }
            FocusedPanel::List => self.focused_panel = FocusedPanel::Filter,
        }
    }

    // === Actions ===

    /// Submit the form, appending the expense to the store on success
    pub fn submit_form(&mut self) {
        let store = &mut self.store;
        let mut added = None;

        let result = self.form.submit(|expense| {
            added = Some(store.append(expense));
        });

        match (result, added) {
            (Ok(()), Some(id)) => {
                info!(id = %id, "expense added");
                self.clamp_selection();
            }
            (Ok(()), None) => {}
            (Err(errors), _) => {
                let count = errors.len();
                self.set_status(if count == 1 {
                    "1 field needs attention".to_string()
                } else {
                    format!("{} fields need attention", count)
                });
            }
        }
    }

    /// Remove an expense from the store by identifier
    ///
    /// Works on the full store, so rows hidden by the filter can be removed
    /// too. An unknown identifier is ignored.
    pub fn delete_expense(&mut self, id: ExpenseId) {
        if let Some(removed) = self.store.remove_by_id(id) {
            info!(id = %id, "expense deleted");
            self.set_status(format!("Deleted '{}'", removed.description));
        }
        self.clamp_selection();
    }

    /// Delete the selected visible row
    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_expense_id() {
            self.delete_expense(id);
        }
    }

    /// Apply a filter selection; the empty string shows all categories
    pub fn set_filter(&mut self, value: &str) {
        self.filter.select(value);
        info!(filter = %self.filter, "filter changed");
        self.selected_index = 0;
    }

    /// Step the filter to the next or previous choice
    pub fn cycle_filter(&mut self, forward: bool) {
        self.filter.cycle(&self.registry, forward);
        info!(filter = %self.filter, "filter changed");
        self.selected_index = 0;
    }

    /// Move selection up in the list
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move selection down in the list
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.visible_count() {
            self.selected_index += 1;
        }
    }

    /// Keep the selection inside the visible rows
    fn clamp_selection(&mut self) {
        let count = self.visible_count();
        if self.selected_index >= count {
            self.selected_index = count.saturating_sub(1);
        }
    }
}

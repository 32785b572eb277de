//! TUI Views module
//!
//! Contains the form panel, filter bar, expense list and status bar.

pub mod expense_list;
pub mod filter;
pub mod form;
pub mod status_bar;

use ratatui::Frame;

use super::app::App;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    form::render(frame, app, layout.form);
    filter::render(frame, app, layout.filter);
    expense_list::render(frame, app, layout.list);
    status_bar::render(frame, app, layout.status_bar);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryRegistry;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App) -> String {
        let backend = TestBackend::new(120, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app_with(entries: &[(&str, &str, &str)]) -> App {
        let mut app = App::new(CategoryRegistry::default(), "$");
        for (description, amount, category) in entries {
            app.form.set_description(*description);
            app.form.set_amount(*amount);
            app.form.select_category(*category);
            app.submit_form();
        }
        app
    }

    #[test]
    fn test_empty_list_has_no_table() {
        let app = app_with(&[]);
        let screen = draw(&app);
        assert!(screen.contains("No expenses."));
        assert!(!screen.contains(" Id "));
        assert!(screen.contains("All Categories"));
    }

    #[test]
    fn test_list_shows_rows_and_total() {
        let app = app_with(&[("Coffee", "4.5", "Groceries")]);
        let screen = draw(&app);
        assert!(screen.contains("Coffee"));
        assert!(screen.contains("Total"));
        assert!(screen.contains("$4.50"));
        assert!(screen.contains("Submitted successfully!"));
    }

    #[test]
    fn test_filtered_total_on_screen() {
        let mut app = app_with(&[("Milk", "10", "Groceries"), ("Power", "20", "Utilities")]);
        app.set_filter("Utilities");
        let screen = draw(&app);
        assert!(screen.contains("Power"));
        assert!(!screen.contains("Milk"));
        assert!(screen.contains("$20.00"));
        assert!(!screen.contains("$30.00"));
    }

    #[test]
    fn test_validation_errors_on_screen() {
        let mut app = app_with(&[]);
        app.form.set_description("Ab");
        app.submit_form();
        let screen = draw(&app);
        assert!(screen.contains("Description should be atleast 3 characters"));
        assert!(screen.contains("Amount is required"));
        assert!(screen.contains("Category is required"));
    }
}

//! Expense list view
//!
//! Shows the expenses that pass the current filter, with a total row for
//! exactly those expenses.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::tui::app::{App, FocusedPanel};

/// Render the expense list
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::List;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(" Expenses ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    // No table at all when nothing is visible
    let Some(view) = app.list_view() else {
        let text = Paragraph::new("No expenses. Use the form to add one.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    };

    let widths = [
        Constraint::Length(5),  // Id
        Constraint::Min(20),    // Description
        Constraint::Length(14), // Amount
        Constraint::Length(16), // Category
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Id").style(bold),
        Cell::from("Description").style(bold),
        Cell::from("Amount").style(bold),
        Cell::from("Category").style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let symbol = app.currency_symbol.as_str();
    let rows: Vec<Row> = view
        .rows()
        .iter()
        .map(|expense| {
            Row::new(vec![
                Cell::from(expense.id.to_string()),
                Cell::from(truncate_string(&expense.description, 40)),
                Cell::from(expense.amount.format_with_symbol(symbol))
                    .style(Style::default().fg(Color::Green)),
                Cell::from(expense.category.clone()),
            ])
        })
        .collect();

    let footer = Row::new(vec![
        Cell::from(""),
        Cell::from("Total").style(bold),
        Cell::from(view.format_total(symbol)).style(bold.fg(Color::Green)),
        Cell::from(""),
    ])
    .top_margin(1);

    let table = Table::new(rows, widths)
        .header(header)
        .footer(footer)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    if is_focused {
        state.select(Some(app.selected_index.min(view.len() - 1)));
    }

    frame.render_stateful_widget(table, area, &mut state);
}

/// Truncate a string to a maximum number of characters
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 1).collect();
        format!("{}…", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("Coffee", 10), "Coffee");
        assert_eq!(truncate_string("Electricity bill", 8), "Electri…");
        assert_eq!(truncate_string("Café crème", 5), "Café…");
    }
}

//! Add-expense form panel
//!
//! Renders the description, amount and category fields with their inline
//! validation errors, and the success notice after a submission.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::services::{Field, SUBMITTED_NOTICE};
use crate::tui::app::{App, FocusedPanel};

/// Render the form panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let panel_focused = app.focused_panel == FocusedPanel::Form;
    let border_color = if panel_focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(" Add Expense ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Notice
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Description
            Constraint::Length(1), // Description error
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Amount error
            Constraint::Length(1), // Category
            Constraint::Length(1), // Category error
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Min(0),    // Remaining
        ])
        .split(inner);

    if app.form.is_just_submitted() {
        let notice = Line::from(Span::styled(
            SUBMITTED_NOTICE,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(notice), chunks[0]);
    }

    let rows = [
        (Field::Description, chunks[2], chunks[3]),
        (Field::Amount, chunks[4], chunks[5]),
        (Field::Category, chunks[6], chunks[7]),
    ];

    for (field, field_area, error_area) in rows {
        let focused = panel_focused && app.form.focused_field() == field;
        let line = match field {
            Field::Category => category_line(app.form.value(field), focused),
            _ => text_line(field, app.form.value(field), focused),
        };
        frame.render_widget(Paragraph::new(line), field_area);

        if let Some(error) = app.form.error(field) {
            let error_line = Line::from(vec![
                Span::raw("  "),
                Span::styled(error, Style::default().fg(Color::Red)),
            ]);
            frame.render_widget(Paragraph::new(error_line), error_area);
        }
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Submit  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" List"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[9]);
}

const LABEL_WIDTH: usize = 11;

fn label_span(field: Field, focused: bool) -> Span<'static> {
    let label = match field {
        Field::Description => "Description",
        Field::Amount => "Amount",
        Field::Category => "Category",
    };
    let style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    Span::styled(format!("{:>width$}: ", label, width = LABEL_WIDTH), style)
}

/// A text field: typed characters are appended, so the cursor sits at the end
fn text_line(field: Field, value: &str, focused: bool) -> Line<'static> {
    let mut spans = vec![label_span(field, focused)];

    if focused {
        spans.push(Span::styled(
            value.to_string(),
            Style::default().fg(Color::White),
        ));
        spans.push(Span::styled(
            " ",
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
    } else if value.is_empty() {
        let placeholder = match field {
            Field::Amount => "0.00",
            _ => "3-50 characters",
        };
        spans.push(Span::styled(
            placeholder,
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(
            value.to_string(),
            Style::default().fg(Color::Yellow),
        ));
    }

    Line::from(spans)
}

/// The category selector, cycled with the arrow keys
fn category_line(value: &str, focused: bool) -> Line<'static> {
    let mut spans = vec![label_span(Field::Category, focused)];

    let (text, style) = if value.is_empty() {
        ("(none)".to_string(), Style::default().fg(Color::DarkGray))
    } else if focused {
        (value.to_string(), Style::default().fg(Color::White))
    } else {
        (value.to_string(), Style::default().fg(Color::Yellow))
    };

    if focused {
        spans.push(Span::styled("◀ ", Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(text, style));
        spans.push(Span::styled(" ▶", Style::default().fg(Color::Cyan)));
    } else {
        spans.push(Span::styled(text, style));
    }

    Line::from(spans)
}

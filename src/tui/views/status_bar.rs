//! Status bar view
//!
//! Shows the visible count and total, the last status message, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, FocusedPanel};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let (count, total) = match app.list_view() {
        Some(view) => (view.len(), view.format_total(&app.currency_symbol)),
        None => (0, crate::models::Money::zero().format_with_symbol(&app.currency_symbol)),
    };

    let mut spans = vec![
        Span::styled(" Showing: ", Style::default().fg(Color::White)),
        Span::styled(
            format!("{} of {}", count, app.store.len()),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(" │ "),
        Span::styled("Total: ", Style::default().fg(Color::White)),
        Span::styled(
            total,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    if let Some(message) = app.status_message() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = match app.focused_panel {
        FocusedPanel::Form => " Tab:Next  Enter:Submit  Ctrl+C:Quit ",
        FocusedPanel::Filter => " ←/→:Category  a:All  q:Quit ",
        FocusedPanel::List => " j/k:Move  d:Delete  f:Filter  a:Add  q:Quit ",
    };

    // Right-align the hints when there is room
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.chars().count());

    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

//! Category filter bar
//!
//! Shows "All Categories" followed by every registry category, with the
//! current selection highlighted.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::services::ALL_CATEGORIES;
use crate::tui::app::{App, FocusedPanel};

/// Render the filter bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Filter;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(" Filter ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let selected = app.filter.selection();
    let choices =
        std::iter::once((ALL_CATEGORIES, selected.is_none())).chain(
            app.registry
                .iter()
                .map(|label| (label, selected == Some(label))),
        );

    let mut spans = Vec::new();
    for (label, active) in choices {
        let style = if active {
            Style::default()
                .fg(Color::Black)
                .bg(if is_focused { Color::Cyan } else { Color::Gray })
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!(" {} ", label), style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

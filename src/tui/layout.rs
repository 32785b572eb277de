//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: form panel, filter bar, expense
//! list, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Add-expense form (left)
    pub form: Rect,
    /// Category filter selector (top right)
    pub filter: Rect,
    /// Expense list (right)
    pub list: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(58), // Form (fixed width)
                Constraint::Min(40),    // Filter + list
            ])
            .split(vertical[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Filter
                Constraint::Min(3),    // List
            ])
            .split(horizontal[1]);

        Self {
            form: horizontal[0],
            filter: right[0],
            list: right[1],
            status_bar: vertical[1],
        }
    }
}

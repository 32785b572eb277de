//! Event handler for the TUI
//!
//! Routes keyboard events to the focused panel: the add-expense form, the
//! category filter, or the expense list.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, FocusedPanel};
use super::event::Event;
use crate::services::Field;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.expire_status();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Global keys (work everywhere, including while typing)
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
            return Ok(());
        }
        KeyCode::Tab => {
            app.focus_next();
            return Ok(());
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return Ok(());
        }
        _ => {}
    }

    match app.focused_panel {
        FocusedPanel::Form => handle_form_key(app, key),
        FocusedPanel::Filter => handle_filter_key(app, key),
        FocusedPanel::List => handle_list_key(app, key),
    }

    Ok(())
}

/// Handle keys when the form is focused
fn handle_form_key(app: &mut App, key: KeyEvent) {
    let on_category = app.form.focused_field() == Field::Category;

    match key.code {
        KeyCode::Enter => app.submit_form(),
        KeyCode::Esc => app.focused_panel = FocusedPanel::List,
        KeyCode::Up => app.form.prev_field(),
        KeyCode::Down => app.form.next_field(),
        KeyCode::Left if on_category => app.form.cycle_category(false),
        KeyCode::Right | KeyCode::Char(' ') if on_category => app.form.cycle_category(true),
        KeyCode::Backspace | KeyCode::Delete => app.form.backspace(),
        KeyCode::Char(c) => app.form.insert_char(c),
        _ => {}
    }
}

/// Handle keys when the category filter is focused
fn handle_filter_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Left | KeyCode::Char('h') => app.cycle_filter(false),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => app.cycle_filter(true),
        KeyCode::Backspace | KeyCode::Char('a') => app.set_filter(""),
        KeyCode::Down | KeyCode::Enter => app.focused_panel = FocusedPanel::List,
        _ => {}
    }
}

/// Handle keys when the expense list is focused
fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
        KeyCode::Char('a') | KeyCode::Char('n') => {
            app.focused_panel = FocusedPanel::Form;
            app.form.set_focus(Field::Description);
        }
        KeyCode::Char('f') => app.focused_panel = FocusedPanel::Filter,
        _ => {}
    }
}

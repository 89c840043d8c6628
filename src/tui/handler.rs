//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the focused
//! control and any open dialog.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::storage::KeyValueStore;

use super::app::{App, Focus};
use super::event::Event;
use super::widgets::TextInput;

/// Handle an incoming event
pub fn handle_event<S: KeyValueStore>(app: &mut App<'_, S>, event: Event) -> Result<()> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key),
        Event::Key(_) | Event::Tick | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event<S: KeyValueStore>(app: &mut App<'_, S>, key: KeyEvent) -> Result<()> {
    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Global keys (work everywhere)
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('t') if ctrl => {
            app.toggle_theme()?;
            return Ok(());
        }
        KeyCode::Char('e') if ctrl => {
            app.export()?;
            return Ok(());
        }
        KeyCode::Esc => {
            app.quit();
            return Ok(());
        }
        KeyCode::Tab => {
            app.focus = app.focus.next();
            return Ok(());
        }
        KeyCode::BackTab => {
            app.focus = app.focus.prev();
            return Ok(());
        }
        _ => {}
    }

    match app.focus {
        Focus::Date | Focus::Amount | Focus::Description => handle_form_text_key(app, key),
        Focus::Category => handle_category_key(app, key),
        Focus::Month => handle_month_key(app, key),
        Focus::Year => handle_year_key(app, key),
        Focus::Table => handle_table_key(app, key),
    }
}

/// Handle keys while the delete confirmation is open
fn handle_dialog_key<S: KeyValueStore>(app: &mut App<'_, S>, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.answer_delete(true)?,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.answer_delete(false)?,
        _ => {}
    }
    Ok(())
}

/// Apply an editing key to a text field, returning whether the text changed
fn edit_text(input: &mut TextInput, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            input.insert(c);
            true
        }
        KeyCode::Backspace => {
            input.backspace();
            true
        }
        KeyCode::Delete => {
            input.delete();
            true
        }
        KeyCode::Left => {
            input.move_left();
            false
        }
        KeyCode::Right => {
            input.move_right();
            false
        }
        KeyCode::Home => {
            input.move_start();
            false
        }
        KeyCode::End => {
            input.move_end();
            false
        }
        _ => false,
    }
}

fn handle_form_text_key<S: KeyValueStore>(app: &mut App<'_, S>, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Enter {
        app.submit_form()?;
        return Ok(());
    }

    if let Some(input) = app.form.input_mut(app.focus) {
        edit_text(input, key);
    }
    Ok(())
}

fn handle_category_key<S: KeyValueStore>(app: &mut App<'_, S>, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Left | KeyCode::Up => app.form.cycle_category(false),
        KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => app.form.cycle_category(true),
        KeyCode::Enter => app.submit_form()?,
        _ => {}
    }
    Ok(())
}

fn handle_month_key<S: KeyValueStore>(app: &mut App<'_, S>, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Left | KeyCode::Up => app.cycle_month(false)?,
        KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => app.cycle_month(true)?,
        _ => {}
    }
    Ok(())
}

fn handle_year_key<S: KeyValueStore>(app: &mut App<'_, S>, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Enter || edit_text(&mut app.year_filter, key) {
        let year = app.year_filter.value().trim();
        // Wait for a full year before complaining
        if year.is_empty() || year.chars().count() >= 4 || key.code == KeyCode::Enter {
            app.apply_filters()?;
        }
    }
    Ok(())
}

fn handle_table_key<S: KeyValueStore>(app: &mut App<'_, S>, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_selection(true),
        KeyCode::Char('k') | KeyCode::Up => app.move_selection(false),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),
        KeyCode::Char('e') => app.export()?,
        KeyCode::Char('t') => app.toggle_theme()?,
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
    Ok(())
}

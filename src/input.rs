//! Keyboard input handling.
//!
//! Maps terminal key events to [`App`] actions.  Bindings depend on which
//! screen is showing: the list navigates and opens posts, the detail view
//! opens the link in a browser or goes back.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::app::{App, Screen};

/// Process a single key event, updating app state accordingly.
///
/// Only reacts to key-press events (ignoring release / repeat) so that each
/// physical keypress triggers exactly one action.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    match app.screen {
        Screen::List => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
            KeyCode::Down | KeyCode::Char('j') => app.select_next(),
            KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
            KeyCode::Home | KeyCode::Char('g') => app.select_first(),
            KeyCode::End | KeyCode::Char('G') => app.select_last(),
            KeyCode::Enter | KeyCode::Char('l') => app.open_detail(),
            KeyCode::Char('r') => app.request_refresh(),
            _ => {}
        },
        Screen::Detail(_) => match key.code {
            KeyCode::Enter | KeyCode::Char('o') => app.request_open(),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Char('q') => {
                app.close_detail()
            }
            _ => {}
        },
    }
}

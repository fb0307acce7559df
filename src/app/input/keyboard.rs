//! Keyboard input handling.
//!
//! Scrolling keys act on the viewport only; the selection is never moved
//! by them.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::message::Command;
use crate::app::state::{AppState, StatusMessage};

/// Handle a keyboard event.
pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> Vec<Command> {
    if key.kind == KeyEventKind::Release {
        return Vec::new();
    }

    match key.code {
        // === Quit ===
        KeyCode::Char('q') => quit(state),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => quit(state),

        // === Selection ===
        KeyCode::Esc => {
            state.view.clear_selection();
            Vec::new()
        }
        KeyCode::Char('y') | KeyCode::Char('c') => copy_selection(state),

        // === Scrolling ===
        KeyCode::Char('j') | KeyCode::Down => {
            state.view.viewport_mut().scroll_down(1);
            Vec::new()
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.view.viewport_mut().scroll_up(1);
            Vec::new()
        }
        KeyCode::PageDown | KeyCode::Char(' ') => {
            state.view.viewport_mut().page_down();
            Vec::new()
        }
        KeyCode::PageUp => {
            state.view.viewport_mut().page_up();
            Vec::new()
        }
        KeyCode::Char('g') | KeyCode::Home => {
            state.view.viewport_mut().goto_top();
            Vec::new()
        }
        KeyCode::Char('G') | KeyCode::End => {
            state.view.viewport_mut().goto_bottom();
            Vec::new()
        }

        // === Reload ===
        KeyCode::Char('r') => reload(state),

        _ => Vec::new(),
    }
}

fn quit(state: &mut AppState) -> Vec<Command> {
    state.should_quit = true;
    vec![Command::Quit]
}

fn copy_selection(state: &mut AppState) -> Vec<Command> {
    match state.view.take_selection() {
        Some(text) => vec![Command::Copy(text)],
        None => {
            state.set_status(StatusMessage::info("Nothing selected"));
            Vec::new()
        }
    }
}

fn reload(state: &mut AppState) -> Vec<Command> {
    match state.source.clone() {
        Some(source) => {
            state.loading = true;
            vec![Command::Load(source)]
        }
        None => Vec::new(),
    }
}

//! Mouse input handling.
//!
//! The left button drives the selection; the wheel scrolls the viewport
//! without touching it.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::message::Command;
use crate::app::state::AppState;

/// Handle a mouse event.
pub fn handle_mouse_event(mouse: MouseEvent, state: &mut AppState) -> Vec<Command> {
    let (x, y) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => state.view.press(x, y),
        MouseEventKind::Drag(MouseButton::Left) => state.view.drag(x, y),
        MouseEventKind::Up(MouseButton::Left) => state.view.release(),
        MouseEventKind::ScrollUp => state.view.viewport_mut().scroll_up(state.wheel_step),
        MouseEventKind::ScrollDown => state.view.viewport_mut().scroll_down(state.wheel_step),
        _ => {}
    }
    Vec::new()
}

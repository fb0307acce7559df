//! Input handling for the dashboard.
//!
//! Keyboard and mouse events are translated into state changes and the
//! commands the runtime should run.

mod keyboard;
mod mouse;

pub use keyboard::handle_key_event;
pub use mouse::handle_mouse_event;

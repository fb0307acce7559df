//! Dashboard reducer.
//!
//! All state mutations happen here. The runtime feeds every event through
//! [`update`] and executes the commands it returns; the reducer itself does
//! no I/O.

use super::input::{handle_key_event, handle_mouse_event};
use super::message::{Command, Msg};
use super::state::{AppState, StatusMessage};

/// Apply one message to the state.
pub fn update(state: &mut AppState, msg: Msg) -> Vec<Command> {
    match msg {
        Msg::Key(key) => handle_key_event(key, state),
        Msg::Mouse(mouse) => handle_mouse_event(mouse, state),
        Msg::Resize(cols, rows) => {
            state.view.resize(cols, rows);
            Vec::new()
        }
        Msg::Tick(now) => {
            if let Some(status) = state.status.as_mut() {
                if status.shown_at.is_none() {
                    status.shown_at = Some(now);
                } else if status.is_expired(now) {
                    state.status = None;
                }
            }
            Vec::new()
        }
        Msg::ContentLoaded { title, lines } => {
            tracing::debug!(%title, lines = lines.len(), "content loaded");
            state.title = title;
            state.loading = false;
            state.view.replace_content(lines);
            Vec::new()
        }
        Msg::CopyFinished(Ok(message)) => {
            state.set_status(StatusMessage::info(message));
            Vec::new()
        }
        Msg::CopyFinished(Err(err)) => {
            tracing::warn!(%err, "copy failed");
            state.set_status(StatusMessage::error(format!("Copy failed: {}", err)));
            Vec::new()
        }
        Msg::JobFailed(err) => {
            tracing::warn!(%err, "background job failed");
            state.loading = false;
            state.set_status(StatusMessage::error(err));
            Vec::new()
        }
    }
}

//! Dashboard state.

use std::time::{Duration, Instant};

use crate::config::Config;
use crate::terminal::Color;
use crate::view::{ContentView, PanelLayout};

use super::message::Command;
use super::source::Source;

/// How long a status message stays visible.
pub const STATUS_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// A transient message shown in the sidebar.
///
/// The display clock starts at the first tick after the message is set, so
/// the reducer never reads the system time itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    pub shown_at: Option<Instant>,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Info,
            shown_at: None,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Error,
            shown_at: None,
        }
    }

    /// Whether the message has been visible for at least [`STATUS_TTL`] at `now`.
    pub fn is_expired(&self, now: Instant) -> bool {
        self.shown_at
            .is_some_and(|shown| now.saturating_duration_since(shown) >= STATUS_TTL)
    }
}

/// Everything the dashboard draws.
#[derive(Debug, Clone)]
pub struct AppState {
    pub view: ContentView,
    pub title: String,
    pub source: Option<Source>,
    pub status: Option<StatusMessage>,
    pub loading: bool,
    pub should_quit: bool,
    pub wheel_step: usize,
    pub selection_bg: Color,
}

impl AppState {
    /// Empty dashboard for a terminal of `cols` x `rows`.
    pub fn new(config: &Config, cols: u16, rows: u16) -> Self {
        let mut view = ContentView::new(PanelLayout::new(cols, rows, config.view.sidebar_width));
        view.viewport_mut().set_follow(config.view.follow);
        Self {
            view,
            title: String::new(),
            source: None,
            status: None,
            loading: false,
            should_quit: false,
            wheel_step: config.view.wheel_step.max(1),
            selection_bg: config.selection.background_color(),
        }
    }

    pub fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }
}

/// Build the initial state and the commands that populate it.
pub fn init(config: &Config, source: Option<Source>, cols: u16, rows: u16) -> (AppState, Vec<Command>) {
    let mut state = AppState::new(config, cols, rows);
    let mut commands = Vec::new();
    if let Some(source) = source {
        state.title = source.title();
        state.loading = true;
        state.source = Some(source.clone());
        commands.push(Command::Load(source));
    }
    (state, commands)
}

//! Messages consumed by the reducer and commands it returns.

use crossterm::event::{KeyEvent, MouseEvent};
use std::time::Instant;

use crate::terminal::StyledLine;

use super::source::Source;

/// Everything that can change dashboard state.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// New terminal size in columns and rows
    Resize(u16, u16),
    /// Periodic timer, carrying the time it fired
    Tick(Instant),
    /// A load job finished
    ContentLoaded {
        title: String,
        lines: Vec<StyledLine>,
    },
    /// A copy job finished with a status message or an error
    CopyFinished(Result<String, String>),
    /// A background job failed
    JobFailed(String),
}

/// Work the runtime performs on behalf of the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    /// Put text on the system clipboard
    Copy(String),
    /// Read and render a source into the content panel
    Load(Source),
}

//! The dashboard application.
//!
//! Elm-style: [`AppState`] is changed only by [`update`], which returns
//! [`Command`]s for the runtime to execute. Commands that touch the clipboard
//! or the filesystem run on a worker thread and report back as [`Msg`]s.

mod input;
mod message;
pub mod runtime;
mod source;
mod state;
mod ui;
mod update;
pub mod worker;

pub use message::{Command, Msg};
pub use runtime::run;
pub use source::{load_source, read_text, LoadSettings, Source};
pub use state::{init, AppState, StatusKind, StatusMessage, STATUS_TTL};
pub use ui::draw;
pub use update::update;

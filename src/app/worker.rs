//! Background worker for dashboard commands
//!
//! Runs clipboard and load commands on a dedicated thread and sends the
//! outcome back to the event loop as a [`Msg`].

use std::sync::mpsc::{Receiver, Sender};

use super::message::{Command, Msg};
use super::source::{load_source, LoadSettings, Source};
use crate::clipboard::Copy;

/// Background worker loop that processes commands.
///
/// Receives commands from `request_rx`, runs each through `execute`, and
/// sends any resulting message back via `result_tx`. Exits when the request
/// channel is closed (all senders dropped).
pub fn worker_loop(
    request_rx: Receiver<Command>,
    result_tx: Sender<Msg>,
    execute: impl Fn(Command) -> Option<Msg>,
) {
    while let Ok(command) = request_rx.recv() {
        if let Some(msg) = execute(command) {
            // Ignore send errors (main thread may have exited)
            let _ = result_tx.send(msg);
        }
    }
}

/// Turn a load command into its result message.
pub fn run_load(source: &Source, settings: &LoadSettings) -> Msg {
    match load_source(source, settings) {
        Ok(lines) => Msg::ContentLoaded {
            title: source.title(),
            lines,
        },
        Err(err) => Msg::JobFailed(format!("{:#}", err)),
    }
}

/// Run a command against the real clipboard and filesystem.
#[cfg(not(tarpaulin_include))]
pub fn execute(command: Command, settings: &LoadSettings) -> Option<Msg> {
    tracing::debug!(?command, "running command");
    match command {
        Command::Quit => None,
        Command::Copy(text) => Some(Msg::CopyFinished(
            Copy::new()
                .text(&text)
                .map(|result| result.message())
                .map_err(|e| e.to_string()),
        )),
        Command::Load(source) => Some(run_load(&source, settings)),
    }
}

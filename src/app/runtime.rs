//! Dashboard event loop.
//!
//! One thread owns the state: it reads terminal events, feeds them and the
//! worker's results through [`update`], and draws. Commands other than
//! `Quit` go to the worker thread; their results come back as messages.

use std::io::{self, Stdout};
use std::panic;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::message::{Command, Msg};
use super::source::{LoadSettings, Source};
use super::state::{init, AppState};
use super::ui::draw;
use super::update::update;
use super::worker::{execute, worker_loop};
use crate::config::Config;

/// Interval between ticks when no input arrives.
const TICK_RATE: Duration = Duration::from_millis(250);

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Run the dashboard until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn run(config: &Config, source: Source, settings: LoadSettings) -> Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, config, source, settings);
    restore_terminal()?;
    result
}

#[cfg(not(tarpaulin_include))]
fn event_loop(
    terminal: &mut Tui,
    config: &Config,
    source: Source,
    settings: LoadSettings,
) -> Result<()> {
    let size = terminal.size().context("Failed to read terminal size")?;
    let (mut state, initial) = init(config, Some(source), size.width, size.height);

    let (request_tx, request_rx) = mpsc::channel::<Command>();
    let (result_tx, result_rx) = mpsc::channel::<Msg>();
    let worker = thread::Builder::new()
        .name("adash-worker".into())
        .spawn(move || worker_loop(request_rx, result_tx, |cmd| execute(cmd, &settings)))
        .context("Failed to spawn worker thread")?;

    let mut quit = dispatch(initial, &request_tx);
    let mut last_tick = Instant::now();

    while !quit {
        terminal
            .draw(|frame| draw(frame, &state))
            .context("Failed to draw")?;

        let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
        if event::poll(timeout).context("Failed to poll terminal events")? {
            if let Some(msg) = to_msg(event::read().context("Failed to read terminal event")?) {
                quit |= step(&mut state, msg, &request_tx);
            }
        }

        quit |= drain_results(&mut state, &result_rx, &request_tx);

        if last_tick.elapsed() >= TICK_RATE {
            quit |= step(&mut state, Msg::Tick(Instant::now()), &request_tx);
            last_tick = Instant::now();
        }
    }

    drop(request_tx);
    // A running copy or load finishes before the thread sees the closed channel
    let _ = worker.join();
    Ok(())
}

/// Map a terminal event onto a message.
fn to_msg(event: Event) -> Option<Msg> {
    match event {
        Event::Key(key) => Some(Msg::Key(key)),
        Event::Mouse(mouse) => Some(Msg::Mouse(mouse)),
        Event::Resize(cols, rows) => Some(Msg::Resize(cols, rows)),
        _ => None,
    }
}

fn step(state: &mut AppState, msg: Msg, request_tx: &Sender<Command>) -> bool {
    let commands = update(state, msg);
    dispatch(commands, request_tx) || state.should_quit
}

fn drain_results(
    state: &mut AppState,
    result_rx: &Receiver<Msg>,
    request_tx: &Sender<Command>,
) -> bool {
    let mut quit = false;
    while let Ok(msg) = result_rx.try_recv() {
        quit |= step(state, msg, request_tx);
    }
    quit
}

/// Send commands to the worker. Returns true when one of them is `Quit`.
fn dispatch(commands: Vec<Command>, request_tx: &Sender<Command>) -> bool {
    let mut quit = false;
    for command in commands {
        if command == Command::Quit {
            quit = true;
            continue;
        }
        tracing::debug!(?command, "dispatching to worker");
        if request_tx.send(command).is_err() {
            tracing::warn!("worker thread is gone");
        }
    }
    quit
}

/// Enter raw mode and the alternate screen with mouse capture.
#[cfg(not(tarpaulin_include))]
fn setup_terminal() -> Result<Tui> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

/// Restore the terminal. Safe to call more than once.
#[cfg(not(tarpaulin_include))]
fn restore_terminal() -> Result<()> {
    let _ = execute!(io::stdout(), DisableMouseCapture);
    execute!(io::stdout(), LeaveAlternateScreen).context("Failed to leave alternate screen")?;
    disable_raw_mode().context("Failed to disable raw mode")?;
    Ok(())
}

/// Restore the terminal before the default panic output is printed.
#[cfg(not(tarpaulin_include))]
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

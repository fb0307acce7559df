//! Agent Dashboard - styled terminal buffer engine and dashboard
//!
//! Turns ANSI-escaped agent output into addressable styled cells, renders
//! them back, diffs short snippets into hunks, and drives a scrollable,
//! selectable content panel.

pub mod app;
pub mod clipboard;
pub mod config;
pub mod diff;
pub mod logging;
pub mod render;
pub mod terminal;
pub mod theme;
pub mod view;

pub use config::Config;
pub use diff::{diff_lines, diff_text, extract_hunks, DiffLine, DiffOp, Hunk};
pub use terminal::{parse, parse_lines, Cell, CellStyle, Color, StyledLine};
pub use view::{ContentView, Position, SelectionState, Viewport};

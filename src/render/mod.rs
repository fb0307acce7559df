//! Rendering of styled lines.
//!
//! - `ansi`: styled lines back to minimal escaped text
//! - `line`: styled lines to ratatui `Line`s for panel painting
//! - `scroll`: scroll indicator arrows for the status area

mod ansi;
mod line;
mod scroll;

pub use ansi::{
    bg_param, fg_param, push_style_change, render_line, render_lines, style_params, ANSI_RESET,
};
pub use line::{to_tui_color, to_tui_line, to_tui_style};
pub use scroll::{build_scroll_arrows, calc_scroll_directions};

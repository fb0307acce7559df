//! Styled terminal buffer module.
//!
//! Provides the cell model for colored text and a VTE-based parser that
//! turns ANSI-escaped output (tool results, transcripts, diffs) into it.
//!
//! This module does no I/O; every function here is pure and can be called
//! from any thread.

pub mod handlers;
mod parser;
mod types;

#[cfg(test)]
mod tests;

pub use parser::{parse, parse_lines, parse_lines_with_tab_width, AnsiParser, DEFAULT_TAB_WIDTH};
pub use types::{Cell, CellStyle, Color, StyledLine};

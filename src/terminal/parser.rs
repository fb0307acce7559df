//! ANSI text parser.
//!
//! Drives a `vte` state machine over raw text and turns printable characters
//! into cells carrying the running SGR style. Anything that is not SGR
//! (cursor movement, private modes, OSC titles) is consumed without effect,
//! and an unterminated sequence at end of input simply emits nothing.

use vte::{Params, Perform};

use super::handlers::apply_sgr;
use super::{Cell, CellStyle, StyledLine};

/// Default distance between tab stops.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Incremental parser from ANSI-escaped text to styled lines.
///
/// Input may be fed in arbitrary chunks; an escape sequence split across
/// two `feed` calls is reassembled. The running style carries across
/// line breaks the way it does in a terminal.
pub struct AnsiParser {
    parser: vte::Parser,
    performer: LinePerformer,
}

impl AnsiParser {
    pub fn new() -> Self {
        Self::with_tab_width(DEFAULT_TAB_WIDTH)
    }

    /// Create a parser that expands tabs to multiples of `tab_width` (minimum 1).
    pub fn with_tab_width(tab_width: usize) -> Self {
        Self {
            parser: vte::Parser::new(),
            performer: LinePerformer::new(tab_width.max(1)),
        }
    }

    /// Feed a chunk of text.
    pub fn feed(&mut self, text: &str) {
        self.parser.advance(&mut self.performer, text.as_bytes());
    }

    /// The style that would apply to the next printed character.
    pub fn current_style(&self) -> CellStyle {
        self.performer.style
    }

    /// Finish parsing and return every line, including a trailing partial line.
    ///
    /// Text ending in a newline does not produce an extra empty line.
    pub fn finish(mut self) -> Vec<StyledLine> {
        if !self.performer.current.is_empty() || self.performer.lines.is_empty() {
            let last = std::mem::take(&mut self.performer.current);
            self.performer.lines.push(last);
        }
        self.performer.lines
    }
}

impl Default for AnsiParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a single line of ANSI text.
///
/// Line feeds are treated like any other control character and dropped.
pub fn parse(text: &str) -> StyledLine {
    let mut performer = LinePerformer::new(DEFAULT_TAB_WIDTH);
    performer.split_lines = false;
    let mut parser = vte::Parser::new();
    parser.advance(&mut performer, text.as_bytes());
    performer.current
}

/// Parse multi-line ANSI text, splitting on `\n`.
pub fn parse_lines(text: &str) -> Vec<StyledLine> {
    parse_lines_with_tab_width(text, DEFAULT_TAB_WIDTH)
}

/// Parse multi-line ANSI text with an explicit tab width.
pub fn parse_lines_with_tab_width(text: &str, tab_width: usize) -> Vec<StyledLine> {
    let mut parser = AnsiParser::with_tab_width(tab_width);
    parser.feed(text);
    parser.finish()
}

struct LinePerformer {
    style: CellStyle,
    current: StyledLine,
    lines: Vec<StyledLine>,
    tab_width: usize,
    split_lines: bool,
}

impl LinePerformer {
    fn new(tab_width: usize) -> Self {
        Self {
            style: CellStyle::default(),
            current: StyledLine::new(),
            lines: Vec::new(),
            tab_width,
            split_lines: true,
        }
    }

    fn expand_tab(&mut self) {
        let pad = self.tab_width - (self.current.len() % self.tab_width);
        for _ in 0..pad {
            self.current.push(Cell::new(' ', self.style));
        }
    }
}

impl Perform for LinePerformer {
    fn print(&mut self, c: char) {
        self.current.push(Cell::new(c, self.style));
    }

    fn execute(&mut self, byte: u8) {
        match byte {
            b'\n' if self.split_lines => {
                let line = std::mem::take(&mut self.current);
                self.lines.push(line);
            }
            b'\t' => self.expand_tab(),
            // CR, BEL, BS and the rest never become cells
            _ => {}
        }
    }

    fn csi_dispatch(&mut self, params: &Params, intermediates: &[u8], ignore: bool, action: char) {
        if action != 'm' || !intermediates.is_empty() {
            tracing::trace!(%action, ?intermediates, "skipping non-SGR CSI sequence");
            return;
        }
        if ignore {
            // vte keeps the first 32 parameters and drops the rest
            tracing::trace!(kept = params.len(), "SGR parameter list truncated");
        }
        apply_sgr(&mut self.style, params);
    }
}

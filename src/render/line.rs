//! Conversion from styled lines to ratatui text.
//!
//! Cells with equal styles are coalesced into a single span so a panel
//! paints one span per style run instead of one per character.

use ratatui::style::{Color as TuiColor, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::terminal::{CellStyle, Color, StyledLine};

/// Map a cell color onto the ratatui palette.
pub fn to_tui_color(color: Color) -> TuiColor {
    match color {
        Color::Default => TuiColor::Reset,
        Color::Basic(0) => TuiColor::Black,
        Color::Basic(1) => TuiColor::Red,
        Color::Basic(2) => TuiColor::Green,
        Color::Basic(3) => TuiColor::Yellow,
        Color::Basic(4) => TuiColor::Blue,
        Color::Basic(5) => TuiColor::Magenta,
        Color::Basic(6) => TuiColor::Cyan,
        Color::Basic(7) => TuiColor::Gray,
        Color::Basic(8) => TuiColor::DarkGray,
        Color::Basic(9) => TuiColor::LightRed,
        Color::Basic(10) => TuiColor::LightGreen,
        Color::Basic(11) => TuiColor::LightYellow,
        Color::Basic(12) => TuiColor::LightBlue,
        Color::Basic(13) => TuiColor::LightMagenta,
        Color::Basic(14) => TuiColor::LightCyan,
        Color::Basic(15) => TuiColor::White,
        Color::Basic(n) | Color::Indexed(n) => TuiColor::Indexed(n),
        Color::Rgb(r, g, b) => TuiColor::Rgb(r, g, b),
    }
}

/// Map a cell style onto a ratatui style.
pub fn to_tui_style(style: &CellStyle) -> Style {
    let mut out = Style::default();
    if !style.fg.is_default() {
        out = out.fg(to_tui_color(style.fg));
    }
    if !style.bg.is_default() {
        out = out.bg(to_tui_color(style.bg));
    }
    if style.bold {
        out = out.add_modifier(Modifier::BOLD);
    }
    if style.italic {
        out = out.add_modifier(Modifier::ITALIC);
    }
    out
}

/// Convert a styled line into a ratatui `Line`.
pub fn to_tui_line(line: &StyledLine) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut run = String::new();
    let mut run_style: Option<CellStyle> = None;

    for cell in line {
        match run_style {
            Some(style) if style == cell.style => {}
            Some(style) => {
                spans.push(Span::styled(std::mem::take(&mut run), to_tui_style(&style)));
                run_style = Some(cell.style);
            }
            None => run_style = Some(cell.style),
        }
        run.push(cell.char);
    }

    if let Some(style) = run_style {
        spans.push(Span::styled(run, to_tui_style(&style)));
    }
    Line::from(spans)
}

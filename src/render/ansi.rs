//! ANSI escape code rendering.
//!
//! Converts styled lines back into escaped text. Output is minimal: a
//! sequence is only emitted where the style changes, and a line never
//! leaves a style active after its last character.

use crate::terminal::{CellStyle, Color, StyledLine};

/// ANSI reset sequence
pub const ANSI_RESET: &str = "\x1b[0m";

/// SGR parameter for a foreground color, `None` for the default color.
///
/// # Arguments
/// * `color` - The color to convert
///
/// # Returns
/// The parameter string without the `ESC[` prefix or `m` terminator
pub fn fg_param(color: &Color) -> Option<String> {
    color_param(color, 30, 90, 38)
}

/// SGR parameter for a background color, `None` for the default color.
pub fn bg_param(color: &Color) -> Option<String> {
    color_param(color, 40, 100, 48)
}

fn color_param(color: &Color, base: u16, bright_base: u16, extended: u16) -> Option<String> {
    match *color {
        Color::Default => None,
        Color::Basic(n) if n < 8 => Some((base + n as u16).to_string()),
        Color::Basic(n) if n < 16 => Some((bright_base + (n - 8) as u16).to_string()),
        Color::Basic(n) | Color::Indexed(n) => Some(format!("{};5;{}", extended, n)),
        Color::Rgb(r, g, b) => Some(format!("{};2;{};{};{}", extended, r, g, b)),
    }
}

/// All SGR parameters for a style, joined by `;`.
///
/// Order is bold, italic, foreground, background. Empty for the default style.
pub fn style_params(style: &CellStyle) -> String {
    let mut params: Vec<String> = Vec::with_capacity(4);
    if style.bold {
        params.push("1".to_string());
    }
    if style.italic {
        params.push("3".to_string());
    }
    if let Some(fg) = fg_param(&style.fg) {
        params.push(fg);
    }
    if let Some(bg) = bg_param(&style.bg) {
        params.push(bg);
    }
    params.join(";")
}

/// Append the escape sequence(s) moving from style `from` to style `to`.
///
/// A move to the default style is a bare reset. Any other move resets
/// first when the previous style was non-default, so attributes never leak.
pub fn push_style_change(from: &CellStyle, to: &CellStyle, buf: &mut String) {
    if to.is_default() {
        buf.push_str(ANSI_RESET);
        return;
    }
    if !from.is_default() {
        buf.push_str(ANSI_RESET);
    }
    buf.push_str("\x1b[");
    buf.push_str(&style_params(to));
    buf.push('m');
}

/// Render a styled line to escaped text.
pub fn render_line(line: &StyledLine) -> String {
    let mut output = String::with_capacity(line.len() * 2);
    let mut current = CellStyle::default();

    for cell in line {
        if cell.style != current {
            push_style_change(&current, &cell.style, &mut output);
            current = cell.style;
        }
        output.push(cell.char);
    }

    if !current.is_default() {
        output.push_str(ANSI_RESET);
    }
    output
}

/// Render several lines joined with `\n`.
pub fn render_lines(lines: &[StyledLine]) -> String {
    lines
        .iter()
        .map(render_line)
        .collect::<Vec<_>>()
        .join("\n")
}

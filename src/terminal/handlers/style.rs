//! SGR (Select Graphic Rendition) handler.
//!
//! Handles CSI m sequence for text styling:
//! - Reset (0)
//! - Bold, italic on (1, 3) and off (22, 23)
//! - Standard foreground/background colors (30-37, 40-47)
//! - Extended colors - 256-color mode (38;5;n, 48;5;n)
//! - Extended colors - RGB mode (38;2;r;g;b, 48;2;r;g;b)
//! - Default foreground/background (39, 49)
//! - Bright foreground/background colors (90-97, 100-107)
//!
//! Unknown codes are ignored.

use vte::Params;

use crate::terminal::{CellStyle, Color};

/// Apply an SGR parameter list to `style`.
///
/// Accepts both the semicolon form (`38;5;196`) and the colon sub-parameter
/// form (`38:5:196`, `38:2::255:0:0`). An empty parameter list resets.
pub fn apply_sgr(style: &mut CellStyle, params: &Params) {
    let groups: Vec<&[u16]> = params.iter().collect();
    if groups.is_empty() {
        *style = CellStyle::default();
        return;
    }

    let mut i = 0;
    while i < groups.len() {
        let group = groups[i];
        let code = group.first().copied().unwrap_or(0);

        if (code == 38 || code == 48) && group.len() > 1 {
            // Colon form carries the whole color in one group
            if let Some(color) = extended_color(&group[1..]) {
                set_extended(style, code, color);
            }
            i += 1;
            continue;
        }

        if code == 38 || code == 48 {
            let rest: Vec<u16> = groups[i + 1..]
                .iter()
                .map(|g| g.first().copied().unwrap_or(0))
                .collect();
            let (color, consumed) = semicolon_color(&rest);
            if let Some(color) = color {
                set_extended(style, code, color);
            }
            i += 1 + consumed;
            continue;
        }

        apply_simple(style, code);
        i += 1;
    }
}

fn set_extended(style: &mut CellStyle, code: u16, color: Color) {
    if code == 38 {
        style.fg = color;
    } else {
        style.bg = color;
    }
}

/// Parse the parameters following a semicolon-form 38/48.
///
/// Returns the color (if well-formed) and how many parameters were consumed.
fn semicolon_color(rest: &[u16]) -> (Option<Color>, usize) {
    match rest.first() {
        Some(5) => match rest.get(1) {
            Some(&n) => (Some(Color::Indexed(clamp_u8(n))), 2),
            None => (None, rest.len()),
        },
        Some(2) => {
            if rest.len() >= 4 {
                (
                    Some(Color::Rgb(
                        clamp_u8(rest[1]),
                        clamp_u8(rest[2]),
                        clamp_u8(rest[3]),
                    )),
                    4,
                )
            } else {
                (None, rest.len())
            }
        }
        Some(_) => (None, 1),
        None => (None, 0),
    }
}

/// Parse the sub-parameters of a colon-form 38/48 (after the 38/48 itself).
fn extended_color(sub: &[u16]) -> Option<Color> {
    match sub.first()? {
        5 => sub.get(1).map(|&n| Color::Indexed(clamp_u8(n))),
        2 => {
            // 38:2:R:G:B or 38:2:<colorspace>:R:G:B
            let rgb = if sub.len() >= 5 { &sub[2..5] } else { sub.get(1..4)? };
            Some(Color::Rgb(
                clamp_u8(rgb[0]),
                clamp_u8(rgb[1]),
                clamp_u8(rgb[2]),
            ))
        }
        _ => None,
    }
}

fn apply_simple(style: &mut CellStyle, code: u16) {
    match code {
        0 => *style = CellStyle::default(),
        1 => style.bold = true,
        3 => style.italic = true,
        22 => style.bold = false,
        23 => style.italic = false,
        30..=37 => style.fg = Color::Basic((code - 30) as u8),
        39 => style.fg = Color::Default,
        40..=47 => style.bg = Color::Basic((code - 40) as u8),
        49 => style.bg = Color::Default,
        90..=97 => style.fg = Color::Basic((code - 90) as u8 + 8),
        100..=107 => style.bg = Color::Basic((code - 100) as u8 + 8),
        _ => {
            tracing::trace!(code, "ignoring unsupported SGR code");
        }
    }
}

fn clamp_u8(n: u16) -> u8 {
    n.min(u8::MAX as u16) as u8
}

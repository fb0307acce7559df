//! Hunk rendering.
//!
//! Lays hunks out as a header line followed by one line per diff entry:
//! an old/new line-number gutter, a sign column and the content.

use crate::terminal::{CellStyle, Color, StyledLine};

use super::{DiffOp, Hunk};

/// Tab stops inside diff content.
const CONTENT_TAB: &str = "    ";

/// Styles used for the parts of a rendered diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffPalette {
    pub header: CellStyle,
    pub gutter: CellStyle,
    pub equal: CellStyle,
    pub delete: CellStyle,
    pub insert: CellStyle,
}

impl Default for DiffPalette {
    fn default() -> Self {
        Self {
            header: CellStyle {
                fg: Color::Basic(6),
                ..Default::default()
            },
            gutter: CellStyle {
                fg: Color::Basic(8),
                ..Default::default()
            },
            equal: CellStyle::default(),
            delete: CellStyle {
                fg: Color::Basic(1),
                ..Default::default()
            },
            insert: CellStyle {
                fg: Color::Basic(2),
                ..Default::default()
            },
        }
    }
}

impl DiffPalette {
    fn for_op(&self, op: DiffOp) -> CellStyle {
        match op {
            DiffOp::Equal => self.equal,
            DiffOp::Delete => self.delete,
            DiffOp::Insert => self.insert,
        }
    }
}

/// Count digits in a number (for gutter width calculation).
#[inline]
fn count_digits(n: usize) -> usize {
    if n == 0 {
        1
    } else {
        (n as f64).log10().floor() as usize + 1
    }
}

fn gutter_width(hunks: &[Hunk]) -> usize {
    hunks
        .iter()
        .flat_map(|h| h.lines.iter())
        .flat_map(|l| [l.old_line, l.new_line])
        .flatten()
        .max()
        .map(count_digits)
        .unwrap_or(1)
}

fn number_column(n: Option<usize>, width: usize) -> String {
    match n {
        Some(n) => format!("{:>width$}", n, width = width),
        None => " ".repeat(width),
    }
}

/// Render hunks as styled lines.
pub fn render_hunks(hunks: &[Hunk], palette: &DiffPalette) -> Vec<StyledLine> {
    let width = gutter_width(hunks);
    let mut out = Vec::new();

    for hunk in hunks {
        out.push(StyledLine::styled(&hunk.header(), palette.header));
        for line in &hunk.lines {
            let gutter = format!(
                "{} {} ",
                number_column(line.old_line, width),
                number_column(line.new_line, width)
            );
            let body = format!("{} {}", line.op.sign(), line.content.replace('\t', CONTENT_TAB));

            let mut rendered = StyledLine::styled(&gutter, palette.gutter);
            rendered.extend_from(&StyledLine::styled(&body, palette.for_op(line.op)));
            out.push(rendered);
        }
    }
    out
}

/// Render hunks as plain text lines, with the same layout as [`render_hunks`].
pub fn render_hunks_plain(hunks: &[Hunk]) -> Vec<String> {
    render_hunks(hunks, &DiffPalette::default())
        .iter()
        .map(StyledLine::plain_text)
        .collect()
}

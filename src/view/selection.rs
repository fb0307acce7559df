//! Text selection over a content buffer.
//!
//! Positions are in content space (row into the buffer, cell index into the
//! line), so scrolling never moves a selection. The end of a normalized
//! range is exclusive.

use crate::terminal::{Color, StyledLine};

use super::layout::PanelLayout;
use super::viewport::Viewport;

/// A cell address in the content buffer.
///
/// Orders lexicographically by `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Where a selection is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    Inactive,
    Idle,
    Dragging,
}

/// Anchor/current pair driven by mouse input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    pub active: bool,
    pub dragging: bool,
    pub anchor: Position,
    pub current: Position,
}

impl SelectionState {
    pub fn phase(&self) -> SelectionPhase {
        match (self.active, self.dragging) {
            (false, _) => SelectionPhase::Inactive,
            (true, false) => SelectionPhase::Idle,
            (true, true) => SelectionPhase::Dragging,
        }
    }

    /// Start a drag at `pos`.
    pub fn start(&mut self, pos: Position) {
        *self = Self {
            active: true,
            dragging: true,
            anchor: pos,
            current: pos,
        };
    }

    /// Move the free end of a drag. Ignored unless dragging.
    pub fn extend(&mut self, pos: Position) {
        if self.dragging {
            self.current = pos;
        }
    }

    /// End a drag, keeping the selection.
    pub fn finish(&mut self) {
        self.dragging = false;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether anchor and current coincide.
    pub fn is_empty(&self) -> bool {
        self.anchor == self.current
    }

    /// Active and covering at least one cell boundary.
    pub fn has_selection(&self) -> bool {
        self.active && !self.is_empty()
    }

    /// `(start, end)` ordered by position, `None` when inactive.
    pub fn range(&self) -> Option<(Position, Position)> {
        if !self.active {
            return None;
        }
        Some(if self.anchor <= self.current {
            (self.anchor, self.current)
        } else {
            (self.current, self.anchor)
        })
    }

    /// Selected cell range `[start, end)` on `row`, for a line of `line_len` cells.
    pub fn columns_on_row(&self, row: usize, line_len: usize) -> Option<(usize, usize)> {
        if !self.has_selection() {
            return None;
        }
        let (start, end) = self.range()?;
        if row < start.row || row > end.row {
            return None;
        }
        let from = if row == start.row { start.col } else { 0 };
        let to = if row == end.row { end.col } else { line_len };
        let to = to.min(line_len);
        (from < to).then_some((from, to))
    }
}

/// Map a screen cell to a content position.
///
/// Subtracts the sidebar and border offsets, adds the scroll offset, then
/// clamps the row to the last content row and the column to the line's
/// length. Never fails; an empty buffer maps everything to `(0, 0)`.
pub fn screen_to_content_position(
    layout: &PanelLayout,
    viewport: &Viewport,
    content: &[StyledLine],
    x: u16,
    y: u16,
) -> Position {
    let (col, row) = layout.to_panel_cell(x, y);
    let Some(last_row) = content.len().checked_sub(1) else {
        return Position::default();
    };
    let row = (row + viewport.offset()).min(last_row);
    let col = content[row].cell_at_column(col);
    Position::new(row, col)
}

/// Plain text covered by the selection, rows joined with `\n`.
///
/// Order-independent in anchor/current. Returns an empty string when the
/// selection is inactive or empty. Rows past the end of `content` count as
/// empty lines.
pub fn extract_text(content: &[StyledLine], selection: &SelectionState) -> String {
    if !selection.has_selection() {
        return String::new();
    }
    let Some((start, end)) = selection.range() else {
        return String::new();
    };

    let row_text = |row: usize, from: usize, to: usize| -> String {
        content
            .get(row)
            .map(|line| line.text_range(from, to))
            .unwrap_or_default()
    };

    if start.row == end.row {
        return row_text(start.row, start.col, end.col);
    }

    let mut parts = Vec::with_capacity(end.row - start.row + 1);
    parts.push(row_text(start.row, start.col, usize::MAX));
    for row in start.row + 1..end.row {
        parts.push(row_text(row, 0, usize::MAX));
    }
    parts.push(row_text(end.row, 0, end.col));
    parts.join("\n")
}

/// Paint the selection background onto a window of content rows.
///
/// `lines` holds the rows starting at content row `first_row`. Cells inside
/// the selection get `bg`; foreground, bold and italic are kept. The input
/// is never modified, and an inactive or empty selection yields an equal
/// copy.
pub fn apply_highlight(
    lines: &[StyledLine],
    first_row: usize,
    selection: &SelectionState,
    bg: Color,
) -> Vec<StyledLine> {
    if !selection.has_selection() {
        return lines.to_vec();
    }

    lines
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            let Some((from, to)) = selection.columns_on_row(first_row + idx, line.len()) else {
                return line.clone();
            };
            line.iter()
                .enumerate()
                .map(|(col, cell)| {
                    let mut cell = *cell;
                    if col >= from && col < to {
                        cell.style = cell.style.with_bg(bg);
                    }
                    cell
                })
                .collect()
        })
        .collect()
}

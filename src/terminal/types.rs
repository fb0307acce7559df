//! Terminal data types.
//!
//! Contains the core data structures for representing styled terminal text:
//! - Color: ANSI color codes (16 colors, 256-color palette, RGB)
//! - CellStyle: Text attributes (colors, bold, italic)
//! - Cell: A single character with its style
//! - StyledLine: A line of styled cells for rendering

use unicode_width::UnicodeWidthChar;

/// A terminal color.
///
/// `Basic` covers the 16 standard colors (0-7 normal, 8-15 bright),
/// `Indexed` the 256-color palette and `Rgb` 24-bit true color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Terminal default (no color set)
    #[default]
    Default,
    /// Standard color, 0-15
    Basic(u8),
    /// 256-color palette entry
    Indexed(u8),
    /// 24-bit color
    Rgb(u8, u8, u8),
}

impl Color {
    /// Whether this is the terminal default color.
    pub fn is_default(&self) -> bool {
        matches!(self, Color::Default)
    }
}

/// Visual attributes of a cell.
///
/// Compared structurally: two styles are equal when every field is equal,
/// which is what the renderer uses to decide whether a new escape
/// sequence is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellStyle {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
    pub italic: bool,
}

impl CellStyle {
    /// Whether this style renders as plain, unstyled text.
    pub fn is_default(&self) -> bool {
        *self == CellStyle::default()
    }

    /// Return a copy of this style with the background replaced.
    pub fn with_bg(self, bg: Color) -> Self {
        Self { bg, ..self }
    }
}

/// A single character with its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub char: char,
    pub style: CellStyle,
}

impl Cell {
    pub fn new(char: char, style: CellStyle) -> Self {
        Self { char, style }
    }

    /// An unstyled cell.
    pub fn plain(char: char) -> Self {
        Self {
            char,
            style: CellStyle::default(),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::plain(' ')
    }
}

/// A line of styled cells.
///
/// One cell per visible column; never holds raw control characters.
/// Column indices used by selection and slicing are cell indices.
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct StyledLine {
    cells: Vec<Cell>,
}

impl StyledLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Build an unstyled line from plain text. Control characters are dropped.
    pub fn from_plain(text: &str) -> Self {
        Self::styled(text, CellStyle::default())
    }

    /// Build a line where every character carries `style`. Control characters are dropped.
    pub fn styled(text: &str, style: CellStyle) -> Self {
        text.chars()
            .filter(|c| !c.is_control())
            .map(|c| Cell::new(c, style))
            .collect()
    }

    pub fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Append every cell of `other`.
    pub fn extend_from(&mut self, other: &StyledLine) {
        self.cells.extend_from_slice(&other.cells);
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Number of cells (columns) in the line.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Terminal display width, counting wide characters as two columns.
    pub fn display_width(&self) -> usize {
        self.cells
            .iter()
            .map(|c| c.char.width().unwrap_or(0))
            .sum()
    }

    /// Cell index under display column `col`.
    ///
    /// Both halves of a wide character map to its cell. Columns past the
    /// end of the line map to `len()`.
    pub fn cell_at_column(&self, col: usize) -> usize {
        let mut x = 0;
        for (idx, cell) in self.cells.iter().enumerate() {
            x += cell.char.width().unwrap_or(0);
            if col < x {
                return idx;
            }
        }
        self.cells.len()
    }

    /// The characters of the line with all styling stripped.
    pub fn plain_text(&self) -> String {
        self.cells.iter().map(|c| c.char).collect()
    }

    /// Plain text of the cells in `[start, end)`, clamped to the line.
    pub fn text_range(&self, start: usize, end: usize) -> String {
        let end = end.min(self.cells.len());
        let start = start.min(end);
        self.cells[start..end].iter().map(|c| c.char).collect()
    }

    /// A new line holding the cells in `[start, end)`, clamped to the line.
    pub fn slice(&self, start: usize, end: usize) -> StyledLine {
        let end = end.min(self.cells.len());
        let start = start.min(end);
        Self::from_cells(self.cells[start..end].to_vec())
    }
}

impl FromIterator<Cell> for StyledLine {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl From<&str> for StyledLine {
    fn from(text: &str) -> Self {
        Self::from_plain(text)
    }
}

impl<'a> IntoIterator for &'a StyledLine {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

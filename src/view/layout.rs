//! Screen geometry of the dashboard.
//!
//! The screen is split into a sidebar on the left, a bordered content panel
//! on the right and a footer row at the bottom. Mouse coordinates arrive in
//! screen space; the helpers here translate them into panel-relative cells.

use ratatui::layout::Rect;

/// Rows reserved at the bottom of the screen for the footer.
pub const FOOTER_ROWS: u16 = 1;

/// Width of the content panel border.
pub const BORDER: u16 = 1;

/// Placement of the dashboard regions for a given terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelLayout {
    pub cols: u16,
    pub rows: u16,
    pub sidebar_width: u16,
}

impl PanelLayout {
    pub fn new(cols: u16, rows: u16, sidebar_width: u16) -> Self {
        Self {
            cols,
            rows,
            sidebar_width,
        }
    }

    /// The sidebar region.
    pub fn sidebar(&self) -> Rect {
        Rect::new(
            0,
            0,
            self.sidebar_width.min(self.cols),
            self.rows.saturating_sub(FOOTER_ROWS),
        )
    }

    /// The bordered panel, border included.
    pub fn panel(&self) -> Rect {
        let x = self.sidebar_width.min(self.cols);
        Rect::new(
            x,
            0,
            self.cols - x,
            self.rows.saturating_sub(FOOTER_ROWS),
        )
    }

    /// The footer row.
    pub fn footer(&self) -> Rect {
        Rect::new(
            0,
            self.rows.saturating_sub(FOOTER_ROWS),
            self.cols,
            FOOTER_ROWS.min(self.rows),
        )
    }

    /// The content area inside the panel border.
    pub fn content(&self) -> Rect {
        let panel = self.panel();
        Rect::new(
            panel.x.saturating_add(BORDER),
            panel.y.saturating_add(BORDER),
            panel.width.saturating_sub(2 * BORDER),
            panel.height.saturating_sub(2 * BORDER),
        )
    }

    /// Number of content rows that fit in the panel.
    pub fn visible_lines(&self) -> usize {
        self.content().height as usize
    }

    /// Whether a screen cell lies inside the content area.
    pub fn contains(&self, x: u16, y: u16) -> bool {
        let area = self.content();
        x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
    }

    /// Screen cell relative to the content area's top-left corner.
    ///
    /// Coordinates left of or above the area saturate to zero.
    pub fn to_panel_cell(&self, x: u16, y: u16) -> (usize, usize) {
        let area = self.content();
        (
            x.saturating_sub(area.x) as usize,
            y.saturating_sub(area.y) as usize,
        )
    }

    /// Whether a screen row is at or above the first content row.
    pub fn at_top_edge(&self, y: u16) -> bool {
        y <= self.content().y
    }

    /// Whether a screen row is at or below the last content row.
    pub fn at_bottom_edge(&self, y: u16) -> bool {
        let area = self.content();
        area.height > 0 && y >= area.y + area.height - 1
    }
}

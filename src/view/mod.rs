//! Scrollable, selectable content panel.
//!
//! [`ContentView`] owns a content buffer together with its [`Viewport`],
//! [`SelectionState`] and [`PanelLayout`], and turns mouse coordinates into
//! selection updates. It is mutated only by the event loop that owns it.

mod layout;
mod selection;
mod viewport;

pub use layout::{PanelLayout, BORDER, FOOTER_ROWS};
pub use selection::{
    apply_highlight, extract_text, screen_to_content_position, Position, SelectionPhase,
    SelectionState,
};
pub use viewport::Viewport;

use crate::terminal::{Color, StyledLine};

/// A content buffer shown in the bordered panel.
#[derive(Debug, Clone, Default)]
pub struct ContentView {
    lines: Vec<StyledLine>,
    viewport: Viewport,
    selection: SelectionState,
    layout: PanelLayout,
}

impl ContentView {
    pub fn new(layout: PanelLayout) -> Self {
        Self {
            lines: Vec::new(),
            viewport: Viewport::new(layout.visible_lines(), 0),
            selection: SelectionState::default(),
            layout,
        }
    }

    pub fn lines(&self) -> &[StyledLine] {
        &self.lines
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn layout(&self) -> &PanelLayout {
        &self.layout
    }

    /// Replace the buffer. The viewport follows the bottom if it was there;
    /// the selection is kept.
    pub fn replace_content(&mut self, lines: Vec<StyledLine>) {
        self.viewport.replace_content(lines.len());
        self.lines = lines;
        tracing::debug!(
            lines = self.lines.len(),
            offset = self.viewport.offset(),
            "content replaced"
        );
    }

    /// Apply a new terminal size.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.layout.cols = cols;
        self.layout.rows = rows;
        self.viewport.set_visible_lines(self.layout.visible_lines());
    }

    /// Left button press. Starts a selection inside the content area and
    /// clears it anywhere else.
    pub fn press(&mut self, x: u16, y: u16) {
        if self.layout.contains(x, y) {
            let pos = self.position_at(x, y);
            self.selection.start(pos);
            tracing::debug!(row = pos.row, col = pos.col, "selection started");
        } else {
            self.clear_selection();
        }
    }

    /// Drag motion. Scrolls one line when the pointer is on or beyond the
    /// top or bottom content row, then moves the selection end.
    pub fn drag(&mut self, x: u16, y: u16) {
        if !self.selection.dragging {
            return;
        }
        if self.layout.at_top_edge(y) {
            self.viewport.scroll_up(1);
        } else if self.layout.at_bottom_edge(y) {
            self.viewport.scroll_down(1);
        }
        let pos = self.position_at(x, y);
        self.selection.extend(pos);
    }

    /// Button release. Ends a drag, keeping the selection.
    pub fn release(&mut self) {
        if self.selection.dragging {
            self.selection.finish();
            tracing::debug!(
                anchor = ?self.selection.anchor,
                current = ?self.selection.current,
                "selection finished"
            );
        }
    }

    pub fn clear_selection(&mut self) {
        if self.selection.active {
            tracing::debug!("selection cleared");
        }
        self.selection.clear();
    }

    /// Text under the selection (empty when nothing is selected).
    pub fn selected_text(&self) -> String {
        extract_text(&self.lines, &self.selection)
    }

    /// Take the selected text for copying and reset the selection.
    pub fn take_selection(&mut self) -> Option<String> {
        let text = self.selected_text();
        self.clear_selection();
        (!text.is_empty()).then_some(text)
    }

    /// Rows in the viewport with the selection painted on.
    pub fn visible_rows(&self, selection_bg: Color) -> Vec<StyledLine> {
        let range = self.viewport.visible_range();
        let start = range.start;
        let rows = self.lines.get(range).unwrap_or_default();
        apply_highlight(rows, start, &self.selection, selection_bg)
    }

    fn position_at(&self, x: u16, y: u16) -> Position {
        screen_to_content_position(&self.layout, &self.viewport, &self.lines, x, y)
    }
}

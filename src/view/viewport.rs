//! Vertical viewport over a content buffer.
//!
//! Tracks the first visible row and how many rows fit in the panel. Every
//! operation keeps the offset inside `[0, max(0, total - visible)]`.

use std::ops::Range;

/// Scroll state of a content panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    offset: usize,
    visible: usize,
    total: usize,
    follow: bool,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl Viewport {
    /// Create a viewport at the top of the content, with follow mode on.
    ///
    /// # Arguments
    /// * `visible` - Number of rows that fit in the panel
    /// * `total` - Number of content rows
    pub fn new(visible: usize, total: usize) -> Self {
        Self {
            offset: 0,
            visible,
            total,
            follow: true,
        }
    }

    /// Enable or disable re-anchoring to the bottom when content is replaced.
    pub fn set_follow(&mut self, follow: bool) {
        self.follow = follow;
    }

    /// First visible content row.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn visible_lines(&self) -> usize {
        self.visible
    }

    pub fn total_lines(&self) -> usize {
        self.total
    }

    /// Largest valid offset.
    pub fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.visible)
    }

    /// Whether the last content row is visible.
    pub fn is_at_bottom(&self) -> bool {
        self.offset >= self.max_offset()
    }

    /// Content rows currently on screen.
    pub fn visible_range(&self) -> Range<usize> {
        self.offset..(self.offset + self.visible).min(self.total)
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.offset = self.offset.saturating_add(lines).min(self.max_offset());
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.visible.max(1));
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.visible.max(1));
    }

    pub fn goto_top(&mut self) {
        self.offset = 0;
    }

    pub fn goto_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Change the number of visible rows (panel resize).
    ///
    /// A viewport showing the bottom keeps showing it; otherwise the offset
    /// is only clamped.
    pub fn set_visible_lines(&mut self, visible: usize) {
        let at_bottom = self.is_at_bottom();
        self.visible = visible;
        if at_bottom && self.follow {
            self.goto_bottom();
        } else {
            self.clamp();
        }
    }

    /// Account for replaced content of `total` rows.
    ///
    /// In follow mode a viewport that was at the bottom re-anchors to the
    /// new bottom; otherwise the offset is preserved (clamped if the new
    /// content is shorter).
    pub fn replace_content(&mut self, total: usize) {
        let at_bottom = self.is_at_bottom();
        self.total = total;
        if at_bottom && self.follow {
            self.goto_bottom();
        } else {
            self.clamp();
        }
    }

    /// Scroll position as a percentage of the content, `None` when everything fits.
    pub fn percent(&self) -> Option<u8> {
        if self.total == 0 || self.visible == 0 || self.total <= self.visible {
            return None;
        }
        let visible_bottom = (self.offset + self.visible) as f64;
        let pct = (visible_bottom / self.total as f64 * 100.0).round();
        Some(pct.clamp(0.0, 100.0) as u8)
    }

    fn clamp(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }
}

//! Scroll indicators for the content panel.
//!
//! Arrows tell the user which directions still have content when the
//! buffer is taller than the panel.

/// Calculate which vertical scroll directions are available.
///
/// # Arguments
/// * `offset` - First visible content row
/// * `visible` - Number of visible rows
/// * `total` - Total number of content rows
///
/// # Returns
/// A tuple of (can_up, can_down)
pub fn calc_scroll_directions(offset: usize, visible: usize, total: usize) -> (bool, bool) {
    let can_up = offset > 0;
    let can_down = offset + visible < total;
    (can_up, can_down)
}

/// Build the scroll indicator arrow string.
///
/// # Returns
/// `None` if no scrolling is possible, otherwise `Some(arrow_string)`
pub fn build_scroll_arrows(can_up: bool, can_down: bool) -> Option<String> {
    match (can_up, can_down) {
        (false, false) => None,
        (true, false) => Some("▲".to_string()),
        (false, true) => Some("▼".to_string()),
        (true, true) => Some("▲ ▼".to_string()),
    }
}

//! Hunk extraction.
//!
//! Groups the changed lines of an edit script into hunks, each padded with
//! up to `context` unchanged lines on either side. Neighbouring changes share
//! a hunk unless the unchanged gap between their context windows is larger
//! than the gap threshold.

use serde::Serialize;

use super::{DiffLine, DiffOp};

/// A contiguous run of diff lines containing at least one change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hunk {
    pub lines: Vec<DiffLine>,
}

impl Hunk {
    /// First old-side line number in the hunk (0 for a pure insertion without context).
    pub fn old_start(&self) -> usize {
        self.lines.iter().find_map(|l| l.old_line).unwrap_or(0)
    }

    /// Number of old-side lines (Equal and Delete).
    pub fn old_len(&self) -> usize {
        self.lines.iter().filter(|l| l.op != DiffOp::Insert).count()
    }

    /// First new-side line number in the hunk (0 for a pure deletion without context).
    pub fn new_start(&self) -> usize {
        self.lines.iter().find_map(|l| l.new_line).unwrap_or(0)
    }

    /// Number of new-side lines (Equal and Insert).
    pub fn new_len(&self) -> usize {
        self.lines.iter().filter(|l| l.op != DiffOp::Delete).count()
    }

    /// Number of changed (non-Equal) lines.
    pub fn change_count(&self) -> usize {
        self.lines.iter().filter(|l| l.is_change()).count()
    }

    /// Unified-diff style header, e.g. `@@ -3,7 +3,8 @@`.
    pub fn header(&self) -> String {
        format!(
            "@@ -{},{} +{},{} @@",
            self.old_start(),
            self.old_len(),
            self.new_start(),
            self.new_len()
        )
    }
}

/// Extract context-padded hunks from an edit script.
///
/// # Arguments
/// * `diff` - The edit script, as produced by [`super::diff_lines`]
/// * `context` - Unchanged lines kept on each side of a change
/// * `gap_threshold` - Largest unchanged gap between two context windows
///   that is still merged into one hunk
///
/// # Returns
/// Hunks in script order; empty when the script has no changes
pub fn extract_hunks(diff: &[DiffLine], context: usize, gap_threshold: usize) -> Vec<Hunk> {
    let changes: Vec<usize> = diff
        .iter()
        .enumerate()
        .filter(|(_, line)| line.is_change())
        .map(|(idx, _)| idx)
        .collect();

    let Some((&first, rest)) = changes.split_first() else {
        return Vec::new();
    };

    let last = diff.len() - 1;
    let window = |idx: usize| (idx.saturating_sub(context), (idx + context).min(last));

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    let (mut start, mut end) = window(first);

    for &idx in rest {
        let (next_start, next_end) = window(idx);
        let gap = next_start.saturating_sub(end + 1);
        if gap > gap_threshold {
            debug_assert!(end < next_start);
            ranges.push((start, end));
            start = next_start;
        }
        end = next_end;
    }
    ranges.push((start, end));

    ranges
        .into_iter()
        .map(|(start, end)| Hunk {
            lines: diff[start..=end].to_vec(),
        })
        .collect()
}

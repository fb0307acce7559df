//! Line diff engine.
//!
//! Computes a minimal edit script between two short line sequences with a
//! longest-common-subsequence table, groups the changes into context-padded
//! hunks, and renders those hunks as styled lines.
//!
//! Sized for in-memory snippets (tool call edits, patches shown in a panel):
//! time and space are O(m·n).

mod hunks;
mod render;

use serde::Serialize;

pub use hunks::{extract_hunks, Hunk};
pub use render::{render_hunks, render_hunks_plain, DiffPalette};

/// Kind of a diff line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffOp {
    Equal,
    Delete,
    Insert,
}

impl DiffOp {
    /// The unified-diff sign for this op.
    pub fn sign(&self) -> char {
        match self {
            DiffOp::Equal => ' ',
            DiffOp::Delete => '-',
            DiffOp::Insert => '+',
        }
    }
}

/// One line of an edit script.
///
/// `old_line` is set for Equal and Delete, `new_line` for Equal and Insert.
/// Both are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffLine {
    pub op: DiffOp,
    pub content: String,
    pub old_line: Option<usize>,
    pub new_line: Option<usize>,
}

impl DiffLine {
    pub fn equal(content: impl Into<String>, old_line: usize, new_line: usize) -> Self {
        Self {
            op: DiffOp::Equal,
            content: content.into(),
            old_line: Some(old_line),
            new_line: Some(new_line),
        }
    }

    pub fn delete(content: impl Into<String>, old_line: usize) -> Self {
        Self {
            op: DiffOp::Delete,
            content: content.into(),
            old_line: Some(old_line),
            new_line: None,
        }
    }

    pub fn insert(content: impl Into<String>, new_line: usize) -> Self {
        Self {
            op: DiffOp::Insert,
            content: content.into(),
            old_line: None,
            new_line: Some(new_line),
        }
    }

    pub fn is_change(&self) -> bool {
        self.op != DiffOp::Equal
    }
}

/// Compute the line diff between `old` and `new`.
///
/// Lines are compared by exact string equality. When backtracking through
/// the LCS table and both an insert and a delete keep an optimal script,
/// the insert is taken first (`table[i][j-1] >= table[i-1][j]`). After the
/// script is reversed this places deletions before insertions inside each
/// changed block, and keeps the output identical across runs.
pub fn diff_lines<S: AsRef<str>>(old: &[S], new: &[S]) -> Vec<DiffLine> {
    let m = old.len();
    let n = new.len();

    // table[i][j] = LCS length of old[..i] and new[..j]
    let mut table = vec![vec![0usize; n + 1]; m + 1];
    for i in 1..=m {
        for j in 1..=n {
            table[i][j] = if old[i - 1].as_ref() == new[j - 1].as_ref() {
                table[i - 1][j - 1] + 1
            } else {
                table[i - 1][j].max(table[i][j - 1])
            };
        }
    }

    let mut script = Vec::with_capacity(m + n);
    let (mut i, mut j) = (m, n);
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && old[i - 1].as_ref() == new[j - 1].as_ref() {
            script.push(DiffLine::equal(old[i - 1].as_ref(), i, j));
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table[i][j - 1] >= table[i - 1][j]) {
            script.push(DiffLine::insert(new[j - 1].as_ref(), j));
            j -= 1;
        } else {
            script.push(DiffLine::delete(old[i - 1].as_ref(), i));
            i -= 1;
        }
    }
    script.reverse();

    tracing::trace!(old = m, new = n, lines = script.len(), "computed line diff");
    script
}

/// Split two texts into lines and diff them.
pub fn diff_text(old: &str, new: &str) -> Vec<DiffLine> {
    let old: Vec<&str> = old.lines().collect();
    let new: Vec<&str> = new.lines().collect();
    diff_lines(&old, &new)
}

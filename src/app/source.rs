//! Content sources for the dashboard.
//!
//! A source is either an ANSI text file shown as-is or a pair of files
//! shown as a rendered diff. Loading reads from disk, so it only ever runs
//! on the worker thread.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::diff::{diff_text, extract_hunks, render_hunks, DiffPalette};
use crate::terminal::{parse_lines_with_tab_width, StyledLine};

/// What the content panel shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// ANSI-escaped text file
    File(PathBuf),
    /// Diff between two files
    Diff { old: PathBuf, new: PathBuf },
}

impl Source {
    /// Short label for the panel title and sidebar.
    pub fn title(&self) -> String {
        match self {
            Source::File(path) => file_label(path),
            Source::Diff { old, new } => format!("{} → {}", file_label(old), file_label(new)),
        }
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Settings applied when turning a source into styled lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSettings {
    pub tab_width: usize,
    pub context_size: usize,
    pub gap_threshold: usize,
}

impl LoadSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            tab_width: config.view.tab_width,
            context_size: config.diff.context_size,
            gap_threshold: config.diff.gap_threshold,
        }
    }
}

impl Default for LoadSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Read a text file, naming it in the error.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Read a source and render it as styled lines.
pub fn load_source(source: &Source, settings: &LoadSettings) -> Result<Vec<StyledLine>> {
    match source {
        Source::File(path) => {
            let text = read_text(path)?;
            Ok(parse_lines_with_tab_width(&text, settings.tab_width))
        }
        Source::Diff { old, new } => {
            let old_text = read_text(old)?;
            let new_text = read_text(new)?;
            let script = diff_text(&old_text, &new_text);
            let hunks = extract_hunks(&script, settings.context_size, settings.gap_threshold);
            if hunks.is_empty() {
                return Ok(vec![StyledLine::from_plain("No differences.")]);
            }
            Ok(render_hunks(&hunks, &DiffPalette::default()))
        }
    }
}

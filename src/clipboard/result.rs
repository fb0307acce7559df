//! Copy operation results and method identifiers.

/// The result of a successful clipboard copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyResult {
    /// Tool that accepted the text
    pub tool: CopyMethod,
    /// Characters copied
    pub chars: usize,
    /// Lines copied
    pub lines: usize,
}

impl CopyResult {
    /// Describe a copy of `text` through `tool`.
    pub fn for_text(tool: CopyMethod, text: &str) -> Self {
        Self {
            tool,
            chars: text.chars().count(),
            lines: text.lines().count().max(1),
        }
    }

    /// User-friendly message describing what happened.
    pub fn message(&self) -> String {
        let lines = if self.lines == 1 { "line" } else { "lines" };
        format!(
            "Copied {} {} ({} chars) via {}",
            self.lines,
            lines,
            self.chars,
            self.tool.name()
        )
    }
}

/// Which tool was used for the copy operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    /// macOS pasteboard
    Pbcopy,
    /// Linux X11
    Xclip,
    /// Linux X11 alternative
    Xsel,
    /// Linux Wayland
    WlCopy,
}

impl CopyMethod {
    /// Tool name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pbcopy => "pbcopy",
            Self::Xclip => "xclip",
            Self::Xsel => "xsel",
            Self::WlCopy => "wl-copy",
        }
    }
}

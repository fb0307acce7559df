//! Clipboard tools that read the text from stdin.

use crate::clipboard::result::CopyMethod;
use crate::clipboard::tool::{CopyTool, CopyToolError};
use std::io::{ErrorKind, Write};
use std::process::{Child, Command, ExitStatus, Stdio};

/// A command-line clipboard tool fed through a stdin pipe.
pub struct PipeTool {
    method: CopyMethod,
    program: &'static str,
    args: &'static [&'static str],
    platform_supported: bool,
}

impl PipeTool {
    /// macOS pasteboard.
    pub fn pbcopy() -> Self {
        Self {
            method: CopyMethod::Pbcopy,
            program: "pbcopy",
            args: &[],
            platform_supported: cfg!(target_os = "macos"),
        }
    }

    /// X11 clipboard via xclip.
    pub fn xclip() -> Self {
        Self {
            method: CopyMethod::Xclip,
            program: "xclip",
            args: &["-selection", "clipboard"],
            platform_supported: cfg!(target_os = "linux"),
        }
    }

    /// X11 clipboard via xsel.
    pub fn xsel() -> Self {
        Self {
            method: CopyMethod::Xsel,
            program: "xsel",
            args: &["--clipboard", "--input"],
            platform_supported: cfg!(target_os = "linux"),
        }
    }

    /// Wayland clipboard.
    pub fn wl_copy() -> Self {
        Self {
            method: CopyMethod::WlCopy,
            program: "wl-copy",
            args: &[],
            platform_supported: cfg!(target_os = "linux"),
        }
    }

    /// Check if the program is installed.
    fn tool_exists(&self) -> bool {
        Command::new("which")
            .arg(self.program)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }
}

impl CopyTool for PipeTool {
    fn method(&self) -> CopyMethod {
        self.method
    }

    fn is_available(&self) -> bool {
        self.platform_supported && self.tool_exists()
    }

    #[cfg(not(tarpaulin_include))]
    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        let mut child = Command::new(self.program)
            .args(self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => CopyToolError::NotFound,
                _ => CopyToolError::Failed(e.to_string()),
            })?;

        let status = feed_and_wait(&mut child, text)?;
        if status.success() {
            Ok(())
        } else {
            Err(CopyToolError::Failed(format!("{} exited with {}", self.program, status)))
        }
    }
}

/// Write `text` to the child's stdin, close it and reap the child.
///
/// The child is waited for even when the write fails.
fn feed_and_wait(child: &mut Child, text: &str) -> Result<ExitStatus, CopyToolError> {
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };
    let status = child
        .wait()
        .map_err(|e| CopyToolError::Failed(e.to_string()))?;
    written.map_err(|e| CopyToolError::Failed(e.to_string()))?;
    Ok(status)
}

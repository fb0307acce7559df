//! System clipboard integration.
//!
//! Copies selected text by piping it into a platform clipboard tool
//! (`pbcopy` on macOS; `xclip`, `xsel` or `wl-copy` on Linux).

mod copy;
mod error;
mod result;
mod tool;
pub mod tools;

pub use copy::Copy;
pub use error::ClipboardError;
pub use result::{CopyMethod, CopyResult};
pub use tool::{CopyTool, CopyToolError};

//! Terminal escape sequence handlers.
//!
//! Organized by category:
//! - style: SGR (Select Graphic Rendition) handling
//!
//! Cursor movement, erase and scroll-region sequences have no meaning for a
//! single styled line and are consumed by the parser without effect.

pub mod style;

pub use style::apply_sgr;

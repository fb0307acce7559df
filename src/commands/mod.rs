//! Subcommand handlers for the `adash` binary.

pub mod completions;
pub mod config;
pub mod diff;
pub mod view;

//! Configuration file handling.
//!
//! The config lives at `<config dir>/agent-dash/config.toml` (overridable
//! with `ADASH_CONFIG`). Every field has a default, so a missing file or a
//! partial file both load.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::terminal::{Color, DEFAULT_TAB_WIDTH};

/// Environment variable that points at an alternate config file.
pub const CONFIG_ENV: &str = "ADASH_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub diff: DiffConfig,
    pub view: ViewConfig,
    pub selection: SelectionConfig,
}

/// Hunk extraction settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Unchanged lines kept around each change
    pub context_size: usize,
    /// Largest unchanged gap merged into one hunk
    pub gap_threshold: usize,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            context_size: 3,
            gap_threshold: 3,
        }
    }
}

/// Dashboard layout and scrolling settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub sidebar_width: u16,
    /// Lines scrolled per mouse wheel notch
    pub wheel_step: usize,
    /// Keep the viewport on the last line when content is replaced
    pub follow: bool,
    pub tab_width: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            sidebar_width: 24,
            wheel_step: 3,
            follow: true,
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}

/// Selection highlight settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// 256-color palette index used as the selection background
    pub background: u8,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self { background: 238 }
    }
}

impl SelectionConfig {
    pub fn background_color(&self) -> Color {
        Color::Indexed(self.background)
    }
}

impl Config {
    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("agent-dash").join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it does not exist.
    #[cfg(not(tarpaulin_include))]
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load from a specific path; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize as pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

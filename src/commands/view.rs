//! `adash view` handler.

use anyhow::{bail, Result};
use std::path::Path;

use agent_dash::app::{self, LoadSettings, Source};
use agent_dash::Config;

/// Open the dashboard over an ANSI text file.
#[cfg(not(tarpaulin_include))]
pub fn handle(file: &Path) -> Result<()> {
    if !file.is_file() {
        bail!("File not found: {}", file.display());
    }
    let config = Config::load()?;
    let settings = LoadSettings::from_config(&config);
    app::run(&config, Source::File(file.to_path_buf()), settings)
}

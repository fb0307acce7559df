//! `adash diff` handler.

use anyhow::{bail, Result};

use agent_dash::app::{self, read_text, LoadSettings, Source};
use agent_dash::diff::{diff_text, extract_hunks, render_hunks, render_hunks_plain, DiffPalette};
use agent_dash::render::render_lines;
use agent_dash::theme::{current_theme, no_color};
use agent_dash::Config;

use crate::DiffArgs;

/// Print or view the hunks between two files.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &DiffArgs) -> Result<()> {
    for path in [&args.old, &args.new] {
        if !path.is_file() {
            bail!("File not found: {}", path.display());
        }
    }

    let mut config = Config::load()?;
    if let Some(context) = args.context {
        config.diff.context_size = context;
    }
    if let Some(gap) = args.gap {
        config.diff.gap_threshold = gap;
    }
    let settings = LoadSettings::from_config(&config);

    if args.view {
        let source = Source::Diff {
            old: args.old.clone(),
            new: args.new.clone(),
        };
        return app::run(&config, source, settings);
    }

    let old = read_text(&args.old)?;
    let new = read_text(&args.new)?;
    let hunks = extract_hunks(
        &diff_text(&old, &new),
        settings.context_size,
        settings.gap_threshold,
    );
    tracing::debug!(hunks = hunks.len(), "diff computed");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&hunks)?);
        return Ok(());
    }

    if hunks.is_empty() {
        println!("{}", current_theme().secondary_text("No differences."));
        return Ok(());
    }

    if args.plain || no_color() {
        println!("{}", render_hunks_plain(&hunks).join("\n"));
    } else {
        println!("{}", render_lines(&render_hunks(&hunks, &DiffPalette::default())));
    }
    Ok(())
}

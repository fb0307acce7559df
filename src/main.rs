use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

mod commands;

/// Terminal dashboard for AI coding-agent session output.
#[derive(Parser)]
#[command(name = "adash", version, long_about = None)]
struct Cli {
    /// Append logs to this file (filter with ADASH_LOG)
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the dashboard over an ANSI text file
    View {
        /// File with ANSI-escaped text
        file: PathBuf,
    },

    /// Show the hunks that differ between two files
    Diff(DiffArgs),

    /// Show configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Args)]
pub struct DiffArgs {
    /// Original file
    pub old: PathBuf,

    /// Changed file
    pub new: PathBuf,

    /// Unchanged lines shown around each change
    #[arg(long, value_name = "N")]
    pub context: Option<usize>,

    /// Largest unchanged gap merged into one hunk
    #[arg(long, value_name = "N")]
    pub gap: Option<usize>,

    /// Print hunks as JSON
    #[arg(long, conflicts_with_all = ["plain", "view"])]
    pub json: bool,

    /// Print hunks without colors
    #[arg(long, conflicts_with = "view")]
    pub plain: bool,

    /// Open the diff in the dashboard
    #[arg(long)]
    pub view: bool,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
}

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();
    agent_dash::logging::init(cli.log_file.as_deref())?;

    match cli.command {
        Commands::View { file } => commands::view::handle(&file),
        Commands::Diff(args) => commands::diff::handle(&args),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
        },
        Commands::Completions { shell } => {
            commands::completions::handle(shell, &mut Cli::command());
            Ok(())
        }
    }
}

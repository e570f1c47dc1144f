//! parkour CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use parkour::commands::CreateCommand;
use parkour::observability;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "parkour")]
#[command(version)]
#[command(about = "Scaffold ACF blocks for Timber themes with style. PARKOUR!", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new ACF block with all necessary files
    Create {
        /// Block name (kebab-case). If not provided, you'll be prompted.
        name: Option<String>,

        /// Theme slug. Defaults to the theme directory name.
        #[arg(long, value_name = "SLUG")]
        theme: Option<String>,

        /// Skip interactive prompts and use defaults
        #[arg(long)]
        skip_prompts: bool,

        /// Theme directory (default: current directory)
        #[arg(long, value_name = "DIR")]
        path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    observability::init(cli.verbose)?;

    match cli.command {
        Commands::Create {
            name,
            theme,
            skip_prompts,
            path,
        } => {
            let cmd = CreateCommand::new(name, theme, skip_prompts, path);
            cmd.execute()?;
        }
    }

    Ok(())
}

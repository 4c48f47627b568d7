use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::types::{OutputFormat, PreviewArg};

/// Batch-rename the .txt files in a directory to <prefix>_<index>.txt
#[derive(Parser, Debug)]
#[command(name = "renumber")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Assume yes for all prompts
    #[arg(short = 'y', long = "yes", global = true, env = "RENUMBER_YES")]
    pub yes: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rename every non-conforming .txt file to the smallest free index
    Run {
        /// Directory containing the files to rename
        #[arg(long)]
        folder: PathBuf,

        /// Fixed left-hand part of every normalized filename
        #[arg(long)]
        prefix: Option<String>,

        /// Require the whole filename to match <prefix>_<index>.txt, instead
        /// of treating any name containing that pattern as conforming
        #[arg(long)]
        anchored: bool,

        /// Abort before renaming anything if a target filename already exists
        #[arg(long)]
        preflight: bool,

        /// Show the plan without renaming anything
        #[arg(long)]
        dry_run: bool,

        /// Preview format for the plan
        #[arg(long, value_enum)]
        preview: Option<PreviewArg>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
        output: OutputFormat,

        /// Suppress the preview and per-file progress lines
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print version information
    Version {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
        output: OutputFormat,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::interface::ExportFormat;

/// DietWizard: answer a few questions, get a week of meals and a daily calorie target.
#[derive(Parser, Debug)]
#[command(name = "diet_wizard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Seed for meal suggestions (random when omitted).
    #[arg(short, long, global = true)]
    pub seed: Option<u64>,

    /// Write the finished plan to this file.
    #[arg(short, long, global = true)]
    pub export: Option<PathBuf>,

    /// Format used with --export.
    #[arg(long, value_enum, default_value_t = ExportFormat::Html, global = true)]
    pub format: ExportFormat,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Answer the questions interactively.
    Plan,

    /// Build a plan from a JSON answers file without prompting.
    Generate {
        /// Path to the answers JSON file.
        #[arg(short, long)]
        answers: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan
    }
}

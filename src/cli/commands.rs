//! CLI command definitions using clap.
//!
//! Without a subcommand the full interactive session runs (tags, then tasks,
//! then export). Subcommands:
//! - tags: tag-stage only, nothing written
//! - catalog: load and list the task catalog

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use weekplan::domain::{format_date, parse_date};

/// weekplan - suggest a week plan from tag priorities and a task catalog.
#[derive(Parser, Debug)]
#[command(name = "weekplan")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Usage example:\n  weekplan --cfg task-configuration.json --start-date 27-May-2024 --output 27-May-2024-week-plan.csv")]
pub struct Cli {
    /// Task configuration file (JSON or YAML).
    #[arg(short, long, global = true)]
    pub cfg: Option<PathBuf>,

    /// First day of the week, DD-Mon-YYYY (defaults to today).
    #[arg(short, long, global = true)]
    pub start_date: Option<String>,

    /// Report file (defaults to <start-date>-week-plan.csv).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the configured tasks directory.
    #[arg(short, long, global = true)]
    pub tasks_dir: Option<PathBuf>,

    /// Seed for reproducible weeks.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Clear the console before each redisplay.
    #[arg(long, global = true)]
    pub clr: bool,

    /// Verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Requested start date, or today.
    pub fn start_date(&self) -> weekplan::Result<NaiveDate> {
        match &self.start_date {
            Some(text) => parse_date(text),
            None => Ok(Local::now().date_naive()),
        }
    }

    /// Requested report path, or `<start-date>-week-plan.csv`.
    pub fn output_path(&self, start_date: NaiveDate) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}-week-plan.csv", format_date(start_date))))
    }
}

/// Main subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Shape the tag schedule only.
    Tags,

    /// Load, validate and list the task catalog.
    Catalog,
}

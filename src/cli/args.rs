// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use super::{parsers::JobsArg, value_enum::OutputFormat};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "log_tally",
    version = crate::VERSION,
    about = "Summarise log files: entry count, severity breakdown, top five messages and time span"
)]
pub struct Args {
    /// Log files to analyse
    #[arg(required = true, num_args = 1.., value_hint = ValueHint::FilePath)]
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text", help_heading = "Output")]
    pub format: OutputFormat,

    /// Also print each file's own summary, in the order given
    #[arg(long, help_heading = "Output")]
    pub per_file: bool,

    /// Worker pool size (a count or `auto`); defaults to one worker per file
    #[arg(short, long, value_name = "N|auto", help_heading = "Execution")]
    pub jobs: Option<JobsArg>,

    /// More diagnostics on stderr (repeat for more)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet", help_heading = "Diagnostics")]
    pub verbose: u8,

    /// Only report errors on stderr
    #[arg(short, long, help_heading = "Diagnostics")]
    pub quiet: bool,
}

impl Args {
    /// Log level selected by `-v`/`-q`.
    pub fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Error;
        }
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

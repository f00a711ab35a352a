//! Command-line interface definition.

use clap::Parser;
use std::path::PathBuf;

use crate::report::ReportFormat;

/// Tallies k-mers and their following characters in genome fragment files.
#[derive(Parser, Debug)]
#[command(name = "kmertally")]
#[command(version, author, about, long_about = None)]
pub struct Args {
    /// Path to the input file containing genome fragments
    pub input: PathBuf,

    /// Length of the k-mers to extract
    #[arg(allow_negative_numbers = true)]
    pub k: i64,

    /// Path the report is written to
    pub output: PathBuf,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Suppress informational output
    #[arg(short, long)]
    pub quiet: bool,
}

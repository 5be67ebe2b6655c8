use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "xort")]
#[command(about = "Reorder an XML file to match the element order of a template file")]
pub struct Cli {
    /// Template file whose element order is the target order.
    pub template: PathBuf,
    /// File whose elements will be reordered.
    pub unsorted: PathBuf,
    /// Write the reordered document to standard output instead of a file.
    #[arg(long)]
    pub stdout: bool,
    /// Output path. Defaults to the input path with `_xorted` inserted before the extension.
    #[arg(short, long, conflicts_with = "stdout")]
    pub output: Option<PathBuf>,
    /// Print alignment statistics after reordering.
    #[arg(long)]
    pub summary: bool,
    /// With --summary, print the multi-line report instead of one line.
    #[arg(short, long, requires = "summary")]
    pub verbose: bool,
    /// Statistics format for --summary.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

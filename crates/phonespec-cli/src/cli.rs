//! CLI argument definitions for the phone specification reporter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "phonespec",
    version,
    about = "Phone specification reporter - clean a phone CSV and summarize it",
    long_about = "Load a CSV of mobile phone specifications, normalize its messy fields\n\
                  into typed values and report weight statistics, launch status\n\
                  frequencies and other dataset questions."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Summarize a dataset: statistics, launch status mode and dataset questions.
    Report(ReportArgs),

    /// List the distinct values of one column.
    Unique(UniqueArgs),

    /// Print normalized records.
    Show(ShowArgs),
}

#[derive(Args)]
pub struct SourceArgs {
    /// Path to the phone specification CSV file.
    #[arg(value_name = "CSV")]
    pub path: PathBuf,

    /// Keep rows that normalize to an already loaded record.
    #[arg(long = "no-dedupe")]
    pub no_dedupe: bool,
}

#[derive(Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Number of leading records to print.
    #[arg(long = "preview", value_name = "N", default_value_t = 5)]
    pub preview: usize,

    /// Remove records with this model name (case-insensitive) before reporting.
    #[arg(long = "exclude-model", value_name = "MODEL")]
    pub exclude_model: Vec<String>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Args)]
pub struct UniqueArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Column name: oem, model, status or platform.
    #[arg(value_name = "COLUMN")]
    pub column: String,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Only show records with this model name (case-insensitive).
    #[arg(long = "model", value_name = "MODEL")]
    pub model: Option<String>,

    /// Maximum number of records to print.
    #[arg(long = "limit", value_name = "N")]
    pub limit: Option<usize>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

//! CLI argument definitions for the zookeeper report pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "zookeeper",
    version,
    about = "Zookeeper - Build a grouped zoo population report from arrival files",
    long_about = "Ingest a candidate name roster and free-text arrival descriptions,\n\
                  derive birth dates and per-species unique IDs, assign names\n\
                  round-robin, and write the grouped zoo population report."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Process arrival files and write the population report.
    Report(ReportArgs),

    /// List the season to birth month-day table.
    Seasons,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Free-text arrival descriptions, one animal per line.
    #[arg(value_name = "ARRIVALS_FILE", default_value = "arrivingAnimals.txt")]
    pub arrivals_file: PathBuf,

    /// Candidate name roster, one name per line.
    #[arg(
        long = "names-file",
        value_name = "PATH",
        default_value = "animalNames.txt"
    )]
    pub names_file: PathBuf,

    /// Output path for the population report (overwritten each run).
    #[arg(long = "output", value_name = "PATH", default_value = "zooPopulation.txt")]
    pub output: PathBuf,

    /// Parse and process without writing the report.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

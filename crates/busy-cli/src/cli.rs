//! CLI argument definitions for the resource dashboard.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "busy-dashboard",
    version,
    about = "Resource Management Dashboard - busy periods per resource and project",
    long_about = "Generate synthetic project assignments and inspect how busy each\n\
                  resource is within a date window.\n\n\
                  Renders busy-day tables, pie/bar shares, a Gantt timeline and a\n\
                  date x project heatmap, and can export them as JSON."
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
    /// Generate a synthetic assignment file.
    Generate(GenerateArgs),

    /// Render busy periods for a date window and resource.
    Dashboard(DashboardArgs),

    /// List the resources active in a date window.
    Resources(WindowArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Output CSV path.
    #[arg(long = "output", short = 'o', value_name = "PATH", default_value = "output.csv")]
    pub output: PathBuf,

    /// Seed for reproducible output (random when omitted).
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Number of assignments to generate (at most one per project name).
    #[arg(long = "count", default_value_t = 20)]
    pub count: usize,

    /// Distinct resources assigned to each project.
    #[arg(long = "resources-per-project", default_value_t = 4)]
    pub resources_per_project: usize,

    /// Calendar year start dates are drawn from.
    #[arg(long = "year", default_value_t = 2024)]
    pub year: i32,

    /// Minimum days between start and end.
    #[arg(long = "min-offset", default_value_t = 5)]
    pub min_offset: u32,

    /// Maximum days between start and end.
    #[arg(long = "max-offset", default_value_t = 20)]
    pub max_offset: u32,
}

#[derive(Args)]
pub struct WindowArgs {
    /// Assignment CSV produced by `generate`.
    #[arg(long = "input", short = 'i', value_name = "PATH", default_value = "output.csv")]
    pub input: PathBuf,

    /// Window start (YYYY-MM-DD); defaults to the earliest start date.
    #[arg(long = "start", value_name = "DATE", value_parser = parse_date_arg)]
    pub start: Option<NaiveDate>,

    /// Window end (YYYY-MM-DD); defaults to the latest end date.
    #[arg(long = "end", value_name = "DATE", value_parser = parse_date_arg)]
    pub end: Option<NaiveDate>,
}

#[derive(Args)]
pub struct DashboardArgs {
    #[command(flatten)]
    pub window: WindowArgs,

    /// Resource to inspect; defaults to the first resource in the window.
    #[arg(long = "resource", short = 'r', value_name = "NAME")]
    pub resource: Option<String>,

    /// Also write every table and chart series as JSON.
    #[arg(long = "json", value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Skip the per-day heatmap table.
    #[arg(long = "no-heatmap")]
    pub no_heatmap: bool,
}

fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    busy_ingest::parse_date(value)
        .ok_or_else(|| format!("invalid date '{value}', expected YYYY-MM-DD"))
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

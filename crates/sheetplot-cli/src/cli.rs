//! CLI argument definitions for the spreadsheet normalizer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use sheetplot_chart::{ChartKind, DEFAULT_POINT_LIMIT};

#[derive(Parser)]
#[command(
    name = "sheetplot",
    version,
    about = "Sheetplot - Normalize spreadsheet data for analysis and charting",
    long_about = "Normalize uploaded spreadsheet data into keyed JSON tables.\n\n\
                  Reads xlsx, xls, xlsb and ods workbooks, validates and cleans the\n\
                  first worksheet, and extracts chart-ready series from the result."
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
    /// Normalize the first worksheet of a spreadsheet into a keyed table.
    Normalize(NormalizeArgs),

    /// List the worksheets in a workbook with their dimensions.
    Inspect(InspectArgs),

    /// Extract a chart-ready series from a spreadsheet column pair.
    Chart(ChartArgs),
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Path to the spreadsheet file (xlsx, xls, xlsb, ods).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Trim leading and trailing whitespace from text cells.
    #[arg(long = "trim-strings")]
    pub trim_strings: bool,

    /// Convert numeric-looking text cells into numbers.
    #[arg(long = "convert-numbers")]
    pub convert_numbers: bool,

    /// Replace empty-string cells with null.
    #[arg(long = "remove-empty-strings")]
    pub remove_empty_strings: bool,

    /// Write the normalized table as JSON to this path.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write a full upload record (provenance plus table) as JSON to this path.
    #[arg(long = "record", value_name = "PATH")]
    pub record: Option<PathBuf>,

    /// Number of data rows shown in the summary preview.
    #[arg(long = "preview-rows", value_name = "N", default_value_t = 10)]
    pub preview_rows: usize,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Path to the spreadsheet file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print the sheet inventory as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ChartArgs {
    /// Path to the spreadsheet file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Column supplying the X axis labels.
    #[arg(long = "x", value_name = "COLUMN")]
    pub x_axis: String,

    /// Column supplying the Y axis values.
    #[arg(long = "y", value_name = "COLUMN")]
    pub y_axis: String,

    /// Chart style the series is intended for.
    #[arg(long = "kind", value_enum, default_value = "bar")]
    pub kind: ChartKindArg,

    /// Maximum number of points to extract (0 lifts the cap).
    #[arg(long = "limit", value_name = "N", default_value_t = DEFAULT_POINT_LIMIT)]
    pub limit: usize,

    /// Print the series as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ChartKindArg {
    Bar,
    Line,
    Pie,
}

impl From<ChartKindArg> for ChartKind {
    fn from(kind: ChartKindArg) -> Self {
        match kind {
            ChartKindArg::Bar => ChartKind::Bar,
            ChartKindArg::Line => ChartKind::Line,
            ChartKindArg::Pie => ChartKind::Pie,
        }
    }
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

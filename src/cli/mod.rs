//! Command-line parsing for the sales forecast viewer.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! loading, view, and rendering code. Paths can also come from the environment
//! (or a `.env` file), so a project directory can pin its data files once.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::app::pipeline::DataPaths;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "salesview", version, about = "Retail sales forecast viewer (predicted vs actual)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Launch the interactive TUI (default).
    Tui(ViewArgs),
    /// Print the reconciled view and holiday weeks.
    Show(ViewArgs),
    /// List known stores and the forecast date range.
    Stores(DataArgs),
    /// Write the reconciled view to CSV.
    Export(ExportArgs),
}

/// Source table locations.
#[derive(Debug, Args, Clone)]
pub struct DataArgs {
    /// Forecast CSV (`Store`, `ds`, `Predicted_Weekly_Sales`).
    #[arg(long, env = "SALES_FORECAST_CSV", default_value = "final_forecast_df.csv")]
    pub forecast: PathBuf,

    /// Actuals CSV (`Store`, `Date`, `IsHoliday`, optional `Weekly_Sales`).
    #[arg(long, env = "SALES_ACTUALS_CSV", default_value = "test.csv")]
    pub actuals: PathBuf,
}

impl DataArgs {
    pub fn paths(&self) -> DataPaths {
        DataPaths {
            forecast: self.forecast.clone(),
            actuals: self.actuals.clone(),
        }
    }
}

/// Initial filter selection. Unset values fall back to the first store and the
/// full forecast range.
#[derive(Debug, Args, Clone, Default)]
pub struct FilterArgs {
    /// Store to include (repeatable).
    #[arg(short = 's', long = "store", value_name = "ID")]
    pub stores: Vec<String>,

    /// First week to include (YYYY-MM-DD).
    #[arg(long, value_parser = parse_cli_date)]
    pub start: Option<NaiveDate>,

    /// Last week to include (YYYY-MM-DD).
    #[arg(long, value_parser = parse_cli_date)]
    pub end: Option<NaiveDate>,

    /// Do not highlight holiday weeks.
    #[arg(long)]
    pub no_holidays: bool,
}

/// Options shared by `tui` and `show`.
#[derive(Debug, Args, Clone)]
pub struct ViewArgs {
    #[command(flatten)]
    pub data: DataArgs,

    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Options for `export`.
#[derive(Debug, Args, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Output CSV path.
    #[arg(short = 'o', long, value_name = "CSV")]
    pub out: PathBuf,
}

fn parse_cli_date(s: &str) -> Result<NaiveDate, String> {
    crate::io::ingest::parse_date(s.trim())
}

/// Rewrite argv so `salesview` defaults to `salesview tui`.
///
/// Rules:
/// - `salesview`                     -> `salesview tui`
/// - `salesview --store 1 ...`       -> `salesview tui --store 1 ...`
/// - `salesview --help/--version/-h` -> unchanged (show top-level help/version)
pub fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "tui" | "show" | "stores" | "export");
    if is_subcommand {
        return argv;
    }

    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
    }
    argv
}

//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - sets up logging
//! - loads the forecast and actuals tables
//! - builds the view for the requested selection
//! - prints, exports, or hands off to the TUI

use clap::Parser;

use crate::cli::{Command, DataArgs, ExportArgs, ViewArgs};
use crate::domain::ViewSelection;
use crate::error::AppError;
use crate::logging::LogTarget;

pub mod pipeline;

use pipeline::Datasets;

/// Entry point for the `salesview` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    // `salesview` and `salesview -s 4` behave like `salesview tui ...`.
    let argv = crate::cli::rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    let log_target = match cli.command {
        Command::Tui(_) => LogTarget::File,
        _ => LogTarget::Stderr,
    };
    crate::logging::init(log_target)?;

    match cli.command {
        Command::Tui(args) => handle_tui(args),
        Command::Show(args) => handle_show(args),
        Command::Stores(args) => handle_stores(args),
        Command::Export(args) => handle_export(args),
    }
}

fn handle_tui(args: ViewArgs) -> Result<(), AppError> {
    let (datasets, selection) = load_with_selection(&args)?;
    crate::tui::run(datasets, selection)
}

fn handle_show(args: ViewArgs) -> Result<(), AppError> {
    let (datasets, selection) = load_with_selection(&args)?;
    let view = datasets.view(&selection);

    println!("{}", crate::report::format_view_summary(&datasets, &selection, &view));
    println!("Predicted vs Actual Weekly Sales:");
    println!("{}", crate::report::format_reconciled_table(&view.records));

    if selection.highlight_holidays {
        println!("Holiday Weeks:");
        println!("{}", crate::report::format_holiday_table(&view.holidays));
    }
    Ok(())
}

fn handle_stores(args: DataArgs) -> Result<(), AppError> {
    let datasets = pipeline::load(&args.paths())?;
    println!("{}", crate::report::format_store_list(&datasets));
    Ok(())
}

fn handle_export(args: ExportArgs) -> Result<(), AppError> {
    let (datasets, selection) = load_with_selection(&args.view)?;
    let view = datasets.view(&selection);
    crate::io::export::write_view_csv(&args.out, &view.records)?;
    println!("Wrote {} rows to {}", view.records.len(), args.out.display());
    Ok(())
}

fn load_with_selection(args: &ViewArgs) -> Result<(Datasets, ViewSelection), AppError> {
    let datasets = pipeline::load(&args.data.paths())?;
    let selection = datasets.selection_from(
        &args.filter.stores,
        args.filter.start,
        args.filter.end,
        !args.filter.no_holidays,
    );
    Ok((datasets, selection))
}

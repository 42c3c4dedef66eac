//! CLI logic for the Dayspan overlap checker.
//!
//! This module contains the core CLI logic: loading configuration, reading
//! the input, and checking it.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, Read},
};

use log::{info, warn};

use dayspan::{Checker, DayspanError, Report};

use error_adapter::{Reportable, warning_reportables};

/// Run the Dayspan CLI application
///
/// This function reads the input (a file, or standard input when no path or
/// `-` is given), checks it, and logs any warnings when the configuration
/// asks for them.
///
/// # Errors
///
/// Returns `DayspanError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Input errors (and warnings, if they are denied)
pub fn run(args: &Args) -> Result<Report, DayspanError> {
    let input = args.input.as_deref().filter(|path| *path != "-");
    info!(input_path = input.unwrap_or("<stdin>"); "Checking events");

    let app_config = config::load_config(args.config.as_ref())?;
    let show_warnings = app_config.report().show_warnings();

    let source = match input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let checker = Checker::new(app_config);
    let report = checker.check(&source)?;

    if show_warnings {
        for reportable in warning_reportables(&report) {
            if let Some(rendered) = render(&reportable) {
                warn!("{rendered}");
            }
        }
    }

    info!(
        events = report.events().len(),
        overlaps = report.overlaps().len();
        "Events checked successfully"
    );

    Ok(report)
}

/// Render a reportable with miette's graphical handler.
///
/// Returns `None` if rendering fails.
pub fn render(reportable: &Reportable<'_>) -> Option<String> {
    let reporter = miette::GraphicalReportHandler::new();
    let mut writer = String::new();
    reporter.render_report(&mut writer, reportable).ok()?;
    Some(writer)
}

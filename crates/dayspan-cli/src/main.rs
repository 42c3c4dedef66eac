//! Dayspan CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use dayspan_cli::{Args, error_adapter::to_reportables, render};

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting Dayspan");
    debug!(args:?; "Parsed arguments");

    match dayspan_cli::run(&args) {
        Ok(report) if report.is_clear() => println!("No overlapping events found."),
        Ok(report) => print!("{report}"),
        Err(err) => {
            // Render each diagnostic independently
            for reportable in to_reportables(&err) {
                match render(&reportable) {
                    Some(rendered) => error!("{rendered}"),
                    None => error!("{reportable}"),
                }
            }

            process::exit(1);
        }
    }

    info!("Completed successfully");
}

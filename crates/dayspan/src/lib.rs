//! Dayspan - Validate lists of day-interval events and find overlaps.
//!
//! Input is read by [`dayspan_parser`], which reports errors and warnings
//! instead of stopping at the first problem. When the input has no errors,
//! every pair of events sharing at least one day is reported.

pub mod config;

mod error;
mod overlap;
mod report;

pub use dayspan_core::{Day, Event, EventError};
pub use dayspan_parser::{ParseResult, error as diagnostics};

pub use error::DayspanError;
pub use overlap::{Overlap, find_overlaps, overlapping_pairs};
pub use report::Report;

use log::{debug, info, trace};

use dayspan_parser::error::ParseError;

use config::AppConfig;

/// Checker for Dayspan event lists.
///
/// # Examples
///
/// ```rust
/// use dayspan::{Checker, config::AppConfig};
///
/// let checker = Checker::new(AppConfig::default());
/// let report = checker.check("3\n1 10\n5 15\n20 25").expect("valid input");
///
/// assert_eq!(
///     report.to_string(),
///     "Event 1 (1, 10) overlaps with Event 2 (5, 15)\n"
/// );
/// ```
#[derive(Default)]
pub struct Checker {
    config: AppConfig,
}

impl Checker {
    /// Create a new checker with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this checker uses.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse source text into events and diagnostics without checking
    /// for overlaps.
    pub fn parse(&self, source: &str) -> ParseResult {
        info!("Parsing events");

        let result = dayspan_parser::parse(source);

        debug!(
            events = result.events().len(),
            errors = result.errors().len(),
            warnings = result.warnings().len();
            "Events parsed"
        );
        trace!(events:? = result.events(); "Parsed events");

        result
    }

    /// Parse source text and report overlapping events.
    ///
    /// Overlap detection only runs on input without errors.
    ///
    /// # Errors
    ///
    /// Returns [`DayspanError::Parse`] when the input has errors, or when it
    /// has warnings and `deny_warnings` is configured. The error holds every
    /// diagnostic, errors first.
    pub fn check(&self, source: &str) -> Result<Report, DayspanError> {
        let (events, errors, warnings) = self.parse(source).into_parts();

        let denied = self.config.report().deny_warnings() && !warnings.is_empty();
        if !errors.is_empty() || denied {
            let mut diagnostics = errors;
            diagnostics.extend(warnings);
            return Err(DayspanError::new_parse_error(
                ParseError::new(diagnostics),
                source,
            ));
        }

        info!(events = events.len(); "Checking for overlaps");
        let overlaps = overlapping_pairs(&events);
        info!(overlaps = overlaps.len(); "Overlap check finished");

        Ok(Report::new(events, warnings, overlaps, source.to_string()))
    }
}

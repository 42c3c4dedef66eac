//! The outcome of parsing an event list.

use dayspan_core::Event;

use crate::error::{Diagnostic, ParseError};

/// Events together with the errors and warnings found while parsing them.
///
/// The three lists are independent: an event may have been produced from a
/// line that also raised a warning, and events parsed before an error are
/// kept. Each list preserves input order.
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    events: Vec<Event>,
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
    declared_count: Option<i32>,
}

impl ParseResult {
    pub(crate) fn new(
        events: Vec<Event>,
        errors: Vec<Diagnostic>,
        warnings: Vec<Diagnostic>,
        declared_count: Option<i32>,
    ) -> Self {
        Self {
            events,
            errors,
            warnings,
            declared_count,
        }
    }

    /// Events in input line order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Errors in encounter order.
    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    /// Warnings in encounter order.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// Messages of all errors, in encounter order.
    pub fn error_messages(&self) -> Vec<&str> {
        self.errors.iter().map(Diagnostic::message).collect()
    }

    /// Messages of all warnings, in encounter order.
    pub fn warning_messages(&self) -> Vec<&str> {
        self.warnings.iter().map(Diagnostic::message).collect()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// The event count from the first line, if it was an integer.
    pub fn declared_count(&self) -> Option<i32> {
        self.declared_count
    }

    /// Take the events, discarding diagnostics.
    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    /// Split into `(events, errors, warnings)`.
    pub fn into_parts(self) -> (Vec<Event>, Vec<Diagnostic>, Vec<Diagnostic>) {
        (self.events, self.errors, self.warnings)
    }

    /// Convert into a `Result`, failing if any error was recorded.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] holding every error followed by every
    /// warning when the input had errors.
    pub fn into_result(self) -> Result<Vec<Event>, ParseError> {
        if self.errors.is_empty() {
            return Ok(self.events);
        }
        let mut diagnostics = self.errors;
        diagnostics.extend(self.warnings);
        Err(ParseError::new(diagnostics))
    }
}

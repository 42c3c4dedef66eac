//! Error codes for the Dayspan diagnostic system.
//!
//! Codes are organized by where in the input they arise:
//! - `E0xx` - Header (event count) errors
//! - `E1xx` - Event line errors
//! - `E2xx` - Count reconciliation errors
//! - `W1xx` - Event line warnings
//! - `W2xx` - Count reconciliation warnings

use std::fmt;

/// Codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Header Errors (E0xx)
    // =========================================================================
    /// No input.
    ///
    /// The input was absent or contained no lines at all.
    E001,

    /// Invalid event count.
    ///
    /// The first line is not an integer. Parsing stops here.
    E002,

    /// Negative event count.
    ///
    /// The first line is an integer below zero. Event lines are still parsed.
    E003,

    // =========================================================================
    // Event Line Errors (E1xx)
    // =========================================================================
    /// Empty event line.
    ///
    /// A line after the header is empty or holds only whitespace.
    E100,

    /// Malformed event.
    ///
    /// An event line holds fewer than two values.
    E101,

    /// Invalid day.
    ///
    /// A start or end day is not an integer.
    E102,

    // =========================================================================
    // Reconciliation Errors (E2xx)
    // =========================================================================
    /// Event count mismatch.
    ///
    /// Fewer events were parsed than the header declared.
    E200,

    // =========================================================================
    // Event Line Warnings (W1xx)
    // =========================================================================
    /// Extra data on an event line.
    ///
    /// Values after the first two were ignored.
    W100,

    /// Day out of range.
    ///
    /// A day outside `1..=366` was clamped into range.
    W101,

    /// Reversed days.
    ///
    /// The start day was after the end day and the two were swapped.
    W102,

    // =========================================================================
    // Reconciliation Warnings (W2xx)
    // =========================================================================
    /// Extra events.
    ///
    /// More events were parsed than the header declared. All are kept.
    W200,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Header errors
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            // Event line errors
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            // Reconciliation errors
            ErrorCode::E200 => "E200",
            // Event line warnings
            ErrorCode::W100 => "W100",
            ErrorCode::W101 => "W101",
            ErrorCode::W102 => "W102",
            // Reconciliation warnings
            ErrorCode::W200 => "W200",
        }
    }

    /// Returns a short description of what this code means.
    pub fn description(&self) -> &'static str {
        match self {
            // Header errors
            ErrorCode::E001 => "no input",
            ErrorCode::E002 => "invalid event count",
            ErrorCode::E003 => "negative event count",
            // Event line errors
            ErrorCode::E100 => "empty event line",
            ErrorCode::E101 => "malformed event",
            ErrorCode::E102 => "invalid day",
            // Reconciliation errors
            ErrorCode::E200 => "event count mismatch",
            // Event line warnings
            ErrorCode::W100 => "extra data ignored",
            ErrorCode::W101 => "day out of range",
            ErrorCode::W102 => "reversed days",
            // Reconciliation warnings
            ErrorCode::W200 => "extra events",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

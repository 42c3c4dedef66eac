//! Error types for Dayspan operations.
//!
//! This module provides the main error type [`DayspanError`] which wraps
//! the error conditions that can occur while checking an event list.

use std::io;

use thiserror::Error;

use dayspan_parser::error::ParseError;

/// The main error type for Dayspan operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant carries every diagnostic of the rejected input along
/// with the source text, so callers can render them with source snippets.
#[derive(Debug, Error)]
pub enum DayspanError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DayspanError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}

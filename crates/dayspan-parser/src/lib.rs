//! # Dayspan Parser
//!
//! Validating parser for Dayspan event lists. The input format is one line
//! holding the number of events, followed by one `<start day> <end day>`
//! line per event:
//!
//! ```text
//! 3
//! 1 10
//! 5 15
//! 20 25
//! ```
//!
//! Parsing never fails outright. Instead it returns a [`ParseResult`] with
//! the events that could be read along with ordered error and warning
//! [`Diagnostic`](error::Diagnostic)s.
//!
//! ## Usage
//!
//! ```
//! # use dayspan_parser::parse;
//! let result = parse("2\n1 5\n6 10");
//! assert!(!result.has_errors());
//! assert_eq!(result.events().len(), 2);
//!
//! let result = parse("1\n10 5");
//! assert_eq!(result.events()[0].to_string(), "(5, 10)");
//! assert_eq!(
//!     result.warning_messages(),
//!     ["Line 2: Start day greater than end day; swapping the values"]
//! );
//! ```

pub mod error;

mod lexer;
mod result;
mod span;
mod validate;

pub use result::ParseResult;
pub use span::{Span, Spanned};

use log::debug;

/// Parse source text into events and diagnostics.
///
/// This is the main entry point. It orchestrates:
///
/// 1. **Tokenize** - Split the text into lines of words
/// 2. **Validate** - Read the event count and each event line, normalizing
///    days and collecting diagnostics
///
/// The same input always yields the same result.
pub fn parse(source: &str) -> ParseResult {
    let lines = lexer::tokenize(source);
    debug!(lines = lines.len(); "Tokenized input");
    validate::validate(&lines)
}

/// Parse input that may be absent.
///
/// `None` is reported the same way as text without any lines.
///
/// # Example
///
/// ```
/// # use dayspan_parser::parse_input;
/// let result = parse_input(None);
/// assert_eq!(result.error_messages(), ["No input provided"]);
/// ```
pub fn parse_input(input: Option<&str>) -> ParseResult {
    match input {
        Some(source) => parse(source),
        None => validate::no_input(),
    }
}

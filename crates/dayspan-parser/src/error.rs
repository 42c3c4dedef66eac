//! Error and diagnostic system for the Dayspan parser.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Labeled spans pointing at the offending line or token
//! - Severity levels
//! - Diagnostic collector for accumulating errors and warnings
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error or warning message with optional error code, source
//! locations, and help text. Parsing never stops at the first problem:
//! diagnostics are accumulated and handed back in the
//! [`ParseResult`](crate::ParseResult). Callers that prefer a `Result` can
//! wrap the errors in a [`ParseError`].
//!
//! # Example
//!
//! ```
//! # use dayspan_parser::error::{Diagnostic, ErrorCode};
//! # use dayspan_parser::Span;
//!
//! let diag = Diagnostic::error("Line 2: Malformed event, expected 2 numbers but found 1")
//!     .with_code(ErrorCode::E101)
//!     .with_label(Span::new(2..4), "only one number")
//!     .with_help("write the start day and the end day separated by whitespace");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;

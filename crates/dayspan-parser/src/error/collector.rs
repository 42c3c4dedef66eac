//! Collector for accumulating diagnostics while parsing.
//!
//! The [`DiagnosticCollector`] lets the parser report every problem it
//! finds instead of failing on the first one.

use crate::error::Diagnostic;

/// A collector for accumulating errors and warnings in encounter order.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Emit a diagnostic to this collector.
    ///
    /// The diagnostic is appended to the error or warning list according to
    /// its severity.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.errors.push(diagnostic);
        } else {
            self.warnings.push(diagnostic);
        }
    }

    /// Returns `true` if any error has been emitted.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Finish collection and return the `(errors, warnings)` lists.
    pub fn finish(self) -> (Vec<Diagnostic>, Vec<Diagnostic>) {
        (self.errors, self.warnings)
    }
}

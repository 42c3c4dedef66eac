//! The outcome of a successful check.

use std::fmt;

use dayspan_core::Event;
use dayspan_parser::error::Diagnostic;

use crate::overlap::Overlap;

/// Events of a valid input, the warnings raised while reading them, and
/// the overlapping pairs among them.
#[derive(Debug, Clone)]
pub struct Report {
    events: Vec<Event>,
    warnings: Vec<Diagnostic>,
    overlaps: Vec<Overlap>,
    source: String,
}

impl Report {
    pub(crate) fn new(
        events: Vec<Event>,
        warnings: Vec<Diagnostic>,
        overlaps: Vec<Overlap>,
        source: String,
    ) -> Self {
        Self {
            events,
            warnings,
            overlaps,
            source,
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    pub fn overlaps(&self) -> &[Overlap] {
        &self.overlaps
    }

    /// The checked source text, for rendering warnings with snippets.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns `true` if no two events overlap.
    pub fn is_clear(&self) -> bool {
        self.overlaps.is_empty()
    }
}

/// One overlap description per line.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for overlap in &self.overlaps {
            writeln!(f, "{overlap}")?;
        }
        Ok(())
    }
}

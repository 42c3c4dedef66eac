//! Validation of tokenized input into events.
//!
//! The first line declares how many events follow; every later line is one
//! event. Problems fall into three groups:
//!
//! - **Aborting errors** (no lines, undecodable count) stop validation.
//! - **Recorded errors** (negative count, bad event lines, too few events)
//!   are collected while the remaining lines are still processed.
//! - **Warnings** (extra values, clamped days, swapped days, extra events)
//!   describe data that was corrected; the event is still produced.

use log::{debug, trace};

use dayspan_core::{Day, Event};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    lexer::SourceLine,
    result::ParseResult,
    span::{Span, Spanned},
};

/// Validate tokenized lines into a [`ParseResult`].
pub(crate) fn validate(lines: &[SourceLine<'_>]) -> ParseResult {
    let mut validator = Validator::default();

    let Some((header, event_lines)) = lines.split_first() else {
        validator.no_input();
        return validator.finish(None);
    };

    let Some(declared) = validator.declared_count(header) else {
        return validator.finish(None);
    };

    for line in event_lines {
        trace!(line_number = line.number, text = line.text; "Validating event line");
        if let Some(event) = validator.event(line) {
            validator.events.push(event);
            validator.event_spans.push(line.text_span());
        }
    }

    validator.reconcile_count(declared, header);
    validator.finish(Some(declared))
}

/// The result for input that is absent or has no lines.
pub(crate) fn no_input() -> ParseResult {
    let mut validator = Validator::default();
    validator.no_input();
    validator.finish(None)
}

#[derive(Debug, Default)]
struct Validator {
    diagnostics: DiagnosticCollector,
    events: Vec<Event>,
    /// Span of the line each event was read from.
    event_spans: Vec<Span>,
}

impl Validator {
    fn no_input(&mut self) {
        self.diagnostics.emit(
            Diagnostic::error("No input provided")
                .with_code(ErrorCode::E001)
                .with_help("the first line must hold the number of events"),
        );
    }

    /// Read the declared event count from the first line.
    ///
    /// Returns `None` when the line is not an integer, which aborts
    /// validation. A negative count is recorded but still returned.
    fn declared_count(&mut self, header: &SourceLine<'_>) -> Option<i32> {
        let Ok(declared) = header.text.parse::<i32>() else {
            self.diagnostics.emit(
                Diagnostic::error(format!(
                    "First line is not a valid integer for number of events: \"{}\"",
                    header.text
                ))
                .with_code(ErrorCode::E002)
                .with_label(header.text_span(), "expected an integer")
                .with_help("start the input with the number of events, e.g. `3`"),
            );
            return None;
        };

        if declared < 0 {
            self.diagnostics.emit(
                Diagnostic::error(format!("Number of events cannot be negative: {declared}"))
                    .with_code(ErrorCode::E003)
                    .with_label(header.text_span(), "negative count"),
            );
        }

        debug!(declared; "Read declared event count");
        Some(declared)
    }

    /// Turn one event line into an event, recording any diagnostics.
    fn event(&mut self, line: &SourceLine<'_>) -> Option<Event> {
        let number = line.number;

        if line.is_blank() {
            self.diagnostics.emit(
                Diagnostic::error(format!(
                    "Line {number}: Empty or whitespace line where an event was expected."
                ))
                .with_code(ErrorCode::E100)
                .with_label(line.span, "empty line")
                .with_help("remove the line or write `<start day> <end day>`"),
            );
            return None;
        }

        if line.words.len() < 2 {
            self.diagnostics.emit(
                Diagnostic::error(format!(
                    "Line {number}: Malformed event, expected 2 numbers but found {}",
                    line.words.len()
                ))
                .with_code(ErrorCode::E101)
                .with_label(line.text_span(), "expected a start day and an end day")
                .with_help("write the start day and the end day separated by whitespace"),
            );
            return None;
        }

        if let Some(extra) = line.words_span_from(2) {
            self.diagnostics.emit(
                Diagnostic::warning(format!(
                    "Line {number}: Extra data ignored after two numbers (\"{}\")",
                    line.text
                ))
                .with_code(ErrorCode::W100)
                .with_label(extra, "ignored"),
            );
        }

        let start = self.day_value(&line.words[0], number, "start day");
        let end = self.day_value(&line.words[1], number, "end day");
        let (Some(start), Some(end)) = (start, end) else {
            return None;
        };

        let (start_day, end_day) = (Day::clamped(start), Day::clamped(end));
        if !Day::in_range(start) || !Day::in_range(end) {
            self.diagnostics.emit(
                Diagnostic::warning(format!(
                    "Line {number}: Event days out of range, adjusted ({start}->{start_day}, {end}->{end_day})"
                ))
                .with_code(ErrorCode::W101)
                .with_label(line.words[0].span().union(line.words[1].span()), "clamped")
                .with_help(format!("days must be between {} and {}", Day::MIN, Day::MAX)),
            );
        }

        if start_day > end_day {
            self.diagnostics.emit(
                Diagnostic::warning(format!(
                    "Line {number}: Start day greater than end day; swapping the values"
                ))
                .with_code(ErrorCode::W102)
                .with_label(
                    line.words[0].span().union(line.words[1].span()),
                    format!("start day {start_day} is after end day {end_day}"),
                )
                .with_help("write the earlier day first"),
            );
        }

        Some(Event::spanning(start_day, end_day))
    }

    /// Parse a day value, recording an error if it is not an integer.
    fn day_value(&mut self, word: &Spanned<&str>, number: usize, what: &str) -> Option<i32> {
        match word.inner().parse::<i32>() {
            Ok(value) => Some(value),
            Err(_) => {
                self.diagnostics.emit(
                    Diagnostic::error(format!(
                        "Line {number}: \"{}\" is not a valid integer for {what}",
                        word.inner()
                    ))
                    .with_code(ErrorCode::E102)
                    .with_label(word.span(), "not an integer"),
                );
                None
            }
        }
    }

    /// Compare the parsed event count against the declared one.
    ///
    /// Skipped when errors were already recorded.
    fn reconcile_count(&mut self, declared: i32, header: &SourceLine<'_>) {
        if self.diagnostics.has_errors() {
            return;
        }

        let parsed = self.events.len();
        let expected = usize::try_from(declared).unwrap_or(0);

        let declared_here = format!("{declared} events declared here");

        if parsed < expected {
            let mut diag = Diagnostic::error(format!(
                "Number of events mismatch: expected {declared} but found {parsed} event line(s)"
            ))
            .with_code(ErrorCode::E200)
            .with_label(header.text_span(), declared_here)
            .with_help("add the missing events or lower the count");
            if let Some(last) = self.event_spans.last() {
                diag = diag.with_secondary_label(*last, "last event found here");
            }
            self.diagnostics.emit(diag);
        } else if parsed > expected {
            let mut diag = Diagnostic::warning("Extra events will be processed.")
                .with_code(ErrorCode::W200);
            if let Some(first_extra) = self.event_spans.get(expected) {
                diag = diag.with_label(*first_extra, "first event beyond the declared count");
            }
            self.diagnostics
                .emit(diag.with_secondary_label(header.text_span(), declared_here));
        }
    }

    fn finish(self, declared_count: Option<i32>) -> ParseResult {
        let (errors, warnings) = self.diagnostics.finish();
        debug!(
            events = self.events.len(),
            errors = errors.len(),
            warnings = warnings.len();
            "Validation finished"
        );
        ParseResult::new(self.events, errors, warnings, declared_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn run(source: &str) -> ParseResult {
        validate(&tokenize(source))
    }

    fn codes(diagnostics: &[Diagnostic]) -> Vec<ErrorCode> {
        diagnostics.iter().filter_map(Diagnostic::code).collect()
    }

    #[test]
    fn test_no_lines() {
        let result = run("");
        assert_eq!(result.error_messages(), ["No input provided"]);
        assert!(result.events().is_empty());
        assert!(result.warnings().is_empty());
        assert_eq!(result.declared_count(), None);
    }

    #[test]
    fn test_invalid_count_aborts() {
        let result = run("abc\n1 2\nx");
        assert_eq!(
            result.error_messages(),
            ["First line is not a valid integer for number of events: \"abc\""]
        );
        assert!(result.events().is_empty());
        assert_eq!(codes(result.errors()), [ErrorCode::E002]);
    }

    #[test]
    fn test_invalid_count_quotes_trimmed_line() {
        let result = run("  3 4  \n1 2");
        assert_eq!(
            result.error_messages(),
            ["First line is not a valid integer for number of events: \"3 4\""]
        );
    }

    #[test]
    fn test_blank_count_line_aborts() {
        let result = run("\n1 2");
        assert_eq!(
            result.error_messages(),
            ["First line is not a valid integer for number of events: \"\""]
        );
    }

    #[test]
    fn test_negative_count_keeps_parsing() {
        let result = run("-1\n10 20");
        assert_eq!(
            result.error_messages(),
            ["Number of events cannot be negative: -1"]
        );
        assert_eq!(result.events(), [Event::new(10, 20).unwrap()]);
        assert!(result.warnings().is_empty());
        assert_eq!(result.declared_count(), Some(-1));
    }

    #[test]
    fn test_each_day_error_is_recorded() {
        let result = run("1\nfive ten");
        assert_eq!(
            result.error_messages(),
            [
                "Line 2: \"five\" is not a valid integer for start day",
                "Line 2: \"ten\" is not a valid integer for end day",
            ]
        );
        assert!(result.events().is_empty());
    }

    #[test]
    fn test_only_end_day_invalid() {
        let result = run("1\n5 x");
        assert_eq!(
            result.error_messages(),
            ["Line 2: \"x\" is not a valid integer for end day"]
        );
    }

    #[test]
    fn test_overflowing_day_is_not_an_integer() {
        let result = run("1\n1 99999999999");
        assert_eq!(
            result.error_messages(),
            ["Line 2: \"99999999999\" is not a valid integer for end day"]
        );
    }

    #[test]
    fn test_explicit_plus_sign_is_accepted() {
        let result = run("1\n+3 +4");
        assert!(!result.has_errors());
        assert_eq!(result.events(), [Event::new(3, 4).unwrap()]);
    }

    #[test]
    fn test_extra_data_warning_then_day_error() {
        let result = run("1\nx 2 3");
        assert_eq!(
            result.warning_messages(),
            ["Line 2: Extra data ignored after two numbers (\"x 2 3\")"]
        );
        assert_eq!(
            result.error_messages(),
            ["Line 2: \"x\" is not a valid integer for start day"]
        );
    }

    #[test]
    fn test_clamp_then_swap() {
        let result = run("1\n400 1");
        assert_eq!(
            result.warning_messages(),
            [
                "Line 2: Event days out of range, adjusted (400->366, 1->1)",
                "Line 2: Start day greater than end day; swapping the values",
            ]
        );
        assert_eq!(result.events(), [Event::new(1, 366).unwrap()]);
        assert_eq!(codes(result.warnings()), [ErrorCode::W101, ErrorCode::W102]);
    }

    #[test]
    fn test_clamp_both_days() {
        let result = run("1\n-5 400");
        assert_eq!(
            result.warning_messages(),
            ["Line 2: Event days out of range, adjusted (-5->1, 400->366)"]
        );
        assert_eq!(result.events(), [Event::new(1, 366).unwrap()]);
    }

    #[test]
    fn test_clamping_can_create_reversal() {
        let result = run("1\n500 -2");
        assert_eq!(result.events(), [Event::new(1, 366).unwrap()]);
        assert_eq!(result.warnings().len(), 2);
    }

    #[test]
    fn test_bad_lines_do_not_stop_later_lines() {
        let result = run("4\n\n7\n1 2\n3 4");
        assert_eq!(
            result.error_messages(),
            [
                "Line 2: Empty or whitespace line where an event was expected.",
                "Line 3: Malformed event, expected 2 numbers but found 1",
            ]
        );
        assert_eq!(
            result.events(),
            [Event::new(1, 2).unwrap(), Event::new(3, 4).unwrap()]
        );
    }

    #[test]
    fn test_count_check_skipped_after_line_error() {
        let result = run("3\n1 2\nbad");
        assert_eq!(
            result.error_messages(),
            ["Line 3: Malformed event, expected 2 numbers but found 1"]
        );
    }

    #[test]
    fn test_count_shortfall() {
        let result = run("2\n10 20");
        assert_eq!(
            result.error_messages(),
            ["Number of events mismatch: expected 2 but found 1 event line(s)"]
        );
        assert_eq!(result.events().len(), 1);
        assert!(result.warnings().is_empty());
    }

    #[test]
    fn test_count_overage() {
        let result = run("1\n10 20\n25 30");
        assert!(!result.has_errors());
        assert_eq!(result.warning_messages(), ["Extra events will be processed."]);
        assert_eq!(result.events().len(), 2);
    }

    #[test]
    fn test_zero_events() {
        let result = run("0");
        assert!(!result.has_errors());
        assert!(!result.has_warnings());
        assert!(result.events().is_empty());
        assert_eq!(result.declared_count(), Some(0));
    }

    #[test]
    fn test_count_shortfall_labels() {
        let source = "3\n1 2\n3 4";
        let result = run(source);
        let labels = result.errors()[0].labels();

        assert_eq!(labels.len(), 2);
        assert!(labels[0].is_primary());
        assert_eq!(&source[labels[0].span().range()], "3");
        assert_eq!(labels[0].message(), "3 events declared here");
        assert!(labels[1].is_secondary());
        assert_eq!(&source[labels[1].span().range()], "3 4");
    }

    #[test]
    fn test_count_shortfall_without_events_labels_header_only() {
        let result = run("2");
        assert_eq!(result.errors()[0].labels().len(), 1);
    }

    #[test]
    fn test_count_overage_labels() {
        let source = "1\n10 20\n25 30\n40 45";
        let result = run(source);
        let labels = result.warnings()[0].labels();

        assert_eq!(labels.len(), 2);
        assert!(labels[0].is_primary());
        assert_eq!(&source[labels[0].span().range()], "25 30");
        assert!(labels[1].is_secondary());
        assert_eq!(&source[labels[1].span().range()], "1");
    }

    #[test]
    fn test_overage_after_skipped_line_points_at_first_extra_event() {
        let source = "0\n5 6";
        let result = run(source);
        let label = &result.warnings()[0].labels()[0];
        assert_eq!(&source[label.span().range()], "5 6");
    }

    #[test]
    fn test_labels_point_at_offending_word() {
        let source = "1\n12 abc";
        let result = run(source);
        let label = &result.errors()[0].labels()[0];
        assert_eq!(&source[label.span().range()], "abc");
    }
}

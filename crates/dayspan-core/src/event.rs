//! Closed day intervals.
//!
//! An [`Event`] covers every day from its start to its end, both inclusive.
//! Once constructed an event always satisfies `start <= end`.

use std::fmt;

use thiserror::Error;

use crate::day::Day;

/// Errors raised when constructing days or events from raw values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("day {0} is outside the range {min}..={max}", min = Day::MIN, max = Day::MAX)]
    DayOutOfRange(i32),

    #[error("start day {start} is after end day {end}")]
    Reversed { start: Day, end: Day },
}

/// An immutable closed interval of days.
///
/// Equality, hashing and ordering are structural on `(start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Event {
    start: Day,
    end: Day,
}

impl Event {
    /// Create an event from raw day numbers.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::DayOutOfRange`] if either value is not a valid
    /// day, or [`EventError::Reversed`] if `start > end`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dayspan_core::Event;
    /// let event = Event::new(3, 7).unwrap();
    /// assert_eq!(event.to_string(), "(3, 7)");
    /// assert!(Event::new(7, 3).is_err());
    /// ```
    pub fn new(start: i32, end: i32) -> Result<Self, EventError> {
        Self::from_days(Day::new(start)?, Day::new(end)?)
    }

    /// Create an event from two days.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::Reversed`] if `start > end`.
    pub fn from_days(start: Day, end: Day) -> Result<Self, EventError> {
        if start > end {
            return Err(EventError::Reversed { start, end });
        }
        Ok(Self { start, end })
    }

    /// Create the event spanning two days given in either order.
    pub fn spanning(a: Day, b: Day) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Returns the first day of the event.
    pub fn start(&self) -> Day {
        self.start
    }

    /// Returns the last day of the event.
    pub fn end(&self) -> Day {
        self.end
    }

    /// Returns the first day as a number.
    pub fn start_day(&self) -> u16 {
        self.start.get()
    }

    /// Returns the last day as a number.
    pub fn end_day(&self) -> u16 {
        self.end.get()
    }

    /// Number of days covered, counting both endpoints.
    pub fn len_days(&self) -> u16 {
        self.end.get() - self.start.get() + 1
    }

    /// Returns `true` if `day` falls within the event.
    pub fn contains(&self, day: Day) -> bool {
        self.start <= day && day <= self.end
    }

    /// Returns `true` if the two events share at least one day.
    ///
    /// Events that only touch at a boundary day overlap.
    pub fn overlaps(&self, other: &Event) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(start: i32, end: i32) -> Event {
        Event::new(start, end).expect("valid event")
    }

    #[test]
    fn test_event_display() {
        assert_eq!(event(3, 7).to_string(), "(3, 7)");
    }

    #[test]
    fn test_event_new_rejects_reversed() {
        let err = Event::new(10, 5).unwrap_err();
        assert_eq!(
            err,
            EventError::Reversed {
                start: Day::clamped(10),
                end: Day::clamped(5),
            }
        );
        assert_eq!(err.to_string(), "start day 10 is after end day 5");
    }

    #[test]
    fn test_event_new_rejects_out_of_range() {
        assert_eq!(Event::new(0, 5), Err(EventError::DayOutOfRange(0)));
        assert_eq!(Event::new(5, 400), Err(EventError::DayOutOfRange(400)));
        assert_eq!(
            EventError::DayOutOfRange(400).to_string(),
            "day 400 is outside the range 1..=366"
        );
    }

    #[test]
    fn test_event_single_day() {
        let e = event(42, 42);
        assert_eq!(e.len_days(), 1);
        assert!(e.contains(Day::clamped(42)));
        assert!(!e.contains(Day::clamped(43)));
    }

    #[test]
    fn test_event_spanning_orders_endpoints() {
        let e = Event::spanning(Day::clamped(10), Day::clamped(5));
        assert_eq!(e, event(5, 10));
        assert_eq!(Event::spanning(e.start(), e.end()), e);
    }

    #[test]
    fn test_event_overlaps() {
        assert!(event(1, 10).overlaps(&event(5, 15)));
        assert!(event(5, 15).overlaps(&event(1, 10)));
        assert!(event(1, 10).overlaps(&event(10, 20)));
        assert!(event(1, 20).overlaps(&event(5, 6)));
        assert!(!event(10, 15).overlaps(&event(16, 20)));
    }

    #[test]
    fn test_event_structural_equality_and_hash() {
        use std::collections::HashSet;

        let set: HashSet<Event> = [event(1, 2), event(1, 2), event(2, 3)].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}

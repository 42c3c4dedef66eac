//! Detect overlapping events.
//!
//! Performs an exhaustive pairwise comparison over a list of events. Two
//! events overlap when they share at least one day, so events that only
//! touch at a boundary day do overlap.

use std::fmt;

use dayspan_core::Event;

/// A pair of overlapping events, identified by their position in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlap {
    first: (usize, Event),
    second: (usize, Event),
}

impl Overlap {
    /// The earlier event of the pair, as `(index, event)` with a 0-based index.
    pub fn first(&self) -> (usize, Event) {
        self.first
    }

    /// The later event of the pair, as `(index, event)` with a 0-based index.
    pub fn second(&self) -> (usize, Event) {
        self.second
    }
}

impl fmt::Display for Overlap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (i, a) = self.first;
        let (j, b) = self.second;
        write!(f, "Event {} {a} overlaps with Event {} {b}", i + 1, j + 1)
    }
}

/// Find every overlapping pair of events.
///
/// Pairs `(i, j)` with `i < j` are returned in iteration order over the
/// list as given; the list is not re-sorted.
///
/// # Examples
///
/// ```
/// # use dayspan::{Event, overlapping_pairs};
/// let events = [Event::new(1, 10).unwrap(), Event::new(10, 12).unwrap()];
/// let overlaps = overlapping_pairs(&events);
/// assert_eq!(overlaps.len(), 1);
/// assert_eq!(overlaps[0].first().0, 0);
/// ```
pub fn overlapping_pairs(events: &[Event]) -> Vec<Overlap> {
    let mut overlaps = Vec::new();

    for (i, a) in events.iter().enumerate() {
        for (j, b) in events.iter().enumerate().skip(i + 1) {
            if a.overlaps(b) {
                overlaps.push(Overlap {
                    first: (i, *a),
                    second: (j, *b),
                });
            }
        }
    }

    overlaps
}

/// Describe every overlapping pair of events.
///
/// Same ordering as [`overlapping_pairs`], rendered as
/// `Event <i> (<start>, <end>) overlaps with Event <j> (<start>, <end>)`
/// with 1-based positions. An empty list yields no messages.
///
/// # Examples
///
/// ```
/// # use dayspan::{Event, find_overlaps};
/// let events = [
///     Event::new(1, 10).unwrap(),
///     Event::new(5, 15).unwrap(),
///     Event::new(20, 25).unwrap(),
/// ];
/// assert_eq!(
///     find_overlaps(&events),
///     ["Event 1 (1, 10) overlaps with Event 2 (5, 15)"]
/// );
/// ```
pub fn find_overlaps(events: &[Event]) -> Vec<String> {
    overlapping_pairs(events)
        .iter()
        .map(ToString::to_string)
        .collect()
}

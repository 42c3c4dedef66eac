//! Calendar day numbers.
//!
//! A [`Day`] is the ordinal of a day within a single year, from
//! [`Day::MIN`] to [`Day::MAX`] inclusive. Values outside that range can
//! either be rejected ([`Day::new`]) or saturated into it ([`Day::clamped`]).

use std::fmt;

use crate::event::EventError;

/// A day of the year, always within `1..=366`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Day(u16);

impl Day {
    /// The first day of the year.
    pub const MIN: Day = Day(1);

    /// The last day of a leap year.
    pub const MAX: Day = Day(366);

    /// Create a day from a raw value.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::DayOutOfRange`] if `value` is outside
    /// `Day::MIN..=Day::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dayspan_core::Day;
    /// assert_eq!(Day::new(42).unwrap().get(), 42);
    /// assert!(Day::new(0).is_err());
    /// ```
    pub fn new(value: i32) -> Result<Self, EventError> {
        if Self::in_range(value) {
            Ok(Self::clamped(value))
        } else {
            Err(EventError::DayOutOfRange(value))
        }
    }

    /// Create a day by saturating `value` into `Day::MIN..=Day::MAX`.
    ///
    /// Clamping an in-range value returns it unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dayspan_core::Day;
    /// assert_eq!(Day::clamped(-5), Day::MIN);
    /// assert_eq!(Day::clamped(400), Day::MAX);
    /// assert_eq!(Day::clamped(100).get(), 100);
    /// ```
    pub fn clamped(value: i32) -> Self {
        let min = i32::from(Self::MIN.0);
        let max = i32::from(Self::MAX.0);
        // The clamped value fits in `u16` because `MAX` does.
        Self(value.clamp(min, max) as u16)
    }

    /// Returns `true` if `value` is a valid day number.
    pub fn in_range(value: i32) -> bool {
        (i32::from(Self::MIN.0)..=i32::from(Self::MAX.0)).contains(&value)
    }

    /// Returns the day number.
    pub fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Day> for i32 {
    fn from(day: Day) -> Self {
        i32::from(day.0)
    }
}

//! Proleptic Gregorian calendar date as three unchecked integers.

use std::fmt::{Display, Formatter};

use crate::args::{ArgPosition, ParseMode, parse_component};
use crate::error::WetonError;

/// A (day, month, year) triple.
///
/// No range is enforced: day 31 of a 30-day month, month 0 and negative
/// years are all accepted and fed to the congruence as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    /// Day of month.
    pub day: i32,
    /// Month, 1 = January.
    pub month: i32,
    /// Year, astronomical numbering (0 = 1 BCE).
    pub year: i32,
}

impl CalendarDate {
    /// Build a date from its components.
    pub const fn new(day: i32, month: i32, year: i32) -> Self {
        Self { day, month, year }
    }

    /// Build a date from command-line text.
    pub fn from_args(
        day: &str,
        month: &str,
        year: &str,
        mode: ParseMode,
    ) -> Result<Self, WetonError> {
        Ok(Self {
            day: parse_component(day, ArgPosition::Day, mode)?,
            month: parse_component(month, ArgPosition::Month, mode)?,
            year: parse_component(year, ArgPosition::Year, mode)?,
        })
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.day, self.month, self.year)
    }
}

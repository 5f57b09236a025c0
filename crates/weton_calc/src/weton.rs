//! Weton lookup: congruence key → (dina, pasaran).

use std::fmt::{Display, Formatter};

use crate::congruence::{dina_index, pasaran_index, weton_key};
use crate::date::CalendarDate;
use crate::dina::Dina;
use crate::pasaran::Pasaran;

/// The combined dina and pasaran of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Weton {
    /// 7-day weekday.
    pub dina: Dina,
    /// 5-day market day.
    pub pasaran: Pasaran,
}

impl Weton {
    /// Weton for a congruence key.
    pub fn from_key(key: i64) -> Self {
        Self {
            dina: Dina::from_index(dina_index(key)),
            pasaran: Pasaran::from_index(pasaran_index(key)),
        }
    }

    /// Sum of the dina and pasaran neptu (7..=18).
    pub const fn neptu(self) -> u8 {
        self.dina.neptu() + self.pasaran.neptu()
    }
}

impl Display for Weton {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.dina, self.pasaran)
    }
}

/// Weton of a calendar date.
pub fn weton_from_date(date: CalendarDate) -> Weton {
    Weton::from_key(weton_key(date))
}

/// Weton of (day, month, year).
pub fn weton(day: i32, month: i32, year: i32) -> Weton {
    weton_from_date(CalendarDate::new(day, month, year))
}

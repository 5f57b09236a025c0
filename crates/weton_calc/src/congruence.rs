//! Adapted Zeller congruence (Karjanto & Beauducel 2020).
//!
//! The key `w` for (d, m, y) is
//!
//! ```text
//! c = y / 100,  y' = y % 100
//! m < 3:  y' -= 1, m' = m + 13
//! else:   m' = m + 1
//! w = d + 153 m' / 5 + 15 y' + y' / 4 + 19 c + c / 4 + 5
//! ```
//!
//! with every division and remainder truncating toward zero. `w mod 7`
//! indexes the dina table and `w mod 5` the pasaran table.
//!
//! The borrow in the January/February branch is taken from the two-digit
//! year only, so for years divisible by 400 the result for January and
//! February is one day ahead of the true Gregorian weekday. This is kept
//! as-is; published weton tables are computed with the same formula.

use tracing::trace;

use crate::date::CalendarDate;

/// Intermediate values of the congruence for one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CongruenceState {
    /// `year / 100`, truncated.
    pub century: i64,
    /// `year % 100`, minus one for January and February.
    pub year_in_century: i64,
    /// Month shifted so March = 4 .. December = 13, January = 14, February = 15.
    pub adjusted_month: i64,
}

impl CongruenceState {
    /// Reduce a date to its congruence terms.
    pub fn from_date(date: CalendarDate) -> Self {
        let year = i64::from(date.year);
        let century = year / 100;
        let mut year_in_century = year % 100;
        let mut adjusted_month = i64::from(date.month);

        if adjusted_month < 3 {
            year_in_century -= 1;
            adjusted_month += 13;
        } else {
            adjusted_month += 1;
        }

        Self {
            century,
            year_in_century,
            adjusted_month,
        }
    }
}

/// Congruence key for `date`.
///
/// Computed in `i64`; no `i32` input can overflow it.
pub fn weton_key(date: CalendarDate) -> i64 {
    let state = CongruenceState::from_date(date);
    let y = state.year_in_century;
    let c = state.century;
    let key = i64::from(date.day)
        + (153 * state.adjusted_month) / 5
        + 15 * y
        + y / 4
        + 19 * c
        + c / 4
        + 5;
    trace!(%date, ?state, key, "weton congruence");
    key
}

/// Dina table index (0..=6) for a key of any sign.
pub fn dina_index(key: i64) -> u8 {
    key.rem_euclid(7) as u8
}

/// Pasaran table index (0..=4) for a key of any sign.
pub fn pasaran_index(key: i64) -> u8 {
    key.rem_euclid(5) as u8
}

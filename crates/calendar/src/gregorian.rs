//! Proleptic Gregorian dates and their Julian Day Numbers.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CalendarError;
use crate::jalaali::{JalaaliDate, jdn_to_jalaali};

/// A proleptic Gregorian calendar date.
///
/// Fields are public and unchecked; use [`GregorianDate::is_valid`] or
/// [`GregorianDate::validate`] before trusting a hand-built value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GregorianDate {
    /// Year (astronomical numbering, may be zero or negative).
    pub gy: i32,
    /// Month (1..=12).
    pub gm: i32,
    /// Day of month (1..=31).
    pub gd: i32,
}

/// Number of days in each Gregorian month of a common year
/// (index 0 unused, index 1 = January, ..., index 12 = December).
pub(crate) const DAYS_PER_MONTH: [i32; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

impl GregorianDate {
    /// Creates a date from its raw fields without validation.
    pub const fn new(gy: i32, gm: i32, gd: i32) -> Self {
        Self { gy, gm, gd }
    }

    /// Builds a date from its Julian Day Number.
    pub fn from_jdn(jdn: i64) -> Self {
        jdn_to_gregorian(jdn)
    }

    /// Returns the Julian Day Number of this date.
    pub fn jdn(self) -> i64 {
        gregorian_to_jdn(self.gy, self.gm, self.gd)
    }

    /// Converts this date to the Jalaali calendar.
    pub fn to_jalaali(self) -> JalaaliDate {
        jdn_to_jalaali(self.jdn())
    }

    /// Returns `true` if the month and day exist in the proleptic Gregorian
    /// calendar.
    pub fn is_valid(self) -> bool {
        is_valid_gregorian_date(self.gy, self.gm, self.gd)
    }

    /// Returns the date unchanged if it is valid.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if the month is outside
    /// 1..=12 and [`CalendarError::InvalidDay`] if the day does not exist in
    /// that month.
    pub fn validate(self) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&self.gm) {
            debug!(date = ?self, "rejected gregorian month");
            return Err(CalendarError::InvalidMonth { month: self.gm });
        }
        let max_day = gregorian_month_length(self.gy, self.gm);
        if !(1..=max_day).contains(&self.gd) {
            debug!(date = ?self, max_day, "rejected gregorian day");
            return Err(CalendarError::InvalidDay {
                day: self.gd,
                month: self.gm,
                max_day,
            });
        }
        Ok(self)
    }
}

impl From<(i32, i32, i32)> for GregorianDate {
    fn from((gy, gm, gd): (i32, i32, i32)) -> Self {
        Self { gy, gm, gd }
    }
}

/// Returns `true` for leap years of the proleptic Gregorian calendar.
pub fn is_leap_gregorian_year(gy: i32) -> bool {
    (gy % 4 == 0 && gy % 100 != 0) || gy % 400 == 0
}

/// Number of days in Gregorian month `gm` of year `gy`.
///
/// Months outside 1..=12 have no length and return 0.
pub fn gregorian_month_length(gy: i32, gm: i32) -> i32 {
    match gm {
        2 if is_leap_gregorian_year(gy) => 29,
        1..=12 => DAYS_PER_MONTH[gm as usize],
        _ => 0,
    }
}

/// Returns `true` if `(gy, gm, gd)` is a real proleptic Gregorian date.
pub fn is_valid_gregorian_date(gy: i32, gm: i32, gd: i32) -> bool {
    (1..=12).contains(&gm) && (1..=gregorian_month_length(gy, gm)).contains(&gd)
}

/// Converts a Gregorian date to its Julian Day Number.
///
/// Integer arithmetic with truncating division; January and February are
/// counted as months of the previous year through the `(gm - 8) / 6` term.
pub fn gregorian_to_jdn(gy: i32, gm: i32, gd: i32) -> i64 {
    civil_to_jdn(i64::from(gy), i64::from(gm), i64::from(gd))
}

pub(crate) fn civil_to_jdn(gy: i64, gm: i64, gd: i64) -> i64 {
    let shift = (gm - 8) / 6;
    let d = (gy + shift + 100_100) * 1461 / 4 + (153 * ((gm + 9) % 12) + 2) / 5 + gd
        - 34_840_408;
    d - (gy + 100_100 + shift) / 100 * 3 / 4 + 752
}

/// Converts a Julian Day Number to a Gregorian date.
///
/// Exact inverse of [`gregorian_to_jdn`] for valid dates. Day numbers
/// beyond about ±2^60 overflow the intermediate arithmetic.
pub fn jdn_to_gregorian(jdn: i64) -> GregorianDate {
    let mut j = 4 * jdn + 139_361_631;
    j += (4 * jdn + 183_187_720) / 146_097 * 3 / 4 * 4 - 3908;
    let i = j % 1461 / 4 * 5 + 308;
    let gd = i % 153 / 5 + 1;
    let gm = i / 153 % 12 + 1;
    let gy = j / 1461 - 100_100 + (8 - gm) / 6;
    GregorianDate {
        gy: gy as i32,
        gm: gm as i32,
        gd: gd as i32,
    }
}

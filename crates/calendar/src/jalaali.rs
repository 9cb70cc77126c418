//! Jalaali dates, the leap-year rule and Jalaali ↔ JDN conversion.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::breaks::{self, GREGORIAN_OFFSET, MAX_YEAR, MIN_YEAR};
use crate::error::CalendarError;
use crate::gregorian::{GregorianDate, civil_to_jdn, jdn_to_gregorian};
use crate::moment::{CalendarMoment, TimeOfDay};

/// A Jalaali (Solar Hijri) calendar date.
///
/// Fields are public and unchecked, so any triple can be represented. Use
/// [`JalaaliDate::is_valid`] or [`JalaaliDate::validate`] before trusting a
/// hand-built value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct JalaaliDate {
    /// Year (may be negative).
    pub jy: i32,
    /// Month (1..=12).
    pub jm: i32,
    /// Day of month (1..=31).
    pub jd: i32,
}

/// Days elapsed in a Jalaali year before the first day of month `jm`.
///
/// Months 1..=6 have 31 days and months 7..=11 have 30, so the offset
/// follows directly from the month number.
fn days_before_month(jm: i64) -> i64 {
    (jm - 1) * 31 - jm / 7 * (jm - 7)
}

impl JalaaliDate {
    /// Creates a date from its raw fields without validation.
    pub const fn new(jy: i32, jm: i32, jd: i32) -> Self {
        Self { jy, jm, jd }
    }

    /// Builds a date from its Julian Day Number.
    pub fn from_jdn(jdn: i64) -> Self {
        jdn_to_jalaali(jdn)
    }

    /// Returns the Julian Day Number of this date.
    pub fn jdn(self) -> i64 {
        jalaali_to_jdn(self.jy, self.jm, self.jd)
    }

    /// Converts this date to the Gregorian calendar.
    pub fn to_gregorian(self) -> GregorianDate {
        jdn_to_gregorian(self.jdn())
    }

    /// Returns the Gregorian moment at midnight of this date.
    pub fn to_moment(self) -> CalendarMoment {
        CalendarMoment::from_date(self.to_gregorian(), TimeOfDay::MIDNIGHT)
    }

    /// Returns `true` if this date lies in a leap year.
    pub fn is_leap_year(self) -> bool {
        is_leap_jalaali_year(self.jy)
    }

    /// Number of days in this date's month.
    pub fn month_length(self) -> i32 {
        jalaali_month_length(self.jy, self.jm)
    }

    /// Returns `true` if the date exists and its year is in the supported
    /// range.
    pub fn is_valid(self) -> bool {
        is_valid_jalaali_date(self.jy, self.jm, self.jd)
    }

    /// Returns the date unchanged if it is valid.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] if the year is outside
    /// [`MIN_YEAR`]..=[`MAX_YEAR`], [`CalendarError::InvalidMonth`] if the
    /// month is outside 1..=12 and [`CalendarError::InvalidDay`] if the day
    /// does not exist in that month.
    pub fn validate(self) -> Result<Self, CalendarError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&self.jy) {
            debug!(date = ?self, "rejected jalaali year");
            return Err(CalendarError::YearOutOfRange { year: self.jy });
        }
        if !(1..=12).contains(&self.jm) {
            debug!(date = ?self, "rejected jalaali month");
            return Err(CalendarError::InvalidMonth { month: self.jm });
        }
        let max_day = self.month_length();
        if !(1..=max_day).contains(&self.jd) {
            debug!(date = ?self, max_day, "rejected jalaali day");
            return Err(CalendarError::InvalidDay {
                day: self.jd,
                month: self.jm,
                max_day,
            });
        }
        Ok(self)
    }
}

impl From<(i32, i32, i32)> for JalaaliDate {
    fn from((jy, jm, jd): (i32, i32, i32)) -> Self {
        Self { jy, jm, jd }
    }
}

/// Returns `true` if `jy` is a Jalaali leap year.
///
/// Years outside the break-point table get a finite but meaningless answer.
pub fn is_leap_jalaali_year(jy: i32) -> bool {
    breaks::leap_remainder(i64::from(jy)) == 0
}

/// Number of days in Jalaali month `jm` of year `jy`.
///
/// Months 1..=6 have 31 days, 7..=11 have 30, and month 12 has 30 in leap
/// years and 29 otherwise. Month numbers are not checked.
pub fn jalaali_month_length(jy: i32, jm: i32) -> i32 {
    if jm <= 6 {
        31
    } else if jm <= 11 {
        30
    } else if is_leap_jalaali_year(jy) {
        30
    } else {
        29
    }
}

/// Returns `true` if `(jy, jm, jd)` is a real Jalaali date within the
/// supported year range.
pub fn is_valid_jalaali_date(jy: i32, jm: i32, jd: i32) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&jy)
        && (1..=12).contains(&jm)
        && (1..=jalaali_month_length(jy, jm)).contains(&jd)
}

/// Converts a Jalaali date to its Julian Day Number.
pub fn jalaali_to_jdn(jy: i32, jm: i32, jd: i32) -> i64 {
    let info = breaks::year_info(i64::from(jy));
    nowruz_jdn(info.gy, info.march) + days_before_month(i64::from(jm)) + i64::from(jd) - 1
}

/// Converts a Julian Day Number to a Jalaali date.
///
/// Exact inverse of [`jalaali_to_jdn`] for valid dates.
pub fn jdn_to_jalaali(jdn: i64) -> JalaaliDate {
    let gy = i64::from(jdn_to_gregorian(jdn).gy);
    let mut jy = gy - GREGORIAN_OFFSET;
    let info = breaks::year_info(jy);
    let mut k = jdn - nowruz_jdn(gy, info.march);

    if k >= 0 {
        if k <= 185 {
            return JalaaliDate {
                jy: jy as i32,
                jm: (1 + k / 31) as i32,
                jd: (k % 31 + 1) as i32,
            };
        }
        k -= 186;
    } else {
        // Before Nowruz: the tail of the previous Jalaali year.
        jy -= 1;
        k += 179;
        if info.leap == 1 {
            k += 1;
        }
    }

    JalaaliDate {
        jy: jy as i32,
        jm: (7 + k / 30) as i32,
        jd: (k % 30 + 1) as i32,
    }
}

fn nowruz_jdn(gy: i64, march: i64) -> i64 {
    civil_to_jdn(gy, 3, march)
}

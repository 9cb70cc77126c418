//! Host-side Gregorian moments and the input adapter for conversions.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Timelike};
use serde::Serialize;

use crate::error::CalendarError;
use crate::gregorian::{GregorianDate, civil_to_jdn, jdn_to_gregorian};
use crate::jalaali::JalaaliDate;

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Time-of-day fields supplied alongside a date.
///
/// Values are not validated. Out-of-range fields (hour 25, second 100,
/// negative minutes) are carried into the date when a [`CalendarMoment`]
/// is built from them.
///
/// # Example
///
/// ```
/// use jalaali_calendar::TimeOfDay;
///
/// let time = TimeOfDay::default().with_hour(25).with_second(100);
/// assert_eq!(time.hour, 25);
/// assert_eq!(time.minute, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct TimeOfDay {
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
    pub millisecond: i32,
}

impl TimeOfDay {
    /// 00:00:00.000
    pub const MIDNIGHT: Self = Self::new(0, 0, 0, 0);

    pub const fn new(hour: i32, minute: i32, second: i32, millisecond: i32) -> Self {
        Self {
            hour,
            minute,
            second,
            millisecond,
        }
    }

    /// Sets the hour.
    pub fn with_hour(mut self, hour: i32) -> Self {
        self.hour = hour;
        self
    }

    /// Sets the minute.
    pub fn with_minute(mut self, minute: i32) -> Self {
        self.minute = minute;
        self
    }

    /// Sets the second.
    pub fn with_second(mut self, second: i32) -> Self {
        self.second = second;
        self
    }

    /// Sets the millisecond.
    pub fn with_millisecond(mut self, millisecond: i32) -> Self {
        self.millisecond = millisecond;
        self
    }

    fn total_milliseconds(self) -> i64 {
        i64::from(self.hour) * MS_PER_HOUR
            + i64::from(self.minute) * MS_PER_MINUTE
            + i64::from(self.second) * MS_PER_SECOND
            + i64::from(self.millisecond)
    }
}

/// A Gregorian point in local time, without timezone.
///
/// A moment is always normalized: every field is within its natural range
/// (month 1..=12, day within the month, hour 0..=23, minute and second
/// 0..=59, millisecond 0..=999). Constructors carry overflowing fields into
/// the next larger one and borrow for negative ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CalendarMoment {
    year: i32,
    month: i32,
    day: i32,
    hour: i32,
    minute: i32,
    second: i32,
    millisecond: i32,
}

impl CalendarMoment {
    /// Builds a moment from possibly overflowing fields.
    ///
    /// # Example
    ///
    /// ```
    /// use jalaali_calendar::CalendarMoment;
    ///
    /// // 25:52:100 on 4 August rolls over to 01:53:40 on 5 August.
    /// let m = CalendarMoment::new(2018, 8, 4, 25, 52, 100, 0);
    /// assert_eq!((m.day(), m.hour(), m.minute(), m.second()), (5, 1, 53, 40));
    /// ```
    pub fn new(
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: i32,
        millisecond: i32,
    ) -> Self {
        Self::from_date(
            GregorianDate::new(year, month, day),
            TimeOfDay::new(hour, minute, second, millisecond),
        )
    }

    /// Builds a moment from a date and a time of day, normalizing both.
    pub fn from_date(date: GregorianDate, time: TimeOfDay) -> Self {
        let months = i64::from(date.gm) - 1;
        let gy = i64::from(date.gy) + months.div_euclid(12);
        let gm = months.rem_euclid(12) + 1;

        let total = time.total_milliseconds();
        let day_carry = total.div_euclid(MS_PER_DAY);
        let ms_of_day = total.rem_euclid(MS_PER_DAY);

        let jdn = civil_to_jdn(gy, gm, 1) + i64::from(date.gd) - 1 + day_carry;
        let GregorianDate { gy, gm, gd } = jdn_to_gregorian(jdn);

        Self {
            year: gy,
            month: gm,
            day: gd,
            hour: (ms_of_day / MS_PER_HOUR) as i32,
            minute: (ms_of_day % MS_PER_HOUR / MS_PER_MINUTE) as i32,
            second: (ms_of_day % MS_PER_MINUTE / MS_PER_SECOND) as i32,
            millisecond: (ms_of_day % MS_PER_SECOND) as i32,
        }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    /// Month (1..=12).
    pub fn month(self) -> i32 {
        self.month
    }

    pub fn day(self) -> i32 {
        self.day
    }

    pub fn hour(self) -> i32 {
        self.hour
    }

    pub fn minute(self) -> i32 {
        self.minute
    }

    pub fn second(self) -> i32 {
        self.second
    }

    pub fn millisecond(self) -> i32 {
        self.millisecond
    }

    /// Returns the calendar date of this moment.
    pub fn date(self) -> GregorianDate {
        GregorianDate::new(self.year, self.month, self.day)
    }

    /// Returns the (normalized) time of day of this moment.
    pub fn time(self) -> TimeOfDay {
        TimeOfDay::new(self.hour, self.minute, self.second, self.millisecond)
    }

    /// Converts the date part of this moment to the Jalaali calendar.
    pub fn to_jalaali(self) -> JalaaliDate {
        self.date().to_jalaali()
    }

    /// Converts this moment to a `chrono` date-time.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::MomentOutOfRange`] if the year is beyond
    /// what `chrono` can represent.
    pub fn to_naive_date_time(self) -> Result<NaiveDateTime, CalendarError> {
        NaiveDate::from_ymd_opt(self.year, self.month as u32, self.day as u32)
            .and_then(|d| {
                d.and_hms_milli_opt(
                    self.hour as u32,
                    self.minute as u32,
                    self.second as u32,
                    self.millisecond as u32,
                )
            })
            .ok_or(CalendarError::MomentOutOfRange { year: self.year })
    }
}

impl From<NaiveDateTime> for CalendarMoment {
    fn from(dt: NaiveDateTime) -> Self {
        // chrono encodes a leap second as nanosecond >= 1e9; it carries over.
        Self::new(
            dt.year(),
            dt.month() as i32,
            dt.day() as i32,
            dt.hour() as i32,
            dt.minute() as i32,
            dt.second() as i32,
            (dt.nanosecond() / 1_000_000) as i32,
        )
    }
}

impl From<NaiveDate> for CalendarMoment {
    fn from(d: NaiveDate) -> Self {
        Self::from_date(GregorianDate::from(d), TimeOfDay::MIDNIGHT)
    }
}

impl From<NaiveDate> for GregorianDate {
    fn from(d: NaiveDate) -> Self {
        GregorianDate::new(d.year(), d.month() as i32, d.day() as i32)
    }
}

/// Anything that exposes a Gregorian year, month and day.
///
/// This is the input side of [`to_jalaali_from`](crate::to_jalaali_from):
/// plain triples, [`GregorianDate`], [`CalendarMoment`] and the `chrono`
/// date types all normalize to one [`GregorianDate`] before conversion.
pub trait GregorianFields {
    /// Returns the Gregorian calendar date (1-based month).
    fn gregorian_date(&self) -> GregorianDate;
}

impl GregorianFields for GregorianDate {
    fn gregorian_date(&self) -> GregorianDate {
        *self
    }
}

impl GregorianFields for (i32, i32, i32) {
    fn gregorian_date(&self) -> GregorianDate {
        GregorianDate::from(*self)
    }
}

impl GregorianFields for CalendarMoment {
    fn gregorian_date(&self) -> GregorianDate {
        self.date()
    }
}

impl GregorianFields for NaiveDate {
    fn gregorian_date(&self) -> GregorianDate {
        GregorianDate::from(*self)
    }
}

impl GregorianFields for NaiveDateTime {
    fn gregorian_date(&self) -> GregorianDate {
        GregorianDate::from(self.date())
    }
}

/// Uses the local (wall-clock) date of the zoned value.
impl<Tz: TimeZone> GregorianFields for DateTime<Tz> {
    fn gregorian_date(&self) -> GregorianDate {
        GregorianDate::from(self.naive_local().date())
    }
}

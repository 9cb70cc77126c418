//! Free-function entry points for conversion and date-object construction.

use crate::gregorian::{GregorianDate, gregorian_to_jdn, jdn_to_gregorian};
use crate::jalaali::{JalaaliDate, jalaali_to_jdn, jdn_to_jalaali};
use crate::moment::{CalendarMoment, GregorianFields, TimeOfDay};

/// Converts a Gregorian date to the Jalaali calendar.
///
/// The input is not validated; callers supply a real Gregorian date.
///
/// # Example
///
/// ```
/// use jalaali_calendar::{JalaaliDate, to_jalaali};
///
/// assert_eq!(to_jalaali(1981, 8, 17), JalaaliDate::new(1360, 5, 26));
/// ```
pub fn to_jalaali(gy: i32, gm: i32, gd: i32) -> JalaaliDate {
    jdn_to_jalaali(gregorian_to_jdn(gy, gm, gd))
}

/// Converts anything exposing Gregorian year/month/day fields to the
/// Jalaali calendar.
///
/// Only the date part of the input is used; time of day is ignored.
///
/// # Example
///
/// ```
/// use jalaali_calendar::{CalendarMoment, JalaaliDate, to_jalaali_from};
///
/// let moment = CalendarMoment::new(2013, 1, 10, 18, 30, 0, 0);
/// assert_eq!(to_jalaali_from(&moment), JalaaliDate::new(1391, 10, 21));
/// ```
pub fn to_jalaali_from<T: GregorianFields + ?Sized>(value: &T) -> JalaaliDate {
    let GregorianDate { gy, gm, gd } = value.gregorian_date();
    to_jalaali(gy, gm, gd)
}

/// Converts a Jalaali date to the Gregorian calendar.
///
/// The input is not validated; check [`is_valid_jalaali_date`](crate::is_valid_jalaali_date)
/// first when the date comes from an untrusted source.
///
/// # Example
///
/// ```
/// use jalaali_calendar::{GregorianDate, to_gregorian};
///
/// assert_eq!(to_gregorian(1391, 10, 21), GregorianDate::new(2013, 1, 10));
/// ```
pub fn to_gregorian(jy: i32, jm: i32, jd: i32) -> GregorianDate {
    jdn_to_gregorian(jalaali_to_jdn(jy, jm, jd))
}

/// Builds the Gregorian moment at midnight of a Jalaali date.
pub fn jalaali_to_date_object(jy: i32, jm: i32, jd: i32) -> CalendarMoment {
    jalaali_to_date_object_at(jy, jm, jd, TimeOfDay::MIDNIGHT)
}

/// Builds the Gregorian moment of a Jalaali date at the given time of day.
///
/// Time fields pass through unvalidated and roll over into the date the
/// way [`CalendarMoment::new`] does.
///
/// # Example
///
/// ```
/// use jalaali_calendar::{TimeOfDay, jalaali_to_date_object_at};
///
/// let time = TimeOfDay::new(25, 52, 100, 0);
/// let m = jalaali_to_date_object_at(1397, 5, 13, time);
/// assert_eq!((m.year(), m.month(), m.day()), (2018, 8, 5));
/// assert_eq!((m.hour(), m.minute(), m.second()), (1, 53, 40));
/// ```
pub fn jalaali_to_date_object_at(jy: i32, jm: i32, jd: i32, time: TimeOfDay) -> CalendarMoment {
    CalendarMoment::from_date(to_gregorian(jy, jm, jd), time)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_jalaali_vectors() {
        assert_eq!(to_jalaali(1981, 8, 17), JalaaliDate::new(1360, 5, 26));
        assert_eq!(to_jalaali(2013, 1, 10), JalaaliDate::new(1391, 10, 21));
        assert_eq!(to_jalaali(2014, 8, 4), JalaaliDate::new(1393, 5, 13));
    }

    #[test]
    fn to_gregorian_vectors() {
        assert_eq!(to_gregorian(1360, 5, 26), GregorianDate::new(1981, 8, 17));
        assert_eq!(to_gregorian(1391, 10, 21), GregorianDate::new(2013, 1, 10));
        assert_eq!(to_gregorian(1393, 5, 13), GregorianDate::new(2014, 8, 4));
    }

    #[test]
    fn to_jalaali_from_shapes() {
        let expected = JalaaliDate::new(1360, 5, 26);
        assert_eq!(to_jalaali_from(&(1981, 8, 17)), expected);
        assert_eq!(to_jalaali_from(&GregorianDate::new(1981, 8, 17)), expected);
        assert_eq!(
            to_jalaali_from(&CalendarMoment::new(1981, 8, 17, 0, 0, 0, 0)),
            expected
        );
    }

    #[test]
    fn date_object_midnight() {
        let m = jalaali_to_date_object(1400, 4, 30);
        assert_eq!(m.date(), GregorianDate::new(2021, 7, 21));
        assert_eq!(m.time(), TimeOfDay::MIDNIGHT);
    }

    #[test]
    fn date_object_with_time() {
        let m = jalaali_to_date_object_at(1399, 12, 20, TimeOfDay::new(23, 20, 0, 0));
        assert_eq!(m, CalendarMoment::new(2021, 3, 10, 23, 20, 0, 0));
    }
}

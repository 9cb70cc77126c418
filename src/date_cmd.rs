//! Conversion commands: to-jalaali, to-gregorian, today, date-object, jdn.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span, warn};

use jalaali_calendar::{
    CalendarError, GregorianDate, JalaaliDate, TimeOfDay, jalaali_to_date_object_at,
    to_jalaali_from,
};

use crate::cli::{DateObjectArgs, GregorianArgs, JalaaliArgs};
use crate::output::{Render, Settings, render};

/// Julian Day Number of a Jalaali date, as printed by `jdn`.
#[derive(Debug, Serialize)]
pub struct JdnReport {
    #[serde(flatten)]
    pub date: JalaaliDate,
    pub jdn: i64,
}

impl Render for JdnReport {
    fn text(&self) -> String {
        self.jdn.to_string()
    }
}

/// Passes a validation result through, rejecting invalid dates in strict
/// mode and warning otherwise.
fn checked<T: Render + Copy>(
    date: T,
    validated: Result<T, CalendarError>,
    calendar: &str,
    settings: &Settings,
) -> Result<T> {
    match validated {
        Ok(date) => Ok(date),
        Err(e) if settings.strict => {
            Err(e).with_context(|| format!("invalid {calendar} date {}", date.text()))
        }
        Err(e) => {
            warn!(date = %date.text(), error = %e, "converting invalid {calendar} date");
            Ok(date)
        }
    }
}

fn check_jalaali(args: &JalaaliArgs, settings: &Settings) -> Result<JalaaliDate> {
    let date = JalaaliDate::new(args.year, args.month, args.day);
    checked(date, date.validate(), "jalaali", settings)
}

fn check_gregorian(args: &GregorianArgs, settings: &Settings) -> Result<GregorianDate> {
    let date = GregorianDate::new(args.year, args.month, args.day);
    checked(date, date.validate(), "gregorian", settings)
}

/// Gregorian -> Jalaali.
pub fn to_jalaali(args: &GregorianArgs, settings: &Settings) -> Result<String> {
    let _cmd = info_span!("to_jalaali").entered();
    let g = check_gregorian(args, settings)?;
    let j = jalaali_calendar::to_jalaali(g.gy, g.gm, g.gd);
    info!(from = %g.text(), to = %j.text(), "converted");
    render(&j, settings)
}

/// Jalaali -> Gregorian.
pub fn to_gregorian(args: &JalaaliArgs, settings: &Settings) -> Result<String> {
    let _cmd = info_span!("to_gregorian").entered();
    let j = check_jalaali(args, settings)?;
    let g = jalaali_calendar::to_gregorian(j.jy, j.jm, j.jd);
    info!(from = %j.text(), to = %g.text(), "converted");
    render(&g, settings)
}

/// Today's local date in the Jalaali calendar.
pub fn today(settings: &Settings) -> Result<String> {
    let _cmd = info_span!("today").entered();
    let now = chrono::Local::now();
    let j = to_jalaali_from(&now);
    info!(local = %now.date_naive(), jalaali = %j.text(), "converted local date");
    render(&j, settings)
}

/// Jalaali date plus time of day -> Gregorian moment.
pub fn date_object(args: &DateObjectArgs, settings: &Settings) -> Result<String> {
    let _cmd = info_span!("date_object").entered();
    let j = check_jalaali(&args.date, settings)?;
    let time = TimeOfDay::new(args.hour, args.minute, args.second, args.millisecond);
    let moment = jalaali_to_date_object_at(j.jy, j.jm, j.jd, time);
    info!(from = %j.text(), ?time, to = %moment.text(), "built moment");
    render(&moment, settings)
}

/// Jalaali date -> Julian Day Number.
pub fn jdn(args: &JalaaliArgs, settings: &Settings) -> Result<String> {
    let _cmd = info_span!("jdn").entered();
    let date = check_jalaali(args, settings)?;
    let report = JdnReport {
        date,
        jdn: date.jdn(),
    };
    render(&report, settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;

    fn gregorian(year: i32, month: i32, day: i32) -> GregorianArgs {
        GregorianArgs { year, month, day }
    }

    fn jalaali(year: i32, month: i32, day: i32) -> JalaaliArgs {
        JalaaliArgs { year, month, day }
    }

    fn lenient() -> Settings {
        Settings {
            strict: false,
            ..Settings::default()
        }
    }

    #[test]
    fn to_jalaali_text() {
        let out = to_jalaali(&gregorian(1981, 8, 17), &Settings::default()).unwrap();
        assert_eq!(out, "1360/05/26");
    }

    #[test]
    fn to_gregorian_text() {
        let out = to_gregorian(&jalaali(1391, 10, 21), &Settings::default()).unwrap();
        assert_eq!(out, "2013-01-10");
    }

    #[test]
    fn to_gregorian_json() {
        let settings = Settings {
            format: OutputFormat::Json,
            ..Settings::default()
        };
        let out = to_gregorian(&jalaali(1393, 5, 13), &settings).unwrap();
        assert_eq!(out, r#"{"gy":2014,"gm":8,"gd":4}"#);
    }

    #[test]
    fn strict_rejects_invalid_jalaali() {
        let err = to_gregorian(&jalaali(1393, 12, 30), &Settings::default()).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("invalid jalaali date 1393/12/30"), "{msg}");
        assert!(msg.contains("max 29"), "{msg}");
    }

    #[test]
    fn strict_rejects_invalid_gregorian() {
        let err = to_jalaali(&gregorian(2023, 2, 29), &Settings::default()).unwrap_err();
        assert!(format!("{err:#}").contains("invalid gregorian date 2023-02-29"));
    }

    #[test]
    fn lenient_converts_anyway() {
        // 30 Esfand 1393 does not exist; the math lands on Nowruz 1394.
        let out = to_gregorian(&jalaali(1393, 12, 30), &lenient()).unwrap();
        assert_eq!(out, "2015-03-21");
    }

    #[test]
    fn date_object_rolls_over() {
        let args = DateObjectArgs {
            date: jalaali(1397, 5, 13),
            hour: 25,
            minute: 52,
            second: 100,
            millisecond: 0,
        };
        let out = date_object(&args, &Settings::default()).unwrap();
        assert_eq!(out, "2018-08-05T01:53:40.000");
    }

    #[test]
    fn date_object_midnight() {
        let args = DateObjectArgs {
            date: jalaali(1400, 4, 30),
            hour: 0,
            minute: 0,
            second: 0,
            millisecond: 0,
        };
        let out = date_object(&args, &Settings::default()).unwrap();
        assert_eq!(out, "2021-07-21T00:00:00.000");
    }

    #[test]
    fn jdn_text_and_json() {
        let out = jdn(&jalaali(1348, 10, 11), &Settings::default()).unwrap();
        assert_eq!(out, "2440588");

        let settings = Settings {
            format: OutputFormat::Json,
            ..Settings::default()
        };
        let out = jdn(&jalaali(1348, 10, 11), &settings).unwrap();
        assert_eq!(out, r#"{"jy":1348,"jm":10,"jd":11,"jdn":2440588}"#);
    }

    #[test]
    fn today_is_a_valid_date() {
        let out = today(&Settings {
            format: OutputFormat::Json,
            ..Settings::default()
        })
        .unwrap();
        let date: JalaaliDate = serde_json::from_str(&out).unwrap();
        assert!(date.is_valid(), "{date:?}");
    }
}

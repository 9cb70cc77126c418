//! Calendar queries: is-valid, is-leap, month-length.

use anyhow::{Result, bail};
use serde::Serialize;
use tracing::{debug, info_span};

use jalaali_calendar::{is_leap_jalaali_year, is_valid_jalaali_date, jalaali_month_length};

use crate::cli::{JalaaliArgs, MonthArgs, YearArgs};
use crate::output::{Render, Settings, render};

#[derive(Debug, Serialize)]
pub struct ValidityReport {
    pub jy: i32,
    pub jm: i32,
    pub jd: i32,
    pub valid: bool,
}

impl Render for ValidityReport {
    fn text(&self) -> String {
        self.valid.to_string()
    }
}

#[derive(Debug, Serialize)]
pub struct LeapReport {
    pub jy: i32,
    pub leap: bool,
}

impl Render for LeapReport {
    fn text(&self) -> String {
        self.leap.to_string()
    }
}

#[derive(Debug, Serialize)]
pub struct MonthLengthReport {
    pub jy: i32,
    pub jm: i32,
    pub days: i32,
}

impl Render for MonthLengthReport {
    fn text(&self) -> String {
        self.days.to_string()
    }
}

pub fn is_valid(args: &JalaaliArgs, settings: &Settings) -> Result<String> {
    let _cmd = info_span!("is_valid").entered();
    let report = ValidityReport {
        jy: args.year,
        jm: args.month,
        jd: args.day,
        valid: is_valid_jalaali_date(args.year, args.month, args.day),
    };
    debug!(?report, "checked");
    render(&report, settings)
}

pub fn is_leap(args: &YearArgs, settings: &Settings) -> Result<String> {
    let _cmd = info_span!("is_leap").entered();
    let report = LeapReport {
        jy: args.year,
        leap: is_leap_jalaali_year(args.year),
    };
    debug!(?report, "checked");
    render(&report, settings)
}

/// Strict mode rejects months outside 1..=12. Otherwise the library's
/// fallthrough applies: months up to 6 count 31 days and months past 11
/// count as Esfand.
pub fn month_length(args: &MonthArgs, settings: &Settings) -> Result<String> {
    let _cmd = info_span!("month_length").entered();
    if settings.strict && !(1..=12).contains(&args.month) {
        bail!("invalid month: {} (must be 1..=12)", args.month);
    }
    let report = MonthLengthReport {
        jy: args.year,
        jm: args.month,
        days: jalaali_month_length(args.year, args.month),
    };
    debug!(?report, "computed");
    render(&report, settings)
}

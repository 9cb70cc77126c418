//! # jalaali-calendar
//!
//! Conversion between the Gregorian and Jalaali (Solar Hijri) calendars.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["GregorianDate"] -->|"gregorian_to_jdn()"| B["JDN (i64)"]
//!     B -->|"jdn_to_gregorian()"| A
//!     C["JalaaliDate"] -->|"jalaali_to_jdn()"| B
//!     B -->|"jdn_to_jalaali()"| C
//!     D["BREAKS table"] -->|"year_info()"| C
//!     E["CalendarMoment / chrono"] -->|"GregorianFields"| A
//!     C -->|"jalaali_to_date_object()"| E
//! ```
//!
//! Every conversion goes through a Julian Day Number. The Jalaali side
//! locates each year in a fixed table of intercalation break points, which
//! covers Jalaali years -61..=3177.
//!
//! ## Quick Start
//!
//! ```
//! use jalaali_calendar::{
//!     GregorianDate, JalaaliDate, is_leap_jalaali_year, is_valid_jalaali_date,
//!     jalaali_month_length, jalaali_to_date_object, to_gregorian, to_jalaali,
//! };
//!
//! assert_eq!(to_jalaali(2013, 1, 10), JalaaliDate::new(1391, 10, 21));
//! assert_eq!(to_gregorian(1391, 10, 21), GregorianDate::new(2013, 1, 10));
//!
//! assert!(is_leap_jalaali_year(1395));
//! assert_eq!(jalaali_month_length(1395, 12), 30);
//! assert!(!is_valid_jalaali_date(1393, 12, 30));
//!
//! let m = jalaali_to_date_object(1400, 4, 30);
//! assert_eq!(m.date(), GregorianDate::new(2021, 7, 21));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `breaks` | Intercalation break points and per-year lookup |
//! | `gregorian` | Gregorian dates and Gregorian ↔ JDN |
//! | `jalaali` | Jalaali dates, leap rule, month lengths, Jalaali ↔ JDN |
//! | `moment` | Normalized Gregorian moments and input adapters |
//! | `convert` | Free-function conversion entry points |
//! | `error` | Error types |

mod breaks;
mod convert;
mod error;
mod gregorian;
mod jalaali;
mod moment;

pub use breaks::{MAX_YEAR, MIN_YEAR};
pub use convert::{
    jalaali_to_date_object, jalaali_to_date_object_at, to_gregorian, to_jalaali, to_jalaali_from,
};
pub use error::CalendarError;
pub use gregorian::{
    GregorianDate, gregorian_month_length, gregorian_to_jdn, is_leap_gregorian_year,
    is_valid_gregorian_date, jdn_to_gregorian,
};
pub use jalaali::{
    JalaaliDate, is_leap_jalaali_year, is_valid_jalaali_date, jalaali_month_length,
    jalaali_to_jdn, jdn_to_jalaali,
};
pub use moment::{CalendarMoment, GregorianFields, TimeOfDay};

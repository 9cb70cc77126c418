//! Error types for the jalaali-calendar crate.

/// Error type for the checked operations of the jalaali-calendar crate.
///
/// The conversion functions themselves are total and never return this;
/// it comes from the `validate` methods and from handing a moment to
/// `chrono`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a Jalaali year is outside the break-point table.
    #[error("jalaali year {year} is outside the supported range -61..=3177")]
    YearOutOfRange {
        /// The year that was provided.
        year: i32,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: i32,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: i32,
        /// The month for which the day is invalid.
        month: i32,
        /// The maximum valid day for the given month.
        max_day: i32,
    },

    /// Returned when a moment cannot be represented as a `chrono` value.
    #[error("moment in year {year} is out of chrono's range")]
    MomentOutOfRange {
        /// Year of the moment.
        year: i32,
    },
}

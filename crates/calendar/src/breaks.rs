//! Intercalation break points of the Jalaali calendar.
//!
//! The Jalaali leap-year pattern is not a fixed modular rule. It follows
//! 33-year cycles (occasionally 29- or 37-year ones) whose phase shifts at
//! the years listed in [`BREAKS`]. Everything else in the crate derives its
//! year boundaries from [`year_info`].

/// Jalaali years at which the intercalation cycle changes.
///
/// The last entry is exclusive: the table covers Jalaali years
/// `BREAKS[0]..BREAKS[19]`.
#[rustfmt::skip]
pub(crate) const BREAKS: [i64; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181,
    1210, 1635, 2060, 2097, 2192, 2262, 2324, 2394, 2456, 3178,
];

/// First Jalaali year covered by the break-point table.
pub const MIN_YEAR: i32 = BREAKS[0] as i32;

/// Last Jalaali year covered by the break-point table.
pub const MAX_YEAR: i32 = BREAKS[BREAKS.len() - 1] as i32 - 1;

/// Offset between a Jalaali year and the Gregorian year in which it starts.
pub(crate) const GREGORIAN_OFFSET: i64 = 621;

/// Where a Jalaali year sits relative to the Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct YearInfo {
    /// Years since the last leap year in the 4/5-year sub-cycle.
    ///
    /// `0` means the year itself is leap, `1` means the previous year was.
    pub leap: i64,
    /// Gregorian year in which the Jalaali year begins.
    pub gy: i64,
    /// Day of March (of `gy`) on which the Jalaali year begins.
    pub march: i64,
}

/// Locates `jy` in the break table.
///
/// Returns the break year at or before `jy` and the length of the interval
/// it opens. Years before the table resolve to the first interval and years
/// after it to the last one; the results are then meaningless but finite.
fn locate(jy: i64) -> (i64, i64) {
    let mut jp = BREAKS[0];
    let mut jump = 0;
    for &jm in &BREAKS[1..] {
        jump = jm - jp;
        if jy < jm {
            break;
        }
        jp = jm;
    }
    (jp, jump)
}

/// Position of `jy` in its leap sub-cycle (`0` = leap year).
pub(crate) fn leap_remainder(jy: i64) -> i64 {
    let (jp, jump) = locate(jy);
    sub_cycle_position(jy - jp, jump)
}

fn sub_cycle_position(mut n: i64, jump: i64) -> i64 {
    if jump - n < 6 {
        n = n - jump + (jump + 4) / 33 * 33;
    }
    let leap = ((n + 1) % 33 - 1) % 4;
    if leap == -1 { 4 } else { leap }
}

/// Computes the leap position, starting Gregorian year and Nowruz day of
/// March for Jalaali year `jy`.
pub(crate) fn year_info(jy: i64) -> YearInfo {
    let gy = jy + GREGORIAN_OFFSET;

    // Leap days accumulated by the Jalaali calendar since the epoch,
    // interval by interval up to the one holding `jy`.
    let mut leap_j = -14;
    let mut jp = BREAKS[0];
    let mut jump = 0;
    for &jm in &BREAKS[1..] {
        jump = jm - jp;
        if jy < jm {
            break;
        }
        leap_j += jump / 33 * 8 + jump % 33 / 4;
        jp = jm;
    }
    let n = jy - jp;
    leap_j += n / 33 * 8 + (n % 33 + 3) / 4;
    if jump % 33 == 4 && jump - n == 4 {
        leap_j += 1;
    }

    let leap_g = gy / 4 - (gy / 100 + 1) * 3 / 4 - 150;
    let march = 20 + leap_j - leap_g;

    YearInfo {
        leap: sub_cycle_position(n, jump),
        gy,
        march,
    }
}

//! Tabular Hijri (Islamic) calendar arithmetic
//!
//! This module implements the civil tabular Islamic calendar: 12 months
//! alternating 30 and 29 days, with a 30th day added to Dhu al-Hijjah in the
//! 11 leap years of every 30-year cycle.
//!
//! ## Variant
//!
//! Several tabular variants are in use. This one uses:
//! - the civil ("Friday") epoch: 1 Muharram 1 AH = JDN 1948440
//!   (16 July 622 Julian, 19 July 622 proleptic Gregorian)
//! - the leap rule `(11 * year + 14) mod 30 < 11`, which makes years
//!   2, 5, 7, 10, 13, 16, 18, 21, 24, 26 and 29 of each cycle leap years
//!
//! Mixing a different epoch or leap pattern shifts results by a day, so both
//! are pinned by the reference pairs in [`crate::validation`].
//!
//! Conversions never approximate: whole 30-year cycles are skipped with a
//! single division, then at most 29 years and 11 months are walked using the
//! exact year and month lengths.

/// Julian Day Number of 1 Muharram 1 AH.
pub const EPOCH_JDN: i64 = 1_948_440;

/// Days in a full 30-year leap cycle (19 common years and 11 leap years).
pub const CYCLE_DAYS: i64 = 10_631;

/// Years in a leap cycle.
pub const CYCLE_YEARS: i32 = 30;

/// Latest Hijri year accepted.
pub const MAX_YEAR: i32 = 1_000_000;

/// JDN of 30 Dhu al-Hijjah [`MAX_YEAR`] (a leap year).
pub(crate) const MAX_JDN: i64 = 356_315_106;

/// Month lengths for a common year; Dhu al-Hijjah gains a day in leap years.
const MONTH_LENGTHS: [u8; 12] = [30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29];

/// Returns true if the given Hijri year is a leap year.
pub fn is_hijri_leap_year(year: i32) -> bool {
    (11 * year as i64 + 14).rem_euclid(30) < 11
}

/// Returns the number of days in a Hijri month.
///
/// Months outside 1-12 have length 0; range-checking is the caller's job.
pub fn month_length(year: i32, month: u32) -> u8 {
    match month {
        12 if is_hijri_leap_year(year) => 30,
        1..=12 => MONTH_LENGTHS[(month - 1) as usize],
        _ => 0,
    }
}

/// Returns the number of days in a Hijri year: 355 for leap years, 354 otherwise.
pub fn year_length(year: i32) -> u16 {
    if is_hijri_leap_year(year) {
        355
    } else {
        354
    }
}

/// Returns true if (year, month, day) names a valid tabular Hijri date.
pub fn is_valid_date(year: i32, month: u32, day: u32) -> bool {
    (1..=MAX_YEAR).contains(&year) && day >= 1 && day <= month_length(year, month) as u32
}

/// Days from 1 Muharram 1 AH to 1 Muharram of `year`.
fn days_before_year(year: i32) -> i64 {
    let elapsed = year - 1;
    let cycles = elapsed / CYCLE_YEARS;

    let mut days = cycles as i64 * CYCLE_DAYS;
    for y in (cycles * CYCLE_YEARS + 1)..year {
        days += year_length(y) as i64;
    }
    days
}

/// Days from 1 Muharram to the first day of `month` in `year`.
fn days_before_month(year: i32, month: u32) -> i64 {
    (1..month).map(|m| month_length(year, m) as i64).sum()
}

/// Convert a Hijri date to a Julian Day Number.
///
/// The caller is responsible for passing a valid date; see [`is_valid_date`].
pub fn to_julian_day(year: i32, month: u32, day: u32) -> i64 {
    EPOCH_JDN + days_before_year(year) + days_before_month(year, month) + day as i64 - 1
}

/// Convert a Julian Day Number to a Hijri (year, month, day).
///
/// Returns `None` outside `EPOCH_JDN..=MAX_JDN`.
pub fn from_julian_day(jdn: i64) -> Option<(i32, u32, u32)> {
    if !(EPOCH_JDN..=MAX_JDN).contains(&jdn) {
        return None;
    }
    let days = jdn - EPOCH_JDN;

    // Skip whole cycles
    let cycles = days / CYCLE_DAYS;
    let mut remaining = days % CYCLE_DAYS;
    let mut year = (cycles * CYCLE_YEARS as i64 + 1) as i32;

    // Find the year
    loop {
        let len = year_length(year) as i64;
        if remaining < len {
            break;
        }
        remaining -= len;
        year += 1;
    }

    // Find the month
    let mut month = 1u32;
    loop {
        let len = month_length(year, month) as i64;
        if remaining < len {
            break;
        }
        remaining -= len;
        month += 1;
    }

    Some((year, month, remaining as u32 + 1))
}

//! Proleptic Gregorian calendar arithmetic
//!
//! Dates are mapped to Julian Day Numbers (JDN), a continuous count of days
//! where JDN 0 is 1 January 4713 BCE in the proleptic Julian calendar. The
//! JDN is the pivot for every conversion in this crate:
//! - JDN 2451545 = 1 January 2000 (a Saturday)
//! - JDN 1948440 = 19 July 622 (Gregorian), the Hijri epoch
//!
//! All arithmetic is integer. Year 0 exists (astronomical numbering) and
//! the formulas stay valid back to year -4799.

/// Days in each month for non-leap years
const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Earliest year the JDN formulas accept.
pub const MIN_YEAR: i32 = -4799;

/// Latest year accepted; keeps every intermediate value well inside `i64`.
pub const MAX_YEAR: i32 = 1_000_000;

/// JDN of 1 January [`MIN_YEAR`].
pub(crate) const MIN_JDN: i64 = -31738;

/// JDN of 31 December [`MAX_YEAR`].
pub(crate) const MAX_JDN: i64 = 366_963_925;

/// Returns true if the given year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Returns the number of days in a given month/year.
///
/// Returns 0 for a month outside 1-12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        1..=12 => DAYS_IN_MONTH[(month - 1) as usize],
        _ => 0,
    }
}

/// Returns true if (year, month, day) names a real Gregorian date in the
/// supported range.
pub fn is_valid_date(year: i32, month: u32, day: u32) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&year) && day >= 1 && day <= days_in_month(year, month)
}

/// Convert a Gregorian date to a Julian Day Number.
///
/// The caller is responsible for passing a valid date; see [`is_valid_date`].
pub fn to_julian_day(year: i32, month: u32, day: u32) -> i64 {
    // Shift the year so it starts in March; February becomes the last month
    // and the leap day falls at the end of the shifted year.
    let a = (14 - month as i64) / 12;
    let y = year as i64 + 4800 - a;
    let m = month as i64 + 12 * a - 3;

    day as i64 + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
}

/// Convert a Julian Day Number to a Gregorian (year, month, day).
///
/// The caller is responsible for keeping `jdn` within `MIN_JDN..=MAX_JDN`.
pub fn from_julian_day(jdn: i64) -> (i32, u32, u32) {
    let a = jdn + 32044;
    let b = (4 * a + 3) / 146097;
    let c = a - 146097 * b / 4;
    let d = (4 * c + 3) / 1461;
    let e = c - 1461 * d / 4;
    let m = (5 * e + 2) / 153;

    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = 100 * b + d - 4800 + m / 10;

    (year as i32, month as u32, day as u32)
}

/// Day of the week for a Julian Day Number: 0 = Sunday ... 6 = Saturday.
pub fn weekday_from_julian_day(jdn: i64) -> u32 {
    (jdn + 1).rem_euclid(7) as u32
}

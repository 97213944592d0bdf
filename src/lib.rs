//! hijri-engine - Gregorian / tabular Hijri calendar conversion
//!
//! This crate converts dates between the Gregorian calendar and the civil
//! tabular Hijri calendar through Julian Day Numbers, formats them in Arabic
//! or English, describes them relative to today, and locates Ramadan and the
//! other fixed Hijri observances. It carries its own validation harness of
//! pinned reference dates and round-trip sweeps.
//!
//! Everything is pure integer arithmetic on calendar dates: no timezones,
//! no shared state, and "today" is always passed in by the caller.

pub mod convert;
pub mod date;
pub mod error;
pub mod gregorian;
pub mod hijri;
pub mod options;
pub mod religious;
pub mod validation;

#[cfg(feature = "chrono")]
pub mod clock;

pub mod formatter;
mod locale;
pub mod parser;

pub use convert::{
    convert_system_date, date_to_gregorian, date_to_hijri, gregorian_to_hijri,
    gregorian_to_julian_day, hijri_to_gregorian, hijri_to_julian_day, julian_day_to_gregorian,
    julian_day_to_hijri, month_info, ConversionResult, MonthInfo, SystemConversion,
};
pub use date::{CalendarDate, DateParts, GregorianDate, HijriDate};
pub use error::{ConversionError, ParseError};
pub use formatter::{
    format_date, format_gregorian_date, format_gregorian_with, format_hijri_date,
    format_hijri_with, relative_date_description,
};
pub use hijri::{is_hijri_leap_year, month_length};
pub use locale::Locale;
pub use options::{CalendarSystem, DateStyle, FormatOptions, Language, Numerals};
pub use parser::{parse_date, parse_date_parts};
pub use religious::{
    current_dates, days_until_ramadan, is_currently_ramadan, CurrentDates, ReligiousEvent,
};
pub use validation::{benchmark_conversions, run_validation_suite, test_conversion_accuracy};

/// Convert a date string from one calendar to another and format the result.
///
/// A convenience over [`parse_date_parts`] and [`convert_system_date`].
///
/// # Examples
///
/// ```
/// use hijri_engine::{convert_str, CalendarSystem, DateStyle, FormatOptions, Language};
///
/// let opts = FormatOptions::new(Language::En, DateStyle::Full);
/// let text = convert_str("2000-01-01", CalendarSystem::Gregorian, CalendarSystem::Hijri, &opts).unwrap();
/// assert_eq!(text, "Saturday, 24 Ramadan 1420");
/// ```
pub fn convert_str(
    input: &str,
    from: CalendarSystem,
    to: CalendarSystem,
    opts: &FormatOptions,
) -> Result<String, ParseError> {
    let parts = parse_date_parts(input)?;
    let converted = convert_system_date(parts, from, to, opts)?;
    Ok(converted.formatted)
}

/// [`convert_str`] with default options.
pub fn convert_str_default(
    input: &str,
    from: CalendarSystem,
    to: CalendarSystem,
) -> Result<String, ParseError> {
    convert_str(input, from, to, &FormatOptions::default())
}

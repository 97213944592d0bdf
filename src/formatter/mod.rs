//! Bilingual date formatting
//!
//! Names come from the locale tables of the requested language; nothing
//! else affects the output, so formatting the same date with the same
//! options always yields the same string.

mod date;
pub mod relative;

pub use relative::{describe_day_difference, relative_date_description};

use crate::date::{CalendarDate, GregorianDate, HijriDate};
use crate::locale::Locale;
use crate::options::{DateStyle, FormatOptions, Language};

use self::date::{render, DateFields};

/// Format a Hijri date.
///
/// # Examples
///
/// ```
/// use hijri_engine::{format_hijri_date, DateStyle, HijriDate, Language};
///
/// let date = HijriDate::new(1446, 9, 15).unwrap();
/// assert_eq!(format_hijri_date(&date, DateStyle::Short, Language::En), "15 Ramadan");
/// assert_eq!(format_hijri_date(&date, DateStyle::Short, Language::Ar), "15 رمضان");
/// ```
pub fn format_hijri_date(date: &HijriDate, style: DateStyle, language: Language) -> String {
    format_hijri_with(date, &FormatOptions::new(language, style))
}

/// Format a Gregorian date.
pub fn format_gregorian_date(date: &GregorianDate, style: DateStyle, language: Language) -> String {
    format_gregorian_with(date, &FormatOptions::new(language, style))
}

/// Format a Hijri date with full options.
pub fn format_hijri_with(date: &HijriDate, opts: &FormatOptions) -> String {
    let fields = DateFields {
        year: date.year(),
        month: date.month(),
        day: date.day(),
        month_name: date.month_name_in(opts.language),
        day_name: date.day_of_week_name_in(opts.language),
    };
    render(&fields, opts.style, Locale::for_language(opts.language), opts.numerals)
}

/// Format a Gregorian date with full options.
pub fn format_gregorian_with(date: &GregorianDate, opts: &FormatOptions) -> String {
    let fields = DateFields {
        year: date.year(),
        month: date.month(),
        day: date.day(),
        month_name: date.month_name_in(opts.language),
        day_name: date.day_of_week_name_in(opts.language),
    };
    render(&fields, opts.style, Locale::for_language(opts.language), opts.numerals)
}

/// Format a date in whichever calendar it is expressed in.
pub fn format_date(date: &CalendarDate, opts: &FormatOptions) -> String {
    match date {
        CalendarDate::Gregorian(d) => format_gregorian_with(d, opts),
        CalendarDate::Hijri(d) => format_hijri_with(d, opts),
    }
}

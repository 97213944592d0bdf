//! Date rendering for the fixed presentation styles

use crate::locale::Locale;
use crate::options::{DateStyle, Numerals};

/// The pieces of a date that the styles draw from, already localized.
pub(crate) struct DateFields {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub month_name: &'static str,
    pub day_name: &'static str,
}

/// Render date fields in the given style.
pub(crate) fn render(
    fields: &DateFields,
    style: DateStyle,
    locale: &Locale,
    numerals: Numerals,
) -> String {
    let day = localize_digits(&fields.day.to_string(), numerals);
    let year = localize_digits(&fields.year.to_string(), numerals);

    match style {
        DateStyle::Short => format!("{} {}", day, fields.month_name),
        DateStyle::Full => format!(
            "{}{}{} {} {}",
            fields.day_name, locale.weekday_separator, day, fields.month_name, year
        ),
        DateStyle::MonthYear => format!("{} {}", fields.month_name, year),
        DateStyle::Numeric => {
            let numeric = format!("{:02}/{:02}/{}", fields.day, fields.month, fields.year);
            localize_digits(&numeric, numerals)
        }
    }
}

/// Replace ASCII digits with the requested digit set.
pub(crate) fn localize_digits(s: &str, numerals: Numerals) -> String {
    match numerals {
        Numerals::Latin => s.to_string(),
        Numerals::ArabicIndic => s
            .chars()
            .map(|c| match c {
                '0'..='9' => char::from_u32(0x0660 + (c as u32 - '0' as u32)).unwrap_or(c),
                _ => c,
            })
            .collect(),
    }
}

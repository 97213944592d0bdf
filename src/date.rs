//! Calendar date value types.
//!
//! [`GregorianDate`] and [`HijriDate`] can only hold valid dates: the
//! constructors check the calendar's month lengths and the conversions in
//! [`crate::convert`] only ever produce valid values. Both are small `Copy`
//! types carrying their weekday, with month and weekday names looked up from
//! the built-in locale tables.

use std::fmt;

use crate::error::ConversionError;
use crate::options::{CalendarSystem, Language};
use crate::{gregorian, hijri, locale};

/// An unvalidated (year, month, day) triple as entered by a caller.
///
/// The calendar it refers to is supplied separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateParts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DateParts {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        DateParts { year, month, day }
    }
}

impl From<(i32, u32, u32)> for DateParts {
    fn from((year, month, day): (i32, u32, u32)) -> Self {
        DateParts { year, month, day }
    }
}

/// A valid date in the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "DateParts"))]
pub struct GregorianDate {
    year: i32,
    month: u32,
    day: u32,
    day_of_week: u32,
}

impl GregorianDate {
    /// Creates a Gregorian date, checking the month and day.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, ConversionError> {
        if !gregorian::is_valid_date(year, month, day) {
            return Err(ConversionError::InvalidGregorianDate { year, month, day });
        }
        Ok(Self::from_parts_unchecked(year, month, day))
    }

    /// Builds a date the caller already knows to be valid.
    pub(crate) fn from_parts_unchecked(year: i32, month: u32, day: u32) -> Self {
        let jdn = gregorian::to_julian_day(year, month, day);
        GregorianDate {
            year,
            month,
            day,
            day_of_week: gregorian::weekday_from_julian_day(jdn),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Day of the week, 0 = Sunday ... 6 = Saturday.
    pub fn day_of_week(&self) -> u32 {
        self.day_of_week
    }

    pub fn month_name(&self) -> &'static str {
        self.month_name_in(Language::En)
    }

    pub fn month_name_ar(&self) -> &'static str {
        self.month_name_in(Language::Ar)
    }

    pub fn month_name_in(&self, language: Language) -> &'static str {
        locale::gregorian_month_name(self.month, language)
    }

    pub fn day_of_week_name(&self) -> &'static str {
        self.day_of_week_name_in(Language::En)
    }

    pub fn day_of_week_name_ar(&self) -> &'static str {
        self.day_of_week_name_in(Language::Ar)
    }

    pub fn day_of_week_name_in(&self, language: Language) -> &'static str {
        locale::weekday_name(self.day_of_week, language)
    }

    /// Always true: an invalid `GregorianDate` cannot be constructed.
    pub fn is_valid(&self) -> bool {
        gregorian::is_valid_date(self.year, self.month, self.day)
    }

    pub fn to_parts(&self) -> DateParts {
        DateParts::new(self.year, self.month, self.day)
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl TryFrom<DateParts> for GregorianDate {
    type Error = ConversionError;

    fn try_from(parts: DateParts) -> Result<Self, Self::Error> {
        GregorianDate::new(parts.year, parts.month, parts.day)
    }
}

/// A valid date in the tabular Hijri calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "DateParts"))]
pub struct HijriDate {
    year: i32,
    month: u32,
    day: u32,
    day_of_week: u32,
}

impl HijriDate {
    /// Creates a Hijri date, checking the month and day against the leap rule.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, ConversionError> {
        if !hijri::is_valid_date(year, month, day) {
            return Err(ConversionError::InvalidHijriDate { year, month, day });
        }
        Ok(Self::from_parts_unchecked(year, month, day))
    }

    pub(crate) fn from_parts_unchecked(year: i32, month: u32, day: u32) -> Self {
        let jdn = hijri::to_julian_day(year, month, day);
        HijriDate {
            year,
            month,
            day,
            day_of_week: gregorian::weekday_from_julian_day(jdn),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Day of the week, 0 = Sunday ... 6 = Saturday.
    pub fn day_of_week(&self) -> u32 {
        self.day_of_week
    }

    pub fn month_name(&self) -> &'static str {
        self.month_name_in(Language::En)
    }

    pub fn month_name_ar(&self) -> &'static str {
        self.month_name_in(Language::Ar)
    }

    pub fn month_name_in(&self, language: Language) -> &'static str {
        locale::hijri_month_name(self.month, language)
    }

    pub fn day_of_week_name(&self) -> &'static str {
        self.day_of_week_name_in(Language::En)
    }

    pub fn day_of_week_name_ar(&self) -> &'static str {
        self.day_of_week_name_in(Language::Ar)
    }

    pub fn day_of_week_name_in(&self, language: Language) -> &'static str {
        locale::weekday_name(self.day_of_week, language)
    }

    /// Always true: an invalid `HijriDate` cannot be constructed.
    pub fn is_valid(&self) -> bool {
        hijri::is_valid_date(self.year, self.month, self.day)
    }

    /// Returns true if this date falls in Ramadan.
    pub fn is_ramadan(&self) -> bool {
        self.month == 9
    }

    pub fn to_parts(&self) -> DateParts {
        DateParts::new(self.year, self.month, self.day)
    }
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02} AH", self.year, self.month, self.day)
    }
}

impl TryFrom<DateParts> for HijriDate {
    type Error = ConversionError;

    fn try_from(parts: DateParts) -> Result<Self, Self::Error> {
        HijriDate::new(parts.year, parts.month, parts.day)
    }
}

/// A date in either calendar system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "system", content = "date", rename_all = "lowercase"))]
pub enum CalendarDate {
    Gregorian(GregorianDate),
    Hijri(HijriDate),
}

impl CalendarDate {
    /// Validates `parts` as a date in `system`.
    pub fn new(parts: DateParts, system: CalendarSystem) -> Result<Self, ConversionError> {
        match system {
            CalendarSystem::Gregorian => GregorianDate::try_from(parts).map(CalendarDate::Gregorian),
            CalendarSystem::Hijri => HijriDate::try_from(parts).map(CalendarDate::Hijri),
        }
    }

    pub fn system(&self) -> CalendarSystem {
        match self {
            CalendarDate::Gregorian(_) => CalendarSystem::Gregorian,
            CalendarDate::Hijri(_) => CalendarSystem::Hijri,
        }
    }

    pub fn to_parts(&self) -> DateParts {
        match self {
            CalendarDate::Gregorian(d) => d.to_parts(),
            CalendarDate::Hijri(d) => d.to_parts(),
        }
    }

    pub fn day_of_week(&self) -> u32 {
        match self {
            CalendarDate::Gregorian(d) => d.day_of_week(),
            CalendarDate::Hijri(d) => d.day_of_week(),
        }
    }

    pub fn as_gregorian(&self) -> Option<&GregorianDate> {
        match self {
            CalendarDate::Gregorian(d) => Some(d),
            CalendarDate::Hijri(_) => None,
        }
    }

    pub fn as_hijri(&self) -> Option<&HijriDate> {
        match self {
            CalendarDate::Hijri(d) => Some(d),
            CalendarDate::Gregorian(_) => None,
        }
    }
}

impl From<GregorianDate> for CalendarDate {
    fn from(d: GregorianDate) -> Self {
        CalendarDate::Gregorian(d)
    }
}

impl From<HijriDate> for CalendarDate {
    fn from(d: HijriDate) -> Self {
        CalendarDate::Hijri(d)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarDate::Gregorian(d) => fmt::Display::fmt(d, f),
            CalendarDate::Hijri(d) => fmt::Display::fmt(d, f),
        }
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for GregorianDate {
    type Error = ConversionError;

    fn try_from(date: chrono::NaiveDate) -> Result<Self, Self::Error> {
        use chrono::Datelike;
        GregorianDate::new(date.year(), date.month(), date.day())
    }
}

#[cfg(feature = "chrono")]
impl GregorianDate {
    /// Returns the equivalent chrono date, if chrono can represent it.
    pub fn to_naive_date(&self) -> Option<chrono::NaiveDate> {
        chrono::NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gregorian_new_validates() {
        assert!(GregorianDate::new(2024, 2, 29).is_ok());
        assert_eq!(
            GregorianDate::new(2023, 2, 29),
            Err(ConversionError::InvalidGregorianDate {
                year: 2023,
                month: 2,
                day: 29
            })
        );
        assert!(GregorianDate::new(2023, 4, 31).is_err());
        assert!(GregorianDate::new(2023, 0, 1).is_err());
    }

    #[test]
    fn test_hijri_new_validates() {
        assert!(HijriDate::new(1445, 12, 30).is_ok());
        assert!(HijriDate::new(1446, 12, 30).is_err());
        assert!(HijriDate::new(1446, 9, 31).is_err());
        assert!(HijriDate::new(0, 1, 1).is_err());
    }

    #[test]
    fn test_derived_fields() {
        let g = GregorianDate::new(2000, 1, 1).unwrap();
        assert_eq!(g.day_of_week(), 6);
        assert_eq!(g.day_of_week_name(), "Saturday");
        assert_eq!(g.day_of_week_name_ar(), "السبت");
        assert_eq!(g.month_name(), "January");
        assert_eq!(g.month_name_ar(), "يناير");
        assert!(g.is_valid());

        let h = HijriDate::new(1420, 9, 24).unwrap();
        assert_eq!(h.day_of_week(), 6);
        assert_eq!(h.month_name(), "Ramadan");
        assert_eq!(h.month_name_ar(), "رمضان");
        assert!(h.is_ramadan());
    }

    #[test]
    fn test_display() {
        let g = GregorianDate::new(2025, 3, 1).unwrap();
        assert_eq!(g.to_string(), "2025-03-01");
        let h = HijriDate::new(1446, 9, 1).unwrap();
        assert_eq!(h.to_string(), "1446-09-01 AH");
    }

    #[test]
    fn test_calendar_date_new() {
        let parts = DateParts::new(1446, 12, 30);
        assert!(CalendarDate::new(parts, CalendarSystem::Hijri).is_err());
        // The same triple is a fine Gregorian date
        let date = CalendarDate::new(parts, CalendarSystem::Gregorian).unwrap();
        assert_eq!(date.system(), CalendarSystem::Gregorian);
        assert_eq!(date.to_parts(), parts);
    }
}

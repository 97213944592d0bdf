//! Gregorian <-> Hijri conversion through Julian Day Numbers.
//!
//! Every conversion goes date -> JDN -> date. Validation happens at the
//! boundary: raw parts are checked before any arithmetic, and JDNs are
//! range-checked before they are turned back into dates, so callers always
//! get a [`ConversionError`] rather than a panic or a clamped value.

use crate::date::{CalendarDate, DateParts, GregorianDate, HijriDate};
use crate::error::ConversionError;
use crate::formatter;
use crate::options::{CalendarSystem, FormatOptions};
use crate::{gregorian, hijri};

/// Result of every conversion and lookup in this crate.
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Julian Day Number of a Gregorian date.
pub fn gregorian_to_julian_day(date: &GregorianDate) -> i64 {
    gregorian::to_julian_day(date.year(), date.month(), date.day())
}

/// Julian Day Number of a Hijri date.
pub fn hijri_to_julian_day(date: &HijriDate) -> i64 {
    hijri::to_julian_day(date.year(), date.month(), date.day())
}

/// Julian Day Number of any calendar date.
pub fn julian_day(date: &CalendarDate) -> i64 {
    match date {
        CalendarDate::Gregorian(d) => gregorian_to_julian_day(d),
        CalendarDate::Hijri(d) => hijri_to_julian_day(d),
    }
}

/// Gregorian date for a Julian Day Number.
pub fn julian_day_to_gregorian(jdn: i64) -> ConversionResult<GregorianDate> {
    if !(gregorian::MIN_JDN..=gregorian::MAX_JDN).contains(&jdn) {
        return Err(ConversionError::OutOfRange { jdn });
    }
    let (year, month, day) = gregorian::from_julian_day(jdn);
    Ok(GregorianDate::from_parts_unchecked(year, month, day))
}

/// Hijri date for a Julian Day Number.
pub fn julian_day_to_hijri(jdn: i64) -> ConversionResult<HijriDate> {
    if jdn < hijri::EPOCH_JDN {
        return Err(ConversionError::BeforeHijriEpoch { jdn });
    }
    if jdn > hijri::MAX_JDN {
        return Err(ConversionError::OutOfRange { jdn });
    }
    let (year, month, day) =
        hijri::from_julian_day(jdn).ok_or(ConversionError::BeforeHijriEpoch { jdn })?;
    Ok(HijriDate::from_parts_unchecked(year, month, day))
}

/// Convert a Gregorian date to Hijri.
///
/// Fails only for dates before 1 Muharram 1 AH (19 July 622).
pub fn date_to_hijri(date: &GregorianDate) -> ConversionResult<HijriDate> {
    julian_day_to_hijri(gregorian_to_julian_day(date))
}

/// Convert a Hijri date to Gregorian.
pub fn date_to_gregorian(date: &HijriDate) -> ConversionResult<GregorianDate> {
    julian_day_to_gregorian(hijri_to_julian_day(date))
}

/// Convert raw Gregorian parts to Hijri, validating them first.
///
/// # Examples
///
/// ```
/// use hijri_engine::gregorian_to_hijri;
///
/// let h = gregorian_to_hijri(2000, 1, 1).unwrap();
/// assert_eq!((h.year(), h.month(), h.day()), (1420, 9, 24));
/// ```
pub fn gregorian_to_hijri(year: i32, month: u32, day: u32) -> ConversionResult<HijriDate> {
    let date = GregorianDate::new(year, month, day).inspect_err(|e| log::trace!("{}", e))?;
    date_to_hijri(&date)
}

/// Convert raw Hijri parts to Gregorian, validating them first.
///
/// Day 30 of Dhu al-Hijjah in a common year, month 13 and day 0 are all
/// rejected with [`ConversionError::InvalidHijriDate`].
///
/// # Examples
///
/// ```
/// use hijri_engine::hijri_to_gregorian;
///
/// let g = hijri_to_gregorian(1420, 9, 24).unwrap();
/// assert_eq!(g.to_string(), "2000-01-01");
/// assert!(hijri_to_gregorian(1446, 12, 30).is_err());
/// ```
pub fn hijri_to_gregorian(year: i32, month: u32, day: u32) -> ConversionResult<GregorianDate> {
    let date = HijriDate::new(year, month, day).inspect_err(|e| log::trace!("{}", e))?;
    date_to_gregorian(&date)
}

/// Express a date in the given calendar system.
pub fn to_system(date: &CalendarDate, system: CalendarSystem) -> ConversionResult<CalendarDate> {
    match (date, system) {
        (CalendarDate::Gregorian(_), CalendarSystem::Gregorian)
        | (CalendarDate::Hijri(_), CalendarSystem::Hijri) => Ok(*date),
        (CalendarDate::Gregorian(g), CalendarSystem::Hijri) => date_to_hijri(g).map(Into::into),
        (CalendarDate::Hijri(h), CalendarSystem::Gregorian) => {
            date_to_gregorian(h).map(Into::into)
        }
    }
}

/// The outcome of [`convert_system_date`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SystemConversion {
    /// The date in the target system.
    pub converted: CalendarDate,
    /// The converted date rendered with the caller's options.
    pub formatted: String,
}

/// Convert user-entered parts from one calendar system to another and render
/// the result.
///
/// Converting a system to itself only validates the input.
pub fn convert_system_date(
    parts: DateParts,
    from: CalendarSystem,
    to: CalendarSystem,
    opts: &FormatOptions,
) -> ConversionResult<SystemConversion> {
    let source = CalendarDate::new(parts, from).inspect_err(|e| log::trace!("{}", e))?;
    let converted = to_system(&source, to)?;
    let formatted = formatter::format_date(&converted, opts);

    Ok(SystemConversion {
        converted,
        formatted,
    })
}

/// Shape of one calendar month, for building month grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MonthInfo {
    pub system: CalendarSystem,
    pub year: i32,
    pub month: u32,
    /// Number of days in the month.
    pub days: u32,
    /// Weekday of the 1st, 0 = Sunday.
    pub first_weekday: u32,
    /// Julian Day Number of the 1st.
    pub first_julian_day: i64,
}

/// Look up the length and starting weekday of a month.
pub fn month_info(system: CalendarSystem, year: i32, month: u32) -> ConversionResult<MonthInfo> {
    let first = CalendarDate::new(DateParts::new(year, month, 1), system)?;
    let days = match system {
        CalendarSystem::Gregorian => gregorian::days_in_month(year, month),
        CalendarSystem::Hijri => hijri::month_length(year, month) as u32,
    };

    Ok(MonthInfo {
        system,
        year,
        month,
        days,
        first_weekday: first.day_of_week(),
        first_julian_day: julian_day(&first),
    })
}

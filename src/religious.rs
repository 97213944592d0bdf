//! Religious calendar events derived from the Hijri calendar.
//!
//! Every function takes "today" explicitly; use [`crate::clock::system_today`]
//! at the outermost call site to read the wall clock once and share it.

use crate::convert::{
    date_to_hijri, gregorian_to_julian_day, hijri_to_julian_day, ConversionResult,
};
use crate::date::{GregorianDate, HijriDate};
use crate::error::ConversionError;
use crate::hijri;
use crate::options::Language;

const RAMADAN: u32 = 9;

/// A consistent snapshot of one day in both calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CurrentDates {
    pub gregorian: GregorianDate,
    pub hijri: HijriDate,
}

/// Express `today` in both calendars.
pub fn current_dates(today: &GregorianDate) -> ConversionResult<CurrentDates> {
    Ok(CurrentDates {
        gregorian: *today,
        hijri: date_to_hijri(today)?,
    })
}

/// Returns true if `today` falls in Ramadan.
pub fn is_currently_ramadan(today: &GregorianDate) -> ConversionResult<bool> {
    is_event_today(ReligiousEvent::Ramadan, today)
}

/// Days from `today` to 1 Ramadan; 0 while Ramadan is under way.
pub fn days_until_ramadan(today: &GregorianDate) -> ConversionResult<u32> {
    days_until_event(ReligiousEvent::Ramadan, today)
}

/// Fixed-date events of the Hijri year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReligiousEvent {
    /// 1 Muharram
    IslamicNewYear,
    /// 10 Muharram
    Ashura,
    /// The whole of month 9
    Ramadan,
    /// 1 Shawwal
    EidAlFitr,
    /// 10 Dhu al-Hijjah
    EidAlAdha,
}

impl ReligiousEvent {
    pub const ALL: [ReligiousEvent; 5] = [
        ReligiousEvent::IslamicNewYear,
        ReligiousEvent::Ashura,
        ReligiousEvent::Ramadan,
        ReligiousEvent::EidAlFitr,
        ReligiousEvent::EidAlAdha,
    ];

    /// Hijri (month, day) on which the event starts.
    pub fn hijri_month_day(&self) -> (u32, u32) {
        match self {
            ReligiousEvent::IslamicNewYear => (1, 1),
            ReligiousEvent::Ashura => (1, 10),
            ReligiousEvent::Ramadan => (RAMADAN, 1),
            ReligiousEvent::EidAlFitr => (10, 1),
            ReligiousEvent::EidAlAdha => (12, 10),
        }
    }

    pub fn name(&self, language: Language) -> &'static str {
        match (self, language) {
            (ReligiousEvent::IslamicNewYear, Language::En) => "Islamic New Year",
            (ReligiousEvent::IslamicNewYear, Language::Ar) => "رأس السنة الهجرية",
            (ReligiousEvent::Ashura, Language::En) => "Ashura",
            (ReligiousEvent::Ashura, Language::Ar) => "عاشوراء",
            (ReligiousEvent::Ramadan, Language::En) => "Ramadan",
            (ReligiousEvent::Ramadan, Language::Ar) => "رمضان",
            (ReligiousEvent::EidAlFitr, Language::En) => "Eid al-Fitr",
            (ReligiousEvent::EidAlFitr, Language::Ar) => "عيد الفطر",
            (ReligiousEvent::EidAlAdha, Language::En) => "Eid al-Adha",
            (ReligiousEvent::EidAlAdha, Language::Ar) => "عيد الأضحى",
        }
    }

    /// Returns true if the event covers `date`.
    fn covers(&self, date: &HijriDate) -> bool {
        match self {
            ReligiousEvent::Ramadan => date.month() == RAMADAN,
            _ => (date.month(), date.day()) == self.hijri_month_day(),
        }
    }

    /// The event's start date in a given Hijri year.
    fn start_in(&self, year: i32) -> ConversionResult<HijriDate> {
        let (month, day) = self.hijri_month_day();
        HijriDate::new(year, month, day)
    }
}

/// Returns true if `event` is observed on `today`.
pub fn is_event_today(event: ReligiousEvent, today: &GregorianDate) -> ConversionResult<bool> {
    Ok(event.covers(&date_to_hijri(today)?))
}

/// Start of the next occurrence of `event`, or the current one if it is
/// under way today.
pub fn next_occurrence(event: ReligiousEvent, today: &GregorianDate) -> ConversionResult<HijriDate> {
    let now = date_to_hijri(today)?;
    if event.covers(&now) {
        return event.start_in(now.year());
    }

    let this_year = event.start_in(now.year())?;
    if this_year > now {
        return Ok(this_year);
    }
    let next_year = now.year() + 1;
    if next_year > hijri::MAX_YEAR {
        return Err(ConversionError::OutOfRange {
            jdn: hijri_to_julian_day(&now),
        });
    }
    event.start_in(next_year)
}

/// Days from `today` to the start of `event`; 0 while it is under way.
pub fn days_until_event(event: ReligiousEvent, today: &GregorianDate) -> ConversionResult<u32> {
    let now = date_to_hijri(today)?;
    if event.covers(&now) {
        return Ok(0);
    }
    let start = next_occurrence(event, today)?;
    let days = hijri_to_julian_day(&start) - gregorian_to_julian_day(today);
    Ok(days as u32)
}

//! Relative date phrases ("today", "in 3 days", "2 days overdue").
//!
//! The day difference is taken between Julian Day Numbers, so a Hijri date
//! and a Gregorian "today" are compared on the same continuous day count.

use crate::convert::{gregorian_to_julian_day, julian_day, ConversionResult};
use crate::date::{CalendarDate, DateParts, GregorianDate};
use crate::locale::Locale;
use crate::options::{CalendarSystem, DateStyle, FormatOptions, Language, Numerals};

use super::date::localize_digits;
use super::format_date;

/// Describe `parts` (a date in `system`) relative to `today`.
///
/// Differences of -1, 0 and 1 day always produce "yesterday", "today" and
/// "tomorrow". Larger differences produce "in N days" / "N days overdue"
/// up to `opts.relative_horizon` days, and the full date beyond it.
///
/// # Examples
///
/// ```
/// use hijri_engine::{relative_date_description, CalendarSystem, DateParts, FormatOptions, GregorianDate};
///
/// let today = GregorianDate::new(2025, 3, 10).unwrap();
/// let opts = FormatOptions::default();
/// // 10 Ramadan 1446 is 10 March 2025
/// let text = relative_date_description(DateParts::new(1446, 9, 10), CalendarSystem::Hijri, &today, &opts);
/// assert_eq!(text.unwrap(), "today");
/// ```
pub fn relative_date_description(
    parts: DateParts,
    system: CalendarSystem,
    today: &GregorianDate,
    opts: &FormatOptions,
) -> ConversionResult<String> {
    let target = CalendarDate::new(parts, system)?;
    let diff = julian_day(&target) - gregorian_to_julian_day(today);

    if let Some(horizon) = opts.relative_horizon {
        if diff.abs() > 1 && diff.unsigned_abs() > horizon as u64 {
            let full = opts.with_style(DateStyle::Full);
            return Ok(format_date(&target, &full));
        }
    }

    Ok(describe(diff, opts.language, opts.numerals))
}

/// Phrase for a signed day difference (target minus today).
pub fn describe_day_difference(diff: i64, language: Language) -> String {
    describe(diff, language, Numerals::Latin)
}

fn describe(diff: i64, language: Language, numerals: Numerals) -> String {
    let locale = Locale::for_language(language);
    match diff {
        0 => locale.today.to_string(),
        1 => locale.tomorrow.to_string(),
        -1 => locale.yesterday.to_string(),
        _ => {
            let n = diff.unsigned_abs();
            let count = localize_digits(&n.to_string(), numerals);
            match language {
                Language::En if diff > 0 => format!("in {} days", count),
                Language::En => format!("{} days overdue", count),
                Language::Ar if diff > 0 => format!("بعد {}", arabic_day_count(n, &count, "")),
                Language::Ar => format!("متأخر {}", arabic_day_count(n, &count, "ب")),
            }
        }
    }
}

/// Arabic counted noun for days: dual for 2, plural for 3-10, singular
/// accusative from 11 on. `dual_prefix` attaches to the dual form.
fn arabic_day_count(n: u64, count: &str, dual_prefix: &str) -> String {
    match n {
        2 => format!("{}يومين", dual_prefix),
        3..=10 => format!("{} أيام", count),
        _ => format!("{} يوماً", count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_english() {
        assert_eq!(describe_day_difference(0, Language::En), "today");
        assert_eq!(describe_day_difference(1, Language::En), "tomorrow");
        assert_eq!(describe_day_difference(-1, Language::En), "yesterday");
        assert_eq!(describe_day_difference(3, Language::En), "in 3 days");
        assert_eq!(describe_day_difference(-3, Language::En), "3 days overdue");
    }

    #[test]
    fn test_boundaries_arabic() {
        assert_eq!(describe_day_difference(0, Language::Ar), "اليوم");
        assert_eq!(describe_day_difference(1, Language::Ar), "غداً");
        assert_eq!(describe_day_difference(-1, Language::Ar), "أمس");
    }

    #[test]
    fn test_arabic_number_agreement() {
        assert_eq!(describe_day_difference(2, Language::Ar), "بعد يومين");
        assert_eq!(describe_day_difference(-2, Language::Ar), "متأخر بيومين");
        assert_eq!(describe_day_difference(5, Language::Ar), "بعد 5 أيام");
        assert_eq!(describe_day_difference(-10, Language::Ar), "متأخر 10 أيام");
        assert_eq!(describe_day_difference(11, Language::Ar), "بعد 11 يوماً");
    }

    #[test]
    fn test_horizon_falls_back_to_full_date() {
        let today = GregorianDate::new(2025, 1, 1).unwrap();
        let opts = FormatOptions::default();
        let text = relative_date_description(
            DateParts::new(2025, 3, 1),
            CalendarSystem::Gregorian,
            &today,
            &opts,
        )
        .unwrap();
        assert_eq!(text, "Saturday, 1 March 2025");

        let opts = opts.with_relative_horizon(None);
        let text = relative_date_description(
            DateParts::new(2025, 3, 1),
            CalendarSystem::Gregorian,
            &today,
            &opts,
        )
        .unwrap();
        assert_eq!(text, "in 59 days");
    }

    #[test]
    fn test_horizon_never_hides_adjacent_days() {
        let today = GregorianDate::new(2025, 1, 1).unwrap();
        let opts = FormatOptions::default().with_relative_horizon(Some(0));
        let text = relative_date_description(
            DateParts::new(2025, 1, 2),
            CalendarSystem::Gregorian,
            &today,
            &opts,
        )
        .unwrap();
        assert_eq!(text, "tomorrow");
    }
}

use hijri_engine::formatter::describe_day_difference;
use hijri_engine::{
    relative_date_description, CalendarSystem, DateParts, FormatOptions, GregorianDate, Language,
    Numerals,
};

fn today() -> GregorianDate {
    // 10 March 2025 = 10 Ramadan 1446
    GregorianDate::new(2025, 3, 10).unwrap()
}

fn describe(parts: (i32, u32, u32), system: CalendarSystem, language: Language) -> String {
    let opts = FormatOptions::default().with_language(language);
    relative_date_description(DateParts::from(parts), system, &today(), &opts).unwrap()
}

#[test]
fn test_today_in_both_systems() {
    assert_eq!(describe((2025, 3, 10), CalendarSystem::Gregorian, Language::En), "today");
    assert_eq!(describe((1446, 9, 10), CalendarSystem::Hijri, Language::En), "today");
    assert_eq!(describe((2025, 3, 10), CalendarSystem::Gregorian, Language::Ar), "اليوم");
    assert_eq!(describe((1446, 9, 10), CalendarSystem::Hijri, Language::Ar), "اليوم");
}

#[test]
fn test_tomorrow_and_yesterday() {
    assert_eq!(describe((2025, 3, 11), CalendarSystem::Gregorian, Language::En), "tomorrow");
    assert_eq!(describe((1446, 9, 11), CalendarSystem::Hijri, Language::En), "tomorrow");
    assert_eq!(describe((2025, 3, 9), CalendarSystem::Gregorian, Language::En), "yesterday");
    assert_eq!(describe((1446, 9, 9), CalendarSystem::Hijri, Language::Ar), "أمس");
    assert_eq!(describe((1446, 9, 11), CalendarSystem::Hijri, Language::Ar), "غداً");
}

#[test]
fn test_across_month_boundary() {
    // 1 Shawwal 1446 = 31 March 2025, 21 days ahead
    assert_eq!(describe((1446, 10, 1), CalendarSystem::Hijri, Language::En), "in 21 days");
    assert_eq!(describe((1446, 10, 1), CalendarSystem::Hijri, Language::Ar), "بعد 21 يوماً");
}

#[test]
fn test_overdue() {
    assert_eq!(
        describe((2025, 3, 5), CalendarSystem::Gregorian, Language::En),
        "5 days overdue"
    );
    assert_eq!(
        describe((2025, 3, 5), CalendarSystem::Gregorian, Language::Ar),
        "متأخر 5 أيام"
    );
}

#[test]
fn test_beyond_horizon_shows_full_date() {
    // 1 Muharram 1447 (27 June 2025) is beyond the default 30-day horizon
    assert_eq!(
        describe((1447, 1, 1), CalendarSystem::Hijri, Language::En),
        "Friday, 1 Muharram 1447"
    );
}

#[test]
fn test_arabic_indic_digits() {
    let opts = FormatOptions::default()
        .with_language(Language::Ar)
        .with_numerals(Numerals::ArabicIndic);
    let text = relative_date_description(
        DateParts::new(2025, 3, 15),
        CalendarSystem::Gregorian,
        &today(),
        &opts,
    )
    .unwrap();
    assert_eq!(text, "بعد ٥ أيام");
}

#[test]
fn test_invalid_input_is_an_error() {
    let opts = FormatOptions::default();
    let result = relative_date_description(
        DateParts::new(1446, 12, 30),
        CalendarSystem::Hijri,
        &today(),
        &opts,
    );
    assert!(result.is_err());
}

#[test]
fn test_describe_day_difference() {
    assert_eq!(describe_day_difference(0, Language::En), "today");
    assert_eq!(describe_day_difference(45, Language::En), "in 45 days");
    assert_eq!(describe_day_difference(-2, Language::En), "2 days overdue");
}

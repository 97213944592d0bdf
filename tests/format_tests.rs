use hijri_engine::{
    format_date, format_gregorian_date, format_hijri_date, format_hijri_with, CalendarDate,
    DateStyle, FormatOptions, GregorianDate, HijriDate, Language, Numerals,
};

fn ramadan_15() -> HijriDate {
    // 15 Ramadan 1446 = Saturday 15 March 2025
    HijriDate::new(1446, 9, 15).unwrap()
}

#[test]
fn test_format_short() {
    let date = ramadan_15();
    assert_eq!(format_hijri_date(&date, DateStyle::Short, Language::En), "15 Ramadan");
    assert_eq!(format_hijri_date(&date, DateStyle::Short, Language::Ar), "15 رمضان");
}

#[test]
fn test_format_full() {
    let date = ramadan_15();
    assert_eq!(
        format_hijri_date(&date, DateStyle::Full, Language::En),
        "Saturday, 15 Ramadan 1446"
    );
    assert_eq!(
        format_hijri_date(&date, DateStyle::Full, Language::Ar),
        "السبت، 15 رمضان 1446"
    );
}

#[test]
fn test_format_month_year() {
    let date = ramadan_15();
    assert_eq!(
        format_hijri_date(&date, DateStyle::MonthYear, Language::En),
        "Ramadan 1446"
    );
    assert_eq!(
        format_hijri_date(&date, DateStyle::MonthYear, Language::Ar),
        "رمضان 1446"
    );
}

#[test]
fn test_format_numeric() {
    let date = ramadan_15();
    assert_eq!(
        format_hijri_date(&date, DateStyle::Numeric, Language::En),
        "15/09/1446"
    );
    let opts = FormatOptions::new(Language::Ar, DateStyle::Numeric).with_numerals(Numerals::ArabicIndic);
    assert_eq!(format_hijri_with(&date, &opts), "١٥/٠٩/١٤٤٦");
}

#[test]
fn test_format_gregorian() {
    // 19 October 2026 is a Monday
    let date = GregorianDate::new(2026, 10, 19).unwrap();
    assert_eq!(
        format_gregorian_date(&date, DateStyle::Full, Language::En),
        "Monday, 19 October 2026"
    );
    assert_eq!(
        format_gregorian_date(&date, DateStyle::Full, Language::Ar),
        "الاثنين، 19 أكتوبر 2026"
    );
    assert_eq!(
        format_gregorian_date(&date, DateStyle::Short, Language::En),
        "19 October"
    );
}

#[test]
fn test_format_calendar_date() {
    let date = CalendarDate::from(HijriDate::new(1448, 5, 7).unwrap());
    let opts = FormatOptions::new(Language::Ar, DateStyle::Full);
    assert_eq!(format_date(&date, &opts), "الاثنين، 7 جمادى الأولى 1448");
}

#[test]
fn test_format_is_idempotent() {
    let date = ramadan_15();
    for style in [
        DateStyle::Short,
        DateStyle::Full,
        DateStyle::MonthYear,
        DateStyle::Numeric,
    ] {
        for language in [Language::Ar, Language::En] {
            let first = format_hijri_date(&date, style, language);
            let second = format_hijri_date(&date, style, language);
            assert_eq!(first, second);
        }
    }
}

#[test]
fn test_unknown_style_and_language_fall_back() {
    let date = ramadan_15();
    let style = DateStyle::parse_or_default("fancy");
    let language = Language::parse_or_default("fr");
    assert_eq!(style, DateStyle::Short);
    assert_eq!(language, Language::En);
    assert_eq!(format_hijri_date(&date, style, language), "15 Ramadan");
}

#![cfg(feature = "serde")]

use hijri_engine::{CalendarDate, DateParts, FormatOptions, GregorianDate, HijriDate, Language};

#[test]
fn test_hijri_date_json() {
    let date = HijriDate::new(1446, 9, 10).unwrap();
    let json = serde_json::to_value(date).unwrap();
    assert_eq!(json["year"], 1446);
    assert_eq!(json["month"], 9);
    assert_eq!(json["day"], 10);
    assert_eq!(json["day_of_week"], 1);

    let back: HijriDate = serde_json::from_value(json).unwrap();
    assert_eq!(back, date);
}

#[test]
fn test_invalid_date_rejected_on_deserialize() {
    let json = serde_json::json!({ "year": 1446, "month": 12, "day": 30 });
    assert!(serde_json::from_value::<HijriDate>(json).is_err());
}

#[test]
fn test_calendar_date_tagging() {
    let date = CalendarDate::from(GregorianDate::new(2025, 3, 10).unwrap());
    let json = serde_json::to_value(date).unwrap();
    assert_eq!(json["system"], "gregorian");
    assert_eq!(json["date"]["day"], 10);
}

#[test]
fn test_options_json() {
    let opts: FormatOptions = serde_json::from_str(
        r#"{"language":"ar","style":"monthYear","numerals":"latin","relative_horizon":null}"#,
    )
    .unwrap();
    assert_eq!(opts.language, Language::Ar);
    assert_eq!(opts.relative_horizon, None);

    let parts: DateParts = serde_json::from_str(r#"{"year":1446,"month":9,"day":10}"#).unwrap();
    assert_eq!(parts, DateParts::new(1446, 9, 10));
}

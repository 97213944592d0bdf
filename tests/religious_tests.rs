use hijri_engine::religious::{days_until_event, is_event_today, next_occurrence};
use hijri_engine::{
    current_dates, days_until_ramadan, is_currently_ramadan, GregorianDate, HijriDate, Language,
    ReligiousEvent,
};

fn day(year: i32, month: u32, day: u32) -> GregorianDate {
    GregorianDate::new(year, month, day).unwrap()
}

#[test]
fn test_ramadan_scenario() {
    // Simulated "now" of 10 Ramadan 1446
    let now = day(2025, 3, 10);
    let dates = current_dates(&now).unwrap();
    assert_eq!(dates.hijri, HijriDate::new(1446, 9, 10).unwrap());
    assert!(is_currently_ramadan(&now).unwrap());
    assert_eq!(days_until_ramadan(&now).unwrap(), 0);
}

#[test]
fn test_first_and_last_day_of_ramadan() {
    // 1 Ramadan 1446 = 1 March 2025, 30 Ramadan 1446 = 30 March 2025
    assert!(is_currently_ramadan(&day(2025, 3, 1)).unwrap());
    assert!(is_currently_ramadan(&day(2025, 3, 30)).unwrap());
    assert!(!is_currently_ramadan(&day(2025, 2, 28)).unwrap());
    assert!(!is_currently_ramadan(&day(2025, 3, 31)).unwrap());
}

#[test]
fn test_day_before_ramadan() {
    assert_eq!(days_until_ramadan(&day(2025, 2, 28)).unwrap(), 1);
}

#[test]
fn test_after_ramadan_counts_to_next_year() {
    // 1 Shawwal 1446 = 31 March 2025; 1 Ramadan 1447 = 18 February 2026
    assert_eq!(days_until_ramadan(&day(2025, 3, 31)).unwrap(), 324);
}

#[test]
fn test_days_until_is_never_negative() {
    let start = day(2024, 1, 1);
    let mut jdn = hijri_engine::gregorian_to_julian_day(&start);
    for _ in 0..800 {
        let today = hijri_engine::julian_day_to_gregorian(jdn).unwrap();
        let days = days_until_ramadan(&today).unwrap();
        assert!(days <= 355, "{} gave {}", today, days);
        assert_eq!(days == 0, is_currently_ramadan(&today).unwrap());
        jdn += 1;
    }
}

#[test]
fn test_other_events() {
    // 10 Muharram 1447 = 6 July 2025
    let ashura = day(2025, 7, 6);
    assert!(is_event_today(ReligiousEvent::Ashura, &ashura).unwrap());
    assert_eq!(
        next_occurrence(ReligiousEvent::IslamicNewYear, &ashura).unwrap(),
        HijriDate::new(1448, 1, 1).unwrap()
    );
    // 10 Dhu al-Hijjah 1446 = 7 June 2025
    assert_eq!(days_until_event(ReligiousEvent::EidAlAdha, &day(2025, 6, 6)).unwrap(), 1);
}

#[test]
fn test_event_names() {
    assert_eq!(ReligiousEvent::EidAlFitr.name(Language::En), "Eid al-Fitr");
    assert_eq!(ReligiousEvent::EidAlFitr.name(Language::Ar), "عيد الفطر");
    assert_eq!(ReligiousEvent::ALL.len(), 5);
    assert_eq!(ReligiousEvent::Ramadan.hijri_month_day(), (9, 1));
}

use hijri_engine::{ConversionError, ParseError};

#[test]
fn test_conversion_error_display() {
    let err = ConversionError::InvalidHijriDate {
        year: 1446,
        month: 12,
        day: 30,
    };
    assert_eq!(format!("{}", err), "invalid hijri date: 1446-12-30");

    let err = ConversionError::InvalidGregorianDate {
        year: 2023,
        month: 2,
        day: 29,
    };
    assert_eq!(format!("{}", err), "invalid gregorian date: 2023-02-29");
}

#[test]
fn test_before_epoch_display() {
    let err = ConversionError::BeforeHijriEpoch { jdn: 1948439 };
    let msg = format!("{}", err);
    assert!(msg.contains("1948439"));
    assert!(msg.contains("epoch"));
}

#[test]
fn test_parse_error_display() {
    let err = ParseError::UnexpectedChar {
        position: 5,
        found: 'x',
    };
    let msg = format!("{}", err);
    assert!(msg.contains("position 5"));
    assert!(msg.contains("'x'"));
}

#[test]
fn test_parse_error_wraps_conversion_error() {
    let inner = ConversionError::InvalidHijriDate {
        year: 1446,
        month: 13,
        day: 1,
    };
    let err = ParseError::from(inner.clone());
    assert_eq!(err.to_string(), inner.to_string());
    assert_eq!(err, ParseError::Invalid(inner));
}

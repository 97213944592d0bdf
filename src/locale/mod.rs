//! Localized month and weekday names.

mod builtin;

pub use builtin::Locale;

use crate::options::Language;

/// Name of a Gregorian month (1-12).
pub(crate) fn gregorian_month_name(month: u32, language: Language) -> &'static str {
    Locale::for_language(language).gregorian_months[(month - 1) as usize]
}

/// Name of a Hijri month (1-12).
pub(crate) fn hijri_month_name(month: u32, language: Language) -> &'static str {
    Locale::for_language(language).hijri_months[(month - 1) as usize]
}

/// Name of a weekday, 0 = Sunday.
pub(crate) fn weekday_name(day_of_week: u32, language: Language) -> &'static str {
    Locale::for_language(language).day_names[day_of_week as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_names() {
        assert_eq!(hijri_month_name(9, Language::En), "Ramadan");
        assert_eq!(hijri_month_name(9, Language::Ar), "رمضان");
        assert_eq!(gregorian_month_name(1, Language::En), "January");
        assert_eq!(gregorian_month_name(12, Language::Ar), "ديسمبر");
    }

    #[test]
    fn test_for_language_matches() {
        for language in [Language::Ar, Language::En] {
            assert_eq!(Locale::for_language(language).language, language);
        }
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!(weekday_name(0, Language::En), "Sunday");
        assert_eq!(weekday_name(5, Language::Ar), "الجمعة");
    }
}

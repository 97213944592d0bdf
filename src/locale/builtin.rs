//! Built-in locale data.

use crate::options::Language;

/// Month, weekday and relative-phrase labels for one language.
#[derive(Debug, Clone)]
pub struct Locale {
    pub language: Language,
    pub gregorian_months: [&'static str; 12],
    pub hijri_months: [&'static str; 12],
    /// Sunday first, matching `day_of_week` 0..=6.
    pub day_names: [&'static str; 7],
    /// Separator between the weekday and the rest of a full date.
    pub weekday_separator: &'static str,
    pub today: &'static str,
    pub tomorrow: &'static str,
    pub yesterday: &'static str,
}

impl Locale {
    /// Returns the built-in locale for a language.
    pub fn for_language(language: Language) -> &'static Locale {
        match language {
            Language::Ar => &AR,
            Language::En => &EN,
        }
    }
}

static EN: Locale = Locale {
    language: Language::En,
    gregorian_months: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    hijri_months: [
        "Muharram",
        "Safar",
        "Rabi' al-Awwal",
        "Rabi' al-Thani",
        "Jumada al-Ula",
        "Jumada al-Akhirah",
        "Rajab",
        "Sha'ban",
        "Ramadan",
        "Shawwal",
        "Dhu al-Qi'dah",
        "Dhu al-Hijjah",
    ],
    day_names: [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ],
    weekday_separator: ", ",
    today: "today",
    tomorrow: "tomorrow",
    yesterday: "yesterday",
};

static AR: Locale = Locale {
    language: Language::Ar,
    gregorian_months: [
        "يناير",
        "فبراير",
        "مارس",
        "أبريل",
        "مايو",
        "يونيو",
        "يوليو",
        "أغسطس",
        "سبتمبر",
        "أكتوبر",
        "نوفمبر",
        "ديسمبر",
    ],
    hijri_months: [
        "محرم",
        "صفر",
        "ربيع الأول",
        "ربيع الآخر",
        "جمادى الأولى",
        "جمادى الآخرة",
        "رجب",
        "شعبان",
        "رمضان",
        "شوال",
        "ذو القعدة",
        "ذو الحجة",
    ],
    day_names: [
        "الأحد",
        "الاثنين",
        "الثلاثاء",
        "الأربعاء",
        "الخميس",
        "الجمعة",
        "السبت",
    ],
    weekday_separator: "، ",
    today: "اليوم",
    tomorrow: "غداً",
    yesterday: "أمس",
};

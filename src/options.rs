//! Formatting options and configuration.

use std::fmt;
use std::str::FromStr;

/// The calendar system a date is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CalendarSystem {
    /// Gregorian civil calendar
    #[default]
    Gregorian,
    /// Tabular Hijri (Islamic lunar) calendar
    Hijri,
}

impl CalendarSystem {
    /// Returns the identifier used by external callers ("gregorian" / "hijri").
    pub fn as_str(&self) -> &'static str {
        match self {
            CalendarSystem::Gregorian => "gregorian",
            CalendarSystem::Hijri => "hijri",
        }
    }

    /// Returns the other calendar system.
    pub fn other(&self) -> CalendarSystem {
        match self {
            CalendarSystem::Gregorian => CalendarSystem::Hijri,
            CalendarSystem::Hijri => CalendarSystem::Gregorian,
        }
    }
}

impl FromStr for CalendarSystem {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gregorian" => Ok(CalendarSystem::Gregorian),
            "hijri" => Ok(CalendarSystem::Hijri),
            _ => Err(UnknownOption::new("calendar system", s)),
        }
    }
}

/// The language used for month and weekday names and relative phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Language {
    /// Arabic labels
    Ar,
    /// English labels
    #[default]
    En,
}

impl Language {
    /// Parses a language code, falling back to the default (English) for
    /// anything unrecognised. Presentation must degrade, not fail.
    pub fn parse_or_default(code: &str) -> Language {
        code.parse().unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
        }
    }
}

impl FromStr for Language {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ar" => Ok(Language::Ar),
            "en" => Ok(Language::En),
            _ => Err(UnknownOption::new("language", s)),
        }
    }
}

/// Presentation style for a formatted date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum DateStyle {
    /// `15 Ramadan`
    #[default]
    Short,
    /// `Monday, 15 Ramadan 1446`
    Full,
    /// `Ramadan 1446`
    MonthYear,
    /// `15/09/1446`
    Numeric,
}

impl DateStyle {
    /// Parses a style name, falling back to [`DateStyle::Short`] for
    /// anything unrecognised.
    pub fn parse_or_default(name: &str) -> DateStyle {
        name.parse().unwrap_or_default()
    }
}

impl FromStr for DateStyle {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "short" => Ok(DateStyle::Short),
            "full" => Ok(DateStyle::Full),
            "monthYear" | "month_year" => Ok(DateStyle::MonthYear),
            "numeric" => Ok(DateStyle::Numeric),
            _ => Err(UnknownOption::new("date style", s)),
        }
    }
}

/// The digit set used when rendering numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Numerals {
    /// 0123456789
    #[default]
    Latin,
    /// ٠١٢٣٤٥٦٧٨٩
    ArabicIndic,
}

/// An option string that does not name any known variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOption {
    kind: &'static str,
    value: String,
}

impl UnknownOption {
    fn new(kind: &'static str, value: &str) -> Self {
        UnknownOption {
            kind,
            value: value.to_string(),
        }
    }
}

impl fmt::Display for UnknownOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: '{}'", self.kind, self.value)
    }
}

impl std::error::Error for UnknownOption {}

/// Default number of days within which relative phrasing ("in 3 days") is
/// used instead of a full date.
pub const DEFAULT_RELATIVE_HORIZON: u32 = 30;

/// Options for formatting dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormatOptions {
    /// The language for names and phrases.
    pub language: Language,
    /// The presentation style.
    pub style: DateStyle,
    /// The digit set.
    pub numerals: Numerals,
    /// Beyond this many days the relative describer prints the full date.
    /// `None` always uses relative phrasing.
    pub relative_horizon: Option<u32>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            language: Language::default(),
            style: DateStyle::default(),
            numerals: Numerals::default(),
            relative_horizon: Some(DEFAULT_RELATIVE_HORIZON),
        }
    }
}

impl FormatOptions {
    pub fn new(language: Language, style: DateStyle) -> Self {
        FormatOptions {
            language,
            style,
            ..Default::default()
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_style(mut self, style: DateStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_numerals(mut self, numerals: Numerals) -> Self {
        self.numerals = numerals;
        self
    }

    pub fn with_relative_horizon(mut self, horizon: Option<u32>) -> Self {
        self.relative_horizon = horizon;
        self
    }
}

//! Self-checks for the conversion arithmetic.
//!
//! There is no external authority to compare against at runtime, so the
//! engine carries its own oracle: a table of pinned Gregorian/Hijri
//! correspondences for the civil tabular calendar, boundary and rejection
//! checks, exhaustive round-trip sweeps, and a throughput benchmark that
//! exposes accidental day-by-day scanning.

use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::convert::{
    date_to_gregorian, date_to_hijri, gregorian_to_hijri, gregorian_to_julian_day,
    hijri_to_gregorian, hijri_to_julian_day, julian_day_to_gregorian, julian_day_to_hijri,
};
use crate::date::{DateParts, GregorianDate, HijriDate};
use crate::error::ConversionError;
use crate::{gregorian, hijri};

/// A pinned correspondence between the two calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReferencePair {
    pub label: &'static str,
    pub gregorian: DateParts,
    pub hijri: DateParts,
}

const fn pair(
    label: &'static str,
    gregorian: (i32, u32, u32),
    hijri: (i32, u32, u32),
) -> ReferencePair {
    ReferencePair {
        label,
        gregorian: DateParts {
            year: gregorian.0,
            month: gregorian.1,
            day: gregorian.2,
        },
        hijri: DateParts {
            year: hijri.0,
            month: hijri.1,
            day: hijri.2,
        },
    }
}

/// Civil tabular Hijri correspondences spanning the 7th to 22nd centuries.
pub const REFERENCE_PAIRS: &[ReferencePair] = &[
    pair("hijri epoch", (622, 7, 19), (1, 1, 1)),
    pair("start of 1700", (1700, 1, 1), (1111, 7, 10)),
    pair("start of 1800", (1800, 1, 1), (1214, 8, 4)),
    pair("start of 1900", (1900, 1, 1), (1317, 8, 28)),
    pair("new year 1400", (1979, 11, 21), (1400, 1, 1)),
    pair("start of 2000", (2000, 1, 1), (1420, 9, 24)),
    pair("new year 1445", (2023, 7, 19), (1445, 1, 1)),
    pair("ramadan 1446", (2025, 3, 1), (1446, 9, 1)),
    pair("end of 2100", (2100, 12, 31), (1524, 10, 29)),
];

/// Which leg of a reference check went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Direction {
    ToHijri,
    ToGregorian,
    RoundTrip,
}

/// One mismatch found by [`test_conversion_accuracy`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConversionFailure {
    pub label: &'static str,
    pub direction: Direction,
    pub expected: DateParts,
    pub actual: Result<DateParts, ConversionError>,
}

/// Outcome of [`test_conversion_accuracy`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConversionReport {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<ConversionFailure>,
}

impl ConversionReport {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Check every reference pair in both directions and round trip.
pub fn test_conversion_accuracy() -> ConversionReport {
    let mut report = ConversionReport::default();

    for reference in REFERENCE_PAIRS {
        let failures = check_pair(reference);
        if failures.is_empty() {
            report.passed += 1;
        } else {
            for failure in &failures {
                log::warn!(
                    "reference '{}' failed {:?}: expected {:?}, got {:?}",
                    failure.label,
                    failure.direction,
                    failure.expected,
                    failure.actual
                );
            }
            report.failed += 1;
            report.failures.extend(failures);
        }
    }

    log::debug!(
        "conversion accuracy: {} passed, {} failed",
        report.passed,
        report.failed
    );
    report
}

fn check_pair(reference: &ReferencePair) -> Vec<ConversionFailure> {
    let mut failures = Vec::new();
    let g = reference.gregorian;
    let h = reference.hijri;

    let forward = gregorian_to_hijri(g.year, g.month, g.day).map(|d| d.to_parts());
    if forward != Ok(h) {
        failures.push(ConversionFailure {
            label: reference.label,
            direction: Direction::ToHijri,
            expected: h,
            actual: forward,
        });
    }

    let backward = hijri_to_gregorian(h.year, h.month, h.day).map(|d| d.to_parts());
    if backward != Ok(g) {
        failures.push(ConversionFailure {
            label: reference.label,
            direction: Direction::ToGregorian,
            expected: g,
            actual: backward,
        });
    }

    let round_trip = gregorian_to_hijri(g.year, g.month, g.day)
        .and_then(|d| date_to_gregorian(&d))
        .map(|d| d.to_parts());
    if round_trip != Ok(g) {
        failures.push(ConversionFailure {
            label: reference.label,
            direction: Direction::RoundTrip,
            expected: g,
            actual: round_trip,
        });
    }

    failures
}

/// A named pass/fail check from [`run_validation_suite`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationCheck {
    pub name: &'static str,
    pub passed: bool,
    /// Why the check failed.
    pub detail: Option<String>,
}

/// Outcome of [`run_validation_suite`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationReport {
    pub checks: Vec<ValidationCheck>,
}

impl ValidationReport {
    pub fn passed(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.checks.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &ValidationCheck> {
        self.checks.iter().filter(|c| !c.passed)
    }
}

fn check(name: &'static str, f: impl FnOnce() -> Result<(), String>) -> ValidationCheck {
    match f() {
        Ok(()) => ValidationCheck {
            name,
            passed: true,
            detail: None,
        },
        Err(detail) => {
            log::warn!("validation check '{}' failed: {}", name, detail);
            ValidationCheck {
                name,
                passed: false,
                detail: Some(detail),
            }
        }
    }
}

fn expect_hijri(
    got: Result<HijriDate, ConversionError>,
    want: (i32, u32, u32),
) -> Result<(), String> {
    let want = DateParts::from(want);
    match got {
        Ok(d) if d.to_parts() == want => Ok(()),
        other => Err(format!("expected {:?}, got {:?}", want, other)),
    }
}

fn expect_rejected<T: std::fmt::Debug>(got: Result<T, ConversionError>) -> Result<(), String> {
    match got {
        Err(_) => Ok(()),
        Ok(v) => Err(format!("accepted invalid input as {:?}", v)),
    }
}

fn hijri_successor(year: i32, month: u32, day: u32) -> Result<HijriDate, ConversionError> {
    let date = HijriDate::new(year, month, day)?;
    julian_day_to_hijri(hijri_to_julian_day(&date) + 1)
}

/// Gregorian years covered by the round-trip sweep.
pub const GREGORIAN_SWEEP_YEARS: (i32, i32) = (1900, 2100);

/// Hijri years covered by the inverse round-trip sweep.
pub const HIJRI_SWEEP_YEARS: (i32, i32) = (1, 1600);

/// Run the full self-check: reference pairs, calendar boundaries, malformed
/// input rejection and round-trip sweeps.
pub fn run_validation_suite() -> ValidationReport {
    let mut checks = Vec::new();

    checks.push(check("reference pairs", || {
        let report = test_conversion_accuracy();
        match report.failures.first() {
            None => Ok(()),
            Some(f) => Err(format!(
                "{} of {} pairs failed, first: '{}' {:?}",
                report.failed,
                REFERENCE_PAIRS.len(),
                f.label,
                f.direction
            )),
        }
    }));

    checks.push(check("epoch", || {
        let g = hijri_to_gregorian(1, 1, 1).map_err(|e| e.to_string())?;
        if g.to_parts() != DateParts::new(622, 7, 19) {
            return Err(format!("1 Muharram 1 AH mapped to {}", g));
        }
        match gregorian_to_hijri(622, 7, 18) {
            Err(ConversionError::BeforeHijriEpoch { .. }) => Ok(()),
            other => Err(format!("day before epoch gave {:?}", other)),
        }
    }));

    checks.push(check("month rollover", || {
        expect_hijri(hijri_successor(1446, 9, 30), (1446, 10, 1))?;
        expect_hijri(hijri_successor(1446, 8, 29), (1446, 9, 1))
    }));

    checks.push(check("year rollover after leap dhu al-hijjah", || {
        expect_hijri(hijri_successor(1445, 12, 30), (1446, 1, 1))
    }));

    checks.push(check("year rollover after common dhu al-hijjah", || {
        expect_hijri(hijri_successor(1446, 12, 29), (1447, 1, 1))
    }));

    checks.push(check("gregorian year rollover", || {
        let g = GregorianDate::new(1999, 12, 31).map_err(|e| e.to_string())?;
        let next = julian_day_to_gregorian(gregorian_to_julian_day(&g) + 1)
            .map_err(|e| e.to_string())?;
        if next.to_parts() != DateParts::new(2000, 1, 1) {
            return Err(format!("31 December 1999 was followed by {}", next));
        }
        expect_hijri(date_to_hijri(&next), (1420, 9, 24))
    }));

    checks.push(check("leap dhu al-hijjah 30 accepted", || {
        if !hijri::is_hijri_leap_year(1445) {
            return Err("1445 AH should be a leap year".to_string());
        }
        hijri_to_gregorian(1445, 12, 30)
            .map(|_| ())
            .map_err(|e| e.to_string())
    }));

    checks.push(check("common dhu al-hijjah 30 rejected", || {
        expect_rejected(hijri_to_gregorian(1446, 12, 30))?;
        expect_rejected(hijri_to_gregorian(2000, 12, 30))
    }));

    checks.push(check("hijri month out of range rejected", || {
        expect_rejected(hijri_to_gregorian(1446, 13, 1))?;
        expect_rejected(hijri_to_gregorian(1446, 0, 1))
    }));

    checks.push(check("hijri day out of range rejected", || {
        expect_rejected(hijri_to_gregorian(1446, 1, 0))?;
        expect_rejected(hijri_to_gregorian(1446, 2, 30))?;
        expect_rejected(hijri_to_gregorian(0, 1, 1))
    }));

    checks.push(check("gregorian invalid dates rejected", || {
        expect_rejected(gregorian_to_hijri(2023, 2, 29))?;
        expect_rejected(gregorian_to_hijri(1900, 2, 29))?;
        expect_rejected(gregorian_to_hijri(2024, 4, 31))?;
        expect_rejected(gregorian_to_hijri(2024, 13, 1))
    }));

    checks.push(check("gregorian round trip sweep", gregorian_sweep));
    checks.push(check("hijri round trip sweep", hijri_sweep));

    let report = ValidationReport { checks };
    log::debug!(
        "validation suite: {} passed, {} failed",
        report.passed(),
        report.failed()
    );
    report
}

fn gregorian_sweep() -> Result<(), String> {
    let (first, last) = GREGORIAN_SWEEP_YEARS;
    for year in first..=last {
        for month in 1..=12 {
            for day in 1..=gregorian::days_in_month(year, month) {
                let g = GregorianDate::new(year, month, day).map_err(|e| e.to_string())?;
                let back = date_to_hijri(&g)
                    .and_then(|h| date_to_gregorian(&h))
                    .map_err(|e| format!("{}: {}", g, e))?;
                if back != g {
                    return Err(format!("{} came back as {}", g, back));
                }
            }
        }
    }
    Ok(())
}

fn hijri_sweep() -> Result<(), String> {
    let (first, last) = HIJRI_SWEEP_YEARS;
    for year in first..=last {
        for month in 1..=12 {
            for day in 1..=hijri::month_length(year, month) as u32 {
                let h = HijriDate::new(year, month, day).map_err(|e| e.to_string())?;
                let back = date_to_gregorian(&h)
                    .and_then(|g| date_to_hijri(&g))
                    .map_err(|e| format!("{}: {}", h, e))?;
                if back != h {
                    return Err(format!("{} came back as {}", h, back));
                }
            }
        }
    }
    Ok(())
}

/// Timing of [`benchmark_conversions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BenchmarkResult {
    pub iterations: usize,
    pub total: Duration,
    /// Round trips that did not return the starting date.
    pub mismatches: usize,
}

impl BenchmarkResult {
    pub fn total_ms(&self) -> f64 {
        self.total.as_secs_f64() * 1000.0
    }

    pub fn per_op_ms(&self) -> f64 {
        if self.iterations == 0 {
            0.0
        } else {
            self.total_ms() / self.iterations as f64
        }
    }
}

/// Run `n` Gregorian -> Hijri -> Gregorian round trips on dates spread over
/// the 1900-2100 range and time them.
pub fn benchmark_conversions(n: usize) -> BenchmarkResult {
    let start_jdn = gregorian::to_julian_day(GREGORIAN_SWEEP_YEARS.0, 1, 1);
    let span = gregorian::to_julian_day(GREGORIAN_SWEEP_YEARS.1, 12, 31) - start_jdn + 1;

    let mut mismatches = 0;
    let started = Instant::now();
    for i in 0..n {
        // Stride by a prime so consecutive iterations land far apart.
        let jdn = start_jdn + (i as i64 * 7919) % span;
        let round_trip = julian_day_to_gregorian(jdn).and_then(|g| {
            let h = date_to_hijri(&g)?;
            Ok((g, date_to_gregorian(&black_box(h))?))
        });
        match round_trip {
            Ok((g, back)) if g == back => {}
            _ => mismatches += 1,
        }
    }
    let total = started.elapsed();

    let result = BenchmarkResult {
        iterations: n,
        total,
        mismatches,
    };
    log::debug!(
        "benchmark: {} round trips in {:.3} ms ({:.6} ms/op)",
        n,
        result.total_ms(),
        result.per_op_ms()
    );
    result
}

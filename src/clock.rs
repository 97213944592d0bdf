//! System clock access.
//!
//! The rest of the crate never reads the clock. Call [`system_today`] once at
//! the edge of an operation and pass the result down, so every helper in
//! that operation agrees on what "today" is.

use crate::convert::ConversionResult;
use crate::date::GregorianDate;
use crate::religious::{current_dates, CurrentDates};

/// Today's date in the local timezone.
pub fn system_today() -> ConversionResult<GregorianDate> {
    GregorianDate::try_from(chrono::Local::now().date_naive())
}

/// Today in both calendars, read from the system clock.
pub fn current_dates_now() -> ConversionResult<CurrentDates> {
    current_dates(&system_today()?)
}

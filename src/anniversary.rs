//! Solar anniversary computation
//!
//! Holds the fixed start date (the Prophet Muhammad's birth, 20 April 570 CE
//! in the proleptic Gregorian calendar), the 1500-solar-year span, and the
//! formatting of the resulting date.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{Error, Result};
use crate::span::SolarSpan;

/// Year of the Prophet's birth (proleptic Gregorian)
pub const BIRTH_YEAR: i32 = 570;
/// Month of the Prophet's birth
pub const BIRTH_MONTH: u32 = 4;
/// Day of the Prophet's birth
pub const BIRTH_DAY: u32 = 20;

/// Number of solar years between the birth date and the anniversary
pub const SOLAR_YEARS: f64 = 1500.0;

/// Label printed before the formatted anniversary date
pub const REPORT_LABEL: &str = "1500 solar years since the Prophet's birth will be on:";

/// The fixed start date of the computation
pub fn birth_date() -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(BIRTH_YEAR, BIRTH_MONTH, BIRTH_DAY).ok_or(Error::InvalidDate {
        year: BIRTH_YEAR,
        month: BIRTH_MONTH,
        day: BIRTH_DAY,
    })
}

/// Add a solar-year span to a start date
///
/// The start date is treated as a midnight instant so that fractional-day
/// spans carry through the addition; sub-day precision is discarded later,
/// when the result is formatted.
pub fn anniversary_date(start: NaiveDate, span: SolarSpan) -> Result<NaiveDateTime> {
    let out_of_range = || Error::OutOfRange {
        start,
        days: span.days(),
    };

    let duration = span.to_duration().ok_or_else(out_of_range)?;

    start
        .and_time(NaiveTime::MIN)
        .checked_add_signed(duration)
        .ok_or_else(out_of_range)
}

/// The 1500-solar-year anniversary of the Prophet's birth
pub fn solar_anniversary() -> Result<NaiveDateTime> {
    anniversary_date(birth_date()?, SolarSpan::from_years(SOLAR_YEARS))
}

/// Format a date in the standard format: "Weekday, day Month year"
/// Example: "Thursday, 01 May 2070"
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%A, %d %B %Y").to_string()
}

/// The complete output line: the fixed label followed by the formatted date
pub fn report_line() -> Result<String> {
    let anniversary = solar_anniversary()?;
    Ok(format!("{} {}", REPORT_LABEL, format_date(&anniversary.date())))
}

//! Error types for the solar anniversary library

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the solar anniversary library
///
/// There is exactly one failure mode: a date that the calendar type cannot
/// represent, either because the constant components do not name a real
/// calendar day or because the date addition leaves chrono's range.
#[derive(Error, Debug)]
pub enum Error {
    /// The year/month/day components do not form a valid calendar date
    #[error("invalid calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// The computed date falls outside the representable range
    #[error("result of adding {days} days to {start} is out of range")]
    OutOfRange { start: NaiveDate, days: f64 },
}

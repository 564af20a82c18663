//! Solar-year span model
//!
//! A span of solar years is converted to a day count using the fixed
//! 365.25 days/year Julian-year approximation, and from there to a chrono
//! duration suitable for date arithmetic.

use chrono::TimeDelta;

/// Average length of a solar year in days (Julian-year approximation).
///
/// The computed anniversary date depends on this exact constant; the more
/// precise tropical-year length (365.2422 days) would shift the result.
pub const DAYS_PER_SOLAR_YEAR: f64 = 365.25;

/// Seconds in one day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// A span of solar years, measured in average 365.25-day years
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarSpan {
    years: f64,
}

impl SolarSpan {
    /// Create a span covering the given number of solar years
    pub fn from_years(years: f64) -> Self {
        SolarSpan { years }
    }

    /// The number of solar years in this span
    pub fn years(&self) -> f64 {
        self.years
    }

    /// The span as a count of days (possibly fractional)
    pub fn days(&self) -> f64 {
        self.years * DAYS_PER_SOLAR_YEAR
    }

    /// Convert the span to a chrono duration with whole-second precision
    ///
    /// Fractional days resolve to seconds; any sub-second remainder is
    /// truncated. Returns `None` when the span does not fit in a
    /// [`TimeDelta`] (non-finite or out of range).
    pub fn to_duration(&self) -> Option<TimeDelta> {
        let seconds = (self.days() * SECONDS_PER_DAY).trunc();
        if !seconds.is_finite() || seconds < i64::MIN as f64 || seconds > i64::MAX as f64 {
            return None;
        }
        TimeDelta::try_seconds(seconds as i64)
    }
}

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::CalendarError;

/// A date on the Chinese lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LunarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Set when `month` is the intercalary copy of the regular month with the same number.
    pub is_leap: bool,
}

impl LunarDate {
    pub fn new(year: i32, month: u32, day: u32, is_leap: bool) -> Self {
        Self {
            year,
            month,
            day,
            is_leap,
        }
    }
}

impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let leap = if self.is_leap { "L" } else { "" };
        write!(f, "{:04}/{}{:02}/{:02}", self.year, leap, self.month, self.day)
    }
}

/// Defines the contract for converting dates between the solar and lunar calendars.
///
/// Implementations hold no mutable state; a single instance is shared across threads
/// while the pages of a leap-month report are computed in parallel.
pub trait CalendarOracle: Send + Sync {
    /// Maps a solar (Gregorian) date to its lunar equivalent.
    ///
    /// # Errors
    /// * [`CalendarError::OutOfRange`] - The date is not covered by the backend.
    fn solar_to_lunar(&self, date: NaiveDate) -> Result<LunarDate, CalendarError>;

    /// Maps a lunar date back to the solar calendar.
    ///
    /// # Errors
    /// * [`CalendarError::InvalidLunarDate`] - The month does not exist in that lunar year.
    /// * [`CalendarError::OutOfRange`] - The year is not covered by the backend.
    fn lunar_to_solar(&self, date: LunarDate) -> Result<NaiveDate, CalendarError>;
}

impl<T: CalendarOracle + ?Sized> CalendarOracle for &T {
    fn solar_to_lunar(&self, date: NaiveDate) -> Result<LunarDate, CalendarError> {
        (**self).solar_to_lunar(date)
    }

    fn lunar_to_solar(&self, date: LunarDate) -> Result<NaiveDate, CalendarError> {
        (**self).lunar_to_solar(date)
    }
}

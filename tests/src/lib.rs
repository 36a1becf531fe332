//! Shared fixtures for the end-to-end suites.

use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::NaiveDate;
use soulchart_common::calendar::{CalendarOracle, LunarDate};
use soulchart_common::error::CalendarError;
use soulchart_common::model::stage::SoulDegree;

/// Oracle with canned answers. Counts how often each direction is asked.
pub struct ScriptedCalendar {
    pub lunar: LunarDate,
    pub alternate: Option<NaiveDate>,
    pub to_lunar_calls: AtomicUsize,
    pub to_solar_calls: AtomicUsize,
}

impl ScriptedCalendar {
    pub fn new(lunar: LunarDate, alternate: Option<NaiveDate>) -> Self {
        Self {
            lunar,
            alternate,
            to_lunar_calls: AtomicUsize::new(0),
            to_solar_calls: AtomicUsize::new(0),
        }
    }
}

impl CalendarOracle for ScriptedCalendar {
    fn solar_to_lunar(&self, _date: NaiveDate) -> Result<LunarDate, CalendarError> {
        self.to_lunar_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.lunar)
    }

    fn lunar_to_solar(&self, date: LunarDate) -> Result<NaiveDate, CalendarError> {
        self.to_solar_calls.fetch_add(1, Ordering::SeqCst);
        self.alternate.ok_or(CalendarError::InvalidLunarDate {
            year: date.year,
            month: date.month,
            day: date.day,
            is_leap: date.is_leap,
        })
    }
}

/// Oracle that knows no dates at all.
pub struct EmptyCalendar;

impl CalendarOracle for EmptyCalendar {
    fn solar_to_lunar(&self, date: NaiveDate) -> Result<LunarDate, CalendarError> {
        use chrono::Datelike;
        Err(CalendarError::OutOfRange {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        })
    }

    fn lunar_to_solar(&self, date: LunarDate) -> Result<NaiveDate, CalendarError> {
        Err(CalendarError::OutOfRange {
            year: date.year,
            month: date.month,
            day: date.day,
        })
    }
}

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn as_strings<T: ToString>(values: &[T]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

pub fn degree_values(degrees: &[SoulDegree; 5]) -> [u8; 5] {
    degrees.map(SoulDegree::value)
}

//! # Chart Timestamps
//!
//! A birthday arrives as `YYYYMMDD HHMM` on the solar calendar. The lunar track reuses the
//! same shape, but its fields are plain numbers: lunar day 30 of the second month is valid
//! even though no solar February has a 30th.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

use crate::calendar::LunarDate;
use crate::error::ChartError;

/// Fixed pattern of the birthday input.
pub const BIRTHDAY_FORMAT: &str = "%Y%m%d %H%M";

const BIRTHDAY_LEN: usize = 13;
const SEPARATOR_AT: usize = 8;

/// A whole-minute timestamp on either calendar track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ChartTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl ChartTime {
    pub fn from_solar(datetime: NaiveDateTime) -> Self {
        Self {
            year: datetime.year(),
            month: datetime.month(),
            day: datetime.day(),
            hour: datetime.hour(),
            minute: datetime.minute(),
        }
    }

    /// Builds a lunar timestamp. The clock is carried over from the solar input.
    pub fn from_lunar(date: LunarDate, hour: u32, minute: u32) -> Self {
        Self {
            year: date.year,
            month: date.month,
            day: date.day,
            hour,
            minute,
        }
    }

    /// Same clock on another solar date.
    pub fn on_date(self, date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            ..self
        }
    }

    /// The date part as a solar date, when the fields form one.
    pub fn solar_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    /// The year as a non-negative number for digit arithmetic.
    pub fn year_number(&self) -> u64 {
        u64::from(self.year.unsigned_abs())
    }

    /// `2024/09/29`
    pub fn date_label(&self) -> String {
        format!("{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }

    /// `10:18`
    pub fn clock_label(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

impl fmt::Display for ChartTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date_label(), self.clock_label())
    }
}

impl FromStr for ChartTime {
    type Err = ChartError;

    /// Parses a solar birthday in the fixed `YYYYMMDD HHMM` pattern.
    ///
    /// The shape is checked first so that chrono's lenient number widths cannot accept
    /// things like `2024929 1018`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ChartError::InvalidBirthday {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        if s.len() != BIRTHDAY_LEN {
            return Err(invalid("wrong length"));
        }

        let well_formed = s.bytes().enumerate().all(|(idx, b)| {
            if idx == SEPARATOR_AT {
                b == b' '
            } else {
                b.is_ascii_digit()
            }
        });
        if !well_formed {
            return Err(invalid("unexpected character"));
        }

        let datetime = NaiveDateTime::parse_from_str(s, BIRTHDAY_FORMAT)
            .map_err(|e| invalid(&e.to_string()))?;

        Ok(Self::from_solar(datetime))
    }
}

use chrono::{Datelike, NaiveDate};
use tracing::trace;

use soulchart_common::calendar::{CalendarOracle, LunarDate};
use soulchart_common::error::CalendarError;

use crate::table::{self, FIRST_YEAR, LAST_YEAR};

/// Days from 0001-01-01 (day 1) to 1900-01-31, the first day of lunar year 1900.
const EPOCH_DAYS_FROM_CE: i32 = 693_626;

const MAX_LUNAR_DAY: u32 = 30;

/// Table driven solar/lunar converter. Stateless, so one instance can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChineseCalendar;

impl ChineseCalendar {
    pub fn new() -> Self {
        Self
    }
}

fn out_of_range(year: i32, month: u32, day: u32) -> CalendarError {
    CalendarError::OutOfRange { year, month, day }
}

fn invalid_lunar(date: LunarDate) -> CalendarError {
    CalendarError::InvalidLunarDate {
        year: date.year,
        month: date.month,
        day: date.day,
        is_leap: date.is_leap,
    }
}

impl CalendarOracle for ChineseCalendar {
    fn solar_to_lunar(&self, date: NaiveDate) -> Result<LunarDate, CalendarError> {
        let reject = || out_of_range(date.year(), date.month(), date.day());

        let mut offset: u32 = date
            .num_days_from_ce()
            .checked_sub(EPOCH_DAYS_FROM_CE)
            .and_then(|days| u32::try_from(days).ok())
            .ok_or_else(reject)?;

        let mut year = FIRST_YEAR;
        loop {
            if year > LAST_YEAR {
                return Err(reject());
            }
            let days = table::year_days(year);
            if offset < days {
                break;
            }
            offset -= days;
            year += 1;
        }

        for (month, is_leap, days) in table::months(year) {
            if offset < days {
                let lunar = LunarDate::new(year, month, offset + 1, is_leap);
                trace!("{date} maps to lunar {lunar}");
                return Ok(lunar);
            }
            offset -= days;
        }

        Err(reject())
    }

    /// Days past the end of a 29-day month roll into the following month.
    fn lunar_to_solar(&self, date: LunarDate) -> Result<NaiveDate, CalendarError> {
        if !table::covers(date.year) {
            return Err(out_of_range(date.year, date.month, date.day));
        }
        if !(1..=12).contains(&date.month) || !(1..=MAX_LUNAR_DAY).contains(&date.day) {
            return Err(invalid_lunar(date));
        }
        if date.is_leap && table::leap_month(date.year) != Some(date.month) {
            return Err(invalid_lunar(date));
        }

        let years_before: u32 = (FIRST_YEAR..date.year).map(table::year_days).sum();
        let months_before: u32 = table::months(date.year)
            .take_while(|&(month, is_leap, _)| (month, is_leap) != (date.month, date.is_leap))
            .map(|(_, _, days)| days)
            .sum();
        let offset = years_before + months_before + date.day - 1;

        i32::try_from(offset)
            .ok()
            .and_then(|offset| EPOCH_DAYS_FROM_CE.checked_add(offset))
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .ok_or_else(|| out_of_range(date.year, date.month, date.day))
    }
}

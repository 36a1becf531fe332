//! # Error taxonomy
//!
//! Every failure is reported before any chart is computed. The arithmetic itself is total,
//! so only two things can go wrong: the input is malformed, or the calendar table cannot
//! map the date.

use thiserror::Error;

/// Failures raised by the calendar oracle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// The date falls outside the years covered by the conversion table.
    #[error("date {year:04}-{month:02}-{day:02} is outside the supported calendar range")]
    OutOfRange { year: i32, month: u32, day: u32 },

    /// The lunar date does not exist (bad month, or leap flag on a regular month).
    #[error("invalid lunar date {year:04}-{month:02}-{day:02} (leap: {is_leap})")]
    InvalidLunarDate {
        year: i32,
        month: u32,
        day: u32,
        is_leap: bool,
    },
}

/// Errors reported to the caller of the chart engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error("invalid birthday '{input}': {reason} (expected YYYYMMDD HHMM)")]
    InvalidBirthday { input: String, reason: String },

    #[error("invalid number '{0}': expected one or more decimal digits")]
    InvalidNumber(String),

    #[error("invalid stage label '{0}'")]
    InvalidStageLabel(String),

    #[error("calendar conversion failed: {0}")]
    Calendar(#[from] CalendarError),
}

impl ChartError {
    /// True for errors caused by malformed caller input rather than calendar coverage.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, ChartError::Calendar(_))
    }
}

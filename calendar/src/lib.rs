//! Chinese lunisolar calendar backed by a packed per-year table.
//!
//! [`ChineseCalendar`] implements the [`CalendarOracle`] port from `soulchart-common`.
//! The table covers lunar years 1900 through 2100, which maps to solar dates from
//! 1900-01-31 to 2101-01-28.
//!
//! [`CalendarOracle`]: soulchart_common::calendar::CalendarOracle

mod chinese;
pub mod table;

pub use chinese::ChineseCalendar;

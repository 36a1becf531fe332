//! # Chart Service
//!
//! Implements the "generate a chart" use case.
//!
//! The service resolves the birthday against the lunar calendar, then builds one page per
//! solar/lunar reading. Pages do not depend on each other and are computed in parallel.

use rayon::prelude::*;
use tracing::{debug, warn};

use soulchart_common::calendar::CalendarOracle;
use soulchart_common::config::ChartOptions;
use soulchart_common::error::ChartError;
use soulchart_common::model::chart::{Chart, ChartPage, ChartReport, SumData};
use soulchart_common::model::digits::DigitMultiset;
use soulchart_common::model::stage::Sign;
use soulchart_common::model::time::ChartTime;

use crate::grid::build_grids;
use crate::name::name_to_number;
use crate::reduce::{reduce_to_digit, reduce_trail};
use crate::resolver::{self, TrackPair};
use crate::soul::soul_degrees;
use crate::stages::{stage_inputs, stage_labels};

/// Digits of the year, month and day trails, pooled.
pub fn date_digits(time: &ChartTime) -> DigitMultiset {
    let parts = [time.year_number(), u64::from(time.month), u64::from(time.day)];
    DigitMultiset::from_numbers(
        parts
            .into_iter()
            .flat_map(|part| reduce_trail(part).values().to_vec()),
    )
}

pub fn sum_data(time: &ChartTime) -> SumData {
    SumData {
        year: reduce_to_digit(time.year_number()),
        month: reduce_to_digit(u64::from(time.month)),
        day: reduce_to_digit(u64::from(time.day)),
    }
}

/// Everything derived from one timestamp on one track.
pub fn build_chart(time: ChartTime, track: Sign) -> Chart {
    let sums = sum_data(&time);
    let digits = date_digits(&time);
    let more_than_two = digits.more_than_two();
    let stages = stage_labels(track, stage_inputs(&time, &sums));
    let degrees = soul_degrees(&stages, &digits, more_than_two);

    Chart {
        track,
        time,
        sums,
        digits,
        more_than_two,
        stages,
        degrees,
    }
}

pub fn build_page(pair: TrackPair, options: &ChartOptions) -> ChartPage {
    debug!("Building page for solar {} / lunar {}", pair.solar, pair.lunar);
    let solar = build_chart(pair.solar, Sign::Solar);
    let lunar = build_chart(pair.lunar, Sign::Lunar);
    let grids = build_grids(&solar, &lunar, options);

    ChartPage {
        solar,
        lunar,
        grids,
    }
}

/// Application service for chart generation.
///
/// Delegates calendar conversion to the [`CalendarOracle`] it was built with.
pub struct ChartService {
    calendar: Box<dyn CalendarOracle>,
    options: ChartOptions,
}

impl ChartService {
    pub fn new(calendar: Box<dyn CalendarOracle>) -> Self {
        Self::with_options(calendar, ChartOptions::default())
    }

    pub fn with_options(calendar: Box<dyn CalendarOracle>, options: ChartOptions) -> Self {
        Self { calendar, options }
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    /// Builds the full report for a birth record.
    ///
    /// # Errors
    /// * [`ChartError::InvalidBirthday`] - `birthday` is not `YYYYMMDD HHMM`.
    /// * [`ChartError::Calendar`] - The date cannot be mapped to the lunar calendar.
    pub fn generate(
        &self,
        name: &str,
        nickname: &str,
        birthday: &str,
    ) -> Result<ChartReport, ChartError> {
        let solar: ChartTime = birthday.parse().inspect_err(|e| {
            warn!("Error parsing birthday: {e}");
        })?;

        self.generate_for(name, nickname, solar)
    }

    /// Same as [`ChartService::generate`] for an already parsed solar timestamp.
    pub fn generate_for(
        &self,
        name: &str,
        nickname: &str,
        solar: ChartTime,
    ) -> Result<ChartReport, ChartError> {
        let duality = resolver::resolve(self.calendar.as_ref(), solar)?;

        let pages: Vec<ChartPage> = duality
            .pairs()
            .into_par_iter()
            .map(|pair| build_page(pair, &self.options))
            .collect();

        Ok(ChartReport {
            name: name.to_string(),
            nickname: nickname.to_string(),
            name_number: name_to_number(name),
            nickname_number: name_to_number(nickname),
            is_leap: duality.is_leap(),
            pages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soulchart_calendar::ChineseCalendar;
    use soulchart_common::model::stage::SoulDegree;

    fn time(s: &str) -> ChartTime {
        s.parse().unwrap()
    }

    fn service() -> ChartService {
        ChartService::new(Box::new(ChineseCalendar))
    }

    #[test]
    fn sum_data_reduces_each_part() {
        let sums = sum_data(&time("20240929 1018"));
        assert_eq!(sums, SumData { year: 8, month: 9, day: 2 });
    }

    #[test]
    fn date_digits_pool_whole_trails() {
        // 2024/8, 9, 29/11/2
        let digits = date_digits(&time("20240929 1018"));
        let counts: Vec<(u8, u32)> = digits.iter().collect();
        assert_eq!(counts, vec![(0, 1), (1, 2), (2, 4), (4, 1), (8, 1), (9, 2)]);
        assert!(digits.more_than_two());
    }

    #[test]
    fn solar_chart_for_known_birthday() {
        let chart = build_chart(time("20240929 1018"), Sign::Solar);
        let stages: Vec<String> = chart.stages.iter().map(ToString::to_string).collect();
        assert_eq!(stages, vec!["+8", "+17/8", "+19/10/1", "+20/2", "+29/11/2"]);
        assert_eq!(chart.degrees.map(SoulDegree::value), [6, 5, 6, 6, 6]);
    }

    #[test]
    fn chart_without_crowded_digits_keeps_sevens() {
        let chart = build_chart(time("20230401 0000"), Sign::Solar);
        assert!(!chart.more_than_two);
        let stages: Vec<String> = chart.stages.iter().map(ToString::to_string).collect();
        assert_eq!(stages, vec!["+7", "+11/2", "+12/3", "+12/3", "+12/3"]);
        assert_eq!(chart.degrees.map(SoulDegree::value), [7; 5]);
    }

    #[test]
    fn regular_birthday_gives_one_page() {
        let report = service().generate("Tom", "", "20240929 1018").unwrap();
        assert!(!report.is_leap);
        assert_eq!(report.pages.len(), 1);
        assert_eq!(report.name_number.to_string(), "20/2");
        assert_eq!(report.nickname_number.to_string(), "0");

        let page = &report.pages[0];
        assert_eq!(page.lunar.time.to_string(), "2024/08/27 10:18");
        let lunar: Vec<String> = page.lunar.stages.iter().map(ToString::to_string).collect();
        assert_eq!(lunar, vec!["-8", "-16/7", "-25/7", "-26/8", "-35/8"]);
        assert_eq!(page.lunar.degrees.map(SoulDegree::value), [6, 4, 5, 5, 4]);
    }

    #[test]
    fn leap_birthday_gives_two_pages_in_order() {
        let report = service().generate("", "", "20230401 0000").unwrap();
        assert!(report.is_leap);
        assert_eq!(report.pages.len(), 2);
        assert_eq!(report.pages[0].solar.time.date_label(), "2023/04/01");
        assert_eq!(report.pages[1].solar.time.date_label(), "2023/04/30");
        assert_eq!(report.pages[1].lunar.time.date_label(), "2023/03/11");
    }

    #[test]
    fn grid_sizes() {
        let report = service().generate("", "", "20240929 1018").unwrap();
        let grids = &report.pages[0].grids;
        assert_eq!(grids.yearly.values.solar.len(), 100);
        assert_eq!(grids.yearly.values.lunar.len(), 100);
        assert_eq!(grids.yearly.years.first(), Some(&2024));
        assert_eq!(grids.yearly.years.last(), Some(&2123));
        assert_eq!(grids.monthly.solar.len(), 12);
        assert_eq!(grids.monthly.lunar.len(), 12);
        assert_eq!(grids.daily.solar.len(), 31);
        assert_eq!(grids.daily.lunar.len(), 30);
    }

    #[test]
    fn malformed_birthday_is_an_input_error() {
        let err = service().generate("", "", "2024-09-29").unwrap_err();
        assert!(err.is_input_error());
    }
}

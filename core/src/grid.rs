//! Grid values for the yearly, monthly and daily projection tables.

use soulchart_common::config::ChartOptions;
use soulchart_common::model::chart::{Chart, Grids, TrackColumns, YearlyGrid};
use soulchart_common::model::stage::{Sign, StageLabel};

use crate::reduce::{reduce_to_digit, reduce_trail};

/// One label per axis value: `sign` + trail of `base[0] + base[1] + reduce_to_digit(value)`.
pub fn grid_values<I>(axis: I, base: [u64; 2], sign: Sign) -> Vec<StageLabel>
where
    I: IntoIterator<Item = u64>,
{
    axis.into_iter()
        .map(|value| {
            let total = base[0] + base[1] + reduce_to_digit(value);
            StageLabel::new(sign, reduce_trail(total))
        })
        .collect()
}

/// Cuts the lunar daily column to the longest lunar month.
///
/// Lunar months have 29 or 30 days. The actual length of the birth month is not looked
/// up; every month is shown with `limit` days.
pub fn limit_lunar_days(mut values: Vec<StageLabel>, limit: usize) -> Vec<StageLabel> {
    values.truncate(limit);
    values
}

fn yearly(solar: &Chart, lunar: &Chart, options: &ChartOptions) -> YearlyGrid {
    let first_year = solar.time.year;
    let span = options.yearly_span;
    let years: Vec<i32> = (0..span)
        .filter_map(|offset| i32::try_from(offset).ok())
        .map(|offset| first_year + offset)
        .collect();
    let axis = || years.iter().map(|&year| u64::from(year.unsigned_abs()));

    YearlyGrid {
        sequence: (1..=span).collect(),
        values: TrackColumns {
            solar: grid_values(axis(), [solar.sums.month, solar.sums.day], Sign::Solar),
            lunar: grid_values(axis(), [lunar.sums.month, lunar.sums.day], Sign::Lunar),
        },
        years,
    }
}

fn monthly(solar: &Chart, lunar: &Chart, options: &ChartOptions) -> TrackColumns {
    let axis = || (1..=u64::from(options.months));
    TrackColumns {
        solar: grid_values(axis(), [solar.sums.year, solar.sums.day], Sign::Solar),
        lunar: grid_values(axis(), [lunar.sums.year, lunar.sums.day], Sign::Lunar),
    }
}

fn daily(solar: &Chart, lunar: &Chart, options: &ChartOptions) -> TrackColumns {
    let axis = || (1..=u64::from(options.days));
    let lunar_values = grid_values(axis(), [lunar.sums.year, lunar.sums.month], Sign::Lunar);
    TrackColumns {
        solar: grid_values(axis(), [solar.sums.year, solar.sums.month], Sign::Solar),
        lunar: limit_lunar_days(lunar_values, options.lunar_day_limit),
    }
}

/// All three tables for a solar/lunar chart pair.
///
/// The yearly axis follows the solar birth year on both tracks.
pub fn build_grids(solar: &Chart, lunar: &Chart, options: &ChartOptions) -> Grids {
    Grids {
        yearly: yearly(solar, lunar, options),
        monthly: monthly(solar, lunar, options),
        daily: daily(solar, lunar, options),
    }
}

//! # Calendar Duality
//!
//! A solar birthday maps to exactly one lunar date. When that lunar date sits in a leap
//! month, the same lunar day number also exists in the following regular month, so the
//! chart is computed a second time for that reading.

use soulchart_common::calendar::{CalendarOracle, LunarDate};
use soulchart_common::error::ChartError;
use soulchart_common::model::time::ChartTime;
use tracing::{debug, info};

/// A solar/lunar timestamp pair to chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackPair {
    pub solar: ChartTime,
    pub lunar: ChartTime,
}

/// Result of resolving a solar birthday against the lunar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duality {
    pub solar: ChartTime,
    pub lunar: ChartTime,
    pub lunar_date: LunarDate,
    /// Solar date of the same lunar day in the month after the leap month.
    pub alt_solar: Option<ChartTime>,
}

impl Duality {
    pub fn is_leap(&self) -> bool {
        self.alt_solar.is_some()
    }

    /// The pairs to chart, the regular reading first.
    pub fn pairs(&self) -> Vec<TrackPair> {
        let mut pairs = vec![TrackPair {
            solar: self.solar,
            lunar: self.lunar,
        }];

        if let Some(alt_solar) = self.alt_solar {
            let lunar = ChartTime {
                month: self.lunar.month + 1,
                ..self.lunar
            };
            pairs.push(TrackPair {
                solar: alt_solar,
                lunar,
            });
        }

        pairs
    }
}

/// Converts `solar` to the lunar track and detects leap-month ambiguity.
///
/// # Errors
/// * [`ChartError::Calendar`] - The oracle cannot map the date, or the month after a leap
///   month cannot be mapped back.
pub fn resolve<O>(oracle: &O, solar: ChartTime) -> Result<Duality, ChartError>
where
    O: CalendarOracle + ?Sized,
{
    let solar_date = solar.solar_date().ok_or_else(|| ChartError::InvalidBirthday {
        input: solar.to_string(),
        reason: "not a calendar date".to_string(),
    })?;

    let lunar_date = oracle.solar_to_lunar(solar_date)?;
    let lunar = ChartTime::from_lunar(lunar_date, solar.hour, solar.minute);
    debug!("Resolved {solar} to lunar {lunar_date}");

    if !lunar_date.is_leap {
        return Ok(Duality {
            solar,
            lunar,
            lunar_date,
            alt_solar: None,
        });
    }

    let following = LunarDate::new(lunar_date.year, lunar_date.month + 1, lunar_date.day, false);
    let alt_date = oracle.lunar_to_solar(following)?;
    let alt_solar = solar.on_date(alt_date);
    info!("Lunar date {lunar_date} is in a leap month, also charting {alt_solar}");

    Ok(Duality {
        solar,
        lunar,
        lunar_date,
        alt_solar: Some(alt_solar),
    })
}

use serde::Serialize;

use crate::model::digits::DigitMultiset;
use crate::model::stage::{LifeStage, Sign, SoulDegree, StageLabel};
use crate::model::time::ChartTime;
use crate::model::trail::DigitTrail;

/// Reduced digits of a date's year, month and day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SumData {
    pub year: u64,
    pub month: u64,
    pub day: u64,
}

/// Everything derived from one date on one track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chart {
    pub track: Sign,
    pub time: ChartTime,
    pub sums: SumData,
    pub digits: DigitMultiset,
    pub more_than_two: bool,
    pub stages: [StageLabel; 5],
    pub degrees: [SoulDegree; 5],
}

impl Chart {
    /// Stages paired with their labels and degrees, oldest first.
    pub fn stage_rows(&self) -> impl Iterator<Item = (LifeStage, &StageLabel, SoulDegree)> + '_ {
        LifeStage::ALL
            .into_iter()
            .zip(self.stages.iter())
            .zip(self.degrees.iter().copied())
            .map(|((stage, label), degree)| (stage, label, degree))
    }
}

/// Grid values for the solar and lunar tracks along one axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackColumns {
    pub solar: Vec<StageLabel>,
    pub lunar: Vec<StageLabel>,
}

/// The yearly projection, keyed by age and by calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearlyGrid {
    /// Running sequence number (age in years, starting at 1).
    pub sequence: Vec<u32>,
    pub years: Vec<i32>,
    pub values: TrackColumns,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grids {
    pub yearly: YearlyGrid,
    pub monthly: TrackColumns,
    pub daily: TrackColumns,
}

/// One rendered page: a solar chart, its lunar counterpart and their grids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPage {
    pub solar: Chart,
    pub lunar: Chart,
    pub grids: Grids,
}

/// All pages produced for one birth record.
///
/// A second page exists only when the birth date falls in a lunar leap month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartReport {
    pub name: String,
    pub nickname: String,
    pub name_number: DigitTrail,
    pub nickname_number: DigitTrail,
    pub is_leap: bool,
    pub pages: Vec<ChartPage>,
}

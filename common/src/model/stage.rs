use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::ChartError;
use crate::model::trail::DigitTrail;

/// Calendar track a value was computed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    /// Rendered as `+`.
    Solar,
    /// Rendered as `-`.
    Lunar,
}

impl Sign {
    pub fn symbol(self) -> char {
        match self {
            Sign::Solar => '+',
            Sign::Lunar => '-',
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Sign::Solar),
            '-' => Some(Sign::Lunar),
            _ => None,
        }
    }
}

/// The five life stages, in the order the accumulator produces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeStage {
    OldAge,
    MiddleAge,
    Prime,
    Youth,
    Childhood,
}

impl LifeStage {
    pub const ALL: [LifeStage; 5] = [
        LifeStage::OldAge,
        LifeStage::MiddleAge,
        LifeStage::Prime,
        LifeStage::Youth,
        LifeStage::Childhood,
    ];

    pub fn title(self) -> &'static str {
        match self {
            LifeStage::OldAge => "Old age",
            LifeStage::MiddleAge => "Middle age",
            LifeStage::Prime => "Prime (main)",
            LifeStage::Youth => "Youth",
            LifeStage::Childhood => "Childhood",
        }
    }
}

/// A signed digit trail, e.g. `+14/5` or `-19/10/1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StageLabel {
    sign: Sign,
    trail: DigitTrail,
}

impl StageLabel {
    pub fn new(sign: Sign, trail: DigitTrail) -> Self {
        Self { sign, trail }
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn trail(&self) -> &DigitTrail {
        &self.trail
    }

    /// The `/`-separated parts of the label with the sign stripped.
    pub fn layers(&self) -> Vec<String> {
        self.trail.layers()
    }
}

impl fmt::Display for StageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.sign.symbol(), self.trail)
    }
}

impl FromStr for StageLabel {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let sign = chars
            .next()
            .and_then(Sign::from_symbol)
            .ok_or_else(|| ChartError::InvalidStageLabel(s.to_string()))?;
        let trail = chars
            .as_str()
            .parse::<DigitTrail>()
            .map_err(|_| ChartError::InvalidStageLabel(s.to_string()))?;

        Ok(Self { sign, trail })
    }
}

impl Serialize for StageLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// How strongly a stage's digits show up in the birth date, from 1 to 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SoulDegree(u8);

impl SoulDegree {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 7;

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    /// Clamps `value` into the valid range.
    pub fn clamped(value: u8) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for SoulDegree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

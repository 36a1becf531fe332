//! # Chart Models
//!
//! Value types shared by the engine, the sheet builder and the CLI.
//!
//! ## Value Objects
//! * [`time::ChartTime`]: a whole-minute timestamp on either calendar track.
//! * [`trail::DigitTrail`]: successive digit sums of a number down to a fixed point.
//! * [`digits::DigitMultiset`]: digit counts pooled from a date's reduced parts.
//! * [`stage::StageLabel`]: a signed trail naming one life stage.
//!
//! ## Aggregates
//! * [`chart::Chart`]: everything derived from one date on one track.
//! * [`chart::ChartReport`]: the pages produced for one birth record.
//!
//! Everything here is computed once and never mutated afterwards.

pub mod chart;
pub mod digits;
pub mod stage;
pub mod time;
pub mod trail;

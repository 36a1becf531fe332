//! Shared models, errors and ports for the soulchart workspace.
//!
//! * [`model`]: value types for dates, digit trails, stage labels and charts.
//! * [`calendar`]: the lunisolar conversion port that calendar backends implement.
//! * [`error`]: the error taxonomy reported to callers.
//! * [`config`]: CLI-wide switches.

pub mod calendar;
pub mod config;
pub mod error;
pub mod model;

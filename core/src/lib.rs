//! # Numerology Engine
//!
//! Turns a birthday and a name into chart values.
//!
//! * [`reduce`]: the digit reduction primitive every other module builds on.
//! * [`name`]: letter-to-number mapping.
//! * [`resolver`]: solar/lunar duality, including the leap-month second reading.
//! * [`stages`] and [`soul`]: stage labels and their soul degrees.
//! * [`grid`]: yearly, monthly and daily projection values.
//! * [`chart`]: the service that ties the steps together.
//! * [`sheet`]: tables handed to a document renderer.

pub mod chart;
pub mod grid;
pub mod name;
pub mod reduce;
pub mod resolver;
pub mod sheet;
pub mod soul;
pub mod stages;

pub use chart::ChartService;

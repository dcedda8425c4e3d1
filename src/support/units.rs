//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., resistance, voltage,
//! power). This module provides extensions that are useful for thermoelectric
//! modeling but aren't included in [`uom`]:
//!
//! - [`SeebeckCoefficient`] and [`PowerFactor`] quantity aliases, with the
//!   [`volts_per_kelvin`] and [`microvolts_per_kelvin`] constructors.
//! - The [`TemperatureDifference`] trait, which provides
//!   [`minus`](TemperatureDifference::minus) and
//!   [`midpoint`](TemperatureDifference::midpoint) methods for working with
//!   absolute temperatures. This extension is currently needed due to
//!   limitations in [`uom`]; see [`TemperatureDifference`] for details.

mod quantities;
mod temperature_difference;

pub use quantities::{PowerFactor, SeebeckCoefficient, microvolts_per_kelvin, volts_per_kelvin};
pub use temperature_difference::TemperatureDifference;

//! Seams between thermoelectric sources and the electrical solvers.

use uom::si::f64::{ElectricPotential, ElectricalResistance, TemperatureInterval};

/// A thermoelectric voltage source driven by a temperature gradient.
///
/// Implemented by [`ThermoelectricLeg`](super::ThermoelectricLeg) and
/// [`Couple`](super::Couple). The solvers are written against this trait so
/// they work identically for a single leg, a p-n couple, or any future
/// composite element.
pub trait TegSource {
    /// Returns the open-circuit voltage produced by the given temperature
    /// gradient.
    ///
    /// For a degenerate couple (both legs the same carrier polarity) the
    /// algebraic result may be near zero or negative; that is a caller-visible
    /// degenerate configuration, not an error.
    fn open_circuit_voltage(&self, delta_t: TemperatureInterval) -> ElectricPotential;

    /// Returns the internal electrical resistance of the source.
    fn internal_resistance(&self) -> ElectricalResistance;
}

//! Thermoelectric generator models.
//!
//! The computational core lives in the internal `core` module and is
//! re-exported here: element types ([`ThermoelectricLeg`], [`Couple`]), the
//! load-sweep solver ([`solve`]), the target-voltage solver
//! ([`load_for_voltage`]), and the module bank sizing helpers
//! ([`module_count`], [`ModuleArray`]).
//!
//! [`Generator`] is the thin [`twine_core::Model`] adapter over the core
//! solver.

mod core;

pub use core::{
    Battery, Couple, GivenVoltageConfig, GivenVoltageError, LegGeometry, LoadSweep, ModuleArray,
    ModuleCount, OperatingPoint, PowerCurve, RoundingPolicy, TegSource, ThermoelectricLeg,
    load_for_voltage, module_count, operating_point, solve,
};

use twine_core::Model;
use uom::si::f64::TemperatureInterval;

use crate::support::constraint::InvalidParameter;

/// A thermoelectric source and load sweep, exposed as a [`Model`] whose input
/// is the applied temperature gradient.
///
/// # Example
///
/// ```
/// use teg_models::models::thermoelectric::generator::{
///     Generator, LegGeometry, LoadSweep, TegSource, ThermoelectricLeg,
/// };
/// use teg_models::support::materials::pbte;
/// use twine_core::Model;
/// use uom::si::{
///     area::square_millimeter, f64::{Area, Length, TemperatureInterval, ThermodynamicTemperature},
///     length::millimeter, temperature_interval::kelvin,
///     thermodynamic_temperature::kelvin as abs_kelvin,
/// };
///
/// let table = pbte();
/// let room = table.nearest(ThermodynamicTemperature::new::<abs_kelvin>(323.0));
/// let leg = ThermoelectricLeg::new(
///     room.properties,
///     LegGeometry::new(
///         Length::new::<millimeter>(5.0),
///         Area::new::<square_millimeter>(10.0),
///     )?,
/// );
///
/// let loads = LoadSweep::around(leg.internal_resistance(), 500)?;
/// let generator = Generator::new(leg, loads);
///
/// let curve = generator.call(&TemperatureInterval::new::<kelvin>(100.0))?;
/// assert!(curve.peak.power.value > 0.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Generator<S> {
    source: S,
    loads: LoadSweep,
}

impl<S: TegSource> Generator<S> {
    /// Creates a generator model from a source and a validated load sweep.
    pub fn new(source: S, loads: LoadSweep) -> Self {
        Self { source, loads }
    }

    /// Returns the thermoelectric source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the load sweep.
    pub fn loads(&self) -> &LoadSweep {
        &self.loads
    }
}

impl<S: TegSource> Model for Generator<S> {
    type Input = TemperatureInterval;
    type Output = PowerCurve;
    type Error = InvalidParameter;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        solve(&self.source, *input, &self.loads)
    }
}

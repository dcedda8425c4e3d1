use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for working with absolute temperatures.
///
/// [`uom`] distinguishes absolute temperatures ([`ThermodynamicTemperature`])
/// from temperature differences ([`TemperatureInterval`]) and does not allow
/// subtracting or averaging two absolute temperatures directly. This trait
/// fills both gaps:
///
/// - [`minus`](Self::minus) subtracts two absolute temperatures and returns
///   an interval (e.g., the gradient across a thermoelectric leg).
/// - [`midpoint`](Self::midpoint) returns the mean of two absolute
///   temperatures (e.g., the mean leg temperature `T_m` used when evaluating
///   temperature-dependent figures of merit).
///
/// For background on this distinction:
/// [#380](https://github.com/iliekturtles/uom/issues/380),
/// [#289](https://github.com/iliekturtles/uom/issues/289).
///
/// [`TemperatureInterval`]: uom::si::f64::TemperatureInterval
/// [`ThermodynamicTemperature`]: uom::si::f64::ThermodynamicTemperature
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;

    /// Returns the temperature halfway between `self` and `other`.
    fn midpoint(self, other: Self) -> Self;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }

    fn midpoint(self, other: Self) -> Self {
        ThermodynamicTemperature::new::<abs_kelvin>(
            0.5 * (self.get::<abs_kelvin>() + other.get::<abs_kelvin>()),
        )
    }
}

use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, N3, P1, P2, Z0},
};

/// Seebeck coefficient, V/K in SI.
///
/// The sign encodes the dominant charge-carrier type: negative for n-type
/// materials, positive for p-type.
pub type SeebeckCoefficient = Quantity<ISQ<P2, P1, N3, N1, N1, Z0, Z0>, SI<f64>, f64>;

/// Thermoelectric power factor (`S²σ`), W/m·K² in SI.
pub type PowerFactor = Quantity<ISQ<P1, P1, N3, Z0, N2, Z0, Z0>, SI<f64>, f64>;

/// Constructs a [`SeebeckCoefficient`] from a value in volts per kelvin.
///
/// [`uom`] has no named unit for this quantity, so values are built by
/// dividing a potential by a unit temperature interval.
#[must_use]
pub fn volts_per_kelvin(value: f64) -> SeebeckCoefficient {
    use uom::si::{
        electric_potential::volt, f64::ElectricPotential, f64::TemperatureInterval,
        temperature_interval::kelvin,
    };

    ElectricPotential::new::<volt>(value) / TemperatureInterval::new::<kelvin>(1.0)
}

/// Constructs a [`SeebeckCoefficient`] from a value in microvolts per kelvin,
/// the unit used by most published material tables.
#[must_use]
pub fn microvolts_per_kelvin(value: f64) -> SeebeckCoefficient {
    volts_per_kelvin(value * 1e-6)
}

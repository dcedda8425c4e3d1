use uom::si::f64::{ElectricPotential, ElectricalResistance, TemperatureInterval};

use crate::support::materials::MaterialProperties;

use super::LegGeometry;

use crate::models::thermoelectric::generator::core::traits::TegSource;

/// One physical thermoelectric leg: a material plus its geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermoelectricLeg {
    material: MaterialProperties,
    geometry: LegGeometry,
}

impl ThermoelectricLeg {
    /// Composes a leg from already-validated material properties and geometry.
    #[must_use]
    pub fn new(material: MaterialProperties, geometry: LegGeometry) -> Self {
        Self { material, geometry }
    }

    /// Returns the leg's material properties.
    #[must_use]
    pub fn material(&self) -> &MaterialProperties {
        &self.material
    }

    /// Returns the leg's geometry.
    #[must_use]
    pub fn geometry(&self) -> &LegGeometry {
        &self.geometry
    }

    /// Returns the leg's electrical resistance, `L / (σ·A)`.
    #[must_use]
    pub fn resistance(&self) -> ElectricalResistance {
        self.geometry.length() / (self.material.electrical_conductivity() * self.geometry.area())
    }
}

impl TegSource for ThermoelectricLeg {
    /// A single leg produces `ΔT·|S|` regardless of carrier polarity.
    fn open_circuit_voltage(&self, delta_t: TemperatureInterval) -> ElectricPotential {
        (self.material.seebeck() * delta_t).abs()
    }

    fn internal_resistance(&self) -> ElectricalResistance {
        self.resistance()
    }
}

use uom::si::{
    electrical_conductivity::siemens_per_meter,
    f64::{ElectricalConductivity, ThermalConductivity, ThermodynamicTemperature},
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::units::microvolts_per_kelvin;

use super::{MaterialProperties, PropertyRow, PropertyTable};

/// Published properties of p-type tin selenide (SnSe) at 323 K.
///
/// SnSe's exceptionally high Seebeck coefficient makes it the usual p-type
/// partner for an n-type PbTe leg.
#[must_use]
pub fn snse() -> PropertyTable {
    PropertyTable::new_unchecked(vec![PropertyRow {
        temperature: ThermodynamicTemperature::new::<kelvin>(323.0),
        properties: MaterialProperties::new_unchecked(
            microvolts_per_kelvin(357.0),
            ElectricalConductivity::new::<siemens_per_meter>(117.0),
            ThermalConductivity::new::<watt_per_meter_kelvin>(0.88),
        ),
        zt: None,
    }])
}

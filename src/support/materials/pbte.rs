use uom::si::{
    electrical_conductivity::siemens_per_meter,
    f64::{ElectricalConductivity, Ratio, ThermalConductivity, ThermodynamicTemperature},
    ratio::ratio,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::units::microvolts_per_kelvin;

use super::{MaterialProperties, PropertyRow, PropertyTable};

/// Published properties of n-type lead telluride (PbTe) at six temperatures
/// between 323 K and 821 K.
///
/// Seebeck coefficients are negative throughout: PbTe as tabulated here is
/// n-type.
#[must_use]
pub fn pbte() -> PropertyTable {
    let rows = [
        // (T [K], S [µV/K], σ [S/m], κ [W/m·K], ZT)
        (323.0, -231.0, 22_500.0, 2.17, 0.18),
        (428.0, -270.0, 24_079.0, 1.58, 0.48),
        (529.0, -264.0, 13_026.0, 1.31, 0.57),
        (629.0, -298.0, 12_039.0, 1.19, 0.65),
        (724.0, -308.0, 17_961.0, 1.30, 0.71),
        (821.0, -320.0, 13_224.0, 1.19, 0.74),
    ];

    PropertyTable::new_unchecked(
        rows.into_iter()
            .map(|(t, s, sigma, kappa, zt)| PropertyRow {
                temperature: ThermodynamicTemperature::new::<kelvin>(t),
                properties: MaterialProperties::new_unchecked(
                    microvolts_per_kelvin(s),
                    ElectricalConductivity::new::<siemens_per_meter>(sigma),
                    ThermalConductivity::new::<watt_per_meter_kelvin>(kappa),
                ),
                zt: Some(Ratio::new::<ratio>(zt)),
            })
            .collect(),
    )
}

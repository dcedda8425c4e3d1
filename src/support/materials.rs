//! Validated thermoelectric material properties and tabulated datasets.
//!
//! A [`MaterialProperties`] value holds the three coefficients the electrical
//! models need: the Seebeck coefficient (signed, encoding carrier type), the
//! electrical conductivity, and the thermal conductivity. Values are
//! validated at construction and immutable thereafter.
//!
//! Published property tables list these coefficients at discrete
//! temperatures. [`PropertyTable`] is the typed form of such a table, with a
//! nearest-temperature lookup. The [`pbte`] and [`snse`] datasets reproduce
//! the lead telluride and tin selenide tables used throughout this crate's
//! tests and documentation.

mod pbte;
mod snse;

pub use pbte::pbte;
pub use snse::snse;

use uom::si::{
    electrical_conductivity::siemens_per_meter,
    f64::{ElectricalConductivity, ElectricalResistivity, Ratio, ThermalConductivity,
        ThermodynamicTemperature},
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{ConstraintError, InvalidParameter, StrictlyPositive},
    units::SeebeckCoefficient,
};

/// Thermoelectric coefficients of one material at one temperature.
///
/// Both conductivities are guaranteed to be strictly positive. The Seebeck
/// coefficient is signed: negative for n-type materials, positive for p-type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialProperties {
    seebeck: SeebeckCoefficient,
    electrical_conductivity: ElectricalConductivity,
    thermal_conductivity: ThermalConductivity,
}

impl MaterialProperties {
    /// Constructs validated material properties.
    ///
    /// # Errors
    ///
    /// Returns an error if either conductivity is not strictly positive.
    pub fn new(
        seebeck: SeebeckCoefficient,
        electrical_conductivity: ElectricalConductivity,
        thermal_conductivity: ThermalConductivity,
    ) -> Result<Self, InvalidParameter> {
        let electrical_conductivity = StrictlyPositive::new(electrical_conductivity)
            .map_err(|constraint| {
                InvalidParameter::new(
                    "electrical conductivity",
                    electrical_conductivity.get::<siemens_per_meter>(),
                    constraint,
                )
            })?
            .into_inner();
        let thermal_conductivity = StrictlyPositive::new(thermal_conductivity)
            .map_err(|constraint| {
                InvalidParameter::new(
                    "thermal conductivity",
                    thermal_conductivity.get::<watt_per_meter_kelvin>(),
                    constraint,
                )
            })?
            .into_inner();

        Ok(Self {
            seebeck,
            electrical_conductivity,
            thermal_conductivity,
        })
    }

    /// Constructs material properties without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure both conductivities are strictly positive.
    /// Violating this invariant will result in unexpected errors downstream.
    #[must_use]
    pub fn new_unchecked(
        seebeck: SeebeckCoefficient,
        electrical_conductivity: ElectricalConductivity,
        thermal_conductivity: ThermalConductivity,
    ) -> Self {
        Self {
            seebeck,
            electrical_conductivity,
            thermal_conductivity,
        }
    }

    /// Returns the Seebeck coefficient.
    #[must_use]
    pub fn seebeck(&self) -> SeebeckCoefficient {
        self.seebeck
    }

    /// Returns the electrical conductivity.
    #[must_use]
    pub fn electrical_conductivity(&self) -> ElectricalConductivity {
        self.electrical_conductivity
    }

    /// Returns the thermal conductivity.
    #[must_use]
    pub fn thermal_conductivity(&self) -> ThermalConductivity {
        self.thermal_conductivity
    }

    /// Returns the electrical resistivity (`1/σ`).
    #[must_use]
    pub fn resistivity(&self) -> ElectricalResistivity {
        self.electrical_conductivity.recip()
    }
}

/// One row of a material property table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyRow {
    /// Temperature at which the properties were measured.
    pub temperature: ThermodynamicTemperature,

    /// Material properties at that temperature.
    pub properties: MaterialProperties,

    /// Published figure of merit (ZT) at that temperature, where available.
    pub zt: Option<Ratio>,
}

/// A material property table indexed by temperature.
///
/// Rows are guaranteed to be non-empty and sorted by strictly increasing
/// temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyTable {
    rows: Vec<PropertyRow>,
}

impl PropertyTable {
    /// Constructs a validated property table.
    ///
    /// # Errors
    ///
    /// Returns an error if `rows` is empty or row temperatures are not
    /// strictly increasing.
    pub fn new(rows: Vec<PropertyRow>) -> Result<Self, InvalidParameter> {
        if rows.is_empty() {
            return Err(InvalidParameter::new(
                "property row count",
                0.0,
                ConstraintError::Zero,
            ));
        }
        for pair in rows.windows(2) {
            if pair[1].temperature <= pair[0].temperature {
                return Err(InvalidParameter::new(
                    "row temperature",
                    pair[1].temperature.get::<kelvin>(),
                    ConstraintError::BelowMinimum,
                ));
            }
        }
        Ok(Self { rows })
    }

    /// Constructs a property table without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure `rows` is non-empty and sorted by strictly
    /// increasing temperature.
    #[must_use]
    pub fn new_unchecked(rows: Vec<PropertyRow>) -> Self {
        Self { rows }
    }

    /// Returns all rows, ordered by increasing temperature.
    #[must_use]
    pub fn rows(&self) -> &[PropertyRow] {
        &self.rows
    }

    /// Returns the row whose temperature is closest to `temperature`.
    ///
    /// Ties between two equidistant rows go to the lower-temperature row.
    #[must_use]
    pub fn nearest(&self, temperature: ThermodynamicTemperature) -> &PropertyRow {
        let target = temperature.get::<kelvin>();
        let mut best = &self.rows[0];
        let mut best_distance = (best.temperature.get::<kelvin>() - target).abs();
        for row in &self.rows[1..] {
            let distance = (row.temperature.get::<kelvin>() - target).abs();
            if distance < best_distance {
                best = row;
                best_distance = distance;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::ratio::ratio;

    use crate::support::units::microvolts_per_kelvin;

    fn properties(seebeck_uv_per_k: f64) -> MaterialProperties {
        MaterialProperties::new_unchecked(
            microvolts_per_kelvin(seebeck_uv_per_k),
            ElectricalConductivity::new::<siemens_per_meter>(10_000.0),
            ThermalConductivity::new::<watt_per_meter_kelvin>(2.0),
        )
    }

    fn row(temperature_k: f64) -> PropertyRow {
        PropertyRow {
            temperature: ThermodynamicTemperature::new::<kelvin>(temperature_k),
            properties: properties(-200.0),
            zt: None,
        }
    }

    #[test]
    fn rejects_non_positive_conductivities() {
        let seebeck = microvolts_per_kelvin(-231.0);
        let kappa = ThermalConductivity::new::<watt_per_meter_kelvin>(2.17);

        let err = MaterialProperties::new(
            seebeck,
            ElectricalConductivity::new::<siemens_per_meter>(0.0),
            kappa,
        )
        .unwrap_err();
        assert_eq!(err.parameter, "electrical conductivity");
        assert_eq!(err.constraint, ConstraintError::Zero);

        let err = MaterialProperties::new(
            seebeck,
            ElectricalConductivity::new::<siemens_per_meter>(22_500.0),
            ThermalConductivity::new::<watt_per_meter_kelvin>(-1.0),
        )
        .unwrap_err();
        assert_eq!(err.parameter, "thermal conductivity");
        assert_eq!(err.constraint, ConstraintError::Negative);
    }

    #[test]
    fn resistivity_is_reciprocal_conductivity() {
        use uom::si::electrical_resistivity::ohm_meter;

        let material = properties(-231.0);
        assert_relative_eq!(material.resistivity().get::<ohm_meter>(), 1.0 / 10_000.0);
    }

    #[test]
    fn rejects_empty_and_unsorted_tables() {
        let err = PropertyTable::new(vec![]).unwrap_err();
        assert_eq!(err.constraint, ConstraintError::Zero);

        let err = PropertyTable::new(vec![row(400.0), row(300.0)]).unwrap_err();
        assert_eq!(err.parameter, "row temperature");
    }

    #[test]
    fn nearest_picks_closest_row_with_ties_going_low() {
        let table = PropertyTable::new(vec![row(300.0), row(400.0), row(500.0)]).unwrap();

        let probe = |t: f64| {
            table
                .nearest(ThermodynamicTemperature::new::<kelvin>(t))
                .temperature
                .get::<kelvin>()
        };

        assert_relative_eq!(probe(290.0), 300.0);
        assert_relative_eq!(probe(420.0), 400.0);
        assert_relative_eq!(probe(1000.0), 500.0);
        // Equidistant between 300 and 400.
        assert_relative_eq!(probe(350.0), 300.0);
    }

    #[test]
    fn pbte_table_matches_published_values() {
        let table = pbte();
        assert_eq!(table.rows().len(), 6);

        let room = table.nearest(ThermodynamicTemperature::new::<kelvin>(300.0));
        assert_relative_eq!(room.temperature.get::<kelvin>(), 323.0);
        assert_relative_eq!(
            room.properties
                .electrical_conductivity()
                .get::<siemens_per_meter>(),
            22_500.0
        );
        assert_relative_eq!(room.zt.unwrap().get::<ratio>(), 0.18);

        // Seebeck coefficient stays n-type across the whole table.
        for row in table.rows() {
            assert!(row.properties.seebeck().value < 0.0);
        }
    }

    #[test]
    fn snse_is_p_type() {
        let table = snse();
        let row = table.nearest(ThermodynamicTemperature::new::<kelvin>(323.0));
        assert!(row.properties.seebeck().value > 0.0);
        assert_relative_eq!(
            row.properties
                .electrical_conductivity()
                .get::<siemens_per_meter>(),
            117.0
        );
    }
}

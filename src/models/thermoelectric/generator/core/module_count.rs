//! Sizing a series/parallel module array for a device's power needs.
//!
//! A single module operating point rarely matches a device directly, so
//! modules are stacked in series to reach the required voltage and in
//! parallel to reach the required current. This module computes those
//! counts and models the resulting array, including how long it takes to
//! charge a battery of known capacity.

use num_traits::Zero;
use uom::si::{
    electric_current::ampere,
    electric_potential::volt,
    f64::{ElectricCharge, ElectricCurrent, ElectricPotential, Energy, Power, Time},
    power::watt,
    ratio::ratio,
};

use crate::support::constraint::{InvalidParameter, StrictlyPositive};

use super::OperatingPoint;

/// How fractional module counts are resolved to whole modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundingPolicy {
    /// Rounds each count down.
    ///
    /// Reproduces the historical sizing behavior, which can leave the array
    /// short of the requirement whenever a count is fractional.
    Floor,

    /// Rounds each count up, so the array meets or exceeds the requirement.
    Ceiling,
}

/// A series/parallel module count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleCount {
    /// Modules connected in series to build up voltage.
    pub series: u32,

    /// Series strings connected in parallel to build up current.
    pub parallel: u32,
}

/// Computes how many modules at `operating` are needed to supply
/// `needed_voltage` and `needed_current`.
///
/// The series count scales voltage and the parallel count scales current;
/// fractional counts are resolved per `policy`. With [`RoundingPolicy::Floor`]
/// a requirement below a single module's output yields a count of zero.
///
/// # Errors
///
/// Returns an error if the operating point's voltage or current, or either
/// requirement, is not strictly positive.
pub fn module_count(
    operating: OperatingPoint,
    needed_voltage: ElectricPotential,
    needed_current: ElectricCurrent,
    policy: RoundingPolicy,
) -> Result<ModuleCount, InvalidParameter> {
    let module_voltage = checked(
        operating.load_voltage,
        "operating-point voltage",
        operating.load_voltage.get::<volt>(),
    )?;
    let module_current = checked(
        operating.current,
        "operating-point current",
        operating.current.get::<ampere>(),
    )?;
    let needed_voltage = checked(
        needed_voltage,
        "required voltage",
        needed_voltage.get::<volt>(),
    )?;
    let needed_current = checked(
        needed_current,
        "required current",
        needed_current.get::<ampere>(),
    )?;

    let series = round(
        (needed_voltage / module_voltage).get::<ratio>(),
        policy,
    );
    let parallel = round(
        (needed_current / module_current).get::<ratio>(),
        policy,
    );

    Ok(ModuleCount { series, parallel })
}

fn checked<T: Zero + PartialOrd>(
    value: T,
    parameter: &'static str,
    si_value: f64,
) -> Result<T, InvalidParameter> {
    Ok(StrictlyPositive::new(value)
        .map_err(|constraint| InvalidParameter::new(parameter, si_value, constraint))?
        .into_inner())
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "counts are non-negative and far below u32::MAX for physical inputs"
)]
fn round(count: f64, policy: RoundingPolicy) -> u32 {
    match policy {
        RoundingPolicy::Floor => count.floor() as u32,
        RoundingPolicy::Ceiling => count.ceil() as u32,
    }
}

/// A series/parallel array of identical modules at a shared operating point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModuleArray {
    /// The series/parallel module count.
    pub count: ModuleCount,

    /// The operating point every module runs at.
    pub operating: OperatingPoint,
}

impl ModuleArray {
    /// Terminal voltage of the array.
    #[must_use]
    pub fn voltage(&self) -> ElectricPotential {
        self.operating.load_voltage * f64::from(self.count.series)
    }

    /// Terminal current of the array.
    #[must_use]
    pub fn current(&self) -> ElectricCurrent {
        self.operating.current * f64::from(self.count.parallel)
    }

    /// Total electrical power delivered by the array.
    #[must_use]
    pub fn power(&self) -> Power {
        self.voltage() * self.current()
    }

    /// Time to deliver `energy` at the array's power.
    ///
    /// # Errors
    ///
    /// Returns an error if the array delivers no power, which happens when
    /// either module count is zero.
    pub fn charge_time(&self, energy: Energy) -> Result<Time, InvalidParameter> {
        let power = self.power();
        let power = StrictlyPositive::new(power)
            .map_err(|constraint| {
                InvalidParameter::new("array power", power.get::<watt>(), constraint)
            })?
            .into_inner();

        Ok(energy / power)
    }
}

/// A battery described by its nominal voltage and charge capacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Battery {
    /// Nominal terminal voltage.
    pub voltage: ElectricPotential,

    /// Charge capacity.
    pub capacity: ElectricCharge,
}

impl Battery {
    /// Energy stored at full charge.
    #[must_use]
    pub fn energy(&self) -> Energy {
        self.voltage * self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::thermoelectric::generator::core::traits::TegSource;

    use approx::assert_relative_eq;
    use uom::si::{
        electric_charge::ampere_hour,
        electric_current::ampere,
        electric_potential::volt,
        electrical_resistance::ohm,
        energy::watt_hour,
        f64::{ElectricalResistance, TemperatureInterval},
        temperature_interval::kelvin,
        time::hour,
    };

    fn point(load_ohm: f64, current_a: f64, voltage_v: f64) -> OperatingPoint {
        let current = ElectricCurrent::new::<ampere>(current_a);
        let load_voltage = ElectricPotential::new::<volt>(voltage_v);
        OperatingPoint {
            load_resistance: ElectricalResistance::new::<ohm>(load_ohm),
            current,
            load_voltage,
            power: current * load_voltage,
        }
    }

    #[test]
    fn floor_under_provisions_and_ceiling_meets_the_need() {
        let operating = point(2.0, 0.3, 0.6);
        let needed_voltage = ElectricPotential::new::<volt>(5.0);
        let needed_current = ElectricCurrent::new::<ampere>(1.0);

        // 5/0.6 = 8.33 strings of 0.6 V; 1/0.3 = 3.33 strings of 0.3 A.
        let floored =
            module_count(operating, needed_voltage, needed_current, RoundingPolicy::Floor)
                .unwrap();
        assert_eq!(floored, ModuleCount { series: 8, parallel: 3 });

        let ceiled =
            module_count(operating, needed_voltage, needed_current, RoundingPolicy::Ceiling)
                .unwrap();
        assert_eq!(ceiled, ModuleCount { series: 9, parallel: 4 });

        let array = ModuleArray { count: floored, operating };
        assert!(array.voltage() < needed_voltage);
        let array = ModuleArray { count: ceiled, operating };
        assert!(array.voltage() >= needed_voltage);
        assert!(array.current() >= needed_current);
    }

    #[test]
    fn exact_ratios_agree_across_policies() {
        let operating = point(2.0, 0.25, 0.5);
        let needed_voltage = ElectricPotential::new::<volt>(5.0);
        let needed_current = ElectricCurrent::new::<ampere>(1.0);

        for policy in [RoundingPolicy::Floor, RoundingPolicy::Ceiling] {
            let count = module_count(operating, needed_voltage, needed_current, policy).unwrap();
            assert_eq!(count, ModuleCount { series: 10, parallel: 4 });
        }
    }

    #[test]
    fn rejects_non_positive_inputs() {
        let operating = point(2.0, 0.25, 0.5);
        let volts = |v| ElectricPotential::new::<volt>(v);
        let amps = |a| ElectricCurrent::new::<ampere>(a);

        let err = module_count(operating, volts(0.0), amps(1.0), RoundingPolicy::Floor)
            .unwrap_err();
        assert_eq!(err.parameter, "required voltage");

        let err = module_count(operating, volts(5.0), amps(-1.0), RoundingPolicy::Floor)
            .unwrap_err();
        assert_eq!(err.parameter, "required current");

        let err = module_count(point(2.0, 0.25, 0.0), volts(5.0), amps(1.0), RoundingPolicy::Floor)
            .unwrap_err();
        assert_eq!(err.parameter, "operating-point voltage");

        let err = module_count(point(2.0, -0.25, 0.5), volts(5.0), amps(1.0), RoundingPolicy::Floor)
            .unwrap_err();
        assert_eq!(err.parameter, "operating-point current");
    }

    #[test]
    fn battery_energy_from_voltage_and_capacity() {
        let battery = Battery {
            voltage: ElectricPotential::new::<volt>(3.8),
            capacity: ElectricCharge::new::<ampere_hour>(4.5),
        };

        assert_relative_eq!(battery.energy().get::<watt_hour>(), 17.1, max_relative = 1e-12);
    }

    #[test]
    fn array_power_and_charge_time() {
        let array = ModuleArray {
            count: ModuleCount { series: 10, parallel: 4 },
            operating: point(2.0, 0.25, 0.5),
        };

        assert_relative_eq!(array.voltage().get::<volt>(), 5.0);
        assert_relative_eq!(array.current().get::<ampere>(), 1.0);
        assert_relative_eq!(array.power().get::<watt>(), 5.0);

        let battery = Battery {
            voltage: ElectricPotential::new::<volt>(3.8),
            capacity: ElectricCharge::new::<ampere_hour>(4.5),
        };
        let time = array.charge_time(battery.energy()).unwrap();
        assert_relative_eq!(time.get::<hour>(), 3.42, max_relative = 1e-12);
    }

    #[test]
    fn zero_count_array_cannot_charge() {
        let array = ModuleArray {
            count: ModuleCount { series: 0, parallel: 4 },
            operating: point(2.0, 0.25, 0.5),
        };

        let err = array
            .charge_time(Energy::new::<watt_hour>(17.1))
            .unwrap_err();
        assert_eq!(err.parameter, "array power");
    }

    #[test]
    fn sizes_a_phone_charger_from_a_matched_couple() {
        use crate::models::thermoelectric::generator::core::{
            Couple, LegGeometry, ThermoelectricLeg, operating_point,
        };
        use crate::support::{materials::MaterialProperties, units::microvolts_per_kelvin};
        use uom::si::{
            area::square_millimeter,
            electrical_conductivity::siemens_per_meter,
            f64::{Area, ElectricalConductivity, Length, ThermalConductivity},
            length::millimeter,
            thermal_conductivity::watt_per_meter_kelvin,
        };

        let leg = |seebeck_uv_per_k, sigma, kappa| {
            let material = MaterialProperties::new(
                microvolts_per_kelvin(seebeck_uv_per_k),
                ElectricalConductivity::new::<siemens_per_meter>(sigma),
                ThermalConductivity::new::<watt_per_meter_kelvin>(kappa),
            )
            .unwrap();
            let geometry = LegGeometry::new(
                Length::new::<millimeter>(5.0),
                Area::new::<square_millimeter>(10.0),
            )
            .unwrap();
            ThermoelectricLeg::new(material, geometry)
        };

        // SnSe (p) + PbTe (n) at its matched load under ΔT = 100 K.
        let couple = Couple::new(leg(357.0, 117.0, 0.88), leg(-231.0, 22_500.0, 2.17));
        let matched = operating_point(
            &couple,
            TemperatureInterval::new::<kelvin>(100.0),
            couple.internal_resistance(),
        )
        .unwrap();
        assert_relative_eq!(matched.load_voltage.get::<volt>(), 0.0294, max_relative = 1e-12);

        let needed_voltage = ElectricPotential::new::<volt>(5.0);
        let needed_current = ElectricCurrent::new::<ampere>(1.0);

        let floored =
            module_count(matched, needed_voltage, needed_current, RoundingPolicy::Floor)
                .unwrap();
        assert_eq!(floored, ModuleCount { series: 170, parallel: 146 });

        let ceiled =
            module_count(matched, needed_voltage, needed_current, RoundingPolicy::Ceiling)
                .unwrap();
        assert_eq!(ceiled, ModuleCount { series: 171, parallel: 147 });
    }
}

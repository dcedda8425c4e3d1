//! Iterative solver for a target load voltage.
//!
//! Sizing a generator for a real device usually starts from the voltage the
//! device needs. This module finds the load resistance at which a source
//! delivers a requested load voltage, by bisecting on the load resistance
//! until the achieved voltage converges to the target. The load voltage
//! `V_L = V_oc·R_L/(R + R_L)` rises monotonically from zero toward `V_oc`,
//! so any target strictly below the open-circuit voltage is reachable.

mod config;
mod error;
mod problem;

pub use config::GivenVoltageConfig;
pub use error::GivenVoltageError;

use twine_solvers::equation::bisection;
use uom::si::{
    electric_potential::volt,
    electrical_resistance::ohm,
    f64::{ElectricPotential, TemperatureInterval},
};

use crate::support::constraint::{InvalidParameter, StrictlyPositive};

use super::{
    OperatingPoint, TegSource,
    solve::{checked_gradient, point_at},
};

use problem::{LoadVoltageModel, LoadVoltageProblem};

/// Finds the operating point at which `source` delivers `target` volts to the
/// load.
///
/// Uses bisection on the load resistance; the lower bracket is a short
/// circuit (zero load voltage) and the upper bracket is expanded from the
/// internal resistance until it overshoots the target.
///
/// # Errors
///
/// Returns a [`GivenVoltageError`] if an input is invalid, the target is not
/// strictly below the open-circuit voltage, or the solver fails to converge.
pub fn load_for_voltage(
    source: &impl TegSource,
    delta_t: TemperatureInterval,
    target: ElectricPotential,
    config: GivenVoltageConfig,
) -> Result<OperatingPoint, GivenVoltageError> {
    let delta_t = checked_gradient(delta_t)?;
    let target = StrictlyPositive::new(target)
        .map_err(|constraint| {
            InvalidParameter::new("target load voltage", target.get::<volt>(), constraint)
        })?
        .into_inner();

    let v_oc = source.open_circuit_voltage(delta_t);
    if target >= v_oc {
        return Err(GivenVoltageError::TargetNotReachable {
            target,
            open_circuit: v_oc,
        });
    }
    let r_internal = source.internal_resistance();

    // The load voltage approaches v_oc only asymptotically, so a finite upper
    // bracket always exists; doubling from R reaches it quickly.
    let mut upper = r_internal;
    for _ in 0..128 {
        if point_at(v_oc, r_internal, upper).load_voltage > target {
            break;
        }
        upper = upper * 2.0;
    }

    let model = LoadVoltageModel::new(v_oc, r_internal);
    let problem = LoadVoltageProblem::new(target);

    let solution = bisection::solve(
        &model,
        &problem,
        [0.0, upper.get::<ohm>()],
        &config.bisection(),
        |_: &bisection::Event<'_, _, _>| None,
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(GivenVoltageError::MaxIters {
            residual: ElectricPotential::new::<volt>(solution.residual),
            iters: solution.iters,
        });
    }

    Ok(solution.snapshot.output)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_millimeter,
        electrical_conductivity::siemens_per_meter,
        electrical_resistance::ohm,
        f64::{Area, ElectricalConductivity, Length, ThermalConductivity},
        length::millimeter,
        temperature_interval::kelvin,
        thermal_conductivity::watt_per_meter_kelvin,
    };

    use crate::models::thermoelectric::generator::core::{
        LegGeometry, ThermoelectricLeg, operating_point,
    };
    use crate::support::{materials::MaterialProperties, units::microvolts_per_kelvin};

    fn pbte_leg() -> ThermoelectricLeg {
        let material = MaterialProperties::new(
            microvolts_per_kelvin(-231.0),
            ElectricalConductivity::new::<siemens_per_meter>(22_500.0),
            ThermalConductivity::new::<watt_per_meter_kelvin>(2.17),
        )
        .unwrap();
        let geometry = LegGeometry::new(
            Length::new::<millimeter>(5.0),
            Area::new::<square_millimeter>(10.0),
        )
        .unwrap();
        ThermoelectricLeg::new(material, geometry)
    }

    fn gradient() -> TemperatureInterval {
        TemperatureInterval::new::<kelvin>(100.0)
    }

    #[test]
    fn half_open_circuit_voltage_is_the_matched_load() {
        let source = pbte_leg();
        let target = ElectricPotential::new::<volt>(0.0231 / 2.0);

        let found = load_for_voltage(&source, gradient(), target, GivenVoltageConfig::default())
            .expect("target below v_oc should converge");

        // V_L = V_oc/2 occurs exactly at R_L = R.
        assert_relative_eq!(
            found.load_resistance.get::<ohm>(),
            source.resistance().get::<ohm>(),
            max_relative = 1e-6
        );
        assert_relative_eq!(
            found.load_voltage.get::<volt>(),
            target.get::<volt>(),
            max_relative = 1e-6
        );
    }

    #[test]
    fn found_point_round_trips_through_operating_point() {
        let source = pbte_leg();
        let target = ElectricPotential::new::<volt>(0.02);

        let found = load_for_voltage(&source, gradient(), target, GivenVoltageConfig::default())
            .expect("target below v_oc should converge");
        let replay = operating_point(&source, gradient(), found.load_resistance).unwrap();

        assert_eq!(replay, found);
    }

    #[test]
    fn rejects_targets_at_or_above_open_circuit() {
        let source = pbte_leg();

        let result = load_for_voltage(
            &source,
            gradient(),
            ElectricPotential::new::<volt>(0.0231),
            GivenVoltageConfig::default(),
        );
        assert!(matches!(
            result,
            Err(GivenVoltageError::TargetNotReachable { .. })
        ));

        let result = load_for_voltage(
            &source,
            gradient(),
            ElectricPotential::new::<volt>(1.0),
            GivenVoltageConfig::default(),
        );
        assert!(matches!(
            result,
            Err(GivenVoltageError::TargetNotReachable { .. })
        ));
    }

    #[test]
    fn rejects_non_positive_targets_and_gradients() {
        let source = pbte_leg();

        let result = load_for_voltage(
            &source,
            gradient(),
            ElectricPotential::new::<volt>(0.0),
            GivenVoltageConfig::default(),
        );
        assert!(matches!(
            result,
            Err(GivenVoltageError::InvalidParameter(err)) if err.parameter == "target load voltage"
        ));

        let result = load_for_voltage(
            &source,
            TemperatureInterval::new::<kelvin>(-1.0),
            ElectricPotential::new::<volt>(0.01),
            GivenVoltageConfig::default(),
        );
        assert!(matches!(
            result,
            Err(GivenVoltageError::InvalidParameter(err)) if err.parameter == "temperature gradient"
        ));
    }
}

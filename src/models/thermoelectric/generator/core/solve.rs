//! Core load-sweep solver.

use uom::si::{
    electrical_resistance::ohm,
    f64::{ElectricPotential, ElectricalResistance, TemperatureInterval},
    temperature_interval::kelvin,
};

use crate::support::constraint::{InvalidParameter, StrictlyPositive};

use super::{LoadSweep, OperatingPoint, PowerCurve, TegSource};

/// Evaluates the circuit equations at one load resistance.
///
/// No validation; callers guarantee `r_internal + load > 0`.
pub(super) fn point_at(
    v_oc: ElectricPotential,
    r_internal: ElectricalResistance,
    load: ElectricalResistance,
) -> OperatingPoint {
    let current = v_oc / (r_internal + load);
    let load_voltage = current * load;
    let power = current * load_voltage;
    OperatingPoint {
        load_resistance: load,
        current,
        load_voltage,
        power,
    }
}

/// Validates a driving temperature gradient.
pub(super) fn checked_gradient(
    delta_t: TemperatureInterval,
) -> Result<TemperatureInterval, InvalidParameter> {
    Ok(StrictlyPositive::new(delta_t)
        .map_err(|constraint| {
            InvalidParameter::new("temperature gradient", delta_t.get::<kelvin>(), constraint)
        })?
        .into_inner())
}

/// Computes the electrical state of `source` driving a single load.
///
/// Useful for spot checks at a known load, e.g. verifying the matched-load
/// condition `R_L = R` exactly rather than at the nearest sweep sample.
///
/// # Errors
///
/// Returns an error if `delta_t` or `load` is not strictly positive.
pub fn operating_point(
    source: &impl TegSource,
    delta_t: TemperatureInterval,
    load: ElectricalResistance,
) -> Result<OperatingPoint, InvalidParameter> {
    let delta_t = checked_gradient(delta_t)?;
    let load = StrictlyPositive::new(load)
        .map_err(|constraint| {
            InvalidParameter::new("load resistance", load.get::<ohm>(), constraint)
        })?
        .into_inner();

    Ok(point_at(
        source.open_circuit_voltage(delta_t),
        source.internal_resistance(),
        load,
    ))
}

/// Computes the performance curve of `source` across a load sweep and
/// identifies the maximum-power operating point.
///
/// The source's open-circuit voltage and internal resistance are derived
/// once; each sample is then an independent evaluation of the circuit
/// equations, and the maximum is found by scanning the produced points
/// (ties go to the first point in sweep order).
///
/// # Errors
///
/// Returns an error if `delta_t` is not strictly positive. The sweep itself
/// is validated at construction.
pub fn solve(
    source: &impl TegSource,
    delta_t: TemperatureInterval,
    loads: &LoadSweep,
) -> Result<PowerCurve, InvalidParameter> {
    let delta_t = checked_gradient(delta_t)?;
    let v_oc = source.open_circuit_voltage(delta_t);
    let r_internal = source.internal_resistance();

    let points: Vec<OperatingPoint> = loads
        .samples()
        .iter()
        .map(|&load| point_at(v_oc, r_internal, load))
        .collect();

    let peak = points
        .iter()
        .copied()
        .reduce(|best, point| if point.power > best.power { point } else { best });
    let Some(peak) = peak else {
        unreachable!("load sweep is non-empty by construction");
    };

    Ok(PowerCurve { points, peak })
}

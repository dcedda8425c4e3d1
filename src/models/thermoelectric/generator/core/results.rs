//! Result types for the generator solvers.

use uom::si::f64::{ElectricCurrent, ElectricPotential, ElectricalResistance, Power};

/// Electrical state of a source driving one external load resistance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    /// External load resistance `R_L`.
    pub load_resistance: ElectricalResistance,

    /// Circuit current, `I = V_oc / (R + R_L)`.
    pub current: ElectricCurrent,

    /// Voltage across the load, `V_L = I·R_L`.
    pub load_voltage: ElectricPotential,

    /// Power delivered to the load, `P = I²·R_L`.
    pub power: Power,
}

/// The full performance curve across a load sweep, plus its maximum.
///
/// `points` follow the order of the supplied sweep. `peak` is the point of
/// maximum delivered power; when several points tie, the first one in sweep
/// order is reported.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerCurve {
    /// One operating point per load sample, in sweep order.
    pub points: Vec<OperatingPoint>,

    /// The maximum-power operating point.
    pub peak: OperatingPoint,
}

use twine_solvers::equation::bisection;
use uom::si::{
    electric_potential::volt,
    electrical_resistance::ohm,
    f64::{ElectricPotential, ElectricalResistance},
};

/// Solver configuration for target load-voltage matching.
#[derive(Debug, Clone, Copy)]
pub struct GivenVoltageConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance for the load-resistance search variable.
    pub resistance_tol: ElectricalResistance,

    /// Absolute tolerance for the voltage residual (achieved - target).
    pub voltage_tol: ElectricPotential,
}

impl Default for GivenVoltageConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            resistance_tol: ElectricalResistance::new::<ohm>(1e-12),
            voltage_tol: ElectricPotential::new::<volt>(1e-12),
        }
    }
}

impl GivenVoltageConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.resistance_tol.get::<ohm>(),
            x_rel_tol: 0.0,
            residual_tol: self.voltage_tol.get::<volt>(),
        }
    }
}

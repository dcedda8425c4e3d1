//! Problem formulation for target load-voltage matching.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    electric_potential::volt,
    electrical_resistance::ohm,
    f64::{ElectricPotential, ElectricalResistance},
};

use crate::models::thermoelectric::generator::core::{OperatingPoint, solve::point_at};

/// Model adapter exposing the load resistance as the sole input variable.
///
/// The open-circuit voltage and internal resistance are fixed up front, so
/// each call is an infallible evaluation of the circuit equations.
pub(super) struct LoadVoltageModel {
    v_oc: ElectricPotential,
    r_internal: ElectricalResistance,
}

impl LoadVoltageModel {
    pub(super) fn new(v_oc: ElectricPotential, r_internal: ElectricalResistance) -> Self {
        Self { v_oc, r_internal }
    }
}

impl Model for LoadVoltageModel {
    type Input = ElectricalResistance;
    type Output = OperatingPoint;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(point_at(self.v_oc, self.r_internal, *input))
    }
}

/// Equation problem definition for voltage matching.
///
/// Computes the residual as `achieved_voltage - target_voltage`.
pub(super) struct LoadVoltageProblem {
    target: ElectricPotential,
}

impl LoadVoltageProblem {
    pub(super) fn new(target: ElectricPotential) -> Self {
        Self { target }
    }
}

impl EquationProblem<1> for LoadVoltageProblem {
    type Input = ElectricalResistance;
    type Output = OperatingPoint;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(ElectricalResistance::new::<ohm>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.load_voltage.get::<volt>() - self.target.get::<volt>()])
    }
}

//! Electrical performance core for thermoelectric generators.
//!
//! Given a source (a single leg or a series p-n couple) and a temperature
//! gradient, the core derives the open-circuit voltage and internal
//! resistance, evaluates current, load voltage, and power across a swept
//! range of load resistances, and identifies the maximum-power operating
//! point. The sweep-and-scan approach is deliberately used instead of the
//! matched-load closed form so the reported maximum is verifiable against the
//! sweep and so the same routine works unchanged for any [`TegSource`].

mod given_voltage;
mod input;
mod module_count;
mod results;
mod solve;
mod traits;

pub use given_voltage::{GivenVoltageConfig, GivenVoltageError, load_for_voltage};
pub use input::{Couple, LegGeometry, LoadSweep, ThermoelectricLeg};
pub use module_count::{Battery, ModuleArray, ModuleCount, RoundingPolicy, module_count};
pub use results::{OperatingPoint, PowerCurve};
pub use solve::{operating_point, solve};
pub use traits::TegSource;

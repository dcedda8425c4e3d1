use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::ElectricPotential;

use crate::support::constraint::InvalidParameter;

/// Errors that can occur while solving for a target load voltage.
#[derive(Debug, Error)]
pub enum GivenVoltageError {
    /// An input violated a stated invariant.
    #[error(transparent)]
    InvalidParameter(#[from] InvalidParameter),

    /// The target is not strictly below the open-circuit voltage.
    ///
    /// The load voltage approaches the open-circuit voltage only
    /// asymptotically, so no finite load resistance can reach such a target.
    #[error("target load voltage is not reachable: target={target:?}, open-circuit={open_circuit:?}")]
    TargetNotReachable {
        /// The requested load voltage.
        target: ElectricPotential,

        /// The source's open-circuit voltage at the supplied gradient.
        open_circuit: ElectricPotential,
    },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best voltage residual achieved.
        residual: ElectricPotential,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}

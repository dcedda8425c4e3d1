use uom::si::f64::{ElectricPotential, ElectricalResistance, TemperatureInterval};

use crate::models::thermoelectric::generator::core::traits::TegSource;

use super::ThermoelectricLeg;

/// A series-connected p-n junction of two thermoelectric legs.
///
/// The legs are labeled by their intended role: `p` for the p-type leg
/// (Seebeck coefficient > 0) and `n` for the n-type leg (< 0). A couple whose
/// legs do not have opposite polarities is a degenerate configuration, not an
/// error: the Seebeck contributions partially cancel instead of adding, and
/// the combined open-circuit voltage may be smaller than either leg's
/// individual contribution. Use [`is_degenerate`](Self::is_degenerate) to
/// detect this.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Couple {
    p: ThermoelectricLeg,
    n: ThermoelectricLeg,
}

impl Couple {
    /// Composes a couple from its p-type and n-type legs.
    #[must_use]
    pub fn new(p: ThermoelectricLeg, n: ThermoelectricLeg) -> Self {
        Self { p, n }
    }

    /// Returns the p-type leg.
    #[must_use]
    pub fn p_leg(&self) -> &ThermoelectricLeg {
        &self.p
    }

    /// Returns the n-type leg.
    #[must_use]
    pub fn n_leg(&self) -> &ThermoelectricLeg {
        &self.n
    }

    /// Returns whether the legs fail to form a true p-n pair.
    ///
    /// True when the `p`-labeled leg is not strictly p-type, or the
    /// `n`-labeled leg is not strictly n-type.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        let s_p = self.p.material().seebeck().value;
        let s_n = self.n.material().seebeck().value;
        !(s_p > 0.0 && s_n < 0.0)
    }
}

impl TegSource for Couple {
    /// Series Seebeck voltages add: `V_oc = ΔT·(S_p − S_n)`.
    fn open_circuit_voltage(&self, delta_t: TemperatureInterval) -> ElectricPotential {
        (self.p.material().seebeck() - self.n.material().seebeck()) * delta_t
    }

    /// Legs are electrically in series: `R = R_p + R_n`.
    fn internal_resistance(&self) -> ElectricalResistance {
        self.p.resistance() + self.n.resistance()
    }
}

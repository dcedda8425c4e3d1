//! Material and device performance metrics.
//!
//! These are screening numbers used to compare materials and couples before
//! committing to a full load sweep: the maximum thermodynamic conversion
//! efficiency achievable at a given figure of merit, a material's power
//! factor, and the effective figure of merit of a two-leg couple.

use uom::si::{
    f64::{Ratio, ThermodynamicTemperature},
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{InvalidParameter, NonNegative, StrictlyPositive},
    materials::MaterialProperties,
    units::{PowerFactor, TemperatureDifference},
};

/// Maximum conversion efficiency of a generator with figure of merit `zt`
/// operating between `t_hot` and `t_cold`.
///
/// This is the Carnot efficiency degraded by the finite figure of merit:
///
/// ```text
/// η = (1 - T_c/T_h) · (√(1+ZT) - 1) / (√(1+ZT) + T_c/T_h)
/// ```
///
/// As `zt` grows without bound the efficiency approaches the Carnot limit;
/// at `zt = 0` it is zero.
///
/// # Errors
///
/// Returns an error if `zt` is negative, `t_cold` is not above absolute
/// zero, or `t_hot` is not strictly above `t_cold`.
pub fn max_efficiency(
    t_hot: ThermodynamicTemperature,
    t_cold: ThermodynamicTemperature,
    zt: Ratio,
) -> Result<Ratio, InvalidParameter> {
    let zt = NonNegative::new(zt.get::<ratio>())
        .map_err(|constraint| {
            InvalidParameter::new("figure of merit", zt.get::<ratio>(), constraint)
        })?
        .into_inner();
    let gradient = t_hot.minus(t_cold);
    let t_cold = StrictlyPositive::new(t_cold.get::<kelvin>())
        .map_err(|constraint| {
            InvalidParameter::new("cold-side temperature", t_cold.get::<kelvin>(), constraint)
        })?
        .into_inner();
    let gradient = gradient.value;
    let delta_t = StrictlyPositive::new(gradient)
        .map_err(|constraint| {
            InvalidParameter::new("temperature gradient", gradient, constraint)
        })?
        .into_inner();

    let t_hot = t_cold + delta_t;
    let carnot = delta_t / t_hot;
    let root = (1.0 + zt).sqrt();
    let eta = carnot * (root - 1.0) / (root + t_cold / t_hot);

    Ok(Ratio::new::<ratio>(eta))
}

/// Power factor `S²σ` of a material, in W/(m·K²).
///
/// Materials with equal figures of merit can deliver very different power
/// densities; the power factor separates the electronic contribution from
/// the thermal conductivity.
#[must_use]
pub fn power_factor(material: &MaterialProperties) -> PowerFactor {
    let seebeck = material.seebeck();
    seebeck * seebeck * material.electrical_conductivity()
}

/// Effective figure of merit of a p/n couple at mean temperature `t_mean`:
///
/// ```text
/// ZT̄ = (S_p - S_n)² · T̄ / (√(ρ_n·κ_n) + √(ρ_p·κ_p))²
/// ```
///
/// The denominator reflects the optimal leg-area ratio, so this is the best
/// the material pair can achieve rather than the value for any particular
/// geometry.
///
/// # Errors
///
/// Returns an error if `t_mean` is not above absolute zero.
pub fn couple_figure_of_merit(
    p: &MaterialProperties,
    n: &MaterialProperties,
    t_mean: ThermodynamicTemperature,
) -> Result<Ratio, InvalidParameter> {
    let t_mean = StrictlyPositive::new(t_mean.get::<kelvin>())
        .map_err(|constraint| {
            InvalidParameter::new("mean temperature", t_mean.get::<kelvin>(), constraint)
        })?
        .into_inner();

    // Square roots of mixed-dimension products, so this drops to SI floats.
    let seebeck_span = p.seebeck().value - n.seebeck().value;
    let p_term = (p.resistivity().value * p.thermal_conductivity().value).sqrt();
    let n_term = (n.resistivity().value * n.thermal_conductivity().value).sqrt();

    let zt = seebeck_span.powi(2) * t_mean / (p_term + n_term).powi(2);

    Ok(Ratio::new::<ratio>(zt))
}

/// [`couple_figure_of_merit`] evaluated at the midpoint of the hot- and
/// cold-side temperatures.
///
/// # Errors
///
/// Returns an error if the midpoint is not above absolute zero.
pub fn couple_figure_of_merit_between(
    p: &MaterialProperties,
    n: &MaterialProperties,
    t_hot: ThermodynamicTemperature,
    t_cold: ThermodynamicTemperature,
) -> Result<Ratio, InvalidParameter> {
    couple_figure_of_merit(p, n, t_hot.midpoint(t_cold))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        electrical_conductivity::siemens_per_meter,
        f64::{ElectricalConductivity, ThermalConductivity},
        thermal_conductivity::watt_per_meter_kelvin,
    };

    use crate::support::units::microvolts_per_kelvin;

    fn material(seebeck_uv_per_k: f64, sigma: f64, kappa: f64) -> MaterialProperties {
        MaterialProperties::new(
            microvolts_per_kelvin(seebeck_uv_per_k),
            ElectricalConductivity::new::<siemens_per_meter>(sigma),
            ThermalConductivity::new::<watt_per_meter_kelvin>(kappa),
        )
        .unwrap()
    }

    fn temp(kelvin_value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(kelvin_value)
    }

    #[test]
    fn efficiency_of_pbte_at_its_coldest_table_row() {
        // ZT = 0.18 between 373 K and 273 K.
        let eta = max_efficiency(temp(373.0), temp(273.0), Ratio::new::<ratio>(0.18)).unwrap();
        assert_relative_eq!(eta.get::<ratio>(), 0.0127219, max_relative = 1e-5);
    }

    #[test]
    fn efficiency_is_zero_at_zero_figure_of_merit() {
        let eta = max_efficiency(temp(373.0), temp(273.0), Ratio::new::<ratio>(0.0)).unwrap();
        assert_eq!(eta.get::<ratio>(), 0.0);
    }

    #[test]
    fn efficiency_stays_below_carnot() {
        let eta = max_efficiency(temp(373.0), temp(273.0), Ratio::new::<ratio>(1e6)).unwrap();
        let carnot = 100.0 / 373.0;
        assert!(eta.get::<ratio>() < carnot);
        assert_relative_eq!(eta.get::<ratio>(), carnot, max_relative = 1e-2);
    }

    #[test]
    fn efficiency_rejects_invalid_inputs() {
        let err = max_efficiency(temp(373.0), temp(273.0), Ratio::new::<ratio>(-0.1)).unwrap_err();
        assert_eq!(err.parameter, "figure of merit");

        let err = max_efficiency(temp(373.0), temp(0.0), Ratio::new::<ratio>(0.18)).unwrap_err();
        assert_eq!(err.parameter, "cold-side temperature");

        let err = max_efficiency(temp(273.0), temp(373.0), Ratio::new::<ratio>(0.18)).unwrap_err();
        assert_eq!(err.parameter, "temperature gradient");

        let err = max_efficiency(temp(273.0), temp(273.0), Ratio::new::<ratio>(0.18)).unwrap_err();
        assert_eq!(err.parameter, "temperature gradient");
    }

    #[test]
    fn power_factor_of_pbte_at_323_kelvin() {
        let pf = power_factor(&material(-231.0, 22_500.0, 2.17));
        // S²σ = (231 µV/K)² · 22500 S/m ≈ 1.2e-3 W/(m·K²).
        assert_relative_eq!(pf.value, 1.200_622_5e-3, max_relative = 1e-9);
    }

    #[test]
    fn couple_figure_of_merit_for_snse_and_pbte() {
        let p = material(357.0, 117.0, 0.88);
        let n = material(-231.0, 22_500.0, 2.17);

        let zt = couple_figure_of_merit(&p, &n, temp(323.0)).unwrap();
        assert_relative_eq!(zt.get::<ratio>(), 0.0119808, max_relative = 1e-4);
    }

    #[test]
    fn couple_figure_of_merit_between_uses_the_midpoint() {
        let p = material(357.0, 117.0, 0.88);
        let n = material(-231.0, 22_500.0, 2.17);

        let between = couple_figure_of_merit_between(&p, &n, temp(373.0), temp(273.0)).unwrap();
        let at_mean = couple_figure_of_merit(&p, &n, temp(323.0)).unwrap();
        assert_relative_eq!(between.get::<ratio>(), at_mean.get::<ratio>());
    }

    #[test]
    fn couple_figure_of_merit_rejects_non_positive_mean_temperature() {
        let p = material(357.0, 117.0, 0.88);
        let n = material(-231.0, 22_500.0, 2.17);

        let err = couple_figure_of_merit(&p, &n, temp(0.0)).unwrap_err();
        assert_eq!(err.parameter, "mean temperature");
        let err = couple_figure_of_merit(&p, &n, temp(-10.0)).unwrap_err();
        assert_eq!(err.parameter, "mean temperature");
    }
}

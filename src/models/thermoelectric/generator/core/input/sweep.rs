use uom::si::{electrical_resistance::ohm, f64::ElectricalResistance};

use crate::support::constraint::{ConstraintError, InvalidParameter, StrictlyPositive};

/// A validated, non-empty, strictly ascending sequence of load-resistance
/// samples.
///
/// Every sample is guaranteed to be strictly positive. When two samples tie
/// for maximum power, the solver reports the first, so the ascending order
/// means the smallest such load resistance wins.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadSweep {
    samples: Vec<ElectricalResistance>,
}

impl LoadSweep {
    /// Constructs a sweep from explicit samples.
    ///
    /// # Errors
    ///
    /// Returns an error if `samples` is empty, any sample is not strictly
    /// positive, or the samples are not strictly ascending.
    pub fn from_samples(samples: Vec<ElectricalResistance>) -> Result<Self, InvalidParameter> {
        if samples.is_empty() {
            return Err(InvalidParameter::new(
                "load sample count",
                0.0,
                ConstraintError::Zero,
            ));
        }
        for &sample in &samples {
            StrictlyPositive::new(sample).map_err(|constraint| {
                InvalidParameter::new("load resistance", sample.get::<ohm>(), constraint)
            })?;
        }
        for pair in samples.windows(2) {
            if pair[1] <= pair[0] {
                return Err(InvalidParameter::new(
                    "load sample order",
                    pair[1].get::<ohm>(),
                    ConstraintError::BelowMinimum,
                ));
            }
        }
        Ok(Self { samples })
    }

    /// Constructs a linear sweep from `min` to `max` inclusive, with `count`
    /// evenly spaced samples.
    ///
    /// # Errors
    ///
    /// Returns an error if `min` is not strictly positive, `max` is not above
    /// `min`, or `count` is below 2.
    pub fn linear(
        min: ElectricalResistance,
        max: ElectricalResistance,
        count: usize,
    ) -> Result<Self, InvalidParameter> {
        let min = StrictlyPositive::new(min)
            .map_err(|constraint| {
                InvalidParameter::new("load resistance minimum", min.get::<ohm>(), constraint)
            })?
            .into_inner();
        if max <= min {
            return Err(InvalidParameter::new(
                "load resistance maximum",
                max.get::<ohm>(),
                ConstraintError::BelowMinimum,
            ));
        }
        if count < 2 {
            #[allow(clippy::cast_precision_loss)]
            return Err(InvalidParameter::new(
                "load sample count",
                count as f64,
                ConstraintError::BelowMinimum,
            ));
        }

        #[allow(clippy::cast_precision_loss)]
        let samples = (0..count)
            .map(|i| min + (max - min) * (i as f64 / (count - 1) as f64))
            .collect();
        Ok(Self { samples })
    }

    /// Constructs the conventional sweep around an internal resistance:
    /// `0.01·R` to `10·R`, linearly spaced. This span comfortably brackets
    /// the matched-load point `R_L = R`.
    ///
    /// # Errors
    ///
    /// Returns an error if `r_internal` is not strictly positive or `count`
    /// is below 2.
    pub fn around(
        r_internal: ElectricalResistance,
        count: usize,
    ) -> Result<Self, InvalidParameter> {
        let r_internal = StrictlyPositive::new(r_internal)
            .map_err(|constraint| {
                InvalidParameter::new("internal resistance", r_internal.get::<ohm>(), constraint)
            })?
            .into_inner();
        Self::linear(r_internal * 0.01, r_internal * 10.0, count)
    }

    /// Returns the samples in the order supplied.
    #[must_use]
    pub fn samples(&self) -> &[ElectricalResistance] {
        &self.samples
    }

    /// Returns the number of samples (always at least 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false; present to satisfy the usual `len`/`is_empty` pairing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

use uom::si::{
    area::square_meter,
    f64::{Area, Length},
    length::meter,
};

use crate::support::constraint::{InvalidParameter, StrictlyPositive};

/// Physical dimensions of one thermoelectric leg.
///
/// Both dimensions are guaranteed to be strictly positive, so the derived
/// electrical resistance `L / (σ·A)` is always finite and positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegGeometry {
    length: Length,
    area: Area,
}

impl LegGeometry {
    /// Constructs a validated leg geometry.
    ///
    /// # Errors
    ///
    /// Returns an error if the length or cross-sectional area is not strictly
    /// positive.
    pub fn new(length: Length, area: Area) -> Result<Self, InvalidParameter> {
        let length = StrictlyPositive::new(length)
            .map_err(|constraint| {
                InvalidParameter::new("leg length", length.get::<meter>(), constraint)
            })?
            .into_inner();
        let area = StrictlyPositive::new(area)
            .map_err(|constraint| {
                InvalidParameter::new(
                    "leg cross-sectional area",
                    area.get::<square_meter>(),
                    constraint,
                )
            })?
            .into_inner();

        Ok(Self { length, area })
    }

    /// Returns the leg length.
    #[must_use]
    pub fn length(&self) -> Length {
        self.length
    }

    /// Returns the leg cross-sectional area.
    #[must_use]
    pub fn area(&self) -> Area {
        self.area
    }
}

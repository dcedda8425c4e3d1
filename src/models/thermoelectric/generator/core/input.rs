//! Input types for the generator solvers.

mod couple;
mod geometry;
mod leg;
mod sweep;

pub use couple::Couple;
pub use geometry::LegGeometry;
pub use leg::ThermoelectricLeg;
pub use sweep::LoadSweep;

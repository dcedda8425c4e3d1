//! Supporting utilities used by models.

pub mod cache;
pub mod constraint;
pub mod materials;
pub mod units;

//! Thermoelectric device models.
//!
//! This module contains the generator performance solver along with the
//! closed-form metrics (conversion efficiency, power factor, figure of merit)
//! used to compare materials and operating conditions.

pub mod generator;
pub mod metrics;

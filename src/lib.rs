//! # TEG Models
//!
//! Analytic electrical performance models for thermoelectric generators (TEGs).
//!
//! Given a thermoelectric material, a leg geometry, and a temperature
//! gradient, this crate computes the electrical performance of a single leg
//! or a series-connected p-n couple: open-circuit voltage, internal
//! resistance, the full current/voltage/power curve across a swept range of
//! load resistances, and the maximum-power operating point.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific models. The thermoelectric generator solver
//!   and its [`twine_core::Model`] adapter live here.
//! - [`support`]: Supporting utilities used by models: validated material
//!   property data, numeric constraint types, unit extensions, and a simple
//!   caller-owned cache.
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are less stable than the models themselves.
//!
//! ## Units
//!
//! All physical quantities use [`uom`] SI types. The one quantity `uom` does
//! not name, the Seebeck coefficient (volts per kelvin), is defined in
//! [`support::units`].

pub mod models;
pub mod support;

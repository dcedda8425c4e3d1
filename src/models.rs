//! Public models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules. Today there is one
//! domain, [`thermoelectric`], holding the generator performance solver and
//! the closed-form efficiency metrics.
//!
//! # Model structure
//!
//! Each model lives in its own module with an internal `core` submodule where
//! the computation and domain logic lives. A [`twine_core::Model`]
//! implementation, where provided, is a thin adapter that delegates to the
//! model-specific core API.

pub mod thermoelectric;

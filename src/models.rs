//! Public biogeochemistry models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the reaction network and its validation live. The `core` module is an
//! implementation detail; the model module re-exports the parts of it that
//! belong to the public API.
//!
//! The host-facing [`Biogeochemistry`](crate::support::host::Biogeochemistry)
//! implementation and the [`twine_core::Model`] implementation are thin
//! adapters over that core.

pub mod biogeochemistry;

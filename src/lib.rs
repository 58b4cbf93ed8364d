//! # BGC Models
//!
//! Ocean biogeochemistry models that plug into a circulation host through a
//! small, host-agnostic tracer interface.
//!
//! ## Crate layout
//!
//! - [`models`]: Biogeochemical models, each implementing
//!   [`support::host::Biogeochemistry`] for hosts and [`twine_core::Model`]
//!   for single-cell evaluation.
//! - [`support`]: Host stand-ins, light attenuation and numeric constraints
//!   used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Code that starts inside a model's internal `core` module moves to
//! [`support`] once a second model, or a host, needs it. Only [`support`]
//! is public; model cores stay private.

pub mod models;
pub mod support;

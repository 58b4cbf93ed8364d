//! Marine biogeochemistry models.
//!
//! This module contains tracer models for nutrient, plankton and detritus
//! cycling in the ocean.

pub mod lobster;

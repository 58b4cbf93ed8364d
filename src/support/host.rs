//! Host-side services a biogeochemistry model plugs into.
//!
//! An ocean circulation host owns the grid, the tracer and auxiliary fields,
//! the clock and the transport solver. Biogeochemical models only need a
//! small slice of that machinery: grid queries to size velocity fields,
//! field storage to read tracers and write diagnostics, and a contract that
//! tells the host which tracers to carry and how they drift.
//!
//! This module provides that slice:
//!
//! - [`Biogeochemistry`]: the plugin contract a model implements.
//! - [`RectilinearGrid`]: a regular grid, periodic in x and y, bounded in z.
//! - [`Field`] and [`Location`]: cell-centred and face-located scalar fields.
//! - [`VelocityFields`]: a `(u, v, w)` triple of face fields.
//! - [`AdvectionScheme`]: the transport scheme a host should use for a tracer.
//! - [`SimulationState`]: the tracer and auxiliary fields at one instant.

mod advection;
mod biogeochemistry;
mod error;
mod field;
mod grid;
mod state;

pub use advection::AdvectionScheme;
pub use biogeochemistry::Biogeochemistry;
pub use error::{GridError, StateError};
pub use field::{Field, Location, VelocityFields};
pub use grid::RectilinearGrid;
pub use state::SimulationState;

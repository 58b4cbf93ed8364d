use thiserror::Error;

use crate::support::constraint::ConstraintError;

use super::Location;

/// Errors that can occur while constructing a [`RectilinearGrid`](super::RectilinearGrid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GridError {
    /// A grid dimension has no cells.
    #[error("grid has no cells along the {axis} axis")]
    EmptyDimension { axis: char },

    /// A domain extent is not strictly positive.
    #[error("invalid extent along the {axis} axis")]
    Extent {
        axis: char,
        #[source]
        source: ConstraintError,
    },
}

/// Errors that can occur while reading or writing a [`SimulationState`](super::SimulationState).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum StateError {
    /// A tracer the model requires is not present in the state.
    #[error("missing tracer field: {name}")]
    MissingTracer { name: String },

    /// An auxiliary field the model requires is not present in the state.
    #[error("missing auxiliary field: {name}")]
    MissingAuxiliary { name: String },

    /// A field does not have the shape or location the grid implies.
    #[error("field {name} has shape {found:?} at {location:?}, expected {expected:?}")]
    Shape {
        name: String,
        location: Location,
        expected: [usize; 3],
        found: [usize; 3],
    },

    /// A cell index lies outside the grid.
    #[error("cell ({i}, {j}, {k}) is outside the grid")]
    OutOfBounds { i: usize, j: usize, k: usize },
}

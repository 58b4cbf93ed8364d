use thiserror::Error;

use crate::support::{constraint::ConstraintError, host::StateError};

use super::Tracer;

/// Errors raised while configuring or querying a LOBSTER model.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum LobsterError {
    /// A parameter lies outside its physical domain.
    #[error("invalid parameter `{name}`")]
    Parameter {
        name: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// Mortality is not fully routed to the two detritus pools.
    #[error("mortality fractions must sum to 1, got {sum}")]
    MortalityFractions { sum: f64 },

    /// A name does not match any LOBSTER tracer.
    #[error("unknown tracer `{name}`")]
    UnknownTracer { name: String },

    /// The tracer exists but is not carried by this configuration.
    #[error("tracer {tracer} is not active in this configuration")]
    InactiveTracer { tracer: Tracer },

    /// Detrital carbon drifts with its detritus and cannot be configured directly.
    #[error("tracer {tracer} drifts with {} and cannot be configured separately", .tracer.drift_source())]
    AliasedTracer { tracer: Tracer },

    /// A tracer appears more than once in a sinking or advection table.
    #[error("tracer {tracer} is configured more than once")]
    DuplicateTracer { tracer: Tracer },

    /// A user-supplied velocity field does not fit the grid.
    #[error("velocity fields for {tracer} do not fit the grid")]
    VelocityShape {
        tracer: Tracer,
        #[source]
        source: StateError,
    },
}

use super::{AdvectionScheme, SimulationState, StateError, VelocityFields};

/// The contract between a biogeochemical model and its host.
///
/// A host queries the tracer and auxiliary field lists once to allocate
/// storage, asks for each tracer's drift velocity and advection scheme when
/// building its transport operators, and calls [`update_state`] once per
/// time step before evaluating any tracer tendencies.
///
/// [`update_state`]: Biogeochemistry::update_state
pub trait Biogeochemistry {
    /// Names of the tracers the host must carry, in a fixed order.
    fn required_tracers(&self) -> Vec<&'static str>;

    /// Names of the cell-centred auxiliary fields the host must allocate.
    fn required_auxiliary_fields(&self) -> &'static [&'static str];

    /// Velocity the tracer drifts with relative to the flow, if any.
    fn drift_velocity(&self, tracer: &str) -> Option<&VelocityFields>;

    /// Advection scheme for the tracer's drift, if it drifts.
    fn advection_scheme(&self, tracer: &str) -> Option<AdvectionScheme>;

    /// Refreshes the model's auxiliary fields for the state's current time.
    ///
    /// # Errors
    ///
    /// Returns a [`StateError`] if a required field is missing or misshapen.
    fn update_state(&self, state: &mut SimulationState<'_>) -> Result<(), StateError>;
}

//! The LOBSTER reaction network.
//!
//! Each cell's process rates (uptake, grazing, mortality, remineralisation,
//! nitrification) are computed once into [`Fluxes`], and every tracer's
//! tendency is a fixed combination of them. The optional carbonate and oxygen
//! tracers respond to the nitrogen cycle without feeding back into it.

mod chemistry;
mod error;
mod local;
mod parameters;
mod rates;
mod sinking;
mod tendencies;
mod tracer;

#[cfg(test)]
mod test_support;

pub use chemistry::calcite_production;
pub use error::LobsterError;
pub use local::LocalState;
pub use parameters::Parameters;
pub use rates::{Fluxes, growth_rate, light_limitation, nitrate_share, nutrient_limitation};
pub use sinking::SinkingVelocity;
pub use tendencies::{Chemistry, RateFn, Tendencies};
pub use tracer::Tracer;

//! Light attenuation models.
//!
//! Phytoplankton growth is driven by photosynthetically active radiation
//! (PAR). A light model turns a surface irradiance forcing into a PAR field
//! that decays with depth as water and pigment absorb light.
//!
//! - [`SurfaceForcing`]: the `(x, y, t) -> W/m²` surface PAR contract.
//! - [`DiurnalCycle`]: a default day/night forcing.
//! - [`TwoBandPar`]: red/blue two-band Beer–Lambert attenuation.
//! - [`LightAttenuation`]: the interface a biogeochemistry model drives.

mod euphotic;
mod forcing;
mod two_band;

pub use euphotic::{EuphoticDepthConfig, EuphoticDepthError};
pub use forcing::{DiurnalCycle, SurfaceForcing};
pub use two_band::TwoBandPar;

use crate::support::host::{SimulationState, StateError};

/// Name of the auxiliary PAR field, in W/m².
pub const PAR: &str = "PAR";

/// A light model that maintains auxiliary PAR fields on a host state.
pub trait LightAttenuation {
    /// Auxiliary fields the host must allocate for this model.
    fn auxiliary_fields(&self) -> &'static [&'static str];

    /// Recomputes the model's auxiliary fields at `state.time`.
    ///
    /// # Errors
    ///
    /// Returns a [`StateError`] if the phytoplankton tracer or a PAR field is
    /// missing or misshapen.
    fn update(
        &self,
        state: &mut SimulationState<'_>,
        phytoplankton: &str,
        surface: &impl SurfaceForcing,
    ) -> Result<(), StateError>;
}

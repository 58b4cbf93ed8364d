/// Tracer concentrations and PAR at one grid cell.
///
/// Concentrations are in mmol/m³ and PAR in W/m². Chemistry tracers (DIC,
/// alkalinity, oxygen) are absent because no rate depends on their values.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocalState {
    /// Nitrate, mmol N/m³.
    pub nitrate: f64,
    /// Ammonia, mmol N/m³.
    pub ammonia: f64,
    /// Phytoplankton, mmol N/m³.
    pub phytoplankton: f64,
    /// Zooplankton, mmol N/m³.
    pub zooplankton: f64,
    /// Small (slow-sinking) detritus, mmol N/m³.
    pub small_detritus: f64,
    /// Large (fast-sinking) detritus, mmol N/m³.
    pub large_detritus: f64,
    /// Carbon in small detritus, mmol C/m³.
    pub small_detrital_carbon: f64,
    /// Carbon in large detritus, mmol C/m³.
    pub large_detrital_carbon: f64,
    /// Dissolved organic matter, mmol N/m³.
    pub dissolved_organic_matter: f64,
    /// Photosynthetically available radiation, W/m².
    pub par: f64,
}

impl LocalState {
    /// Returns a copy with every negative value raised to zero.
    ///
    /// Transport schemes can leave small negative concentrations behind;
    /// rates are evaluated on the clamped state so saturating terms stay
    /// within their physical range.
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self {
            nitrate: self.nitrate.max(0.0),
            ammonia: self.ammonia.max(0.0),
            phytoplankton: self.phytoplankton.max(0.0),
            zooplankton: self.zooplankton.max(0.0),
            small_detritus: self.small_detritus.max(0.0),
            large_detritus: self.large_detritus.max(0.0),
            small_detrital_carbon: self.small_detrital_carbon.max(0.0),
            large_detrital_carbon: self.large_detrital_carbon.max(0.0),
            dissolved_organic_matter: self.dissolved_organic_matter.max(0.0),
            par: self.par.max(0.0),
        }
    }
}

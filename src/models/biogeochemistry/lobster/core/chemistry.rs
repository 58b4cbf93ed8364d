//! Carbonate system and oxygen rates.
//!
//! These tracers are passive: they respond to the nitrogen cycle's fluxes
//! but never feed back into them.

use super::{
    Fluxes, Parameters,
    rates::{ammonia, nitrate},
};

/// Net calcite formation, mmol CaCO₃/m³/s.
///
/// Calcite is produced in proportion to the organic carbon of dying and
/// grazed phytoplankton; part of the grazed calcite dissolves in zooplankton guts.
#[must_use]
pub fn calcite_production(p: &Parameters, f: &Fluxes) -> f64 {
    p.organic_carbon_calcate_ratio
        * p.phytoplankton_redfield
        * (f.phytoplankton_mortality
            + (1.0 - p.zooplankton_calcite_dissolution) * f.phytoplankton_grazing)
}

pub(super) fn dissolved_inorganic_carbon(p: &Parameters, f: &Fluxes) -> f64 {
    let fixation = p.phytoplankton_redfield * f.primary_production();
    let exudate_respired = p.phytoplankton_redfield * p.ammonia_fraction_of_exudate * f.exudation;
    let excretion_respired =
        p.organic_redfield * p.ammonia_fraction_of_excrement * f.zooplankton_excretion;
    let detritus_respired = p.ammonia_fraction_of_detritus
        * (f.small_detrital_carbon_remineralisation + f.large_detrital_carbon_remineralisation);
    let dom_respired = p.organic_redfield * f.dissolved_organic_breakdown;

    exudate_respired + excretion_respired + detritus_respired + dom_respired
        - fixation
        - calcite_production(p, f)
}

/// Alkalinity gains one equivalent per ammonia produced, loses one per
/// nitrate produced and two per calcite formed.
pub(super) fn alkalinity(p: &Parameters, f: &Fluxes) -> f64 {
    ammonia(p, f) - nitrate(p, f) - 2.0 * calcite_production(p, f)
}

/// Oxygen released by photosynthesis and consumed by respiration and nitrification.
///
/// Growth on nitrate releases the full respiration ratio; growth on ammonia
/// releases that less the oxygen nitrification would have needed.
pub(super) fn oxygen(p: &Parameters, f: &Fluxes) -> f64 {
    let regenerated = p.respiration_oxygen_nitrogen_ratio - p.nitrification_oxygen_nitrogen_ratio;

    p.respiration_oxygen_nitrogen_ratio * f.nitrate_uptake + regenerated * f.ammonia_uptake
        - regenerated * f.ammonia_regeneration(p)
        - p.nitrification_oxygen_nitrogen_ratio * f.nitrification
}

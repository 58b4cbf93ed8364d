//! Nitrogen-cycle reaction rates.
//!
//! Every process rate a cell needs is computed once into [`Fluxes`]; each
//! tracer's tendency is then a fixed linear combination of those fluxes.
//! Nitrogen leaving one pool always enters another, so the nitrogen pools'
//! tendencies sum to zero.

use super::{LocalState, Parameters};

/// Light limitation of growth, `PAR / (PAR + K_I)`, in `[0, 1)`.
#[must_use]
pub fn light_limitation(parameters: &Parameters, par: f64) -> f64 {
    par / (par + parameters.light_half_saturation)
}

/// Nutrient limitation of growth, in `[0, 1)`.
///
/// Combines the nitrate and ammonia saturation terms as independent supplies:
/// `L_N = l_NH₄ + (1 − l_NH₄) · l_NO₃`.
#[must_use]
pub fn nutrient_limitation(parameters: &Parameters, nitrate: f64, ammonia: f64) -> f64 {
    let (nitrate, ammonia) = saturation(parameters, nitrate, ammonia);
    ammonia + (1.0 - ammonia) * nitrate
}

/// Fraction of nitrogen uptake drawn from nitrate.
///
/// Ammonia inhibits nitrate uptake by `exp(−ψ · NH₄)`.
#[must_use]
pub fn nitrate_share(parameters: &Parameters, nitrate: f64, ammonia: f64) -> f64 {
    let (l_nitrate, l_ammonia) = saturation(parameters, nitrate, ammonia);
    let inhibited = l_nitrate * (-parameters.nitrate_ammonia_inhibition * ammonia).exp();
    let total = inhibited + l_ammonia;
    if total > 0.0 { inhibited / total } else { 0.0 }
}

/// Phytoplankton specific growth rate, 1/s.
///
/// The maximum rate is scaled by whichever of light or nutrients is more limiting.
#[must_use]
pub fn growth_rate(parameters: &Parameters, state: &LocalState) -> f64 {
    let light = light_limitation(parameters, state.par);
    let nutrients = nutrient_limitation(parameters, state.nitrate, state.ammonia);
    parameters.maximum_phytoplankton_growth_rate * light.min(nutrients)
}

fn saturation(parameters: &Parameters, nitrate: f64, ammonia: f64) -> (f64, f64) {
    (
        nitrate / (nitrate + parameters.nitrate_half_saturation),
        ammonia / (ammonia + parameters.ammonia_half_saturation),
    )
}

/// Process rates at one cell, mmol/m³/s.
///
/// Nitrogen fluxes are in mmol N; the detrital carbon fluxes are in mmol C.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Fluxes {
    /// Phytoplankton uptake of nitrate, mmol N/m³/s.
    pub nitrate_uptake: f64,
    /// Phytoplankton uptake of ammonia, mmol N/m³/s.
    pub ammonia_uptake: f64,
    /// Phytoplankton exudation, mmol N/m³/s.
    pub exudation: f64,
    /// Zooplankton grazing on phytoplankton, mmol N/m³/s.
    pub phytoplankton_grazing: f64,
    /// Zooplankton grazing on small detritus, mmol N/m³/s.
    pub detritus_grazing: f64,
    /// Carbon removed from small detritus by grazing, mmol C/m³/s.
    ///
    /// Carries the pool's own carbon-to-nitrogen ratio, so an empty carbon
    /// pool loses nothing.
    pub small_detrital_carbon_grazing: f64,
    /// Linear phytoplankton mortality, mmol N/m³/s.
    pub phytoplankton_mortality: f64,
    /// Quadratic zooplankton mortality, mmol N/m³/s.
    pub zooplankton_mortality: f64,
    /// Zooplankton excretion, mmol N/m³/s.
    pub zooplankton_excretion: f64,
    /// Small detritus remineralisation, mmol N/m³/s.
    pub small_detritus_remineralisation: f64,
    /// Large detritus remineralisation, mmol N/m³/s.
    pub large_detritus_remineralisation: f64,
    /// Small detrital carbon remineralisation, mmol C/m³/s.
    pub small_detrital_carbon_remineralisation: f64,
    /// Large detrital carbon remineralisation, mmol C/m³/s.
    pub large_detrital_carbon_remineralisation: f64,
    /// Breakdown of dissolved organic matter to ammonia, mmol N/m³/s.
    pub dissolved_organic_breakdown: f64,
    /// Oxidation of ammonia to nitrate, mmol N/m³/s.
    pub nitrification: f64,
}

impl Fluxes {
    /// Computes every process rate for `state`, clamping negative inputs to zero.
    #[must_use]
    pub fn new(parameters: &Parameters, state: &LocalState) -> Self {
        let s = state.clamped();
        let p = parameters;

        let production = growth_rate(p, &s) * s.phytoplankton;
        let share = nitrate_share(p, s.nitrate, s.ammonia);

        let preference = grazing_preference(p, s.phytoplankton, s.small_detritus);
        let food = preference * s.phytoplankton + (1.0 - preference) * s.small_detritus;
        let grazing = p.maximum_grazing_rate * s.zooplankton / (p.grazing_half_saturation + food);

        let detritus_grazing = grazing * (1.0 - preference) * s.small_detritus;
        let small_detrital_carbon_grazing = if s.small_detritus > 0.0 {
            detritus_grazing * s.small_detrital_carbon / s.small_detritus
        } else {
            0.0
        };

        Self {
            nitrate_uptake: share * production,
            ammonia_uptake: (1.0 - share) * production,
            exudation: p.phytoplankton_exudation_fraction * production,
            phytoplankton_grazing: grazing * preference * s.phytoplankton,
            detritus_grazing,
            small_detrital_carbon_grazing,
            phytoplankton_mortality: p.phytoplankton_mortality * s.phytoplankton,
            zooplankton_mortality: p.zooplankton_mortality * s.zooplankton * s.zooplankton,
            zooplankton_excretion: p.zooplankton_excretion_rate * s.zooplankton,
            small_detritus_remineralisation: p.small_detritus_remineralisation_rate
                * s.small_detritus,
            large_detritus_remineralisation: p.large_detritus_remineralisation_rate
                * s.large_detritus,
            small_detrital_carbon_remineralisation: p.small_detritus_remineralisation_rate
                * s.small_detrital_carbon,
            large_detrital_carbon_remineralisation: p.large_detritus_remineralisation_rate
                * s.large_detrital_carbon,
            dissolved_organic_breakdown: p.dissolved_organic_breakdown_rate
                * s.dissolved_organic_matter,
            nitrification: p.nitrification_rate * s.ammonia,
        }
    }

    /// Total primary production, mmol N/m³/s.
    #[must_use]
    pub fn primary_production(&self) -> f64 {
        self.nitrate_uptake + self.ammonia_uptake
    }

    /// Total grazing, mmol N/m³/s.
    #[must_use]
    pub fn grazing(&self) -> f64 {
        self.phytoplankton_grazing + self.detritus_grazing
    }

    /// Mortality routed to detritus, mmol N/m³/s.
    #[must_use]
    pub fn mortality(&self) -> f64 {
        self.phytoplankton_mortality + self.zooplankton_mortality
    }

    /// Detrital nitrogen remineralised, mmol N/m³/s.
    #[must_use]
    pub fn detritus_remineralisation(&self) -> f64 {
        self.small_detritus_remineralisation + self.large_detritus_remineralisation
    }

    /// Nitrogen regenerated as ammonia by all processes, mmol N/m³/s.
    #[must_use]
    pub fn ammonia_regeneration(&self, p: &Parameters) -> f64 {
        p.ammonia_fraction_of_exudate * self.exudation
            + p.ammonia_fraction_of_excrement * self.zooplankton_excretion
            + p.ammonia_fraction_of_detritus * self.detritus_remineralisation()
            + self.dissolved_organic_breakdown
    }
}

/// Relative weight zooplankton give phytoplankton over small detritus.
fn grazing_preference(p: &Parameters, phytoplankton: f64, detritus: f64) -> f64 {
    let weighted_phytoplankton = p.phytoplankton_preference * phytoplankton;
    let total = weighted_phytoplankton + (1.0 - p.phytoplankton_preference) * detritus;
    if total > 0.0 {
        weighted_phytoplankton / total
    } else {
        p.phytoplankton_preference
    }
}

pub(super) fn nitrate(_p: &Parameters, f: &Fluxes) -> f64 {
    f.nitrification - f.nitrate_uptake
}

pub(super) fn ammonia(p: &Parameters, f: &Fluxes) -> f64 {
    f.ammonia_regeneration(p) - f.ammonia_uptake - f.nitrification
}

pub(super) fn phytoplankton(_p: &Parameters, f: &Fluxes) -> f64 {
    f.primary_production() - f.exudation - f.phytoplankton_grazing - f.phytoplankton_mortality
}

pub(super) fn zooplankton(p: &Parameters, f: &Fluxes) -> f64 {
    p.zooplankton_assimilation_fraction * f.grazing()
        - f.zooplankton_mortality
        - f.zooplankton_excretion
}

pub(super) fn small_detritus(p: &Parameters, f: &Fluxes) -> f64 {
    (1.0 - p.zooplankton_assimilation_fraction) * f.grazing()
        + p.slow_sinking_mortality_fraction * f.mortality()
        - f.detritus_grazing
        - f.small_detritus_remineralisation
}

pub(super) fn large_detritus(p: &Parameters, f: &Fluxes) -> f64 {
    p.fast_sinking_mortality_fraction * f.mortality() - f.large_detritus_remineralisation
}

pub(super) fn dissolved_organic_matter(p: &Parameters, f: &Fluxes) -> f64 {
    (1.0 - p.ammonia_fraction_of_exudate) * f.exudation
        + (1.0 - p.ammonia_fraction_of_excrement) * f.zooplankton_excretion
        + (1.0 - p.ammonia_fraction_of_detritus) * f.detritus_remineralisation()
        - f.dissolved_organic_breakdown
}

/// Carbon entering detritus from mortality, mmol C/m³/s.
fn mortality_carbon(p: &Parameters, f: &Fluxes) -> f64 {
    p.phytoplankton_redfield * f.phytoplankton_mortality
        + p.organic_redfield * f.zooplankton_mortality
}

pub(super) fn small_detrital_carbon(p: &Parameters, f: &Fluxes) -> f64 {
    let egested = (1.0 - p.zooplankton_assimilation_fraction)
        * (p.phytoplankton_redfield * f.phytoplankton_grazing + f.small_detrital_carbon_grazing);
    egested + p.slow_sinking_mortality_fraction * mortality_carbon(p, f)
        - f.small_detrital_carbon_grazing
        - f.small_detrital_carbon_remineralisation
}

pub(super) fn large_detrital_carbon(p: &Parameters, f: &Fluxes) -> f64 {
    p.fast_sinking_mortality_fraction * mortality_carbon(p, f)
        - f.large_detrital_carbon_remineralisation
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use crate::models::biogeochemistry::lobster::core::test_support::{
        concentration, local_state, surface_bloom,
    };

    fn nitrogen_budget(p: &Parameters, f: &Fluxes) -> f64 {
        nitrate(p, f)
            + ammonia(p, f)
            + phytoplankton(p, f)
            + zooplankton(p, f)
            + small_detritus(p, f)
            + large_detritus(p, f)
            + dissolved_organic_matter(p, f)
    }

    #[test]
    fn darkness_stops_growth() {
        let p = Parameters::default();
        let state = LocalState {
            par: 0.0,
            ..surface_bloom()
        };

        assert_eq!(light_limitation(&p, 0.0), 0.0);
        assert_eq!(growth_rate(&p, &state), 0.0);

        let f = Fluxes::new(&p, &state);
        assert_eq!(f.primary_production(), 0.0);
        assert_eq!(f.exudation, 0.0);
    }

    #[test]
    fn bloom_draws_down_nitrate() {
        let p = Parameters::default();
        let f = Fluxes::new(&p, &surface_bloom());

        assert!(phytoplankton(&p, &f) > 0.0);
        assert!(nitrate(&p, &f) < 0.0);
    }

    #[test]
    fn light_limits_the_bloom() {
        let p = Parameters::default();
        let state = surface_bloom();

        // 50 W/m² is more limiting than the nutrient supply here.
        let expected = p.maximum_phytoplankton_growth_rate * 50.0 / (50.0 + 33.0);
        assert_relative_eq!(growth_rate(&p, &state), expected, max_relative = 1e-12);
    }

    #[test]
    fn ammonia_is_preferred_when_abundant() {
        let p = Parameters::default();
        assert!(nitrate_share(&p, 5.0, 0.0) == 1.0);
        assert!(nitrate_share(&p, 5.0, 1.0) < 0.05);
        assert_eq!(nitrate_share(&p, 0.0, 0.0), 0.0);
    }

    #[test]
    fn empty_cell_has_no_fluxes() {
        let p = Parameters::default();
        let f = Fluxes::new(&p, &LocalState::default());
        assert_eq!(f, Fluxes::default());
    }

    #[test]
    fn negative_concentrations_are_clamped() {
        let p = Parameters::default();
        let state = LocalState {
            phytoplankton: -0.2,
            zooplankton: -0.1,
            ..surface_bloom()
        };

        let f = Fluxes::new(&p, &state);
        assert_eq!(f.primary_production(), 0.0);
        assert_eq!(f.grazing(), 0.0);
        assert_eq!(f.zooplankton_mortality, 0.0);
    }

    #[test]
    fn grazed_detrital_carbon_follows_the_pool() {
        let p = Parameters::default();
        let detritus = LocalState {
            small_detritus: 1.0,
            zooplankton: 1.0,
            ..LocalState::default()
        };

        let carbonless = Fluxes::new(&p, &detritus);
        assert!(carbonless.detritus_grazing > 0.0);
        assert_eq!(carbonless.small_detrital_carbon_grazing, 0.0);
        assert!(small_detrital_carbon(&p, &carbonless) >= 0.0);

        let redfield = Fluxes::new(
            &p,
            &LocalState {
                small_detrital_carbon: p.organic_redfield,
                ..detritus
            },
        );
        assert_relative_eq!(
            redfield.small_detrital_carbon_grazing,
            p.organic_redfield * redfield.detritus_grazing,
            max_relative = 1e-12
        );
    }

    #[test]
    fn empty_detrital_carbon_stays_put_under_grazing() {
        let p = Parameters::default();
        let mut state = LocalState {
            small_detritus: 1.0,
            zooplankton: 1.0,
            ..LocalState::default()
        };

        // A day of hourly steps with the nitrogen pools held fixed.
        for _ in 0..24 {
            let rate = small_detrital_carbon(&p, &Fluxes::new(&p, &state));
            state.small_detrital_carbon += 3600.0 * rate;
        }
        assert!(state.small_detrital_carbon >= 0.0);
    }

    #[test]
    fn grazing_without_food_is_zero() {
        let p = Parameters::default();
        let state = LocalState {
            zooplankton: 1.0,
            ..LocalState::default()
        };
        let f = Fluxes::new(&p, &state);
        assert_eq!(f.grazing(), 0.0);
        assert!(zooplankton(&p, &f) < 0.0);
    }

    /// `after >= before`, allowing for rounding in the last few bits.
    fn non_decreasing(before: f64, after: f64) -> bool {
        after >= before - 1e-12 * before.abs()
    }

    proptest! {
        #[test]
        fn nitrogen_is_conserved(state in local_state()) {
            let p = Parameters::default();
            let f = Fluxes::new(&p, &state);
            let scale = f.primary_production()
                + f.grazing()
                + f.mortality()
                + f.zooplankton_excretion
                + f.detritus_remineralisation()
                + f.dissolved_organic_breakdown
                + f.nitrification;
            prop_assert!(nitrogen_budget(&p, &f).abs() <= 1e-12 * scale.max(1e-30));
        }

        #[test]
        fn growth_is_monotone_in_light(
            state in local_state(),
            extra in 0.0..500.0_f64,
        ) {
            let p = Parameters::default();
            let brighter = LocalState { par: state.par + extra, ..state };
            prop_assert!(non_decreasing(growth_rate(&p, &state), growth_rate(&p, &brighter)));
        }

        #[test]
        fn growth_is_monotone_in_nutrients(
            state in local_state(),
            extra_nitrate in concentration(),
            extra_ammonia in concentration(),
        ) {
            let p = Parameters::default();
            let more_nitrate = LocalState { nitrate: state.nitrate + extra_nitrate, ..state };
            let more_ammonia = LocalState { ammonia: state.ammonia + extra_ammonia, ..state };

            let base = growth_rate(&p, &state);
            prop_assert!(non_decreasing(base, growth_rate(&p, &more_nitrate)));
            prop_assert!(non_decreasing(base, growth_rate(&p, &more_ammonia)));
        }

        #[test]
        fn empty_nitrogen_pools_cannot_shrink(state in local_state(), pool in 0..7_usize) {
            let p = Parameters::default();
            let (emptied, rate): (LocalState, fn(&Parameters, &Fluxes) -> f64) = match pool {
                0 => (LocalState { nitrate: -0.01, ..state }, nitrate),
                1 => (LocalState { ammonia: -0.01, ..state }, ammonia),
                2 => (LocalState { phytoplankton: -0.01, ..state }, phytoplankton),
                3 => (LocalState { zooplankton: -0.01, ..state }, zooplankton),
                4 => (LocalState { small_detritus: -0.01, ..state }, small_detritus),
                5 => (LocalState { large_detritus: -0.01, ..state }, large_detritus),
                _ => (
                    LocalState { dissolved_organic_matter: -0.01, ..state },
                    dissolved_organic_matter,
                ),
            };
            prop_assert!(rate(&p, &Fluxes::new(&p, &emptied)) >= 0.0);
        }

        #[test]
        fn empty_detrital_carbon_cannot_shrink(state in local_state(), large in any::<bool>()) {
            let p = Parameters::default();
            let (emptied, rate): (LocalState, fn(&Parameters, &Fluxes) -> f64) = if large {
                (LocalState { large_detrital_carbon: -0.01, ..state }, large_detrital_carbon)
            } else {
                (LocalState { small_detrital_carbon: -0.01, ..state }, small_detrital_carbon)
            };
            prop_assert!(rate(&p, &Fluxes::new(&p, &emptied)) >= 0.0);
        }
    }
}

use crate::support::constraint::{ConstraintError, NonNegative, StrictlyPositive, UnitInterval};

use super::LobsterError;

/// Rate constants and ratios for the LOBSTER nitrogen cycle.
///
/// Times are in seconds and concentrations in mmol N/m³ unless noted.
/// Defaults follow Lévy et al. (2005) and Resplandy et al. (2012).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    /// Zooplankton preference for phytoplankton over small detritus.
    pub phytoplankton_preference: f64,
    /// Maximum zooplankton grazing rate, 1/s.
    pub maximum_grazing_rate: f64,
    /// Grazing half-saturation, mmol N/m³.
    pub grazing_half_saturation: f64,
    /// Light half-saturation, W/m².
    pub light_half_saturation: f64,
    /// Ammonia inhibition of nitrate uptake, m³/mmol N.
    pub nitrate_ammonia_inhibition: f64,
    /// Nitrate uptake half-saturation, mmol N/m³.
    pub nitrate_half_saturation: f64,
    /// Ammonia uptake half-saturation, mmol N/m³.
    pub ammonia_half_saturation: f64,
    /// Maximum phytoplankton growth rate, 1/s.
    pub maximum_phytoplankton_growth_rate: f64,
    /// Fraction of grazed nitrogen assimilated by zooplankton.
    pub zooplankton_assimilation_fraction: f64,
    /// Quadratic zooplankton mortality, m³/mmol N/s.
    pub zooplankton_mortality: f64,
    /// Zooplankton excretion rate, 1/s.
    pub zooplankton_excretion_rate: f64,
    /// Linear phytoplankton mortality, 1/s.
    pub phytoplankton_mortality: f64,
    /// Small (slow-sinking) detritus remineralisation rate, 1/s.
    pub small_detritus_remineralisation_rate: f64,
    /// Large (fast-sinking) detritus remineralisation rate, 1/s.
    pub large_detritus_remineralisation_rate: f64,
    /// Fraction of primary production exuded.
    pub phytoplankton_exudation_fraction: f64,
    /// Nitrification rate, 1/s.
    pub nitrification_rate: f64,
    /// Fraction of exudate released as ammonia (the rest as DOM).
    pub ammonia_fraction_of_exudate: f64,
    /// Fraction of zooplankton excretion released as ammonia (the rest as DOM).
    pub ammonia_fraction_of_excrement: f64,
    /// Fraction of remineralised detritus released as ammonia (the rest as DOM).
    pub ammonia_fraction_of_detritus: f64,
    /// Phytoplankton carbon to nitrogen ratio, mol C/mol N.
    pub phytoplankton_redfield: f64,
    /// Organic matter carbon to nitrogen ratio, mol C/mol N.
    pub organic_redfield: f64,
    /// Calcite produced per mol of organic carbon, mol CaCO₃/mol C.
    pub organic_carbon_calcate_ratio: f64,
    /// Oxygen consumed per mol of nitrogen respired, mol O/mol N.
    pub respiration_oxygen_nitrogen_ratio: f64,
    /// Oxygen consumed per mol of ammonia nitrified, mol O/mol N.
    pub nitrification_oxygen_nitrogen_ratio: f64,
    /// Fraction of mortality routed to small detritus.
    pub slow_sinking_mortality_fraction: f64,
    /// Fraction of mortality routed to large detritus.
    pub fast_sinking_mortality_fraction: f64,
    /// Dissolved organic matter breakdown rate, 1/s.
    pub dissolved_organic_breakdown_rate: f64,
    /// Fraction of grazed calcite dissolved in zooplankton guts.
    pub zooplankton_calcite_dissolution: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            phytoplankton_preference: 0.5,
            maximum_grazing_rate: 9.26e-6,
            grazing_half_saturation: 1.0,
            light_half_saturation: 33.0,
            nitrate_ammonia_inhibition: 3.0,
            nitrate_half_saturation: 0.7,
            ammonia_half_saturation: 0.001,
            maximum_phytoplankton_growth_rate: 1.21e-5,
            zooplankton_assimilation_fraction: 0.7,
            zooplankton_mortality: 2.31e-6,
            zooplankton_excretion_rate: 5.8e-7,
            phytoplankton_mortality: 5.8e-7,
            small_detritus_remineralisation_rate: 5.88e-7,
            large_detritus_remineralisation_rate: 5.88e-7,
            phytoplankton_exudation_fraction: 0.05,
            nitrification_rate: 5.8e-7,
            ammonia_fraction_of_exudate: 0.75,
            ammonia_fraction_of_excrement: 0.5,
            ammonia_fraction_of_detritus: 0.0,
            phytoplankton_redfield: 6.56,
            organic_redfield: 6.56,
            organic_carbon_calcate_ratio: 0.1,
            respiration_oxygen_nitrogen_ratio: 10.75,
            nitrification_oxygen_nitrogen_ratio: 2.0,
            slow_sinking_mortality_fraction: 0.5,
            fast_sinking_mortality_fraction: 0.5,
            dissolved_organic_breakdown_rate: 3.86e-7,
            zooplankton_calcite_dissolution: 0.3,
        }
    }
}

/// Tolerance on the sum of the two mortality fractions.
const FRACTION_SUM_TOL: f64 = 1e-9;

impl Parameters {
    /// Checks every parameter against its physical domain.
    ///
    /// # Errors
    ///
    /// Returns [`LobsterError::Parameter`] naming the first invalid parameter,
    /// or [`LobsterError::MortalityFractions`] if mortality is not fully
    /// routed to detritus.
    pub fn validate(&self) -> Result<(), LobsterError> {
        let non_negative = [
            ("maximum_grazing_rate", self.maximum_grazing_rate),
            ("nitrate_ammonia_inhibition", self.nitrate_ammonia_inhibition),
            ("maximum_phytoplankton_growth_rate", self.maximum_phytoplankton_growth_rate),
            ("zooplankton_mortality", self.zooplankton_mortality),
            ("zooplankton_excretion_rate", self.zooplankton_excretion_rate),
            ("phytoplankton_mortality", self.phytoplankton_mortality),
            ("small_detritus_remineralisation_rate", self.small_detritus_remineralisation_rate),
            ("large_detritus_remineralisation_rate", self.large_detritus_remineralisation_rate),
            ("nitrification_rate", self.nitrification_rate),
            ("phytoplankton_redfield", self.phytoplankton_redfield),
            ("organic_redfield", self.organic_redfield),
            ("organic_carbon_calcate_ratio", self.organic_carbon_calcate_ratio),
            ("respiration_oxygen_nitrogen_ratio", self.respiration_oxygen_nitrogen_ratio),
            ("nitrification_oxygen_nitrogen_ratio", self.nitrification_oxygen_nitrogen_ratio),
            ("dissolved_organic_breakdown_rate", self.dissolved_organic_breakdown_rate),
        ];
        let strictly_positive = [
            ("grazing_half_saturation", self.grazing_half_saturation),
            ("light_half_saturation", self.light_half_saturation),
            ("nitrate_half_saturation", self.nitrate_half_saturation),
            ("ammonia_half_saturation", self.ammonia_half_saturation),
        ];
        let fractions = [
            ("phytoplankton_preference", self.phytoplankton_preference),
            ("zooplankton_assimilation_fraction", self.zooplankton_assimilation_fraction),
            ("phytoplankton_exudation_fraction", self.phytoplankton_exudation_fraction),
            ("ammonia_fraction_of_exudate", self.ammonia_fraction_of_exudate),
            ("ammonia_fraction_of_excrement", self.ammonia_fraction_of_excrement),
            ("ammonia_fraction_of_detritus", self.ammonia_fraction_of_detritus),
            ("slow_sinking_mortality_fraction", self.slow_sinking_mortality_fraction),
            ("fast_sinking_mortality_fraction", self.fast_sinking_mortality_fraction),
            ("zooplankton_calcite_dissolution", self.zooplankton_calcite_dissolution),
        ];

        check_all(&non_negative, |v| NonNegative::new(v).map(drop))?;
        check_all(&strictly_positive, |v| StrictlyPositive::new(v).map(drop))?;
        check_all(&fractions, |v| UnitInterval::new(v).map(drop))?;

        let sum = self.slow_sinking_mortality_fraction + self.fast_sinking_mortality_fraction;
        if (sum - 1.0).abs() > FRACTION_SUM_TOL {
            return Err(LobsterError::MortalityFractions { sum });
        }

        // Oxygen regenerated with ammonia cannot exceed oxygen used by respiration.
        if self.nitrification_oxygen_nitrogen_ratio > self.respiration_oxygen_nitrogen_ratio {
            return Err(LobsterError::Parameter {
                name: "nitrification_oxygen_nitrogen_ratio",
                source: ConstraintError::AboveMaximum,
            });
        }

        Ok(())
    }
}

fn check_all(
    values: &[(&'static str, f64)],
    check: impl Fn(f64) -> Result<(), ConstraintError>,
) -> Result<(), LobsterError> {
    values.iter().try_for_each(|&(name, value)| {
        check(value).map_err(|source| LobsterError::Parameter { name, source })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Parameters::default().validate().is_ok());
    }

    #[test]
    fn negative_rates_are_rejected() {
        let parameters = Parameters {
            nitrification_rate: -1e-7,
            ..Parameters::default()
        };
        assert!(matches!(
            parameters.validate(),
            Err(LobsterError::Parameter {
                name: "nitrification_rate",
                source: ConstraintError::Negative,
            })
        ));
    }

    #[test]
    fn zero_half_saturation_is_rejected() {
        let parameters = Parameters {
            ammonia_half_saturation: 0.0,
            ..Parameters::default()
        };
        assert!(matches!(
            parameters.validate(),
            Err(LobsterError::Parameter {
                name: "ammonia_half_saturation",
                source: ConstraintError::Zero,
            })
        ));
    }

    #[test]
    fn fractions_must_lie_in_unit_interval() {
        let parameters = Parameters {
            zooplankton_assimilation_fraction: 1.2,
            ..Parameters::default()
        };
        assert!(matches!(
            parameters.validate(),
            Err(LobsterError::Parameter {
                name: "zooplankton_assimilation_fraction",
                ..
            })
        ));
    }

    #[test]
    fn mortality_must_be_fully_routed() {
        let parameters = Parameters {
            slow_sinking_mortality_fraction: 0.3,
            ..Parameters::default()
        };
        assert!(matches!(
            parameters.validate(),
            Err(LobsterError::MortalityFractions { .. })
        ));
    }
}

use super::{Fluxes, LocalState, Parameters, Tracer, chemistry, rates};

/// A tracer's rate of change given the cell's process rates.
pub type RateFn = fn(&Parameters, &Fluxes) -> f64;

/// Which optional chemistry a model carries.
///
/// The variant fixes the tracer set, and with it the rate table evaluated at
/// every cell, once at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Chemistry {
    /// The nine nitrogen-cycle tracers only.
    #[default]
    NitrogenOnly,
    /// Adds dissolved inorganic carbon and alkalinity.
    Carbonates,
    /// Adds dissolved oxygen.
    Oxygen,
    /// Adds carbonates and oxygen.
    CarbonatesAndOxygen,
}

/// Rate table for every tracer: the nitrogen cycle, then carbonates, then oxygen.
static ALL_RATES: [(Tracer, RateFn); Tracer::COUNT] = [
    (Tracer::Nitrate, rates::nitrate),
    (Tracer::Ammonia, rates::ammonia),
    (Tracer::Phytoplankton, rates::phytoplankton),
    (Tracer::Zooplankton, rates::zooplankton),
    (Tracer::SmallDetritus, rates::small_detritus),
    (Tracer::LargeDetritus, rates::large_detritus),
    (Tracer::SmallDetritalCarbon, rates::small_detrital_carbon),
    (Tracer::LargeDetritalCarbon, rates::large_detrital_carbon),
    (Tracer::DissolvedOrganicMatter, rates::dissolved_organic_matter),
    (Tracer::DissolvedInorganicCarbon, chemistry::dissolved_inorganic_carbon),
    (Tracer::Alkalinity, chemistry::alkalinity),
    (Tracer::Oxygen, chemistry::oxygen),
];

/// Nitrogen cycle plus oxygen, skipping the carbonate entries of `ALL_RATES`.
static OXYGEN_RATES: [(Tracer, RateFn); 10] = [
    (Tracer::Nitrate, rates::nitrate),
    (Tracer::Ammonia, rates::ammonia),
    (Tracer::Phytoplankton, rates::phytoplankton),
    (Tracer::Zooplankton, rates::zooplankton),
    (Tracer::SmallDetritus, rates::small_detritus),
    (Tracer::LargeDetritus, rates::large_detritus),
    (Tracer::SmallDetritalCarbon, rates::small_detrital_carbon),
    (Tracer::LargeDetritalCarbon, rates::large_detrital_carbon),
    (Tracer::DissolvedOrganicMatter, rates::dissolved_organic_matter),
    (Tracer::Oxygen, chemistry::oxygen),
];

const NITROGEN_TRACERS: usize = 9;
const CARBONATE_TRACERS: usize = 11;

impl Chemistry {
    /// Selects the chemistry from the two configuration switches.
    #[must_use]
    pub fn from_switches(carbonates: bool, oxygen: bool) -> Self {
        match (carbonates, oxygen) {
            (false, false) => Self::NitrogenOnly,
            (true, false) => Self::Carbonates,
            (false, true) => Self::Oxygen,
            (true, true) => Self::CarbonatesAndOxygen,
        }
    }

    /// Returns the `(tracer, rate)` pairs this chemistry evaluates, in tracer order.
    #[must_use]
    pub fn rate_table(self) -> &'static [(Tracer, RateFn)] {
        match self {
            Self::NitrogenOnly => &ALL_RATES[..NITROGEN_TRACERS],
            Self::Carbonates => &ALL_RATES[..CARBONATE_TRACERS],
            Self::Oxygen => &OXYGEN_RATES,
            Self::CarbonatesAndOxygen => &ALL_RATES,
        }
    }

    /// Returns the active tracers, in order.
    pub fn tracers(self) -> impl Iterator<Item = Tracer> {
        self.rate_table().iter().map(|&(tracer, _)| tracer)
    }

    /// Returns true if `tracer` is carried by this chemistry.
    #[must_use]
    pub fn is_active(self, tracer: Tracer) -> bool {
        self.tracers().any(|active| active == tracer)
    }

    /// Evaluates one tracer's tendency, or `None` if the tracer is inactive.
    #[must_use]
    pub fn tendency(
        self,
        tracer: Tracer,
        parameters: &Parameters,
        state: &LocalState,
    ) -> Option<f64> {
        let &(_, rate) = self.rate_table().iter().find(|&&(active, _)| active == tracer)?;
        Some(rate(parameters, &Fluxes::new(parameters, state)))
    }

    /// Evaluates every active tracer's tendency from one set of fluxes.
    #[must_use]
    pub fn tendencies(self, parameters: &Parameters, state: &LocalState) -> Tendencies {
        let fluxes = Fluxes::new(parameters, state);
        let table = self.rate_table();

        let mut values = [(Tracer::Nitrate, 0.0); Tracer::COUNT];
        for (slot, &(tracer, rate)) in values.iter_mut().zip(table) {
            *slot = (tracer, rate(parameters, &fluxes));
        }

        Tendencies {
            values,
            len: table.len(),
        }
    }
}

/// Tendencies of every active tracer at one cell, in tracer order.
///
/// Units are those of the tracer per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tendencies {
    values: [(Tracer, f64); Tracer::COUNT],
    len: usize,
}

impl Tendencies {
    /// Returns the tendency of `tracer`, or `None` if it is inactive.
    #[must_use]
    pub fn get(&self, tracer: Tracer) -> Option<f64> {
        self.iter()
            .find(|&(active, _)| active == tracer)
            .map(|(_, value)| value)
    }

    /// Iterates over `(tracer, tendency)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Tracer, f64)> + '_ {
        self.values[..self.len].iter().copied()
    }

    /// Sum of the nitrogen-pool tendencies, mmol N/m³/s.
    ///
    /// Zero up to rounding for any state.
    #[must_use]
    pub fn nitrogen_balance(&self) -> f64 {
        Tracer::NITROGEN_POOLS
            .into_iter()
            .filter_map(|tracer| self.get(tracer))
            .sum()
    }
}

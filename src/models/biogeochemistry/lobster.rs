//! The LOBSTER biogeochemical model.
//!
//! LOBSTER carries nitrate, ammonia, phytoplankton, zooplankton, two sizes of
//! detritus with their carbon content, and dissolved organic matter, with
//! optional carbonate (DIC, alkalinity) and oxygen tracers. Phytoplankton
//! growth is driven by a PAR field the model recomputes each host step.
//!
//! [`Lobster`] implements [`Biogeochemistry`] for hosts and
//! [`twine_core::Model`] for evaluating tendencies at a single cell.
//! The computational core is in the internal [`core`] module.

pub(crate) mod core;

pub use self::core::{
    Chemistry, Fluxes, LobsterError, LocalState, Parameters, RateFn, SinkingVelocity, Tendencies,
    Tracer, calcite_production, growth_rate, light_limitation, nitrate_share, nutrient_limitation,
};

use std::{collections::BTreeMap, convert::Infallible};

use twine_core::Model;
use uom::si::{
    f64::{Length, Velocity},
    length::meter,
    velocity::meter_per_second,
};

use crate::support::{
    constraint::StrictlyPositive,
    host::{
        AdvectionScheme, Biogeochemistry, Field, RectilinearGrid, SimulationState, StateError,
        VelocityFields,
    },
    light::{
        DiurnalCycle, EuphoticDepthConfig, EuphoticDepthError, LightAttenuation, PAR,
        SurfaceForcing, TwoBandPar,
    },
};

/// Construction options for [`Lobster`].
#[derive(Debug, Clone, PartialEq)]
pub struct LobsterConfig {
    /// Reaction-rate parameters.
    pub parameters: Parameters,

    /// Carry dissolved inorganic carbon and alkalinity.
    pub carbonates: bool,

    /// Carry dissolved oxygen.
    pub oxygen: bool,

    /// Drift velocity per tracer.
    ///
    /// Detrital carbon always drifts with its detritus and cannot appear here.
    pub sinking_velocities: Vec<(Tracer, SinkingVelocity)>,

    /// Let constant sinking continue through the floor.
    ///
    /// When false, constant vertical velocities taper to zero at the floor
    /// over [`bottom_smoothing`](Self::bottom_smoothing).
    pub open_bottom: bool,

    /// Length scale of the closed-bottom taper.
    pub bottom_smoothing: Length,

    /// Advection scheme overrides.
    ///
    /// Drifting tracers without an entry use [`AdvectionScheme::default`].
    pub advection_schemes: Vec<(Tracer, AdvectionScheme)>,
}

impl Default for LobsterConfig {
    fn default() -> Self {
        Self {
            parameters: Parameters::default(),
            carbonates: false,
            oxygen: false,
            sinking_velocities: vec![
                (
                    Tracer::SmallDetritus,
                    SinkingVelocity::sinking(Velocity::new::<meter_per_second>(3.47e-5)),
                ),
                (
                    Tracer::LargeDetritus,
                    SinkingVelocity::sinking(Velocity::new::<meter_per_second>(200.0 / 86_400.0)),
                ),
            ],
            open_bottom: true,
            bottom_smoothing: Length::new::<meter>(2.0),
            advection_schemes: Vec::new(),
        }
    }
}

/// A configured LOBSTER model.
///
/// `L` attenuates light through the water column and `F` supplies surface PAR.
/// Everything is fixed at construction; the model is read-only afterwards.
///
/// ```
/// use bgc_models::{
///     models::biogeochemistry::lobster::Lobster,
///     support::host::{Biogeochemistry, RectilinearGrid, SimulationState},
/// };
/// use uom::si::{f64::Length, length::meter};
///
/// let grid = RectilinearGrid::column(20, Length::new::<meter>(200.0))?;
/// let lobster = Lobster::new(&grid)?;
/// assert_eq!(lobster.required_tracers().len(), 9);
/// assert_eq!(lobster.drift_velocity("Dᶜ"), lobster.drift_velocity("D"));
///
/// let mut state = SimulationState::for_model(&grid, &lobster);
/// state.fill_tracer("NO₃", 5.0)?;
/// state.fill_tracer("P", 0.1)?;
/// lobster.update_state(&mut state)?;
///
/// let surface = lobster.tendencies_at(&state, 0, 0, 19)?;
/// assert!(surface.iter().count() == 9);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Lobster<L = TwoBandPar, F = DiurnalCycle> {
    parameters: Parameters,
    chemistry: Chemistry,
    light: L,
    surface_par: F,
    drift: BTreeMap<Tracer, VelocityFields>,
    advection: BTreeMap<Tracer, AdvectionScheme>,
}

impl Lobster {
    /// Builds a model with default configuration, light and forcing.
    ///
    /// # Errors
    ///
    /// Never fails for a valid grid; the error type is shared with [`Lobster::build`].
    pub fn new(grid: &RectilinearGrid) -> Result<Self, LobsterError> {
        Self::build(
            grid,
            LobsterConfig::default(),
            TwoBandPar::default(),
            DiurnalCycle::default(),
        )
    }
}

impl<L, F> Lobster<L, F>
where
    L: LightAttenuation,
    F: SurfaceForcing,
{
    /// Builds a model on `grid`.
    ///
    /// Sinking velocities are materialised on the grid here.
    ///
    /// # Errors
    ///
    /// Returns a [`LobsterError`] if a parameter is invalid, a sinking or
    /// advection entry names an inactive, aliased or repeated tracer, or user
    /// velocity fields do not fit the grid.
    pub fn build(
        grid: &RectilinearGrid,
        config: LobsterConfig,
        light: L,
        surface_par: F,
    ) -> Result<Self, LobsterError> {
        let LobsterConfig {
            parameters,
            carbonates,
            oxygen,
            sinking_velocities,
            open_bottom,
            bottom_smoothing,
            advection_schemes,
        } = config;

        parameters.validate()?;
        StrictlyPositive::new(bottom_smoothing).map_err(|source| LobsterError::Parameter {
            name: "bottom_smoothing",
            source,
        })?;

        let chemistry = Chemistry::from_switches(carbonates, oxygen);

        let mut drift = BTreeMap::new();
        for (tracer, velocity) in sinking_velocities {
            let tracer = configurable(chemistry, tracer)?;
            let fields = velocity.into_fields(tracer, grid, open_bottom, bottom_smoothing)?;
            if drift.insert(tracer, fields).is_some() {
                return Err(LobsterError::DuplicateTracer { tracer });
            }
        }

        let mut schemes = BTreeMap::new();
        for (tracer, scheme) in advection_schemes {
            let tracer = configurable(chemistry, tracer)?;
            if schemes.insert(tracer, scheme).is_some() {
                return Err(LobsterError::DuplicateTracer { tracer });
            }
        }
        let mut advection: BTreeMap<_, _> = drift
            .keys()
            .map(|&tracer| (tracer, AdvectionScheme::default()))
            .collect();
        advection.extend(schemes);

        log::debug!(
            "built LOBSTER with {chemistry:?} on a {:?} grid, drifting tracers {:?}",
            grid.size(),
            drift.keys().collect::<Vec<_>>(),
        );

        Ok(Self {
            parameters,
            chemistry,
            light,
            surface_par,
            drift,
            advection,
        })
    }
}

/// Checks that `tracer` may key a sinking or advection entry.
fn configurable(chemistry: Chemistry, tracer: Tracer) -> Result<Tracer, LobsterError> {
    if tracer.is_drift_alias() {
        Err(LobsterError::AliasedTracer { tracer })
    } else if !chemistry.is_active(tracer) {
        Err(LobsterError::InactiveTracer { tracer })
    } else {
        Ok(tracer)
    }
}

impl<L, F> Lobster<L, F> {
    /// Returns the reaction-rate parameters.
    #[must_use]
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Returns the selected chemistry.
    #[must_use]
    pub fn chemistry(&self) -> Chemistry {
        self.chemistry
    }

    /// Tendency of one tracer at a cell, in tracer units per second.
    ///
    /// # Errors
    ///
    /// Returns [`LobsterError::InactiveTracer`] if the tracer is not carried.
    pub fn tendency(&self, tracer: Tracer, state: &LocalState) -> Result<f64, LobsterError> {
        self.chemistry
            .tendency(tracer, &self.parameters, state)
            .ok_or(LobsterError::InactiveTracer { tracer })
    }

    /// Tendencies of every active tracer at a cell.
    #[must_use]
    pub fn tendencies(&self, state: &LocalState) -> Tendencies {
        self.chemistry.tendencies(&self.parameters, state)
    }

    /// Reads the concentrations and PAR the rates need at cell `(i, j, k)`.
    ///
    /// # Errors
    ///
    /// Returns a [`StateError`] if a field is missing or the cell is out of bounds.
    pub fn local_state(
        &self,
        state: &SimulationState<'_>,
        i: usize,
        j: usize,
        k: usize,
    ) -> Result<LocalState, StateError> {
        let at = |field: &Field| {
            field.get(i, j, k).ok_or(StateError::OutOfBounds { i, j, k })
        };
        let tracer = |tracer: Tracer| state.tracer(tracer.name()).and_then(at);

        Ok(LocalState {
            nitrate: tracer(Tracer::Nitrate)?,
            ammonia: tracer(Tracer::Ammonia)?,
            phytoplankton: tracer(Tracer::Phytoplankton)?,
            zooplankton: tracer(Tracer::Zooplankton)?,
            small_detritus: tracer(Tracer::SmallDetritus)?,
            large_detritus: tracer(Tracer::LargeDetritus)?,
            small_detrital_carbon: tracer(Tracer::SmallDetritalCarbon)?,
            large_detrital_carbon: tracer(Tracer::LargeDetritalCarbon)?,
            dissolved_organic_matter: tracer(Tracer::DissolvedOrganicMatter)?,
            par: state.auxiliary(PAR).and_then(at)?,
        })
    }

    /// Tendencies of every active tracer at cell `(i, j, k)` of a host state.
    ///
    /// # Errors
    ///
    /// Returns a [`StateError`] if a field is missing or the cell is out of bounds.
    pub fn tendencies_at(
        &self,
        state: &SimulationState<'_>,
        i: usize,
        j: usize,
        k: usize,
    ) -> Result<Tendencies, StateError> {
        Ok(self.tendencies(&self.local_state(state, i, j, k)?))
    }

    /// Resolves a host tracer name to an active tracer.
    fn active(&self, name: &str) -> Option<Tracer> {
        Tracer::from_name(name).filter(|&tracer| self.chemistry.is_active(tracer))
    }
}

impl<F> Lobster<TwoBandPar, F> {
    /// Depth of the euphotic zone in column `(i, j)`, using the current
    /// phytoplankton field.
    ///
    /// Returns `Ok(None)` when more than `config.threshold` of surface PAR
    /// reaches the floor.
    ///
    /// # Errors
    ///
    /// Returns an [`EuphoticDepthError`] if the phytoplankton field is missing,
    /// the column is out of bounds, or the depth search fails.
    pub fn euphotic_depth(
        &self,
        state: &SimulationState<'_>,
        (i, j): (usize, usize),
        config: &EuphoticDepthConfig,
    ) -> Result<Option<Length>, EuphoticDepthError> {
        let grid = state.grid();
        let phytoplankton = state.tracer(Tracer::Phytoplankton.name())?;
        let [nx, ny, _] = grid.size();
        if i >= nx || j >= ny {
            return Err(StateError::OutOfBounds { i, j, k: 0 }.into());
        }
        self.light
            .euphotic_depth(grid, phytoplankton, (i, j), config)
    }
}

impl<L, F> Biogeochemistry for Lobster<L, F>
where
    L: LightAttenuation,
    F: SurfaceForcing,
{
    fn required_tracers(&self) -> Vec<&'static str> {
        self.chemistry.tracers().map(Tracer::name).collect()
    }

    fn required_auxiliary_fields(&self) -> &'static [&'static str] {
        self.light.auxiliary_fields()
    }

    fn drift_velocity(&self, tracer: &str) -> Option<&VelocityFields> {
        let tracer = self.active(tracer)?;
        self.drift.get(&tracer.drift_source())
    }

    fn advection_scheme(&self, tracer: &str) -> Option<AdvectionScheme> {
        let tracer = self.active(tracer)?;
        self.advection.get(&tracer.drift_source()).copied()
    }

    fn update_state(&self, state: &mut SimulationState<'_>) -> Result<(), StateError> {
        self.light
            .update(state, Tracer::Phytoplankton.name(), &self.surface_par)
    }
}

impl<L, F> Model for Lobster<L, F> {
    type Input = LocalState;
    type Output = Tendencies;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.tendencies(input))
    }
}

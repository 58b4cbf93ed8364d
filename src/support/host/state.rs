use std::collections::BTreeMap;

use uom::{ConstZero, si::f64::Time};

use super::{Biogeochemistry, Field, Location, RectilinearGrid, StateError};

/// Tracer and auxiliary fields at one instant of a simulation.
///
/// This is the part of a host's model state a biogeochemistry plugin reads
/// and writes. Tracers are advanced by the host; auxiliary fields are
/// diagnostics the plugin recomputes in [`Biogeochemistry::update_state`].
#[derive(Debug, Clone)]
pub struct SimulationState<'g> {
    grid: &'g RectilinearGrid,
    /// Simulation time.
    pub time: Time,
    tracers: BTreeMap<String, Field>,
    auxiliary: BTreeMap<String, Field>,
}

impl<'g> SimulationState<'g> {
    /// Creates an empty state at time zero.
    #[must_use]
    pub fn new(grid: &'g RectilinearGrid) -> Self {
        Self {
            grid,
            time: Time::ZERO,
            tracers: BTreeMap::new(),
            auxiliary: BTreeMap::new(),
        }
    }

    /// Creates a state with zeroed fields for everything `model` requires.
    #[must_use]
    pub fn for_model(grid: &'g RectilinearGrid, model: &impl Biogeochemistry) -> Self {
        let mut state = Self::new(grid);
        for name in model.required_tracers() {
            state
                .tracers
                .insert(name.to_owned(), Field::zeros(grid, Location::Center));
        }
        for &name in model.required_auxiliary_fields() {
            state
                .auxiliary
                .insert(name.to_owned(), Field::zeros(grid, Location::Center));
        }
        state
    }

    /// Returns the grid the fields live on.
    #[must_use]
    pub fn grid(&self) -> &'g RectilinearGrid {
        self.grid
    }

    /// Inserts or replaces a tracer field.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Shape`] if the field is not cell-centred on this grid.
    pub fn set_tracer(&mut self, name: &str, field: Field) -> Result<(), StateError> {
        field.check_shape(name, self.grid, Location::Center)?;
        self.tracers.insert(name.to_owned(), field);
        Ok(())
    }

    /// Fills a tracer with a uniform concentration.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::MissingTracer`] if the tracer was never allocated.
    pub fn fill_tracer(&mut self, name: &str, value: f64) -> Result<(), StateError> {
        let grid = self.grid;
        let field = self.tracer_mut(name)?;
        *field = Field::constant(grid, Location::Center, value);
        Ok(())
    }

    /// Returns a tracer field by name.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::MissingTracer`] if the tracer is not present.
    pub fn tracer(&self, name: &str) -> Result<&Field, StateError> {
        self.tracers
            .get(name)
            .ok_or_else(|| StateError::MissingTracer {
                name: name.to_owned(),
            })
    }

    /// Returns a mutable tracer field by name.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::MissingTracer`] if the tracer is not present.
    pub fn tracer_mut(&mut self, name: &str) -> Result<&mut Field, StateError> {
        self.tracers
            .get_mut(name)
            .ok_or_else(|| StateError::MissingTracer {
                name: name.to_owned(),
            })
    }

    /// Inserts or replaces an auxiliary field.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Shape`] if the field is not cell-centred on this grid.
    pub fn insert_auxiliary(&mut self, name: &str, field: Field) -> Result<(), StateError> {
        field.check_shape(name, self.grid, Location::Center)?;
        self.auxiliary.insert(name.to_owned(), field);
        Ok(())
    }

    /// Returns an auxiliary field by name.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::MissingAuxiliary`] if the field is not present.
    pub fn auxiliary(&self, name: &str) -> Result<&Field, StateError> {
        self.auxiliary
            .get(name)
            .ok_or_else(|| StateError::MissingAuxiliary {
                name: name.to_owned(),
            })
    }

    /// Borrows a tracer for reading and an auxiliary field for writing at once.
    ///
    /// # Errors
    ///
    /// Returns a [`StateError`] if either field is not present.
    pub fn tracer_and_auxiliary_mut(
        &mut self,
        tracer: &str,
        auxiliary: &str,
    ) -> Result<(&Field, &mut Field), StateError> {
        let source = self
            .tracers
            .get(tracer)
            .ok_or_else(|| StateError::MissingTracer { name: tracer.to_owned() })?;
        let target = self
            .auxiliary
            .get_mut(auxiliary)
            .ok_or_else(|| StateError::MissingAuxiliary { name: auxiliary.to_owned() })?;
        Ok((source, target))
    }

    /// Iterates over tracer names in sorted order.
    pub fn tracer_names(&self) -> impl Iterator<Item = &str> {
        self.tracers.keys().map(String::as_str)
    }
}

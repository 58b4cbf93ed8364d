//! Euphotic depth: where PAR falls to a fixed fraction of its surface value.

use std::convert::Infallible;

use thiserror::Error;
use twine_core::{EquationProblem, Model};
use twine_solvers::equation::bisection;
use uom::si::{f64::Length, length::meter};

use crate::support::host::{Field, RectilinearGrid, StateError};

use super::TwoBandPar;

/// Solver configuration for the euphotic depth search.
#[derive(Debug, Clone, Copy)]
pub struct EuphoticDepthConfig {
    /// Fraction of surface PAR that defines the base of the euphotic zone.
    pub threshold: f64,

    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on depth.
    pub depth_tol: Length,

    /// Absolute tolerance on the transmitted fraction residual.
    pub fraction_tol: f64,
}

impl Default for EuphoticDepthConfig {
    fn default() -> Self {
        Self {
            threshold: 0.01,
            max_iters: 100,
            depth_tol: Length::new::<meter>(1e-9),
            fraction_tol: 1e-12,
        }
    }
}

impl EuphoticDepthConfig {
    fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.depth_tol.get::<meter>(),
            x_rel_tol: 0.0,
            residual_tol: self.fraction_tol,
        }
    }
}

/// Errors that can occur while searching for the euphotic depth.
#[derive(Debug, Error)]
pub enum EuphoticDepthError {
    /// The threshold is not inside the open unit interval.
    #[error("threshold {0} must lie strictly between 0 and 1")]
    Threshold(f64),

    /// The phytoplankton field could not be read from the host state.
    #[error("cannot read the phytoplankton column")]
    State(#[from] StateError),

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual}")]
    MaxIters {
        /// Best fraction residual achieved.
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}

/// Light transmitted to one depth of one column.
#[derive(Debug, Clone, Copy)]
struct Transmission {
    depth: Length,
    fraction: f64,
}

/// Model adapter exposing depth as the sole input.
struct ColumnLight<'a> {
    light: &'a TwoBandPar,
    grid: &'a RectilinearGrid,
    phytoplankton: &'a Field,
    column: (usize, usize),
}

impl Model for ColumnLight<'_> {
    type Input = Length;
    type Output = Transmission;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let fraction =
            self.light
                .transmitted_fraction(self.grid, self.phytoplankton, self.column, *input);
        Ok(Transmission {
            depth: *input,
            fraction,
        })
    }
}

/// Residual is `fraction - threshold`, positive above the euphotic base.
struct ThresholdProblem {
    threshold: f64,
}

impl EquationProblem<1> for ThresholdProblem {
    type Input = Length;
    type Output = Transmission;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(Length::new::<meter>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.fraction - self.threshold])
    }
}

impl TwoBandPar {
    /// Depth below the surface of column `(i, j)` where PAR falls to
    /// `config.threshold` of its surface value.
    ///
    /// Returns `Ok(None)` when more than the threshold still reaches the floor.
    ///
    /// # Errors
    ///
    /// Returns an [`EuphoticDepthError`] if the threshold is outside `(0, 1)`
    /// or the bisection solve fails to converge.
    pub fn euphotic_depth(
        &self,
        grid: &RectilinearGrid,
        phytoplankton: &Field,
        (i, j): (usize, usize),
        config: &EuphoticDepthConfig,
    ) -> Result<Option<Length>, EuphoticDepthError> {
        if !(config.threshold > 0.0 && config.threshold < 1.0) {
            return Err(EuphoticDepthError::Threshold(config.threshold));
        }

        let floor = grid.extent()[2];
        if self.transmitted_fraction(grid, phytoplankton, (i, j), floor) >= config.threshold {
            return Ok(None);
        }

        let model = ColumnLight {
            light: self,
            grid,
            phytoplankton,
            column: (i, j),
        };
        let problem = ThresholdProblem {
            threshold: config.threshold,
        };

        let solution = bisection::solve(
            &model,
            &problem,
            [0.0, floor.get::<meter>()],
            &config.bisection(),
            |_event: &bisection::Event<'_, _, _>| -> Option<bisection::Action> { None },
        )?;

        if solution.status != bisection::Status::Converged {
            return Err(EuphoticDepthError::MaxIters {
                residual: solution.residual,
                iters: solution.iters,
            });
        }

        Ok(Some(solution.snapshot.output.depth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::host::Location;

    #[test]
    fn clear_water_euphotic_depth() {
        let grid = RectilinearGrid::column(50, Length::new::<meter>(500.0)).unwrap();
        let p = Field::zeros(&grid, Location::Center);
        let light = TwoBandPar::default();

        let depth = light
            .euphotic_depth(&grid, &p, (0, 0), &EuphoticDepthConfig::default())
            .unwrap()
            .expect("clear water column is deep enough");

        let fraction = light.transmitted_fraction(&grid, &p, (0, 0), depth);
        assert_relative_eq!(fraction, 0.01, epsilon = 1e-9);
        assert!(depth.get::<meter>() > 100.0 && depth.get::<meter>() < 300.0);
    }

    #[test]
    fn pigment_shoals_the_euphotic_zone() {
        let grid = RectilinearGrid::column(50, Length::new::<meter>(500.0)).unwrap();
        let light = TwoBandPar::default();
        let config = EuphoticDepthConfig::default();

        let clear = Field::zeros(&grid, Location::Center);
        let green = Field::constant(&grid, Location::Center, 2.0);

        let clear = light.euphotic_depth(&grid, &clear, (0, 0), &config).unwrap();
        let green = light.euphotic_depth(&grid, &green, (0, 0), &config).unwrap();
        assert!(green.unwrap() < clear.unwrap());
    }

    #[test]
    fn shallow_column_returns_none() {
        let grid = RectilinearGrid::column(5, Length::new::<meter>(10.0)).unwrap();
        let p = Field::zeros(&grid, Location::Center);

        let depth = TwoBandPar::default()
            .euphotic_depth(&grid, &p, (0, 0), &EuphoticDepthConfig::default())
            .unwrap();
        assert!(depth.is_none());
    }

    #[test]
    fn rejects_thresholds_outside_unit_interval() {
        let grid = RectilinearGrid::column(5, Length::new::<meter>(10.0)).unwrap();
        let p = Field::zeros(&grid, Location::Center);
        let config = EuphoticDepthConfig {
            threshold: 1.5,
            ..EuphoticDepthConfig::default()
        };

        let result = TwoBandPar::default().euphotic_depth(&grid, &p, (0, 0), &config);
        assert!(matches!(result, Err(EuphoticDepthError::Threshold(_))));
    }
}

use uom::si::{f64::Length, heat_flux_density::watt_per_square_meter, length::meter};

use crate::support::host::{Field, Location, RectilinearGrid, SimulationState, StateError};

use super::{LightAttenuation, PAR, SurfaceForcing};

/// Two-band (red and blue) light attenuation.
///
/// Surface PAR is split evenly between a red and a blue band. Each band
/// decays exponentially with an attenuation coefficient
/// `k = k_water + χ · pigment^e` per metre, where the pigment concentration
/// (mg/m³) is derived from phytoplankton nitrogen. PAR at a cell centre
/// integrates attenuation through every overlying cell and half of its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoBandPar {
    /// Attenuation of pure water in the red band, 1/m.
    pub water_red_attenuation: f64,
    /// Attenuation of pure water in the blue band, 1/m.
    pub water_blue_attenuation: f64,
    /// Pigment attenuation coefficient in the red band.
    pub chlorophyll_red_attenuation: f64,
    /// Pigment attenuation coefficient in the blue band.
    pub chlorophyll_blue_attenuation: f64,
    /// Pigment attenuation exponent in the red band.
    pub chlorophyll_red_exponent: f64,
    /// Pigment attenuation exponent in the blue band.
    pub chlorophyll_blue_exponent: f64,
    /// Chlorophyll fraction of total pigment.
    pub pigment_ratio: f64,
    /// Chlorophyll per phytoplankton nitrogen, g Chl/mol N.
    pub phytoplankton_chlorophyll_ratio: f64,
}

impl Default for TwoBandPar {
    fn default() -> Self {
        Self {
            water_red_attenuation: 0.225,
            water_blue_attenuation: 0.0232,
            chlorophyll_red_attenuation: 0.037,
            chlorophyll_blue_attenuation: 0.074,
            chlorophyll_red_exponent: 0.629,
            chlorophyll_blue_exponent: 0.674,
            pigment_ratio: 0.7,
            phytoplankton_chlorophyll_ratio: 1.31,
        }
    }
}

impl TwoBandPar {
    /// Returns the red and blue attenuation coefficients (1/m) for a cell
    /// holding `phytoplankton` mmol N/m³.
    #[must_use]
    pub fn attenuation(&self, phytoplankton: f64) -> [f64; 2] {
        let pigment =
            phytoplankton.max(0.0) * self.phytoplankton_chlorophyll_ratio / self.pigment_ratio;
        [
            self.water_red_attenuation
                + self.chlorophyll_red_attenuation * pigment.powf(self.chlorophyll_red_exponent),
            self.water_blue_attenuation
                + self.chlorophyll_blue_attenuation * pigment.powf(self.chlorophyll_blue_exponent),
        ]
    }

    /// Fraction of surface PAR remaining at `depth` below the surface of
    /// column `(i, j)`.
    ///
    /// Depths below the floor are treated as the floor.
    pub(super) fn transmitted_fraction(
        &self,
        grid: &RectilinearGrid,
        phytoplankton: &Field,
        (i, j): (usize, usize),
        depth: Length,
    ) -> f64 {
        let nz = grid.size()[2];
        let dz = grid.spacing()[2].get::<meter>();
        let mut remaining = depth.get::<meter>().max(0.0);
        let mut optical_depth = [0.0, 0.0];

        for k in (0..nz).rev() {
            if remaining <= 0.0 {
                break;
            }
            let thickness = remaining.min(dz);
            let [red, blue] = self.attenuation(phytoplankton.get(i, j, k).unwrap_or(0.0));
            optical_depth[0] += red * thickness;
            optical_depth[1] += blue * thickness;
            remaining -= thickness;
        }

        0.5 * ((-optical_depth[0]).exp() + (-optical_depth[1]).exp())
    }
}

impl LightAttenuation for TwoBandPar {
    fn auxiliary_fields(&self) -> &'static [&'static str] {
        &[PAR]
    }

    fn update(
        &self,
        state: &mut SimulationState<'_>,
        phytoplankton: &str,
        surface: &impl SurfaceForcing,
    ) -> Result<(), StateError> {
        let grid = state.grid();
        let time = state.time;
        let (p, par) = state.tracer_and_auxiliary_mut(phytoplankton, PAR)?;
        p.check_shape(phytoplankton, grid, Location::Center)?;
        par.check_shape(PAR, grid, Location::Center)?;

        let [nx, ny, nz] = grid.size();
        let dz = grid.spacing()[2].get::<meter>();

        for j in 0..ny {
            let y = grid.ynode(j);
            for i in 0..nx {
                let incoming = surface
                    .surface_par(grid.xnode(i), y, time)
                    .get::<watt_per_square_meter>()
                    .max(0.0);
                let mut bands = [0.5 * incoming, 0.5 * incoming];

                for k in (0..nz).rev() {
                    let [red, blue] = self.attenuation(p.get(i, j, k).unwrap_or(0.0));
                    let centre = bands[0] * (-0.5 * red * dz).exp()
                        + bands[1] * (-0.5 * blue * dz).exp();
                    par.set(i, j, k, centre)?;
                    bands[0] *= (-red * dz).exp();
                    bands[1] *= (-blue * dz).exp();
                }
            }
        }

        log::trace!("updated {PAR} on {nx}x{ny}x{nz} cells at t = {time:?}");
        Ok(())
    }
}

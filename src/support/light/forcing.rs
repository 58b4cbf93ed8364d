use std::f64::consts::TAU;

use uom::si::{
    f64::{HeatFluxDensity, Length, Time},
    heat_flux_density::watt_per_square_meter,
    ratio::ratio,
    time::day,
};

/// Surface PAR as a function of horizontal position and time.
///
/// Any `Fn(Length, Length, Time) -> HeatFluxDensity` closure is a forcing.
pub trait SurfaceForcing {
    /// Returns the irradiance entering the water column at `(x, y)` at time `t`.
    fn surface_par(&self, x: Length, y: Length, t: Time) -> HeatFluxDensity;
}

impl<F> SurfaceForcing for F
where
    F: Fn(Length, Length, Time) -> HeatFluxDensity,
{
    fn surface_par(&self, x: Length, y: Length, t: Time) -> HeatFluxDensity {
        self(x, y, t)
    }
}

/// Horizontally uniform day/night cycle.
///
/// Irradiance follows `peak · max(0, cos(2π t / period))`, peaking at `t = 0`
/// and dark for half of every period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiurnalCycle {
    /// Irradiance at local noon.
    pub peak: HeatFluxDensity,
    /// Length of one day/night cycle.
    pub period: Time,
}

impl Default for DiurnalCycle {
    fn default() -> Self {
        Self {
            peak: HeatFluxDensity::new::<watt_per_square_meter>(100.0),
            period: Time::new::<day>(1.0),
        }
    }
}

impl SurfaceForcing for DiurnalCycle {
    fn surface_par(&self, _x: Length, _y: Length, t: Time) -> HeatFluxDensity {
        let phase = (t / self.period).get::<ratio>();
        self.peak * (TAU * phase).cos().max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::{
        ConstZero,
        si::{length::meter, time::hour},
    };

    #[test]
    fn diurnal_cycle_peaks_at_noon_and_is_dark_at_night() {
        let forcing = DiurnalCycle::default();
        let origin = Length::ZERO;

        let noon = forcing.surface_par(origin, origin, Time::ZERO);
        let evening = forcing.surface_par(origin, origin, Time::new::<hour>(4.0));
        let midnight = forcing.surface_par(origin, origin, Time::new::<hour>(12.0));

        assert_relative_eq!(noon.get::<watt_per_square_meter>(), 100.0);
        assert_relative_eq!(evening.get::<watt_per_square_meter>(), 50.0, epsilon = 1e-9);
        assert_relative_eq!(midnight.get::<watt_per_square_meter>(), 0.0);
    }

    #[test]
    fn closures_are_forcings() {
        let forcing = |x: Length, _y: Length, _t: Time| {
            HeatFluxDensity::new::<watt_per_square_meter>(x.get::<meter>())
        };
        let par = forcing.surface_par(Length::new::<meter>(7.0), Length::ZERO, Time::ZERO);
        assert_relative_eq!(par.get::<watt_per_square_meter>(), 7.0);
    }
}

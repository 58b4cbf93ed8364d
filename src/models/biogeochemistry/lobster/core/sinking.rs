use uom::{
    ConstZero,
    si::{
        f64::{Length, Velocity},
        ratio::ratio,
        velocity::meter_per_second,
    },
};

use crate::support::host::{Field, Location, RectilinearGrid, VelocityFields};

use super::{LobsterError, Tracer};

/// How a tracer drifts relative to the flow.
#[derive(Debug, Clone, PartialEq)]
pub enum SinkingVelocity {
    /// A uniform `(u, v, w)` velocity, `w` negative downward.
    Constant([Velocity; 3]),
    /// Spatially varying velocity fields, used as given.
    Fields(VelocityFields),
}

impl SinkingVelocity {
    /// Uniform vertical sinking at `speed` (positive downward).
    #[must_use]
    pub fn sinking(speed: Velocity) -> Self {
        Self::Constant([Velocity::ZERO, Velocity::ZERO, -speed])
    }

    /// Materialises this velocity on `grid`.
    ///
    /// With a closed bottom, a constant vertical velocity is tapered as
    /// `w · tanh(max(0, (z − z_floor) / smoothing))`, vanishing at the floor.
    pub(crate) fn into_fields(
        self,
        tracer: Tracer,
        grid: &RectilinearGrid,
        open_bottom: bool,
        smoothing: Length,
    ) -> Result<VelocityFields, LobsterError> {
        match self {
            Self::Constant([u, v, w]) => {
                let w = w.get::<meter_per_second>();
                let floor = grid.bottom();
                Ok(VelocityFields {
                    u: Field::constant(grid, Location::XFace, u.get::<meter_per_second>()),
                    v: Field::constant(grid, Location::YFace, v.get::<meter_per_second>()),
                    w: if open_bottom {
                        Field::constant(grid, Location::ZFace, w)
                    } else {
                        Field::from_fn(grid, Location::ZFace, |_, _, z| {
                            let height = ((z - floor) / smoothing).get::<ratio>();
                            w * height.max(0.0).tanh()
                        })
                    },
                })
            }
            Self::Fields(fields) => {
                fields
                    .check_shape(grid)
                    .map_err(|source| LobsterError::VelocityShape { tracer, source })?;
                if !open_bottom {
                    log::warn!(
                        "closed bottom does not taper user-supplied velocity fields for {tracer}"
                    );
                }
                Ok(fields)
            }
        }
    }
}

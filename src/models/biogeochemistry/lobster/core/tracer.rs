use std::{fmt, str::FromStr};

use super::LobsterError;

/// A LOBSTER tracer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tracer {
    /// Nitrate, `NO₃` (mmol N/m³).
    Nitrate,
    /// Ammonia, `NH₄` (mmol N/m³).
    Ammonia,
    /// Phytoplankton, `P` (mmol N/m³).
    Phytoplankton,
    /// Zooplankton, `Z` (mmol N/m³).
    Zooplankton,
    /// Small, slow-sinking detritus, `D` (mmol N/m³).
    SmallDetritus,
    /// Large, fast-sinking detritus, `DD` (mmol N/m³).
    LargeDetritus,
    /// Carbon in small detritus, `Dᶜ` (mmol C/m³).
    SmallDetritalCarbon,
    /// Carbon in large detritus, `DDᶜ` (mmol C/m³).
    LargeDetritalCarbon,
    /// Dissolved organic matter, `DOM` (mmol N/m³).
    DissolvedOrganicMatter,
    /// Dissolved inorganic carbon, `DIC` (mmol C/m³).
    DissolvedInorganicCarbon,
    /// Total alkalinity, `ALK` (meq/m³).
    Alkalinity,
    /// Dissolved oxygen, `OXY` (mmol O/m³).
    Oxygen,
}

impl Tracer {
    /// Number of distinct tracers.
    pub const COUNT: usize = 12;

    /// Every tracer, in canonical order.
    pub const ALL: [Tracer; Self::COUNT] = [
        Tracer::Nitrate,
        Tracer::Ammonia,
        Tracer::Phytoplankton,
        Tracer::Zooplankton,
        Tracer::SmallDetritus,
        Tracer::LargeDetritus,
        Tracer::SmallDetritalCarbon,
        Tracer::LargeDetritalCarbon,
        Tracer::DissolvedOrganicMatter,
        Tracer::DissolvedInorganicCarbon,
        Tracer::Alkalinity,
        Tracer::Oxygen,
    ];

    /// Tracers whose units are mmol N/m³.
    pub const NITROGEN_POOLS: [Tracer; 7] = [
        Tracer::Nitrate,
        Tracer::Ammonia,
        Tracer::Phytoplankton,
        Tracer::Zooplankton,
        Tracer::SmallDetritus,
        Tracer::LargeDetritus,
        Tracer::DissolvedOrganicMatter,
    ];

    /// Returns the name a host uses for this tracer.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Tracer::Nitrate => "NO₃",
            Tracer::Ammonia => "NH₄",
            Tracer::Phytoplankton => "P",
            Tracer::Zooplankton => "Z",
            Tracer::SmallDetritus => "D",
            Tracer::LargeDetritus => "DD",
            Tracer::SmallDetritalCarbon => "Dᶜ",
            Tracer::LargeDetritalCarbon => "DDᶜ",
            Tracer::DissolvedOrganicMatter => "DOM",
            Tracer::DissolvedInorganicCarbon => "DIC",
            Tracer::Alkalinity => "ALK",
            Tracer::Oxygen => "OXY",
        }
    }

    /// Looks up a tracer by its name or ASCII spelling (`NO3`, `NH4`, `Dc`, `DDc`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let ascii = match name {
            "NO3" => Some(Tracer::Nitrate),
            "NH4" => Some(Tracer::Ammonia),
            "Dc" => Some(Tracer::SmallDetritalCarbon),
            "DDc" => Some(Tracer::LargeDetritalCarbon),
            _ => None,
        };
        ascii.or_else(|| Self::ALL.into_iter().find(|tracer| tracer.name() == name))
    }

    /// Returns the tracer whose drift velocity and advection scheme this one shares.
    ///
    /// Detrital carbon moves with the detritus that carries it.
    #[must_use]
    pub const fn drift_source(self) -> Self {
        match self {
            Tracer::SmallDetritalCarbon => Tracer::SmallDetritus,
            Tracer::LargeDetritalCarbon => Tracer::LargeDetritus,
            other => other,
        }
    }

    /// Returns true if this tracer forwards its drift to another tracer.
    #[must_use]
    pub const fn is_drift_alias(self) -> bool {
        matches!(
            self,
            Tracer::SmallDetritalCarbon | Tracer::LargeDetritalCarbon
        )
    }
}

impl fmt::Display for Tracer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tracer {
    type Err = LobsterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| LobsterError::UnknownTracer {
            name: s.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for tracer in Tracer::ALL {
            assert_eq!(Tracer::from_name(tracer.name()), Some(tracer));
        }
        assert_eq!("NO3".parse::<Tracer>().unwrap(), Tracer::Nitrate);
        assert_eq!("DDc".parse::<Tracer>().unwrap(), Tracer::LargeDetritalCarbon);
        assert!("N2O".parse::<Tracer>().is_err());
    }

    #[test]
    fn detrital_carbon_drifts_with_detritus() {
        assert_eq!(
            Tracer::SmallDetritalCarbon.drift_source(),
            Tracer::SmallDetritus
        );
        assert_eq!(
            Tracer::LargeDetritalCarbon.drift_source(),
            Tracer::LargeDetritus
        );
        assert_eq!(Tracer::Phytoplankton.drift_source(), Tracer::Phytoplankton);

        let aliases: Vec<_> = Tracer::ALL.into_iter().filter(|t| t.is_drift_alias()).collect();
        assert_eq!(
            aliases,
            [Tracer::SmallDetritalCarbon, Tracer::LargeDetritalCarbon]
        );
    }
}

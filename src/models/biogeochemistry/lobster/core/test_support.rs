use proptest::prelude::*;

use super::LocalState;

/// A surface cell at the start of a spring bloom.
pub(super) fn surface_bloom() -> LocalState {
    LocalState {
        nitrate: 5.0,
        ammonia: 0.1,
        phytoplankton: 0.1,
        zooplankton: 0.05,
        par: 50.0,
        ..LocalState::default()
    }
}

/// A concentration in mmol/m³, including zero.
pub(super) fn concentration() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), 0.0..20.0_f64]
}

/// An arbitrary non-negative cell state.
pub(super) fn local_state() -> impl Strategy<Value = LocalState> {
    (
        [
            concentration(),
            concentration(),
            concentration(),
            concentration(),
            concentration(),
            concentration(),
        ],
        (concentration(), concentration(), concentration()),
        0.0..500.0_f64,
    )
        .prop_map(|([no3, nh4, p, z, d, dd], (dc, ddc, dom), par)| LocalState {
            nitrate: no3,
            ammonia: nh4,
            phytoplankton: p,
            zooplankton: z,
            small_detritus: d,
            large_detritus: dd,
            small_detrital_carbon: dc,
            large_detrital_carbon: ddc,
            dissolved_organic_matter: dom,
            par,
        })
}

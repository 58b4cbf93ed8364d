/// Transport scheme a host should use for a drifting tracer.
///
/// The scheme is only a selection; the host owns the implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum AdvectionScheme {
    /// Second-order centred differences.
    #[default]
    CenteredSecondOrder,
    /// Fourth-order centred differences.
    CenteredFourthOrder,
    /// Third-order upwind-biased reconstruction.
    UpwindBiasedThirdOrder,
    /// Fifth-order upwind-biased reconstruction.
    UpwindBiasedFifthOrder,
    /// Fifth-order weighted essentially non-oscillatory reconstruction.
    Weno5,
}

use std::cmp::Ordering;

use num_traits::{One, Zero};

use super::{Constrained, Constraint, ConstraintError};

/// Marker for fractions in the closed unit interval `0 ≤ x ≤ 1`.
///
/// ```
/// use bgc_models::support::constraint::{ConstraintError, UnitInterval};
///
/// assert!(UnitInterval::new(0.0).is_ok());
/// assert!(UnitInterval::new(1.0).is_ok());
/// assert_eq!(UnitInterval::new(1.2), Err(ConstraintError::AboveMaximum));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitInterval;

impl UnitInterval {
    /// Constructs `Constrained<T, UnitInterval>` if `0 ≤ value ≤ 1`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: PartialOrd + Zero + One>(
        value: T,
    ) -> Result<Constrained<T, UnitInterval>, ConstraintError> {
        Constrained::<T, UnitInterval>::new(value)
    }
}

impl<T: PartialOrd + Zero + One> Constraint<T> for UnitInterval {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_included() {
        assert!(UnitInterval::new(0.0).is_ok());
        assert!(UnitInterval::new(1.0).is_ok());
        assert_eq!(UnitInterval::new(0.75).unwrap().into_inner(), 0.75);
    }

    #[test]
    fn out_of_range() {
        assert_eq!(UnitInterval::new(-1e-15), Err(ConstraintError::BelowMinimum));
        assert_eq!(
            UnitInterval::new(1.0 + 1e-15),
            Err(ConstraintError::AboveMaximum)
        );
        assert_eq!(
            UnitInterval::new(f64::NEG_INFINITY),
            Err(ConstraintError::BelowMinimum)
        );
        assert_eq!(UnitInterval::new(f64::NAN), Err(ConstraintError::NotANumber));
    }
}

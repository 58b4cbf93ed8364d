use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker for values that are zero or greater, such as rate constants.
///
/// ```
/// use bgc_models::support::constraint::NonNegative;
///
/// assert!(NonNegative::new(5.8e-7).is_ok());
/// assert!(NonNegative::new(0.0).is_ok());
/// assert!(NonNegative::new(-1e-9).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Velocity, velocity::meter_per_second};

    #[test]
    fn rates() {
        let rate = NonNegative::new(9.26e-6).unwrap();
        assert_eq!(rate.as_ref(), &9.26e-6);
        assert_eq!(NonNegative::new(-1.0), Err(ConstraintError::Negative));
        assert_eq!(NonNegative::new(f64::NAN), Err(ConstraintError::NotANumber));
    }

    #[test]
    fn sinking_speeds() {
        assert!(NonNegative::new(Velocity::new::<meter_per_second>(3.47e-5)).is_ok());
        assert!(NonNegative::new(Velocity::new::<meter_per_second>(0.0)).is_ok());
        assert!(NonNegative::new(Velocity::new::<meter_per_second>(-1e-4)).is_err());
    }
}

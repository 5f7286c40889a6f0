use std::{cmp::Ordering, marker::PhantomData, ops::Add};

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Use this type with [`Constrained<T, StrictlyPositive>`] to encode strict
/// positivity at the type level. A zero supply-air flow or a zero game
/// duration would make the energy balance degenerate, so those parameters
/// reject zero outright.
///
/// # Examples
///
/// ```
/// use rink_models::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::VolumeRate, volume_rate::cubic_meter_per_second};
///
/// let supply = StrictlyPositive::new(VolumeRate::new::<cubic_meter_per_second>(362.0)).unwrap();
/// assert_eq!(supply.into_inner().get::<cubic_meter_per_second>(), 362.0);
///
/// // Error cases:
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

/// Adds two `Constrained<T, StrictlyPositive>` values.
///
/// Assumes that summing two positive values yields a positive result.
/// This holds for the numeric types used here (`f64`, `uom::Quantity`).
/// The invariant is checked in debug builds.
///
/// # Panics
///
/// Panics in debug builds if the sum is unexpectedly non-positive.
impl<T> Add for Constrained<T, StrictlyPositive>
where
    T: Add<Output = T> + PartialOrd + Zero,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let value = self.value + rhs.value;
        debug_assert!(
            value > T::zero(),
            "Addition produced a non-positive value, violating StrictlyPositive bound invariant"
        );
        Self {
            value,
            _marker: PhantomData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Area, area::square_meter};

    #[test]
    fn accepts_positive() {
        let sheet = StrictlyPositive::new(Area::new::<square_meter>(1586.0)).unwrap();
        assert_eq!(sheet.into_inner().get::<square_meter>(), 1586.0);
    }

    #[test]
    fn rejects_zero_negative_and_nan() {
        assert_eq!(StrictlyPositive::new(0.0).unwrap_err(), ConstraintError::Zero);
        assert_eq!(
            StrictlyPositive::new(-4.2).unwrap_err(),
            ConstraintError::Negative
        );
        assert_eq!(
            StrictlyPositive::new(f64::NAN).unwrap_err(),
            ConstraintError::NotANumber
        );
    }

    #[test]
    fn addition_stays_positive() {
        let a = StrictlyPositive::new(1.0).unwrap();
        let b = StrictlyPositive::new(2.5).unwrap();
        assert_eq!((a + b).into_inner(), 3.5);
    }
}

use std::{cmp::Ordering, marker::PhantomData};

use uom::si::{f64::Ratio, ratio::ratio};

use super::{Constrained, Constraint, ConstraintError};

/// Supplies 0 and 1 for types used in the closed unit interval `[0, 1]`.
///
/// Implement this trait for a type `T` to use it with
/// `Constrained<T, UnitInterval>`. Implementations should ensure that
/// `zero() ≤ one()` under the type's `PartialOrd` so the interval is
/// well-formed.
pub trait UnitBounds: PartialOrd {
    fn zero() -> Self;
    fn one() -> Self;
}

impl UnitBounds for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
}

impl UnitBounds for Ratio {
    fn zero() -> Self {
        Ratio::new::<ratio>(0.0)
    }
    fn one() -> Self {
        Ratio::new::<ratio>(1.0)
    }
}

/// Marker type enforcing that a value lies in the closed unit interval `0 ≤ x ≤ 1`.
///
/// Relative humidity is the canonical use in this crate: a fraction of the
/// saturation vapor pressure, where both endpoints (perfectly dry air,
/// saturated air) are physically meaningful states.
///
/// # Examples
///
/// ```
/// use rink_models::support::constraint::{Constrained, UnitInterval};
/// use uom::si::{f64::Ratio, ratio::percent};
///
/// // A 35% relative-humidity setpoint.
/// let setpoint = UnitInterval::new(Ratio::new::<percent>(35.0)).unwrap();
/// assert_eq!(setpoint.as_ref().get::<percent>(), 35.0);
///
/// // Both endpoints are valid states.
/// assert!(UnitInterval::new(0.0).is_ok());
/// assert!(UnitInterval::new(1.0).is_ok());
///
/// // Error cases:
/// assert!(UnitInterval::new(-0.0001).is_err());
/// assert!(UnitInterval::new(Ratio::new::<percent>(104.0)).is_err());
/// assert!(UnitInterval::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitInterval;

impl UnitInterval {
    /// Constructs `Constrained<T, UnitInterval>` if `0 ≤ value ≤ 1`.
    ///
    /// # Errors
    ///
    /// Fails if the value is outside the closed unit interval:
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: UnitBounds>(value: T) -> Result<Constrained<T, UnitInterval>, ConstraintError> {
        Constrained::<T, UnitInterval>::new(value)
    }

    /// Returns the lower bound (zero) as a constrained value.
    #[must_use]
    pub fn zero<T: UnitBounds>() -> Constrained<T, UnitInterval> {
        Constrained::<T, UnitInterval> {
            value: T::zero(),
            _marker: PhantomData,
        }
    }

    /// Returns the upper bound (one) as a constrained value.
    #[must_use]
    pub fn one<T: UnitBounds>() -> Constrained<T, UnitInterval> {
        Constrained::<T, UnitInterval> {
            value: T::one(),
            _marker: PhantomData,
        }
    }
}

impl<T: UnitBounds> Constraint<T> for UnitInterval {
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

    use uom::si::ratio::percent;

    #[test]
    fn endpoints_are_valid() {
        assert_eq!(UnitInterval::zero::<f64>().into_inner(), 0.0);
        assert_eq!(UnitInterval::one::<f64>().into_inner(), 1.0);
        assert!(UnitInterval::new(0.0).is_ok());
        assert!(UnitInterval::new(1.0).is_ok());
    }

    #[test]
    fn percent_ratios_convert_to_fractions() {
        let rh = UnitInterval::new(Ratio::new::<percent>(80.0)).unwrap();
        assert_eq!(rh.into_inner().get::<ratio>(), 0.8);
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert_eq!(
            UnitInterval::new(-0.01).unwrap_err(),
            ConstraintError::BelowMinimum
        );
        assert_eq!(
            UnitInterval::new(1.01).unwrap_err(),
            ConstraintError::AboveMaximum
        );
        assert_eq!(
            UnitInterval::new(f64::NAN).unwrap_err(),
            ConstraintError::NotANumber
        );
    }
}

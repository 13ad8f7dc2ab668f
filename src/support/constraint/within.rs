use std::{cmp::Ordering, marker::PhantomData};

use super::{Constrained, Constraint, ConstraintError};

/// Supplies the endpoints of an admissible range.
///
/// Implement this trait on a zero-sized marker type to describe a range,
/// then use the marker with [`Within<B>`] or [`WithinLowerOpen<B>`]:
///
/// ```
/// use uom::si::{f64::Length, length::meter};
/// use rainharvest_models::support::constraint::{RangeBounds, Within};
///
/// struct DepthRange;
///
/// impl RangeBounds<Length> for DepthRange {
///     fn lower() -> Length {
///         Length::new::<meter>(0.0)
///     }
///     fn upper() -> Length {
///         Length::new::<meter>(100.0)
///     }
/// }
///
/// assert!(Within::<DepthRange>::new(Length::new::<meter>(8.5)).is_ok());
/// assert!(Within::<DepthRange>::new(Length::new::<meter>(250.0)).is_err());
/// ```
///
/// Implementations should ensure that `lower() ≤ upper()` under the type's
/// `PartialOrd` so the range is well-formed.
pub trait RangeBounds<T> {
    fn lower() -> T;
    fn upper() -> T;
}

/// Marker type enforcing membership in the closed range `[lower, upper]`.
///
/// The endpoints come from the [`RangeBounds`] implementation of `B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Within<B> {
    _bounds: PhantomData<B>,
}

impl<B> Within<B> {
    /// Constructs a [`Constrained<T, Within<B>>`] if the value lies in `[lower, upper]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is outside the range or not a number (`NaN`).
    pub fn new<T>(value: T) -> Result<Constrained<T, Within<B>>, ConstraintError>
    where
        T: PartialOrd,
        B: RangeBounds<T>,
    {
        Constrained::<T, Within<B>>::new(value)
    }
}

impl<T, B> Constraint<T> for Within<B>
where
    T: PartialOrd,
    B: RangeBounds<T>,
{
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&B::lower()) {
            Some(Ordering::Less) => return Err(ConstraintError::BelowMinimum),
            None => return Err(ConstraintError::NotANumber),
            Some(Ordering::Greater | Ordering::Equal) => {}
        }
        match value.partial_cmp(&B::upper()) {
            Some(Ordering::Greater) => Err(ConstraintError::AboveMaximum),
            None => Err(ConstraintError::NotANumber),
            Some(Ordering::Less | Ordering::Equal) => Ok(()),
        }
    }
}

/// Marker type enforcing membership in the lower-open range `(lower, upper]`.
///
/// Used where the lower endpoint is a degenerate value that must be excluded,
/// such as a runoff coefficient of exactly zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct WithinLowerOpen<B> {
    _bounds: PhantomData<B>,
}

impl<B> WithinLowerOpen<B> {
    /// Constructs a [`Constrained<T, WithinLowerOpen<B>>`] if the value lies in `(lower, upper]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is outside the range or not a number (`NaN`).
    pub fn new<T>(value: T) -> Result<Constrained<T, WithinLowerOpen<B>>, ConstraintError>
    where
        T: PartialOrd,
        B: RangeBounds<T>,
    {
        Constrained::<T, WithinLowerOpen<B>>::new(value)
    }
}

impl<T, B> Constraint<T> for WithinLowerOpen<B>
where
    T: PartialOrd,
    B: RangeBounds<T>,
{
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&B::lower()) {
            Some(Ordering::Less | Ordering::Equal) => return Err(ConstraintError::BelowMinimum),
            None => return Err(ConstraintError::NotANumber),
            Some(Ordering::Greater) => {}
        }
        match value.partial_cmp(&B::upper()) {
            Some(Ordering::Greater) => Err(ConstraintError::AboveMaximum),
            None => Err(ConstraintError::NotANumber),
            Some(Ordering::Less | Ordering::Equal) => Ok(()),
        }
    }
}

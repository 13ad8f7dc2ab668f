//! Type-level numeric constraints with zero runtime cost.
//!
//! Feasibility inputs arrive as bare numbers from forms or upstream data
//! providers. The types here let a constraint like "strictly positive" or
//! "between 0 and 10 000 mm" be checked once, at construction, and then
//! carried in the type so downstream arithmetic never has to re-validate.
//!
//! # Provided constraints
//!
//! - [`NonNegative`]: Zero or greater
//! - [`StrictlyPositive`]: Greater than zero
//! - [`Within<B>`]: Closed range `B::lower() ≤ x ≤ B::upper()`
//! - [`WithinLowerOpen<B>`]: Lower-open range `B::lower() < x ≤ B::upper()`
//!
//! Each marker is used with the generic [`Constrained<T, C>`] wrapper,
//! where `C` is the marker type implementing [`Constraint<T>`].
//!
//! The range markers are parameterized by a [`RangeBounds`] implementation
//! supplying the endpoints, so each model defines its own admissible ranges
//! (rainfall depth, water table depth, system efficiency) as small marker
//! types next to the input they constrain.
//!
//! # Extending
//!
//! You can define custom numeric invariants by implementing [`Constraint<T>`]
//! for your own zero-sized marker types.

mod non_negative;
mod strictly_positive;
mod within;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;
pub use within::{RangeBounds, Within, WithinLowerOpen};

/// A trait for enforcing numeric invariants at construction time.
///
/// Implement this trait for any marker type representing a numeric
/// constraint, such as [`NonNegative`] or [`Within<B>`].
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A wrapper enforcing a numeric constraint at construction time.
///
/// Combine this with one of the provided marker types (such as
/// [`NonNegative`]) or your own [`Constraint<T>`] implementation.
///
/// # Example
///
/// ```
/// use rainharvest_models::support::constraint::{Constrained, StrictlyPositive};
///
/// let n = Constrained::<_, StrictlyPositive>::new(42).unwrap();
/// assert_eq!(n.into_inner(), 42);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Returns a reference to the inner unconstrained value.
impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constrained_preserves_the_inner_value() {
        let x = Constrained::<f64, NonNegative>::new(1.5).unwrap();
        assert_eq!(x.as_ref(), &1.5);
        assert_eq!(x.into_inner(), 1.5);
    }

    #[test]
    fn rejected_values_report_the_violation() {
        let err = Constrained::<f64, StrictlyPositive>::new(-3.0).unwrap_err();
        assert_eq!(err, ConstraintError::Negative);

        let err = Constrained::<f64, NonNegative>::new(f64::NAN).unwrap_err();
        assert_eq!(err, ConstraintError::NotANumber);
    }
}

//! Type-level numeric constraints.
//!
//! This module lets you express numeric constraints like "non-negative" or
//! "strictly positive" at the type level, with zero runtime overhead after
//! construction.
//!
//! # Provided Constraints
//!
//! - [`NonNegative`]: Zero or greater
//! - [`StrictlyPositive`]: Greater than zero
//! - [`AboveOne`]: Greater than one, as required of a ratio of specific heats
//!
//! Each marker can be used with the generic [`Constrained<T, C>`] wrapper,
//! or called directly through [`Constraint::check`] when only validation is
//! needed.
//!
//! # Extending
//!
//! You can define custom numeric invariants by implementing [`Constraint<T>`]
//! for your own zero-sized marker types.

mod above_one;
mod non_negative;
mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;

pub use above_one::AboveOne;
pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;

/// A trait for enforcing numeric invariants at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is not finite")]
    NotFinite,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
}

/// A wrapper enforcing a numeric constraint at construction time.
///
/// # Example
///
/// ```
/// use jetcycle_core::constraint::{Constrained, StrictlyPositive};
///
/// let n = Constrained::<_, StrictlyPositive>::new(42.0).unwrap();
/// assert_eq!(n.into_inner(), 42.0);
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

/// Checks that `value` is finite.
///
/// Every scalar handed to a cycle must be finite, whatever other constraint
/// applies to it.
///
/// # Errors
///
/// Returns [`ConstraintError::NotANumber`] for NaN and
/// [`ConstraintError::NotFinite`] for infinities.
pub fn check_finite(value: f64) -> Result<(), ConstraintError> {
    if value.is_nan() {
        Err(ConstraintError::NotANumber)
    } else if value.is_infinite() {
        Err(ConstraintError::NotFinite)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_values_pass() {
        assert!(check_finite(0.0).is_ok());
        assert!(check_finite(-1.5e300).is_ok());
    }

    #[test]
    fn non_finite_values_fail() {
        assert_eq!(check_finite(f64::NAN), Err(ConstraintError::NotANumber));
        assert_eq!(check_finite(f64::INFINITY), Err(ConstraintError::NotFinite));
        assert_eq!(
            check_finite(f64::NEG_INFINITY),
            Err(ConstraintError::NotFinite)
        );
    }

    #[test]
    fn constrained_exposes_inner_value() {
        let value = Constrained::<f64, NonNegative>::new(3.0).unwrap();
        assert_eq!(value.as_ref(), &3.0);
        assert_eq!(value.into_inner(), 3.0);
    }
}

use std::cmp::Ordering;

use num_traits::One;

use crate::constraint::{Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly greater than one.
///
/// A ratio of specific heats `γ = cp/cv` must satisfy this for the isentropic
/// exponents `(γ-1)/γ` and `γ/(γ-1)` to be defined.
///
/// # Examples
///
/// ```
/// use jetcycle_core::constraint::{AboveOne, Constrained, Constraint};
///
/// assert!(AboveOne::check(&1.4).is_ok());
/// assert!(Constrained::<_, AboveOne>::new(1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AboveOne;

impl<T: PartialOrd + One> Constraint<T> for AboveOne {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::one()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Less | Ordering::Equal) => Err(ConstraintError::BelowMinimum),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

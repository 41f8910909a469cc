//! Guarded arithmetic.
//!
//! Cycle relations raise pressure and temperature ratios to fractional powers
//! and divide by heat-release and thrust terms that can reach zero for
//! non-physical inputs. These helpers replace the result with a finite value
//! in those cases and report that they did so, so a run always completes and
//! the caller can decide whether to trust it.

/// Outcome of a guarded operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Guarded {
    /// The operation was evaluated as written.
    Exact(f64),
    /// The guard replaced the result with a finite substitute.
    Clamped(f64),
}

impl Guarded {
    /// Returns the value, whether exact or clamped.
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Self::Exact(value) | Self::Clamped(value) => value,
        }
    }

    /// Returns `true` if the guard fired.
    #[must_use]
    pub fn is_clamped(self) -> bool {
        matches!(self, Self::Clamped(_))
    }
}

/// Smallest specific thrust, in N/(kg/s), used as a TSFC divisor.
pub const MIN_SPECIFIC_THRUST: f64 = 1e-9;

/// Raises `base` to `exponent`, returning zero for a non-positive base.
///
/// A fractional power of a negative number is NaN, which would otherwise
/// corrupt every downstream station.
#[must_use]
pub fn powf(base: f64, exponent: f64) -> Guarded {
    if base > 0.0 {
        Guarded::Exact(base.powf(exponent))
    } else {
        Guarded::Clamped(0.0)
    }
}

/// Returns `denominator`, or machine epsilon when it is not positive.
#[must_use]
pub fn positive_denominator(denominator: f64) -> Guarded {
    if denominator > 0.0 {
        Guarded::Exact(denominator)
    } else {
        Guarded::Clamped(f64::EPSILON)
    }
}

/// Returns `value`, or `min` when `value` is below it.
#[must_use]
pub fn floor(value: f64, min: f64) -> Guarded {
    if value >= min {
        Guarded::Exact(value)
    } else {
        Guarded::Clamped(min)
    }
}

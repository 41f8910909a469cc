//! Component models for jet engine cycle analysis.
//!
//! Each component is a pure function from upstream stagnation conditions and
//! component data to downstream conditions. Components never fail: where a
//! relation would divide by a non-positive value or raise a non-positive base
//! to a fractional power, the guard from [`jetcycle_thermo::guard`] substitutes
//! a finite value and the result records that it did.

pub mod combustion;
pub mod inlet;
pub mod mixer;
pub mod nozzle;
pub mod turbomachinery;

#[cfg(test)]
pub(crate) mod test_utils;

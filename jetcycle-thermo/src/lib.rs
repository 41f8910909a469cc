//! Thermodynamic relations for jet engine cycle analysis.
//!
//! Gases are modeled as calorically perfect (constant `cp` and `γ`), and flow
//! conditions at each engine station are tracked as stagnation states.

mod stagnation;

pub mod gas;
pub mod guard;
pub mod units;

pub use gas::{GasError, PerfectGas};
pub use guard::Guarded;
pub use stagnation::StagnationState;

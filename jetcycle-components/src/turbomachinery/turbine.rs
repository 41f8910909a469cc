//! Turbine models.

mod types;
mod work_balance;

pub use types::ExpansionResult;
pub use work_balance::work_balance;

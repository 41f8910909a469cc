use jetcycle_thermo::{StagnationState, units::SpecificWork};
use uom::si::f64::ThermodynamicTemperature;

/// Result of a compressor calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressionResult {
    /// Exit stagnation state.
    pub outlet: StagnationState,

    /// Exit temperature of the ideal (isentropic) process.
    pub ideal_temperature: ThermodynamicTemperature,

    /// Specific work absorbed from the shaft.
    ///
    /// Negative only for pressure ratios below one, which the model accepts
    /// without complaint.
    pub work: SpecificWork,

    /// Whether the pressure ratio was non-positive and its power term clamped to zero.
    pub power_base_clamped: bool,
}

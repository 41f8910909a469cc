use jetcycle_thermo::StagnationState;
use uom::si::f64::ThermodynamicTemperature;

/// Result of a turbine calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpansionResult {
    /// Exit stagnation state.
    pub outlet: StagnationState,

    /// Exit temperature of the ideal (isentropic) process.
    pub ideal_temperature: ThermodynamicTemperature,

    /// Whether the heat capacity rate `m·cp` was non-positive and clamped.
    pub mass_flow_clamped: bool,

    /// Whether the ideal temperature ratio was non-positive and its power term clamped.
    pub power_base_clamped: bool,
}

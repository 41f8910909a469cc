//! Shared fixtures for component unit tests.

use jetcycle_thermo::{PerfectGas, StagnationState};
use uom::si::{
    f64::{Pressure, Ratio, SpecificHeatCapacity, ThermodynamicTemperature},
    pressure::pascal,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

/// Air with `γ = 1.4` and `cp = 1005 J/kg·K`.
pub(crate) fn air() -> PerfectGas {
    PerfectGas::new(ratio_of(1.4), cp_of(1005.0)).expect("air properties are valid")
}

/// Combustion products with `γ = 1.333` and `cp = 1148 J/kg·K`.
pub(crate) fn products() -> PerfectGas {
    PerfectGas::new(ratio_of(1.333), cp_of(1148.0)).expect("product properties are valid")
}

pub(crate) fn ratio_of(value: f64) -> Ratio {
    Ratio::new::<ratio>(value)
}

pub(crate) fn cp_of(value: f64) -> SpecificHeatCapacity {
    SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(value)
}

/// Stagnation state from kelvin and pascal.
pub(crate) fn state(t_kelvin: f64, p_pascal: f64) -> StagnationState {
    StagnationState::new(
        ThermodynamicTemperature::new::<kelvin>(t_kelvin),
        Pressure::new::<pascal>(p_pascal),
    )
}

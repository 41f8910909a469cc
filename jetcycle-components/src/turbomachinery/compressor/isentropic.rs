//! Isentropic-efficiency compressor model.
//!
//! Given inlet stagnation conditions, a pressure ratio `π`, and an isentropic
//! efficiency `η`, the model:
//! 1. raises the pressure: `P_out = π·P_in`,
//! 2. computes the ideal exit temperature `T_s = T_in·π^((γ-1)/γ)`,
//! 3. maps to the actual exit temperature `T_out = T_in + (T_s − T_in)/η`,
//! 4. reports the absorbed specific work `w = cp·(T_out − T_in)`.
//!
//! The same model serves as a fan or a core compressor; only the inlet state
//! and the pressure ratio change.

use jetcycle_thermo::{
    PerfectGas, StagnationState,
    units::{SpecificWork, TemperatureOps},
};
use uom::si::{
    f64::{Ratio, ThermodynamicTemperature},
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

use crate::turbomachinery::compressor::CompressionResult;

/// Computes the compressor exit state and absorbed work.
///
/// `eta` must be non-zero; the cycles validate this when building their
/// parameters.
#[must_use]
pub fn isentropic(
    inlet: &StagnationState,
    pressure_ratio: Ratio,
    eta: Ratio,
    gas: &PerfectGas,
) -> CompressionResult {
    let t_in = inlet.temperature.get::<kelvin>();
    let tau = gas.isentropic_temperature_ratio(pressure_ratio);

    let t_ideal = t_in * tau.value();
    let t_out = t_in + (t_ideal - t_in) / eta.get::<ratio>();

    let outlet = inlet
        .with_pressure_ratio(pressure_ratio)
        .with_temperature(ThermodynamicTemperature::new::<kelvin>(t_out));
    let work: SpecificWork = gas.cp() * outlet.temperature.minus(inlet.temperature);

    CompressionResult {
        outlet,
        ideal_temperature: ThermodynamicTemperature::new::<kelvin>(t_ideal),
        work,
        power_base_clamped: tau.is_clamped(),
    }
}

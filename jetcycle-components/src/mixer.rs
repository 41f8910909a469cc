//! Constant-area mixer model.
//!
//! Mixes the bypass stream with the core stream leaving the turbine. The exit
//! temperature follows from a mass-weighted stagnation enthalpy balance, with
//! the mixed flow taking the products' `cp`:
//!
//! ```text
//! T_mix = (m_b·cp_b·T_b + m_c·cp_c·T_c) / ((m_b + m_c)·cp_mix)
//! ```
//!
//! The exit pressure is the bypass pressure times a loss ratio rather than a
//! momentum balance between the two streams.

use jetcycle_thermo::{PerfectGas, StagnationState, guard};
use uom::si::{
    f64::{Ratio, SpecificHeatCapacity, ThermodynamicTemperature},
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

/// One of the streams entering the mixer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixerInlet {
    /// Stagnation state of the stream.
    pub state: StagnationState,

    /// Mass flow per unit of core air.
    pub mass_ratio: Ratio,

    /// Specific heat of the stream.
    pub cp: SpecificHeatCapacity,
}

/// Result of a mixer calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixerResult {
    /// Mixed-out stagnation state.
    pub outlet: StagnationState,

    /// Mixed mass flow per unit of core air.
    pub mass_ratio: Ratio,

    /// Whether the mixed heat capacity rate was non-positive and clamped.
    pub mass_flow_clamped: bool,
}

/// Mixes the bypass and core streams.
#[must_use]
pub fn mix(
    bypass: &MixerInlet,
    core: &MixerInlet,
    products: &PerfectGas,
    pressure_ratio: Ratio,
) -> MixerResult {
    let enthalpy_flow = |stream: &MixerInlet| {
        stream.mass_ratio.get::<ratio>()
            * stream.cp.get::<joule_per_kilogram_kelvin>()
            * stream.state.temperature.get::<kelvin>()
    };

    let mass_ratio = bypass.mass_ratio + core.mass_ratio;
    let heat_capacity_rate = guard::positive_denominator(
        mass_ratio.get::<ratio>() * products.cp().get::<joule_per_kilogram_kelvin>(),
    );
    let t_mix = (enthalpy_flow(bypass) + enthalpy_flow(core)) / heat_capacity_rate.value();

    MixerResult {
        outlet: bypass
            .state
            .with_temperature(ThermodynamicTemperature::new::<kelvin>(t_mix))
            .with_pressure_ratio(pressure_ratio),
        mass_ratio,
        mass_flow_clamped: heat_capacity_rate.is_clamped(),
    }
}

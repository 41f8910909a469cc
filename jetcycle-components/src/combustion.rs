//! Burner model, shared by the main combustor and the afterburner.
//!
//! A burner raises the flow to a fixed exit temperature (a design limit) and
//! reports the fuel it needs per unit mass of the stream entering it:
//!
//! ```text
//! f = (cp_out·T_exit − cp_in·T_in) / (η·Q − cp_out·T_exit)
//! ```
//!
//! The denominator is the heat the fuel can release beyond what it takes to
//! bring itself to `T_exit`. When it is not positive the fuel cannot reach the
//! requested temperature at all; the denominator is then clamped to machine
//! epsilon so a finite (if meaningless) fuel-air ratio is still produced.

use jetcycle_thermo::{PerfectGas, StagnationState, guard};
use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{AvailableEnergy, Ratio, SpecificHeatCapacity, ThermodynamicTemperature},
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

/// Burner design data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Burner {
    /// Exit stagnation temperature the burner is operated to.
    pub exit_temperature: ThermodynamicTemperature,

    /// Combustion efficiency.
    pub efficiency: Ratio,

    /// Stagnation pressure ratio across the burner.
    pub pressure_ratio: Ratio,

    /// Lower heating value of the fuel.
    pub heating_value: AvailableEnergy,
}

/// Result of a burner calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombustionResult {
    /// Exit stagnation state.
    pub outlet: StagnationState,

    /// Fuel mass per unit mass of the entering stream.
    pub fuel_air_ratio: Ratio,

    /// Whether the heat-release denominator was non-positive and clamped.
    pub denominator_clamped: bool,
}

/// Computes the burner exit state and fuel-air ratio.
///
/// `inlet_cp` is the specific heat of the entering stream: air for the main
/// combustor, combustion products for the afterburner. The exit stream is
/// always `products`.
#[must_use]
pub fn burn(
    inlet: &StagnationState,
    inlet_cp: SpecificHeatCapacity,
    products: &PerfectGas,
    burner: &Burner,
) -> CombustionResult {
    let t_in = inlet.temperature.get::<kelvin>();
    let t_exit = burner.exit_temperature.get::<kelvin>();
    let cp_in = inlet_cp.get::<joule_per_kilogram_kelvin>();
    let cp_out = products.cp().get::<joule_per_kilogram_kelvin>();
    let heat_release = burner.efficiency.get::<ratio>()
        * burner.heating_value.get::<joule_per_kilogram>();

    let denominator = guard::positive_denominator(heat_release - cp_out * t_exit);
    let fuel_air_ratio = (cp_out * t_exit - cp_in * t_in) / denominator.value();

    CombustionResult {
        outlet: inlet
            .with_temperature(burner.exit_temperature)
            .with_pressure_ratio(burner.pressure_ratio),
        fuel_air_ratio: Ratio::new::<ratio>(fuel_air_ratio),
        denominator_clamped: denominator.is_clamped(),
    }
}

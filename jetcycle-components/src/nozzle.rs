//! Convergent-divergent nozzle model.
//!
//! Expands the flow to ambient pressure. The stagnation state is carried to
//! the exit unchanged except that the exit stagnation pressure is floored at
//! ambient, so a nozzle fed below ambient produces zero jet velocity instead
//! of a NaN:
//!
//! ```text
//! P_t9 = max(P_t7, P0)
//! T_9s = T_t7·(P0/P_t9)^((γ-1)/γ)
//! T_9  = T_t7 − η·(T_t7 − T_9s)
//! V9   = sqrt(2·cp·(T_t7 − T_9))
//! ```

use jetcycle_thermo::{PerfectGas, StagnationState};
use uom::si::{
    f64::{Pressure, Ratio, ThermodynamicTemperature, Velocity},
    pressure::pascal,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

/// Result of a nozzle calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NozzleResult {
    /// Exit stagnation state (station 9).
    pub outlet: StagnationState,

    /// Static exit temperature of the ideal (isentropic) expansion.
    pub ideal_exit_temperature: ThermodynamicTemperature,

    /// Static exit temperature.
    pub exit_temperature: ThermodynamicTemperature,

    /// Jet velocity at the exit plane.
    pub exit_velocity: Velocity,

    /// Whether the inlet stagnation pressure was below ambient and floored.
    pub pressure_floored: bool,

    /// Whether the expansion power term was clamped.
    pub power_base_clamped: bool,
}

/// Expands the flow to `ambient_pressure` with nozzle efficiency `eta`.
#[must_use]
pub fn expand(
    inlet: &StagnationState,
    ambient_pressure: Pressure,
    eta: Ratio,
    gas: &PerfectGas,
) -> NozzleResult {
    let pressure_floored = inlet.pressure < ambient_pressure;
    let outlet = if pressure_floored {
        inlet.with_pressure(ambient_pressure)
    } else {
        *inlet
    };

    let t_t = outlet.temperature.get::<kelvin>();
    let p_ratio = ambient_pressure.get::<pascal>() / outlet.pressure.get::<pascal>();
    let tau = gas.isentropic_temperature_ratio(Ratio::new::<ratio>(p_ratio));

    let t_ideal = t_t * tau.value();
    let t_exit = t_t - eta.get::<ratio>() * (t_t - t_ideal);
    let cp = gas.cp().get::<joule_per_kilogram_kelvin>();

    NozzleResult {
        outlet,
        ideal_exit_temperature: ThermodynamicTemperature::new::<kelvin>(t_ideal),
        exit_temperature: ThermodynamicTemperature::new::<kelvin>(t_exit),
        exit_velocity: Velocity::new::<meter_per_second>((2.0 * cp * (t_t - t_exit)).sqrt()),
        pressure_floored,
        power_base_clamped: tau.is_clamped(),
    }
}

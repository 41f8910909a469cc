//! Reduction of exit conditions to specific thrust and fuel consumption.
//!
//! Both engines track mass flows relative to 1 kg/s of core air. The reducer
//! normalizes thrust and fuel by the total inlet air (core plus bypass):
//!
//! ```text
//! F_s  = (m_exit·V9 − m_air·V0) / m_air
//! f_o  = m_fuel / m_air
//! TSFC = f_o / max(F_s, ε)
//! ```

use jetcycle_thermo::{
    guard::{self, MIN_SPECIFIC_THRUST},
    units::{SpecificThrust, ThrustSpecificFuelConsumption},
};
use uom::si::{
    f64::{Force, MassRate, Ratio, Velocity},
    force::newton,
    mass_rate::kilogram_per_second,
    ratio::ratio,
    velocity::meter_per_second,
};

/// Mass flows per unit core air.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassFlows {
    /// Air entering the engine, core plus bypass.
    pub inlet_air: Ratio,
    /// Fuel added by every burner.
    pub fuel: Ratio,
    /// Flow leaving the nozzle.
    pub exit: Ratio,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Performance {
    /// Net thrust per unit inlet air mass flow.
    pub specific_thrust: SpecificThrust,
    /// Fuel per unit inlet air.
    pub overall_fuel_air_ratio: Ratio,
    pub tsfc: ThrustSpecificFuelConsumption,
    /// Whether specific thrust was at or below [`MIN_SPECIFIC_THRUST`].
    pub thrust_floored: bool,
}

/// Reduces mass flows and velocities to performance figures.
///
/// `inlet_air` must be positive; both engines guarantee at least the core
/// flow of one.
#[must_use]
pub fn reduce(flows: &MassFlows, flight_velocity: Velocity, exit_velocity: Velocity) -> Performance {
    let inlet_air = flows.inlet_air.get::<ratio>();
    let exit = flows.exit.get::<ratio>();

    let specific_thrust = (exit_velocity * exit - flight_velocity * inlet_air) / inlet_air;
    let overall_fuel_air_ratio = flows.fuel / inlet_air;

    let thrust = guard::floor(specific_thrust.get::<meter_per_second>(), MIN_SPECIFIC_THRUST);
    let tsfc = MassRate::new::<kilogram_per_second>(overall_fuel_air_ratio.get::<ratio>())
        / Force::new::<newton>(thrust.value());

    Performance {
        specific_thrust,
        overall_fuel_air_ratio,
        tsfc,
        thrust_floored: thrust.is_clamped(),
    }
}

//! Inlet (diffuser) model.
//!
//! Converts the free-stream flight condition into stagnation conditions at
//! station 0 and at the inlet exit, station 2. The diffuser is adiabatic, so
//! only a pressure recovery loss is applied: `T_t2 = T_t0`, `P_t2 = η·P_t0`.

use jetcycle_thermo::{PerfectGas, StagnationState, units::SpecificGasConstant};
use uom::si::{
    f64::{Pressure, Ratio, ThermodynamicTemperature, Velocity},
    pressure::pascal,
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

/// Static free-stream conditions and flight Mach number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightCondition {
    pub mach: Ratio,
    pub ambient_temperature: ThermodynamicTemperature,
    pub ambient_pressure: Pressure,
}

/// Result of an inlet calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InletResult {
    /// Flight velocity `V0 = M0·sqrt(γ·R·T0)`.
    pub flight_velocity: Velocity,

    /// Free-stream stagnation state (station 0).
    pub freestream: StagnationState,

    /// Inlet exit stagnation state (station 2).
    pub outlet: StagnationState,
}

/// Computes free-stream and inlet-exit stagnation conditions.
///
/// `pressure_recovery` is the inlet efficiency, applied as `P_t2 = η·P_t0`.
#[must_use]
pub fn diffuse(
    flight: &FlightCondition,
    air: &PerfectGas,
    gas_constant: SpecificGasConstant,
    pressure_recovery: Ratio,
) -> InletResult {
    let mach = flight.mach.get::<ratio>();
    let t0 = flight.ambient_temperature.get::<kelvin>();
    let p0 = flight.ambient_pressure.get::<pascal>();

    let flight_velocity = air.speed_of_sound(flight.ambient_temperature, gas_constant) * mach;

    // `1 + (γ-1)/2·M²` is at least one, so the power base is never clamped.
    let temperature_ratio = air.stagnation_temperature_ratio(flight.mach);
    let pressure_ratio = air.isentropic_pressure_ratio(temperature_ratio);

    let freestream = StagnationState::new(
        ThermodynamicTemperature::new::<kelvin>(t0 * temperature_ratio.get::<ratio>()),
        Pressure::new::<pascal>(p0 * pressure_ratio.value()),
    );
    let outlet = freestream.with_pressure_ratio(pressure_recovery);

    InletResult {
        flight_velocity,
        freestream,
        outlet,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{specific_heat_capacity::joule_per_kilogram_kelvin, velocity::meter_per_second};

    use crate::test_utils::{air, ratio_of};

    fn flight(mach: f64) -> FlightCondition {
        FlightCondition {
            mach: ratio_of(mach),
            ambient_temperature: ThermodynamicTemperature::new::<kelvin>(216.7),
            ambient_pressure: Pressure::new::<pascal>(22_632.0),
        }
    }

    fn r_air() -> SpecificGasConstant {
        SpecificGasConstant::new::<joule_per_kilogram_kelvin>(287.0)
    }

    #[test]
    fn static_engine_sees_ambient_conditions() {
        let result = diffuse(&flight(0.0), &air(), r_air(), ratio_of(0.98));

        assert_relative_eq!(result.flight_velocity.get::<meter_per_second>(), 0.0);
        assert_relative_eq!(result.freestream.temperature.get::<kelvin>(), 216.7);
        assert_relative_eq!(result.outlet.temperature.get::<kelvin>(), 216.7);
        assert_relative_eq!(result.freestream.pressure.get::<pascal>(), 22_632.0);
        assert_relative_eq!(result.outlet.pressure.get::<pascal>(), 0.98 * 22_632.0);
    }

    #[test]
    fn cruise_ram_compression() {
        let result = diffuse(&flight(0.85), &air(), r_air(), ratio_of(0.98));

        let v0 = 0.85 * (1.4 * 287.0 * 216.7_f64).sqrt();
        let tt0 = 216.7 * (1.0 + 0.2 * 0.85 * 0.85);
        let pt0 = 22_632.0 * (tt0 / 216.7_f64).powf(3.5);

        assert_relative_eq!(
            result.flight_velocity.get::<meter_per_second>(),
            v0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            result.freestream.temperature.get::<kelvin>(),
            tt0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            result.outlet.temperature.get::<kelvin>(),
            tt0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            result.outlet.pressure.get::<pascal>(),
            0.98 * pt0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn ram_pressure_never_below_ambient() {
        for mach in [0.0, 0.5, 2.0, 5.0] {
            let result = diffuse(&flight(mach), &air(), r_air(), ratio_of(1.0));
            assert!(result.freestream.temperature.get::<kelvin>() >= 216.7);
            assert!(result.freestream.pressure.get::<pascal>() >= 22_632.0);
            assert_eq!(result.outlet, result.freestream);
        }
    }
}

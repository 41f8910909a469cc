//! Shared fixtures for cycle unit tests.

use jetcycle_thermo::{StagnationState, units::SpecificGasConstant};
use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{AvailableEnergy, Pressure, Ratio, SpecificHeatCapacity, ThermodynamicTemperature},
    pressure::pascal,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::ParametersBuilder;

pub(crate) fn ratio_of(value: f64) -> Ratio {
    Ratio::new::<ratio>(value)
}

pub(crate) fn kelvin_of(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<kelvin>(value)
}

pub(crate) fn state(t_kelvin: f64, p_pascal: f64) -> StagnationState {
    StagnationState::new(kelvin_of(t_kelvin), Pressure::new::<pascal>(p_pascal))
}

/// Afterburning design point at Mach 0.85 and 11 km altitude.
pub(crate) fn design_point() -> ParametersBuilder {
    ParametersBuilder::new()
        .gamma_air(ratio_of(1.4))
        .gamma_gas(ratio_of(1.333))
        .cp_air(SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1005.0))
        .cp_gas(SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1148.0))
        .r_air(SpecificGasConstant::new::<joule_per_kilogram_kelvin>(287.0))
        .fuel_heating_value(AvailableEnergy::new::<joule_per_kilogram>(43.1e6))
        .mach(ratio_of(0.85))
        .ambient_temperature(kelvin_of(216.7))
        .ambient_pressure(Pressure::new::<pascal>(22_632.0))
        .eta_inlet(ratio_of(0.98))
        .eta_compressor(ratio_of(0.90))
        .eta_fan(ratio_of(0.92))
        .eta_combustor(ratio_of(0.99))
        .eta_turbine(ratio_of(0.92))
        .eta_afterburner(ratio_of(0.97))
        .eta_nozzle(ratio_of(0.98))
        .pi_combustor(ratio_of(0.96))
        .pi_afterburner(ratio_of(0.94))
        .pi_mixer(ratio_of(0.98))
        .turbine_inlet_temperature(kelvin_of(1700.0))
        .afterburner_exit_temperature(kelvin_of(2000.0))
        .turbojet_compressor_pressure_ratio(ratio_of(30.0))
        .bypass_ratio(ratio_of(1.0))
        .fan_pressure_ratio(ratio_of(3.5))
        .turbofan_compressor_pressure_ratio(ratio_of(10.0))
}
